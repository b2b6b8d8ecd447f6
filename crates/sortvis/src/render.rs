//! Plain-text bar rendering.
//!
//! Each element is drawn as a horizontal bar whose length is
//! proportional to its value: `value * BAR_UNITS_PER_VALUE` length units,
//! `units_per_cell` units per character cell (rounded up, so every
//! positive value shows at least one cell).

use std::fmt::Write;

use smallvec::SmallVec;
use sortvis_core::{DisplaySurface, LaneId, Layout, RunId, RunMode, Snapshot};

/// Length units per unit of value.
pub const BAR_UNITS_PER_VALUE: u32 = 2;

const DEFAULT_UNITS_PER_CELL: u32 = 4;
const BAR_CHAR: char = '█';

/// A [`DisplaySurface`] that keeps the latest snapshot per lane and
/// renders it as text.
#[derive(Clone, Debug)]
pub struct BarChart {
    units_per_cell: u32,
    lanes: [Option<Snapshot>; 2],
    titles: [Option<String>; 2],
    frames: u64,
}

impl Default for BarChart {
    fn default() -> Self {
        Self::new(DEFAULT_UNITS_PER_CELL)
    }
}

impl BarChart {
    /// Chart with `units_per_cell` length units per character (min 1).
    pub fn new(units_per_cell: u32) -> Self {
        Self {
            units_per_cell: units_per_cell.max(1),
            lanes: [None, None],
            titles: [None, None],
            frames: 0,
        }
    }

    /// Character cells used to draw `value`.
    pub fn bar_len(&self, value: u32) -> usize {
        let units = value.saturating_mul(BAR_UNITS_PER_VALUE);
        units.div_ceil(self.units_per_cell) as usize
    }

    /// What `lane` currently shows.
    pub fn lane(&self, lane: LaneId) -> Option<&Snapshot> {
        self.lanes[lane.index()].as_ref()
    }

    /// Publications received so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Render one lane: an optional title line, then one bar per element.
    pub fn render_lane(&self, lane: LaneId) -> String {
        let mut out = String::new();
        if let Some(title) = &self.titles[lane.index()] {
            let _ = writeln!(out, "{title}");
        }
        if let Some(snapshot) = &self.lanes[lane.index()] {
            let width = snapshot.iter().max().map_or(1, |m| m.to_string().len());
            for &value in snapshot.iter() {
                let bar: String = std::iter::repeat_n(BAR_CHAR, self.bar_len(value)).collect();
                let _ = writeln!(out, "{value:>width$} {bar}");
            }
        }
        out
    }

    /// Render every lane that has something to show, A first.
    pub fn render(&self) -> String {
        let parts: SmallVec<[String; 2]> = LaneId::BOTH
            .into_iter()
            .filter(|l| self.lanes[l.index()].is_some() || self.titles[l.index()].is_some())
            .map(|l| self.render_lane(l))
            .collect();
        parts.join("\n")
    }
}

impl DisplaySurface for BarChart {
    fn publish(&mut self, lane: LaneId, snapshot: &Snapshot) {
        self.lanes[lane.index()] = Some(snapshot.clone());
        self.frames += 1;
    }

    fn run_started(&mut self, _run: RunId, mode: RunMode) {
        for lane in LaneId::BOTH {
            self.titles[lane.index()] = mode.algorithm(lane).map(|a| format!("{a} Sort"));
        }
        if mode.lane_count() == 1 {
            self.lanes[LaneId::B.index()] = None;
        }
    }

    fn layout_changed(&mut self, layout: Layout) {
        for lane in LaneId::BOTH {
            self.titles[lane.index()] = layout.algorithm(lane).map(|a| format!("{a} Sort"));
        }
        if layout.lane_count() == 1 {
            self.lanes[LaneId::B.index()] = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sortvis_core::AlgorithmId;

    #[test]
    fn bar_length_scales_value_by_two() {
        let chart = BarChart::new(1);
        assert_eq!(chart.bar_len(5), 10);
        assert_eq!(chart.bar_len(104), 208);
        let coarse = BarChart::new(4);
        assert_eq!(coarse.bar_len(5), 3);
        assert_eq!(coarse.bar_len(1), 1);
        assert_eq!(coarse.bar_len(0), 0);
    }

    #[test]
    fn zero_units_per_cell_is_clamped() {
        assert_eq!(BarChart::new(0).bar_len(3), 6);
    }

    #[test]
    fn publish_replaces_lane_contents() {
        let mut chart = BarChart::new(2);
        chart.publish(LaneId::A, &Snapshot::new(&[3, 1]));
        chart.publish(LaneId::A, &Snapshot::new(&[1, 3]));
        assert_eq!(chart.lane(LaneId::A).unwrap(), &[1, 3]);
        assert_eq!(chart.frames(), 2);
        assert_eq!(chart.render(), "1 █\n3 ███\n");
    }

    #[test]
    fn titles_follow_run_mode() {
        let mut chart = BarChart::new(8);
        chart.run_started(
            RunId(1),
            RunMode::Compare {
                a: AlgorithmId::Bubble,
                b: AlgorithmId::Insertion,
            },
        );
        chart.publish(LaneId::A, &Snapshot::new(&[4]));
        chart.publish(LaneId::B, &Snapshot::new(&[4]));
        let text = chart.render();
        assert!(text.starts_with("Bubble Sort\n4 █\n"));
        assert!(text.contains("\nInsertion Sort\n4 █\n"));

        chart.run_started(RunId(2), RunMode::Single(AlgorithmId::Selection));
        assert!(chart.lane(LaneId::B).is_none());
        assert!(chart.render().starts_with("Selection Sort\n"));
        assert!(!chart.render().contains("Insertion"));
    }

    #[test]
    fn single_layout_drops_lane_b_and_titles() {
        let mut chart = BarChart::new(8);
        chart.layout_changed(Layout::Compare {
            a: AlgorithmId::Insertion,
            b: AlgorithmId::Selection,
        });
        chart.publish(LaneId::A, &Snapshot::new(&[4]));
        chart.publish(LaneId::B, &Snapshot::new(&[4]));
        assert!(chart.render().starts_with("Insertion Sort\n"));

        chart.layout_changed(Layout::Single);
        assert!(chart.lane(LaneId::B).is_none());
        assert_eq!(chart.render(), "4 █\n");
    }

    #[test]
    fn values_are_right_aligned() {
        let mut chart = BarChart::new(100);
        chart.publish(LaneId::A, &Snapshot::new(&[5, 104]));
        assert_eq!(chart.render_lane(LaneId::A), "  5 █\n104 ███\n");
    }
}
