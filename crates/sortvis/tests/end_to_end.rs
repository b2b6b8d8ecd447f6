//! End-to-end: visualizer + BarChart through the facade prelude.

use sortvis::prelude::*;
use sortvis_test_utils::{reversed, RecordingSleeper};

fn chart_visualizer(compare_mode: bool) -> Visualizer<BarChart, RecordingSleeper> {
    let config = VisualizerConfig {
        compare_mode,
        seed: 31,
        ..Default::default()
    };
    Visualizer::new(config, BarChart::new(1), RecordingSleeper::new()).unwrap()
}

#[test]
fn single_run_leaves_sorted_bars() {
    let mut vis = chart_visualizer(false);
    vis.load_array(reversed(6));
    let report = vis.run(AlgorithmId::Insertion).unwrap();

    // 15 inversions + 5 placements.
    assert_eq!(report.metrics.steps(LaneId::A), 20);
    let shown = vis.display().lane(LaneId::A).unwrap();
    assert_eq!(shown, &[1, 2, 3, 4, 5, 6]);
    let text = vis.display().render();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "Insertion Sort");
    assert_eq!(lines[1], "1 ██");
    assert_eq!(lines[6], "6 ████████████");
}

#[test]
fn comparison_renders_both_lanes() {
    let mut vis = chart_visualizer(true);
    vis.select_lane(LaneId::A, AlgorithmId::Selection);
    vis.select_lane(LaneId::B, AlgorithmId::Bubble);
    let report = vis.run_comparison().unwrap();

    assert_eq!(report.finals.len(), 2);
    for (_, snapshot) in &report.finals {
        assert!(snapshot.is_sorted());
    }
    let text = vis.display().render();
    assert!(text.starts_with("Selection Sort\n"));
    assert!(text.contains("\nBubble Sort\n"));
    // Both lanes sorted from the same input: identical bars.
    assert_eq!(vis.display().lane(LaneId::A), vis.display().lane(LaneId::B));
}

#[test]
fn closed_form_counts_predict_playback() {
    let mut vis = chart_visualizer(false);
    for algo in AlgorithmId::ALL {
        vis.reset();
        let expected = expected_step_count(algo, vis.array()) as u64;
        let report = vis.run(algo).unwrap();
        assert_eq!(report.metrics.steps(LaneId::A), expected, "{algo}");
        assert_eq!(report.metrics.cycles, expected, "{algo}");
    }
}

#[test]
fn leaving_comparison_mode_drops_lane_b_and_titles() {
    let mut vis = chart_visualizer(true);
    vis.run_comparison().unwrap();
    assert!(vis.display().render().contains("Insertion Sort"));

    assert!(vis.toggle_mode().accepted);
    vis.reset();

    let chart = vis.display();
    assert!(chart.lane(LaneId::B).is_none());
    let text = chart.render();
    assert!(!text.contains("Sort"));
    assert_eq!(text.lines().count(), vis.array().len());
}

#[test]
fn lane_titles_follow_selection_before_any_run() {
    let mut vis = chart_visualizer(true);
    assert!(vis.display().render().starts_with("Bubble Sort\n"));

    vis.run_comparison().unwrap();
    assert!(vis.select_lane(LaneId::A, AlgorithmId::Selection).accepted);
    vis.reset();

    let text = vis.display().render();
    assert!(text.starts_with("Selection Sort\n"));
    assert!(text.contains("\nInsertion Sort\n"));
    assert_eq!(
        vis.layout(),
        Layout::Compare {
            a: AlgorithmId::Selection,
            b: AlgorithmId::Insertion
        }
    );
}
