//! sortvis terminal demo: animate a sort (or a comparison) in place.
//!
//! Demonstrates:
//!   1. Building a VisualizerConfig and Visualizer
//!   2. Wrapping BarChart in a surface that redraws the terminal
//!   3. Single-lane and comparison runs
//!   4. Changing speed from another thread through a ControlHandle
//!
//! Run with:
//!   cargo run --example terminal                       # Bubble vs Insertion
//!   cargo run --example terminal -- selection          # single lane
//!   cargo run --example terminal -- bubble selection 100

use std::io::Write;
use std::thread;
use std::time::Duration;

use sortvis::prelude::*;

// ─── Surface: BarChart + terminal redraw ────────────────────────

struct Terminal {
    chart: BarChart,
}

impl Terminal {
    fn draw(&self) {
        let mut out = std::io::stdout().lock();
        // Clear screen and home the cursor, then draw the full frame.
        let _ = write!(out, "\x1b[2J\x1b[H{}", self.chart.render());
        let _ = out.flush();
    }
}

impl DisplaySurface for Terminal {
    fn publish(&mut self, lane: LaneId, snapshot: &Snapshot) {
        self.chart.publish(lane, snapshot);
        self.draw();
    }

    fn run_started(&mut self, run: RunId, mode: RunMode) {
        self.chart.run_started(run, mode);
    }

    fn layout_changed(&mut self, layout: Layout) {
        self.chart.layout_changed(layout);
    }
}

fn parse_args() -> Result<(Vec<AlgorithmId>, u64), String> {
    let mut algorithms = Vec::new();
    let mut delay_ms = 100;
    for arg in std::env::args().skip(1) {
        if let Ok(ms) = arg.parse::<u64>() {
            delay_ms = ms;
        } else {
            algorithms.push(arg.parse::<AlgorithmId>().map_err(|e| e.to_string())?);
        }
    }
    if algorithms.is_empty() {
        algorithms = vec![AlgorithmId::Bubble, AlgorithmId::Insertion];
    }
    if algorithms.len() > 2 {
        return Err("at most two algorithms".into());
    }
    Ok((algorithms, delay_ms))
}

fn main() {
    let (algorithms, delay_ms) = match parse_args() {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let config = VisualizerConfig {
        seed: 2024,
        delay_ms: Delay::saturating_from_ms(delay_ms).as_millis(),
        compare_mode: algorithms.len() == 2,
        lane_a: algorithms[0],
        lane_b: algorithms.get(1).copied().unwrap_or(AlgorithmId::Insertion),
        ..Default::default()
    };
    let surface = Terminal {
        chart: BarChart::default(),
    };
    let mut vis = match Visualizer::new(config, surface, ThreadSleeper) {
        Ok(vis) => vis,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    // Halfway through, a "slider" on another thread speeds playback up.
    let controls = vis.controls();
    let slider = thread::spawn(move || {
        thread::sleep(Duration::from_secs(3));
        let _ = controls.send(Control::SetSpeed(Delay::MIN_MS));
    });

    let report = if vis.compare_mode() {
        vis.run_comparison()
    } else {
        vis.run(algorithms[0])
    };
    let _ = slider.join();

    match report {
        Ok(report) => {
            println!();
            println!("run {} finished: {}", report.run_id, report.metrics.mode);
            for (lane, steps) in &report.metrics.lane_steps {
                println!("  lane {lane}: {steps} steps");
            }
            println!(
                "  {} cycles, {} ms waited, {} speed change(s)",
                report.metrics.cycles,
                report.metrics.waited.as_millis(),
                report.metrics.speed_changes
            );
        }
        Err(e) => eprintln!("run refused: {e}"),
    }
}
