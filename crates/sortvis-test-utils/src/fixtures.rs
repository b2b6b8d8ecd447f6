//! Canned input arrays shared by producer and playback tests.

/// Array length used by the reference scenario.
pub const REFERENCE_LEN: usize = 20;

/// Bubble scenario input: 10 snapshots, final `[1, 2, 7, 8, 9]`.
pub fn bubble_scenario() -> Vec<u32> {
    vec![9, 1, 8, 2, 7]
}

/// Selection scenario input: final `[1, 2, 3, 4]`.
pub fn selection_scenario() -> Vec<u32> {
    vec![4, 3, 2, 1]
}

/// Input for the hand-traced insertion sequence.
pub fn insertion_trace_input() -> Vec<u32> {
    vec![5, 3, 4, 1, 2]
}

/// `n, n-1, ..., 1`: worst case for every producer.
pub fn reversed(n: u32) -> Vec<u32> {
    (1..=n).rev().collect()
}
