//! Closed-form snapshot counts.
//!
//! Used to size progress displays before a run starts, and checked
//! against the producers in tests.

use sortvis_core::AlgorithmId;

/// Number of snapshots `algorithm` will emit for `input`.
///
/// - Bubble: `n * (n - 1) / 2`, independent of the values.
/// - Insertion: one per inversion (each shift removes exactly one) plus
///   `n - 1` placements.
/// - Selection: `n * (n - 1) / 2` comparisons plus one per swap; the
///   swaps are found by running the minimum scan without emitting.
pub fn expected_step_count(algorithm: AlgorithmId, input: &[u32]) -> usize {
    let n = input.len();
    let comparisons = n * n.saturating_sub(1) / 2;
    match algorithm {
        AlgorithmId::Bubble => comparisons,
        AlgorithmId::Insertion => inversions(input) + n.saturating_sub(1),
        AlgorithmId::Selection => comparisons + selection_swaps(input),
    }
}

fn inversions(input: &[u32]) -> usize {
    input
        .iter()
        .enumerate()
        .map(|(i, &a)| input[i + 1..].iter().filter(|&&b| a > b).count())
        .sum()
}

fn selection_swaps(input: &[u32]) -> usize {
    let mut arr = input.to_vec();
    let mut swaps = 0;
    for i in 0..arr.len() {
        let mut min = i;
        for j in i + 1..arr.len() {
            if arr[j] < arr[min] {
                min = j;
            }
        }
        if min != i {
            arr.swap(i, min);
            swaps += 1;
        }
    }
    swaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_counts() {
        assert_eq!(expected_step_count(AlgorithmId::Bubble, &[9, 1, 8, 2, 7]), 10);
        assert_eq!(
            expected_step_count(AlgorithmId::Insertion, &[5, 3, 4, 1, 2]),
            12
        );
        assert_eq!(expected_step_count(AlgorithmId::Selection, &[4, 3, 2, 1]), 8);
    }

    #[test]
    fn trivial_inputs_count_zero() {
        for algo in AlgorithmId::ALL {
            assert_eq!(expected_step_count(algo, &[]), 0);
            assert_eq!(expected_step_count(algo, &[3]), 0);
        }
    }

    #[test]
    fn inversions_ignore_ties() {
        assert_eq!(inversions(&[2, 2, 1]), 2);
        assert_eq!(inversions(&[1, 1, 1]), 0);
    }
}
