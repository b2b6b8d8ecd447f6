//! Bubble sort as a snapshot producer.

use std::iter::FusedIterator;

use sortvis_core::Snapshot;

/// Yields one snapshot per adjacent comparison.
///
/// Pass `i` compares `(j, j + 1)` for `j in 0..n - i - 1`, swapping when
/// the left value is strictly greater. The snapshot is emitted whether
/// or not the pair was swapped, so the sequence length is always
/// `n * (n - 1) / 2`.
#[derive(Clone, Debug)]
pub struct BubbleSteps {
    arr: Vec<u32>,
    pass: usize,
    j: usize,
    emitted: u64,
}

impl BubbleSteps {
    /// Take ownership of the working array.
    pub fn new(arr: Vec<u32>) -> Self {
        Self {
            arr,
            pass: 0,
            j: 0,
            emitted: 0,
        }
    }

    /// Snapshots produced so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Current contents of the working array.
    pub fn working(&self) -> &[u32] {
        &self.arr
    }

    fn remaining(&self) -> usize {
        let n = self.arr.len();
        if self.pass >= n {
            return 0;
        }
        // Rest of the current pass, then full later passes.
        let current = (n - self.pass - 1).saturating_sub(self.j);
        let later = n - self.pass - 1;
        current + later * later.saturating_sub(1) / 2
    }
}

impl Iterator for BubbleSteps {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let n = self.arr.len();
        while self.pass < n {
            if self.j + 1 < n - self.pass {
                let j = self.j;
                if self.arr[j] > self.arr[j + 1] {
                    self.arr.swap(j, j + 1);
                }
                self.j += 1;
                self.emitted += 1;
                return Some(Snapshot::new(&self.arr));
            }
            self.pass += 1;
            self.j = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BubbleSteps {}

impl FusedIterator for BubbleSteps {}
