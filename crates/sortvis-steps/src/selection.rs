//! Selection sort as a snapshot producer.

use std::iter::FusedIterator;

use sortvis_core::Snapshot;

/// Yields one snapshot per minimum-scan comparison and one per swap.
///
/// For each `i`, every `j in i + 1..n` is compared against the running
/// minimum (strict `<`, so ties keep the earlier index) and a snapshot
/// is emitted after each comparison. If the minimum ended up somewhere
/// other than `i`, the two are swapped and one more snapshot is emitted.
#[derive(Clone, Debug)]
pub struct SelectionSteps {
    arr: Vec<u32>,
    i: usize,
    j: usize,
    min: usize,
    emitted: u64,
    swaps: u64,
}

impl SelectionSteps {
    /// Take ownership of the working array.
    pub fn new(arr: Vec<u32>) -> Self {
        Self {
            arr,
            i: 0,
            j: 1,
            min: 0,
            emitted: 0,
            swaps: 0,
        }
    }

    /// Snapshots produced so far.
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    /// Swaps performed so far.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Current contents of the working array.
    pub fn working(&self) -> &[u32] {
        &self.arr
    }
}

impl Iterator for SelectionSteps {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        let n = self.arr.len();
        while self.i < n {
            if self.j < n {
                if self.arr[self.j] < self.arr[self.min] {
                    self.min = self.j;
                }
                self.j += 1;
                self.emitted += 1;
                return Some(Snapshot::new(&self.arr));
            }

            let (i, min) = (self.i, self.min);
            self.i += 1;
            self.j = self.i + 1;
            self.min = self.i;
            if min != i {
                self.arr.swap(i, min);
                self.swaps += 1;
                self.emitted += 1;
                return Some(Snapshot::new(&self.arr));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.arr.len();
        if self.i >= n {
            return (0, Some(0));
        }
        // Comparisons left in this scan and every later one; each outer
        // index can add at most one swap.
        let scan = n.saturating_sub(self.j);
        let later = n - self.i - 1;
        let comparisons = scan + later * later.saturating_sub(1) / 2;
        (comparisons, Some(comparisons + later + 1))
    }
}

impl FusedIterator for SelectionSteps {}
