//! Insertion sort as a snapshot producer.

use std::iter::FusedIterator;

use sortvis_core::Snapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Phase {
    /// About to lift `arr[i]` as the key.
    Lift,
    /// Moving the hole left while the element before it is greater than `key`.
    Shift { key: u32, hole: usize },
}

/// Yields one snapshot per shift and one per key placement.
///
/// For each `i in 1..n` the key `arr[i]` is held aside and larger
/// elements of the sorted prefix move right one slot at a time, each move
/// emitting a snapshot. While shifting, the snapshot shows the moved
/// value twice because the key is not in the array. The key is then
/// written into the hole and one more snapshot is emitted, whether or
/// not anything moved.
#[derive(Clone, Debug)]
pub struct InsertionSteps {
    arr: Vec<u32>,
    i: usize,
    phase: Phase,
    emitted: u64,
}

impl InsertionSteps {
    /// Take ownership of the working array.
    pub fn new(arr: Vec<u32>) -> Self {
        Self {
            arr,
            i: 1,
            phase: Phase::Lift,
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

    fn emit(&mut self) -> Option<Snapshot> {
        self.emitted += 1;
        Some(Snapshot::new(&self.arr))
    }
}

impl Iterator for InsertionSteps {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        loop {
            match self.phase {
                Phase::Lift => {
                    if self.i >= self.arr.len() {
                        return None;
                    }
                    self.phase = Phase::Shift {
                        key: self.arr[self.i],
                        hole: self.i,
                    };
                }
                Phase::Shift { key, hole } => {
                    if hole > 0 && self.arr[hole - 1] > key {
                        self.arr[hole] = self.arr[hole - 1];
                        self.phase = Phase::Shift {
                            key,
                            hole: hole - 1,
                        };
                    } else {
                        self.arr[hole] = key;
                        self.i += 1;
                        self.phase = Phase::Lift;
                    }
                    return self.emit();
                }
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // At least one placement per outer index not yet finished.
        let placements = self.arr.len().saturating_sub(self.i);
        (placements, None)
    }
}

impl FusedIterator for InsertionSteps {}
