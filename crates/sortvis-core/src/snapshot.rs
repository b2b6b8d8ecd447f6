//! Immutable array snapshots.

use std::fmt;
use std::ops::Deref;

/// An immutable copy of the array at one point of an algorithm's progress.
///
/// A snapshot owns its storage; it never aliases the working array a
/// producer is mutating, so snapshots published earlier cannot change
/// after the fact.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Snapshot {
    values: Box<[u32]>,
}

impl Snapshot {
    /// Copy `values` into a new snapshot.
    pub fn new(values: &[u32]) -> Self {
        Self {
            values: values.into(),
        }
    }

    /// The captured values, in array order.
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the snapshot has no elements.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the values are in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }

    /// Whether the snapshot holds the same multiset of values as `other`.
    pub fn is_permutation_of(&self, other: &[u32]) -> bool {
        if self.values.len() != other.len() {
            return false;
        }
        let mut mine = self.values.to_vec();
        let mut theirs = other.to_vec();
        mine.sort_unstable();
        theirs.sort_unstable();
        mine == theirs
    }

    /// Copy the values out into a fresh `Vec`.
    pub fn to_vec(&self) -> Vec<u32> {
        self.values.to_vec()
    }
}

impl Deref for Snapshot {
    type Target = [u32];

    fn deref(&self) -> &[u32] {
        &self.values
    }
}

impl From<Vec<u32>> for Snapshot {
    fn from(v: Vec<u32>) -> Self {
        Self {
            values: v.into_boxed_slice(),
        }
    }
}

impl From<&[u32]> for Snapshot {
    fn from(v: &[u32]) -> Self {
        Self::new(v)
    }
}

impl PartialEq<[u32]> for Snapshot {
    fn eq(&self, other: &[u32]) -> bool {
        *self.values == *other
    }
}

impl<const N: usize> PartialEq<[u32; N]> for Snapshot {
    fn eq(&self, other: &[u32; N]) -> bool {
        *self.values == other[..]
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str("]")
    }
}
