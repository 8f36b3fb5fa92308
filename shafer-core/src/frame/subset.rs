use std::fmt;

use serde::{Deserialize, Serialize};

/// A subset of a frame of discernment, encoded as a bitmask over frame
/// positions (bit `i` set means hypothesis `i` is a member).
///
/// Equality, ordering and hashing are those of the mask, so two subsets built
/// from the same members in a different order are identical. The all-zero
/// mask is the empty sentinel; it only ever appears as the result of a
/// disjoint [`Subset::intersect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Subset(u32);

impl Subset {
    /// The empty sentinel.
    pub const EMPTY: Subset = Subset(0);

    /// Wrap raw bits. No frame check happens here.
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// The singleton `{i}`.
    pub const fn singleton(index: usize) -> Self {
        Self(1 << index)
    }

    /// The full set over the first `size` positions (Θ for a frame of that size).
    pub const fn full(size: usize) -> Self {
        if size >= u32::BITS as usize {
            Self(u32::MAX)
        } else {
            Self((1u32 << size) - 1)
        }
    }

    pub const fn bits(self) -> u32 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of hypotheses in the subset.
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    pub const fn contains(self, index: usize) -> bool {
        index < u32::BITS as usize && self.0 & (1 << index) != 0
    }

    /// Set intersection. Disjoint operands give [`Subset::EMPTY`].
    pub const fn intersect(self, other: Subset) -> Subset {
        Subset(self.0 & other.0)
    }

    pub const fn union(self, other: Subset) -> Subset {
        Subset(self.0 | other.0)
    }

    /// `self ⊆ other`. The empty set is a subset of everything.
    pub const fn is_subset_of(self, other: Subset) -> bool {
        self.0 & !other.0 == 0
    }

    /// `self ∩ other ≠ ∅`.
    pub const fn intersects(self, other: Subset) -> bool {
        self.0 & other.0 != 0
    }

    /// Member positions in ascending order.
    pub fn indices(self) -> impl Iterator<Item = usize> {
        let bits = self.0;
        (0..u32::BITS as usize).filter(move |i| bits & (1 << i) != 0)
    }
}

impl fmt::Binary for Subset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}
