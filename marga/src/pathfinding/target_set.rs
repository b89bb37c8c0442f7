//! Set of outstanding goal positions for joint-target search.
//!
//! Members are drawn from a fixed, shared universe (the targets the search
//! started with) and stored as a bitset over that universe. Removing a
//! member clears one bit; equality and hashing are structural, so two sets
//! with the same members compare equal however they were produced.

use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::core::Position;

const WORD_BITS: usize = 64;

/// Outstanding targets of one joint search.
///
/// Shrinks monotonically: there is no insert after construction.
#[derive(Clone, Debug)]
pub struct TargetSet {
    /// Sorted, de-duplicated positions the set was built from
    universe: Arc<[Position]>,
    /// One bit per universe entry; set = still outstanding
    bits: Box<[u64]>,
    /// Number of set bits
    len: usize,
}

impl TargetSet {
    /// Build a set containing every given position (duplicates collapse)
    pub fn new(targets: impl IntoIterator<Item = Position>) -> Self {
        let mut positions: Vec<Position> = targets.into_iter().collect();
        positions.sort_unstable();
        positions.dedup();

        let len = positions.len();
        let words = len.div_ceil(WORD_BITS);
        let mut bits = vec![0u64; words].into_boxed_slice();
        for i in 0..len {
            bits[i / WORD_BITS] |= 1 << (i % WORD_BITS);
        }

        Self {
            universe: positions.into(),
            bits,
            len,
        }
    }

    /// Number of outstanding targets
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// True once every target has been reached
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    fn slot(&self, pos: &Position) -> Option<usize> {
        self.universe.binary_search(pos).ok()
    }

    #[inline]
    fn bit(&self, i: usize) -> bool {
        self.bits[i / WORD_BITS] & (1 << (i % WORD_BITS)) != 0
    }

    /// Is `pos` still outstanding?
    pub fn contains(&self, pos: &Position) -> bool {
        self.slot(pos).is_some_and(|i| self.bit(i))
    }

    /// Remove `pos`. Returns true if it was outstanding.
    pub fn remove(&mut self, pos: &Position) -> bool {
        match self.slot(pos) {
            Some(i) if self.bit(i) => {
                self.bits[i / WORD_BITS] &= !(1 << (i % WORD_BITS));
                self.len -= 1;
                true
            }
            _ => false,
        }
    }

    /// Copy of this set without `pos`
    pub fn without(&self, pos: &Position) -> Self {
        let mut next = self.clone();
        next.remove(pos);
        next
    }

    /// Outstanding targets in sorted order
    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.universe
            .iter()
            .enumerate()
            .filter(|&(i, _)| self.bit(i))
            .map(|(_, &p)| p)
    }

    /// Manhattan distance from `from` to the farthest outstanding target (0 if empty)
    pub fn farthest_distance(&self, from: &Position) -> u32 {
        self.iter()
            .map(|t| from.manhattan_distance(&t))
            .max()
            .unwrap_or(0)
    }

    /// Bitset words, meaningful only against sets sharing this universe
    #[inline]
    pub(crate) fn words(&self) -> &[u64] {
        &self.bits
    }
}

impl PartialEq for TargetSet {
    fn eq(&self, other: &Self) -> bool {
        if Arc::ptr_eq(&self.universe, &other.universe) {
            return self.bits == other.bits;
        }
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for TargetSet {}

impl Hash for TargetSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for pos in self.iter() {
            pos.hash(state);
        }
    }
}

impl FromIterator<Position> for TargetSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter)
    }
}
