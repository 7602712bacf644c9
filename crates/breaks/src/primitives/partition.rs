//! Contiguous class partitions over a frequency table.
//!
//! ## Purpose
//!
//! A [`ClassPartition`] assigns each of `k` classes a contiguous, inclusive
//! index range over the frequency table. The Jenks optimizer reshapes a
//! partition by moving indices across class borders; this module owns that
//! move so every partition it hands out keeps full coverage.
//!
//! ## Design notes
//!
//! * **Value semantics**: Partitions are cloned to snapshot accepted states;
//!   rollback restores a snapshot instead of undoing edits in place.
//! * **Zero-based**: Ranges use 0-based inclusive indices.
//! * **Exact arithmetic**: The equal-count split is computed in integers.
//!
//! ## Invariants
//!
//! * The first range starts at 0 and the last ends at `n - 1`.
//! * `ranges[i].end + 1 == ranges[i + 1].start` for every adjacent pair.
//! * No range is empty.
//!
//! ## Non-goals
//!
//! * This module does not compute class statistics or choose moves.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// ============================================================================
// Class Range
// ============================================================================

/// Inclusive index range `[start, end]` of one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRange {
    /// First index of the class.
    pub start: usize,

    /// Last index of the class (inclusive).
    pub end: usize,
}

impl ClassRange {
    /// Number of frequency-table entries in the class.
    #[inline]
    pub fn size(&self) -> usize {
        self.end + 1 - self.start
    }
}

// ============================================================================
// Class Partition
// ============================================================================

/// Ordered, gap-free sequence of class ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassPartition {
    ranges: Vec<ClassRange>,
}

impl ClassPartition {
    /// Split `n` indices into `k` classes of as-equal-as-possible index count.
    ///
    /// Class `i` (1-based) ends at `round(i * n / k)`. Requires `1 <= k <= n`.
    pub fn equal_count(n: usize, k: usize) -> Self {
        let mut ranges = Vec::with_capacity(k);
        let mut start = 0;
        for i in 1..=k {
            // round(i * n / k) without leaving integer arithmetic
            let end = (2 * i * n + k) / (2 * k);
            ranges.push(ClassRange {
                start,
                end: end - 1,
            });
            start = end;
        }
        Self { ranges }
    }

    /// Build a partition of `n` indices from the start indices of classes `2..=k`.
    ///
    /// `starts` must be strictly increasing and lie in `[1, n - 1]`.
    pub fn from_starts(n: usize, starts: &[usize]) -> Self {
        let mut ranges = Vec::with_capacity(starts.len() + 1);
        let mut start = 0;
        for &next in starts {
            ranges.push(ClassRange {
                start,
                end: next - 1,
            });
            start = next;
        }
        ranges.push(ClassRange { start, end: n - 1 });
        Self { ranges }
    }

    /// Number of classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Whether the partition has no classes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// All class ranges in order.
    #[inline]
    pub fn ranges(&self) -> &[ClassRange] {
        &self.ranges
    }

    /// Range of class `class`.
    #[inline]
    pub fn range(&self, class: usize) -> ClassRange {
        self.ranges[class]
    }

    /// Number of entries in class `class`.
    #[inline]
    pub fn size(&self, class: usize) -> usize {
        self.ranges[class].size()
    }

    /// Check that the ranges are contiguous, non-empty and cover `[0, n - 1]`.
    pub fn covers(&self, n: usize) -> bool {
        let (Some(first), Some(last)) = (self.ranges.first(), self.ranges.last()) else {
            return n == 0;
        };
        first.start == 0
            && last.end + 1 == n
            && self.ranges.iter().all(|r| r.start <= r.end)
            && self
                .ranges
                .windows(2)
                .all(|w| w[0].end + 1 == w[1].start)
    }

    /// Move `count` indices out of class `donor` into class `receiver`.
    ///
    /// Every class strictly between the two slides by `count` positions, so
    /// only the donor shrinks and only the receiver grows. The caller keeps
    /// `count < size(donor)`.
    pub fn transfer(&mut self, donor: usize, receiver: usize, count: usize) {
        if count == 0 || donor == receiver {
            return;
        }

        if receiver < donor {
            // Donor gives up its low-index side
            for class in receiver..donor {
                self.ranges[class].end += count;
                self.ranges[class + 1].start += count;
            }
        } else {
            // Donor gives up its high-index side
            for class in donor..receiver {
                self.ranges[class].end -= count;
                self.ranges[class + 1].start -= count;
            }
        }

        debug_assert!(self.ranges.iter().all(|r| r.start <= r.end));
    }
}
