//! Half-open integer intervals
//!
//! An [`Interval`] covers `[start, start + length)`. A zero-length interval is
//! empty and is never kept in a result set.

use std::cmp::{max, min};
use std::fmt;

/// A half-open interval `[start, start + length)`
///
/// # Invariants
/// `length` is never negative and `start + length` fits in an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    start: i64,
    length: i64,
}

impl Interval {
    /// Create a new interval
    ///
    /// # Panics
    ///
    /// Panics if `length` is negative or the end does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_ranges::Interval;
    /// let iv = Interval::new(79, 14);
    /// assert_eq!(iv.end(), 93);
    /// ```
    #[inline]
    pub fn new(start: i64, length: i64) -> Self {
        Self::try_new(start, length)
            .expect("Invalid interval: length must be non-negative and the end must fit in i64")
    }

    /// Create a new interval, returning `None` if `length` is negative or
    /// `start + length` overflows
    #[inline]
    pub fn try_new(start: i64, length: i64) -> Option<Self> {
        if length < 0 {
            return None;
        }
        start.checked_add(length).map(|_| Self { start, length })
    }

    /// Create an interval from `[start, end)`, empty when `end <= start`
    #[inline]
    pub fn from_bounds(start: i64, end: i64) -> Self {
        Self {
            start,
            length: max(0, end.saturating_sub(start)),
        }
    }

    /// Interval holding the single point `x`
    ///
    /// # Panics
    ///
    /// Panics if `x` is `i64::MAX`, whose exclusive end is not representable.
    #[inline]
    pub fn point(x: i64) -> Self {
        Self::new(x, 1)
    }

    #[inline]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline]
    pub fn len(&self) -> i64 {
        self.length
    }

    /// Exclusive end (`start + length`)
    #[inline]
    pub fn end(&self) -> i64 {
        self.start + self.length
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    #[inline]
    pub fn contains(&self, x: i64) -> bool {
        self.start <= x && x < self.end()
    }

    /// Intersection of two intervals, empty if they do not overlap
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_ranges::Interval;
    /// let a = Interval::new(0, 10);
    /// let b = Interval::new(5, 10);
    /// assert_eq!(a.overlap(b), Interval::new(5, 5));
    /// assert!(a.overlap(Interval::new(10, 3)).is_empty());
    /// ```
    #[inline]
    pub fn overlap(self, other: Self) -> Self {
        let start = max(self.start, other.start);
        let end = min(self.end(), other.end());
        Self {
            start,
            length: max(0, end.saturating_sub(start)),
        }
    }

    /// Move the interval by `delta`, keeping its length
    #[inline]
    pub fn shift(self, delta: i64) -> Self {
        Self {
            start: self.start + delta,
            length: self.length,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end())
    }
}

/// Coalesce overlapping and adjacent intervals
///
/// Empty intervals are dropped, the rest are sorted by start and folded into
/// the minimal covering intervals.
pub fn merge(intervals: impl IntoIterator<Item = Interval>) -> Vec<Interval> {
    let mut sorted: Vec<Interval> = intervals.into_iter().filter(|iv| !iv.is_empty()).collect();
    sorted.sort_unstable_by_key(|iv| iv.start);

    let mut merged: Vec<Interval> = Vec::with_capacity(sorted.len());
    for iv in sorted {
        match merged.last_mut() {
            Some(last) if iv.start <= last.end() => {
                let end = max(last.end(), iv.end());
                *last = Interval::from_bounds(last.start, end);
            }
            _ => merged.push(iv),
        }
    }

    merged
}

/// Sum of the lengths of `intervals`
pub fn total_len(intervals: &[Interval]) -> i64 {
    intervals.iter().map(Interval::len).sum()
}
