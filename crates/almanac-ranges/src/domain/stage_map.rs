//! Stage maps
//!
//! A [`StageMap`] is one piecewise shift function: a set of [`MappingRule`]s
//! with pairwise disjoint source intervals. Values not covered by any rule map
//! to themselves.

use crate::domain::interval::{Interval, merge};
use thiserror::Error;

/// Stage map construction errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StageMapError {
    /// Rule with a negative length
    #[error("rule at source {source_start} has negative length {length}")]
    NegativeRuleLength { source_start: i64, length: i64 },
    /// Rule whose source end, destination end or offset does not fit in an `i64`
    #[error("rule {dest_start} {source_start} {length} exceeds the i64 range")]
    RuleOutOfRange {
        source_start: i64,
        dest_start: i64,
        length: i64,
    },
    /// Two rules of the same stage cover a common value
    #[error("rule source ranges {first} and {second} overlap")]
    OverlappingRules { first: Interval, second: Interval },
}

/// One contiguous source-to-destination shift
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MappingRule {
    /// First source value covered by the rule
    pub source_start: i64,
    /// Image of `source_start`
    pub dest_start: i64,
    /// Number of covered values
    pub length: i64,
}

impl MappingRule {
    pub fn new(source_start: i64, dest_start: i64, length: i64) -> Self {
        Self {
            source_start,
            dest_start,
            length,
        }
    }

    /// Constant shift applied to every covered value
    #[inline]
    pub fn offset(&self) -> i64 {
        self.dest_start - self.source_start
    }

    /// Source interval covered by the rule (empty for a negative length)
    #[inline]
    pub fn source(&self) -> Interval {
        Interval::from_bounds(self.source_start, self.source_end())
    }

    #[inline]
    pub fn source_end(&self) -> i64 {
        self.source_start.saturating_add(self.length)
    }

    /// Whether the source end, destination end and offset all fit in an `i64`
    pub fn is_representable(&self) -> bool {
        self.source_start.checked_add(self.length).is_some()
            && self.dest_start.checked_add(self.length).is_some()
            && self.dest_start.checked_sub(self.source_start).is_some()
    }
}

/// A piecewise-linear mapping over the integers
///
/// Rules are kept sorted by `source_start`. Construction through
/// [`StageMap::new`] guarantees the source intervals are pairwise disjoint.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageMap {
    label: Option<String>,
    rules: Vec<MappingRule>,
}

impl StageMap {
    /// Build a stage map, rejecting negative lengths, out-of-range rules and
    /// overlapping rules
    ///
    /// Zero-length rules cover nothing and are dropped.
    pub fn new(rules: impl IntoIterator<Item = MappingRule>) -> Result<Self, StageMapError> {
        let rules: Vec<MappingRule> = rules.into_iter().collect();

        for rule in &rules {
            if rule.length < 0 {
                return Err(StageMapError::NegativeRuleLength {
                    source_start: rule.source_start,
                    length: rule.length,
                });
            }
            if !rule.is_representable() {
                return Err(StageMapError::RuleOutOfRange {
                    source_start: rule.source_start,
                    dest_start: rule.dest_start,
                    length: rule.length,
                });
            }
        }

        let map = Self::new_unchecked(rules);
        for pair in map.rules.windows(2) {
            if pair[0].source_end() > pair[1].source_start {
                return Err(StageMapError::OverlappingRules {
                    first: pair[0].source(),
                    second: pair[1].source(),
                });
            }
        }

        Ok(map)
    }

    /// Build a stage map without checking that rules are disjoint
    ///
    /// Rules that cover nothing (length <= 0) or do not fit in an `i64` are
    /// dropped. With overlapping rules the rule with the lowest `source_start`
    /// wins for point queries; range results are unspecified.
    pub fn new_unchecked(rules: impl IntoIterator<Item = MappingRule>) -> Self {
        let mut rules: Vec<MappingRule> = rules
            .into_iter()
            .filter(|r| r.length > 0 && r.is_representable())
            .collect();
        rules.sort_by_key(|r| (r.source_start, r.length));
        Self { label: None, rules }
    }

    /// Stage map with no rules
    pub fn identity() -> Self {
        Self::default()
    }

    /// Attach a label such as `seed-to-soil`
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn rules(&self) -> &[MappingRule] {
        &self.rules
    }

    pub fn is_identity(&self) -> bool {
        self.rules.is_empty()
    }

    /// Map a single value
    pub fn map_point(&self, x: i64) -> i64 {
        self.rules
            .iter()
            .find(|rule| rule.source().contains(x))
            .map_or(x, |rule| x + rule.offset())
    }

    /// Map a set of ranges, returning the image pieces unmerged
    ///
    /// Each input range is split at rule boundaries: covered pieces are shifted
    /// by their rule's offset, uncovered pieces pass through unchanged. The
    /// pieces of a single input range have the same total length as the input.
    pub fn map_ranges(&self, inputs: &[Interval]) -> Vec<Interval> {
        let mut out = Vec::with_capacity(inputs.len() + self.rules.len());
        for &range in inputs {
            self.map_range_into(range, &mut out);
        }
        out
    }

    /// Map a set of ranges and coalesce the result
    pub fn map_ranges_merged(&self, inputs: &[Interval]) -> Vec<Interval> {
        merge(self.map_ranges(inputs))
    }

    fn map_range_into(&self, range: Interval, out: &mut Vec<Interval>) {
        let mut remainder = range;

        for rule in &self.rules {
            if remainder.is_empty() {
                return;
            }

            // Rules are sorted, so nothing before this rule's source is covered
            let before = Interval::from_bounds(remainder.start(), rule.source_start);
            let gap = remainder.overlap(before);
            if !gap.is_empty() {
                out.push(gap);
            }

            let covered = remainder.overlap(rule.source());
            if !covered.is_empty() {
                out.push(covered.shift(rule.offset()));
            }

            let tail_start = remainder.start().max(rule.source_end());
            remainder = Interval::from_bounds(tail_start, remainder.end());
        }

        if !remainder.is_empty() {
            out.push(remainder);
        }
    }
}
