//! Stage composition
//!
//! A [`Pipeline`] applies its stage maps front to back: the output of stage
//! `i` is the input of stage `i + 1`.

use crate::domain::interval::{Interval, merge};
use crate::domain::stage_map::StageMap;

/// Ordered sequence of stage maps
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Pipeline {
    stages: Vec<StageMap>,
}

impl Pipeline {
    pub fn new(stages: Vec<StageMap>) -> Self {
        Self { stages }
    }

    pub fn stages(&self) -> &[StageMap] {
        &self.stages
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Map a single value through every stage
    pub fn run_point(&self, x: i64) -> i64 {
        self.stages.iter().fold(x, |value, stage| stage.map_point(value))
    }

    /// Map a set of ranges through every stage
    ///
    /// Each stage's output is coalesced before it feeds the next stage, so the
    /// result is sorted, disjoint and free of empty intervals.
    pub fn run_ranges(&self, ranges: &[Interval]) -> Vec<Interval> {
        let initial = merge(ranges.iter().copied());
        self.stages.iter().enumerate().fold(initial, |current, (index, stage)| {
            let next = stage.map_ranges_merged(&current);
            log::trace!(
                "stage {} ({}): {} -> {} ranges",
                index,
                stage.label().unwrap_or("unlabeled"),
                current.len(),
                next.len()
            );
            next
        })
    }

    /// Value of `x` before the first stage and after every stage
    pub fn trace_point(&self, x: i64) -> Vec<i64> {
        let mut values = Vec::with_capacity(self.stages.len() + 1);
        values.push(x);

        let mut value = x;
        for stage in &self.stages {
            value = stage.map_point(value);
            values.push(value);
        }

        values
    }

    /// Range set before the first stage and after every stage
    pub fn trace_ranges(&self, ranges: &[Interval]) -> Vec<Vec<Interval>> {
        let mut snapshots = Vec::with_capacity(self.stages.len() + 1);
        let mut current = merge(ranges.iter().copied());

        for stage in &self.stages {
            let next = stage.map_ranges_merged(&current);
            snapshots.push(current);
            current = next;
        }
        snapshots.push(current);

        snapshots
    }
}

impl FromIterator<StageMap> for Pipeline {
    fn from_iter<I: IntoIterator<Item = StageMap>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
