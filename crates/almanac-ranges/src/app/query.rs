//! Query workflow implementation
//!
//! This module runs seeds through a pipeline and reduces the results to the
//! lowest final value. An empty seed set has no minimum and yields `None`.

use crate::domain::interval::Interval;
use crate::domain::pipeline::Pipeline;
use crate::domain::seed_spec::SeedSpec;
use rayon::prelude::*;

/// Point and range queries over a borrowed pipeline
#[derive(Clone, Copy, Debug)]
pub struct QueryEngine<'a> {
    pipeline: &'a Pipeline,
}

impl<'a> QueryEngine<'a> {
    pub fn new(pipeline: &'a Pipeline) -> Self {
        Self { pipeline }
    }

    pub fn pipeline(&self) -> &'a Pipeline {
        self.pipeline
    }

    /// Lowest final value over individual seeds
    pub fn lowest_point(&self, points: &[i64]) -> Option<i64> {
        points.iter().map(|&x| self.pipeline.run_point(x)).min()
    }

    /// Lowest final value over seed ranges
    ///
    /// All ranges go through the pipeline together; the final set is sorted,
    /// so its first interval holds the minimum.
    pub fn lowest_range(&self, ranges: &[Interval]) -> Option<i64> {
        self.pipeline
            .run_ranges(ranges)
            .first()
            .map(Interval::start)
    }

    /// Lowest final value for a seed specification
    pub fn solve(&self, seeds: &SeedSpec) -> Option<i64> {
        let lowest = match seeds {
            SeedSpec::Points(points) => self.lowest_point(points),
            SeedSpec::Ranges(ranges) => self.lowest_range(ranges),
        };
        log::debug!(
            "{:?} query over {} seed entries: {:?}",
            seeds.mode(),
            seeds.len(),
            lowest
        );
        lowest
    }

    /// Lowest final value, evaluating every seed entry independently
    ///
    /// Uses rayon parallel processing across seed entries. The result equals
    /// [`QueryEngine::solve`].
    pub fn solve_parallel(&self, seeds: &SeedSpec) -> Option<i64> {
        let pipeline = self.pipeline;
        match seeds {
            SeedSpec::Points(points) => points.par_iter().map(|&x| pipeline.run_point(x)).min(),
            SeedSpec::Ranges(ranges) => ranges
                .par_iter()
                .filter_map(|&range| pipeline.run_ranges(&[range]).first().map(Interval::start))
                .min(),
        }
    }
}

/// Lowest final value of `seeds` through `pipeline`
pub fn solve(seeds: &SeedSpec, pipeline: &Pipeline) -> Option<i64> {
    QueryEngine::new(pipeline).solve(seeds)
}

/// Parallel version of [`solve`]
pub fn solve_parallel(seeds: &SeedSpec, pipeline: &Pipeline) -> Option<i64> {
    QueryEngine::new(pipeline).solve_parallel(seeds)
}
