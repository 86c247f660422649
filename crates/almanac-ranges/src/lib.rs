//! almanac-ranges - Piecewise-linear range mapping for almanac seed lookups
//!
//! This crate provides functionality to:
//! - Compose a chain of stage maps over single points and interval sets
//! - Parse almanac text into a pipeline and a seed list
//! - Find the lowest final location for point seeds or seed ranges

pub mod constants;
pub mod domain;
pub mod infra;
pub mod app;

// Re-export commonly used types
pub use app::query::{QueryEngine, solve, solve_parallel};
pub use domain::almanac_format::{Almanac, AlmanacFormatError, LoadOptions, parse_almanac};
pub use domain::interval::{Interval, merge};
pub use domain::pipeline::Pipeline;
pub use domain::seed_spec::{SeedMode, SeedSpec, SeedSpecError};
pub use domain::stage_map::{MappingRule, StageMap, StageMapError};
pub use infra::almanac_io::load_almanac;
