//! Domain layer - Pure computational logic
//!
//! This module contains pure functions and algorithms without I/O dependencies.

pub mod almanac_format;
pub mod interval;
pub mod pipeline;
pub mod seed_spec;
pub mod stage_map;
