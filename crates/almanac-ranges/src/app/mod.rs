//! Application layer - Use case implementations
//!
//! This module drives the pipeline to answer point and range queries.

pub mod query;
