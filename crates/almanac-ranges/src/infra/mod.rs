//! Infrastructure layer - I/O and external dependencies
//!
//! This module handles file operations.

pub mod almanac_io;
