//! Almanac file I/O
//!
//! This module reads almanac files from disk.

use crate::domain::almanac_format::{Almanac, AlmanacFormatError, LoadOptions, parse_almanac};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Load and parse an almanac file
pub fn load_almanac(
    path: impl AsRef<Path>,
    options: &LoadOptions,
) -> Result<Almanac, AlmanacFormatError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut text = String::new();
    reader.read_to_string(&mut text)?;

    let almanac = parse_almanac(&text, options)?;
    log::debug!(
        "Loaded almanac from {}: {} seed numbers, {} stages",
        path.display(),
        almanac.seeds.len(),
        almanac.pipeline.len()
    );

    Ok(almanac)
}
