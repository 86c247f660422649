//! Almanac text format
//!
//! This module parses almanac text into a seed list and a [`Pipeline`] of the
//! seven canonical stages, and defines the load-time error taxonomy.
//!
//! ```text
//! seeds: 79 14 55 13
//!
//! seed-to-soil map:
//! 50 98 2
//! 52 50 48
//! ```
//!
//! Rule lines are `dest source length`. Sections may appear in any order; the
//! pipeline is always built in [`STAGE_LABELS`] order.

use crate::constants::{MAP_KEY_SUFFIX, RULE_FIELD_COUNT, SEEDS_KEY, STAGE_COUNT, STAGE_LABELS};
use crate::domain::pipeline::Pipeline;
use crate::domain::seed_spec::{SeedMode, SeedSpec, SeedSpecError};
use crate::domain::stage_map::{MappingRule, StageMap, StageMapError};
use rustc_hash::FxHashMap;
use thiserror::Error;

/// Parsed almanac: raw seed numbers plus the stage pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Almanac {
    /// Seed numbers as written, interpreted later by [`SeedMode`]
    pub seeds: Vec<i64>,
    pub pipeline: Pipeline,
}

impl Almanac {
    /// Interpret the seed numbers as points or ranges
    pub fn seed_spec(&self, mode: SeedMode) -> Result<SeedSpec, AlmanacFormatError> {
        Ok(SeedSpec::from_numbers(mode, &self.seeds)?)
    }
}

/// Validation options for almanac loading
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOptions {
    /// Reject stages whose rule source intervals overlap
    pub check_disjoint: bool,
    /// Reject almanacs missing any of the seven stages
    pub require_all_stages: bool,
}

impl LoadOptions {
    /// Validate everything (default)
    pub fn strict() -> Self {
        Self {
            check_disjoint: true,
            require_all_stages: true,
        }
    }

    /// Skip the overlap check and treat missing stages as identity
    pub fn lenient() -> Self {
        Self {
            check_disjoint: false,
            require_all_stages: false,
        }
    }
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::strict()
    }
}

/// Almanac load errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacFormatError {
    /// Header line without exactly one `:`
    #[error("line {line}: expected a single ':' in section header")]
    MissingColon { line: usize },
    /// Token that is not an integer
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber { line: usize, token: String },
    /// Rule line without exactly three numbers
    #[error("line {line}: expected 3 numbers in rule, found {found}")]
    WrongFieldCount { line: usize, found: usize },
    /// Header key that is neither `seeds` nor a known stage
    #[error("line {line}: unknown key '{key}'")]
    UnknownKey { line: usize, key: String },
    /// Key that appears more than once
    #[error("line {line}: duplicate section '{key}'")]
    DuplicateSection { line: usize, key: String },
    /// Stage that never appears
    #[error("missing section '{0} map'")]
    MissingSection(&'static str),
    /// No `seeds:` line
    #[error("missing 'seeds' line")]
    MissingSeeds,
    /// Rule line with a negative length
    #[error("line {line}: rule at source {source_start} has negative length {length}")]
    NegativeRuleLength {
        line: usize,
        source_start: i64,
        length: i64,
    },
    /// Rule line whose source end, destination end or offset overflows an `i64`
    #[error("line {line}: rule {dest_start} {source_start} {length} exceeds the i64 range")]
    ValueOutOfRange {
        line: usize,
        dest_start: i64,
        source_start: i64,
        length: i64,
    },
    /// Stage whose rules cannot form a [`StageMap`]
    #[error(transparent)]
    StageMap(#[from] StageMapError),
    /// Seed numbers that cannot be read in the requested [`SeedMode`]
    #[error(transparent)]
    Seeds(#[from] SeedSpecError),
    /// I/O error
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AlmanacFormatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

/// Parse almanac text
pub fn parse_almanac(text: &str, options: &LoadOptions) -> Result<Almanac, AlmanacFormatError> {
    let stage_index: FxHashMap<&str, usize> = STAGE_LABELS
        .iter()
        .enumerate()
        .map(|(index, &label)| (label, index))
        .collect();

    let mut seeds: Option<Vec<i64>> = None;
    let mut sections: [Option<Vec<MappingRule>>; STAGE_COUNT] = Default::default();
    let mut current: Option<usize> = None;

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            current = None;
            continue;
        }

        if let Some(stage) = current {
            let rule = parse_rule(trimmed, line)?;
            if let Some(rules) = sections[stage].as_mut() {
                rules.push(rule);
            }
            continue;
        }

        let (key, rest) = split_header(trimmed, line)?;

        if key == SEEDS_KEY {
            if seeds.is_some() {
                return Err(AlmanacFormatError::DuplicateSection {
                    line,
                    key: key.to_string(),
                });
            }
            seeds = Some(parse_numbers(rest, line)?);
            continue;
        }

        let stage = key
            .strip_suffix(MAP_KEY_SUFFIX)
            .and_then(|label| stage_index.get(label.trim_end()).copied())
            .ok_or_else(|| AlmanacFormatError::UnknownKey {
                line,
                key: key.to_string(),
            })?;

        if sections[stage].is_some() {
            return Err(AlmanacFormatError::DuplicateSection {
                line,
                key: key.to_string(),
            });
        }
        sections[stage] = Some(Vec::new());
        current = Some(stage);
    }

    let seeds = seeds.ok_or(AlmanacFormatError::MissingSeeds)?;

    let mut stages = Vec::with_capacity(STAGE_COUNT);
    for (label, rules) in STAGE_LABELS.iter().zip(sections) {
        let stage = match rules {
            Some(rules) if options.check_disjoint => StageMap::new(rules)?,
            Some(rules) => StageMap::new_unchecked(rules),
            None if options.require_all_stages => {
                return Err(AlmanacFormatError::MissingSection(*label));
            }
            None => {
                log::warn!("section '{}{}' missing, using identity", label, MAP_KEY_SUFFIX);
                StageMap::identity()
            }
        };
        stages.push(stage.with_label(*label));
    }

    Ok(Almanac {
        seeds,
        pipeline: Pipeline::new(stages),
    })
}

fn split_header(line: &str, line_no: usize) -> Result<(&str, &str), AlmanacFormatError> {
    let mut parts = line.split(':');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(key), Some(rest), None) => Ok((key.trim(), rest)),
        _ => Err(AlmanacFormatError::MissingColon { line: line_no }),
    }
}

fn parse_numbers(text: &str, line: usize) -> Result<Vec<i64>, AlmanacFormatError> {
    text.split_whitespace()
        .map(|token| {
            token.parse().map_err(|_| AlmanacFormatError::InvalidNumber {
                line,
                token: token.to_string(),
            })
        })
        .collect()
}

fn parse_rule(text: &str, line: usize) -> Result<MappingRule, AlmanacFormatError> {
    let numbers = parse_numbers(text, line)?;
    if numbers.len() != RULE_FIELD_COUNT {
        return Err(AlmanacFormatError::WrongFieldCount {
            line,
            found: numbers.len(),
        });
    }

    let (dest_start, source_start, length) = (numbers[0], numbers[1], numbers[2]);
    if length < 0 {
        return Err(AlmanacFormatError::NegativeRuleLength {
            line,
            source_start,
            length,
        });
    }

    let rule = MappingRule::new(source_start, dest_start, length);
    if !rule.is_representable() {
        return Err(AlmanacFormatError::ValueOutOfRange {
            line,
            dest_start,
            source_start,
            length,
        });
    }

    Ok(rule)
}
