//! Seed specifications
//!
//! The same seed numbers are read either as individual points or as
//! `(start, length)` pairs. The caller picks the interpretation.

use crate::domain::interval::Interval;
use thiserror::Error;

/// Seed interpretation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedSpecError {
    /// Seed range list with an unpaired number
    #[error("seed ranges need (start, length) pairs, found {0} numbers")]
    OddSeedCount(usize),
    /// Seed range with a negative length
    #[error("seed range starting at {start} has negative length {length}")]
    NegativeSeedLength { start: i64, length: i64 },
    /// Seed range whose end does not fit in an `i64`
    #[error("seed range starting at {start} with length {length} exceeds the i64 range")]
    SeedRangeOutOfRange { start: i64, length: i64 },
}

/// How the seed numbers of an almanac are interpreted
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedMode {
    /// Every number is a seed
    Points,
    /// Numbers form `(start, length)` pairs
    Ranges,
}

/// Seeds to run through a pipeline
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SeedSpec {
    Points(Vec<i64>),
    Ranges(Vec<Interval>),
}

impl SeedSpec {
    /// Interpret raw seed numbers according to `mode`
    pub fn from_numbers(mode: SeedMode, numbers: &[i64]) -> Result<Self, SeedSpecError> {
        match mode {
            SeedMode::Points => Ok(Self::Points(numbers.to_vec())),
            SeedMode::Ranges => {
                if numbers.len() % 2 != 0 {
                    return Err(SeedSpecError::OddSeedCount(numbers.len()));
                }

                numbers
                    .chunks_exact(2)
                    .map(|pair| seed_range(pair[0], pair[1]))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Self::Ranges)
            }
        }
    }

    pub fn mode(&self) -> SeedMode {
        match self {
            Self::Points(_) => SeedMode::Points,
            Self::Ranges(_) => SeedMode::Ranges,
        }
    }

    /// Number of seed entries (points or ranges)
    pub fn len(&self) -> usize {
        match self {
            Self::Points(points) => points.len(),
            Self::Ranges(ranges) => ranges.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn seed_range(start: i64, length: i64) -> Result<Interval, SeedSpecError> {
    if length < 0 {
        return Err(SeedSpecError::NegativeSeedLength { start, length });
    }
    Interval::try_new(start, length).ok_or(SeedSpecError::SeedRangeOutOfRange { start, length })
}
