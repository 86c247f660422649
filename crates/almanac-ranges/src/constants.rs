//! Almanac related constants

// =============================================================================
// Stage labels
// =============================================================================

/// Number of stages in a complete almanac
pub const STAGE_COUNT: usize = 7;

/// Stage labels in pipeline order (seed → location)
pub const STAGE_LABELS: [&str; STAGE_COUNT] = [
    "seed-to-soil",
    "soil-to-fertilizer",
    "fertilizer-to-water",
    "water-to-light",
    "light-to-temperature",
    "temperature-to-humidity",
    "humidity-to-location",
];

/// Category names visited by the pipeline, one more than the stage count
pub const CATEGORY_NAMES: [&str; STAGE_COUNT + 1] = [
    "Seed",
    "Soil",
    "Fertilizer",
    "Water",
    "Light",
    "Temperature",
    "Humidity",
    "Location",
];

// =============================================================================
// Text format
// =============================================================================

/// Key of the seed list line
pub const SEEDS_KEY: &str = "seeds";

/// Suffix appended to a stage label in a section header
pub const MAP_KEY_SUFFIX: &str = " map";

/// Number of fields in a rule line (`dest source length`)
pub const RULE_FIELD_COUNT: usize = 3;
