//! End-to-end tests: almanac file → pipeline → lowest location

use std::fs;
use std::path::PathBuf;

use almanac_ranges::constants::{STAGE_COUNT, STAGE_LABELS};
use almanac_ranges::{
    AlmanacFormatError, Interval, LoadOptions, QueryEngine, SeedMode, SeedSpecError, load_almanac,
};
use tempfile::TempDir;

const REFERENCE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

fn write_almanac(dir: &TempDir, name: &str, text: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, text).expect("Failed to write almanac");
    path
}

#[test]
fn test_reference_almanac_both_modes() {
    let dir = TempDir::new().unwrap();
    let path = write_almanac(&dir, "reference.txt", REFERENCE);

    let almanac = load_almanac(&path, &LoadOptions::strict()).unwrap();
    assert_eq!(almanac.pipeline.len(), STAGE_COUNT);
    for (stage, label) in almanac.pipeline.stages().iter().zip(STAGE_LABELS) {
        assert_eq!(stage.label(), Some(label));
    }

    let engine = QueryEngine::new(&almanac.pipeline);
    let points = almanac.seed_spec(SeedMode::Points).unwrap();
    let ranges = almanac.seed_spec(SeedMode::Ranges).unwrap();
    assert_eq!(engine.solve(&points), Some(35));
    assert_eq!(engine.solve(&ranges), Some(46));
}

#[test]
fn test_reference_trace() {
    let dir = TempDir::new().unwrap();
    let path = write_almanac(&dir, "reference.txt", REFERENCE);
    let almanac = load_almanac(&path, &LoadOptions::strict()).unwrap();

    // Seed 79, soil 81, fertilizer 81, water 81, light 74, temperature 78,
    // humidity 78, location 82
    assert_eq!(
        almanac.pipeline.trace_point(79),
        vec![79, 81, 81, 81, 74, 78, 78, 82]
    );

    let trace = almanac
        .pipeline
        .trace_ranges(&[Interval::new(79, 14), Interval::new(55, 13)]);
    assert_eq!(trace.len(), STAGE_COUNT + 1);
    assert_eq!(trace.last().and_then(|r| r.first()).map(Interval::start), Some(46));
}

#[test]
fn test_sections_in_any_order() {
    let mut blocks: Vec<&str> = REFERENCE.split("\n\n").collect();
    blocks.reverse();
    let shuffled = blocks.join("\n\n");

    let dir = TempDir::new().unwrap();
    let path = write_almanac(&dir, "reversed.txt", &shuffled);
    let reversed = load_almanac(&path, &LoadOptions::strict()).unwrap();

    let path = write_almanac(&dir, "reference.txt", REFERENCE);
    let reference = load_almanac(&path, &LoadOptions::strict()).unwrap();

    assert_eq!(reversed, reference);
}

#[test]
fn test_odd_seed_list_in_range_mode() {
    let dir = TempDir::new().unwrap();
    let text = REFERENCE.replacen("seeds: 79 14 55 13", "seeds: 79 14 55", 1);
    let path = write_almanac(&dir, "odd.txt", &text);

    let almanac = load_almanac(&path, &LoadOptions::strict()).unwrap();
    assert!(almanac.seed_spec(SeedMode::Points).is_ok());
    assert_eq!(
        almanac.seed_spec(SeedMode::Ranges),
        Err(AlmanacFormatError::Seeds(SeedSpecError::OddSeedCount(3)))
    );
}

#[test]
fn test_missing_stage_strict_and_lenient() {
    let dir = TempDir::new().unwrap();
    let text = REFERENCE.replacen("water-to-light map:\n88 18 7\n18 25 70\n\n", "", 1);
    let path = write_almanac(&dir, "missing.txt", &text);

    assert_eq!(
        load_almanac(&path, &LoadOptions::strict()),
        Err(AlmanacFormatError::MissingSection("water-to-light"))
    );

    let almanac = load_almanac(&path, &LoadOptions::lenient()).unwrap();
    assert!(almanac.pipeline.stages()[3].is_identity());
    assert_eq!(almanac.pipeline.stages()[3].label(), Some("water-to-light"));
}

#[test]
fn test_empty_seed_line_has_no_minimum() {
    let dir = TempDir::new().unwrap();
    let text = REFERENCE.replacen("seeds: 79 14 55 13", "seeds:", 1);
    let path = write_almanac(&dir, "empty.txt", &text);

    let almanac = load_almanac(&path, &LoadOptions::strict()).unwrap();
    let engine = QueryEngine::new(&almanac.pipeline);
    assert_eq!(engine.solve(&almanac.seed_spec(SeedMode::Points).unwrap()), None);
    assert_eq!(engine.solve(&almanac.seed_spec(SeedMode::Ranges).unwrap()), None);
}

#[test]
fn test_crlf_line_endings() {
    let dir = TempDir::new().unwrap();
    let text = REFERENCE.replace('\n', "\r\n");
    let path = write_almanac(&dir, "crlf.txt", &text);

    let almanac = load_almanac(&path, &LoadOptions::strict()).unwrap();
    let engine = QueryEngine::new(&almanac.pipeline);
    assert_eq!(engine.solve(&almanac.seed_spec(SeedMode::Points).unwrap()), Some(35));
}

#[test]
fn test_huge_seed_range_is_rejected_not_mapped() {
    let dir = TempDir::new().unwrap();
    let text = "seeds: 9223372036854775800 100\n\nseed-to-soil map:\n0 5 10\n";
    let path = write_almanac(&dir, "huge_seeds.txt", text);

    let almanac = load_almanac(&path, &LoadOptions::lenient()).unwrap();
    let engine = QueryEngine::new(&almanac.pipeline);
    assert_eq!(
        engine.solve(&almanac.seed_spec(SeedMode::Points).unwrap()),
        Some(9_223_372_036_854_775_800)
    );
    assert!(matches!(
        almanac.seed_spec(SeedMode::Ranges),
        Err(AlmanacFormatError::Seeds(SeedSpecError::SeedRangeOutOfRange { .. }))
    ));
}

#[test]
fn test_huge_rule_is_rejected_at_load() {
    let dir = TempDir::new().unwrap();
    let text = "seeds: 1\n\nseed-to-soil map:\n0 9223372036854775800 100\n";
    let path = write_almanac(&dir, "huge_rule.txt", text);

    for options in [LoadOptions::strict(), LoadOptions::lenient()] {
        assert!(matches!(
            load_almanac(&path, &options),
            Err(AlmanacFormatError::ValueOutOfRange { line: 4, .. })
        ));
    }
}
