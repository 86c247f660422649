//! Almanac solver CLI
//!
//! Usage: almanac_solve <part> <input-path> [--trace] [--parallel] [--lenient]
//!
//! Part 1 treats every seed number as a seed, part 2 reads them as
//! (start, length) pairs. Prints the lowest location.
//!
//! Example:
//!   almanac_solve 1 input.txt
//!   almanac_solve 2 input.txt --parallel
//!
//! Set RUST_LOG=debug (or trace) for load and per-stage diagnostics.

use almanac_ranges::constants::CATEGORY_NAMES;
use almanac_ranges::domain::almanac_format::{Almanac, AlmanacFormatError};
use almanac_ranges::{
    LoadOptions, QueryEngine, SeedMode, SeedSpec, SeedSpecError, StageMapError, load_almanac,
};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Instant;

fn format_load_error(path: &Path, err: AlmanacFormatError) -> String {
    match err {
        AlmanacFormatError::Io(msg) => {
            format!("Could not read '{}': {}", path.display(), msg)
        }
        AlmanacFormatError::StageMap(StageMapError::OverlappingRules { .. }) => format!(
            "{}.\nRules within a stage must not overlap; pass --lenient to skip this check.",
            err
        ),
        AlmanacFormatError::MissingSection(_) => format!(
            "{}.\nPass --lenient to treat missing stages as identity.",
            err
        ),
        AlmanacFormatError::Seeds(SeedSpecError::OddSeedCount(_)) => {
            format!("{}.\nPart 2 requires seeds as (start, length) pairs.", err)
        }
        other => format!("{}: {}", path.display(), other),
    }
}

fn category_name(index: usize) -> String {
    CATEGORY_NAMES
        .get(index)
        .map(|name| name.to_string())
        .unwrap_or_else(|| format!("Stage {}", index))
}

fn print_trace(almanac: &Almanac, seeds: &SeedSpec) {
    let pipeline = &almanac.pipeline;
    match seeds {
        SeedSpec::Points(points) => {
            let header: Vec<String> = (0..=pipeline.len()).map(category_name).collect();
            println!("{}", header.join(" -> "));
            for &seed in points {
                let values: Vec<String> = pipeline
                    .trace_point(seed)
                    .iter()
                    .map(|v| v.to_string())
                    .collect();
                println!("{}", values.join(" -> "));
            }
        }
        SeedSpec::Ranges(ranges) => {
            for (index, snapshot) in pipeline.trace_ranges(ranges).iter().enumerate() {
                let ranges: Vec<String> = snapshot.iter().map(|r| r.to_string()).collect();
                println!("{}: {}", category_name(index), ranges.join(" "));
            }
        }
    }
    println!();
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 3 || args.len() > 6 {
        eprintln!(
            "Usage: {} <part> <input-path> [--trace] [--parallel] [--lenient]",
            args[0]
        );
        eprintln!("Parts: 1 (seed points), 2 (seed ranges)");
        std::process::exit(1);
    }

    let mode = match args[1].as_str() {
        "1" => SeedMode::Points,
        "2" => SeedMode::Ranges,
        other => {
            eprintln!("Error: Invalid part number '{}'. Expected 1 or 2.", other);
            std::process::exit(1);
        }
    };

    let input_path = PathBuf::from(&args[2]);
    let mut trace = false;
    let mut parallel = false;
    let mut options = LoadOptions::strict();

    for flag in &args[3..] {
        match flag.as_str() {
            "--trace" => trace = true,
            "--parallel" => parallel = true,
            "--lenient" => options = LoadOptions::lenient(),
            other => {
                eprintln!("Unknown option: {}", other);
                std::process::exit(1);
            }
        }
    }

    let start_load = Instant::now();
    let almanac = match load_almanac(&input_path, &options) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", format_load_error(&input_path, e));
            std::process::exit(1);
        }
    };
    log::info!(
        "Loaded {} in {:.3} ms",
        input_path.display(),
        start_load.elapsed().as_secs_f64() * 1000.0
    );

    let seeds = match almanac.seed_spec(mode) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Error: {}", format_load_error(&input_path, e));
            std::process::exit(1);
        }
    };

    if trace {
        print_trace(&almanac, &seeds);
    }

    let start = Instant::now();
    let engine = QueryEngine::new(&almanac.pipeline);
    let lowest = if parallel {
        engine.solve_parallel(&seeds)
    } else {
        engine.solve(&seeds)
    };
    log::info!(
        "Solved {} seed entries in {:.3} ms",
        seeds.len(),
        start.elapsed().as_secs_f64() * 1000.0
    );

    match lowest {
        Some(location) => println!("Min location: {}", location),
        None => {
            eprintln!("No seeds to evaluate.");
            std::process::exit(1);
        }
    }
}
