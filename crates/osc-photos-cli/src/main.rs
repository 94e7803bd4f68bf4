//! osc-photos — reduce an OpenStreetCam API dump to lat/lng/heading/shot_date
//!
//! Given `osc.json`, writes two files next to it:
//!
//! - `extracted_osc.json`: only the `photos` array, as `{"photos":[...]}`
//! - `cleaned_osc.json`: each photo reduced to its four mapping fields
//!
//! Usage examples
//! --------------
//!
//! - Default run (structural parse, all records)
//!   $ osc-photos osc.json
//!
//! - Reproduce the original script (marker slicing, exactly 7847 records)
//!   $ osc-photos --legacy osc.json
//!
//! - Gzipped dump, outputs elsewhere, with a summary
//!   $ osc-photos --out-dir prepared/ --stats osc.json.gz
//!
//! Set `RUST_LOG=debug` (or pass `-v`) for progress logs.
mod args;

use crate::args::CliArgs;
use anyhow::Context;
use clap::Parser;
use osc_photos_core::run;

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let default_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let opts = args.options();
    log::debug!("options: {opts:?}");

    let report = run(&args.jsonfile, &opts)
        .with_context(|| format!("failed to process {}", args.jsonfile.display()))?;

    println!("Extracted: {}", report.paths.extracted.display());
    println!(
        "Cleaned:   {} ({} records)",
        report.paths.cleaned.display(),
        report.records()
    );

    if args.stats {
        let stats = report.stats();
        println!("Photo statistics:");
        println!("  Records: {}", stats.records);
        println!("  Without coordinates: {}", stats.without_coordinates);
        match stats.bounds {
            Some(b) => {
                println!("  Latitude:  {} .. {}", b.min_lat, b.max_lat);
                println!("  Longitude: {} .. {}", b.min_lng, b.max_lng);
            }
            None => println!("  Bounds: n/a"),
        }
        println!("  First shot: {}", stats.first_shot.as_deref().unwrap_or("n/a"));
        println!("  Last shot:  {}", stats.last_shot.as_deref().unwrap_or("n/a"));
    }

    Ok(())
}
