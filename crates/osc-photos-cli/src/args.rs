use clap::{Parser, ValueEnum};
use osc_photos_core::{ExtractMode, PipelineOptions, RecordCount};
use std::path::PathBuf;

/// CLI arguments for osc-photos
#[derive(Debug, Parser)]
#[command(
    name = "osc-photos",
    version,
    about = "Extract the 'photos' field of an OpenStreetCam API JSON response"
)]
pub struct CliArgs {
    /// JSON file with the OpenStreetCam response (.json or .json.gz)
    pub jsonfile: PathBuf,

    /// How to locate the photos array
    #[arg(short = 'm', long = "mode", value_enum, default_value_t = Mode::Structural)]
    pub mode: Mode,

    /// Require exactly N records; fail if the dump has fewer
    #[arg(short = 'e', long = "expect", value_name = "N")]
    pub expect: Option<usize>,

    /// Behave like the original script: marker mode, exactly 7847 records
    #[arg(long = "legacy", conflicts_with_all = ["mode", "expect"])]
    pub legacy: bool,

    /// Directory for extracted_*/cleaned_* (default: next to the input)
    #[arg(short = 'o', long = "out-dir")]
    pub out_dir: Option<PathBuf>,

    /// Pretty-print the JSON outputs
    #[arg(long = "pretty")]
    pub pretty: bool,

    /// Print a summary of the cleaned records
    #[arg(long = "stats")]
    pub stats: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Parse the JSON and re-serialize the photos array
    Structural,
    /// Slice the raw text between `"photos":[{` and `}]`
    Marker,
}

impl From<Mode> for ExtractMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Structural => ExtractMode::Structural,
            Mode::Marker => ExtractMode::Marker,
        }
    }
}

impl CliArgs {
    pub fn options(&self) -> PipelineOptions {
        let base = if self.legacy {
            PipelineOptions::legacy()
        } else {
            PipelineOptions {
                mode: self.mode.into(),
                count: self.expect.map_or(RecordCount::All, RecordCount::Exact),
                ..Default::default()
            }
        };

        PipelineOptions {
            out_dir: self.out_dir.clone(),
            pretty: self.pretty,
            ..base
        }
    }
}
