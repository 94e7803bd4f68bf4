// crates/osc-photos-core/src/pipeline.rs
use crate::common::LEGACY_RECORD_COUNT;
use crate::error::Result;
use crate::extract::{extract, ExtractMode};
use crate::loader::{output_paths, read_input, write_atomic, OutputPaths};
use crate::model::{CleanedDocument, PhotoStats};
use crate::project::{project, RecordCount};
use std::path::{Path, PathBuf};

/// Knobs for a single run.
#[derive(Debug, Clone, Default)]
pub struct PipelineOptions {
    pub mode: ExtractMode,
    pub count: RecordCount,
    /// Directory for the outputs. `None` = next to the input.
    pub out_dir: Option<PathBuf>,
    pub pretty: bool,
}

impl PipelineOptions {
    /// Marker extraction and a fixed 7847-record projection, the way the
    /// original script behaved.
    pub fn legacy() -> Self {
        Self {
            mode: ExtractMode::Marker,
            count: RecordCount::Exact(LEGACY_RECORD_COUNT),
            ..Default::default()
        }
    }
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    pub paths: OutputPaths,
    pub cleaned: CleanedDocument,
}

impl PipelineReport {
    pub fn records(&self) -> usize {
        self.cleaned.len()
    }

    pub fn stats(&self) -> PhotoStats {
        PhotoStats::from_cleaned(&self.cleaned)
    }
}

/// Read, extract, project, write.
///
/// Both outputs are built in memory before anything touches the disk, so a
/// missing marker, bad JSON or a short array leaves no files behind.
pub fn run(input: impl AsRef<Path>, opts: &PipelineOptions) -> Result<PipelineReport> {
    let input = input.as_ref();
    let paths = output_paths(input, opts.out_dir.as_deref())?;

    let text = read_input(input)?;
    let extracted = extract(&text, opts.mode, opts.pretty)?;
    let cleaned = project(&extracted, opts.count)?;
    let cleaned_text = cleaned.to_json(opts.pretty)?;

    write_atomic(&paths.extracted, &extracted)?;
    if let Err(e) = write_atomic(&paths.cleaned, &cleaned_text) {
        // Don't leave a lone extracted file from a failed run.
        let _ = std::fs::remove_file(&paths.extracted);
        return Err(e);
    }

    log::info!(
        "{} ({} mode): {} records -> {}, {}",
        input.display(),
        opts.mode,
        cleaned.len(),
        paths.extracted.display(),
        paths.cleaned.display()
    );

    Ok(PipelineReport { paths, cleaned })
}
