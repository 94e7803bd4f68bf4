// crates/osc-photos-core/src/lib.rs

//! # osc-photos-core
//!
//! Reduces OpenStreetCam API dumps to the fields needed for mapping work.
//!
//! A dump is one large JSON object whose `photos` array holds a record per
//! captured image. The pipeline runs in two passes:
//!
//! 1. **Extraction** pulls the `photos` array out into `extracted_<name>`
//!    (see [`extract`](mod@extract)).
//! 2. **Projection** keeps `lat`, `lng`, `heading` and `shot_date` from each
//!    record and writes `cleaned_<name>` (see [`project`](mod@project)).
//!
//! ```no_run
//! use osc_photos_core::{run, PipelineOptions};
//!
//! let report = run("osc_dump.json", &PipelineOptions::default())?;
//! println!("{} photos -> {}", report.records(), report.paths.cleaned.display());
//! # Ok::<(), osc_photos_core::PhotoError>(())
//! ```

pub mod common;
pub mod error;
pub mod extract;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod project;

// Re-exports
pub use crate::common::LEGACY_RECORD_COUNT;
pub use crate::error::{PhotoError, Result};
pub use crate::extract::{extract, write_extracted, ExtractMode};
pub use crate::loader::{read_input, OutputPaths};
pub use crate::model::{BoundingBox, CleanedDocument, PhotoRecord, PhotoStats};
pub use crate::pipeline::{run, PipelineOptions, PipelineReport};
pub use crate::project::{clean_extracted, project, RecordCount};
