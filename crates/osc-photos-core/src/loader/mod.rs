// crates/osc-photos-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer: reading dumps (optionally gzipped), deriving
//! output names and writing outputs.

use crate::error::Result;
use std::io::Read;
use std::path::Path;

mod common_io;

pub use common_io::{open_stream, output_paths, write_atomic, OutputPaths};

/// Reads the whole dump into memory as text.
pub fn read_input(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let mut reader = open_stream(path)?;
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    log::info!("read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
