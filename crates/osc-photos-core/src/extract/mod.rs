// crates/osc-photos-core/src/extract/mod.rs

//! # Extraction
//!
//! First pass of the pipeline: isolate the `photos` array of a dump as a
//! standalone `{"photos":[...]}` document. Two strategies are available,
//! see [`ExtractMode`].

use crate::error::Result;
use crate::loader::write_atomic;
use std::fmt;
use std::path::Path;

mod marker;
mod structural;

pub use marker::{extract_by_marker, locate_photos_span, CLOSE_MARKER, OPEN_MARKER};
pub use structural::extract_structural;

/// How the `photos` array is found in the input text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExtractMode {
    /// Parse the document and re-serialize the `photos` value.
    #[default]
    Structural,
    /// Slice the text between `"photos":[{` and the next `}]`, verbatim.
    Marker,
}

impl fmt::Display for ExtractMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExtractMode::Structural => f.write_str("structural"),
            ExtractMode::Marker => f.write_str("marker"),
        }
    }
}

/// Produces the extracted document text. `pretty` only applies to
/// structural mode; marker mode always returns the input bytes as found.
pub fn extract(text: &str, mode: ExtractMode, pretty: bool) -> Result<String> {
    match mode {
        ExtractMode::Structural => extract_structural(text, pretty),
        ExtractMode::Marker => extract_by_marker(text),
    }
}

/// Extracts, writes the result to `output`, and hands the text back for the
/// projection step. Nothing is written when extraction fails.
pub fn write_extracted(
    output: impl AsRef<Path>,
    text: &str,
    mode: ExtractMode,
    pretty: bool,
) -> Result<String> {
    let extracted = extract(text, mode, pretty)?;
    write_atomic(output.as_ref(), &extracted)?;
    Ok(extracted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    const DUMP: &str = r#"{"status":{"apiCode":"600"},"photos":[{"lat":1.1,"lng":2.2,"heading":90,"shot_date":"2020-01-01","id":"x"},{"lat":3.3,"lng":4.4,"heading":180,"shot_date":"2020-01-02","id":"y"}]}"#;

    #[test]
    fn modes_agree_on_well_formed_input() {
        let a: Value = serde_json::from_str(&extract(DUMP, ExtractMode::Structural, false).unwrap()).unwrap();
        let b: Value = serde_json::from_str(&extract(DUMP, ExtractMode::Marker, false).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn only_marker_mode_keeps_number_text() {
        let text = r#"{"photos":[{"lat":46.7712000,"heading":90}]}"#;
        assert_eq!(extract(text, ExtractMode::Marker, false).unwrap(), text);
        assert_eq!(
            extract(text, ExtractMode::Structural, false).unwrap(),
            r#"{"photos":[{"lat":46.7712,"heading":90}]}"#
        );
    }

    #[test]
    fn marker_mode_ignores_pretty() {
        let out = extract(DUMP, ExtractMode::Marker, true).unwrap();
        assert!(!out.contains('\n'));
    }

    #[test]
    fn write_extracted_returns_written_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted_dump.json");
        let text = write_extracted(&path, DUMP, ExtractMode::Structural, false).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), text);
    }

    #[test]
    fn write_extracted_leaves_no_file_on_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("extracted_dump.json");
        assert!(write_extracted(&path, "{}", ExtractMode::Marker, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn display_names() {
        assert_eq!(ExtractMode::default().to_string(), "structural");
        assert_eq!(ExtractMode::Marker.to_string(), "marker");
    }
}
