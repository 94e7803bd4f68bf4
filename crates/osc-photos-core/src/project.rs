// crates/osc-photos-core/src/project.rs

//! Second pass: reduce every record of an extracted document to
//! `lat`/`lng`/`heading`/`shot_date`.

use crate::error::{PhotoError, Result};
use crate::model::record::photos_array;
use crate::model::{CleanedDocument, PhotoRecord};
use serde_json::Value;

/// How many records the projection must produce.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordCount {
    /// Every record in the array.
    #[default]
    All,
    /// Exactly the first `n`; fewer available is an error.
    Exact(usize),
}

/// Projects an already parsed document.
pub fn project_value(doc: &Value, count: RecordCount) -> Result<CleanedDocument> {
    let records = photos_array(doc)?;

    let take = match count {
        RecordCount::All => records.len(),
        RecordCount::Exact(n) if n > records.len() => {
            return Err(PhotoError::IndexOutOfRange {
                expected: n,
                available: records.len(),
            });
        }
        RecordCount::Exact(n) => {
            if n < records.len() {
                log::info!("keeping {n} of {} records", records.len());
            }
            n
        }
    };

    let photos = records[..take]
        .iter()
        .enumerate()
        .map(|(i, rec)| PhotoRecord::from_source(i, rec))
        .collect::<Result<Vec<_>>>()?;

    Ok(CleanedDocument { photos })
}

/// Parses `text` (typically the extracted document) and projects it.
pub fn project(text: &str, count: RecordCount) -> Result<CleanedDocument> {
    let doc: Value = serde_json::from_str(text)?;
    project_value(&doc, count)
}

/// [`project`] followed by serialization, i.e. the contents of `cleaned_<name>`.
pub fn clean_extracted(text: &str, count: RecordCount, pretty: bool) -> Result<String> {
    project(text, count)?.to_json(pretty)
}
