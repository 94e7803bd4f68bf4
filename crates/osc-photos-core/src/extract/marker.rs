// crates/osc-photos-core/src/extract/marker.rs
//
// Literal-marker extraction. Byte-for-byte compatible with the legacy script:
// no parsing, just two substring searches. Breaks if the dump writes
// `"photos": [` with whitespace, or if any record contains `}]`.
use crate::error::{PhotoError, Result};
use std::ops::Range;

pub const OPEN_MARKER: &str = "\"photos\":[{";
pub const CLOSE_MARKER: &str = "}]";

/// Byte range from the start of `"photos":[{` through the end of the first
/// `}]` that follows it.
pub fn locate_photos_span(text: &str) -> Result<Range<usize>> {
    let start = text.find(OPEN_MARKER).ok_or(PhotoError::MarkerNotFound {
        marker: OPEN_MARKER,
    })?;

    // Search starts one byte past the opening quote, as the legacy tool did.
    let from = start + 1;
    let close = text[from..]
        .find(CLOSE_MARKER)
        .ok_or(PhotoError::MarkerNotFound {
            marker: CLOSE_MARKER,
        })?;

    Ok(start..from + close + CLOSE_MARKER.len())
}

/// Wraps the located span in braces: `{"photos":[{...}]}`.
pub fn extract_by_marker(text: &str) -> Result<String> {
    let span = locate_photos_span(text)?;
    log::debug!("photos span at bytes {}..{}", span.start, span.end);

    let body = &text[span];
    let mut out = String::with_capacity(body.len() + 2);
    out.push('{');
    out.push_str(body);
    out.push('}');
    Ok(out)
}
