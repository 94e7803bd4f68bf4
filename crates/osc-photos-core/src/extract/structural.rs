// crates/osc-photos-core/src/extract/structural.rs
use crate::common::PHOTOS_KEY;
use crate::error::{PhotoError, Result};
use serde::Serialize;
use serde_json::Value;

#[derive(Serialize)]
struct PhotosEnvelope<'a> {
    photos: &'a Value,
}

/// Parses the whole dump and re-serializes only its `photos` array.
///
/// Record contents are untouched: key order is preserved and strings may
/// contain anything, including `}]`.
pub fn extract_structural(text: &str, pretty: bool) -> Result<String> {
    let mut doc: Value = serde_json::from_str(text)?;

    let photos = doc
        .get_mut(PHOTOS_KEY)
        .map(Value::take)
        .ok_or(PhotoError::MissingPhotos)?;
    let Some(records) = photos.as_array() else {
        return Err(PhotoError::NotAnArray);
    };
    log::debug!("parsed {} photo records", records.len());

    let envelope = PhotosEnvelope { photos: &photos };
    let out = if pretty {
        serde_json::to_string_pretty(&envelope)?
    } else {
        serde_json::to_string(&envelope)?
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_photos_key() {
        let text = r#"{"status":{"apiCode":"600"},"photos":[{"id":"7","lat":"1"}],"totalFilteredItems":["1"]}"#;
        let out = extract_structural(text, false).unwrap();
        assert_eq!(out, r#"{"photos":[{"id":"7","lat":"1"}]}"#);
    }

    #[test]
    fn tolerates_whitespace_and_embedded_terminators() {
        let text = "{ \"photos\" : [ {\"name\": \"a}]b\"}, {\"lat\": 1} ] }";
        let out = extract_structural(text, false).unwrap();
        assert_eq!(out, r#"{"photos":[{"name":"a}]b"},{"lat":1}]}"#);
    }

    #[test]
    fn empty_array_is_allowed() {
        assert_eq!(
            extract_structural(r#"{"photos":[]}"#, false).unwrap(),
            r#"{"photos":[]}"#
        );
    }

    #[test]
    fn shape_errors() {
        assert!(matches!(
            extract_structural(r#"{"items":[]}"#, false),
            Err(PhotoError::MissingPhotos)
        ));
        assert!(matches!(
            extract_structural(r#"[1,2]"#, false),
            Err(PhotoError::MissingPhotos)
        ));
        assert!(matches!(
            extract_structural(r#"{"photos":"none"}"#, false),
            Err(PhotoError::NotAnArray)
        ));
        assert!(matches!(
            extract_structural(r#"{"photos":[{]}"#, false),
            Err(PhotoError::Json(_))
        ));
    }
}
