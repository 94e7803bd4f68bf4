//! Names and constants shared by the extractor, the projector and the CLI.

/// Key of the array we pull out of an OpenStreetCam response.
pub const PHOTOS_KEY: &str = "photos";

/// Record count the original one-off script hard-coded for its dump.
pub const LEGACY_RECORD_COUNT: usize = 7847;

pub const EXTRACTED_PREFIX: &str = "extracted_";
pub const CLEANED_PREFIX: &str = "cleaned_";

/// The four fields kept per record, in output order.
pub const PROJECTED_FIELDS: [&str; 4] = ["lat", "lng", "heading", "shot_date"];
