// crates/osc-photos-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong between reading a dump and writing the
/// cleaned file.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PhotoError {
    /// A literal marker of the `photos` array was not found in the text.
    #[error("marker `{marker}` not found in input")]
    MarkerNotFound { marker: &'static str },

    /// Top-level object has no `photos` key.
    #[error("input has no top-level `photos` key")]
    MissingPhotos,

    #[error("`photos` is not an array")]
    NotAnArray,

    #[error("photos[{index}] is not an object")]
    NotAnObject { index: usize },

    #[error("photos[{index}] has no `{field}` field")]
    MissingField { index: usize, field: &'static str },

    /// Fewer records than the caller required.
    #[error("expected {expected} photo records, found only {available}")]
    IndexOutOfRange { expected: usize, available: usize },

    #[error("{0}")]
    NotFound(String),

    #[error("invalid path: {0}")]
    InvalidPath(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PhotoError>;
