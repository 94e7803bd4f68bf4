// crates/osc-photos-core/src/model/mod.rs
pub mod record;
pub mod stats;

pub use record::{CleanedDocument, PhotoRecord};
pub use stats::{BoundingBox, PhotoStats};
