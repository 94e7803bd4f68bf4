// crates/osc-photos-core/src/model/stats.rs
use super::record::CleanedDocument;
use serde::{Deserialize, Serialize};

/// Geographic extent of the records that carry numeric coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    fn point(lat: f64, lng: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_lng: lng,
            max_lng: lng,
        }
    }

    fn extend(&mut self, lat: f64, lng: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lng = self.max_lng.max(lng);
    }
}

/// Summary of a cleaned document.
///
/// `first_shot`/`last_shot` compare the raw date strings lexically, which is
/// chronological for the `YYYY-MM-DD HH:MM:SS` format the API emits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhotoStats {
    pub records: usize,
    /// Records whose lat/lng could not be read as numbers.
    pub without_coordinates: usize,
    pub bounds: Option<BoundingBox>,
    pub first_shot: Option<String>,
    pub last_shot: Option<String>,
}

impl PhotoStats {
    pub fn from_cleaned(doc: &CleanedDocument) -> Self {
        let mut stats = PhotoStats {
            records: doc.len(),
            ..Default::default()
        };

        for rec in &doc.photos {
            match (rec.latitude(), rec.longitude()) {
                (Some(lat), Some(lng)) => match stats.bounds.as_mut() {
                    Some(b) => b.extend(lat, lng),
                    None => stats.bounds = Some(BoundingBox::point(lat, lng)),
                },
                _ => stats.without_coordinates += 1,
            }

            if let Some(date) = rec.shot_date_str() {
                if stats.first_shot.as_deref().map_or(true, |d| date < d) {
                    stats.first_shot = Some(date.to_owned());
                }
                if stats.last_shot.as_deref().map_or(true, |d| date > d) {
                    stats.last_shot = Some(date.to_owned());
                }
            }
        }

        stats
    }
}
