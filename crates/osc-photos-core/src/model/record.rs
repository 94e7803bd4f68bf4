// crates/osc-photos-core/src/model/record.rs
use crate::common::{PHOTOS_KEY, PROJECTED_FIELDS};
use crate::error::{PhotoError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One projected photo: the four fields we keep from an OpenStreetCam record.
///
/// Values are copied verbatim from the source. The API is not consistent about
/// types (coordinates often arrive as strings like `"46.7712"`), so we keep the
/// raw JSON value and offer numeric accessors on top.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub lat: Value,
    pub lng: Value,
    pub heading: Value,
    pub shot_date: Value,
}

impl PhotoRecord {
    /// Copies the four fields out of `photos[index]`. Extra fields are dropped.
    pub fn from_source(index: usize, source: &Value) -> Result<Self> {
        let obj = source
            .as_object()
            .ok_or(PhotoError::NotAnObject { index })?;

        let [lat, lng, heading, shot_date] =
            PROJECTED_FIELDS.map(|field| take(obj, index, field));
        Ok(Self {
            lat: lat?,
            lng: lng?,
            heading: heading?,
            shot_date: shot_date?,
        })
    }

    pub fn latitude(&self) -> Option<f64> {
        as_f64(&self.lat)
    }

    pub fn longitude(&self) -> Option<f64> {
        as_f64(&self.lng)
    }

    pub fn shot_date_str(&self) -> Option<&str> {
        self.shot_date.as_str()
    }
}

fn take(obj: &Map<String, Value>, index: usize, field: &'static str) -> Result<Value> {
    obj.get(field)
        .cloned()
        .ok_or(PhotoError::MissingField { index, field })
}

/// Numbers pass through; numeric strings are parsed.
fn as_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// The reduced document written to `cleaned_<name>`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedDocument {
    pub photos: Vec<PhotoRecord>,
}

impl CleanedDocument {
    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    /// Serializes as `{"photos":[...]}`.
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let text = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(text)
    }
}

/// Returns the `photos` array of a parsed document.
pub(crate) fn photos_array(doc: &Value) -> Result<&Vec<Value>> {
    doc.get(PHOTOS_KEY)
        .ok_or(PhotoError::MissingPhotos)?
        .as_array()
        .ok_or(PhotoError::NotAnArray)
}
