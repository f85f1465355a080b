use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

/// A course record as delivered by the backend.
///
/// Every field is optional; missing values are filled in by
/// [`crate::defaults`] when a matrix cell is materialized, never here.
/// Fields the backend sends that are not listed (prerequisite strings and
/// the like) are ignored on deserialization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credits: Option<f64>,
    #[serde(
        default,
        deserialize_with = "deserialize_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub l: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub t: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_hours",
        skip_serializing_if = "Option::is_none"
    )]
    pub p: Option<u32>,
    /// Category tag (e.g. `Core`, `DE`, `HUL2XX`), only used for styling.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,
}

impl Course {
    pub fn new(code: impl Into<String>, title: impl Into<String>, credits: f64) -> Self {
        Self {
            code: Some(code.into()),
            title: Some(title.into()),
            credits: Some(credits),
            ..Default::default()
        }
    }

    pub fn with_hours(mut self, l: u32, t: u32, p: u32) -> Self {
        self.l = Some(l);
        self.t = Some(t);
        self.p = Some(p);
        self
    }

    pub fn with_kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }
}

/// Weekly hours arrive as JSON numbers and may be spelled `3.0` for 3. Any
/// finite, non-negative whole number that fits in `u32` is taken.
fn deserialize_hours<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(hours) = Option::<f64>::deserialize(deserializer)? else {
        return Ok(None);
    };
    if !hours.is_finite() || hours < 0.0 || hours.fract() != 0.0 || hours > f64::from(u32::MAX) {
        return Err(de::Error::custom(format!(
            "hours must be a non-negative whole number, found {}",
            hours
        )));
    }
    Ok(Some(hours as u32))
}
