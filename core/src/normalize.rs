use crate::model::{Course, DegreePlan, Semester};
use crate::prelude::{InputIssue, JsonKind, PlanError, PlanResult};
use serde::de::{self, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;

/// Turns a raw semester-keyed mapping into an ordered [`DegreePlan`].
///
/// The mapping is treated as unordered: output order always comes from the
/// parsed semester numbers. Course order within a semester is kept as given.
pub struct Normalizer;

impl Normalizer {
    /// Normalizes a payload straight from its JSON bytes.
    ///
    /// Unlike going through [`Value`], a key repeated literally in the text
    /// (`{"3": [...], "3": [...]}`) is seen twice and rejected as a duplicate.
    pub fn from_slice(bytes: &[u8]) -> PlanResult<DegreePlan> {
        let payload: RawPayload = serde_json::from_slice(bytes).map_err(|err| {
            PlanError::from(InputIssue::NotJson {
                reason: err.to_string(),
            })
        })?;

        match payload {
            RawPayload::Entries(entries) => {
                Self::from_entries(entries.iter().map(|(key, value)| (key.as_str(), value)))
            }
            RawPayload::Other(found) => Err(InputIssue::NotAMapping { found }.into()),
        }
    }

    pub fn from_json_str(text: &str) -> PlanResult<DegreePlan> {
        Self::from_slice(text.as_bytes())
    }

    /// Normalizes an untyped backend payload such as `{"1": [...], "2": [...]}`.
    pub fn from_value(raw: &Value) -> PlanResult<DegreePlan> {
        let object = raw.as_object().ok_or_else(|| InputIssue::NotAMapping {
            found: JsonKind::of(raw),
        })?;

        Self::from_entries(object.iter().map(|(key, value)| (key.as_str(), value)))
    }

    fn from_entries<'a, I>(raw: I) -> PlanResult<DegreePlan>
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut entries = Vec::new();
        for (key, value) in raw {
            let items = value.as_array().ok_or_else(|| InputIssue::NotASequence {
                key: key.to_string(),
                found: JsonKind::of(value),
            })?;
            let courses = items
                .iter()
                .enumerate()
                .map(|(idx, item)| decode_course(key, idx + 1, item))
                .collect::<PlanResult<Vec<_>>>()?;
            entries.push((key, courses));
        }

        Self::normalize(entries)
    }

    /// Normalizes already-decoded `(semester key, courses)` pairs.
    pub fn normalize<I, K>(raw: I) -> PlanResult<DegreePlan>
    where
        I: IntoIterator<Item = (K, Vec<Course>)>,
        K: AsRef<str>,
    {
        let semesters = raw
            .into_iter()
            .map(|(key, courses)| {
                parse_semester_key(key.as_ref()).map(|number| Semester::new(number, courses))
            })
            .collect::<PlanResult<Vec<_>>>()?;

        DegreePlan::from_semesters(semesters)
    }
}

/// Parses a semester key as a positive decimal integer.
pub fn parse_semester_key(key: &str) -> PlanResult<u32> {
    match key.parse::<u32>() {
        Ok(number) if number > 0 => Ok(number),
        _ => Err(InputIssue::BadSemesterKey {
            key: key.to_string(),
        }
        .into()),
    }
}

fn decode_course(key: &str, position: usize, item: &Value) -> PlanResult<Course> {
    if !item.is_object() {
        return Err(InputIssue::MalformedCourse {
            key: key.to_string(),
            position,
            reason: format!("expected an object, found {}", JsonKind::of(item)),
        }
        .into());
    }

    Course::deserialize(item).map_err(|err| {
        PlanError::from(InputIssue::MalformedCourse {
            key: key.to_string(),
            position,
            reason: err.to_string(),
        })
    })
}

/// Top-level JSON value as seen by [`Normalizer::from_slice`]: object
/// entries in document order with repeats kept, or just the kind of anything
/// else.
enum RawPayload {
    Entries(Vec<(String, Value)>),
    Other(JsonKind),
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(RawPayloadVisitor)
    }
}

struct RawPayloadVisitor;

impl<'de> Visitor<'de> for RawPayloadVisitor {
    type Value = RawPayload;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a JSON value")
    }

    fn visit_map<A>(self, mut map: A) -> Result<RawPayload, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            entries.push((key, value));
        }
        Ok(RawPayload::Entries(entries))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<RawPayload, A::Error>
    where
        A: SeqAccess<'de>,
    {
        while seq.next_element::<IgnoredAny>()?.is_some() {}
        Ok(RawPayload::Other(JsonKind::Array))
    }

    fn visit_unit<E: de::Error>(self) -> Result<RawPayload, E> {
        Ok(RawPayload::Other(JsonKind::Null))
    }

    fn visit_bool<E: de::Error>(self, _: bool) -> Result<RawPayload, E> {
        Ok(RawPayload::Other(JsonKind::Bool))
    }

    fn visit_i64<E: de::Error>(self, _: i64) -> Result<RawPayload, E> {
        Ok(RawPayload::Other(JsonKind::Number))
    }

    fn visit_u64<E: de::Error>(self, _: u64) -> Result<RawPayload, E> {
        Ok(RawPayload::Other(JsonKind::Number))
    }

    fn visit_f64<E: de::Error>(self, _: f64) -> Result<RawPayload, E> {
        Ok(RawPayload::Other(JsonKind::Number))
    }

    fn visit_str<E: de::Error>(self, _: &str) -> Result<RawPayload, E> {
        Ok(RawPayload::Other(JsonKind::String))
    }
}
