//! Lesson records and per-subject bundles.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One lesson as stored in a curriculum document.
///
/// Every field is optional at the source. Missing or `null` scalars become an
/// empty string and missing or `null` lists become empty, so formatting never
/// has to deal with absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LessonRecord {
    #[serde(deserialize_with = "text")]
    pub code: String,

    #[serde(deserialize_with = "text")]
    pub title: String,

    #[serde(deserialize_with = "text_list")]
    pub objectives: Vec<String>,

    #[serde(deserialize_with = "text")]
    pub materials: String,

    #[serde(deserialize_with = "text_list")]
    pub activities: Vec<String>,

    #[serde(deserialize_with = "text")]
    pub assessment: String,

    #[serde(deserialize_with = "text")]
    pub standards: String,
}

/// All lessons for one subject, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectBundle {
    subject: String,
    lessons: Vec<(String, LessonRecord)>,
}

impl SubjectBundle {
    /// Create a bundle from `(day_key, lesson)` pairs.
    pub fn new(subject: impl Into<String>, lessons: Vec<(String, LessonRecord)>) -> Self {
        Self {
            subject: subject.into(),
            lessons,
        }
    }

    /// Subject key this bundle was loaded for (e.g. `9th_ela`).
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Number of lessons.
    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }

    /// Look up a lesson by its day key.
    pub fn get(&self, day_key: &str) -> Option<&LessonRecord> {
        self.lessons
            .iter()
            .find(|(key, _)| key == day_key)
            .map(|(_, lesson)| lesson)
    }

    /// Iterate day keys in document order.
    pub fn day_keys(&self) -> impl Iterator<Item = &str> {
        self.lessons.iter().map(|(key, _)| key.as_str())
    }

    /// Iterate `(day_key, lesson)` pairs in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LessonRecord)> {
        self.lessons.iter().map(|(key, lesson)| (key.as_str(), lesson))
    }
}

/// Render a JSON value as text. Strings are taken verbatim, everything else
/// uses its compact JSON form.
fn value_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}

fn text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        other => Ok(value_text(other)),
    }
}

// List items are stringified, not type-checked.
fn text_list<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(Vec::new()),
        Value::Array(items) => Ok(items.into_iter().map(value_text).collect()),
        other => Err(D::Error::custom(format!(
            "expected a list of strings, found {}",
            kind(&other)
        ))),
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}
