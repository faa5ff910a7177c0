//! Loading curriculum documents from JSON files.
//!
//! A document maps subject keys to per-subject objects, which in turn map day
//! keys to lesson records:
//!
//! ```json
//! { "9th_ela": { "1.a": { "code": "L1", "title": "..." } } }
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::{CurriculumError, Result};
use crate::lesson::{LessonRecord, SubjectBundle};

/// A parsed curriculum document.
#[derive(Debug, Clone)]
pub struct SubjectDocument {
    path: PathBuf,
    subjects: Map<String, Value>,
}

impl SubjectDocument {
    /// Parse a document from a JSON string. `path` is only used in diagnostics.
    pub fn from_json(path: impl Into<PathBuf>, json: &str) -> Result<Self> {
        let path = path.into();
        let value: Value = serde_json::from_str(json)
            .map_err(|e| CurriculumError::malformed_input(&path, e.to_string()))?;

        match value {
            Value::Object(subjects) => Ok(Self { path, subjects }),
            _ => Err(CurriculumError::malformed_input(
                &path,
                "top level must be an object keyed by subject",
            )),
        }
    }

    /// Path the document was read from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Subject keys present in the document, in document order.
    pub fn subject_keys(&self) -> impl Iterator<Item = &str> {
        self.subjects.keys().map(String::as_str)
    }

    /// Extract the lessons for `subject_key`.
    pub fn subject(&self, subject_key: &str) -> Result<SubjectBundle> {
        let value = self
            .subjects
            .get(subject_key)
            .ok_or_else(|| {
                CurriculumError::not_found(subject_key, &self.path, self.subject_keys())
            })?;

        let days = value.as_object().ok_or_else(|| {
            CurriculumError::malformed_input(
                &self.path,
                format!("subject '{}' must be an object keyed by day", subject_key),
            )
        })?;

        let mut lessons = Vec::with_capacity(days.len());
        for (day_key, lesson) in days {
            let record = LessonRecord::deserialize(lesson).map_err(|e| {
                CurriculumError::malformed_input(
                    &self.path,
                    format!("subject '{}', day '{}': {}", subject_key, day_key, e),
                )
            })?;
            lessons.push((day_key.clone(), record));
        }

        debug!(
            "Loaded {} lessons for {} from {}",
            lessons.len(),
            subject_key,
            self.path.display()
        );
        Ok(SubjectBundle::new(subject_key, lessons))
    }
}

/// Read and parse a curriculum document.
pub fn load_document<P: AsRef<Path>>(source_path: P) -> Result<SubjectDocument> {
    let path = source_path.as_ref();
    debug!("Reading {}", path.display());
    let content = std::fs::read_to_string(path)
        .map_err(|e| std::io::Error::new(e.kind(), format!("{}: {}", path.display(), e)))?;
    SubjectDocument::from_json(path, &content)
}

/// Load the lessons for one subject from a document on disk.
pub fn load_subject<P: AsRef<Path>>(subject_key: &str, source_path: P) -> Result<SubjectBundle> {
    load_document(source_path)?.subject(subject_key)
}
