//! Configuration type definitions.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CurriculumError;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory that subject files are resolved against
    /// (default: "centner_standards_by_calendar").
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Table the INSERT statements target (default: "curriculum_lessons").
    #[serde(default = "default_table")]
    pub table: String,

    /// Subjects to generate, in output order.
    #[serde(default)]
    pub subjects: Vec<SubjectConfig>,
}

impl Default for Config {
    /// The two ELA courses, 9th grade first.
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            table: default_table(),
            subjects: vec![
                SubjectConfig::new("9th_ela", "9th_ela.json")
                    .with_banner("9TH GRADE ELA CURRICULUM INSERT"),
                SubjectConfig::new("11th_ela", "11th_ela.json")
                    .with_banner("11TH GRADE ELA CURRICULUM INSERT"),
            ],
        }
    }
}

impl Config {
    /// Resolve a subject's file against `data_dir`. Absolute paths are kept as-is.
    pub fn subject_path(&self, subject: &SubjectConfig) -> PathBuf {
        self.data_dir.join(&subject.file)
    }

    /// Override the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Override the target table.
    pub fn with_table(mut self, table: impl Into<String>) -> Self {
        self.table = table.into();
        self
    }

    /// Replace the subject list.
    pub fn with_subjects(mut self, subjects: Vec<SubjectConfig>) -> Self {
        self.subjects = subjects;
        self
    }
}

/// One subject to load and emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectConfig {
    /// Subject key inside the document (e.g. "9th_ela").
    pub key: String,

    /// JSON document holding the subject, relative to `data_dir`.
    pub file: PathBuf,

    /// Optional banner comment emitted above the subject's statement.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,
}

impl SubjectConfig {
    pub fn new(key: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            key: key.into(),
            file: file.into(),
            banner: None,
        }
    }

    pub fn with_banner(mut self, banner: impl Into<String>) -> Self {
        self.banner = Some(banner.into());
        self
    }

    pub fn file(&self) -> &Path {
        &self.file
    }
}

/// Parses `KEY=FILE`, as given on the command line.
impl FromStr for SubjectConfig {
    type Err = CurriculumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('=') {
            Some((key, file)) if !key.trim().is_empty() && !file.trim().is_empty() => {
                Ok(SubjectConfig::new(key.trim(), file.trim()))
            }
            _ => Err(CurriculumError::Config(format!(
                "expected KEY=FILE, got '{}'",
                s
            ))),
        }
    }
}

impl fmt::Display for SubjectConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.file.display())
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("centner_standards_by_calendar")
}

fn default_table() -> String {
    "curriculum_lessons".to_string()
}
