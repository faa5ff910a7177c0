//! Error types for the curriculum SQL generator.

use std::path::PathBuf;
use thiserror::Error;

/// Exit code for configuration problems (bad YAML, invalid settings).
pub const EXIT_CONFIG_ERROR: u8 = 1;
/// Exit code for lesson documents that are not valid JSON or have the wrong shape.
/// Kept clear of 2, which clap uses for command-line usage errors.
pub const EXIT_MALFORMED_INPUT: u8 = 5;
/// Exit code for a subject key missing from its document.
pub const EXIT_NOT_FOUND: u8 = 3;
/// Exit code for a day key that cannot be ordered.
pub const EXIT_MALFORMED_KEY: u8 = 4;
/// Exit code for file system errors.
pub const EXIT_IO_ERROR: u8 = 7;

/// Main error type for generation runs.
#[derive(Error, Debug)]
pub enum CurriculumError {
    /// Configuration error (invalid YAML, missing fields, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Lesson document is not parseable JSON or does not have the expected shape
    #[error("Malformed input in {}: {message}", .path.display())]
    MalformedInput { path: PathBuf, message: String },

    /// Requested subject key is absent from the document
    #[error(
        "Subject '{subject}' not found in {} (available: {})",
        .path.display(),
        .available.join(", ")
    )]
    NotFound {
        subject: String,
        path: PathBuf,
        available: Vec<String>,
    },

    /// Day key does not have the `<int>.<suffix>` shape
    #[error("Malformed day key '{key}' in subject '{subject}': expected <integer>.<suffix>")]
    MalformedKey { subject: String, key: String },

    /// IO error (file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CurriculumError {
    /// Create a MalformedInput error for the given source file
    pub fn malformed_input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        CurriculumError::MalformedInput {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Create a NotFound error listing the subjects the document does hold
    pub fn not_found<I, S>(
        subject: impl Into<String>,
        path: impl Into<PathBuf>,
        available: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CurriculumError::NotFound {
            subject: subject.into(),
            path: path.into(),
            available: available.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a MalformedKey error
    pub fn malformed_key(subject: impl Into<String>, key: impl Into<String>) -> Self {
        CurriculumError::MalformedKey {
            subject: subject.into(),
            key: key.into(),
        }
    }

    /// Process exit code for this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            CurriculumError::Config(_) | CurriculumError::Yaml(_) => EXIT_CONFIG_ERROR,
            CurriculumError::MalformedInput { .. } | CurriculumError::Json(_) => {
                EXIT_MALFORMED_INPUT
            }
            CurriculumError::NotFound { .. } => EXIT_NOT_FOUND,
            CurriculumError::MalformedKey { .. } => EXIT_MALFORMED_KEY,
            CurriculumError::Io(_) => EXIT_IO_ERROR,
        }
    }

    /// Format error with full details including error chain
    pub fn format_detailed(&self) -> String {
        let mut output = format!("Error: {}\n", self);

        let mut source = std::error::Error::source(self);
        let mut depth = 1;
        while let Some(err) = source {
            output.push_str(&format!("\nCaused by:\n  {}: {}", depth, err));
            source = err.source();
            depth += 1;
        }

        output
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, CurriculumError>;
