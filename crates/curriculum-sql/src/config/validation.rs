//! Configuration validation.

use std::collections::HashSet;

use super::Config;
use crate::error::{CurriculumError, Result};
use crate::sql::validate_table_name;

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    validate_table_name(&config.table).map_err(|e| match e {
        CurriculumError::Config(msg) => CurriculumError::Config(format!("table: {}", msg)),
        other => other,
    })?;

    if config.subjects.is_empty() {
        return Err(CurriculumError::Config(
            "at least one subject is required".into(),
        ));
    }

    let mut seen = HashSet::new();
    for (i, subject) in config.subjects.iter().enumerate() {
        if subject.key.trim().is_empty() {
            return Err(CurriculumError::Config(format!(
                "subjects[{}].key is required",
                i
            )));
        }
        if subject.file.as_os_str().is_empty() {
            return Err(CurriculumError::Config(format!(
                "subjects[{}].file is required",
                i
            )));
        }
        if !seen.insert(subject.key.as_str()) {
            return Err(CurriculumError::Config(format!(
                "subject '{}' is listed more than once",
                subject.key
            )));
        }
    }

    Ok(())
}
