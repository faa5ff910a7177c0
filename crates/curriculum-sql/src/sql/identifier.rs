//! Validation of the target table name.
//!
//! The table name is written into the generated SQL unquoted, so it is
//! restricted to plain PostgreSQL identifiers: ASCII letters, digits and
//! underscores, not starting with a digit, with an optional `schema.` prefix.
//! Anything else is rejected before any SQL is produced.

use crate::error::{CurriculumError, Result};

/// PostgreSQL truncates identifiers longer than this (NAMEDATALEN - 1).
const MAX_IDENTIFIER_LENGTH: usize = 63;

/// Validate a single unquoted identifier.
///
/// # Errors
///
/// Returns `CurriculumError::Config` describing the first problem found.
pub fn validate_identifier(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(CurriculumError::Config(
            "Identifier cannot be empty".to_string(),
        ));
    }

    if name.contains('\0') {
        return Err(CurriculumError::Config(format!(
            "Identifier contains null byte: {:?}",
            name
        )));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(CurriculumError::Config(format!(
            "Identifier exceeds maximum length of {} bytes (got {} bytes): {:?}",
            MAX_IDENTIFIER_LENGTH,
            name.len(),
            name
        )));
    }

    let mut chars = name.chars();
    let first_ok = chars
        .next()
        .map(|c| c.is_ascii_alphabetic() || c == '_')
        .unwrap_or(false);
    if !first_ok || !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(CurriculumError::Config(format!(
            "Identifier must match [A-Za-z_][A-Za-z0-9_]*: {:?}",
            name
        )));
    }

    Ok(())
}

/// Validate a table name, optionally qualified as `schema.table`.
pub fn validate_table_name(name: &str) -> Result<()> {
    match name.split_once('.') {
        Some((schema, table)) => {
            validate_identifier(schema)?;
            validate_identifier(table)
        }
        None => validate_identifier(name),
    }
}
