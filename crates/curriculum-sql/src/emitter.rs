//! Writing subject sections as SQL text.
//!
//! A section is a header comment followed by one multi-row INSERT:
//!
//! ```sql
//! -- 9TH_ELA - 2 lessons
//! INSERT INTO curriculum_lessons (subject_key, ..., standards)
//! VALUES
//! ('9th_ela', '1.a', ...),
//! ('9th_ela', '1.b', ...);
//! ```
//!
//! Every row is rendered before the first byte is written, so a malformed key
//! never leaves a half-written statement behind.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::lesson::SubjectBundle;
use crate::order::ordered_lessons;
use crate::sql::{format_row, insert_header};

/// Horizontal rule used around banner titles.
pub const BANNER_RULE: &str = "-- ==========================================";

/// What was emitted for one subject.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectSummary {
    /// Subject key.
    pub subject: String,

    /// Number of rows in the statement.
    pub lessons: usize,

    /// First day key in calendar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day: Option<String>,

    /// Last day key in calendar order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_day: Option<String>,
}

/// Write a three-line banner comment.
pub fn write_banner<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out, "{}", BANNER_RULE)?;
    writeln!(out, "-- {}", title)?;
    writeln!(out, "{}", BANNER_RULE)?;
    Ok(())
}

/// Write the header comment and INSERT statement for `bundle`.
///
/// An empty bundle gets only its header comment; an INSERT with no rows is not
/// valid SQL.
pub fn emit_subject<W: Write>(
    out: &mut W,
    table: &str,
    bundle: &SubjectBundle,
) -> Result<SubjectSummary> {
    let lessons = ordered_lessons(bundle)?;
    let rows: Vec<String> = lessons
        .iter()
        .map(|(key, lesson)| format_row(bundle.subject(), key.as_str(), lesson))
        .collect();

    writeln!(out)?;
    writeln!(
        out,
        "-- {} - {} lessons",
        bundle.subject().to_uppercase(),
        rows.len()
    )?;

    if rows.is_empty() {
        warn!("Subject {} has no lessons; no INSERT emitted", bundle.subject());
    } else {
        writeln!(out, "{}", insert_header(table))?;
        writeln!(out, "VALUES")?;
        writeln!(out, "{};", rows.join(",\n"))?;
        info!("Emitted {} lessons for {}", rows.len(), bundle.subject());
    }

    Ok(SubjectSummary {
        subject: bundle.subject().to_string(),
        lessons: rows.len(),
        first_day: lessons.first().map(|(key, _)| key.to_string()),
        last_day: lessons.last().map(|(key, _)| key.to_string()),
    })
}

/// Render one subject section into a string.
pub fn render_subject(table: &str, bundle: &SubjectBundle) -> Result<String> {
    let mut buf = Vec::new();
    emit_subject(&mut buf, table, bundle)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
