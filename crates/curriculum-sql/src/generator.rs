//! Generation run coordinator.
//!
//! Loads every configured subject, renders all sections into memory, and only
//! then hands the SQL to the caller. A failure in any subject therefore yields
//! no output at all.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::Config;
use crate::emitter::{emit_subject, write_banner, SubjectSummary};
use crate::error::Result;
use crate::lesson::SubjectBundle;
use crate::loader::{load_document, SubjectDocument};

/// Blank lines written between two subject sections.
const SECTION_GAP: &str = "\n\n\n\n";

/// SQL generator for a validated configuration.
#[derive(Debug, Clone)]
pub struct Generator {
    config: Config,
}

/// Rendered SQL plus what went into it.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub sql: String,
    pub summary: GenerationSummary,
}

/// Result of a generation (or validation) run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Target table.
    pub table: String,

    /// Per-subject results, in output order.
    pub subjects: Vec<SubjectSummary>,

    /// Total rows across all statements.
    pub total_lessons: usize,
}

impl GenerationSummary {
    /// Convert summary to JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Generator {
    /// Create a generator. The configuration is validated first.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load every configured subject, in configuration order.
    ///
    /// Each distinct file is parsed once even when several subjects share it.
    pub fn load(&self) -> Result<Vec<SubjectBundle>> {
        let mut documents: HashMap<PathBuf, SubjectDocument> = HashMap::new();
        let mut bundles = Vec::with_capacity(self.config.subjects.len());

        for subject in &self.config.subjects {
            let path = self.config.subject_path(subject);
            let document = match documents.entry(path) {
                Entry::Occupied(entry) => entry.into_mut(),
                Entry::Vacant(entry) => {
                    let document = load_document(entry.key())?;
                    entry.insert(document)
                }
            };
            bundles.push(document.subject(&subject.key)?);
        }

        Ok(bundles)
    }

    /// Render every subject into one SQL document.
    pub fn render(&self) -> Result<Rendered> {
        let bundles = self.load()?;
        let mut buf: Vec<u8> = Vec::new();
        let mut subjects = Vec::with_capacity(bundles.len());

        for (i, (subject, bundle)) in self.config.subjects.iter().zip(&bundles).enumerate() {
            if i > 0 {
                buf.write_all(SECTION_GAP.as_bytes())?;
            }
            if let Some(banner) = &subject.banner {
                write_banner(&mut buf, banner)?;
            }
            subjects.push(emit_subject(&mut buf, &self.config.table, bundle)?);
        }

        let summary = GenerationSummary {
            table: self.config.table.clone(),
            total_lessons: subjects.iter().map(|s| s.lessons).sum(),
            subjects,
        };
        info!(
            "Rendered {} subjects, {} lessons",
            summary.subjects.len(),
            summary.total_lessons
        );

        Ok(Rendered {
            sql: String::from_utf8_lossy(&buf).into_owned(),
            summary,
        })
    }

    /// Render everything, then write it to `out` in one go.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<GenerationSummary> {
        let rendered = self.render()?;
        out.write_all(rendered.sql.as_bytes())?;
        out.flush()?;
        Ok(rendered.summary)
    }

    /// Load and order every subject without keeping the SQL.
    pub fn validate(&self) -> Result<GenerationSummary> {
        Ok(self.render()?.summary)
    }
}
