//! # curriculum-sql
//!
//! Turns curriculum lesson documents (JSON) into PostgreSQL `INSERT`
//! statements for the `curriculum_lessons` table.
//!
//! The pipeline for each subject is:
//!
//! - **Load** the subject's day-keyed lessons from its JSON document
//! - **Order** day keys numerically by day, then by suffix
//! - **Format** each lesson as a SQL tuple with escaped literals and
//!   `ARRAY[...]` constructors
//! - **Emit** one multi-row `INSERT` per subject
//!
//! Nothing touches a database; the SQL is the only output.
//!
//! ## Example
//!
//! ```rust,no_run
//! use curriculum_sql::{Config, Generator};
//!
//! fn main() -> curriculum_sql::Result<()> {
//!     let generator = Generator::new(Config::default())?;
//!     let summary = generator.write_to(&mut std::io::stdout())?;
//!     eprintln!("Wrote {} lessons", summary.total_lessons);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod lesson;
pub mod loader;
pub mod order;
pub mod sql;

// Re-exports for convenient access
pub use config::{Config, SubjectConfig};
pub use emitter::{emit_subject, render_subject, SubjectSummary};
pub use error::{CurriculumError, Result};
pub use generator::{GenerationSummary, Generator, Rendered};
pub use lesson::{LessonRecord, SubjectBundle};
pub use loader::{load_document, load_subject, SubjectDocument};
pub use order::{ordered_keys, ordered_lessons, DayKey};
pub use sql::{format_array, format_literal, format_row};
