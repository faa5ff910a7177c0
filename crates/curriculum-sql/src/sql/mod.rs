//! PostgreSQL text generation: literals, array constructors, and INSERT rows.

pub mod identifier;
pub mod literal;
pub mod statement;

pub use identifier::validate_table_name;
pub use literal::{format_array, format_literal};
pub use statement::{format_row, insert_header, LESSON_COLUMNS};
