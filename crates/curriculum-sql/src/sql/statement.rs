//! Row tuples and the INSERT preamble for `curriculum_lessons`.

use crate::lesson::LessonRecord;

use super::literal::{format_array, format_literal};

/// Target columns, in the order every row tuple lists its values.
pub const LESSON_COLUMNS: [&str; 9] = [
    "subject_key",
    "day_key",
    "lesson_code",
    "title",
    "objectives",
    "materials",
    "activities",
    "assessment",
    "standards",
];

/// `INSERT INTO <table> (<columns>)` line. The caller validates `table`.
pub fn insert_header(table: &str) -> String {
    format!("INSERT INTO {} ({})", table, LESSON_COLUMNS.join(", "))
}

/// Render one lesson as a parenthesized VALUES tuple.
///
/// Values follow [`LESSON_COLUMNS`]. Scalars become quoted literals and the
/// two list fields become `ARRAY[...]` constructors; nothing renders as NULL.
pub fn format_row(subject_key: &str, day_key: &str, lesson: &LessonRecord) -> String {
    let values = [
        format_literal(subject_key),
        format_literal(day_key),
        format_literal(&lesson.code),
        format_literal(&lesson.title),
        format_array(&lesson.objectives),
        format_literal(&lesson.materials),
        format_array(&lesson.activities),
        format_literal(&lesson.assessment),
        format_literal(&lesson.standards),
    ];
    format!("({})", values.join(", "))
}
