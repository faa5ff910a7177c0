//! Calendar ordering of day keys.
//!
//! Day keys look like `"3.b"`: an integer day number, a `.`, and a suffix that
//! orders lessons within the same day. The day number is compared numerically
//! so `"10.a"` sorts after `"9.a"`. Day numbers have no upper bound. Only the
//! segment between the first and second `.` takes part in the suffix
//! comparison.

use std::cmp::Ordering;
use std::fmt;

use crate::error::{CurriculumError, Result};
use crate::lesson::{LessonRecord, SubjectBundle};

/// A parsed day key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayKey {
    raw: String,
    /// Day digits with leading zeros stripped; `"0"` for an all-zero day.
    day: String,
    suffix_start: usize,
}

impl DayKey {
    /// Parse `"<int>.<suffix>"`. The day is everything before the first `.`.
    pub fn parse(subject: &str, key: &str) -> Result<Self> {
        let (day, _) = key
            .split_once('.')
            .ok_or_else(|| CurriculumError::malformed_key(subject, key))?;

        if day.is_empty() || !day.bytes().all(|b| b.is_ascii_digit()) {
            return Err(CurriculumError::malformed_key(subject, key));
        }
        let suffix_start = day.len() + 1;
        let day = match day.trim_start_matches('0') {
            "" => "0",
            digits => digits,
        };

        Ok(Self {
            raw: key.to_string(),
            day: day.to_string(),
            suffix_start,
        })
    }

    /// The key exactly as it appeared in the document.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Day number as canonical decimal digits (no leading zeros).
    pub fn day(&self) -> &str {
        &self.day
    }

    /// Text between the first `.` and the next one, if any.
    pub fn suffix(&self) -> &str {
        let rest = &self.raw[self.suffix_start..];
        rest.split_once('.').map_or(rest, |(segment, _)| segment)
    }

    /// Two-key calendar comparison: day number, then suffix as a plain string.
    pub fn calendar_cmp(&self, other: &Self) -> Ordering {
        self.day
            .len()
            .cmp(&other.day.len())
            .then_with(|| self.day.cmp(&other.day))
            .then_with(|| self.suffix().cmp(other.suffix()))
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Lessons of `bundle` paired with their parsed keys, in calendar order.
///
/// The sort is stable, so duplicate keys keep their document order. Fails on
/// the first key that cannot be parsed.
pub fn ordered_lessons(bundle: &SubjectBundle) -> Result<Vec<(DayKey, &LessonRecord)>> {
    let mut lessons = bundle
        .iter()
        .map(|(key, lesson)| DayKey::parse(bundle.subject(), key).map(|day| (day, lesson)))
        .collect::<Result<Vec<_>>>()?;
    lessons.sort_by(|(a, _), (b, _)| a.calendar_cmp(b));
    Ok(lessons)
}

/// Day keys of `bundle` in calendar order.
pub fn ordered_keys(bundle: &SubjectBundle) -> Result<Vec<DayKey>> {
    Ok(ordered_lessons(bundle)?
        .into_iter()
        .map(|(key, _)| key)
        .collect())
}
