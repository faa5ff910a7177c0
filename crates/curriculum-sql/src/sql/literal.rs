//! SQL string literals and PostgreSQL array constructors.

/// Literal used for an empty `text[]`. A bare `ARRAY[]` has no element type in
/// PostgreSQL, so the cast is required.
pub const EMPTY_TEXT_ARRAY: &str = "ARRAY[]::text[]";

/// Escape single quotes for a standard-conforming SQL string literal.
fn escape_sql_string(s: &str) -> String {
    s.replace('\'', "''")
}

/// Quote `s` as a SQL string literal, doubling embedded single quotes.
///
/// ```
/// use curriculum_sql::sql::format_literal;
/// assert_eq!(format_literal("It's"), "'It''s'");
/// ```
pub fn format_literal(s: &str) -> String {
    format!("'{}'", escape_sql_string(s))
}

/// Render `items` as a PostgreSQL `ARRAY[...]` constructor of text literals.
///
/// ```
/// use curriculum_sql::sql::format_array;
/// assert_eq!(format_array(&["a", "b'c"]), "ARRAY['a', 'b''c']");
/// assert_eq!(format_array::<&str>(&[]), "ARRAY[]::text[]");
/// ```
pub fn format_array<S: AsRef<str>>(items: &[S]) -> String {
    if items.is_empty() {
        return EMPTY_TEXT_ARRAY.to_string();
    }
    let escaped: Vec<String> = items
        .iter()
        .map(|item| format_literal(item.as_ref()))
        .collect();
    format!("ARRAY[{}]", escaped.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Read back a single-quoted SQL literal, undoing quote doubling.
    /// Returns the value and the unparsed remainder.
    fn parse_literal(sql: &str) -> Option<(String, &str)> {
        let body = sql.strip_prefix('\'')?;
        let mut value = String::new();
        let mut chars = body.char_indices().peekable();
        while let Some((i, c)) = chars.next() {
            if c == '\'' {
                if let Some((_, '\'')) = chars.peek() {
                    chars.next();
                    value.push('\'');
                } else {
                    return Some((value, &body[i + 1..]));
                }
            } else {
                value.push(c);
            }
        }
        None
    }

    /// Read back an `ARRAY[...]` constructor produced by `format_array`.
    fn parse_array(sql: &str) -> Option<Vec<String>> {
        if sql == EMPTY_TEXT_ARRAY {
            return Some(Vec::new());
        }
        let mut rest = sql.strip_prefix("ARRAY[")?;
        let mut items = Vec::new();
        loop {
            let (item, tail) = parse_literal(rest)?;
            items.push(item);
            if let Some(tail) = tail.strip_prefix(", ") {
                rest = tail;
            } else {
                return if tail == "]" { Some(items) } else { None };
            }
        }
    }

    #[test]
    fn test_plain_literal() {
        assert_eq!(format_literal("quiz"), "'quiz'");
        assert_eq!(format_literal(""), "''");
    }

    #[test]
    fn test_single_quotes_doubled() {
        assert_eq!(format_literal("It's a test"), "'It''s a test'");
        assert_eq!(format_literal("'"), "''''");
        assert_eq!(format_literal("''"), "''''''");
    }

    #[test]
    fn test_literal_round_trip() {
        let samples = [
            "It's",
            "'leading",
            "trailing'",
            "a''b",
            "O'Brien's \"Dubliners\"",
            "multi\nline 'quoted'",
            "unicode ’ curly and ' straight",
            "''''",
        ];
        for s in samples {
            let sql = format_literal(s);
            let (parsed, rest) = parse_literal(&sql).unwrap();
            assert_eq!(parsed, s);
            assert_eq!(rest, "");
        }
    }

    #[test]
    fn test_other_characters_untouched() {
        assert_eq!(format_literal(r"back\slash; -- done"), r"'back\slash; -- done'");
    }

    #[test]
    fn test_empty_array_is_typed() {
        let empty: [&str; 0] = [];
        assert_eq!(format_array(&empty), "ARRAY[]::text[]");
    }

    #[test]
    fn test_array_of_empty_string_is_not_empty_array() {
        assert_eq!(format_array(&[""]), "ARRAY['']");
    }

    #[test]
    fn test_array_items() {
        assert_eq!(format_array(&["obj1"]), "ARRAY['obj1']");
        assert_eq!(
            format_array(&["Read chapter 1".to_string(), "Discuss Juliet's choice".to_string()]),
            "ARRAY['Read chapter 1', 'Discuss Juliet''s choice']"
        );
    }

    #[test]
    fn test_array_round_trip() {
        let cases: Vec<Vec<&str>> = vec![
            vec![],
            vec!["one"],
            vec!["it's", "", "a, b", "]"],
            vec!["', '", "ARRAY["],
        ];
        for items in cases {
            let sql = format_array(&items);
            assert_eq!(parse_array(&sql).unwrap(), items);
        }
    }
}
