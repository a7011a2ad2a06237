//! Path-token extraction from a line of text
//!
//! Turns a cursor (or selection) inside one line into the path-like word it
//! sits on. Pure text processing; columns are character offsets.

/// Characters that may appear in a path token: ASCII word characters plus
/// `.`, `\`, `/` and `:`.
pub fn is_path_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '\\' | '/' | ':')
}

/// A column span on one line. `start == end` is a bare cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColumnRange {
    pub start: usize,
    pub end: usize,
}

impl ColumnRange {
    pub fn new(start: usize, end: usize) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    pub fn cursor(column: usize) -> Self {
        Self {
            start: column,
            end: column,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// Columns of the token [`extract`] would return.
///
/// A non-empty selection is returned as is (clamped to the line). A cursor
/// is widened left and right while neighbouring characters are path
/// characters. The widening stops *on* the first foreign character, so the
/// span is then trimmed: the first character is dropped if it is not a path
/// character, and so is the last one.
pub fn extract_range(line: &str, range: ColumnRange) -> ColumnRange {
    let chars: Vec<char> = line.chars().collect();
    let len = chars.len();

    if !range.is_empty() {
        return ColumnRange::new(range.start.min(len), range.end.min(len));
    }

    let cursor = range.start.min(len);

    let mut start = cursor;
    while start > 0 {
        start -= 1;
        if start == 0 || !is_path_char(chars[start]) {
            break;
        }
    }

    let mut end = cursor;
    while end < len {
        end += 1;
        if end == len || !is_path_char(chars[end - 1]) {
            break;
        }
    }

    if start < end && !is_path_char(chars[start]) {
        start += 1;
    }
    if start < end && !is_path_char(chars[end - 1]) {
        end -= 1;
    }

    ColumnRange { start, end }
}

/// The path-like token under `range` in `line`, or an empty string.
pub fn extract(line: &str, range: ColumnRange) -> String {
    let span = extract_range(line, range);
    line.chars().skip(span.start).take(span.len()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_char_class() {
        for c in ['a', 'Z', '0', '_', '.', '\\', '/', ':'] {
            assert!(is_path_char(c), "{c:?} should be a path char");
        }
        for c in [' ', '"', '\'', '(', ')', ',', '-', '<', 'é', '\t'] {
            assert!(!is_path_char(c), "{c:?} should not be a path char");
        }
    }

    #[test]
    fn test_selection_is_returned_verbatim() {
        let line = "open \"some file.txt\" now";
        assert_eq!(extract(line, ColumnRange::new(6, 19)), "some file.txt");
        assert_eq!(extract(line, ColumnRange::new(19, 6)), "some file.txt");
        assert_eq!(extract(line, ColumnRange::new(20, 99)), " now");
    }

    #[test]
    fn test_cursor_inside_token() {
        let line = "see src\\lib\\net.dll for details";
        assert_eq!(extract(line, ColumnRange::cursor(8)), "src\\lib\\net.dll");
        assert_eq!(extract(line, ColumnRange::cursor(4)), "src\\lib\\net.dll");
        assert_eq!(extract(line, ColumnRange::cursor(19)), "src\\lib\\net.dll");
    }

    #[test]
    fn test_cursor_on_quoted_path() {
        let line = r#"include "C:\src\app\main.cpp";"#;
        assert_eq!(extract(line, ColumnRange::cursor(14)), r"C:\src\app\main.cpp");
    }

    #[test]
    fn test_token_at_line_edges() {
        assert_eq!(extract("lib.txt", ColumnRange::cursor(0)), "lib.txt");
        assert_eq!(extract("lib.txt", ColumnRange::cursor(3)), "lib.txt");
        assert_eq!(extract("lib.txt", ColumnRange::cursor(7)), "lib.txt");
        assert_eq!(extract(" lib.txt ", ColumnRange::cursor(4)), "lib.txt");
    }

    #[test]
    fn test_cursor_between_foreign_chars() {
        assert_eq!(extract("a  b", ColumnRange::cursor(2)), "");
        assert_eq!(extract("", ColumnRange::cursor(0)), "");
        assert_eq!(extract("(x)", ColumnRange::cursor(99)), "");
    }

    #[test]
    fn test_cursor_touching_token_boundary() {
        let line = "foo bar.txt baz";
        assert_eq!(extract(line, ColumnRange::cursor(4)), "bar.txt");
        assert_eq!(extract(line, ColumnRange::cursor(11)), "bar.txt");
    }

    #[test]
    fn test_columns_are_characters() {
        let line = "é path/to/ü.rs";
        assert_eq!(extract(line, ColumnRange::cursor(5)), "path/to/");
        assert_eq!(extract_range(line, ColumnRange::cursor(5)), ColumnRange::new(2, 10));
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let line = r#"  copy "a/b/c.txt" -> d:\out\e.txt, done"#;
        for column in 0..=line.chars().count() {
            let span = extract_range(line, ColumnRange::cursor(column));
            if span.is_empty() {
                continue;
            }

            let token = extract(line, ColumnRange::cursor(column));
            assert_eq!(extract(line, span), token, "bounds at column {column}");
            assert_eq!(extract_range(line, span), span);

            for inner in span.start..span.end {
                assert_eq!(
                    extract(line, ColumnRange::cursor(inner)),
                    token,
                    "cursor {inner} inside token from column {column}"
                );
            }
        }
    }
}
