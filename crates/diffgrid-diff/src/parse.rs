//! Splitting raw text into lines and delimited text into rows of cells.
//!
//! CSV quoting follows RFC 4180 closely: a quoted field may hold the
//! delimiter or a line break, and `""` inside a quoted field is a literal
//! quote. A blank record parses to a row with no cells.

use diffgrid_types::CsvRow;

const QUOTE: char = '"';

/// Split text on `\n`. Empty text yields a single empty line, and a
/// trailing newline yields a trailing empty line.
pub fn parse_text_to_lines(text: &str) -> Vec<&str> {
    text.split('\n').collect()
}

/// Parse delimited text into rows. Empty text yields no rows.
pub fn parse_csv_to_rows(text: &str, delimiter: char) -> Vec<CsvRow> {
    split_records(text, delimiter)
        .into_iter()
        .map(|record| {
            if record.is_empty() {
                CsvRow::new()
            } else {
                parse_csv_line(record, delimiter)
            }
        })
        .collect()
}

/// Split text into records on line breaks outside quoted fields,
/// stripping one trailing `\r` from each record.
///
/// A quote opens a quoted field only as the first character of a field, so
/// a stray quote inside an unquoted value never spans records.
pub fn split_records(text: &str, delimiter: char) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }

    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if matches!(chars.peek(), Some(&(_, QUOTE))) {
                    chars.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }
        match ch {
            QUOTE if field_start => {
                in_quotes = true;
                field_start = false;
            }
            '\n' => {
                records.push(strip_cr(&text[start..i]));
                start = i + 1;
                field_start = true;
            }
            c if c == delimiter => field_start = true,
            _ => field_start = false,
        }
    }
    records.push(strip_cr(&text[start..]));

    records
}

fn strip_cr(record: &str) -> &str {
    record.strip_suffix('\r').unwrap_or(record)
}

/// Parse one record into cells.
///
/// A quote at the start of a field opens quoted state, where `""` is one
/// literal quote and a lone quote closes it. Quotes elsewhere are content.
pub fn parse_csv_line(line: &str, delimiter: char) -> CsvRow {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut field_start = true;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == QUOTE {
                if chars.peek() == Some(&QUOTE) {
                    current.push(QUOTE);
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                current.push(ch);
            }
        } else if ch == QUOTE && field_start {
            in_quotes = true;
            field_start = false;
        } else if ch == delimiter {
            cells.push(std::mem::take(&mut current));
            field_start = true;
        } else {
            current.push(ch);
            field_start = false;
        }
    }
    cells.push(current);

    cells
}

/// Remove quotes that wrap a value only for escaping purposes.
///
/// The wrapping quotes are kept when the interior holds the delimiter, a
/// line break, or a quote, since they are then part of the content.
pub fn strip_formatting_quotes(value: &str, delimiter: char) -> &str {
    let inner = match value
        .strip_prefix(QUOTE)
        .and_then(|rest| rest.strip_suffix(QUOTE))
    {
        Some(inner) => inner,
        None => return value,
    };

    let needs_quotes = inner
        .chars()
        .any(|c| c == delimiter || c == QUOTE || c == '\n' || c == '\r');
    if needs_quotes {
        value
    } else {
        inner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_lines() {
        assert_eq!(parse_text_to_lines(""), vec![""]);
        assert_eq!(parse_text_to_lines("a\nb\nc"), vec!["a", "b", "c"]);
        assert_eq!(parse_text_to_lines("a\n"), vec!["a", ""]);
    }

    #[test]
    fn csv_line_with_escaped_quotes() {
        assert_eq!(
            parse_csv_line(r#""He said ""Hello""",world"#, ','),
            vec![r#"He said "Hello""#, "world"]
        );
    }

    #[test]
    fn csv_line_quoted_delimiter() {
        assert_eq!(parse_csv_line(r#"a,"b,c",d"#, ','), vec!["a", "b,c", "d"]);
        assert_eq!(parse_csv_line("a,,", ','), vec!["a", "", ""]);
        assert_eq!(parse_csv_line("a;b", ';'), vec!["a", "b"]);
    }

    #[test]
    fn csv_rows_strip_carriage_returns() {
        let rows = parse_csv_to_rows("a,b\r\n1,2\r\n", ',');
        assert_eq!(
            rows,
            vec![
                vec!["a".to_string(), "b".to_string()],
                vec!["1".to_string(), "2".to_string()],
                Vec::<String>::new(),
            ]
        );
    }

    #[test]
    fn csv_rows_keep_quoted_newlines() {
        let rows = parse_csv_to_rows("id,note\n1,\"two\nlines\"\n2,x", ',');
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["1".to_string(), "two\nlines".to_string()]);
        assert_eq!(rows[2], vec!["2".to_string(), "x".to_string()]);
    }

    #[test]
    fn stray_quote_in_unquoted_field_stays_on_its_line() {
        let rows = parse_csv_to_rows("size,name\n5\" tv,a\n6,b\n7,c", ',');
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[1], vec!["5\" tv".to_string(), "a".to_string()]);
        assert_eq!(rows[3], vec!["7".to_string(), "c".to_string()]);
    }

    #[test]
    fn csv_line_mid_field_quotes_are_content() {
        assert_eq!(parse_csv_line(r#"a"b,c"d"#, ','), vec![r#"a"b"#, r#"c"d"#]);
        assert_eq!(parse_csv_line(r#""x"y,z"#, ','), vec!["xy", "z"]);
    }

    #[test]
    fn csv_empty_text_has_no_rows() {
        assert!(parse_csv_to_rows("", ',').is_empty());
    }

    #[test]
    fn formatting_quotes() {
        assert_eq!(strip_formatting_quotes("\"plain\"", ','), "plain");
        assert_eq!(strip_formatting_quotes("\"a,b\"", ','), "\"a,b\"");
        assert_eq!(strip_formatting_quotes("\"a\"b\"", ','), "\"a\"b\"");
        assert_eq!(strip_formatting_quotes("\"\"", ','), "");
        assert_eq!(strip_formatting_quotes("\"", ','), "\"");
        assert_eq!(strip_formatting_quotes("bare", ','), "bare");
        assert_eq!(strip_formatting_quotes("\"a,b\"", ';'), "a,b");
    }
}
