//! Lenient CSV parsing for published-spreadsheet exports.

/// Parse delimited text into rows of fields.
///
/// Commas separate fields; `\n`, `\r`, and `\r\n` each terminate a row
/// (`\r\n` counts once). A double quote toggles quoted mode, in which
/// separators and newlines are literal text and a doubled quote decodes to
/// one quote character. Rows whose fields are all blank after trimming are
/// dropped, including a trailing blank line. The final field is flushed even
/// without a trailing delimiter.
///
/// Malformed quoting is not rejected: an unterminated quote consumes to the
/// end of the input and yields whatever was accumulated.
#[must_use]
pub fn parse(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                field.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
            continue;
        }

        if !in_quotes && (ch == ',' || ch == '\n' || ch == '\r') {
            row.push(std::mem::take(&mut field));
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            if ch == '\n' || ch == '\r' {
                flush_row(&mut rows, &mut row);
            }
            continue;
        }

        field.push(ch);
    }

    row.push(field);
    flush_row(&mut rows, &mut row);
    rows
}

fn flush_row(rows: &mut Vec<Vec<String>>, row: &mut Vec<String>) {
    if row.iter().any(|cell| !cell.trim().is_empty()) {
        rows.push(std::mem::take(row));
    } else {
        row.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_fields_and_rows() {
        let rows = parse("a,b,c\nd,e,f");
        assert_eq!(rows, vec![vec!["a", "b", "c"], vec!["d", "e", "f"]]);
    }

    #[test]
    fn quoted_fields_keep_delimiters_and_newlines() {
        let rows = parse("a,\"b,c\",d\n\"e\"\"f\"");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["a", "b,c", "d"]);
        assert_eq!(rows[1], vec!["e\"f"]);

        let rows = parse("\"line one\nline two\",x");
        assert_eq!(rows, vec![vec!["line one\nline two", "x"]]);
    }

    #[test]
    fn crlf_counts_as_one_terminator() {
        let rows = parse("a,b\r\nc,d\re,f");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"], vec!["e", "f"]]);
    }

    #[test]
    fn all_blank_rows_are_dropped() {
        let rows = parse("a,b\n,,,\n , \nc,d\n");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c", "d"]]);
        assert_eq!(parse(",,,\n"), Vec::<Vec<String>>::new());
    }

    #[test]
    fn final_field_is_flushed_without_trailing_newline() {
        let rows = parse("a,b\nc");
        assert_eq!(rows, vec![vec!["a", "b"], vec!["c"]]);
    }

    #[test]
    fn unterminated_quote_consumes_to_end() {
        let rows = parse("a,\"rest, of it\nall");
        assert_eq!(rows, vec![vec!["a", "rest, of it\nall"]]);
    }

    #[test]
    fn encoded_round_trip_preserves_values() {
        let fields = ["plain", "with,comma", "with\"quote", "multi\nline", ""];
        let encoded = fields
            .iter()
            .map(|f| format!("\"{}\"", f.replace('"', "\"\"")))
            .collect::<Vec<_>>()
            .join(",");
        let rows = parse(&encoded);
        assert_eq!(rows, vec![fields.iter().map(|f| (*f).to_string()).collect::<Vec<_>>()]);
    }
}
