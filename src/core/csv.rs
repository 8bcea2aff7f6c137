// src/core/csv.rs
use std::io::{self, Write};
use std::mem::take;

/* ---------------- Parsing ---------------- */

/// Minimal CSV/TSV tokenizer (quotes + CRLF tolerant). std-only.
///
/// Doubled-quote escaping is recognized only while already inside a
/// quoted field; an unterminated quote accumulates to end of input
/// instead of failing. Never errors on malformed input.
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    // CRLF → LF before the scan, quoted fields included.
    let text = text.replace("\r\n", "\n");

    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && matches!(chars.peek(), Some('"')) {
                    chars.next(); // double-quote escape
                    field.push('"');
                } else {
                    in_quotes = !in_quotes;
                }
            }
            c if c == sep && !in_quotes => {
                // move the field without cloning
                row.push(take(&mut field));
            }
            '\n' if !in_quotes => {
                row.push(take(&mut field));
                rows.push(take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Flush the trailing cell/row when the input has no final newline.
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Parse a whole sheet: tokenize, drop blank rows (interior ones too),
/// split off the header row, and normalize every data row to the header
/// width. Short rows pad with empty cells; surplus trailing cells are
/// dropped. An empty document yields empty headers and no rows.
pub fn parse_sheet(text: &str) -> (Vec<String>, Vec<Vec<String>>) {
    let mut rows = parse_rows(text, ',');

    // Blank-line suppression must run before header extraction.
    rows.retain(|r| r.iter().any(|cell| !cell.trim().is_empty()));

    if rows.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let headers: Vec<String> = rows.remove(0).into_iter().map(|h| s!(h.trim())).collect();

    let width = headers.len();
    let data = rows
        .into_iter()
        .map(|mut r| {
            r.truncate(width);
            r.resize(width, s!());
            r
        })
        .collect();

    (headers, data)
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Create a full export string from headers + rows.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers && !headers.is_empty() {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(row: &[&str]) -> Vec<String> {
        row.iter().map(|c| s!(*c)).collect()
    }

    #[test]
    fn quoted_comma_and_escaped_quote() {
        let rows = parse_rows(r#""a, ""b""",c"#, ',');
        assert_eq!(rows, vec![cells(&[r#"a, "b""#, "c"])]);
    }

    #[test]
    fn quotes_allowed_mid_field() {
        let rows = parse_rows(r#"he said "hi",x"#, ',');
        assert_eq!(rows, vec![cells(&["he said hi", "x"])]);
    }

    #[test]
    fn unterminated_quote_runs_to_end() {
        let rows = parse_rows("\"a,b\nc", ',');
        assert_eq!(rows, vec![cells(&["a,b\nc"])]);
    }

    #[test]
    fn crlf_normalized() {
        let rows = parse_rows("a,b\r\nc,d\r\n", ',');
        assert_eq!(rows, vec![cells(&["a", "b"]), cells(&["c", "d"])]);
    }

    #[test]
    fn newline_inside_quotes_kept() {
        let rows = parse_rows("\"a\nb\",c\n", ',');
        assert_eq!(rows, vec![cells(&["a\nb", "c"])]);
    }

    #[test]
    fn no_trailing_newline_flushes_last_row() {
        let rows = parse_rows("a,b\nc,d", ',');
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], cells(&["c", "d"]));
    }

    #[test]
    fn sheet_blank_rows_dropped_even_between_data() {
        let (headers, data) = parse_sheet("h1,h2\na,b\n , \n\nc,d\n");
        assert_eq!(headers, cells(&["h1", "h2"]));
        assert_eq!(data, vec![cells(&["a", "b"]), cells(&["c", "d"])]);
    }

    #[test]
    fn sheet_headers_trimmed_and_rows_normalized() {
        let (headers, data) = parse_sheet(" Name , Approved \nonly-one\na,b,c,extra\n");
        assert_eq!(headers, cells(&["Name", "Approved"]));
        // short row padded, long row truncated to header width
        assert_eq!(data, vec![cells(&["only-one", ""]), cells(&["a", "b"])]);
    }

    #[test]
    fn sheet_empty_input() {
        let (headers, data) = parse_sheet("");
        assert!(headers.is_empty());
        assert!(data.is_empty());
    }

    #[test]
    fn write_row_quotes_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &cells(&["a,b", "plain", "say \"hi\""]), ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",plain,\"say \"\"hi\"\"\"\n");
    }
}
