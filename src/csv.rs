// src/csv.rs
use std::io::{self, Write};
use std::mem::take;

/// Records end with CRLF, as RFC 4180 has it.
pub const RECORD_END: &str = "\r\n";

/* ---------------- Parsing ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
pub fn parse_rows(text: &str, sep: char) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = s!();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // double-quote escape
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == sep && !in_quotes => {
                row.push(take(&mut field));
            }
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) { chars.next(); }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a line break
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single record to any writer.
pub fn write_row<W: Write, S: AsRef<str>>(mut w: W, row: &[S], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        let cell = cell.as_ref();
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    w.write_all(RECORD_END.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn row_string(cells: &[&str]) -> String {
        let mut buf = Vec::new();
        write_row(&mut buf, cells, ',').unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_fields_are_not_quoted() {
        assert_eq!(row_string(&["hbase:meta", "1", "2", "3"]), "hbase:meta,1,2,3\r\n");
    }

    #[test]
    fn quoting_rules() {
        assert_eq!(row_string(&["t,k", "1"]), "\"t,k\",1\r\n");
        assert_eq!(row_string(&["say \"hi\""]), "\"say \"\"hi\"\"\"\r\n");
        assert_eq!(row_string(&["a\nb"]), "\"a\nb\"\r\n");
    }

    #[test]
    fn parse_reads_quoted_fields_back() {
        let text = "Region Name,Read Count\r\n\"t,k\",1\r\n\"say \"\"hi\"\"\",2\r\n\"multi\nline\",3";
        let rows = parse_rows(text, ',');
        assert_eq!(rows, vec![
            vec!["Region Name".to_string(), "Read Count".to_string()],
            vec!["t,k".to_string(), "1".to_string()],
            vec!["say \"hi\"".to_string(), "2".to_string()],
            vec!["multi\nline".to_string(), "3".to_string()],
        ]);
    }

    #[test]
    fn parse_skips_blank_lines() {
        assert_eq!(parse_rows("a,b\n\n\nc,d\n", ','), vec![
            vec!["a".to_string(), "b".to_string()],
            vec!["c".to_string(), "d".to_string()],
        ]);
        assert!(parse_rows("", ',').is_empty());
    }
}
