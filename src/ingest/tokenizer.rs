//! Tolerant CSV tokenizer.
//!
//! Accepts the dialect the upstream data files use: comma-delimited,
//! optional double-quote field quoting, doubled quotes escaping a literal
//! quote, and arbitrary whitespace around fields. It never errors; an
//! unterminated quote simply ends the line in whatever state it was in.
//! Quote state does not carry across lines, so multi-line quoted fields are
//! not supported — a known limitation, kept deliberately.

use crate::ingest::Row;

/// Tokenizes raw CSV text into rows of trimmed string fields.
///
/// Both `\n` and `\r\n` line endings are recognized. Blank lines (all
/// whitespace) contribute no row.
pub fn parse(text: &str) -> Vec<Row> {
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }
        rows.push(parse_line(line));
    }
    rows
}

fn parse_line(line: &str) -> Row {
    let mut row = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;

    let mut chars = line.chars().peekable();
    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes && chars.peek() == Some(&'"') {
                    // doubled quote inside a quoted field is a literal quote
                    field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                row.push(field.trim().to_string());
                field.clear();
            }
            _ => field.push(ch),
        }
    }
    // the trailing field is pushed even when empty
    row.push(field.trim().to_string());
    row
}
