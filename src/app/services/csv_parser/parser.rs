//! Core CSV state machine
//!
//! Single pass over the characters with two states, quoted and unquoted.
//! Quotes are never part of the output except through the doubled-quote
//! escape, and line breaks inside quotes stay in the field.

use std::mem::take;
use tracing::debug;

const DELIMITER: char = ',';
const QUOTE: char = '"';

/// Parsed CSV split into its header row and data rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTable {
    /// First row of the input, empty when the input had no rows
    pub header: Vec<String>,

    /// Every row after the header
    pub rows: Vec<Vec<String>>,
}

impl ParsedTable {
    /// True when there are no data rows (a lone header counts as empty)
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Parse raw text and split off the header row
pub fn parse_table(text: &str) -> ParsedTable {
    let mut rows = parse_rows(text).into_iter();
    let header = rows.next().unwrap_or_default();
    let rows: Vec<Vec<String>> = rows.collect();

    debug!(
        "Parsed table: {} header fields, {} data rows",
        header.len(),
        rows.len()
    );

    ParsedTable { header, rows }
}

/// Parse raw text into rows of trimmed fields, header included
///
/// Records end at `\n`, `\r` or `\r\n` outside quotes. An unterminated quote
/// runs to the end of input and is closed implicitly. Blank lines are
/// skipped, so a trailing line break never yields an empty row.
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut row: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            QUOTE if in_quotes => {
                if chars.peek() == Some(&QUOTE) {
                    chars.next(); // doubled quote escape
                    field.push(QUOTE);
                } else {
                    in_quotes = false;
                }
            }
            QUOTE => in_quotes = true,
            DELIMITER if !in_quotes => row.push(finish_field(&mut field)),
            '\r' | '\n' if !in_quotes => {
                if ch == '\r' && chars.peek() == Some(&'\n') {
                    chars.next();
                }
                row.push(finish_field(&mut field));
                push_row(&mut rows, take(&mut row));
            }
            _ => field.push(ch),
        }
    }

    // Flush a pending field or partial row, even inside an unterminated quote
    if !field.is_empty() || !row.is_empty() {
        row.push(finish_field(&mut field));
        push_row(&mut rows, row);
    }

    rows
}

fn finish_field(field: &mut String) -> String {
    let value = field.trim().to_string();
    field.clear();
    value
}

fn push_row(rows: &mut Vec<Vec<String>>, row: Vec<String>) {
    let blank = row.len() == 1 && row[0].is_empty();
    if !blank {
        rows.push(row);
    }
}
