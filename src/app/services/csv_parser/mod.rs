//! Delimited-text parser for spreadsheet CSV exports
//!
//! Spreadsheet exports of the hike log are hand-edited and full of multi-line
//! comments, embedded commas and doubled quotes. This module turns the raw
//! text into rows of trimmed string fields without assigning any meaning to
//! them.
//!
//! ## Architecture
//!
//! - [`parser`] - Character-level state machine and header/data split
//!
//! ## Usage
//!
//! ```rust
//! use hike_log::app::services::csv_parser::parse_table;
//!
//! let table = parse_table("Num,Date\n1,\"6/1/23\"\n");
//! assert_eq!(table.header, vec!["Num", "Date"]);
//! assert_eq!(table.rows, vec![vec!["1".to_string(), "6/1/23".to_string()]]);
//! ```

pub mod parser;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use parser::{ParsedTable, parse_rows, parse_table};
