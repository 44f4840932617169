//! Row to record conversion
//!
//! Converts parsed rows into hike records using the positional layout of the
//! leading columns and the resolved measure columns, then sorts the result.

use tracing::{debug, info};

use super::column_mapping::{ColumnMapping, ResolvedColumn};
use super::field_parsers::{clean_measure, extract_year, location_field, parse_hike_id, text_field};
use super::stats::{NormalizeResult, ParseStats};
use crate::app::models::HikeRecord;
use crate::app::services::csv_parser::ParsedTable;
use crate::constants::columns;

/// Normalize a single row, or `None` when it has no positive hike number
pub fn normalize_row(row: &[String], mapping: &ColumnMapping) -> Option<HikeRecord> {
    let id = parse_hike_id(row.get(columns::ID).map(String::as_str).unwrap_or(""))?;

    let date = text_field(row, columns::DATE);
    let year = extract_year(&date);

    Some(HikeRecord {
        id,
        year,
        date,
        comments: text_field(row, columns::COMMENTS),
        direction: text_field(row, columns::DIRECTION),
        location: location_field(row, columns::LOCATION),
        miles: clean_measure(measure_cell(row, &mapping.miles)),
        elevation: clean_measure(measure_cell(row, &mapping.elevation)),
    })
}

fn measure_cell<'a>(row: &'a [String], column: &ResolvedColumn) -> Option<&'a str> {
    column
        .index
        .and_then(|index| row.get(index))
        .map(String::as_str)
}

/// Normalize every data row of a parsed table
///
/// Resolves the measure columns from the header first, then converts rows.
/// Records are returned sorted by hike number descending; rows sharing a
/// hike number keep their sheet order.
pub fn normalize_table(table: &ParsedTable) -> NormalizeResult {
    let columns = ColumnMapping::resolve(&table.header);

    let mut stats = ParseStats::new();
    stats.used_column_fallback = columns.used_fallback();

    let mut records = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        stats.total_rows += 1;
        match normalize_row(row, &columns) {
            Some(record) => records.push(record),
            None => {
                let raw_id = row.first().map(String::as_str).unwrap_or("");
                debug!(
                    "Discarded row {}: no positive hike number in '{}'",
                    stats.total_rows, raw_id
                );
                stats.add_discarded(raw_id);
            }
        }
    }

    records.sort_by(|a, b| b.id.cmp(&a.id));
    stats.records_kept = records.len();

    info!("{}", stats.summary());

    NormalizeResult {
        records,
        stats,
        columns,
    }
}
