//! Tests for record normalization
//!
//! Shared helpers for building rows and headers.


/// Build a row of owned strings from literals
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// Header used by the group's sheet
pub fn standard_header() -> Vec<String> {
    row(&[
        "Hike #",
        "Date",
        "Comments",
        "Directions",
        "Location",
        "Miles",
        "Elevation Gain (ft)",
    ])
}
