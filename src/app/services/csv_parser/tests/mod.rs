//! Test utilities for the CSV parser
//!
//! Shared fixtures used across the parser test modules.


/// Convenience for building expected rows from string literals
pub fn row(fields: &[&str]) -> Vec<String> {
    fields.iter().map(|f| f.to_string()).collect()
}

/// A small hike sheet with a multi-line quoted comment
pub fn create_test_sheet() -> String {
    "Hike #,Date,Comments,Directions,Location,Miles,Elevation Gain\r\n\
     3,7/4/2023,\"Hot day.\r\nStopped for pancakes after\",https://maps.example/3,\"Mission Peak, Fremont\",6.2,\"2,100\"\r\n\
     2,6/1/23,Short loop,,Sunol,3,800\r\n\
     1,1/1/2020,\"The \"\"first\"\" one\",,,5,1200\r\n"
        .to_string()
}
