//! Application constants for the hike log
//!
//! This module contains default values, keyword tables and sentinels used
//! throughout the pipeline. The scoring and category tables are only defaults:
//! the live values come from [`crate::config::AnalyticsConfig`].

// =============================================================================
// Source Defaults
// =============================================================================

/// Published Google Sheets CSV export of the group's hike log
pub const DEFAULT_SHEET_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vRg1rSihcL1ivA8OZMcRuJ__LoU46zaIm8CHfUyZmdAI42mRl_3zijL1jpWYWsd7KjtCQCD2x8FMwIe/pub?gid=0&single=true&output=csv";

/// Default fetch timeout in seconds (0 disables the timeout)
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 30;

/// User agent sent with sheet requests
pub const USER_AGENT: &str = concat!("hike-log/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// Record Normalization
// =============================================================================

/// Sentinel for years that could not be extracted from the date field
pub const UNKNOWN_YEAR: &str = "Unknown";

/// Location used when the location field is absent or empty
pub const UNKNOWN_LOCATION: &str = "Unknown";

/// Century prefix applied to two-digit years ("23" -> "2023")
pub const TWO_DIGIT_YEAR_PREFIX: &str = "20";

/// Positional layout of the fixed leading columns
pub mod columns {
    pub const ID: usize = 0;
    pub const DATE: usize = 1;
    pub const COMMENTS: usize = 2;
    pub const DIRECTION: usize = 3;
    pub const LOCATION: usize = 4;
}

/// Header substrings used to discover the measure columns (lowercase)
pub mod header_hints {
    pub const MILES: &[&str] = &["mile"];
    pub const ELEVATION: &[&str] = &["elevation", "gain"];
}

// =============================================================================
// Derivation Defaults
// =============================================================================

/// Hike numbers treated as milestones
pub const MILESTONE_TARGETS: &[u64] = &[1, 25, 50, 100, 150, 200, 250, 300, 350];

/// Number of locations returned by the location ranking
pub const DEFAULT_LOCATION_LIMIT: usize = 5;

/// Year filter value meaning "every year"
pub const ALL_YEARS: &str = "All";

/// Demanding-hike scoring defaults
pub mod scoring {
    /// Score contributed per mile
    pub const MILE_WEIGHT: f64 = 500.0;

    /// Score contributed per foot of elevation gain
    pub const ELEVATION_WEIGHT: f64 = 1.0;

    /// Flat bonus when location or comments name a priority location
    pub const PRIORITY_BONUS: f64 = 8000.0;

    /// Flat bonus when comments contain a difficulty keyword
    pub const KEYWORD_BONUS: f64 = 1000.0;

    /// Number of ranked hikes exposed
    pub const LIMIT: usize = 15;

    pub const PRIORITY_LOCATIONS: &[&str] = &[
        "white mountain",
        "everest",
        "base camp",
        "nepal",
        "mount dana",
        "shiva murugan",
        "ohlone wilderness",
        "del valle",
        "sunol peak",
        "taylor ranch",
    ];

    pub const DIFFICULTY_KEYWORDS: &[&str] = &[
        "strenuous",
        "tough",
        "challenging",
        "difficult",
        "climb",
        "uphill",
        "steep",
    ];
}

/// Thematic category defaults
pub mod categories {
    /// Maximum hikes returned per category
    pub const LIMIT: usize = 15;

    pub const SCENIC: &[&str] = &[
        "beautiful",
        "stunning",
        "gorgeous",
        "picturesque",
        "sunrise",
        "scenic",
        "serene",
        "view",
        "lush",
        "amazing",
    ];

    pub const WEATHER: &[&str] = &[
        "windy", "rainy", "rain", "storm", "wind", "wet", "soaked", "chilly", "cold", "weather",
    ];

    pub const FOOD: &[&str] = &[
        "breakfast",
        "pancakes",
        "eggs",
        "coffee",
        "diner",
        "eating",
        "meal",
        "food",
        "brunch",
        "bakery",
    ];
}

// =============================================================================
// Configuration
// =============================================================================

/// Directory name under the platform config dir
pub const CONFIG_DIR_NAME: &str = "hike-log";

/// Config file name inside [`CONFIG_DIR_NAME`]
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Environment overrides
pub mod env {
    pub const SOURCE_URL: &str = "HIKE_LOG_SOURCE_URL";
    pub const TIMEOUT_SECS: &str = "HIKE_LOG_TIMEOUT_SECS";
    pub const LOG_LEVEL: &str = "HIKE_LOG_LEVEL";
}

/// Default log level for the binary
pub const DEFAULT_LOG_LEVEL: &str = "info";
