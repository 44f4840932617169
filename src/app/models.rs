//! Data models for hike log processing
//!
//! This module contains the canonical hike record and the derived view types
//! produced by the analytics services. Derived types are recomputed on every
//! refresh and are never stored.

use crate::constants::{ALL_YEARS, UNKNOWN_YEAR};
use serde::{Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Hike Year
// =============================================================================

/// Year a hike took place, or `Unknown` when the date did not yield one
///
/// A known year is always exactly four ASCII digits. The only way to build
/// one is [`HikeYear::from_token`], which enforces that shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum HikeYear {
    Known(String),
    Unknown,
}

impl HikeYear {
    /// Accept a candidate token only if it is four ASCII digits
    pub fn from_token(token: &str) -> Self {
        if token.len() == 4 && token.bytes().all(|b| b.is_ascii_digit()) {
            Self::Known(token.to_string())
        } else {
            Self::Unknown
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(year) => year,
            Self::Unknown => UNKNOWN_YEAR,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// Numeric value of a known year
    pub fn value(&self) -> Option<u16> {
        match self {
            Self::Known(year) => year.parse().ok(),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for HikeYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for HikeYear {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

// =============================================================================
// Hike Record
// =============================================================================

/// One normalized entry of the hike log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HikeRecord {
    /// Hike number, positive and assigned in chronological order
    pub id: u64,

    /// Date exactly as entered in the sheet (usually M/D/Y)
    pub date: String,

    /// Year extracted from `date`
    pub year: HikeYear,

    /// Free-text trip notes
    pub comments: String,

    /// Link to directions or a map, may be empty
    pub direction: String,

    /// Place name, `Unknown` when the sheet left it blank
    pub location: String,

    /// Distance in miles, never negative
    pub miles: f64,

    /// Elevation gain in feet, never negative
    pub elevation: f64,
}

// =============================================================================
// Derived Views
// =============================================================================

/// Number of hikes in one calendar year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearCount {
    pub year: String,
    pub count: usize,
}

/// Headline numbers for the whole log
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub hike_count: usize,

    /// Earliest known year
    pub since: Option<u16>,

    pub total_miles: f64,
    pub total_elevation: f64,

    /// Year with the most hikes (earliest year wins a tie)
    pub active_year: Option<String>,
    pub active_count: usize,

    /// Hikes divided by distinct known years (at least one year)
    pub average_hikes_per_year: f64,
}

/// Occurrences of a normalized location name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LocationCount {
    pub name: String,
    pub count: usize,
}

/// A hike together with its demanding score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHike {
    #[serde(flatten)]
    pub hike: HikeRecord,
    pub score: f64,
}

/// Thematic categories matched against trip comments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Scenic,
    Weather,
    Food,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Scenic, Category::Weather, Category::Food];

    /// Human-readable heading
    pub fn title(&self) -> &'static str {
        match self {
            Category::Scenic => "Scenic & Beautiful",
            Category::Weather => "Windy & Rainy",
            Category::Food => "Post-Hike Food",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Scenic => "scenic",
            Category::Weather => "weather",
            Category::Food => "food",
        };
        f.write_str(name)
    }
}

/// Year constraint applied by search
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum YearFilter {
    #[default]
    All,
    Year(String),
}

impl YearFilter {
    pub fn matches(&self, year: &HikeYear) -> bool {
        match self {
            YearFilter::All => true,
            YearFilter::Year(wanted) => year.as_str() == wanted,
        }
    }
}

impl FromStr for YearFilter {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL_YEARS) {
            Ok(YearFilter::All)
        } else {
            Ok(YearFilter::Year(trimmed.to_string()))
        }
    }
}

impl fmt::Display for YearFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearFilter::All => f.write_str(ALL_YEARS),
            YearFilter::Year(year) => f.write_str(year),
        }
    }
}
