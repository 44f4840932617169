//! Hike Log Library
//!
//! A Rust library for turning a spreadsheet-exported hiking log (published as
//! CSV) into a normalized record set and a family of derived analytics.
//!
//! This library provides tools for:
//! - Parsing loosely-structured CSV with quoting and multi-line comment fields
//! - Normalizing rows into typed hike records (id, year, distance, gain)
//! - Discovering measure columns from the header with a positional fallback
//! - Holding the record set as an immutable, atomically replaced snapshot
//! - Deriving statistics, histograms, milestones, rankings and themed lists
//! - Fetching the raw sheet over HTTP or from a local export

pub mod config;
pub mod constants;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod analytics;
        pub mod csv_parser;
        pub mod hike_log;
        pub mod record_normalizer;
        pub mod record_store;
    }
    pub mod adapters {
        pub mod sheet_source;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{HikeRecord, HikeYear};
pub use app::services::hike_log::HikeLog;
pub use app::services::record_store::{RecordStore, SnapshotHandle};
pub use config::Config;

/// Result type alias for hike log operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for hike log operations
///
/// Malformed row data never shows up here: bad fields degrade to defaults and
/// bad ids drop the row. Only the source boundary and configuration can fail.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// I/O operation failed
    #[error("I/O error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Fetching the sheet failed or returned a non-success status
    #[error("Could not reach the hike sheet at '{location}': {message}")]
    Transport { location: String, message: String },

    /// Fetching the sheet did not finish in time
    #[error("Timed out after {timeout_secs}s fetching the hike sheet at '{location}'")]
    Timeout { location: String, timeout_secs: u64 },

    /// Configuration error
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Config file could not be decoded
    #[error("Invalid config file '{path}': {source}")]
    ConfigFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Rendering results failed
    #[error("Output error: {message}: {source}")]
    Output {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Processing interrupted
    #[error("Processing interrupted: {reason}")]
    ProcessingInterrupted { reason: String },
}

impl Error {
    /// Create an I/O error with context
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a transport error for a source location
    pub fn transport(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a timeout error for a source location
    pub fn timeout(location: impl Into<String>, timeout_secs: u64) -> Self {
        Self::Timeout {
            location: location.into(),
            timeout_secs,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create a config format error
    pub fn config_format(path: impl Into<String>, source: serde_json::Error) -> Self {
        Self::ConfigFormat {
            path: path.into(),
            source,
        }
    }

    /// Create an output error
    pub fn output(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Output {
            message: message.into(),
            source,
        }
    }

    /// Create a processing interrupted error
    pub fn processing_interrupted(reason: impl Into<String>) -> Self {
        Self::ProcessingInterrupted {
            reason: reason.into(),
        }
    }

    /// True for failures at the source boundary (the snapshot is kept)
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. } | Self::Timeout { .. } | Self::Io { .. })
    }
}

// Automatic conversions from common error types
impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: "I/O operation failed".to_string(),
            source: error,
        }
    }
}
