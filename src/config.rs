//! Configuration management and validation.
//!
//! Provides configuration structures for the sheet source, the analytics
//! tables (weights, keyword lists, caps) and logging, with layered loading:
//! defaults, then a JSON config file, then environment variables. CLI
//! overrides are applied last by the command layer.

use crate::constants::{self, categories, env, scoring};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub analytics: AnalyticsConfig,
    pub logging: LoggingConfig,
}

/// Where the raw sheet comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Published CSV URL; an empty string means "no source configured"
    pub url: String,

    /// Fetch timeout in seconds (0 = wait forever)
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: constants::DEFAULT_SHEET_URL.to_string(),
            timeout_secs: constants::DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Tables driving the derivation engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub scoring: ScoringConfig,
    pub categories: CategoryConfig,

    /// Hike numbers reported as milestones
    pub milestone_targets: Vec<u64>,

    /// Number of locations in the ranking
    pub location_limit: usize,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringConfig::default(),
            categories: CategoryConfig::default(),
            milestone_targets: constants::MILESTONE_TARGETS.to_vec(),
            location_limit: constants::DEFAULT_LOCATION_LIMIT,
        }
    }
}

/// Demanding-hike score weights and bonus lists
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub mile_weight: f64,
    pub elevation_weight: f64,
    pub priority_bonus: f64,
    pub keyword_bonus: f64,

    /// Lowercase place names earning the priority bonus
    pub priority_locations: Vec<String>,

    /// Lowercase comment keywords earning the keyword bonus
    pub difficulty_keywords: Vec<String>,

    /// Number of ranked hikes exposed
    pub limit: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            mile_weight: scoring::MILE_WEIGHT,
            elevation_weight: scoring::ELEVATION_WEIGHT,
            priority_bonus: scoring::PRIORITY_BONUS,
            keyword_bonus: scoring::KEYWORD_BONUS,
            priority_locations: to_strings(scoring::PRIORITY_LOCATIONS),
            difficulty_keywords: to_strings(scoring::DIFFICULTY_KEYWORDS),
            limit: scoring::LIMIT,
        }
    }
}

/// Keyword lists for the thematic categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryConfig {
    pub scenic: Vec<String>,
    pub weather: Vec<String>,
    pub food: Vec<String>,

    /// Maximum hikes returned per category
    pub limit: usize,
}

impl Default for CategoryConfig {
    fn default() -> Self {
        Self {
            scenic: to_strings(categories::SCENIC),
            weather: to_strings(categories::WEATHER),
            food: to_strings(categories::FOOD),
            limit: categories::LIMIT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: constants::DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Config {
    /// Create configuration with a custom source URL
    pub fn with_source_url(mut self, url: impl Into<String>) -> Self {
        self.source.url = url.into();
        self
    }

    /// Create configuration with a custom fetch timeout
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.source.timeout_secs = timeout_secs;
        self
    }

    /// Replace the analytics tables
    pub fn with_analytics(mut self, analytics: AnalyticsConfig) -> Self {
        self.analytics = analytics;
        self
    }

    /// Default config file location (`<config_dir>/hike-log/config.json`)
    pub fn default_config_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| Error::configuration("Could not determine user config directory"))?;
        Ok(base
            .join(constants::CONFIG_DIR_NAME)
            .join(constants::CONFIG_FILE_NAME))
    }

    /// Read a JSON config file; missing keys fall back to defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            Error::io(format!("Failed to read config file {}", path.display()), e)
        })?;
        serde_json::from_str(&text)
            .map_err(|e| Error::config_format(path.display().to_string(), e))
    }

    /// Load with layered configuration (defaults -> file -> environment)
    pub fn load_layered(config_file: Option<&Path>) -> Result<Self> {
        let mut config = match config_file {
            Some(path) => {
                debug!("Loading config file {}", path.display());
                Self::from_file(path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides through a lookup function
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(env::SOURCE_URL) {
            debug!("{} overrides source url", env::SOURCE_URL);
            self.source.url = url.trim().to_string();
        }

        if let Some(raw) = lookup(env::TIMEOUT_SECS) {
            self.source.timeout_secs = raw.trim().parse().map_err(|_| {
                Error::configuration(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    env::TIMEOUT_SECS,
                    raw
                ))
            })?;
        }

        if let Some(level) = lookup(env::LOG_LEVEL) {
            self.logging.level = level.trim().to_lowercase();
        }

        Ok(())
    }

    /// Validate configuration tables
    pub fn validate(&self) -> Result<()> {
        self.analytics.validate()?;

        match self.logging.level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
            other => Err(Error::configuration(format!(
                "Unknown log level '{}' (expected trace, debug, info, warn or error)",
                other
            ))),
        }
    }
}

impl AnalyticsConfig {
    pub fn validate(&self) -> Result<()> {
        let scoring = &self.scoring;
        for (name, weight) in [
            ("mile_weight", scoring.mile_weight),
            ("elevation_weight", scoring.elevation_weight),
            ("priority_bonus", scoring.priority_bonus),
            ("keyword_bonus", scoring.keyword_bonus),
        ] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(Error::configuration(format!(
                    "scoring.{} must be a non-negative number, got {}",
                    name, weight
                )));
            }
        }

        for (name, limit) in [
            ("scoring.limit", scoring.limit),
            ("categories.limit", self.categories.limit),
            ("location_limit", self.location_limit),
        ] {
            if limit == 0 {
                return Err(Error::configuration(format!("{} must be at least 1", name)));
            }
        }

        for (name, list) in [
            ("scoring.priority_locations", &scoring.priority_locations),
            ("scoring.difficulty_keywords", &scoring.difficulty_keywords),
            ("categories.scenic", &self.categories.scenic),
            ("categories.weather", &self.categories.weather),
            ("categories.food", &self.categories.food),
        ] {
            // An empty keyword would match every comment
            if list.iter().any(|k| k.trim().is_empty()) {
                return Err(Error::configuration(format!(
                    "{} contains an empty keyword",
                    name
                )));
            }
        }

        Ok(())
    }
}
