//! Command-line argument definitions for the hike log
//!
//! This module defines the CLI interface using the clap derive API. Source
//! and output options are global so they can be given before or after the
//! subcommand.

use crate::app::models::{Category, YearFilter};
use crate::constants::ALL_YEARS;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the hike log
///
/// Fetches the group's published hike sheet, normalizes it and prints
/// statistics, milestones, rankings and themed lists.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hike-log",
    version,
    about = "Derive statistics and rankings from a spreadsheet-exported hiking log",
    long_about = "Fetches a hiking log published as CSV (for example a Google Sheets export), \
                  normalizes every row into a hike record and prints aggregate statistics, \
                  milestones, the most visited places, the most demanding hikes and themed \
                  lists built from the trip comments."
)]
pub struct Args {
    /// Path to configuration file
    ///
    /// JSON configuration file for the source and the analytics tables. If
    /// not specified, looks for <config dir>/hike-log/config.json
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Published CSV URL, overriding the configured source
    ///
    /// An empty value means no source: every view is computed over an empty log.
    #[arg(
        long = "url",
        value_name = "URL",
        global = true,
        conflicts_with = "file",
        help = "Published CSV URL of the hike sheet"
    )]
    pub url: Option<String>,

    /// Local CSV export to read instead of fetching over HTTP
    #[arg(
        long = "file",
        value_name = "PATH",
        global = true,
        help = "Read the sheet from a local CSV export"
    )]
    pub file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for results
    #[arg(
        long = "format",
        value_enum,
        default_value = "text",
        global = true,
        help = "Output format for results"
    )]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Headline statistics, yearly histogram, milestones and top locations
    Summary,
    /// Hikes ranked by demanding score
    Demanding,
    /// Hikes whose comments match a theme
    Category {
        #[arg(value_enum)]
        category: CategoryArg,
    },
    /// Filter hikes by free text and year
    Search(SearchArgs),
    /// Years that have at least one hike
    Years,
    /// Every derived view in one report
    Dashboard,
    /// The full normalized record set
    Records,
}

/// Arguments for the search command
#[derive(Debug, Clone, Parser)]
pub struct SearchArgs {
    /// Text matched against location, comments, hike number and date
    #[arg(value_name = "QUERY", default_value = "")]
    pub query: String,

    /// Restrict to one year ("All" for every year)
    #[arg(
        short = 'y',
        long = "year",
        value_name = "YEAR",
        default_value = ALL_YEARS,
        help = "Restrict results to one year, or All"
    )]
    pub year: YearFilter,
}

/// Thematic category as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CategoryArg {
    Scenic,
    Weather,
    Food,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Scenic => Category::Scenic,
            CategoryArg::Weather => Category::Weather,
            CategoryArg::Food => Category::Food,
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON for scripting
    Json,
}

impl Args {
    /// Get log level based on verbosity and quiet flags
    ///
    /// Without flags the configured level applies (`None`).
    pub fn get_log_level(&self) -> Option<&'static str> {
        if self.quiet {
            return Some("error");
        }

        match self.verbose {
            0 => None,
            1 => Some("info"),
            2 => Some("debug"),
            _ => Some("trace"),
        }
    }

    /// Show progress indicators (text output on an unquiet run)
    pub fn show_progress(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Text
    }
}
