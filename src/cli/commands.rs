//! Command implementations for the hike log CLI
//!
//! This module wires the arguments to the refresh service: set up logging and
//! configuration, run one refresh, then render the requested view as text or
//! JSON on stdout. Logs go to stderr.

use crate::app::adapters::sheet_source::{FileSheetSource, HttpSheetSource, SheetSource};
use crate::app::models::{
    AggregateStats, Category, HikeRecord, LocationCount, ScoredHike, YearCount,
};
use crate::app::services::analytics::{
    Dashboard, aggregate_stats, available_years, category_hikes, demanding_hikes, milestones,
    search, top_locations, year_histogram,
};
use crate::app::services::hike_log::HikeLog;
use crate::app::services::record_store::RecordStore;
use crate::cli::args::{Args, Command, OutputFormat};
use crate::config::{AnalyticsConfig, Config};
use crate::{Error, Result};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Refresh the hike log once
/// 3. Render the requested view
pub async fn run(args: Args) -> Result<()> {
    let config = load_configuration(&args)?;
    setup_logging(&args, &config)?;

    debug!("Command line arguments: {:?}", args);
    debug!("Loaded configuration: {:?}", config);

    let source: Arc<dyn SheetSource> = if args.file.is_some() {
        Arc::new(FileSheetSource::new())
    } else {
        Arc::new(HttpSheetSource::new())
    };
    let log = HikeLog::with_source(&config, source);

    let store = refresh_with_progress(&args, &log).await?;
    info!("Loaded {} hikes", store.len());

    render(&args, &store, &config.analytics)
}

/// Set up structured logging based on CLI arguments and configuration
fn setup_logging(args: &Args, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level().unwrap_or(config.logging.level.as_str());

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("hike_log={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to install logger: {e}")))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to install logger: {e}")))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
fn load_configuration(args: &Args) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(path) = &args.file {
        config.source.url = path.display().to_string();
    } else if let Some(url) = &args.url {
        config.source.url = url.trim().to_string();
    }

    if let Some(level) = args.get_log_level() {
        config.logging.level = level.to_string();
    }
}

async fn refresh_with_progress(args: &Args, log: &HikeLog) -> Result<Arc<RecordStore>> {
    let spinner = if args.show_progress() {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .map_err(|e| Error::configuration(format!("Invalid progress template: {e}")))?,
        );
        pb.set_message("Fetching hike log...");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let result = log.refresh().await;

    if let Some(pb) = spinner {
        match &result {
            Ok(store) => pb.finish_with_message(format!("Loaded {} hikes", store.len())),
            Err(_) => pb.finish_and_clear(),
        }
    }

    result
}

/// Render the requested view of the snapshot
fn render(args: &Args, store: &RecordStore, analytics: &AnalyticsConfig) -> Result<()> {
    let records = store.records();
    let json = args.format == OutputFormat::Json;

    match &args.command {
        Command::Summary => {
            let stats = aggregate_stats(records);
            let histogram = year_histogram(records);
            let reached = milestones(records, &analytics.milestone_targets);
            let locations = top_locations(records, analytics.location_limit);
            if json {
                print_json(&serde_json::json!({
                    "stats": stats,
                    "histogram": histogram,
                    "milestones": reached,
                    "top_locations": locations,
                }))
            } else {
                print_stats(&stats);
                print_histogram(&histogram);
                print_hikes("Milestones", reached.iter().copied());
                print_locations(&locations);
                Ok(())
            }
        }
        Command::Demanding => {
            let ranked = demanding_hikes(records, &analytics.scoring);
            if json {
                print_json(&ranked)
            } else {
                print_demanding(&ranked);
                Ok(())
            }
        }
        Command::Category { category } => {
            let category = Category::from(*category);
            let hikes = category_hikes(records, category, &analytics.categories);
            if json {
                print_json(&hikes)
            } else {
                print_hikes(category.title(), hikes.iter().copied());
                Ok(())
            }
        }
        Command::Search(search_args) => {
            let hikes = search(records, &search_args.query, &search_args.year);
            if json {
                print_json(&hikes)
            } else {
                let title = format!(
                    "{} hikes matching '{}' ({})",
                    hikes.len(),
                    search_args.query,
                    search_args.year
                );
                print_hikes(&title, hikes.iter().copied());
                Ok(())
            }
        }
        Command::Years => {
            let years = available_years(records);
            if json {
                print_json(&years)
            } else {
                for year in years {
                    println!("{}", year);
                }
                Ok(())
            }
        }
        Command::Dashboard => {
            let dashboard = Dashboard::compute(store, analytics);
            if json {
                print_json(&dashboard)
            } else {
                print_dashboard(&dashboard);
                Ok(())
            }
        }
        Command::Records => {
            if json {
                print_json(store.records())
            } else {
                print_hikes("All hikes", store.iter());
                Ok(())
            }
        }
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| Error::output("Failed to encode JSON output", e))?;
    println!("{}", text);
    Ok(())
}

fn heading(title: &str) {
    println!("\n{}", title.bold().cyan());
    println!("{}", "─".repeat(title.chars().count()).dimmed());
}

fn print_stats(stats: &AggregateStats) {
    heading("Hike Log Summary");
    println!("   • Hikes: {}", stats.hike_count.to_string().bold());
    if let Some(since) = stats.since {
        println!("   • Since: {}", since);
    }
    println!("   • Total miles: {:.1}", stats.total_miles);
    println!("   • Total elevation gain: {:.0} ft", stats.total_elevation);
    match &stats.active_year {
        Some(year) => println!("   • Most active year: {} ({} hikes)", year, stats.active_count),
        None => println!("   • Most active year: {}", "n/a".dimmed()),
    }
    println!("   • Hikes per year: {:.1}", stats.average_hikes_per_year);
}

fn print_histogram(histogram: &[YearCount]) {
    heading("Hikes per Year");
    let max = histogram.iter().map(|e| e.count).max().unwrap_or(0).max(1);
    for entry in histogram {
        let width = (entry.count * 40).div_ceil(max);
        println!("   {} {} {}", entry.year, "█".repeat(width).green(), entry.count);
    }
}

fn print_locations(locations: &[LocationCount]) {
    heading("Top Locations");
    for (rank, location) in locations.iter().enumerate() {
        println!("   {}. {} ({})", rank + 1, location.name.bold(), location.count);
    }
}

fn print_demanding(ranked: &[ScoredHike]) {
    heading("Most Demanding Hikes");
    for (rank, scored) in ranked.iter().enumerate() {
        println!(
            "   {:>2}. {} {}",
            rank + 1,
            format!("{:>7.0}", scored.score).yellow(),
            hike_line(&scored.hike)
        );
    }
}

fn print_hikes<'a>(title: &str, hikes: impl Iterator<Item = &'a HikeRecord>) {
    heading(title);
    let mut shown = 0;
    for hike in hikes {
        println!("   {}", hike_line(hike));
        shown += 1;
    }
    if shown == 0 {
        println!("   {}", "(none)".dimmed());
    }
}

fn hike_line(hike: &HikeRecord) -> String {
    let mut line = format!(
        "{} {} {} ({:.1} mi, {:.0} ft)",
        format!("#{}", hike.id).bold(),
        hike.date.dimmed(),
        hike.location,
        hike.miles,
        hike.elevation
    );
    if !hike.comments.is_empty() {
        line.push_str(&format!(" - {}", hike.comments.replace('\n', " ").italic()));
    }
    line
}

fn print_dashboard(dashboard: &Dashboard) {
    print_stats(&dashboard.stats);
    print_histogram(&dashboard.histogram);
    print_hikes("Milestones", dashboard.milestones.iter());
    print_locations(&dashboard.top_locations);
    print_demanding(&dashboard.demanding);
    for category in Category::ALL {
        print_hikes(category.title(), dashboard.category(category).iter());
    }
}
