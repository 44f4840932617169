//! Integration tests for the hike log pipeline
//!
//! These tests drive the public API end to end: a sheet source feeds raw CSV
//! text through the refresh service, and the derived views are checked
//! against hand-computed values.

use hike_log::app::adapters::sheet_source::{FileSheetSource, SheetSource};
use hike_log::app::models::{Category, YearFilter};
use hike_log::app::services::analytics::{Dashboard, demanding_score, search, year_histogram};
use hike_log::config::AnalyticsConfig;
use hike_log::{Config, Error, HikeLog, HikeYear, RecordStore};
use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tempfile::NamedTempFile;

/// A sheet shaped like the group's export: quoted multi-line comments,
/// thousands separators, blank and junk rows, a missing location
const SHEET: &str = "\
Hike #,Date,Comments,Directions,Location,Miles,Elevation Gain (ft)
1,1/1/20,Nice strenuous climb,,Mount Dana,8,2400
2,2/15/2020,\"Windy, cold
but beautiful views\",https://maps.example/2,\"Mission Peak, Fremont\",6.2,\"2,150\"
,,,,,,
Total,,,,,,
3,3/3/21,Pancakes at the diner,,mission peak,5,\"1,900 ft\"
25,7/4/2021,\"He said \"\"never again\"\"\",,,3,about 500
26,sometime,Gorgeous sunrise,,Sunol,4,700
-4,1/1/22,negative id,,Nowhere,1,1
";

/// Sheet source that serves whatever text is currently set and counts calls
#[derive(Default)]
struct ScriptedSource {
    text: Mutex<Option<String>>,
    calls: AtomicUsize,
}

impl ScriptedSource {
    fn serving(text: &str) -> Arc<Self> {
        let source = Arc::new(Self::default());
        source.serve(Some(text));
        source
    }

    fn serve(&self, text: Option<&str>) {
        *self.text.lock().unwrap() = text.map(str::to_string);
    }
}

impl SheetSource for ScriptedSource {
    fn fetch(&self, location: &str) -> hike_log::Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.text
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| Error::transport(location, "HTTP status 503"))
    }
}

fn service(source: Arc<ScriptedSource>) -> HikeLog {
    let config = Config::default().with_source_url("https://sheet.example/log.csv");
    HikeLog::with_source(&config, source)
}

#[tokio::test]
async fn test_end_to_end_normalization() {
    let log = service(ScriptedSource::serving(SHEET));
    let store = log.refresh().await.unwrap();

    let ids: Vec<u64> = store.iter().map(|h| h.id).collect();
    assert_eq!(ids, vec![26, 25, 3, 2, 1]);
    assert_eq!(store.stats().total_rows, 8);
    assert_eq!(store.stats().rows_discarded, 3);
    assert!(!store.stats().used_column_fallback);

    let second = store.get(2).unwrap();
    assert_eq!(second.comments, "Windy, cold\nbut beautiful views");
    assert_eq!(second.location, "Mission Peak, Fremont");
    assert_eq!(second.elevation, 2150.0);
    assert_eq!(second.year, HikeYear::from_token("2020"));

    let quoted = store.get(25).unwrap();
    assert_eq!(quoted.comments, "He said \"never again\"");
    assert_eq!(quoted.location, "Unknown");
    assert_eq!(quoted.elevation, 0.0);

    assert_eq!(store.get(3).unwrap().elevation, 1900.0);
    assert_eq!(store.get(26).unwrap().year, HikeYear::Unknown);
}

#[tokio::test]
async fn test_scenario_record_and_score() {
    let text = "Num,Date,Comments,Link,Loc,Miles,Elev\n\
                1,1/1/20,Nice strenuous climb,,Mount Dana,8,2400\n";
    let log = service(ScriptedSource::serving(text));
    let store = log.refresh().await.unwrap();

    assert_eq!(store.len(), 1);
    let hike = &store.records()[0];
    assert_eq!(hike.id, 1);
    assert_eq!(hike.year.as_str(), "2020");
    assert_eq!(hike.miles, 8.0);
    assert_eq!(hike.elevation, 2400.0);

    let score = demanding_score(hike, &AnalyticsConfig::default().scoring);
    assert_eq!(score, 8.0 * 500.0 + 2400.0 + 8000.0 + 1000.0);
}

#[tokio::test]
async fn test_derived_views() {
    let log = service(ScriptedSource::serving(SHEET));
    log.refresh().await.unwrap();
    let dashboard = log.dashboard().await;

    assert_eq!(dashboard.stats.hike_count, 5);
    assert_eq!(dashboard.stats.since, Some(2020));
    assert_eq!(dashboard.stats.active_year.as_deref(), Some("2020"));
    assert_eq!(dashboard.years, vec!["2021", "2020"]);

    let known: usize = dashboard.histogram.iter().map(|e| e.count).sum();
    assert_eq!(known, 4);

    let milestone_ids: Vec<u64> = dashboard.milestones.iter().map(|h| h.id).collect();
    assert_eq!(milestone_ids, vec![25, 1]);

    assert_eq!(dashboard.top_locations[0].name, "MISSION PEAK");
    assert_eq!(dashboard.top_locations[0].count, 2);

    assert_eq!(dashboard.demanding[0].hike.id, 1);
    assert_eq!(dashboard.demanding[0].score, 15400.0);

    let scenic: Vec<u64> = dashboard.category(Category::Scenic).iter().map(|h| h.id).collect();
    assert_eq!(scenic, vec![26, 2]);
    let food: Vec<u64> = dashboard.category(Category::Food).iter().map(|h| h.id).collect();
    assert_eq!(food, vec![3]);
}

#[tokio::test]
async fn test_search_over_snapshot() {
    let log = service(ScriptedSource::serving(SHEET));
    let store = log.refresh().await.unwrap();

    let hits: Vec<u64> = search(store.records(), "mission", &YearFilter::All)
        .iter()
        .map(|h| h.id)
        .collect();
    assert_eq!(hits, vec![3, 2]);

    let year: YearFilter = "2021".parse().unwrap();
    let hits: Vec<u64> = search(store.records(), "", &year).iter().map(|h| h.id).collect();
    assert_eq!(hits, vec![25, 3]);
}

#[tokio::test]
async fn test_refresh_is_idempotent() {
    let source = ScriptedSource::serving(SHEET);
    let log = service(Arc::clone(&source));

    let first = log.refresh().await.unwrap();
    let second = log.refresh().await.unwrap();

    assert_eq!(first.records(), second.records());
    assert_eq!(year_histogram(first.records()), year_histogram(second.records()));
    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_stale_snapshot_survives_outage() {
    let source = ScriptedSource::serving(SHEET);
    let log = service(Arc::clone(&source));
    log.refresh().await.unwrap();
    let before = log.snapshot().await;

    source.serve(None);
    let err = log.refresh().await.unwrap_err();
    assert!(err.is_transport());
    assert!(err.to_string().contains("sheet.example"));

    let after = log.snapshot().await;
    assert_eq!(after.records(), before.records());

    source.serve(Some("Num,Date\n9,9/9/24\n"));
    assert_eq!(log.refresh().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_readers_keep_old_snapshot_across_refresh() {
    let source = ScriptedSource::serving(SHEET);
    let log = service(Arc::clone(&source));
    let held = log.refresh().await.unwrap();

    source.serve(Some("Num,Date\n"));
    let replaced = log.refresh().await.unwrap();

    assert!(replaced.is_empty());
    assert_eq!(held.len(), 5);
}

#[tokio::test]
async fn test_file_source_pipeline() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(SHEET.as_bytes()).unwrap();

    let config = Config::default().with_source_url(file.path().display().to_string());
    let log = HikeLog::with_source(&config, Arc::new(FileSheetSource::new()));
    let store = log.refresh().await.unwrap();

    assert_eq!(store.len(), 5);
    let expected = Dashboard::compute(&RecordStore::from_text(SHEET), &AnalyticsConfig::default());
    assert_eq!(log.dashboard().await, expected);
}
