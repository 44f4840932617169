// benches/pipeline.rs
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use hike_log::RecordStore;
use hike_log::app::services::analytics::Dashboard;
use hike_log::app::services::csv_parser::parse_table;
use hike_log::config::AnalyticsConfig;

const PLACES: &[&str] = &["Mission Peak, Fremont", "Sunol", "Mount Dana", "Del Valle", "Rancho"];
const NOTES: &[&str] = &[
    "Strenuous climb, steep at the end",
    "\"Windy, cold\nbut beautiful views\"",
    "Pancakes at the diner after",
    "Easy loop",
];

/// Synthetic sheet shaped like the group's export
fn synthetic_sheet(rows: usize) -> String {
    let mut text =
        String::from("Hike #,Date,Comments,Directions,Location,Miles,Elevation Gain (ft)\n");
    for i in (1..=rows).rev() {
        text.push_str(&format!(
            "{},{}/{}/{},{},,\"{}\",{}.{},\"{},{:03}\"\n",
            i,
            i % 12 + 1,
            i % 28 + 1,
            15 + i % 10,
            NOTES[i % NOTES.len()],
            PLACES[i % PLACES.len()],
            3 + i % 9,
            i % 10,
            1 + i % 3,
            i % 1000
        ));
    }
    text
}

fn bench_pipeline(c: &mut Criterion) {
    let sheet = synthetic_sheet(2_000);
    let store = RecordStore::from_text(&sheet);
    let config = AnalyticsConfig::default();

    c.bench_function("parse_rows", |b| {
        b.iter(|| {
            let table = parse_table(black_box(&sheet));
            black_box(table.len())
        })
    });

    c.bench_function("parse_and_normalize", |b| {
        b.iter(|| {
            let store = RecordStore::from_text(black_box(&sheet));
            black_box(store.len())
        })
    });

    c.bench_function("dashboard", |b| {
        b.iter(|| {
            let dashboard = Dashboard::compute(black_box(&store), black_box(&config));
            black_box(dashboard.demanding.len())
        })
    });
}

criterion_group!(benches, bench_pipeline);
criterion_main!(benches);
