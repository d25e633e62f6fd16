use std::fs;

use tempfile::tempdir;

use ecotrack_rs::engine::{derive_record, EngineConfig};
use ecotrack_rs::interface::write_history_csv;
use ecotrack_rs::models::{CalculationRecord, CalculatorInputs};
use ecotrack_rs::state::{clear_state, HistoryStore, JsonFileStore, STATE_KEY};

fn record_with_car(car_kilometres: f64) -> CalculationRecord {
    let inputs = CalculatorInputs {
        car_kilometres,
        ..CalculatorInputs::default()
    };
    derive_record(inputs, &EngineConfig::default())
}

#[test]
fn test_history_orders_newest_first() {
    let dir = tempdir().unwrap();
    let mut store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();

    for car in [1_000.0, 2_000.0, 3_000.0] {
        store.add_calculation(record_with_car(car)).unwrap();
    }

    assert_eq!(store.len(), 3);
    assert_eq!(store.history()[0].inputs.car_kilometres, 3_000.0);
    assert_eq!(store.history()[2].inputs.car_kilometres, 1_000.0);
    assert_eq!(store.latest(), Some(&store.history()[0]));
}

#[test]
fn test_smaller_footprint_still_lands_on_top() {
    let dir = tempdir().unwrap();
    let mut store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();

    store.add_calculation(record_with_car(30_000.0)).unwrap();
    store.add_calculation(record_with_car(100.0)).unwrap();

    // Ordering is by recency, never by magnitude.
    assert!(store.history()[0].total_tonnes < store.history()[1].total_tonnes);
}

#[test]
fn test_fresh_directory_hydrates_empty() {
    let dir = tempdir().unwrap();
    let store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();

    assert!(store.is_empty());
    assert!(store.latest().is_none());
}

#[test]
fn test_state_survives_reopen() {
    let dir = tempdir().unwrap();

    let first;
    let second;
    {
        let mut store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();
        first = record_with_car(8_000.0);
        second = record_with_car(9_000.0);
        store.add_calculation(first.clone()).unwrap();
        store.add_calculation(second.clone()).unwrap();
    }

    let reopened = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();
    assert_eq!(reopened.history(), &[second.clone(), first]);
    assert_eq!(reopened.latest(), Some(&second));
}

#[test]
fn test_persisted_file_uses_external_format() {
    let dir = tempdir().unwrap();
    let mut store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();
    store.add_calculation(record_with_car(12_000.0)).unwrap();

    let path = dir.path().join(format!("{}.json", STATE_KEY));
    let raw = fs::read_to_string(path).unwrap();

    assert!(raw.contains("\"totalTonnes\""));
    assert!(raw.contains("\"comparisonToAverage\""));
    assert!(raw.contains("\"carKilometres\""));
    assert!(raw.contains("\"publicTransitKilometres\""));
    assert!(raw.contains("\"dietProfile\": \"mediumMeat\""));
}

#[test]
fn test_clear_state_empties_reopened_store() {
    let dir = tempdir().unwrap();

    {
        let mut store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();
        store.add_calculation(record_with_car(5_000.0)).unwrap();
    }

    let mut port = JsonFileStore::new(dir.path());
    clear_state(&mut port).unwrap();

    let reopened = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();
    assert!(reopened.is_empty());
    assert!(reopened.latest().is_none());
}

#[test]
fn test_csv_export_is_chronological() {
    let dir = tempdir().unwrap();
    let mut store = HistoryStore::open(JsonFileStore::new(dir.path())).unwrap();
    store.add_calculation(record_with_car(1_000.0)).unwrap();
    store.add_calculation(record_with_car(2_000.0)).unwrap();

    let csv_path = dir.path().join("export.csv");
    write_history_csv(&csv_path, store.history()).unwrap();

    let raw = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = raw.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,timestamp,car_kilometres"));

    // Oldest row first: ids were minted in insertion order.
    let id_of = |line: &str| -> u64 { line.split(',').next().unwrap().parse().unwrap() };
    assert!(id_of(lines[1]) < id_of(lines[2]));
}
