use hrd_rs::filter::{distinct_regions, filter_rows};
use hrd_rs::models::{RegionRecord, RegionSelection};
use hrd_rs::storage::{LoadError, load_csv, save_csv, save_json};
use std::io::Write;
use tempfile::tempdir;

#[test]
fn loads_bundled_report_fixture() {
    let rows = load_csv("data/homelessness-report-march-2025.csv").unwrap();
    assert_eq!(rows.len(), 9);
    assert_eq!(rows[0].region, "Dublin");
    assert!(rows[0].total_adults > 0);
    assert_eq!(distinct_regions(&rows).len(), 9);
}

#[test]
fn missing_file_is_io_error() {
    let err = load_csv("/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, LoadError::Io(_)));
}

#[test]
fn missing_columns_are_malformed() {
    let dir = tempdir().unwrap();
    let p = dir.path().join("bad.csv");
    let mut f = std::fs::File::create(&p).unwrap();
    writeln!(f, "Region,Total Adults").unwrap();
    writeln!(f, "Dublin,100").unwrap();
    drop(f);

    let err = load_csv(&p).unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[test]
fn non_numeric_count_is_malformed() {
    let rows = load_csv("data/homelessness-report-march-2025.csv").unwrap();
    let dir = tempdir().unwrap();
    let good = dir.path().join("good.csv");
    save_csv(&rows, &good).unwrap();

    let text = std::fs::read_to_string(&good)
        .unwrap()
        .replacen("7423", "many", 1);
    let bad = dir.path().join("bad.csv");
    std::fs::write(&bad, text).unwrap();

    let err = load_csv(&bad).unwrap_err();
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[test]
fn filtered_subset_export_round_trips() {
    let rows = load_csv("data/homelessness-report-march-2025.csv").unwrap();
    let dublin = filter_rows(&rows, &RegionSelection::Region("Dublin".into()));
    assert_eq!(dublin.len(), 1);

    let dir = tempdir().unwrap();
    let csvp = dir.path().join("dublin.csv");
    let jsonp = dir.path().join("dublin.json");
    save_csv(&dublin, &csvp).unwrap();
    save_json(&dublin, &jsonp).unwrap();

    let back = load_csv(&csvp).unwrap();
    assert_eq!(back, dublin);

    let parsed: Vec<RegionRecord> =
        serde_json::from_str(&std::fs::read_to_string(&jsonp).unwrap()).unwrap();
    assert_eq!(parsed, dublin);
}
