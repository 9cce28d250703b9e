//! Loading the fixture logs end to end

use chrono::Weekday;
use smsdash_common::test_utils::{assert_approx_eq, init_test_logging, write_ml_csv, write_temp_file};
use smsdash_common::DashError;
use smsdash_data::{load_human, load_ml, Metric, Source};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_human_spreadsheet() {
    init_test_logging();

    let table = load_human(fixture("human_sample.xlsx")).unwrap();
    assert_eq!(table.source, Source::Human);
    assert_eq!(table.len(), 4);

    let first = &table.records[0];
    assert_eq!(first.sector, "Retail");
    assert_eq!(first.label, "promotion");
    assert_eq!(first.hour, 18);
    assert_eq!(first.day_of_week, Weekday::Mon);
    assert_approx_eq(first.metrics.get(Metric::ClickRate).unwrap(), 0.1, 1e-9);

    // Text timestamp cell parsed like a CSV value
    let third = &table.records[2];
    assert_eq!(third.label, "information");
    assert_eq!(third.hour, 9);
    assert_eq!(third.day_of_week, Weekday::Tue);
    assert_approx_eq(third.metrics.get(Metric::StopRate).unwrap(), 0.0, 1e-9);
}

#[test]
fn test_load_ml_csv() {
    init_test_logging();

    let table = load_ml(fixture("ml_sample.csv")).unwrap();
    assert_eq!(table.source, Source::Ml);
    assert_eq!(table.len(), 4);

    let beauty = &table.records[3];
    assert_eq!(beauty.sector, "Beauty");
    assert_eq!(beauty.day_of_week, Weekday::Fri);
    assert_eq!(beauty.hour, 19);
    assert_eq!(beauty.metrics.get(Metric::StoreVisits), None);
    assert_approx_eq(beauty.metrics.get(Metric::CostPerVisit).unwrap(), 1.1, 1e-9);
}

#[test]
fn test_missing_column_names_the_column() {
    let file = write_temp_file(
        "csv",
        "Secteur,label_predicted,Tx de clic unique,Tx de stop,tx délivrabilité,CPV,Visites en magasin\nRetail,promotion,0.1,0.01,0.9,2,10\n",
    );

    let err = load_ml(file.path()).unwrap_err();
    match err {
        DashError::Schema { column, .. } => assert_eq!(column.as_deref(), Some("predicted_best_time")),
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_bad_metric_reports_row() {
    let file = write_ml_csv(&[
        "Retail,promotion,2024-03-04 15:30:00,0.12,0.01,0.96,1.8,14",
        "Retail,promotion,2024-03-04 16:30:00,0.12,n/a,0.96,1.8,14",
    ]);

    let err = load_ml(file.path()).unwrap_err();
    match err {
        DashError::Schema { row, column, .. } => {
            assert_eq!(row, Some(2));
            assert_eq!(column.as_deref(), Some("Tx de stop"));
        }
        other => panic!("expected schema error, got {other:?}"),
    }
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp_file("json", "{}");
    let err = load_ml(file.path()).unwrap_err();
    assert!(matches!(err, DashError::Data { .. }));
}

#[test]
fn test_header_only_file_is_empty() {
    let file = write_ml_csv(&[]);
    let table = load_ml(file.path()).unwrap();
    assert!(table.is_empty());
}
