//! Test utilities and shared test helpers for the dashboard workspace.
//!
//! Enabled for other crates through the `testing` feature.

use std::io::Write;
use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_env_filter(filter)
            .try_init();
    });
}

/// Assert that two floating point numbers are approximately equal within a tolerance.
pub fn assert_approx_eq(left: f64, right: f64, tolerance: f64) {
    let diff = (left - right).abs();
    assert!(
        diff <= tolerance,
        "assertion failed: `{left}` is not approximately equal to `{right}` (tolerance: {tolerance}, diff: {diff})"
    );
}

/// Header of the ML prediction CSV.
pub const ML_CSV_HEADER: &str =
    "Secteur,label_predicted,predicted_best_time,Tx de clic unique,Tx de stop,tx délivrabilité,CPV,Visites en magasin";

/// Write `contents` to a fresh temporary file with the given extension.
pub fn write_temp_file(extension: &str, contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(&format!(".{extension}"))
        .tempfile()
        .expect("Failed to create temporary file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temporary file");
    file.flush().expect("Failed to flush temporary file");
    file
}

/// Write an ML prediction CSV made of the standard header plus `rows`.
pub fn write_ml_csv(rows: &[&str]) -> tempfile::NamedTempFile {
    let mut contents = String::from(ML_CSV_HEADER);
    for row in rows {
        contents.push('\n');
        contents.push_str(row);
    }
    contents.push('\n');
    write_temp_file("csv", &contents)
}
