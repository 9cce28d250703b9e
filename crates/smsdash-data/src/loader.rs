//! Reads the campaign logs from disk.
//!
//! Spreadsheets go through `calamine`, delimited text through `csv`. Both are
//! first lowered into a [`RawTable`] of [`Cell`]s so that column resolution,
//! timestamp parsing and metric conversion are shared.

use crate::types::{
    CampaignRecord, CampaignTable, Metric, Metrics, Source, LABEL_COLUMN, SECTOR_COLUMN,
};
use calamine::{open_workbook_auto, Data, DataType, Reader};
use chrono::NaiveDateTime;
use smsdash_common::{parse_timestamp, DashError, Result};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

/// A single cell as read from either file format.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    DateTime(NaiveDateTime),
    /// A spreadsheet error value such as `#DIV/0!`
    Invalid(String),
}

impl Cell {
    fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::Empty => Self::Empty,
            #[allow(clippy::cast_precision_loss)]
            Data::Int(i) => Self::Number(*i as f64),
            Data::Float(f) => Self::Number(*f),
            Data::Bool(b) => Self::Text(b.to_string()),
            Data::String(s) | Data::DateTimeIso(s) => Self::Text(s.clone()),
            Data::DateTime(_) => data
                .as_datetime()
                .map_or_else(|| Self::Invalid(format!("{data:?}")), Self::DateTime),
            Data::Error(e) => Self::Invalid(e.to_string()),
            #[allow(unreachable_patterns)]
            other => Self::Invalid(format!("{other:?}")),
        }
    }
}

/// Header plus data rows of a source file.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Supported on-disk formats, chosen by file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Spreadsheet,
    Delimited,
}

impl FileFormat {
    /// Detect the format from the path's extension
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Some(Self::Spreadsheet),
            "csv" | "txt" => Some(Self::Delimited),
            _ => None,
        }
    }
}

/// Read the first worksheet of a workbook
pub fn read_spreadsheet(path: &Path) -> Result<RawTable> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(DashError::data(display, "file not found"));
    }

    let mut workbook = open_workbook_auto(path)
        .map_err(|e| DashError::data_with_source(&display, "cannot open workbook", e))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| DashError::schema(&display, "workbook has no worksheets"))?
        .map_err(|e| DashError::data_with_source(&display, "cannot read first worksheet", e))?;

    let mut rows = range.rows();
    let headers = rows
        .next()
        .ok_or_else(|| DashError::schema(&display, "worksheet is empty"))?
        .iter()
        .map(|cell| match cell {
            Data::String(s) => s.trim().to_string(),
            other => other.to_string().trim().to_string(),
        })
        .collect();

    let rows = rows
        .map(|row| row.iter().map(Cell::from).collect())
        .collect();

    Ok(RawTable { headers, rows })
}

/// Read a comma-separated file with a header row
pub fn read_delimited(path: &Path) -> Result<RawTable> {
    let display = path.display().to_string();
    if !path.is_file() {
        return Err(DashError::data(display, "file not found"));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::Headers)
        .from_path(path)
        .map_err(|e| DashError::data_with_source(&display, "cannot open file", e))?;

    let headers = reader
        .headers()
        .map_err(|e| DashError::data_with_source(&display, "cannot read header row", e))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record =
            record.map_err(|e| DashError::data_with_source(&display, "malformed row", e))?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(RawTable { headers, rows })
}

/// Read a raw table, choosing the reader from the file extension
pub fn read_raw(path: &Path) -> Result<RawTable> {
    match FileFormat::from_path(path) {
        Some(FileFormat::Spreadsheet) => read_spreadsheet(path),
        Some(FileFormat::Delimited) => read_delimited(path),
        None => Err(DashError::data(
            path.display().to_string(),
            "unsupported file type (expected .xlsx, .xls, .ods or .csv)",
        )),
    }
}

/// Column positions needed to build records.
struct ColumnMap {
    sector: usize,
    label: usize,
    timestamp: usize,
    metrics: [usize; 5],
}

impl ColumnMap {
    fn resolve(path: &str, headers: &[String], source: Source) -> Result<Self> {
        let positions: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (h.as_str(), i))
            .collect();
        let find = |name: &str| {
            positions
                .get(name)
                .copied()
                .ok_or_else(|| DashError::missing_column(path, name))
        };

        let mut metrics = [0; 5];
        for metric in Metric::ALL {
            metrics[metric.index()] = find(metric.column())?;
        }

        Ok(Self {
            sector: find(SECTOR_COLUMN)?,
            label: find(LABEL_COLUMN)?,
            timestamp: find(source.timestamp_column())?,
            metrics,
        })
    }
}

fn cell_at(row: &[Cell], index: usize) -> &Cell {
    // Short rows (trailing empty cells in a sheet) read as empty.
    row.get(index).unwrap_or(&Cell::Empty)
}

fn key_text(cell: &Cell) -> Option<String> {
    match cell {
        Cell::Text(s) if !s.is_empty() => Some(s.clone()),
        Cell::Number(n) => Some(n.to_string()),
        Cell::DateTime(dt) => Some(dt.to_string()),
        _ => None,
    }
}

fn metric_value(path: &str, row: usize, column: &str, cell: &Cell) -> Result<Option<f64>> {
    let value = match cell {
        Cell::Empty => None,
        Cell::Number(n) => Some(*n),
        Cell::Text(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.parse::<f64>().map_err(|_| {
                    DashError::cell(path, row, column, format!("not a number: '{trimmed}'"))
                })?)
            }
        }
        Cell::DateTime(dt) => {
            return Err(DashError::cell(
                path,
                row,
                column,
                format!("expected a number, found date {dt}"),
            ))
        }
        Cell::Invalid(e) => {
            return Err(DashError::cell(path, row, column, format!("invalid cell {e}")))
        }
    };
    match value {
        // NaN is a missing value, as in the upstream exports.
        Some(v) if v.is_nan() => Ok(None),
        Some(v) if v.is_infinite() => Err(DashError::cell(
            path,
            row,
            column,
            format!("not a finite number: {v}"),
        )),
        other => Ok(other),
    }
}

fn timestamp_value(path: &str, row: usize, column: &str, cell: &Cell) -> Result<NaiveDateTime> {
    match cell {
        Cell::DateTime(dt) => Ok(*dt),
        Cell::Text(s) => parse_timestamp(s).ok_or_else(|| {
            DashError::cell(path, row, column, format!("not a timestamp: '{}'", s.trim()))
        }),
        Cell::Number(n) => Err(DashError::cell(
            path,
            row,
            column,
            format!("expected a timestamp, found number {n}"),
        )),
        Cell::Empty => Err(DashError::cell(path, row, column, "empty timestamp")),
        Cell::Invalid(e) => Err(DashError::cell(path, row, column, format!("invalid cell {e}"))),
    }
}

/// Turn a raw table into campaign records.
///
/// Rows whose sector, label or timestamp cell is empty are dropped and
/// counted: they carry no grouping key. Any other malformed cell fails the
/// whole load.
pub fn build_table(path: &str, source: Source, raw: &RawTable) -> Result<CampaignTable> {
    let columns = ColumnMap::resolve(path, &raw.headers, source)?;
    let timestamp_column = source.timestamp_column();

    let mut records = Vec::with_capacity(raw.rows.len());
    let mut skipped_rows = 0;

    for (i, row) in raw.rows.iter().enumerate() {
        // 1-based data row, header excluded
        let row_no = i + 1;

        if row.iter().all(Cell::is_blank) {
            continue;
        }

        let timestamp_cell = cell_at(row, columns.timestamp);
        let (Some(sector), Some(label)) = (
            key_text(cell_at(row, columns.sector)),
            key_text(cell_at(row, columns.label)),
        ) else {
            skipped_rows += 1;
            continue;
        };
        if timestamp_cell.is_blank() {
            skipped_rows += 1;
            continue;
        }

        let timestamp = timestamp_value(path, row_no, timestamp_column, timestamp_cell)?;

        let mut metrics = Metrics::default();
        for metric in Metric::ALL {
            let cell = cell_at(row, columns.metrics[metric.index()]);
            metrics.set(metric, metric_value(path, row_no, metric.column(), cell)?);
        }

        records.push(CampaignRecord::new(sector, label, timestamp, metrics));
    }

    if skipped_rows > 0 {
        warn!(
            "{}: dropped {} {} rows with an empty sector, label or timestamp",
            path, skipped_rows, source
        );
    }

    Ok(CampaignTable {
        source,
        records,
        skipped_rows,
    })
}

/// Load one campaign log
#[instrument(skip_all, fields(source = %source, path = %path.as_ref().display()))]
pub fn load_table<P: AsRef<Path>>(path: P, source: Source) -> Result<CampaignTable> {
    let path = path.as_ref();
    debug!("Loading {} campaign log", source);

    let raw = read_raw(path)?;
    let table = build_table(&path.display().to_string(), source, &raw)?;

    info!(
        "Loaded {} {} records from {}",
        table.len(),
        source,
        path.display()
    );
    Ok(table)
}

/// Load the human-labeled campaign log (spreadsheet)
pub fn load_human<P: AsRef<Path>>(path: P) -> Result<CampaignTable> {
    load_table(path, Source::Human)
}

/// Load the ML prediction log (delimited text)
pub fn load_ml<P: AsRef<Path>>(path: P) -> Result<CampaignTable> {
    load_table(path, Source::Ml)
}
