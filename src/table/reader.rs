use crate::table::{Cell, Column, ColumnType, Table};
use crate::utils::{MineCleanerError, Result};
use encoding_rs::WINDOWS_1252;
use std::path::Path;

/// Reads the source extract into a `Table`.
///
/// The file is decoded as windows-1252 before parsing; a missing file,
/// ragged row, or any IO fault comes back as an error for the caller to
/// report. Fields that are empty or equal to `missing_label` load as
/// `Cell::Missing`.
pub fn read_table(path: impl AsRef<Path>, missing_label: &str) -> Result<Table> {
    let path = path.as_ref();
    if !file_exists(path) {
        return Err(MineCleanerError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)?;
    let (text, _, _) = WINDOWS_1252.decode(&bytes);

    let mut reader = csv::Reader::from_reader(text.as_bytes());
    let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

    let mut fields: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for result in reader.records() {
        let record = result?;
        for (index, field) in record.iter().enumerate() {
            fields[index].push(field.to_string());
        }
    }

    let columns = headers
        .into_iter()
        .zip(fields)
        .map(|(name, raw)| build_column(name, raw, missing_label))
        .collect();
    Table::new(columns)
}

/// Detects the column's dominant type from its raw fields, then parses the
/// cells. Only fully-numeric columns get numeric cells; a column holding
/// both years and markers like "open" stays text so its values round-trip
/// unchanged.
fn build_column(name: String, raw: Vec<String>, missing_label: &str) -> Column {
    let candidates: Vec<Option<ColumnType>> = raw
        .iter()
        .map(|field| candidate_type(field, missing_label))
        .collect();
    let kind = ColumnType::detect(&candidates);
    let cells = raw
        .into_iter()
        .map(|field| parse_cell(field, kind, missing_label))
        .collect();
    Column::new(name, kind, cells)
}

fn candidate_type(field: &str, missing_label: &str) -> Option<ColumnType> {
    if field.is_empty() || field == missing_label {
        return None;
    }
    let trimmed = field.trim();
    if trimmed.parse::<i64>().is_ok() {
        Some(ColumnType::Integer)
    } else if trimmed.parse::<f64>().is_ok() {
        Some(ColumnType::Float)
    } else {
        Some(ColumnType::Text)
    }
}

fn parse_cell(field: String, kind: ColumnType, missing_label: &str) -> Cell {
    if field.is_empty() || field == missing_label {
        return Cell::Missing;
    }
    match kind {
        ColumnType::Integer => match field.trim().parse::<i64>() {
            Ok(value) => Cell::Integer(value),
            Err(_) => Cell::Text(field),
        },
        ColumnType::Float => match field.trim().parse::<f64>() {
            Ok(value) => Cell::Float(value),
            Err(_) => Cell::Text(field),
        },
        ColumnType::Text | ColumnType::Boolean => Cell::Text(field),
    }
}

pub fn get_file_size(path: impl AsRef<Path>) -> Result<u64> {
    let metadata = std::fs::metadata(path)?;
    Ok(metadata.len())
}

pub fn file_exists(path: impl AsRef<Path>) -> bool {
    path.as_ref().exists()
}
