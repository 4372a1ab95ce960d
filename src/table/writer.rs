use crate::table::{Cell, Table};
use crate::utils::{MineCleanerError, Result};
use csv::Writer;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Serializes a cleaned table as UTF-8 CSV. `Missing` cells become the
/// sentinel text here and nowhere else; every other cell is written
/// verbatim in its display form.
pub struct CsvTableWriter {
    path: PathBuf,
    headers: Vec<String>,
    missing_label: String,
    writer: Option<Writer<File>>,
    rows_written: usize,
}

impl CsvTableWriter {
    pub fn new(
        path: impl Into<PathBuf>,
        headers: Vec<String>,
        missing_label: impl Into<String>,
    ) -> Self {
        Self {
            path: path.into(),
            headers,
            missing_label: missing_label.into(),
            writer: None,
            rows_written: 0,
        }
    }

    pub fn initialize(&mut self) -> Result<()> {
        let file = File::create(&self.path)?;
        let mut writer = Writer::from_writer(file);
        writer.write_record(&self.headers)?;
        self.writer = Some(writer);
        Ok(())
    }

    pub fn write_row(&mut self, row: &[&Cell]) -> Result<()> {
        let writer = self.writer.as_mut().ok_or_else(|| {
            MineCleanerError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "Writer not initialized",
            ))
        })?;

        let rendered: Vec<String> = row
            .iter()
            .map(|cell| render_cell(cell, &self.missing_label))
            .collect();

        writer.write_record(&rendered)?;
        self.rows_written += 1;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize> {
        if let Some(writer) = self.writer.take() {
            drop(writer);
        }
        Ok(self.rows_written)
    }

    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Writes the whole table, header first, and returns the row count.
pub fn write_table(table: &Table, path: impl Into<PathBuf>, missing_label: &str) -> Result<usize> {
    let mut writer = CsvTableWriter::new(path, table.column_names(), missing_label);
    writer.initialize()?;
    for index in 0..table.n_rows() {
        if let Some(row) = table.row(index) {
            writer.write_row(&row)?;
        }
    }
    writer.flush()?;
    writer.finish()
}

fn render_cell(cell: &Cell, missing_label: &str) -> String {
    match cell {
        Cell::Text(value) => value.clone(),
        Cell::Integer(value) => value.to_string(),
        Cell::Float(value) => value.to_string(),
        Cell::Boolean(value) => value.to_string(),
        Cell::Missing => missing_label.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::{Column, ColumnType};

    fn sample_table() -> Table {
        Table::new(vec![
            Column::new(
                "id",
                ColumnType::Integer,
                vec![Cell::Integer(0), Cell::Integer(1)],
            ),
            Column::new(
                "name",
                ColumnType::Text,
                vec![Cell::Text("Acme".to_string()), Cell::Missing],
            ),
            Column::new(
                "active_status",
                ColumnType::Boolean,
                vec![Cell::Boolean(true), Cell::Boolean(false)],
            ),
        ])
        .unwrap()
    }

    #[test]
    fn writes_header_and_rendered_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");

        let rows = write_table(&sample_table(), &path, "N/A").unwrap();
        assert_eq!(rows, 2);

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content, "id,name,active_status\n0,Acme,true\n1,N/A,false\n");
    }

    #[test]
    fn write_row_requires_initialize() {
        let mut writer = CsvTableWriter::new("unused.csv", vec!["a".to_string()], "N/A");
        let cell = Cell::Integer(1);
        assert!(writer.write_row(&[&cell]).is_err());
    }

    #[test]
    fn renders_each_cell_kind() {
        assert_eq!(render_cell(&Cell::Text("x ".to_string()), "N/A"), "x ");
        assert_eq!(render_cell(&Cell::Integer(1970), "N/A"), "1970");
        assert_eq!(render_cell(&Cell::Float(12.5), "N/A"), "12.5");
        assert_eq!(render_cell(&Cell::Boolean(false), "N/A"), "false");
        assert_eq!(render_cell(&Cell::Missing, "N/A"), "N/A");
    }
}
