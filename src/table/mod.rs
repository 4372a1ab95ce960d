pub mod analyzer;
pub mod reader;
pub mod writer;

pub use analyzer::{summarize, TableSummary};
pub use reader::{file_exists, get_file_size, read_table};
pub use writer::{write_table, CsvTableWriter};

use crate::utils::{MineCleanerError, Result};

/// A single value in a table. `Missing` is the in-memory form of an empty
/// cell; it only becomes the sentinel text when the table is written out.
#[derive(Clone, Debug, PartialEq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Missing,
}

impl Cell {
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Dominant data types a column can take.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ColumnType {
    /// Variable-length strings
    Text,
    /// 64-bit signed integers
    Integer,
    /// Double-precision floating point numbers
    Float,
    /// Boolean values (true/false)
    Boolean,
}

impl ColumnType {
    /// Folds per-cell candidate types into the column's dominant type.
    /// Falls back to `Text` when cells disagree or the column is all missing.
    pub fn detect(candidates: &[Option<ColumnType>]) -> ColumnType {
        let present: Vec<ColumnType> = candidates.iter().filter_map(|it| *it).collect();
        if present.is_empty() {
            ColumnType::Text
        } else if present.iter().all(|kind| *kind == ColumnType::Boolean) {
            ColumnType::Boolean
        } else if present.iter().all(|kind| kind.is_integer()) {
            ColumnType::Integer
        } else if present.iter().all(|kind| kind.is_numeric()) {
            ColumnType::Float
        } else {
            ColumnType::Text
        }
    }

    #[inline]
    pub fn is_integer(&self) -> bool {
        matches!(self, ColumnType::Integer)
    }

    /// Integer or floating point.
    #[inline]
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Integer | ColumnType::Float)
    }
}

/// A named column with a dominant type and one cell per row.
#[derive(Clone, Debug)]
pub struct Column {
    pub name: String,
    pub kind: ColumnType,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnType, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            kind,
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Named columns of equal length; the 0-based row index is implicit in
/// cell position.
#[derive(Clone, Debug, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        let table = Self { columns };
        table.check_lengths()?;
        Ok(table)
    }

    fn check_lengths(&self) -> Result<()> {
        let expected = self.n_rows();
        for column in &self.columns {
            if column.len() != expected {
                return Err(MineCleanerError::LengthMismatch {
                    expected,
                    got: column.len(),
                });
            }
        }
        Ok(())
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map(Column::len).unwrap_or(0)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [Column] {
        &mut self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| MineCleanerError::MissingColumn(name.to_string()))
    }

    pub fn require_column_mut(&mut self, name: &str) -> Result<&mut Column> {
        self.column_mut(name)
            .ok_or_else(|| MineCleanerError::MissingColumn(name.to_string()))
    }

    pub fn drop_column(&mut self, name: &str) -> Result<Column> {
        let index = self
            .columns
            .iter()
            .position(|c| c.name == name)
            .ok_or_else(|| MineCleanerError::MissingColumn(name.to_string()))?;
        Ok(self.columns.remove(index))
    }

    pub fn insert_column(&mut self, index: usize, column: Column) -> Result<()> {
        if !self.columns.is_empty() && column.len() != self.n_rows() {
            return Err(MineCleanerError::LengthMismatch {
                expected: self.n_rows(),
                got: column.len(),
            });
        }
        self.columns.insert(index, column);
        Ok(())
    }

    pub fn push_column(&mut self, column: Column) -> Result<()> {
        let index = self.n_columns();
        self.insert_column(index, column)
    }

    /// Overwrites one cell by row position, regardless of its current value.
    pub fn set_cell(&mut self, row: usize, name: &str, value: Cell) -> Result<()> {
        let rows = self.n_rows();
        let column = self.require_column_mut(name)?;
        if row >= rows {
            return Err(MineCleanerError::RowOutOfRange { row, rows });
        }
        column.cells[row] = value;
        Ok(())
    }

    pub fn row(&self, index: usize) -> Option<Vec<&Cell>> {
        if index >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.cells[index]).collect())
    }
}
