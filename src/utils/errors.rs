use thiserror::Error;

#[derive(Error, Debug)]
pub enum MineCleanerError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Column not found: {0}")]
    MissingColumn(String),

    #[error("Row {row} out of range: table has {rows} rows")]
    RowOutOfRange { row: usize, rows: usize },

    #[error("Column length mismatch: expected {expected}, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, MineCleanerError>;
