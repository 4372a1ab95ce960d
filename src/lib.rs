pub mod cleaning;
pub mod table;
pub mod utils;

pub use cleaning::{clean_company_name, clean_table, manual_fixes, ManualFix};
pub use table::{
    read_table, summarize, write_table, Cell, Column, ColumnType, CsvTableWriter, Table,
    TableSummary,
};
pub use utils::{AppConfig, CleaningOptions, MineCleanerError, Result};
