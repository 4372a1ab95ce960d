use crate::table::reader::get_file_size;
use crate::table::Table;
use crate::utils::Result;
use std::path::Path;

#[derive(Debug, Clone)]
pub struct TableSummary {
    pub total_rows: usize,
    pub total_columns: usize,
    pub column_names: Vec<String>,
    pub file_size_bytes: u64,
}

/// Shape report for a loaded table, logged after a successful read.
pub fn summarize(table: &Table, source_path: impl AsRef<Path>) -> Result<TableSummary> {
    Ok(TableSummary {
        total_rows: table.n_rows(),
        total_columns: table.n_columns(),
        column_names: table.column_names(),
        file_size_bytes: get_file_size(source_path)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reports_table_shape_and_file_size() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let content = b"a,b\n1,2\n3,4\n";
        file.write_all(content).unwrap();
        file.flush().unwrap();

        let table = crate::table::read_table(file.path(), "N/A").unwrap();
        let summary = summarize(&table, file.path()).unwrap();

        assert_eq!(summary.total_rows, 2);
        assert_eq!(summary.total_columns, 2);
        assert_eq!(summary.column_names, vec!["a", "b"]);
        assert_eq!(summary.file_size_bytes, content.len() as u64);
    }
}
