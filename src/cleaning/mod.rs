pub mod companies;
pub mod fixes;

pub use companies::clean_company_name;
pub use fixes::{manual_fixes, ManualFix};

use crate::table::{Cell, Column, ColumnType, Table};
use crate::utils::{CleaningOptions, Result};

/// Columns the downstream analysis never reads; their absence is a breach
/// of the upstream file contract and therefore an error.
pub const DROPPED_COLUMNS: [&str; 8] = [
    "commodityall",
    "information",
    "source1",
    "source2",
    "source3",
    "link1",
    "link2",
    "link3",
];

pub const COMPANY_COLUMNS: [&str; 6] = [
    "company1", "company2", "company3", "company4", "company5", "company6",
];

const CLOSE_COLUMNS: [&str; 3] = ["close1", "close2", "close3"];

/// Marker the source uses in close-year fields for a still-operating mine.
const OPEN_MARKER: &str = "open";

/// Applies the cleaning sequence to a loaded table. The step order is
/// load-bearing: ids are assigned before anything can drop or reorder rows,
/// `active_status` is derived from the original "open" markers before they
/// are rewritten, and the manual fixes run last so no normalization can
/// undo them.
pub fn clean_table(mut table: Table, options: &CleaningOptions) -> Result<Table> {
    drop_unused_columns(&mut table)?;
    assign_ids(&mut table)?;
    derive_active_status(&mut table)?;
    rewrite_open_markers(&mut table, &options.most_recent_year)?;
    normalize_provinces(&mut table)?;
    trim_text_columns(&mut table);
    clean_company_columns(&mut table, options)?;
    apply_manual_fixes(&mut table, &manual_fixes(options))?;

    tracing::debug!(
        rows = table.n_rows(),
        columns = table.n_columns(),
        "Cleaning sequence complete"
    );
    Ok(table)
}

fn drop_unused_columns(table: &mut Table) -> Result<()> {
    for name in DROPPED_COLUMNS {
        table.drop_column(name)?;
    }
    Ok(())
}

fn assign_ids(table: &mut Table) -> Result<()> {
    let ids = (0..table.n_rows())
        .map(|row| Cell::Integer(row as i64))
        .collect();
    table.insert_column(0, Column::new("id", ColumnType::Integer, ids))
}

fn derive_active_status(table: &mut Table) -> Result<()> {
    let mut active = vec![false; table.n_rows()];
    for name in CLOSE_COLUMNS {
        let column = table.require_column(name)?;
        for (row, cell) in column.cells.iter().enumerate() {
            if is_open_marker(cell) {
                active[row] = true;
            }
        }
    }

    let cells = active.into_iter().map(Cell::Boolean).collect();
    table.push_column(Column::new("active_status", ColumnType::Boolean, cells))
}

fn is_open_marker(cell: &Cell) -> bool {
    cell.as_text() == Some(OPEN_MARKER)
}

fn rewrite_open_markers(table: &mut Table, most_recent_year: &str) -> Result<()> {
    for name in CLOSE_COLUMNS {
        let column = table.require_column_mut(name)?;
        for cell in &mut column.cells {
            if is_open_marker(cell) {
                *cell = Cell::Text(most_recent_year.to_string());
            }
        }
    }
    Ok(())
}

fn normalize_provinces(table: &mut Table) -> Result<()> {
    let column = table.require_column_mut("province")?;
    for cell in &mut column.cells {
        if let Cell::Text(value) = cell {
            if value.contains('-') {
                *value = value.replace('-', " ");
            }
        }
    }
    Ok(())
}

/// Trims text cells in text-dominant columns only; the type test is
/// per-column, so a stray text cell in a numeric column is left alone.
fn trim_text_columns(table: &mut Table) {
    for column in table.columns_mut() {
        if column.kind != ColumnType::Text {
            continue;
        }
        for cell in &mut column.cells {
            if let Cell::Text(value) = cell {
                let trimmed = value.trim();
                if trimmed.len() != value.len() {
                    *value = trimmed.to_string();
                }
            }
        }
    }
}

fn clean_company_columns(table: &mut Table, options: &CleaningOptions) -> Result<()> {
    for name in COMPANY_COLUMNS {
        let column = table.require_column_mut(name)?;
        for cell in &mut column.cells {
            if let Cell::Text(value) = cell {
                *value = clean_company_name(value, &options.missing_label);
            }
        }
    }
    Ok(())
}

fn apply_manual_fixes(table: &mut Table, fixes: &[ManualFix]) -> Result<()> {
    for fix in fixes {
        table.set_cell(fix.row, fix.column, fix.value.clone())?;
    }
    Ok(())
}
