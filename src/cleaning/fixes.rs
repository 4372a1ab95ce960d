use crate::table::Cell;
use crate::utils::CleaningOptions;

/// One hardcoded correction for a known bad source record, applied by
/// absolute 0-based row position after every other cleaning step.
#[derive(Debug, Clone)]
pub struct ManualFix {
    pub row: usize,
    pub column: &'static str,
    pub value: Cell,
}

/// Corrections for defects in the March 2024 extract. Row positions assume
/// source order; any upstream reordering invalidates them.
pub fn manual_fixes(options: &CleaningOptions) -> Vec<ManualFix> {
    vec![
        ManualFix {
            row: 596,
            column: "commodity3",
            value: Cell::Text("Beryllium".to_string()),
        },
        ManualFix {
            row: 204,
            column: "open3",
            value: Cell::Missing,
        },
        ManualFix {
            row: 335,
            column: "close1",
            value: Cell::Integer(1970),
        },
        ManualFix {
            row: 291,
            column: "close2",
            value: Cell::Text(options.most_recent_year.clone()),
        },
        ManualFix {
            row: 724,
            column: "close2",
            value: Cell::Missing,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_table_carries_the_known_corrections() {
        let options = CleaningOptions {
            most_recent_year: "2022".to_string(),
            missing_label: "N/A".to_string(),
        };
        let fixes = manual_fixes(&options);
        assert_eq!(fixes.len(), 5);

        let beryllium = &fixes[0];
        assert_eq!((beryllium.row, beryllium.column), (596, "commodity3"));
        assert_eq!(beryllium.value, Cell::Text("Beryllium".to_string()));

        let close2 = fixes
            .iter()
            .find(|fix| fix.row == 291)
            .expect("row 291 fix");
        assert_eq!(close2.value, Cell::Text("2022".to_string()));

        assert!(fixes.iter().any(|fix| fix.row == 724 && fix.value.is_missing()));
    }
}
