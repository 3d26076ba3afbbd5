//! Group value suppression and page context restoration

use crate::error::{LayoutError, Result};
use crate::table::{RowMetadata, Table};
use log::warn;
use rustc_hash::FxHashSet;
use std::cmp::Ordering;

/// Placeholder meaning "no value" in a grouping column
pub const DIVIDER: &str = "-----";

/// Check whether a grouping value is the divider placeholder
pub fn is_divider(value: &str) -> bool {
    value == DIVIDER
}

/// Validate that no column appears in more than one grouping parameter.
pub fn validate_no_overlap(
    page_by: &[String],
    group_by: &[String],
    subline_by: &[String],
) -> Result<()> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut overlapping: Vec<&str> = Vec::new();

    for name in page_by.iter().chain(group_by).chain(subline_by) {
        if !seen.insert(name.as_str()) {
            overlapping.push(name.as_str());
        }
    }

    if !overlapping.is_empty() {
        return Err(LayoutError::config(format!(
            "overlapping variables found between grouping parameters: [{}]",
            overlapping.join(", ")
        )));
    }
    Ok(())
}

/// Validate that data rows arrive sorted by the grouping columns.
/// Sorting is the caller's job; the planner only verifies.
pub fn validate_sorted(table: &Table, ordered_columns: &[usize]) -> Result<()> {
    if ordered_columns.is_empty() {
        return Ok(());
    }

    let data = table.data_rows();
    for pair in data.windows(2) {
        if compare_rows(table, ordered_columns, pair[0], pair[1]) == Ordering::Greater {
            let names: Vec<&str> = ordered_columns
                .iter()
                .map(|&col| table.column_names()[col].as_str())
                .collect();
            return Err(LayoutError::config(format!(
                "data is not sorted by the grouping variables: [{}]",
                names.join(", ")
            )));
        }
    }
    Ok(())
}

/// Compare two rows over the given columns, outermost first
fn compare_rows(table: &Table, columns: &[usize], a: usize, b: usize) -> Ordering {
    for &col in columns {
        match table.cell(a, col).cmp(table.cell(b, col)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

/// Blank repeated group values after their first appearance.
///
/// Columns are ordered outermost to innermost. A row shows its value in
/// a column when it is the first data row, when any outer column changed
/// at this row, or when its own value changed. Divider cells are always
/// blanked.
pub fn apply_suppression(table: &Table, meta: &mut [RowMetadata], columns: &[usize]) {
    if columns.is_empty() {
        return;
    }

    let data = table.data_rows();
    let mut warned: FxHashSet<usize> = FxHashSet::default();

    for (pos, &row) in data.iter().enumerate() {
        let prev = if pos > 0 { Some(data[pos - 1]) } else { None };
        let mut outer_changed = false;

        for &col in columns {
            let cell = table.cell(row, col);
            let own_changed = match prev {
                None => true,
                Some(prev_row) => table.cell(prev_row, col) != cell,
            };

            let divider = is_divider(cell);
            if divider && warned.insert(col) {
                warn!(
                    "grouping column `{}` contains divider placeholder values",
                    table.column_names()[col]
                );
            }

            if divider || !(outer_changed || own_changed) {
                meta[row].suppressed_columns.insert(col);
            }
            outer_changed = outer_changed || own_changed;
        }
    }
}

/// Mark the first row of each group.
/// A divider value never opens a group.
pub fn mark_group_starts(table: &Table, meta: &mut [RowMetadata], columns: &[usize]) {
    if columns.is_empty() {
        return;
    }

    let data = table.data_rows();
    for (pos, &row) in data.iter().enumerate() {
        let start = match pos {
            0 => true,
            _ => {
                let prev_row = data[pos - 1];
                columns.iter().any(|&col| {
                    let cell = table.cell(row, col);
                    table.cell(prev_row, col) != cell && !is_divider(cell)
                })
            }
        };
        meta[row].is_group_start = start;
    }
}

/// Restore suppressed group values on page-start rows.
/// Only removes suppression; divider cells stay blank.
pub fn restore_page_context(
    table: &Table,
    meta: &mut [RowMetadata],
    columns: &[usize],
    page_start_rows: &[usize],
) {
    for &row in page_start_rows {
        for &col in columns {
            if is_divider(table.cell(row, col)) {
                continue;
            }
            meta[row].suppressed_columns.remove(&col);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped_table() -> Table {
        let mut table = Table::new(&["site", "subject", "value"]).unwrap();
        table.push_data(&["S01", "001", "1.2"]).unwrap();
        table.push_data(&["S01", "001", "3.4"]).unwrap();
        table.push_data(&["S01", "002", "5.6"]).unwrap();
        table.push_data(&["S02", "002", "7.8"]).unwrap();
        table
    }

    fn metadata_for(table: &Table) -> Vec<RowMetadata> {
        (0..table.n_rows())
            .map(|index| RowMetadata::new(index, table.kind(index)))
            .collect()
    }

    #[test]
    fn test_hierarchical_suppression() {
        let table = grouped_table();
        let mut meta = metadata_for(&table);
        apply_suppression(&table, &mut meta, &[0, 1]);

        // First row shows everything
        assert!(meta[0].suppressed_columns.is_empty());
        // Repeated site and subject are blanked
        assert!(meta[1].is_suppressed(0));
        assert!(meta[1].is_suppressed(1));
        // Subject change re-shows subject but not site
        assert!(meta[2].is_suppressed(0));
        assert!(!meta[2].is_suppressed(1));
        // Site change re-shows subject too, even though "002" repeats
        assert!(!meta[3].is_suppressed(0));
        assert!(!meta[3].is_suppressed(1));
    }

    #[test]
    fn test_divider_always_blanked() {
        let mut table = Table::new(&["group", "value"]).unwrap();
        table.push_data(&["-----", "1"]).unwrap();
        table.push_data(&["A", "2"]).unwrap();

        let mut meta = metadata_for(&table);
        apply_suppression(&table, &mut meta, &[0]);

        assert!(meta[0].is_suppressed(0));
        assert!(!meta[1].is_suppressed(0));
    }

    #[test]
    fn test_group_starts() {
        let table = grouped_table();
        let mut meta = metadata_for(&table);
        mark_group_starts(&table, &mut meta, &[0]);

        assert!(meta[0].is_group_start);
        assert!(!meta[1].is_group_start);
        assert!(!meta[2].is_group_start);
        assert!(meta[3].is_group_start);
    }

    #[test]
    fn test_restore_page_context() {
        let table = grouped_table();
        let mut meta = metadata_for(&table);
        apply_suppression(&table, &mut meta, &[0, 1]);
        assert!(meta[1].is_suppressed(0));

        restore_page_context(&table, &mut meta, &[0, 1], &[1]);
        assert!(!meta[1].is_suppressed(0));
        assert!(!meta[1].is_suppressed(1));
        // Other rows untouched
        assert!(meta[2].is_suppressed(0));
    }

    #[test]
    fn test_validate_sorted() {
        let table = grouped_table();
        assert!(validate_sorted(&table, &[0, 1]).is_ok());

        let mut unsorted = Table::new(&["site", "value"]).unwrap();
        unsorted.push_data(&["S02", "1"]).unwrap();
        unsorted.push_data(&["S01", "2"]).unwrap();
        let err = validate_sorted(&unsorted, &[0]).unwrap_err();
        assert!(err.to_string().contains("not sorted"));
    }

    #[test]
    fn test_validate_no_overlap() {
        let page_by = vec!["site".to_string()];
        let group_by = vec!["subject".to_string()];
        assert!(validate_no_overlap(&page_by, &group_by, &[]).is_ok());

        let clashing = vec!["site".to_string()];
        let err = validate_no_overlap(&page_by, &clashing, &[]).unwrap_err();
        assert!(err.to_string().contains("overlapping"));
    }
}
