//! Tablefold: a pagination and layout engine for tabular report documents
//!
//! This crate turns pre-formatted tables into an annotated page model with:
//! - Capacity-driven and group-forced page breaks
//! - Group value suppression with page-boundary restoration
//! - Fixture placement (column headers, footnotes, sources) per page
//! - Border overrides at the document's outer edges
//!
//! Rendering to concrete markup is out of scope; the output is a page
//! model a downstream renderer consumes.

pub mod assemble;
pub mod config;
pub mod error;
pub mod grouping;
pub mod layout;
pub mod table;

// Re-export primary types
pub use assemble::{BorderEdge, BorderOverride, BorderTarget, Page, PaginationPlan};
pub use config::{
    BodyBorders, FixturePlacement, Orientation, PageBorders, PageGeometry, PagePlacement,
    PaginationConfiguration,
};
pub use error::{LayoutError, Result};
pub use layout::{
    BreakDecision, BreakPlan, BreakState, BreakStrategy, CharWidthMetrics, FixedRowMetrics,
    PageBreak, PageBreakCalculator, RowMetrics,
};
pub use table::{
    BorderStyle, Broadcast, Justification, RowKind, RowMetadata, RowSlice, SublineHeader, Table,
};

/// The planning pipeline combining all components.
///
/// Validation runs first, so configuration errors surface before any row
/// is measured. The remaining passes run in a fixed order: measure and
/// break, suppress, restore page context, assemble.
pub struct Planner<M: RowMetrics = FixedRowMetrics> {
    config: PaginationConfiguration,
    metrics: M,
}

impl Planner<FixedRowMetrics> {
    /// Create a planner where every row is one visual row
    pub fn new(config: PaginationConfiguration) -> Self {
        Self {
            config,
            metrics: FixedRowMetrics,
        }
    }
}

impl<M: RowMetrics> Planner<M> {
    /// Create a planner with a custom metrics oracle
    pub fn with_metrics(config: PaginationConfiguration, metrics: M) -> Self {
        Self { config, metrics }
    }

    /// Get the configuration
    pub fn config(&self) -> &PaginationConfiguration {
        &self.config
    }

    /// Whether the table needs more than one page under this configuration.
    /// True when a forced-break grouping is active or the total visual
    /// rows exceed the page capacity.
    pub fn needs_pagination(&self, table: &Table) -> Result<bool> {
        if (!self.config.page_by.is_empty() && self.config.new_page)
            || !self.config.subline_by.is_empty()
        {
            return Ok(true);
        }

        let mut total = 0;
        for index in 0..table.n_rows() {
            total += self.metrics.rendered_height(table.row(index))?;
        }
        Ok(total > self.config.geometry.rows_per_page)
    }

    /// Plan the full page model for a table
    pub fn plan(&self, table: &Table) -> Result<PaginationPlan> {
        self.config.validate(table)?;

        let strategy = BreakStrategy::select(&self.config, table)?;
        let calculator = PageBreakCalculator::new(&self.config);
        let break_plan = calculator.calculate(table, &strategy, &self.metrics)?;

        let mut rows: Vec<RowMetadata> = (0..table.n_rows())
            .map(|index| {
                let mut meta = RowMetadata::new(index, table.kind(index));
                meta.rendered_height = break_plan.heights[index];
                meta
            })
            .collect();

        // Suppression covers page_by then group_by, outermost first
        let mut suppress_columns = self.config.page_by_columns(table)?;
        suppress_columns.extend(self.config.group_by_columns(table)?);
        grouping::apply_suppression(table, &mut rows, &suppress_columns);

        // Any grouping boundary starts a group
        let mut start_columns = suppress_columns.clone();
        start_columns.extend(self.config.subline_by_columns(table)?);
        grouping::mark_group_starts(table, &mut rows, &start_columns);

        let page_starts: Vec<usize> = break_plan.breaks.iter().map(|b| b.start_row).collect();
        grouping::restore_page_context(table, &mut rows, &suppress_columns, &page_starts);

        Ok(assemble::assemble(
            table,
            &self.config,
            &strategy,
            &break_plan.breaks,
            rows,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_table(n_data: usize, with_header: bool) -> Table {
        let mut table = Table::new(&["subject", "value"]).unwrap();
        if with_header {
            table.push_header(&["Subject", "Value"]).unwrap();
        }
        for i in 0..n_data {
            table
                .push_data(&[&format!("{:03}", i), &i.to_string()])
                .unwrap();
        }
        table
    }

    fn rows_config(rows_per_page: usize) -> PaginationConfiguration {
        PaginationConfiguration {
            geometry: PageGeometry::portrait().with_rows_per_page(rows_per_page),
            ..PaginationConfiguration::default()
        }
    }

    #[test]
    fn test_six_rows_with_header_at_two_per_page() {
        // One header row on a 2-row page leaves one data row per page
        let table = listing_table(6, true);
        let plan = Planner::new(rows_config(2)).plan(&table).unwrap();
        assert_eq!(plan.page_count(), 6);
        assert!(plan.pages.iter().all(|p| p.rows.len() == 1));
    }

    #[test]
    fn test_six_rows_without_header_at_two_per_page() {
        let table = listing_table(6, false);
        let plan = Planner::new(rows_config(2)).plan(&table).unwrap();
        assert_eq!(plan.page_count(), 3);
        assert!(plan.pages.iter().all(|p| p.rows.len() == 2));
    }

    #[test]
    fn test_single_page_when_everything_fits() {
        let table = listing_table(6, true);
        let plan = Planner::new(rows_config(40)).plan(&table).unwrap();
        assert_eq!(plan.page_count(), 1);
        assert_eq!(plan.pages[0].rows.len(), 6);
    }

    #[test]
    fn test_page_by_new_page_splits_groups() {
        let mut table = Table::new(&["arm", "subject"]).unwrap();
        for (arm, subject) in [
            ("A", "001"),
            ("A", "002"),
            ("B", "003"),
            ("B", "004"),
            ("B", "005"),
        ] {
            table.push_data(&[arm, subject]).unwrap();
        }

        let config = PaginationConfiguration {
            page_by: vec!["arm".to_string()],
            new_page: true,
            ..rows_config(10)
        };
        let plan = Planner::new(config).plan(&table).unwrap();

        assert_eq!(plan.page_count(), 2);
        assert_eq!(plan.pages[0].rows.len(), 2);
        assert_eq!(plan.pages[1].rows.len(), 3);
        // No page mixes two arms
        for page in &plan.pages {
            let arms: Vec<&str> = page
                .rows
                .iter()
                .map(|r| table.cell(r.row_index, 0))
                .collect();
            assert!(arms.windows(2).all(|w| w[0] == w[1]));
        }
    }

    #[test]
    fn test_group_value_restored_on_page_break() {
        let mut table = Table::new(&["site", "subject"]).unwrap();
        table.push_data(&["S01", "001"]).unwrap();
        table.push_data(&["S01", "002"]).unwrap();
        table.push_data(&["S01", "003"]).unwrap();

        let config = PaginationConfiguration {
            group_by: vec!["site".to_string()],
            ..rows_config(2)
        };
        let plan = Planner::new(config).plan(&table).unwrap();
        assert_eq!(plan.page_count(), 2);

        // Repeats are blanked inside a page
        assert!(!plan.rows[0].is_suppressed(0));
        assert!(plan.rows[1].is_suppressed(0));
        // The page break inside the group re-shows the value
        assert!(plan.rows[2].is_page_start);
        assert!(!plan.rows[2].is_suppressed(0));
    }

    #[test]
    fn test_custom_metrics_drive_breaks() {
        struct DoubleHeight;
        impl RowMetrics for DoubleHeight {
            fn rendered_height(&self, row: RowSlice<'_>) -> Result<usize> {
                Ok(if row.kind.is_data() { 2 } else { 1 })
            }
        }

        let table = listing_table(4, false);
        let plan = Planner::with_metrics(rows_config(4), DoubleHeight)
            .plan(&table)
            .unwrap();
        assert_eq!(plan.page_count(), 2);
        assert!(plan.rows.iter().all(|r| r.rendered_height == 2));
    }

    #[test]
    fn test_unsorted_data_rejected() {
        let mut table = Table::new(&["arm", "subject"]).unwrap();
        table.push_data(&["B", "001"]).unwrap();
        table.push_data(&["A", "002"]).unwrap();

        let config = PaginationConfiguration {
            page_by: vec!["arm".to_string()],
            ..rows_config(10)
        };
        let err = Planner::new(config).plan(&table).unwrap_err();
        assert!(err.to_string().contains("not sorted"));
    }

    #[test]
    fn test_needs_pagination() {
        let table = listing_table(6, true);
        let planner = Planner::new(rows_config(10));
        assert!(!planner.needs_pagination(&table).unwrap());

        let planner = Planner::new(rows_config(5));
        assert!(planner.needs_pagination(&table).unwrap());

        // Forced grouping always paginates, capacity aside
        let config = PaginationConfiguration {
            subline_by: vec!["subject".to_string()],
            ..rows_config(100)
        };
        assert!(Planner::new(config).needs_pagination(&table).unwrap());
    }

    #[test]
    fn test_planning_is_deterministic() {
        let table = listing_table(9, true);
        let planner = Planner::new(rows_config(4));
        let first = planner.plan(&table).unwrap();
        let second = planner.plan(&table).unwrap();
        assert_eq!(first.rows, second.rows);
        assert_eq!(first.pages, second.pages);
    }

    #[test]
    fn test_empty_table_plans_no_pages() {
        let table = Table::new(&["a"]).unwrap();
        let plan = Planner::new(rows_config(10)).plan(&table).unwrap();
        assert_eq!(plan.page_count(), 0);
        assert!(plan.rows.is_empty());
    }
}
