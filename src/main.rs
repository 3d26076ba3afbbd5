//! Tablefold CLI (demo only)
//! The main interface is the library; this prints a plan for a sample listing.

use tablefold::{PageGeometry, PaginationConfiguration, Planner, Table};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut table = Table::new(&["site", "subject", "event", "grade"])?;
    table.push_header(&["Site", "Subject", "Adverse Event", "Grade"])?;
    for (site, subject, event, grade) in [
        ("S01", "1001", "Headache", "1"),
        ("S01", "1001", "Nausea", "2"),
        ("S01", "1002", "Fatigue", "1"),
        ("S01", "1003", "Dizziness", "2"),
        ("S01", "1003", "Headache", "1"),
        ("S02", "2001", "Rash", "3"),
        ("S02", "2001", "Pruritus", "1"),
        ("S02", "2002", "Insomnia", "2"),
        ("S02", "2003", "Headache", "1"),
        ("S02", "2003", "Vomiting", "2"),
    ] {
        table.push_data(&[site, subject, event, grade])?;
    }
    table.push_footnote("Grades per CTCAE v5.0.")?;
    table.push_source("Source: ADAE 2026-06-30 snapshot.")?;

    let config = PaginationConfiguration {
        geometry: PageGeometry::portrait().with_rows_per_page(8),
        page_by: vec!["site".to_string()],
        new_page: true,
        group_by: vec!["subject".to_string()],
        ..PaginationConfiguration::default()
    };

    let plan = Planner::new(config).plan(&table)?;

    println!("{} data rows over {} pages", table.data_rows().len(), plan.page_count());
    for page in &plan.pages {
        println!(
            "  page {}: {} data rows, headers={}, footnote={}, source={}",
            page.number,
            page.rows.len(),
            page.shows_column_headers,
            page.shows_footnote,
            page.shows_source
        );
    }
    println!();
    println!("{}", serde_json::to_string_pretty(&plan.pages)?);

    Ok(())
}
