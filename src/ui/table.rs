use tabled::{builder::Builder, settings::Style, Table, Tabled};
use crate::ingest::{LoadOutcome, LoadReport};
use crate::query::ResultSet;

#[derive(Tabled)]
pub struct LoadRow {
    #[tabled(rename = "Table")]
    pub table: String,
    #[tabled(rename = "Source")]
    pub source: String,
    #[tabled(rename = "Result")]
    pub result: String,
}

/// Render a result set with its column names as the header row
pub fn result_table(rs: &ResultSet) -> String {
    let mut builder = Builder::default();
    builder.push_record(rs.columns.iter().cloned());
    for row in rs.display_rows() {
        builder.push_record(row);
    }
    builder.build().with(Style::rounded()).to_string()
}

pub fn load_report_table(report: &LoadReport) -> String {
    let rows: Vec<LoadRow> = report
        .tables
        .iter()
        .map(|t| LoadRow {
            table: t.table.to_string(),
            source: t
                .source
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "-".to_string()),
            result: match &t.outcome {
                LoadOutcome::Loaded { rows } => format!("{} rows", rows),
                LoadOutcome::Failed { .. } => "failed".to_string(),
                LoadOutcome::Skipped => "skipped".to_string(),
            },
        })
        .collect();

    Table::new(&rows).with(Style::rounded()).to_string()
}
