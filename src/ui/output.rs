use crate::dashboard::{Panel, PanelBody, TabView};
use crate::ingest::{LoadOutcome, LoadReport};
use crate::model::Table;
use crate::storage::DbStats;
use crate::ui::{table, theme, Icons};
use owo_colors::OwoColorize;

pub fn header(text: &str) {
    println!("{} {}", Icons::ROCKET, text.style(theme().header.clone()));
}

pub fn banner(title: &str, subtitle: &str) {
    println!();
    println!("{}", title.style(theme().header.clone()));
    println!("{}", subtitle.style(theme().dim.clone()));
}

pub fn success(label: &str) {
    println!("{} {}", Icons::CHECK, label.style(theme().success.clone()));
}

pub fn warn(label: &str) {
    eprintln!("{} {}", Icons::WARN, label.style(theme().warn.clone()));
}

pub fn section(title: &str) {
    println!();
    println!("━{}━", title.style(theme().header.clone()));
}

pub fn summary_row(label: &str, value: &str) {
    println!("  {} {}", label.style(theme().dim.clone()), value);
}

pub fn no_data(message: &str) {
    println!("  {} {}", Icons::EMPTY, message.style(theme().muted.clone()));
}

/// The four summary tiles, one coloured line each
pub fn tiles(counts: &DbStats) {
    for &t in Table::all() {
        let value = counts.get(t).map_or_else(|| "No Data".to_string(), |n| n.to_string());
        println!(
            "  {} {:<14} {}",
            Icons::for_table(t),
            t.label().style(theme().tile(t)),
            value.bold()
        );
    }
}

pub fn panel(panel: &Panel) {
    section(panel.title);
    match &panel.body {
        PanelBody::Tiles(counts) => tiles(counts),
        PanelBody::Table(rs) if rs.is_empty() => no_data("No Data"),
        PanelBody::Table(rs) => println!("{}", table::result_table(rs)),
        PanelBody::NoData { message } => no_data(message),
    }
}

pub fn tab(view: &TabView) {
    header(view.title);
    for p in &view.panels {
        panel(p);
    }
    println!();
}

pub fn load_report(report: &LoadReport) {
    if report.tables.is_empty() {
        summary_row("Sources:", "none configured, using persisted tables");
        return;
    }
    println!("{}", table::load_report_table(report));
    for failed in report.failures() {
        if let LoadOutcome::Failed { reason } = &failed.outcome {
            warn(&format!("{}: {}", failed.table, reason));
        }
    }
}
