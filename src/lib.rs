//! # Fooddash - Food Waste Management Dashboard
//!
//! Reporting over four related datasets: food providers, receivers,
//! food listings and claims.
//!
//! Fooddash provides:
//! - Typed rows for the four tables and the closed claim status enumeration
//! - SQLite-backed storage with replace-on-load tables
//! - CSV ingest with a per-table load report
//! - A fixed catalog of aggregate queries answering the dashboard questions
//! - Dashboard tabs and panels rendered by the CLI and the HTTP API

pub mod model;
pub mod storage;
pub mod ingest;
pub mod query;
pub mod dashboard;
pub mod session;
pub mod server;
pub mod config;
pub mod ui;

// Re-exports for convenient access
pub use model::{Claim, ClaimStatus, FoodListing, Provider, Receiver, Table};
pub use storage::SqliteStore;
pub use query::QueryCatalog;
pub use session::Session;

/// Result type alias for Fooddash operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Fooddash operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing columns in {table}: {}", .columns.join(", "))]
    MissingColumns { table: Table, columns: Vec<String> },

    #[error("Invalid row in {table}: {reason}")]
    InvalidRow { table: Table, reason: String },

    #[error("Unknown claim status: {0}")]
    InvalidStatus(String),

    #[error("Unknown table: {0}")]
    UnknownTable(String),

    #[error("Unknown tab: {0}")]
    UnknownTab(String),

    #[error("Unknown query: {0}")]
    UnknownQuery(String),

    #[error("No data: table {0} has not been loaded")]
    NoData(Table),

    #[error("Config error: {0}")]
    Config(String),
}
