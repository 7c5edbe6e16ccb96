//! CSV ingest
//!
//! Each table is read from its own CSV file and loaded independently: a
//! failure on one table is recorded in the [`LoadReport`] and the remaining
//! tables still load.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use crate::model::{Claim, FoodListing, Provider, Receiver, Table};
use crate::storage::SqliteStore;
use crate::{Error, Result};

/// Source file per table. Unset entries are skipped on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sources {
    pub providers: Option<PathBuf>,
    pub receivers: Option<PathBuf>,
    pub food_listings: Option<PathBuf>,
    pub claims: Option<PathBuf>,
}

impl Sources {
    /// `<dir>/providers.csv`, `<dir>/receivers.csv`, ...
    pub fn from_dir(dir: &Path) -> Self {
        Self {
            providers: Some(dir.join(Table::Providers.file_name())),
            receivers: Some(dir.join(Table::Receivers.file_name())),
            food_listings: Some(dir.join(Table::FoodListings.file_name())),
            claims: Some(dir.join(Table::Claims.file_name())),
        }
    }

    pub fn path_for(&self, table: Table) -> Option<&Path> {
        match table {
            Table::Providers => self.providers.as_deref(),
            Table::Receivers => self.receivers.as_deref(),
            Table::FoodListings => self.food_listings.as_deref(),
            Table::Claims => self.claims.as_deref(),
        }
    }

    /// Fill unset entries from `other`
    pub fn or(self, other: Sources) -> Self {
        Self {
            providers: self.providers.or(other.providers),
            receivers: self.receivers.or(other.receivers),
            food_listings: self.food_listings.or(other.food_listings),
            claims: self.claims.or(other.claims),
        }
    }

    pub fn is_empty(&self) -> bool {
        Table::all().iter().all(|t| self.path_for(*t).is_none())
    }
}

/// Result of loading one table
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoadOutcome {
    Loaded { rows: usize },
    Failed { reason: String },
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableLoad {
    pub table: Table,
    pub source: Option<PathBuf>,
    pub outcome: LoadOutcome,
}

/// Per-table outcome of one load pass
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    pub tables: Vec<TableLoad>,
}

impl LoadReport {
    pub fn outcome(&self, table: Table) -> Option<&LoadOutcome> {
        self.tables
            .iter()
            .find(|t| t.table == table)
            .map(|t| &t.outcome)
    }

    pub fn failures(&self) -> impl Iterator<Item = &TableLoad> {
        self.tables
            .iter()
            .filter(|t| matches!(t.outcome, LoadOutcome::Failed { .. }))
    }

    pub fn loaded_rows(&self) -> usize {
        self.tables
            .iter()
            .map(|t| match t.outcome {
                LoadOutcome::Loaded { rows } => rows,
                _ => 0,
            })
            .sum()
    }
}

/// Read typed rows from CSV, checking the header against the table's
/// required columns first.
pub fn read_records<T, R>(table: Table, reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.clone();
    let missing: Vec<String> = table
        .required_columns()
        .iter()
        .filter(|col| !headers.iter().any(|h| h == **col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(Error::MissingColumns { table, columns: missing });
    }

    let rows = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<T>, csv::Error>>()?;
    Ok(rows)
}

/// Read one CSV file into typed rows
pub fn read_csv<T: DeserializeOwned>(table: Table, path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    read_records(table, file)
}

/// Read and load one table, replacing its contents
pub fn load_table(store: &mut SqliteStore, table: Table, path: &Path) -> Result<usize> {
    match table {
        Table::Providers => store.load(&read_csv::<Provider>(table, path)?),
        Table::Receivers => store.load(&read_csv::<Receiver>(table, path)?),
        Table::FoodListings => store.load(&read_csv::<FoodListing>(table, path)?),
        Table::Claims => store.load(&read_csv::<Claim>(table, path)?),
    }
}

/// Load every configured table. Never fails as a whole.
pub fn load_all(store: &mut SqliteStore, sources: &Sources) -> LoadReport {
    let mut report = LoadReport::default();

    for &table in Table::all() {
        let source = sources.path_for(table).map(Path::to_path_buf);
        let outcome = match &source {
            None => {
                tracing::debug!("No source configured for {}", table);
                LoadOutcome::Skipped
            }
            Some(path) => match load_table(store, table, path) {
                Ok(rows) => {
                    tracing::info!("Loaded {} rows into {} from {}", rows, table, path.display());
                    LoadOutcome::Loaded { rows }
                }
                Err(e) => {
                    tracing::warn!("Failed to load {} from {}: {}", table, path.display(), e);
                    LoadOutcome::Failed { reason: e.to_string() }
                }
            },
        };
        report.tables.push(TableLoad { table, source, outcome });
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimStatus;

    const PROVIDERS_CSV: &str = "\
Provider_ID,Name,Type,City,Address,Contact
1,Gonzales Inc,Restaurant,New Jessica,74 Henderson St,+1-600-555-0100
2,Barry Group, Grocery Store ,East Sheena,1 Main Rd,555-0101
";

    const CLAIMS_CSV: &str = "\
Claim_ID,Food_ID,Receiver_ID,Status,Timestamp
1,164,908,Pending,3/5/2025 5:26
2,353,391,Cancelled,3/11/2025 10:24
3,626,492,Completed,
";

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_read_providers_trims_fields() {
        let providers: Vec<Provider> =
            read_records(Table::Providers, PROVIDERS_CSV.as_bytes()).unwrap();
        assert_eq!(providers.len(), 2);
        assert_eq!(providers[1].provider_type, "Grocery Store");
        assert_eq!(providers[0].contact, "+1-600-555-0100");
    }

    #[test]
    fn test_read_claims_optional_columns() {
        let claims: Vec<Claim> = read_records(Table::Claims, CLAIMS_CSV.as_bytes()).unwrap();
        assert_eq!(claims[1].status, ClaimStatus::Canceled);
        assert_eq!(claims[0].timestamp.as_deref(), Some("3/5/2025 5:26"));
        assert_eq!(claims[2].timestamp, None);
    }

    #[test]
    fn test_missing_columns_are_named() {
        let csv = "Provider_ID,Name,City\n1,A,X\n";
        let err = read_records::<Provider, _>(Table::Providers, csv.as_bytes()).unwrap_err();
        match err {
            Error::MissingColumns { table, columns } => {
                assert_eq!(table, Table::Providers);
                assert_eq!(columns, vec!["Type".to_string(), "Contact".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_status_fails_parse() {
        let csv = "Claim_ID,Food_ID,Receiver_ID,Status\n1,1,1,Shipped\n";
        assert!(read_records::<Claim, _>(Table::Claims, csv.as_bytes()).is_err());
    }

    #[test]
    fn test_load_all_reports_per_table() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "providers.csv", PROVIDERS_CSV);
        write(dir.path(), "claims.csv", "Claim_ID,Food_ID\n1,2\n");
        write(
            dir.path(),
            "food_listings.csv",
            "Food_ID,Food_Name,Quantity,Expiry_Date,Provider_ID,Provider_Type,Location,Food_Type,Meal_Type\n\
             1,Bread,43,3/17/2025,1,Restaurant,New Jessica,Vegetarian,Breakfast\n",
        );

        let mut store = SqliteStore::open_in_memory().unwrap();
        let report = load_all(&mut store, &Sources::from_dir(dir.path()));

        assert_eq!(report.outcome(Table::Providers), Some(&LoadOutcome::Loaded { rows: 2 }));
        assert_eq!(report.outcome(Table::FoodListings), Some(&LoadOutcome::Loaded { rows: 1 }));
        assert!(matches!(report.outcome(Table::Receivers), Some(LoadOutcome::Failed { .. })));
        assert!(matches!(report.outcome(Table::Claims), Some(LoadOutcome::Failed { .. })));
        assert_eq!(report.failures().count(), 2);
        assert_eq!(report.loaded_rows(), 3);
        assert!(!store.has_table(Table::Claims).unwrap());
    }

    #[test]
    fn test_unset_sources_are_skipped() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let report = load_all(&mut store, &Sources::default());
        assert!(report.tables.iter().all(|t| t.outcome == LoadOutcome::Skipped));
    }
}
