//! Dashboard session
//!
//! The store is opened and loaded exactly once, before any query runs.
//! Queries then borrow it read-only through [`Session::catalog`].

use crate::config::{self, DashboardConfig};
use crate::ingest::{self, LoadReport, Sources};
use crate::query::QueryCatalog;
use crate::storage::SqliteStore;
use crate::Result;

pub struct Session {
    store: SqliteStore,
    report: LoadReport,
}

impl Session {
    /// Open the configured database and load every configured source.
    ///
    /// Per-table load failures end up in the report; only failing to open
    /// the database is an error.
    pub fn start(config: &DashboardConfig) -> Result<Self> {
        let db_path = config.database_path();
        config::ensure_db_dir(&db_path)?;
        let store = SqliteStore::open(&db_path)?;
        Ok(Self::with_store(store, &config.sources()))
    }

    /// Run the load step against an already-open store
    pub fn with_store(mut store: SqliteStore, sources: &Sources) -> Self {
        let report = if sources.is_empty() {
            tracing::debug!("No sources configured, using persisted tables");
            LoadReport::default()
        } else {
            ingest::load_all(&mut store, sources)
        };
        Self { store, report }
    }

    pub fn store(&self) -> &SqliteStore {
        &self.store
    }

    pub fn catalog(&self) -> QueryCatalog<'_> {
        QueryCatalog::new(&self.store)
    }

    pub fn report(&self) -> &LoadReport {
        &self.report
    }
}
