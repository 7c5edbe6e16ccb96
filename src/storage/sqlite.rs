//! SQLite storage implementation

use std::path::Path;
use rusqlite::{Connection, Params, Row};
use crate::model::Table;
use crate::{Error, Result};
use super::record::Record;
use super::schema;

/// SQLite-backed storage for the four dashboard tables.
///
/// Tables only come into existence through [`SqliteStore::load`]; until a
/// table is loaded every read against it reports [`Error::NoData`].
pub struct SqliteStore {
    conn: Connection,
}

impl SqliteStore {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        tracing::debug!("Opened database {}", path.display());
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    // ========== Load ==========

    /// Replace the whole table with `rows`.
    ///
    /// Rows are validated up front, then the table is dropped, recreated and
    /// filled inside one transaction. Any failure rolls back, leaving the
    /// previous contents (or the absence of the table) untouched.
    pub fn load<T: Record>(&mut self, rows: &[T]) -> Result<usize> {
        let table = T::TABLE;
        for row in rows {
            row.validate()?;
        }

        let tx = self.conn.transaction()?;
        tx.execute(&format!("DROP TABLE IF EXISTS {}", table.as_str()), [])?;
        for stmt in schema::statements_for(table) {
            tx.execute(stmt, [])?;
        }
        {
            let mut insert = tx.prepare(T::INSERT)?;
            for row in rows {
                row.insert(&mut insert)?;
            }
        }
        tx.commit()?;

        tracing::debug!("Replaced {} with {} rows", table, rows.len());
        Ok(rows.len())
    }

    // ========== Read ==========

    /// Full snapshot of a table in source order
    pub fn get<T: Record>(&self) -> Result<Vec<T>> {
        self.require(T::TABLE)?;
        self.query_rows(T::SELECT, [], T::from_row)
    }

    /// Check whether a table has been loaded
    pub fn has_table(&self, table: Table) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [table.as_str()],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    /// Fail with [`Error::NoData`] unless the table has been loaded
    pub fn require(&self, table: Table) -> Result<()> {
        if self.has_table(table)? {
            Ok(())
        } else {
            Err(Error::NoData(table))
        }
    }

    /// Row count, or `None` when the table has not been loaded
    pub fn count(&self, table: Table) -> Result<Option<usize>> {
        if !self.has_table(table)? {
            return Ok(None);
        }
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM {}", table.as_str()),
            [],
            |row| row.get(0),
        )?;
        Ok(Some(count as usize))
    }

    /// Run a read-only query and map every row
    pub fn query_rows<T, P, F>(&self, sql: &str, params: P, map: F) -> Result<Vec<T>>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> rusqlite::Result<T>,
    {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, map)?
            .collect::<rusqlite::Result<Vec<T>>>()?;
        Ok(rows)
    }

    /// Get statistics for all tables
    pub fn stats(&self) -> Result<DbStats> {
        Ok(DbStats {
            providers: self.count(Table::Providers)?,
            receivers: self.count(Table::Receivers)?,
            food_listings: self.count(Table::FoodListings)?,
            claims: self.count(Table::Claims)?,
        })
    }
}

/// Row counts per table; `None` marks a table that was never loaded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct DbStats {
    pub providers: Option<usize>,
    pub receivers: Option<usize>,
    pub food_listings: Option<usize>,
    pub claims: Option<usize>,
}

impl DbStats {
    /// Count for one table
    pub fn get(&self, table: Table) -> Option<usize> {
        match table {
            Table::Providers => self.providers,
            Table::Receivers => self.receivers,
            Table::FoodListings => self.food_listings,
            Table::Claims => self.claims,
        }
    }
}

impl std::fmt::Display for DbStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Database Statistics:")?;
        for table in Table::all() {
            match self.get(*table) {
                Some(n) => writeln!(f, "  {}: {}", table.label(), n)?,
                None => writeln!(f, "  {}: No Data", table.label())?,
            }
        }
        Ok(())
    }
}
