//! Row mapping between the typed model and SQLite

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::{params, Row, Statement};
use crate::model::{Claim, ClaimStatus, FoodListing, Provider, Receiver, Table};
use crate::{Error, Result};

/// A typed row that can be bulk-loaded into, and read back from, its table.
pub trait Record: Sized {
    /// Table this row belongs to
    const TABLE: Table;
    /// Parameterized insert of one row
    const INSERT: &'static str;
    /// Full snapshot in source order
    const SELECT: &'static str;

    /// Reject rows that violate table invariants before anything is written
    fn validate(&self) -> Result<()> {
        Ok(())
    }

    /// Execute the prepared `INSERT` for this row
    fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize>;

    /// Build a row from a `SELECT` result
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;
}

impl ToSql for ClaimStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for ClaimStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e: Error| FromSqlError::Other(Box::new(e)))
    }
}

fn invalid(table: Table, reason: String) -> Error {
    Error::InvalidRow { table, reason }
}

impl Record for Provider {
    const TABLE: Table = Table::Providers;
    const INSERT: &'static str =
        "INSERT INTO providers (Provider_ID, Name, Type, City, Contact) VALUES (?1, ?2, ?3, ?4, ?5)";
    const SELECT: &'static str =
        "SELECT Provider_ID, Name, Type, City, Contact FROM providers ORDER BY rowid";

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(Self::TABLE, format!("provider {} has no name", self.provider_id)));
        }
        Ok(())
    }

    fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.provider_id,
            self.name,
            self.provider_type,
            self.city,
            self.contact,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Provider {
            provider_id: row.get(0)?,
            name: row.get(1)?,
            provider_type: row.get(2)?,
            city: row.get(3)?,
            contact: row.get(4)?,
        })
    }
}

impl Record for Receiver {
    const TABLE: Table = Table::Receivers;
    const INSERT: &'static str =
        "INSERT INTO receivers (Receiver_ID, Name, Type, City, Contact) VALUES (?1, ?2, ?3, ?4, ?5)";
    const SELECT: &'static str =
        "SELECT Receiver_ID, Name, Type, City, Contact FROM receivers ORDER BY rowid";

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(invalid(Self::TABLE, format!("receiver {} has no name", self.receiver_id)));
        }
        Ok(())
    }

    fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.receiver_id,
            self.name,
            self.receiver_type,
            self.city,
            self.contact,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Receiver {
            receiver_id: row.get(0)?,
            name: row.get(1)?,
            receiver_type: row.get(2)?,
            city: row.get(3)?,
            contact: row.get(4)?,
        })
    }
}

impl Record for FoodListing {
    const TABLE: Table = Table::FoodListings;
    const INSERT: &'static str = r#"
        INSERT INTO food_listings
            (Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
        "#;
    const SELECT: &'static str = r#"
        SELECT Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type
        FROM food_listings ORDER BY rowid
        "#;

    fn validate(&self) -> Result<()> {
        if self.quantity < 0 {
            return Err(invalid(
                Self::TABLE,
                format!("food {} has negative quantity {}", self.food_id, self.quantity),
            ));
        }
        Ok(())
    }

    fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.food_id,
            self.food_name,
            self.quantity,
            self.expiry_date,
            self.provider_id,
            self.provider_type,
            self.location,
            self.food_type,
            self.meal_type,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(FoodListing {
            food_id: row.get(0)?,
            food_name: row.get(1)?,
            quantity: row.get(2)?,
            expiry_date: row.get(3)?,
            provider_id: row.get(4)?,
            provider_type: row.get(5)?,
            location: row.get(6)?,
            food_type: row.get(7)?,
            meal_type: row.get(8)?,
        })
    }
}

impl Record for Claim {
    const TABLE: Table = Table::Claims;
    const INSERT: &'static str =
        "INSERT INTO claims (Claim_ID, Food_ID, Receiver_ID, Status, Timestamp) VALUES (?1, ?2, ?3, ?4, ?5)";
    const SELECT: &'static str =
        "SELECT Claim_ID, Food_ID, Receiver_ID, Status, Timestamp FROM claims ORDER BY rowid";

    fn insert(&self, stmt: &mut Statement<'_>) -> rusqlite::Result<usize> {
        stmt.execute(params![
            self.claim_id,
            self.food_id,
            self.receiver_id,
            self.status,
            self.timestamp,
        ])
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Claim {
            claim_id: row.get(0)?,
            food_id: row.get(1)?,
            receiver_id: row.get(2)?,
            status: row.get(3)?,
            timestamp: row.get(4)?,
        })
    }
}
