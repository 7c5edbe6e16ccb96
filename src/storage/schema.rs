//! Database schema definitions
//!
//! Key columns are `UNIQUE` rather than `INTEGER PRIMARY KEY` so the
//! implicit rowid keeps source row order.

use crate::model::Table;

/// SQL to create the providers table
pub const CREATE_PROVIDERS_TABLE: &str = r#"
CREATE TABLE providers (
    Provider_ID INTEGER NOT NULL UNIQUE,
    Name TEXT NOT NULL,
    Type TEXT NOT NULL,
    City TEXT NOT NULL,
    Contact TEXT NOT NULL
)
"#;

/// SQL to create the receivers table
pub const CREATE_RECEIVERS_TABLE: &str = r#"
CREATE TABLE receivers (
    Receiver_ID INTEGER NOT NULL UNIQUE,
    Name TEXT NOT NULL,
    Type TEXT NOT NULL,
    City TEXT NOT NULL,
    Contact TEXT
)
"#;

/// SQL to create the food_listings table
pub const CREATE_FOOD_LISTINGS_TABLE: &str = r#"
CREATE TABLE food_listings (
    Food_ID INTEGER NOT NULL UNIQUE,
    Food_Name TEXT NOT NULL,
    Quantity INTEGER NOT NULL CHECK (Quantity >= 0),
    Expiry_Date TEXT,
    Provider_ID INTEGER NOT NULL,
    Provider_Type TEXT,
    Location TEXT NOT NULL,
    Food_Type TEXT NOT NULL,
    Meal_Type TEXT NOT NULL
)
"#;

/// SQL to create the claims table
pub const CREATE_CLAIMS_TABLE: &str = r#"
CREATE TABLE claims (
    Claim_ID INTEGER NOT NULL UNIQUE,
    Food_ID INTEGER NOT NULL,
    Receiver_ID INTEGER NOT NULL,
    Status TEXT NOT NULL CHECK (Status IN ('Completed', 'Pending', 'Canceled')),
    Timestamp TEXT
)
"#;

const FOOD_LISTINGS_INDEXES: &[&str] = &[
    "CREATE INDEX idx_food_listings_provider ON food_listings(Provider_ID)",
    "CREATE INDEX idx_food_listings_location ON food_listings(Location)",
];

const CLAIMS_INDEXES: &[&str] = &[
    "CREATE INDEX idx_claims_food ON claims(Food_ID)",
    "CREATE INDEX idx_claims_receiver ON claims(Receiver_ID)",
];

/// Statements that (re)create one table after it has been dropped
pub fn statements_for(table: Table) -> Vec<&'static str> {
    match table {
        Table::Providers => vec![CREATE_PROVIDERS_TABLE],
        Table::Receivers => vec![CREATE_RECEIVERS_TABLE],
        Table::FoodListings => {
            let mut stmts = vec![CREATE_FOOD_LISTINGS_TABLE];
            stmts.extend(FOOD_LISTINGS_INDEXES.iter().copied());
            stmts
        }
        Table::Claims => {
            let mut stmts = vec![CREATE_CLAIMS_TABLE];
            stmts.extend(CLAIMS_INDEXES.iter().copied());
            stmts
        }
    }
}
