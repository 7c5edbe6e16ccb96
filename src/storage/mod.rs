//! Storage Layer - SQLite-backed persistence
//!
//! System of record is SQLite with tables:
//! - providers(Provider_ID, Name, Type, City, Contact)
//! - receivers(Receiver_ID, Name, Type, City, Contact)
//! - food_listings(Food_ID, Food_Name, Quantity, Expiry_Date, Provider_ID, Provider_Type, Location, Food_Type, Meal_Type)
//! - claims(Claim_ID, Food_ID, Receiver_ID, Status, Timestamp)
//!
//! Tables are replaced wholesale on load; there is no row-level write path.

pub mod record;
pub mod schema;
pub mod sqlite;

pub use record::Record;
pub use sqlite::{DbStats, SqliteStore};
