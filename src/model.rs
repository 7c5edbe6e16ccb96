//! Domain model - the four dashboard tables
//!
//! Every dataset maps to one typed row:
//! - `Provider`: supplies food listings
//! - `Receiver`: claims food listings
//! - `FoodListing`: a quantity of a food item offered by a provider
//! - `Claim`: a receiver's request against a listing, with a `ClaimStatus`
//!
//! Field names on the wire (CSV headers, SQL columns) follow the source
//! datasets, e.g. `Provider_ID`, `Food_Type`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The four tables held by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Table {
    Providers,
    Receivers,
    FoodListings,
    Claims,
}

impl Table {
    /// Get the SQL table name
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Providers => "providers",
            Table::Receivers => "receivers",
            Table::FoodListings => "food_listings",
            Table::Claims => "claims",
        }
    }

    /// All tables, in load order
    pub fn all() -> &'static [Table] {
        &[
            Table::Providers,
            Table::Receivers,
            Table::FoodListings,
            Table::Claims,
        ]
    }

    /// Columns a source file must carry for this table
    pub fn required_columns(&self) -> &'static [&'static str] {
        match self {
            Table::Providers => &["Provider_ID", "Name", "Type", "City", "Contact"],
            Table::Receivers => &["Receiver_ID", "Name", "Type", "City"],
            Table::FoodListings => &[
                "Food_ID",
                "Food_Name",
                "Quantity",
                "Provider_ID",
                "Location",
                "Food_Type",
                "Meal_Type",
            ],
            Table::Claims => &["Claim_ID", "Food_ID", "Receiver_ID", "Status"],
        }
    }

    /// Every stored column, in table order
    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Providers => &["Provider_ID", "Name", "Type", "City", "Contact"],
            Table::Receivers => &["Receiver_ID", "Name", "Type", "City", "Contact"],
            Table::FoodListings => &[
                "Food_ID",
                "Food_Name",
                "Quantity",
                "Expiry_Date",
                "Provider_ID",
                "Provider_Type",
                "Location",
                "Food_Type",
                "Meal_Type",
            ],
            Table::Claims => &["Claim_ID", "Food_ID", "Receiver_ID", "Status", "Timestamp"],
        }
    }

    /// Default source file name, e.g. `food_listings.csv`
    pub fn file_name(&self) -> String {
        format!("{}.csv", self.as_str())
    }

    /// Human label used on summary tiles
    pub fn label(&self) -> &'static str {
        match self {
            Table::Providers => "Providers",
            Table::Receivers => "Receivers",
            Table::FoodListings => "Food Listings",
            Table::Claims => "Claims",
        }
    }
}

impl FromStr for Table {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "providers" | "provider" => Ok(Table::Providers),
            "receivers" | "receiver" => Ok(Table::Receivers),
            "food_listings" | "listings" | "food" => Ok(Table::FoodListings),
            "claims" | "claim" => Ok(Table::Claims),
            _ => Err(Error::UnknownTable(s.to_string())),
        }
    }
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Claim outcome - a closed enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum ClaimStatus {
    Completed,
    Pending,
    Canceled,
}

impl ClaimStatus {
    /// Get the stored string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::Completed => "Completed",
            ClaimStatus::Pending => "Pending",
            ClaimStatus::Canceled => "Canceled",
        }
    }

    pub fn all() -> &'static [ClaimStatus] {
        &[ClaimStatus::Completed, ClaimStatus::Pending, ClaimStatus::Canceled]
    }
}

impl FromStr for ClaimStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(ClaimStatus::Completed),
            "pending" => Ok(ClaimStatus::Pending),
            "canceled" | "cancelled" => Ok(ClaimStatus::Canceled),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for ClaimStatus {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl std::fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A food provider (restaurant, grocery store, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(rename = "Provider_ID")]
    pub provider_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub provider_type: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Contact")]
    pub contact: String,
}

impl Provider {
    pub fn new(
        provider_id: i64,
        name: impl Into<String>,
        provider_type: impl Into<String>,
        city: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            provider_id,
            name: name.into(),
            provider_type: provider_type.into(),
            city: city.into(),
            contact: contact.into(),
        }
    }
}

/// A food receiver (shelter, NGO, individual, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receiver {
    #[serde(rename = "Receiver_ID")]
    pub receiver_id: i64,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Type")]
    pub receiver_type: String,
    #[serde(rename = "City")]
    pub city: String,
    #[serde(rename = "Contact", default)]
    pub contact: Option<String>,
}

impl Receiver {
    pub fn new(
        receiver_id: i64,
        name: impl Into<String>,
        receiver_type: impl Into<String>,
        city: impl Into<String>,
    ) -> Self {
        Self {
            receiver_id,
            name: name.into(),
            receiver_type: receiver_type.into(),
            city: city.into(),
            contact: None,
        }
    }
}

/// A quantity of one food item offered by a provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodListing {
    #[serde(rename = "Food_ID")]
    pub food_id: i64,
    #[serde(rename = "Food_Name")]
    pub food_name: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Expiry_Date", default)]
    pub expiry_date: Option<String>,
    #[serde(rename = "Provider_ID")]
    pub provider_id: i64,
    #[serde(rename = "Provider_Type", default)]
    pub provider_type: Option<String>,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Food_Type")]
    pub food_type: String,
    #[serde(rename = "Meal_Type")]
    pub meal_type: String,
}

impl FoodListing {
    /// Create a listing with the required fields; optional source columns stay empty.
    pub fn new(
        food_id: i64,
        food_name: impl Into<String>,
        quantity: i64,
        provider_id: i64,
        location: impl Into<String>,
        food_type: impl Into<String>,
        meal_type: impl Into<String>,
    ) -> Self {
        Self {
            food_id,
            food_name: food_name.into(),
            quantity,
            expiry_date: None,
            provider_id,
            provider_type: None,
            location: location.into(),
            food_type: food_type.into(),
            meal_type: meal_type.into(),
        }
    }
}

/// A receiver's claim against a food listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(rename = "Claim_ID")]
    pub claim_id: i64,
    #[serde(rename = "Food_ID")]
    pub food_id: i64,
    #[serde(rename = "Receiver_ID")]
    pub receiver_id: i64,
    #[serde(rename = "Status")]
    pub status: ClaimStatus,
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<String>,
}

impl Claim {
    pub fn new(claim_id: i64, food_id: i64, receiver_id: i64, status: ClaimStatus) -> Self {
        Self {
            claim_id,
            food_id,
            receiver_id,
            status,
            timestamp: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parsing() {
        assert_eq!("Completed".parse::<ClaimStatus>().unwrap(), ClaimStatus::Completed);
        assert_eq!(" pending ".parse::<ClaimStatus>().unwrap(), ClaimStatus::Pending);
        assert_eq!("Cancelled".parse::<ClaimStatus>().unwrap(), ClaimStatus::Canceled);
        assert!("Shipped".parse::<ClaimStatus>().is_err());
    }

    #[test]
    fn test_table_names() {
        assert_eq!("food-listings".parse::<Table>().unwrap(), Table::FoodListings);
        assert_eq!(Table::Claims.file_name(), "claims.csv");
        assert!("orders".parse::<Table>().is_err());
    }

    #[test]
    fn test_claim_deserializes_status() {
        let json = r#"{"Claim_ID":1,"Food_ID":2,"Receiver_ID":3,"Status":"Cancelled"}"#;
        let claim: Claim = serde_json::from_str(json).unwrap();
        assert_eq!(claim.status, ClaimStatus::Canceled);
        assert_eq!(claim.timestamp, None);
    }
}
