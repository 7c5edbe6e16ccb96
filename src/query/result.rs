//! Named-column result sets for presentation

use serde::Serialize;
use serde_json::{json, Value};
use crate::model::{Claim, FoodListing, Provider, Receiver};
use super::catalog::{ProviderContact, QuantityTotal, StatusShare, Tally};

/// A row type that can be flattened into result-set cells
pub trait Cells {
    fn cells(&self) -> Vec<Value>;
}

/// Ordered column names plus rows of scalar values
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResultSet {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl ResultSet {
    /// Build a result set from typed rows
    pub fn new<T: Cells>(columns: &[&str], rows: &[T]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: rows.iter().map(Cells::cells).collect(),
        }
    }

    /// A single-column, single-row result; zero rows when `value` is absent
    pub fn scalar(column: &str, value: Option<Value>) -> Self {
        Self {
            columns: vec![column.to_string()],
            rows: value.into_iter().map(|v| vec![v]).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Rows rendered as display strings, for tables
    pub fn display_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(display_value).collect())
            .collect()
    }
}

/// Render one cell as text; nulls are blank
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() => format!("{:.2}", f),
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

impl Cells for Tally {
    fn cells(&self) -> Vec<Value> {
        vec![json!(self.label), json!(self.count)]
    }
}

impl Cells for QuantityTotal {
    fn cells(&self) -> Vec<Value> {
        vec![json!(self.name), json!(self.total)]
    }
}

impl Cells for ProviderContact {
    fn cells(&self) -> Vec<Value> {
        vec![json!(self.name), json!(self.contact)]
    }
}

impl Cells for StatusShare {
    fn cells(&self) -> Vec<Value> {
        vec![json!(self.status.as_str()), json!(self.percentage)]
    }
}

impl Cells for Provider {
    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.provider_id),
            json!(self.name),
            json!(self.provider_type),
            json!(self.city),
            json!(self.contact),
        ]
    }
}

impl Cells for Receiver {
    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.receiver_id),
            json!(self.name),
            json!(self.receiver_type),
            json!(self.city),
            json!(self.contact),
        ]
    }
}

impl Cells for FoodListing {
    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.food_id),
            json!(self.food_name),
            json!(self.quantity),
            json!(self.expiry_date),
            json!(self.provider_id),
            json!(self.provider_type),
            json!(self.location),
            json!(self.food_type),
            json!(self.meal_type),
        ]
    }
}

impl Cells for Claim {
    fn cells(&self) -> Vec<Value> {
        vec![
            json!(self.claim_id),
            json!(self.food_id),
            json!(self.receiver_id),
            json!(self.status.as_str()),
            json!(self.timestamp),
        ]
    }
}
