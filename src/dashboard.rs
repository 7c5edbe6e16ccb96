//! Dashboard tabs and panels
//!
//! A tab is an ordered list of questions. Answering a question produces a
//! [`Panel`]; any query failure is caught here and turned into a
//! `NoData` panel so one broken question never takes down the tab.

use serde::Serialize;
use serde_json::json;
use std::str::FromStr;
use crate::model::{Claim, FoodListing, Provider, Receiver, Table};
use crate::query::{QueryCatalog, ResultSet};
use crate::storage::{DbStats, SqliteStore};
use crate::{Error, Result};

/// Dashboard tabs, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tab {
    Home,
    ProvidersReceivers,
    Listings,
    Claims,
    Insights,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[
            Tab::Home,
            Tab::ProvidersReceivers,
            Tab::Listings,
            Tab::Claims,
            Tab::Insights,
        ]
    }

    /// URL / CLI slug
    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::ProvidersReceivers => "providers",
            Tab::Listings => "listings",
            Tab::Claims => "claims",
            Tab::Insights => "insights",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::ProvidersReceivers => "Food Providers & Receivers",
            Tab::Listings => "Food Listings & Availability",
            Tab::Claims => "Claims & Distribution",
            Tab::Insights => "Analysis & Insights",
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        match self {
            Tab::Home => &[
                Question::Summary,
                Question::ProviderTypes,
                Question::ReceiverTypes,
                Question::MealTypes,
                Question::FoodTypes,
                Question::ClaimStatuses,
            ],
            Tab::ProvidersReceivers => &[
                Question::ProvidersPerCity,
                Question::ReceiversPerCity,
                Question::TopProviderType,
                Question::ProviderContacts,
                Question::TopReceivers,
            ],
            Tab::Listings => &[
                Question::TotalQuantity,
                Question::TopListingCity,
                Question::FoodTypes,
            ],
            Tab::Claims => &[
                Question::ClaimsPerFood,
                Question::TopCompletedProvider,
                Question::StatusPercentages,
            ],
            Tab::Insights => &[
                Question::AverageClaimedQuantity,
                Question::TopMealType,
                Question::DonatedQuantity,
            ],
        }
    }
}

impl FromStr for Tab {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Tab::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::UnknownTab(s.to_string()))
    }
}

impl std::fmt::Display for Tab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One dashboard question backed by a catalog query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Question {
    Summary,
    ProviderTypes,
    ReceiverTypes,
    MealTypes,
    ClaimStatuses,
    ProvidersPerCity,
    ReceiversPerCity,
    TopProviderType,
    ProviderContacts,
    TopReceivers,
    TotalQuantity,
    TopListingCity,
    FoodTypes,
    ClaimsPerFood,
    TopCompletedProvider,
    StatusPercentages,
    AverageClaimedQuantity,
    TopMealType,
    DonatedQuantity,
}

impl Question {
    pub fn all() -> &'static [Question] {
        &[
            Question::Summary,
            Question::ProviderTypes,
            Question::ReceiverTypes,
            Question::MealTypes,
            Question::ClaimStatuses,
            Question::ProvidersPerCity,
            Question::ReceiversPerCity,
            Question::TopProviderType,
            Question::ProviderContacts,
            Question::TopReceivers,
            Question::TotalQuantity,
            Question::TopListingCity,
            Question::FoodTypes,
            Question::ClaimsPerFood,
            Question::TopCompletedProvider,
            Question::StatusPercentages,
            Question::AverageClaimedQuantity,
            Question::TopMealType,
            Question::DonatedQuantity,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Question::Summary => "summary",
            Question::ProviderTypes => "provider-types",
            Question::ReceiverTypes => "receiver-types",
            Question::MealTypes => "meal-types",
            Question::ClaimStatuses => "claim-statuses",
            Question::ProvidersPerCity => "providers-per-city",
            Question::ReceiversPerCity => "receivers-per-city",
            Question::TopProviderType => "top-provider-type",
            Question::ProviderContacts => "provider-contacts",
            Question::TopReceivers => "top-receivers",
            Question::TotalQuantity => "total-quantity",
            Question::TopListingCity => "top-listing-city",
            Question::FoodTypes => "food-types",
            Question::ClaimsPerFood => "claims-per-food",
            Question::TopCompletedProvider => "top-completed-provider",
            Question::StatusPercentages => "status-percentages",
            Question::AverageClaimedQuantity => "average-claimed-quantity",
            Question::TopMealType => "top-meal-type",
            Question::DonatedQuantity => "donated-quantity",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Question::Summary => "Totals",
            Question::ProviderTypes => "Providers by Type",
            Question::ReceiverTypes => "Receivers by Type",
            Question::MealTypes => "Meal Type",
            Question::ClaimStatuses => "Claim Status",
            Question::ProvidersPerCity => "Number of Food Providers per City",
            Question::ReceiversPerCity => "Number of Food Receivers per City",
            Question::TopProviderType => {
                "Which type of food provider (restaurant, grocery store, etc.) contributes the most food?"
            }
            Question::ProviderContacts => {
                "What is the contact information of food providers in a specific city?"
            }
            Question::TopReceivers => "Which receivers have claimed the most food?",
            Question::TotalQuantity => {
                "What is the total quantity of food available from all providers?"
            }
            Question::TopListingCity => "Which city has the highest number of food listings?",
            Question::FoodTypes => "What are the most commonly available food types?",
            Question::ClaimsPerFood => "How many food claims have been made for each food item?",
            Question::TopCompletedProvider => {
                "Which provider has had the highest number of successful food claims?"
            }
            Question::StatusPercentages => {
                "What percentage of food claims are completed vs. pending vs. canceled?"
            }
            Question::AverageClaimedQuantity => {
                "What is the average quantity of food claimed per receiver?"
            }
            Question::TopMealType => {
                "Which meal type (breakfast, lunch, dinner, snacks) is claimed the most?"
            }
            Question::DonatedQuantity => {
                "What is the total quantity of food donated by each provider?"
            }
        }
    }

    /// Run the backing query. `city` is only read by `ProviderContacts`.
    pub fn run(&self, catalog: &QueryCatalog<'_>, city: Option<&str>) -> Result<PanelBody> {
        let table = match self {
            Question::Summary => return Ok(PanelBody::Tiles(catalog.summary_counts()?)),
            Question::ProviderTypes => {
                ResultSet::new(&["Type", "provider_count"], &catalog.provider_type_counts()?)
            }
            Question::ReceiverTypes => {
                ResultSet::new(&["Type", "receiver_count"], &catalog.receiver_type_counts()?)
            }
            Question::MealTypes => {
                ResultSet::new(&["Meal_Type", "meal_count"], &catalog.meal_type_distribution()?)
            }
            Question::ClaimStatuses => {
                ResultSet::new(&["Status", "status_count"], &catalog.claim_status_counts()?)
            }
            Question::ProvidersPerCity => {
                ResultSet::new(&["City", "provider_count"], &catalog.providers_per_city()?)
            }
            Question::ReceiversPerCity => {
                ResultSet::new(&["City", "receiver_count"], &catalog.receivers_per_city()?)
            }
            Question::TopProviderType => ResultSet::new(
                &["Type", "provider_count"],
                catalog.top_provider_type()?.as_slice(),
            ),
            Question::ProviderContacts => match city.filter(|c| !c.is_empty()) {
                Some(city) => ResultSet::new(&["Name", "Contact"], &catalog.provider_contacts(city)?),
                None => {
                    return Ok(PanelBody::NoData {
                        message: "Enter a city name to list provider contacts".to_string(),
                    });
                }
            },
            Question::TopReceivers => {
                ResultSet::new(&["Name", "claims_count"], &catalog.top_receivers_by_claims()?)
            }
            Question::TotalQuantity => ResultSet::new(
                &["Name", "total_quantity"],
                &catalog.total_quantity_per_provider()?,
            ),
            Question::TopListingCity => ResultSet::new(
                &["Location", "listing_count"],
                catalog.top_listing_city()?.as_slice(),
            ),
            Question::FoodTypes => {
                ResultSet::new(&["Food_Type", "type_count"], &catalog.food_type_distribution()?)
            }
            Question::ClaimsPerFood => {
                ResultSet::new(&["Food_Name", "claims_count"], &catalog.claims_per_food()?)
            }
            Question::TopCompletedProvider => ResultSet::new(
                &["Name", "claims_count"],
                catalog.top_provider_by_completed_claims()?.as_slice(),
            ),
            Question::StatusPercentages => ResultSet::new(
                &["Status", "status_percentage"],
                &catalog.claim_status_percentages()?,
            ),
            Question::AverageClaimedQuantity => ResultSet::scalar(
                "average_claimed_quantity",
                catalog.average_completed_quantity_per_receiver()?.map(|v| json!(v)),
            ),
            Question::TopMealType => ResultSet::new(
                &["Meal_Type", "claims_count"],
                catalog.top_meal_type_by_claims()?.as_slice(),
            ),
            Question::DonatedQuantity => ResultSet::new(
                &["Name", "total_donated"],
                &catalog.donated_quantity_per_provider()?,
            ),
        };
        Ok(PanelBody::Table(table))
    }

    /// Answer the question, converting any failure into a `NoData` panel
    pub fn panel(&self, catalog: &QueryCatalog<'_>, city: Option<&str>) -> Panel {
        let body = match self.run(catalog, city) {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!("Query {} failed: {}", self.as_str(), e);
                PanelBody::NoData {
                    message: format!("No Data: {}", e),
                }
            }
        };
        Panel {
            question: *self,
            title: self.title(),
            body,
        }
    }
}

impl FromStr for Question {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.to_lowercase().replace('_', "-");
        Question::all()
            .iter()
            .copied()
            .find(|q| q.as_str() == wanted)
            .ok_or_else(|| Error::UnknownQuery(s.to_string()))
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a panel shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PanelBody {
    Table(ResultSet),
    Tiles(DbStats),
    NoData { message: String },
}

/// One answered question
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub question: Question,
    pub title: &'static str,
    pub body: PanelBody,
}

/// A rendered tab
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TabView {
    pub tab: Tab,
    pub title: &'static str,
    pub panels: Vec<Panel>,
}

/// Answer every question on a tab
pub fn render_tab(catalog: &QueryCatalog<'_>, tab: Tab, city: Option<&str>) -> TabView {
    TabView {
        tab,
        title: tab.title(),
        panels: tab
            .questions()
            .iter()
            .map(|q| q.panel(catalog, city))
            .collect(),
    }
}

/// Full contents of one table as a result set
pub fn snapshot(store: &SqliteStore, table: Table) -> Result<ResultSet> {
    let columns = table.columns();
    let rs = match table {
        Table::Providers => ResultSet::new(columns, &store.get::<Provider>()?),
        Table::Receivers => ResultSet::new(columns, &store.get::<Receiver>()?),
        Table::FoodListings => ResultSet::new(columns, &store.get::<FoodListing>()?),
        Table::Claims => ResultSet::new(columns, &store.get::<Claim>()?),
    };
    Ok(rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ClaimStatus;

    fn loaded_store() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .load(&[Provider::new(1, "A", "Grocery", "X", "555")])
            .unwrap();
        store
            .load(&[FoodListing::new(1, "Bread", 50, 1, "X", "Vegan", "Lunch")])
            .unwrap();
        store
    }

    #[test]
    fn test_slugs_parse_back() {
        for q in Question::all() {
            assert_eq!(q.as_str().parse::<Question>().unwrap(), *q);
        }
        for tab in Tab::all() {
            assert_eq!(tab.as_str().parse::<Tab>().unwrap(), *tab);
        }
    }

    #[test]
    fn test_listing_tab_renders_tables() {
        let store = loaded_store();
        let catalog = QueryCatalog::new(&store);
        let view = render_tab(&catalog, Tab::Listings, None);

        assert_eq!(view.panels.len(), 3);
        match &view.panels[0].body {
            PanelBody::Table(rs) => {
                assert_eq!(rs.columns, vec!["Name", "total_quantity"]);
                assert_eq!(rs.rows, vec![vec![json!("A"), json!(50)]]);
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_missing_tables_render_empty_not_error() {
        let store = loaded_store();
        let catalog = QueryCatalog::new(&store);
        let view = render_tab(&catalog, Tab::Claims, None);

        for panel in &view.panels {
            match &panel.body {
                PanelBody::Table(rs) => assert!(rs.is_empty()),
                other => panic!("unexpected body: {other:?}"),
            }
        }
    }

    #[test]
    fn test_contacts_panel_needs_city() {
        let store = loaded_store();
        let catalog = QueryCatalog::new(&store);

        let panel = Question::ProviderContacts.panel(&catalog, None);
        assert!(matches!(panel.body, PanelBody::NoData { .. }));
        let panel = Question::ProviderContacts.panel(&catalog, Some(""));
        assert!(matches!(panel.body, PanelBody::NoData { .. }));

        // Exact match: surrounding spaces are part of the value
        let panel = Question::ProviderContacts.panel(&catalog, Some(" X "));
        assert!(matches!(&panel.body, PanelBody::Table(rs) if rs.is_empty()));

        let panel = Question::ProviderContacts.panel(&catalog, Some("X"));
        assert_eq!(
            panel.body,
            PanelBody::Table(ResultSet {
                columns: vec!["Name".into(), "Contact".into()],
                rows: vec![vec![json!("A"), json!("555")]],
            })
        );
    }

    #[test]
    fn test_home_tab_starts_with_tiles() {
        let mut store = loaded_store();
        store
            .load(&[Claim::new(1, 1, 1, ClaimStatus::Pending)])
            .unwrap();
        let catalog = QueryCatalog::new(&store);
        let view = render_tab(&catalog, Tab::Home, None);

        match &view.panels[0].body {
            PanelBody::Tiles(counts) => {
                assert_eq!(counts.providers, Some(1));
                assert_eq!(counts.receivers, None);
                assert_eq!(counts.claims, Some(1));
            }
            other => panic!("unexpected body: {other:?}"),
        }
    }

    #[test]
    fn test_snapshot_absent_table_is_no_data() {
        let store = loaded_store();
        assert!(matches!(
            snapshot(&store, Table::Claims),
            Err(Error::NoData(Table::Claims))
        ));
        let rs = snapshot(&store, Table::Providers).unwrap();
        assert_eq!(rs.columns.len(), 5);
        assert_eq!(rs.len(), 1);
    }
}
