//! Query catalog implementation
//!
//! A fixed set of read-only aggregate queries, one per dashboard question.
//! Every query checks its backing tables first; if any of them has not been
//! loaded the query yields no rows instead of failing.
//!
//! Ordered results break ties by first appearance in the source data
//! (smallest rowid in the group), so TOP-N answers are deterministic.

use rusqlite::Row;
use serde::Serialize;
use crate::model::{ClaimStatus, Table};
use crate::storage::{DbStats, SqliteStore};
use crate::Result;

/// Number of receivers in the claim leaderboard
pub const TOP_RECEIVERS: usize = 5;

/// A label with a row count (city, type, name, ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tally {
    pub label: String,
    pub count: i64,
}

/// Summed food quantity for one provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuantityTotal {
    pub name: String,
    pub total: i64,
}

/// Provider contact details
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProviderContact {
    pub name: String,
    pub contact: String,
}

/// Share of all claims in one status
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusShare {
    pub status: ClaimStatus,
    pub percentage: f64,
}

fn tally(row: &Row<'_>) -> rusqlite::Result<Tally> {
    Ok(Tally {
        label: row.get(0)?,
        count: row.get(1)?,
    })
}

fn quantity_total(row: &Row<'_>) -> rusqlite::Result<QuantityTotal> {
    Ok(QuantityTotal {
        name: row.get(0)?,
        total: row.get(1)?,
    })
}

/// Catalog of dashboard queries over a loaded store
pub struct QueryCatalog<'a> {
    store: &'a SqliteStore,
}

impl<'a> QueryCatalog<'a> {
    /// Create a catalog over a store
    pub fn new(store: &'a SqliteStore) -> Self {
        Self { store }
    }

    /// True when every table a query reads has been loaded
    fn ready(&self, tables: &[Table]) -> Result<bool> {
        for table in tables {
            if !self.store.has_table(*table)? {
                tracing::debug!("Table {} not loaded, query yields no rows", table);
                return Ok(false);
            }
        }
        Ok(true)
    }

    fn tallies(&self, tables: &[Table], sql: &str) -> Result<Vec<Tally>> {
        if !self.ready(tables)? {
            return Ok(Vec::new());
        }
        self.store.query_rows(sql, [], tally)
    }

    fn first(rows: Vec<Tally>) -> Option<Tally> {
        rows.into_iter().next()
    }

    // ========== Summary ==========

    /// Row counts for the four summary tiles; `None` when a table is absent
    pub fn summary_counts(&self) -> Result<DbStats> {
        self.store.stats()
    }

    /// Providers per Type, most common first
    pub fn provider_type_counts(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::Providers],
            r#"
            SELECT Type, COUNT(*) AS provider_count
            FROM providers
            GROUP BY Type
            ORDER BY provider_count DESC, MIN(rowid)
            "#,
        )
    }

    /// Receivers per Type, most common first
    pub fn receiver_type_counts(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::Receivers],
            r#"
            SELECT Type, COUNT(*) AS receiver_count
            FROM receivers
            GROUP BY Type
            ORDER BY receiver_count DESC, MIN(rowid)
            "#,
        )
    }

    /// Listings per Meal_Type, most common first
    pub fn meal_type_distribution(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::FoodListings],
            r#"
            SELECT Meal_Type, COUNT(*) AS meal_count
            FROM food_listings
            GROUP BY Meal_Type
            ORDER BY meal_count DESC, MIN(rowid)
            "#,
        )
    }

    /// Claims per Status, most common first
    pub fn claim_status_counts(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::Claims],
            r#"
            SELECT Status, COUNT(*) AS status_count
            FROM claims
            GROUP BY Status
            ORDER BY status_count DESC, MIN(rowid)
            "#,
        )
    }

    // ========== Providers & Receivers ==========

    /// Distinct provider names per city
    pub fn providers_per_city(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::Providers],
            r#"
            SELECT City, COUNT(DISTINCT Name) AS provider_count
            FROM providers
            GROUP BY City
            ORDER BY City
            "#,
        )
    }

    /// Distinct receiver names per city
    pub fn receivers_per_city(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::Receivers],
            r#"
            SELECT City, COUNT(DISTINCT Name) AS receiver_count
            FROM receivers
            GROUP BY City
            ORDER BY City
            "#,
        )
    }

    /// Provider Type with the most distinct providers
    pub fn top_provider_type(&self) -> Result<Option<Tally>> {
        self.tallies(
            &[Table::Providers],
            r#"
            SELECT Type, COUNT(DISTINCT Name) AS provider_count
            FROM providers
            GROUP BY Type
            ORDER BY provider_count DESC, MIN(rowid)
            LIMIT 1
            "#,
        )
        .map(Self::first)
    }

    /// Name and contact of every provider in `city` (exact match).
    ///
    /// The city is bound as a parameter, never spliced into the SQL.
    pub fn provider_contacts(&self, city: &str) -> Result<Vec<ProviderContact>> {
        if city.is_empty() || !self.ready(&[Table::Providers])? {
            return Ok(Vec::new());
        }
        self.store.query_rows(
            "SELECT Name, Contact FROM providers WHERE City = ?1 ORDER BY rowid",
            [city],
            |row| {
                Ok(ProviderContact {
                    name: row.get(0)?,
                    contact: row.get(1)?,
                })
            },
        )
    }

    /// Receivers with the most claims, at most [`TOP_RECEIVERS`]
    pub fn top_receivers_by_claims(&self) -> Result<Vec<Tally>> {
        if !self.ready(&[Table::Receivers, Table::Claims])? {
            return Ok(Vec::new());
        }
        self.store.query_rows(
            r#"
            SELECT r.Name, COUNT(c.Food_ID) AS claims_count
            FROM receivers AS r
            JOIN claims AS c ON r.Receiver_ID = c.Receiver_ID
            GROUP BY r.Name
            ORDER BY claims_count DESC, MIN(r.rowid)
            LIMIT ?1
            "#,
            [TOP_RECEIVERS as i64],
            tally,
        )
    }

    // ========== Listings & Availability ==========

    /// Summed Quantity per provider over all of its listings
    pub fn total_quantity_per_provider(&self) -> Result<Vec<QuantityTotal>> {
        if !self.ready(&[Table::Providers, Table::FoodListings])? {
            return Ok(Vec::new());
        }
        self.store.query_rows(
            r#"
            SELECT p.Name, SUM(f.Quantity) AS total_quantity
            FROM providers AS p
            JOIN food_listings AS f ON p.Provider_ID = f.Provider_ID
            GROUP BY p.Name
            ORDER BY total_quantity DESC, MIN(p.rowid)
            "#,
            [],
            quantity_total,
        )
    }

    /// Location with the most listings
    pub fn top_listing_city(&self) -> Result<Option<Tally>> {
        self.tallies(
            &[Table::FoodListings],
            r#"
            SELECT Location, COUNT(*) AS listing_count
            FROM food_listings
            GROUP BY Location
            ORDER BY listing_count DESC, MIN(rowid)
            LIMIT 1
            "#,
        )
        .map(Self::first)
    }

    /// Listings per Food_Type, full distribution
    pub fn food_type_distribution(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::FoodListings],
            r#"
            SELECT Food_Type, COUNT(*) AS type_count
            FROM food_listings
            GROUP BY Food_Type
            ORDER BY type_count DESC, MIN(rowid)
            "#,
        )
    }

    // ========== Claims & Distribution ==========

    /// Claims per Food_Name
    pub fn claims_per_food(&self) -> Result<Vec<Tally>> {
        self.tallies(
            &[Table::FoodListings, Table::Claims],
            r#"
            SELECT f.Food_Name, COUNT(*) AS claims_count
            FROM food_listings AS f
            JOIN claims AS c ON f.Food_ID = c.Food_ID
            GROUP BY f.Food_Name
            ORDER BY claims_count DESC, MIN(f.rowid)
            "#,
        )
    }

    /// Provider with the most completed claims.
    ///
    /// Providers without a completed claim are never returned.
    pub fn top_provider_by_completed_claims(&self) -> Result<Option<Tally>> {
        if !self.ready(&[Table::Providers, Table::FoodListings, Table::Claims])? {
            return Ok(None);
        }
        self.store
            .query_rows(
                r#"
                SELECT p.Name, COUNT(c.Claim_ID) AS claims_count
                FROM providers AS p
                JOIN food_listings AS f ON p.Provider_ID = f.Provider_ID
                JOIN claims AS c ON f.Food_ID = c.Food_ID
                WHERE c.Status = ?1
                GROUP BY p.Name
                ORDER BY claims_count DESC, MIN(p.rowid)
                LIMIT 1
                "#,
                [ClaimStatus::Completed],
                tally,
            )
            .map(Self::first)
    }

    /// Percentage of all claims in each observed status.
    ///
    /// Percentages sum to 100; no rows when there are no claims.
    pub fn claim_status_percentages(&self) -> Result<Vec<StatusShare>> {
        if !self.ready(&[Table::Claims])? {
            return Ok(Vec::new());
        }
        self.store.query_rows(
            r#"
            SELECT Status, COUNT(*) * 100.0 / (SELECT COUNT(*) FROM claims) AS status_percentage
            FROM claims
            GROUP BY Status
            ORDER BY MIN(rowid)
            "#,
            [],
            |row| {
                Ok(StatusShare {
                    status: row.get(0)?,
                    percentage: row.get(1)?,
                })
            },
        )
    }

    // ========== Analysis & Insights ==========

    /// Average over receivers of each receiver's total completed quantity.
    ///
    /// Sums per receiver first, then averages the sums. `None` when no
    /// completed claim exists.
    pub fn average_completed_quantity_per_receiver(&self) -> Result<Option<f64>> {
        if !self.ready(&[Table::Receivers, Table::FoodListings, Table::Claims])? {
            return Ok(None);
        }
        let rows = self.store.query_rows(
            r#"
            SELECT AVG(claimed_quantity) AS average_claimed_quantity
            FROM (
                SELECT r.Receiver_ID, SUM(f.Quantity) AS claimed_quantity
                FROM receivers AS r
                JOIN claims AS c ON r.Receiver_ID = c.Receiver_ID
                JOIN food_listings AS f ON c.Food_ID = f.Food_ID
                WHERE c.Status = ?1
                GROUP BY r.Receiver_ID
            )
            "#,
            [ClaimStatus::Completed],
            |row| row.get::<_, Option<f64>>(0),
        )?;
        Ok(rows.into_iter().next().flatten())
    }

    /// Meal_Type with the most claims
    pub fn top_meal_type_by_claims(&self) -> Result<Option<Tally>> {
        self.tallies(
            &[Table::FoodListings, Table::Claims],
            r#"
            SELECT f.Meal_Type, COUNT(c.Claim_ID) AS claims_count
            FROM food_listings AS f
            JOIN claims AS c ON f.Food_ID = c.Food_ID
            GROUP BY f.Meal_Type
            ORDER BY claims_count DESC, MIN(f.rowid)
            LIMIT 1
            "#,
        )
        .map(Self::first)
    }

    /// Summed Quantity per provider over claimed listings only.
    ///
    /// Inner join on claims: a listing adds its quantity once per claim,
    /// and providers whose listings were never claimed are left out.
    pub fn donated_quantity_per_provider(&self) -> Result<Vec<QuantityTotal>> {
        if !self.ready(&[Table::Providers, Table::FoodListings, Table::Claims])? {
            return Ok(Vec::new());
        }
        self.store.query_rows(
            r#"
            SELECT p.Name, SUM(f.Quantity) AS total_donated
            FROM providers AS p
            JOIN food_listings AS f ON p.Provider_ID = f.Provider_ID
            JOIN claims AS c ON f.Food_ID = c.Food_ID
            GROUP BY p.Name
            ORDER BY total_donated DESC, MIN(p.rowid)
            "#,
            [],
            quantity_total,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Claim, FoodListing, Provider, Receiver};

    fn listing(id: i64, name: &str, quantity: i64, provider: i64, city: &str, food: &str, meal: &str) -> FoodListing {
        FoodListing::new(id, name, quantity, provider, city, food, meal)
    }

    /// Three providers, four receivers, five listings, eight claims
    fn sample_store() -> SqliteStore {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .load(&[
                Provider::new(1, "Gonzales Inc", "Restaurant", "Springfield", "555-0100"),
                Provider::new(2, "Barry Group", "Grocery Store", "Shelbyville", "555-0101"),
                Provider::new(3, "Nielsen Ltd", "Restaurant", "Springfield", "555-0102"),
            ])
            .unwrap();
        store
            .load(&[
                Receiver::new(10, "Helping Hands", "Shelter", "Springfield"),
                Receiver::new(11, "Food Bank", "NGO", "Shelbyville"),
                Receiver::new(12, "Jane Doe", "Individual", "Springfield"),
                Receiver::new(13, "Idle Org", "NGO", "Ogdenville"),
            ])
            .unwrap();
        store
            .load(&[
                listing(100, "Bread", 10, 1, "Springfield", "Vegetarian", "Breakfast"),
                listing(101, "Soup", 20, 1, "Springfield", "Vegan", "Dinner"),
                listing(102, "Rice", 5, 2, "Shelbyville", "Vegetarian", "Lunch"),
                listing(103, "Fish", 40, 3, "Springfield", "Non-Vegetarian", "Dinner"),
                listing(104, "Bread", 7, 2, "Shelbyville", "Vegetarian", "Snacks"),
            ])
            .unwrap();
        store
            .load(&[
                Claim::new(1, 100, 10, ClaimStatus::Completed),
                Claim::new(2, 101, 10, ClaimStatus::Completed),
                Claim::new(3, 102, 11, ClaimStatus::Completed),
                Claim::new(4, 101, 11, ClaimStatus::Pending),
                Claim::new(5, 104, 12, ClaimStatus::Canceled),
                Claim::new(6, 100, 12, ClaimStatus::Pending),
                Claim::new(7, 102, 10, ClaimStatus::Canceled),
                Claim::new(8, 101, 12, ClaimStatus::Pending),
            ])
            .unwrap();
        store
    }

    fn t(label: &str, count: i64) -> Tally {
        Tally { label: label.to_string(), count }
    }

    #[test]
    fn test_per_city_counts() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);

        assert_eq!(
            catalog.providers_per_city().unwrap(),
            vec![t("Shelbyville", 1), t("Springfield", 2)]
        );
        assert_eq!(
            catalog.receivers_per_city().unwrap(),
            vec![t("Ogdenville", 1), t("Shelbyville", 1), t("Springfield", 2)]
        );
    }

    #[test]
    fn test_top_provider_type() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);
        assert_eq!(catalog.top_provider_type().unwrap(), Some(t("Restaurant", 2)));
    }

    #[test]
    fn test_provider_contacts_by_city() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);

        let contacts = catalog.provider_contacts("Springfield").unwrap();
        let names: Vec<_> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Gonzales Inc", "Nielsen Ltd"]);

        assert!(catalog.provider_contacts("Nowhere").unwrap().is_empty());
        assert!(catalog.provider_contacts("").unwrap().is_empty());
    }

    #[test]
    fn test_provider_contacts_filter_is_not_interpolated() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);

        let hostile = "x' OR '1'='1";
        assert!(catalog.provider_contacts(hostile).unwrap().is_empty());
        assert_eq!(store.count(Table::Providers).unwrap(), Some(3));
    }

    #[test]
    fn test_top_receivers_by_claims() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);

        // Helping Hands and Jane Doe tie at 3; Helping Hands comes first in the source.
        assert_eq!(
            catalog.top_receivers_by_claims().unwrap(),
            vec![t("Helping Hands", 3), t("Jane Doe", 3), t("Food Bank", 2)]
        );
    }

    #[test]
    fn test_top_receivers_limited_to_five() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        let receivers: Vec<Receiver> = (1..=7)
            .map(|i| Receiver::new(i, format!("R{i}"), "NGO", "X"))
            .collect();
        let claims: Vec<Claim> = (1..=7)
            .map(|i| Claim::new(i, 1, i, ClaimStatus::Pending))
            .collect();
        store.load(&receivers).unwrap();
        store.load(&claims).unwrap();

        let top = QueryCatalog::new(&store).top_receivers_by_claims().unwrap();
        let names: Vec<_> = top.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(names, vec!["R1", "R2", "R3", "R4", "R5"]);
    }

    #[test]
    fn test_total_quantity_is_descending() {
        let store = sample_store();
        let totals = QueryCatalog::new(&store).total_quantity_per_provider().unwrap();

        assert_eq!(
            totals,
            vec![
                QuantityTotal { name: "Nielsen Ltd".into(), total: 40 },
                QuantityTotal { name: "Gonzales Inc".into(), total: 30 },
                QuantityTotal { name: "Barry Group".into(), total: 12 },
            ]
        );
        assert!(totals.windows(2).all(|w| w[0].total >= w[1].total));
    }

    #[test]
    fn test_listing_distributions() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);

        assert_eq!(catalog.top_listing_city().unwrap(), Some(t("Springfield", 3)));
        assert_eq!(
            catalog.food_type_distribution().unwrap(),
            vec![t("Vegetarian", 3), t("Vegan", 1), t("Non-Vegetarian", 1)]
        );
        assert_eq!(
            catalog.meal_type_distribution().unwrap(),
            vec![t("Dinner", 2), t("Breakfast", 1), t("Lunch", 1), t("Snacks", 1)]
        );
    }

    #[test]
    fn test_claims_per_food() {
        let store = sample_store();
        // Bread groups listings 100 and 104 by name.
        assert_eq!(
            QueryCatalog::new(&store).claims_per_food().unwrap(),
            vec![t("Bread", 3), t("Soup", 3), t("Rice", 2)]
        );
    }

    #[test]
    fn test_top_provider_by_completed_claims() {
        let store = sample_store();
        assert_eq!(
            QueryCatalog::new(&store).top_provider_by_completed_claims().unwrap(),
            Some(t("Gonzales Inc", 2))
        );
    }

    #[test]
    fn test_top_provider_by_completed_claims_excludes_zero() {
        let mut store = sample_store();
        store
            .load(&[Claim::new(1, 103, 10, ClaimStatus::Pending)])
            .unwrap();
        assert_eq!(
            QueryCatalog::new(&store).top_provider_by_completed_claims().unwrap(),
            None
        );
    }

    #[test]
    fn test_status_percentages_sum_to_hundred() {
        let store = sample_store();
        let shares = QueryCatalog::new(&store).claim_status_percentages().unwrap();

        assert_eq!(shares.len(), 3);
        assert_eq!(shares[0].status, ClaimStatus::Completed);
        assert!((shares[0].percentage - 37.5).abs() < 1e-9);
        let sum: f64 = shares.iter().map(|s| s.percentage).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_status_percentages_empty_claims() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store.load::<Claim>(&[]).unwrap();
        assert!(QueryCatalog::new(&store).claim_status_percentages().unwrap().is_empty());
    }

    #[test]
    fn test_average_is_over_receiver_sums() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .load(&[
                Receiver::new(1, "R1", "NGO", "X"),
                Receiver::new(2, "R2", "NGO", "X"),
            ])
            .unwrap();
        store
            .load(&[
                listing(1, "A", 10, 1, "X", "Vegan", "Lunch"),
                listing(2, "B", 20, 1, "X", "Vegan", "Lunch"),
                listing(3, "C", 5, 1, "X", "Vegan", "Lunch"),
            ])
            .unwrap();
        store
            .load(&[
                Claim::new(1, 1, 1, ClaimStatus::Completed),
                Claim::new(2, 2, 1, ClaimStatus::Completed),
                Claim::new(3, 3, 2, ClaimStatus::Completed),
                Claim::new(4, 3, 2, ClaimStatus::Pending),
            ])
            .unwrap();

        let avg = QueryCatalog::new(&store)
            .average_completed_quantity_per_receiver()
            .unwrap()
            .unwrap();
        assert!((avg - 17.5).abs() < 1e-9);
    }

    #[test]
    fn test_average_without_completed_claims_is_absent() {
        let mut store = sample_store();
        store
            .load(&[Claim::new(1, 100, 10, ClaimStatus::Pending)])
            .unwrap();
        assert_eq!(
            QueryCatalog::new(&store).average_completed_quantity_per_receiver().unwrap(),
            None
        );
    }

    #[test]
    fn test_top_meal_type_by_claims() {
        let store = sample_store();
        // Dinner: claims 2, 4, 8 on Soup.
        assert_eq!(
            QueryCatalog::new(&store).top_meal_type_by_claims().unwrap(),
            Some(t("Dinner", 3))
        );
    }

    #[test]
    fn test_top1_ties_prefer_first_appearance() {
        // Every group has exactly one row; the first-loaded group must win
        // even where it sorts last alphabetically.
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .load(&[
                Provider::new(1, "Z", "Restaurant", "Beta", "555-0001"),
                Provider::new(2, "A", "Grocery Store", "Alpha", "555-0002"),
            ])
            .unwrap();
        store
            .load(&[
                listing(1, "Bread", 5, 1, "Beta", "Vegan", "Lunch"),
                listing(2, "Soup", 5, 2, "Alpha", "Vegan", "Dinner"),
            ])
            .unwrap();
        store
            .load(&[
                Claim::new(1, 1, 1, ClaimStatus::Completed),
                Claim::new(2, 2, 2, ClaimStatus::Completed),
            ])
            .unwrap();

        let catalog = QueryCatalog::new(&store);
        assert_eq!(catalog.top_provider_type().unwrap(), Some(t("Restaurant", 1)));
        assert_eq!(catalog.top_listing_city().unwrap(), Some(t("Beta", 1)));
        assert_eq!(catalog.top_provider_by_completed_claims().unwrap(), Some(t("Z", 1)));
        assert_eq!(catalog.top_meal_type_by_claims().unwrap(), Some(t("Lunch", 1)));
    }

    #[test]
    fn test_donated_requires_claims() {
        let mut store = SqliteStore::open_in_memory().unwrap();
        store
            .load(&[Provider::new(1, "A", "Grocery", "X", "555")])
            .unwrap();
        store
            .load(&[listing(1, "Bread", 50, 1, "X", "Vegan", "Lunch")])
            .unwrap();
        store.load::<Claim>(&[]).unwrap();

        let catalog = QueryCatalog::new(&store);
        assert!(catalog.donated_quantity_per_provider().unwrap().is_empty());
        assert_eq!(
            catalog.total_quantity_per_provider().unwrap(),
            vec![QuantityTotal { name: "A".into(), total: 50 }]
        );
    }

    #[test]
    fn test_donated_quantity_per_provider() {
        let store = sample_store();
        // Gonzales: 10 (x2 claims) + 20 (x3 claims); Barry: 5 (x2) + 7 (x1); Nielsen unclaimed.
        assert_eq!(
            QueryCatalog::new(&store).donated_quantity_per_provider().unwrap(),
            vec![
                QuantityTotal { name: "Gonzales Inc".into(), total: 80 },
                QuantityTotal { name: "Barry Group".into(), total: 17 },
            ]
        );
    }

    #[test]
    fn test_absent_tables_yield_no_rows() {
        let store = SqliteStore::open_in_memory().unwrap();
        let catalog = QueryCatalog::new(&store);

        assert!(catalog.providers_per_city().unwrap().is_empty());
        assert!(catalog.top_receivers_by_claims().unwrap().is_empty());
        assert!(catalog.claims_per_food().unwrap().is_empty());
        assert!(catalog.provider_contacts("Springfield").unwrap().is_empty());
        assert_eq!(catalog.top_provider_type().unwrap(), None);
        assert_eq!(catalog.average_completed_quantity_per_receiver().unwrap(), None);
        assert_eq!(catalog.summary_counts().unwrap(), DbStats::default());
    }

    #[test]
    fn test_summary_and_type_counts() {
        let store = sample_store();
        let catalog = QueryCatalog::new(&store);

        let counts = catalog.summary_counts().unwrap();
        assert_eq!(counts.providers, Some(3));
        assert_eq!(counts.receivers, Some(4));
        assert_eq!(counts.food_listings, Some(5));
        assert_eq!(counts.claims, Some(8));

        assert_eq!(
            catalog.receiver_type_counts().unwrap(),
            vec![t("NGO", 2), t("Shelter", 1), t("Individual", 1)]
        );
        assert_eq!(
            catalog.claim_status_counts().unwrap(),
            vec![t("Completed", 3), t("Pending", 3), t("Canceled", 2)]
        );
    }
}
