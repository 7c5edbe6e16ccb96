pub struct Icons;

impl Icons {
    pub const ROCKET: &str = "🚀";
    pub const CHECK: &str = "✅";
    pub const WARN: &str = "⚠️";
    pub const STATS: &str = "📊";
    pub const DATABASE: &str = "🗄️";
    pub const EMPTY: &str = "∅";
    pub const PROVIDER: &str = "🏪";
    pub const RECEIVER: &str = "🤝";
    pub const FOOD: &str = "🥫";
    pub const CLAIM: &str = "📦";
    pub const PHONE: &str = "📱";

    /// Tile icon for a table
    pub fn for_table(table: crate::model::Table) -> &'static str {
        use crate::model::Table;
        match table {
            Table::Providers => Self::PROVIDER,
            Table::Receivers => Self::RECEIVER,
            Table::FoodListings => Self::FOOD,
            Table::Claims => Self::CLAIM,
        }
    }
}
