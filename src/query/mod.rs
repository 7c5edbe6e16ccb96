pub mod catalog;
pub mod result;

pub use catalog::{
    ProviderContact, QuantityTotal, QueryCatalog, StatusShare, Tally, TOP_RECEIVERS,
};
pub use result::{Cells, ResultSet};
