mod sales;

pub use sales::{InMemorySaleStore, PgSaleStore, SaleStore};
