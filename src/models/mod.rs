mod analytics;
mod forecast;
mod sale;

pub use analytics::{MonthlySales, TotalSales};
pub use forecast::{
    DailySales, ForecastStatistics, ProductDailySales, ProductForecastPoint,
    ProductSalesForecast, SalesForecast, SalesForecastPoint,
};
pub use sale::SaleRecord;
