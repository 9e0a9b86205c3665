pub mod aggregation;
pub mod analytics_service;
pub mod forecasting_service;
pub mod regression;
