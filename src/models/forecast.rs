use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One day of aggregated sales across all of a user's products.
/// Derived per request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub total_quantity: i64,
    pub count: u32,
}

/// One day of aggregated sales for a single product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDailySales {
    pub date: NaiveDate,
    pub quantity: i64,
    pub amount: f64,
}

/// Projected revenue for one future day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesForecastPoint {
    pub date: NaiveDate,
    pub predicted_amount: f64,
    /// Presentation heuristic in [30, 95], not a statistical interval.
    pub confidence: f64,
}

/// Projected units sold for one future day (product-scoped variant).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductForecastPoint {
    pub date: NaiveDate,
    pub predicted_quantity: f64,
    pub confidence: f64,
}

/// Fit quality and summary numbers for a revenue forecast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastStatistics {
    pub average_historical_amount: f64,
    pub average_predicted_amount: f64,
    pub r2: f64,
    pub slope: f64,
    pub intercept: f64,
}

/// Full revenue forecast response. Insufficient data is a normal outcome:
/// empty predictions plus an advisory `message`, still a 200.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesForecast {
    pub predictions: Vec<SalesForecastPoint>,
    pub historical_data: Vec<DailySales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub statistics: Option<ForecastStatistics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SalesForecast {
    pub fn insufficient(message: impl Into<String>) -> Self {
        Self {
            predictions: Vec::new(),
            historical_data: Vec::new(),
            statistics: None,
            message: Some(message.into()),
        }
    }
}

/// Product-scoped forecast response: a product reference in place of the
/// aggregate statistics block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSalesForecast {
    pub predictions: Vec<ProductForecastPoint>,
    pub historical_data: Vec<ProductDailySales>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProductSalesForecast {
    pub fn insufficient(product_id: Option<Uuid>, message: impl Into<String>) -> Self {
        Self {
            predictions: Vec::new(),
            historical_data: Vec::new(),
            product_id,
            message: Some(message.into()),
        }
    }
}
