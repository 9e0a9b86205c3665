use serde::{Deserialize, Serialize};

/// Sales amount bucketed by calendar month, January first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlySales {
    pub sales_amount: Vec<f64>,
}

/// Lifetime sales amount for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalSales {
    pub total_sale_amount: f64,
}
