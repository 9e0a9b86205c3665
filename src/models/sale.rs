use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A single recorded sale. Immutable once created; the forecasting
/// pipeline is a read-only consumer of these rows.
///
/// `sale_date` is a calendar date with no time component. Keeping it as a
/// typed `NaiveDate` means a malformed date cannot reach the aggregation
/// step in the first place.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct SaleRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub store_id: Option<Uuid>,
    pub quantity: i64,
    pub sale_date: NaiveDate,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
}

impl SaleRecord {
    pub fn new(
        user_id: Uuid,
        product_id: Uuid,
        store_id: Option<Uuid>,
        quantity: i64,
        sale_date: NaiveDate,
        total_amount: f64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            product_id,
            store_id,
            quantity,
            sale_date,
            total_amount,
            created_at: Utc::now(),
        }
    }
}
