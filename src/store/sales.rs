use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::sale_queries;
use crate::errors::AppError;
use crate::models::SaleRecord;

/// Read-only access to a user's sale records. The forecasting pipeline is
/// the only consumer; writes happen elsewhere.
#[async_trait]
pub trait SaleStore: Send + Sync {
    /// All sales for the user, sorted ascending by sale date.
    async fn fetch_sales(&self, user_id: Uuid) -> Result<Vec<SaleRecord>, AppError>;

    /// Sales for the user restricted to one product, sorted ascending by
    /// sale date.
    async fn fetch_product_sales(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Vec<SaleRecord>, AppError>;
}

pub struct PgSaleStore {
    pool: PgPool,
}

impl PgSaleStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SaleStore for PgSaleStore {
    async fn fetch_sales(&self, user_id: Uuid) -> Result<Vec<SaleRecord>, AppError> {
        sale_queries::fetch_for_user(&self.pool, user_id)
            .await
            .map_err(AppError::Db)
    }

    async fn fetch_product_sales(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Vec<SaleRecord>, AppError> {
        sale_queries::fetch_for_user_and_product(&self.pool, user_id, product_id)
            .await
            .map_err(AppError::Db)
    }
}

/// Fixture store backed by a plain vector. Used by the test suites; keeps
/// the pipeline exercisable without a database.
#[derive(Debug, Default, Clone)]
pub struct InMemorySaleStore {
    sales: Vec<SaleRecord>,
}

impl InMemorySaleStore {
    pub fn new(sales: Vec<SaleRecord>) -> Self {
        Self { sales }
    }
}

#[async_trait]
impl SaleStore for InMemorySaleStore {
    async fn fetch_sales(&self, user_id: Uuid) -> Result<Vec<SaleRecord>, AppError> {
        let mut matching: Vec<SaleRecord> = self
            .sales
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.sale_date);
        Ok(matching)
    }

    async fn fetch_product_sales(
        &self,
        user_id: Uuid,
        product_id: Uuid,
    ) -> Result<Vec<SaleRecord>, AppError> {
        let mut matching: Vec<SaleRecord> = self
            .sales
            .iter()
            .filter(|s| s.user_id == user_id && s.product_id == product_id)
            .cloned()
            .collect();
        matching.sort_by_key(|s| s.sale_date);
        Ok(matching)
    }
}
