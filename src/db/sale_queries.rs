use sqlx::PgPool;
use uuid::Uuid;

use crate::models::SaleRecord;

const SALE_COLUMNS: &str =
    "id, user_id, product_id, store_id, quantity, sale_date, total_amount, created_at";

/// All sales for one user, oldest date first.
pub async fn fetch_for_user(pool: &PgPool, user_id: Uuid) -> Result<Vec<SaleRecord>, sqlx::Error> {
    let sql = format!(
        "SELECT {SALE_COLUMNS}
         FROM sales
         WHERE user_id = $1
         ORDER BY sale_date ASC"
    );
    sqlx::query_as::<_, SaleRecord>(&sql)
        .bind(user_id)
        .fetch_all(pool)
        .await
}

/// Sales for one user restricted to a single product, oldest date first.
pub async fn fetch_for_user_and_product(
    pool: &PgPool,
    user_id: Uuid,
    product_id: Uuid,
) -> Result<Vec<SaleRecord>, sqlx::Error> {
    let sql = format!(
        "SELECT {SALE_COLUMNS}
         FROM sales
         WHERE user_id = $1 AND product_id = $2
         ORDER BY sale_date ASC"
    );
    sqlx::query_as::<_, SaleRecord>(&sql)
        .bind(user_id)
        .bind(product_id)
        .fetch_all(pool)
        .await
}
