use chrono::Datelike;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{MonthlySales, TotalSales};
use crate::store::SaleStore;

/// Sales amount per calendar month (12 buckets, January first) across all
/// years of a user's history. Dashboard chart input.
pub async fn monthly_sales(store: &dyn SaleStore, user_id: Uuid) -> Result<MonthlySales, AppError> {
    let sales = store.fetch_sales(user_id).await?;

    let mut amounts = vec![0.0f64; 12];
    for sale in &sales {
        amounts[sale.sale_date.month0() as usize] += sale.total_amount;
    }

    Ok(MonthlySales { sales_amount: amounts })
}

/// Lifetime total sales amount for a user.
pub async fn total_sales_amount(
    store: &dyn SaleStore,
    user_id: Uuid,
) -> Result<TotalSales, AppError> {
    let sales = store.fetch_sales(user_id).await?;
    let total = sales.iter().map(|s| s.total_amount).sum();

    Ok(TotalSales { total_sale_amount: total })
}
