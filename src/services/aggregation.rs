use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DailySales, ProductDailySales, SaleRecord};

/// Collapse raw sales into one point per distinct sale date, sorted
/// ascending. Pure function; empty input gives empty output.
pub fn aggregate_by_date(sales: &[SaleRecord]) -> Vec<DailySales> {
    let mut by_date: HashMap<NaiveDate, DailySales> = HashMap::new();

    for sale in sales {
        let entry = by_date.entry(sale.sale_date).or_insert_with(|| DailySales {
            date: sale.sale_date,
            total_amount: 0.0,
            total_quantity: 0,
            count: 0,
        });
        entry.total_amount += sale.total_amount;
        entry.total_quantity += sale.quantity;
        entry.count += 1;
    }

    let mut points: Vec<DailySales> = by_date.into_values().collect();
    points.sort_by_key(|p| p.date);
    points
}

/// Same collapse for a single product's sales, keeping the quantity-first
/// shape the product forecast reports.
pub fn aggregate_product_by_date(sales: &[SaleRecord]) -> Vec<ProductDailySales> {
    let mut by_date: HashMap<NaiveDate, ProductDailySales> = HashMap::new();

    for sale in sales {
        let entry = by_date
            .entry(sale.sale_date)
            .or_insert_with(|| ProductDailySales {
                date: sale.sale_date,
                quantity: 0,
                amount: 0.0,
            });
        entry.quantity += sale.quantity;
        entry.amount += sale.total_amount;
    }

    let mut points: Vec<ProductDailySales> = by_date.into_values().collect();
    points.sort_by_key(|p| p.date);
    points
}
