use chrono::Duration;
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{
    DailySales, ForecastStatistics, ProductForecastPoint, ProductSalesForecast, SalesForecast,
    SalesForecastPoint,
};
use crate::services::aggregation;
use crate::services::regression::{self, FitError};
use crate::store::SaleStore;

pub const DEFAULT_HORIZON_DAYS: u32 = 7;

const INSUFFICIENT_SALES_MSG: &str =
    "Insufficient data for prediction. Need at least 2 sales records.";
const INSUFFICIENT_PRODUCT_MSG: &str =
    "Insufficient data for this product. Need at least 2 sales records.";
const INSUFFICIENT_VARIANCE_MSG: &str =
    "Insufficient variance in sales dates for prediction.";

/// Forecast a user's daily sales revenue `horizon_days` into the future.
///
/// Aggregates the user's sales per date, fits a least-squares line over
/// (days since first sale, total amount) and extrapolates forward. Needs
/// at least two distinct sale dates; with fewer, returns the advisory
/// insufficient-data result instead of an error.
pub async fn sales_forecast(
    store: &dyn SaleStore,
    user_id: Uuid,
    horizon_days: u32,
) -> Result<SalesForecast, AppError> {
    info!(
        "Generating sales forecast for user {} ({} days ahead)",
        user_id, horizon_days
    );

    let sales = store.fetch_sales(user_id).await?;
    if sales.len() < 2 {
        return Ok(SalesForecast::insufficient(INSUFFICIENT_SALES_MSG));
    }

    let daily = aggregation::aggregate_by_date(&sales);
    if daily.len() < 2 {
        // Two or more records but a single distinct date: a single point
        // cannot determine a slope.
        return Ok(SalesForecast::insufficient(INSUFFICIENT_SALES_MSG));
    }

    let (x, y) = build_series(&daily, |p| p.total_amount);

    let fit = match regression::fit(&x, &y) {
        Ok(fit) => fit,
        Err(FitError::ZeroVariance) | Err(FitError::TooFewPoints(_)) => {
            // Unreachable given distinct sorted dates, but a degenerate fit
            // is an informational outcome, never a 500.
            return Ok(SalesForecast::insufficient(INSUFFICIENT_VARIANCE_MSG));
        }
    };
    debug!(
        "Fitted sales trend: slope={} intercept={} r2={}",
        fit.slope, fit.intercept, fit.r2
    );

    let last_date = daily[daily.len() - 1].date;
    let last_x = x[x.len() - 1];

    let mut predictions = Vec::with_capacity(horizon_days as usize);
    for day in 1..=horizon_days {
        let predicted = fit.predict(last_x + day as f64).max(0.0);
        predictions.push(SalesForecastPoint {
            date: last_date + Duration::days(day as i64),
            predicted_amount: round2(predicted),
            confidence: confidence(sales.len(), day),
        });
    }

    let avg_historical = y.iter().sum::<f64>() / y.len() as f64;
    let avg_predicted = if predictions.is_empty() {
        0.0
    } else {
        predictions.iter().map(|p| p.predicted_amount).sum::<f64>() / predictions.len() as f64
    };

    Ok(SalesForecast {
        predictions,
        historical_data: daily,
        statistics: Some(ForecastStatistics {
            average_historical_amount: round2(avg_historical),
            average_predicted_amount: round2(avg_predicted),
            r2: fit.r2,
            slope: fit.slope,
            intercept: fit.intercept,
        }),
        message: None,
    })
}

/// Forecast units sold of a single product for one user. Same pipeline as
/// [`sales_forecast`] filtered to the product, with summed quantity as the
/// fitted metric.
pub async fn product_sales_forecast(
    store: &dyn SaleStore,
    user_id: Uuid,
    product_id: Uuid,
    horizon_days: u32,
) -> Result<ProductSalesForecast, AppError> {
    info!(
        "Generating product forecast for user {} product {} ({} days ahead)",
        user_id, product_id, horizon_days
    );

    let sales = store.fetch_product_sales(user_id, product_id).await?;
    if sales.len() < 2 {
        let known_product = sales.first().map(|s| s.product_id);
        return Ok(ProductSalesForecast::insufficient(
            known_product,
            INSUFFICIENT_PRODUCT_MSG,
        ));
    }

    let daily = aggregation::aggregate_product_by_date(&sales);
    if daily.len() < 2 {
        return Ok(ProductSalesForecast::insufficient(
            Some(product_id),
            INSUFFICIENT_PRODUCT_MSG,
        ));
    }

    let first_date = daily[0].date;
    let x: Vec<f64> = daily
        .iter()
        .map(|p| (p.date - first_date).num_days() as f64)
        .collect();
    let y: Vec<f64> = daily.iter().map(|p| p.quantity as f64).collect();

    let fit = match regression::fit(&x, &y) {
        Ok(fit) => fit,
        Err(FitError::ZeroVariance) | Err(FitError::TooFewPoints(_)) => {
            return Ok(ProductSalesForecast::insufficient(
                Some(product_id),
                INSUFFICIENT_VARIANCE_MSG,
            ));
        }
    };

    let last_date = daily[daily.len() - 1].date;
    let last_x = x[x.len() - 1];

    let mut predictions = Vec::with_capacity(horizon_days as usize);
    for day in 1..=horizon_days {
        let predicted = fit.predict(last_x + day as f64).max(0.0);
        predictions.push(ProductForecastPoint {
            date: last_date + Duration::days(day as i64),
            predicted_quantity: round2(predicted),
            confidence: confidence(sales.len(), day),
        });
    }

    Ok(ProductSalesForecast {
        predictions,
        historical_data: daily,
        product_id: Some(product_id),
        message: None,
    })
}

/// Forecast confidence in percent, bounded to [30, 95].
///
/// More historical records raise the ceiling (capped at 95), each day of
/// horizon subtracts 3 points, floored at 30. A presentation heuristic,
/// not a statistical confidence interval.
pub fn confidence(data_points: usize, days_ahead: u32) -> f64 {
    let base = (50.0 + 2.0 * data_points as f64).min(95.0);
    (base - 3.0 * days_ahead as f64).max(30.0)
}

/// Map aggregated points to regression inputs: days since the first sale
/// date on x, the chosen metric on y.
fn build_series<F>(daily: &[DailySales], metric: F) -> (Vec<f64>, Vec<f64>)
where
    F: Fn(&DailySales) -> f64,
{
    let first_date = daily[0].date;
    let x = daily
        .iter()
        .map(|p| (p.date - first_date).num_days() as f64)
        .collect();
    let y = daily.iter().map(metric).collect();
    (x, y)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
