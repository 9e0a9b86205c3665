use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{MonthlySales, ProductSalesForecast, SalesForecast, TotalSales};
use crate::services::{analytics_service, forecasting_service};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/forecast/:user_id", get(get_sales_forecast))
        .route(
            "/forecast/:user_id/product/:product_id",
            get(get_product_forecast),
        )
        .route("/summary/monthly/:user_id", get(get_monthly_sales))
        .route("/summary/total/:user_id", get(get_total_sales))
}

#[derive(Debug, Deserialize)]
struct ForecastQuery {
    days: Option<u32>,
}

impl ForecastQuery {
    fn horizon(&self) -> u32 {
        self.days
            .unwrap_or(forecasting_service::DEFAULT_HORIZON_DAYS)
            .clamp(1, 365)
    }
}

async fn get_sales_forecast(
    Path(user_id): Path<Uuid>,
    Query(params): Query<ForecastQuery>,
    State(state): State<AppState>,
) -> Result<Json<SalesForecast>, AppError> {
    forecasting_service::sales_forecast(state.sales.as_ref(), user_id, params.horizon())
        .await
        .map(Json)
}

async fn get_product_forecast(
    Path((user_id, product_id)): Path<(Uuid, Uuid)>,
    Query(params): Query<ForecastQuery>,
    State(state): State<AppState>,
) -> Result<Json<ProductSalesForecast>, AppError> {
    forecasting_service::product_sales_forecast(
        state.sales.as_ref(),
        user_id,
        product_id,
        params.horizon(),
    )
    .await
    .map(Json)
}

async fn get_monthly_sales(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<MonthlySales>, AppError> {
    analytics_service::monthly_sales(state.sales.as_ref(), user_id)
        .await
        .map(Json)
}

async fn get_total_sales(
    Path(user_id): Path<Uuid>,
    State(state): State<AppState>,
) -> Result<Json<TotalSales>, AppError> {
    analytics_service::total_sales_amount(state.sales.as_ref(), user_id)
        .await
        .map(Json)
}
