//! HTTP-level tests of the sales API: routing, query-parameter handling
//! and the camelCase JSON wire shapes, served over the in-memory store.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use invensight_backend::app::create_app;
use invensight_backend::models::SaleRecord;
use invensight_backend::state::AppState;
use invensight_backend::store::InMemorySaleStore;

fn user() -> Uuid {
    Uuid::from_u128(42)
}

fn product() -> Uuid {
    Uuid::from_u128(99)
}

fn sale(date: &str, quantity: i64, amount: f64) -> SaleRecord {
    SaleRecord::new(
        user(),
        product(),
        None,
        quantity,
        date.parse().unwrap(),
        amount,
    )
}

fn app_with(sales: Vec<SaleRecord>) -> Router {
    create_app(AppState {
        sales: Arc::new(InMemorySaleStore::new(sales)),
    })
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let app = app_with(vec![]);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn forecast_uses_camel_case_wire_names() {
    let app = app_with(vec![
        sale("2025-01-10", 1, 100.0),
        sale("2025-01-11", 2, 200.0),
    ]);
    let uri = format!("/api/sales/forecast/{}?days=1", user());
    let (status, json) = get_json(app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["predictions"][0]["date"], "2025-01-12");
    assert_eq!(json["predictions"][0]["predictedAmount"], 300.0);
    assert_eq!(json["predictions"][0]["confidence"], 51.0);
    assert_eq!(json["historicalData"][0]["totalAmount"], 100.0);
    assert_eq!(json["historicalData"][0]["totalQuantity"], 1);
    assert_eq!(json["statistics"]["averageHistoricalAmount"], 150.0);
    assert_eq!(json["statistics"]["slope"], 100.0);
    assert_eq!(json["statistics"]["r2"], 1.0);
    // No advisory message on a successful forecast.
    assert!(json.get("message").is_none());
}

#[tokio::test]
async fn insufficient_data_is_a_200_with_message() {
    let app = app_with(vec![sale("2025-01-10", 1, 100.0)]);
    let uri = format!("/api/sales/forecast/{}", user());
    let (status, json) = get_json(app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["predictions"].as_array().unwrap().len(), 0);
    assert!(json["message"].as_str().unwrap().contains("Insufficient"));
    assert!(json.get("statistics").is_none());
}

#[tokio::test]
async fn default_horizon_is_seven_days_and_zero_is_clamped() {
    let sales = vec![
        sale("2025-01-10", 1, 100.0),
        sale("2025-01-11", 2, 200.0),
    ];

    let uri = format!("/api/sales/forecast/{}", user());
    let (_, json) = get_json(app_with(sales.clone()), &uri).await;
    assert_eq!(json["predictions"].as_array().unwrap().len(), 7);

    let uri = format!("/api/sales/forecast/{}?days=0", user());
    let (_, json) = get_json(app_with(sales), &uri).await;
    assert_eq!(json["predictions"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn product_forecast_reports_quantity_and_product_reference() {
    let app = app_with(vec![
        sale("2025-01-10", 10, 100.0),
        sale("2025-01-11", 20, 999.0),
    ]);
    let uri = format!("/api/sales/forecast/{}/product/{}?days=1", user(), product());
    let (status, json) = get_json(app, &uri).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["productId"], product().to_string().as_str());
    assert_eq!(json["predictions"][0]["predictedQuantity"], 30.0);
    assert_eq!(json["historicalData"][0]["quantity"], 10);
}

#[tokio::test]
async fn summary_endpoints_expose_dashboard_totals() {
    let app = app_with(vec![
        sale("2025-01-10", 1, 100.0),
        sale("2025-03-02", 1, 60.0),
    ]);

    let uri = format!("/api/sales/summary/monthly/{}", user());
    let (status, json) = get_json(app.clone(), &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["salesAmount"].as_array().unwrap().len(), 12);
    assert_eq!(json["salesAmount"][0], 100.0);
    assert_eq!(json["salesAmount"][2], 60.0);

    let uri = format!("/api/sales/summary/total/{}", user());
    let (status, json) = get_json(app, &uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["totalSaleAmount"], 160.0);
}
