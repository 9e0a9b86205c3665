use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::routes::{health, sales};
use crate::state::AppState;

pub fn create_app(state: AppState) -> Router {
    // The original deployment fronts a browser SPA on another origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::<AppState>::new()
        .nest("/health", health::router())
        .nest("/api/sales", sales::router())
        .layer(cors)
        .with_state(state)
}
