use axum::{http::StatusCode, routing::get, Json, Router};
use serde_json::json;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::price::{routes::price_routes, service::PriceService};

pub fn create_router(prices: PriceService) -> Router {
    // Setup CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .merge(price_routes(prices))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn health_check() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "success",
            "message": "Server is running"
        })),
    )
}
