use axum::{routing::post, Router};

use crate::price::{handler, service::PriceService};

pub fn price_routes(service: PriceService) -> Router {
    Router::new()
        .route("/crypto-price", post(handler::get_crypto_price))
        .with_state(service)
}
