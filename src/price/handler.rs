use axum::{extract::State, http::StatusCode, Json};

use crate::price::{
    model::{ErrorResponse, PriceOutcome, PriceRequest, PriceResponse},
    service::PriceService,
};

pub async fn get_crypto_price(
    State(service): State<PriceService>,
    body: Option<Json<PriceRequest>>,
) -> Result<Json<PriceResponse>, (StatusCode, Json<ErrorResponse>)> {
    // A missing or unparseable body is treated the same as a missing field.
    let request = body.map(|Json(request)| request);

    let crypto_id = match request.as_ref().and_then(|r| r.crypto_id.as_deref()) {
        Some(id) if !id.is_empty() => id.to_string(),
        _ => {
            let error_response = ErrorResponse {
                error: "Missing 'crypto_id' in request".to_string(),
            };
            return Err((StatusCode::BAD_REQUEST, Json(error_response)));
        }
    };
    let currency = request
        .and_then(|r| r.currency)
        .unwrap_or_else(|| "usd".to_string());

    let outcome = service.lookup(&crypto_id, &currency).await;
    match &outcome {
        PriceOutcome::Found { .. } => Ok(Json(PriceResponse {
            result: outcome.render(),
        })),
        PriceOutcome::NotFound { .. } => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: outcome.render(),
            }),
        )),
        PriceOutcome::UpstreamError { .. } | PriceOutcome::TransportError { .. } => Err((
            StatusCode::BAD_GATEWAY,
            Json(ErrorResponse {
                error: outcome.render(),
            }),
        )),
    }
}
