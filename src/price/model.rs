use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceRequest {
    pub crypto_id: Option<String>,
    pub currency: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PriceResponse {
    pub result: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Outcome of a single lookup against the upstream price API.
#[derive(Debug, Clone, PartialEq)]
pub enum PriceOutcome {
    Found {
        crypto_id: String,
        currency: String,
        price: Number,
    },
    NotFound {
        crypto_id: String,
    },
    UpstreamError {
        status: u16,
        body: String,
    },
    TransportError {
        message: String,
    },
}

impl PriceOutcome {
    /// Renders the outcome as the human-readable string both front-ends return.
    pub fn render(&self) -> String {
        match self {
            PriceOutcome::Found {
                crypto_id,
                currency,
                price,
            } => format!(
                "The current price of {} is {} {}",
                crypto_id,
                price,
                currency.to_uppercase()
            ),
            PriceOutcome::NotFound { crypto_id } => format!(
                "Cryptocurrency '{}' not found. Please check the ID and try again.",
                crypto_id
            ),
            PriceOutcome::UpstreamError { status, body } => {
                format!("API Error: {} - {}", status, body)
            }
            PriceOutcome::TransportError { message } => {
                format!("Error fetching price data: {}", message)
            }
        }
    }
}
