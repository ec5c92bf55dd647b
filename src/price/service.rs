use std::time::Duration;

use serde_json::Value;
use tracing::debug;

use crate::price::model::PriceOutcome;

/// Fetches spot prices from the CoinGecko `/simple/price` endpoint.
#[derive(Debug, Clone)]
pub struct PriceService {
    base_url: String,
    timeout: Duration,
}

impl PriceService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Looks up the current price of `crypto_id` quoted in `currency`.
    ///
    /// Never returns an error: every transport, timeout, or parse failure is
    /// folded into `PriceOutcome::TransportError`.
    pub async fn lookup(&self, crypto_id: &str, currency: &str) -> PriceOutcome {
        match self.fetch(crypto_id, currency).await {
            Ok(outcome) => outcome,
            Err(err) => PriceOutcome::TransportError {
                message: err.to_string(),
            },
        }
    }

    async fn fetch(&self, crypto_id: &str, currency: &str) -> Result<PriceOutcome, reqwest::Error> {
        let url = format!("{}/simple/price", self.base_url);
        debug!("Fetching {} price in {} from {}", crypto_id, currency, url);

        // One client per lookup; no connection reuse across calls.
        let client = reqwest::Client::builder().timeout(self.timeout).build()?;
        let response = client
            .get(&url)
            .query(&[("ids", crypto_id), ("vs_currencies", currency)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Ok(PriceOutcome::UpstreamError {
                status: status.as_u16(),
                body,
            });
        }

        let data: Value = response.json().await?;
        let Some(entry) = data.get(crypto_id) else {
            return Ok(PriceOutcome::NotFound {
                crypto_id: crypto_id.to_string(),
            });
        };

        match entry.get(currency) {
            Some(Value::Number(price)) => Ok(PriceOutcome::Found {
                crypto_id: crypto_id.to_string(),
                currency: currency.to_string(),
                price: price.clone(),
            }),
            _ => Ok(PriceOutcome::TransportError {
                message: format!(
                    "no '{}' quote for '{}' in upstream response",
                    currency, crypto_id
                ),
            }),
        }
    }
}
