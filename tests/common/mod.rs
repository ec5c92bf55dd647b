#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::{extract::Query, http::StatusCode, routing::get, Router};

/// A stub CoinGecko upstream bound to an ephemeral local port.
pub struct StubUpstream {
    pub base_url: String,
    /// Query parameters of every `/simple/price` request received.
    pub requests: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

/// Serves `status` and `body` from `/simple/price`, recording query params.
pub async fn spawn_upstream(status: StatusCode, body: &str) -> StubUpstream {
    let requests: Arc<Mutex<Vec<HashMap<String, String>>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();
    let body = body.to_string();

    let app = Router::new().route(
        "/simple/price",
        get(move |Query(params): Query<HashMap<String, String>>| {
            let recorded = recorded.clone();
            let body = body.clone();
            async move {
                recorded.lock().unwrap().push(params);
                (status, body)
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    StubUpstream {
        base_url: format!("http://{}", addr),
        requests,
    }
}
