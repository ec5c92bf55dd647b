use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crypto_price_tracker::{api, config::Config, price::service::PriceService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");

    // Build our application with routes
    let prices = PriceService::new(config.coingecko_base_url.clone(), config.request_timeout);
    let app = api::router::create_router(prices);

    // Run our application
    let addr = format!("{}:{}", config.host, config.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
