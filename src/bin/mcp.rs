use rmcp::{transport::stdio, ServiceExt};
use tracing::info;
use tracing_subscriber::FmtSubscriber;

use crypto_price_tracker::{config::Config, mcp::CryptoPriceServer, price::service::PriceService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; stdout carries the protocol, so log to stderr
    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set subscriber");

    let prices = PriceService::new(config.coingecko_base_url.clone(), config.request_timeout);

    info!("Starting crypto_price_tracker MCP server on stdio");
    let service = CryptoPriceServer::new(prices).serve(stdio()).await?;
    service.waiting().await?;

    Ok(())
}
