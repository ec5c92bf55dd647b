pub mod api;
pub mod config;
pub mod error;
pub mod mcp;
pub mod price;

// Re-export common modules
pub use api::router;
pub use config::Config;
pub use error::AppError;
pub use price::service::PriceService;
