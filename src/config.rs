use std::env;
use std::time::Duration;

use tracing::Level;

use crate::error::AppError;

pub const DEFAULT_COINGECKO_BASE_URL: &str = "https://api.coingecko.com/api/v3";

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub app_env: AppEnv,
    pub coingecko_base_url: String,
    pub request_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEnv {
    Development,
    Production,
    Test,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        // Server config
        let port = env::var("PORT")
            .unwrap_or_else(|_| "5000".into())
            .parse::<u16>()
            .map_err(|_| AppError::ConfigError("Invalid PORT".into()))?;

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let app_env_str = env::var("APP_ENV").unwrap_or_else(|_| "development".into());
        let app_env = match app_env_str.to_lowercase().as_str() {
            "production" => AppEnv::Production,
            "test" => AppEnv::Test,
            _ => AppEnv::Development,
        };

        // Upstream config
        let coingecko_base_url = env::var("COINGECKO_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_COINGECKO_BASE_URL.into());

        let request_timeout_secs = env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse::<u64>()
            .map_err(|_| AppError::ConfigError("Invalid REQUEST_TIMEOUT_SECS".into()))?;

        Ok(Self {
            port,
            host,
            app_env,
            coingecko_base_url,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }

    pub fn log_level(&self) -> Level {
        match self.app_env {
            AppEnv::Production => Level::INFO,
            _ => Level::DEBUG,
        }
    }
}
