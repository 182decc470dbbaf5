//! Environment-driven runtime configuration.

use crate::error::ConfigError;

pub const DEFAULT_BIND: &str = "0.0.0.0:3000";
pub const DEFAULT_APIKEY_HEADER: &str = "X-ApiKey-Backend";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub bind_addr: String,
    pub apikey_header: String,
    /// Shared secret clients must present. `None` disables the check
    /// (useful for local development only).
    pub apikey_secret: Option<String>,
}

impl Config {
    /// Reads configuration from the environment, loading `.env` first.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let database_url =
            std::env::var("DATABASE_URL").map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?;
        let bind_addr = std::env::var("QUIZD_BIND").unwrap_or_else(|_| DEFAULT_BIND.into());
        let apikey_header =
            std::env::var("QUIZD_APIKEY_HEADER").unwrap_or_else(|_| DEFAULT_APIKEY_HEADER.into());
        let apikey_secret = std::env::var("QUIZD_APIKEY").ok().filter(|s| !s.is_empty());
        Ok(Self {
            database_url,
            bind_addr,
            apikey_header,
            apikey_secret,
        })
    }
}
