use crate::error::config::ConfigError;

const DEFAULT_DELIVERY_WORKERS: usize = 4;

pub struct Config {
    pub database_url: String,
    pub valkey_url: String,
    pub telegram_bot_token: String,
    /// Maximum concurrent channel sends, independent of comparison
    /// concurrency.
    pub delivery_workers: usize,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            database_url: require("DATABASE_URL")?,
            valkey_url: require("VALKEY_URL")?,
            telegram_bot_token: require("TELEGRAM_BOT_TOKEN")?,
            delivery_workers: parse_or("DELIVERY_WORKERS", DEFAULT_DELIVERY_WORKERS)?,
        })
    }
}

fn require(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingVar { name })
}

fn parse_or(name: &'static str, default: usize) -> Result<usize, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value.parse().map_err(|_| ConfigError::InvalidVar {
            name,
            reason: format!("{:?} is not a number", value),
        }),
        Err(_) => Ok(default),
    }
}
