use std::str::FromStr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";
const DEFAULT_CHART_BASE_URL: &str = "http://chart.apis.google.com/chart?";
const DEFAULT_PHONES_PER_PAGE: u64 = 50;
const DEFAULT_PHONES_ON_INDEX: u64 = 10;
const DEFAULT_ENTRIES_PER_PAGE: u64 = 10;

pub struct Config {
    pub database_url: String,
    pub bind_address: String,

    pub phones_per_page: u64,
    pub phones_on_index: u64,
    pub entries_per_page: u64,

    pub chart_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string()),
            phones_per_page: parse_env_or("PHONES_PER_PAGE", DEFAULT_PHONES_PER_PAGE)?,
            phones_on_index: parse_env_or("PHONES_ON_INDEX", DEFAULT_PHONES_ON_INDEX)?,
            entries_per_page: parse_env_or("ENTRIES_PER_PAGE", DEFAULT_ENTRIES_PER_PAGE)?,
            chart_base_url: std::env::var("CHART_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_CHART_BASE_URL.to_string()),
        })
    }
}

/// Reads an optional environment variable, falling back to `default` when unset.
fn parse_env_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
            }),
        Err(_) => Ok(default),
    }
}
