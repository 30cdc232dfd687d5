use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::news::DEFAULT_BASE_URL;

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Optional JSON catalog replacing the builtin reference tables.
    pub catalog_path: Option<PathBuf>,
    pub news_base_url: String,
    pub news_limit: usize,
    pub news_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Config {
            port: parse_or(&lookup, "PORT", 8080).context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            catalog_path: lookup("CATALOG_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            news_base_url: lookup("NEWS_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            news_limit: parse_or(&lookup, "NEWS_LIMIT", 5)
                .context("NEWS_LIMIT must be a non-negative integer")?,
            news_timeout_secs: parse_or(&lookup, "NEWS_TIMEOUT_SECS", 10)
                .context("NEWS_TIMEOUT_SECS must be a non-negative integer")?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("invalid value '{raw}' for {key}")),
        None => Ok(default),
    }
}
