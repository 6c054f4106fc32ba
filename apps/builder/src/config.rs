use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{bail, Context, Result};

/// Where the saved document lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    File,
    Memory,
    Redis,
}

impl FromStr for StoreBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(StoreBackend::File),
            "memory" => Ok(StoreBackend::Memory),
            "redis" => Ok(StoreBackend::Redis),
            other => bail!("STORE_BACKEND must be one of file, memory, redis (got '{other}')"),
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values, or when the Redis backend is
/// selected without `REDIS_URL`.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub store_backend: StoreBackend,
    pub data_dir: PathBuf,
    pub redis_url: Option<String>,
    pub storage_key: String,
    pub saved_flash_ms: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let store_backend: StoreBackend = env_or("STORE_BACKEND", "file").parse()?;
        let redis_url = match store_backend {
            StoreBackend::Redis => Some(require_env("REDIS_URL")?),
            _ => std::env::var("REDIS_URL").ok(),
        };

        Ok(Config {
            port: env_or("PORT", "8080")
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: env_or("RUST_LOG", "info"),
            store_backend,
            data_dir: PathBuf::from(env_or("DATA_DIR", "./data")),
            redis_url,
            storage_key: env_or("STORAGE_KEY", "cv-builder-data"),
            saved_flash_ms: env_or("SAVED_FLASH_MS", "2000")
                .parse::<u64>()
                .context("SAVED_FLASH_MS must be a whole number of milliseconds")?,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            store_backend: StoreBackend::File,
            data_dir: PathBuf::from("./data"),
            redis_url: None,
            storage_key: "cv-builder-data".to_string(),
            saved_flash_ms: 2000,
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
