//! Server configuration read from `RENTAL_*` environment variables.

use anyhow::{anyhow, bail, Context, Result};
use shared::WeekStart;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::backend::storage::csv::CsvConnection;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";

/// Where properties and availability periods are kept
#[derive(Debug, Clone, PartialEq)]
pub enum StorageBackend {
    Csv { data_dir: PathBuf },
    Remote { base_url: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    pub storage: StorageBackend,
    pub week_start: WeekStart,
    pub cors_origin: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup; unset and blank values take defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let bind_addr = var("RENTAL_BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse()
            .context("RENTAL_BIND_ADDR must be a socket address such as 127.0.0.1:3000")?;

        let storage = match var("RENTAL_STORAGE").as_deref().unwrap_or("csv") {
            "csv" => {
                let data_dir = match var("RENTAL_DATA_DIR") {
                    Some(dir) => PathBuf::from(dir),
                    None => CsvConnection::get_default_data_directory()?,
                };
                StorageBackend::Csv { data_dir }
            }
            "remote" => {
                let base_url = var("RENTAL_REMOTE_API_URL")
                    .context("RENTAL_REMOTE_API_URL is required when RENTAL_STORAGE=remote")?;
                StorageBackend::Remote { base_url }
            }
            other => bail!("RENTAL_STORAGE must be 'csv' or 'remote', got '{}'", other),
        };

        let week_start = match var("RENTAL_WEEK_START") {
            Some(value) => value
                .parse::<WeekStart>()
                .map_err(|e| anyhow!("RENTAL_WEEK_START: {}", e))?,
            None => WeekStart::default(),
        };

        let cors_origin = var("RENTAL_CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string());

        Ok(Self {
            bind_addr,
            storage,
            week_start,
            cors_origin,
        })
    }
}
