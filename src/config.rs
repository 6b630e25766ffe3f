use std::env;
use std::path::PathBuf;
use anyhow::{Context, Result};

/// Directory holding `bookmark.json` when `DATA_DIR` is not set
pub const DEFAULT_DATA_DIR: &str = "BMdata";

/// Largest accepted request body (50 MB)
pub const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub service_port: u16,
    pub service_host: String,
    pub body_limit_bytes: usize,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let data_dir = env::var("DATA_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let service_port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            data_dir,
            service_port,
            service_host,
            body_limit_bytes: MAX_BODY_BYTES,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Data directory: {}", self.data_dir.display());
        tracing::info!("  Request body limit: {} bytes", self.body_limit_bytes);
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}
