// src/config.rs

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_WORKERS: usize = 8;
const DEFAULT_CATALOG: &str = "data/shoes.json";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("SHOE_CARD_ADDR is not a socket address: {0}")]
    InvalidAddr(String),
    #[error("SHOE_CARD_WORKERS must be a positive integer: {0}")]
    InvalidWorkers(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub max_workers: usize,
    pub catalog_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("SHOE_CARD_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr: SocketAddr = addr_raw
            .parse()
            .map_err(|_| ConfigError::InvalidAddr(addr_raw.clone()))?;

        let max_workers = match lookup("SHOE_CARD_WORKERS") {
            Some(raw) => match raw.parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidWorkers(raw)),
            },
            None => DEFAULT_WORKERS,
        };

        let catalog_path = lookup("SHOE_CARD_CATALOG")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG));

        Ok(Self {
            addr,
            max_workers,
            catalog_path,
        })
    }
}
