//! Runtime configuration, read from the environment at start-up.

use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "HANDLING_BIND_ADDR";
pub const DOCS_DIR_VAR: &str = "HANDLING_DOCS_DIR";
pub const SEED_SAMPLE_DATA_VAR: &str = "HANDLING_SEED_SAMPLE_DATA";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DOCS_DIR: &str = "crates/api/docs";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidBindAddr { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: SocketAddr,
    /// Directory served under `/handling/v1/docs`.
    pub docs_dir: PathBuf,
    /// Seed the in-memory handling service with sample cargos, voyages and locations.
    pub seed_sample_data: bool,
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build a config from an arbitrary variable source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let raw_addr = lookup(BIND_ADDR_VAR).unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = raw_addr
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidBindAddr {
                var: BIND_ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let docs_dir = lookup(DOCS_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DOCS_DIR));

        let seed_sample_data = match lookup(SEED_SAMPLE_DATA_VAR) {
            None => true,
            Some(raw) => raw.parse::<bool>().unwrap_or_else(|_| {
                tracing::warn!(
                    value = %raw,
                    "{SEED_SAMPLE_DATA_VAR} is not a boolean; seeding sample data"
                );
                true
            }),
        };

        Ok(Self {
            bind_addr,
            docs_dir,
            seed_sample_data,
        })
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            docs_dir: PathBuf::from(DEFAULT_DOCS_DIR),
            seed_sample_data: true,
        }
    }
}
