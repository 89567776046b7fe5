use std::env;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration, resolved from the environment with local-dev
/// defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub data_dir: PathBuf,
    pub collection: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let bind_addr =
            env::var("JOT_API_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8791".to_string());
        let data_dir = env::var_os("JOT_API_DATA_DIR")
            .map_or_else(|| PathBuf::from("./data"), PathBuf::from);
        let collection =
            env::var("JOT_API_COLLECTION").unwrap_or_else(|_| "notes".to_string());

        if !is_valid_collection_key(&collection) {
            return Err(ConfigError::Invalid(format!(
                "collection key must be lowercase alphanumeric/_/-: {collection}"
            )));
        }

        Ok(Self {
            bind_addr,
            data_dir,
            collection,
        })
    }
}

/// Collection keys become file names; keep them to a safe charset.
fn is_valid_collection_key(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-')
}
