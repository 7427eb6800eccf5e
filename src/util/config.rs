use std::{env, path::PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::infra::{PlatformStore, StorageError};

const APP_QUALIFIER: &str = "in";
const APP_ORG: &str = "HomeValueOracle";
const APP_NAME: &str = "HomeValueOracle";

pub const ENV_DATA_DIR: &str = "HOME_VALUE_ORACLE_DATA_DIR";
pub const ENV_LOG: &str = "HOME_VALUE_ORACLE_LOG";
pub const ENV_SEED: &str = "HOME_VALUE_ORACLE_SEED";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("HOME_VALUE_ORACLE_SEED must be an unsigned integer, got {0:?}")]
    InvalidSeed(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Where the desktop build keeps its key files. `None` when neither the
    /// override nor a platform data directory exists.
    pub data_dir: Option<PathBuf>,
    pub log_filter: String,
    /// Fixes the jitter sequence, for demos and screenshots.
    pub jitter_seed: Option<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            jitter_seed: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let present = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let data_dir = present(ENV_DATA_DIR)
            .map(PathBuf::from)
            .or_else(default_data_dir);
        let log_filter = present(ENV_LOG).unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let jitter_seed = present(ENV_SEED)
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map_err(|_| ConfigError::InvalidSeed(raw))
            })
            .transpose()?;

        Ok(Self {
            data_dir,
            log_filter,
            jitter_seed,
        })
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn open_store(&self) -> Result<PlatformStore, StorageError> {
        self.data_dir
            .as_ref()
            .map(|dir| PlatformStore::new(dir.clone()))
            .ok_or(StorageError::Unavailable)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn open_store(&self) -> Result<PlatformStore, StorageError> {
        PlatformStore::open()
    }
}

fn default_data_dir() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME).map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_set() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.jitter_seed, None);
        assert_eq!(config.data_dir, default_data_dir());
    }

    #[test]
    fn overrides_are_read() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_DATA_DIR, "/tmp/oracle"),
            (ENV_LOG, "debug"),
            (ENV_SEED, " 42 "),
        ]))
        .unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/oracle")));
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.jitter_seed, Some(42));
    }

    #[test]
    fn bad_seed_is_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_SEED, "abc")])).unwrap_err();
        assert_eq!(err, ConfigError::InvalidSeed("abc".into()));
    }

    #[test]
    fn blank_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_LOG, "  "), (ENV_SEED, "")])).unwrap();
        assert_eq!(config.log_filter, DEFAULT_LOG_FILTER);
        assert_eq!(config.jitter_seed, None);
    }

    #[test]
    fn store_opens_under_data_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };
        let store = config.open_store().unwrap();
        assert_eq!(store.root(), dir.path());
    }
}
