// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

mod args;
mod chain;
mod error;
mod ledger;
mod log;
mod metrics;
mod sync;

pub use args::Args;
pub use chain::ChainConfig;
pub use error::ConfigError;
pub use ledger::LedgerConfig;
pub use log::LogConfig;
pub use metrics::MetricsConfig;
pub use sync::{STDOUT_OUTPUT, SyncConfig};

use serde::Deserialize;
use std::path::Path;

/// Environment variable prefix shared by every setting.
pub const ENV_PREFIX: &str = "TXN_";

/// Flat view of the `TXN_*` environment, as envy sees it.
#[derive(Debug, Deserialize)]
struct EnvConfig {
    #[serde(default = "ledger::default_url")]
    ledger_url: String,
    #[serde(default = "ledger::default_pool_size")]
    ledger_pool_size: usize,
    #[serde(default = "ledger::default_retry_backoff_ms")]
    ledger_retry_backoff_ms: u64,
    #[serde(default = "ledger::default_request_timeout_ms")]
    ledger_request_timeout_ms: u64,

    #[serde(default = "chain::default_chain_id")]
    chain_id: String,
    #[serde(default = "chain::default_bech32_prefix")]
    chain_bech32_prefix: String,

    #[serde(default = "sync::default_start_height")]
    sync_start_height: u64,
    #[serde(default = "sync::default_worker_count")]
    sync_worker_count: usize,
    #[serde(default = "sync::default_poll_interval_ms")]
    sync_poll_interval_ms: u64,
    #[serde(default = "sync::default_output")]
    sync_output: String,

    #[serde(default = "log::default_level")]
    log_level: String,
    #[serde(default)]
    log_json: bool,
    #[serde(default)]
    log_strip_ansi: bool,
    #[serde(default)]
    log_write: bool,
    #[serde(default = "log::default_write_path")]
    log_write_path: String,
    #[serde(default = "log::default_write_max_file_size")]
    log_write_max_file_size: u64,
    #[serde(default = "log::default_write_max_files")]
    log_write_max_files: usize,
    #[serde(default)]
    log_loki_url: Option<String>,

    #[serde(default)]
    metrics_enabled: bool,
    #[serde(default = "metrics::default_prefix")]
    metrics_prefix: String,
    #[serde(default = "metrics::default_textfile")]
    metrics_textfile: String,
}

impl From<EnvConfig> for IndexerConfig {
    fn from(env: EnvConfig) -> Self {
        Self {
            ledger: LedgerConfig {
                url: env.ledger_url,
                pool_size: env.ledger_pool_size,
                retry_backoff_ms: env.ledger_retry_backoff_ms,
                request_timeout_ms: env.ledger_request_timeout_ms,
            },
            chain: ChainConfig {
                chain_id: env.chain_id,
                bech32_prefix: env.chain_bech32_prefix,
            },
            sync: SyncConfig {
                start_height: env.sync_start_height,
                worker_count: env.sync_worker_count,
                poll_interval_ms: env.sync_poll_interval_ms,
                output: env.sync_output,
            },
            log: LogConfig {
                level: env.log_level,
                json: env.log_json,
                strip_ansi: env.log_strip_ansi,
                write: env.log_write,
                write_path: env.log_write_path,
                write_max_file_size: env.log_write_max_file_size,
                write_max_files: env.log_write_max_files,
                loki_url: env.log_loki_url.filter(|url| !url.is_empty()),
            },
            metrics: MetricsConfig {
                enabled: env.metrics_enabled,
                prefix: env.metrics_prefix,
                textfile: env.metrics_textfile,
            },
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndexerConfig {
    pub ledger: LedgerConfig,
    pub chain: ChainConfig,
    pub sync: SyncConfig,
    pub log: LogConfig,
    pub metrics: MetricsConfig,
}

impl IndexerConfig {
    /// Load the `.env` file named by `args` (if it exists), then read the
    /// environment and apply command line overrides.
    pub fn load(args: &Args) -> Result<Self, ConfigError> {
        if Path::new(&args.env_file).exists() {
            dotenv::from_filename(&args.env_file).map_err(|source| {
                ConfigError::EnvFileError {
                    path: args.env_file.clone(),
                    source,
                }
            })?;
        }

        let mut config = Self::from_env()?;
        if let Some(start_height) = args.start_height {
            config.sync.start_height = start_height;
            config.validate()?;
        }
        Ok(config)
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Build a validated configuration from an explicit set of variables.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let env = envy::prefixed(ENV_PREFIX).from_iter::<_, EnvConfig>(vars)?;
        let config = Self::from(env);
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.ledger.validate()?;
        self.chain.validate()?;
        self.sync.validate()?;
        self.log.validate()?;
        self.metrics.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_config() {
        let config = IndexerConfig::default();
        assert_eq!(config.ledger.url, "http://127.0.0.1:26657");
        assert_eq!(config.chain.bech32_prefix, "iaa");
        assert_eq!(config.log.level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_vars_defaults() {
        let config = IndexerConfig::from_vars(vars(&[("UNRELATED", "1")])).unwrap();
        assert_eq!(config.ledger.pool_size, 4);
        assert_eq!(config.sync.worker_count, 8);
        assert_eq!(config.chain.chain_id, "irishub-1");
    }

    #[test]
    fn test_from_vars_overrides() {
        let config = IndexerConfig::from_vars(vars(&[
            ("TXN_LEDGER_URL", "https://rpc.example.org"),
            ("TXN_LEDGER_RETRY_BACKOFF_MS", "250"),
            ("TXN_CHAIN_ID", "gon-irishub-1"),
            ("TXN_CHAIN_BECH32_PREFIX", "cosmos"),
            ("TXN_SYNC_WORKER_COUNT", "2"),
            ("TXN_LOG_JSON", "true"),
            ("TXN_LOG_LOKI_URL", ""),
            ("TXN_METRICS_ENABLED", "true"),
        ]))
        .unwrap();

        assert_eq!(config.ledger.url, "https://rpc.example.org");
        assert_eq!(config.ledger.retry_backoff_ms, 250);
        assert_eq!(config.chain.chain_id, "gon-irishub-1");
        assert_eq!(config.chain.bech32_prefix, "cosmos");
        assert_eq!(config.sync.worker_count, 2);
        assert!(config.log.json);
        assert!(config.log.loki_url.is_none());
        assert!(config.metrics.enabled);
    }

    #[test]
    fn test_from_vars_rejects_invalid_values() {
        assert!(IndexerConfig::from_vars(vars(&[("TXN_LOG_LEVEL", "loud")])).is_err());
        assert!(IndexerConfig::from_vars(vars(&[("TXN_SYNC_WORKER_COUNT", "0")])).is_err());
        assert!(IndexerConfig::from_vars(vars(&[("TXN_LEDGER_POOL_SIZE", "many")])).is_err());
    }

    #[test]
    #[serial]
    fn test_load_from_env_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "TXN_CHAIN_ID=env-file-chain").unwrap();
        writeln!(file, "TXN_SYNC_START_HEIGHT=42").unwrap();

        let args = Args {
            env_file: file.path().to_string_lossy().to_string(),
            start_height: None,
        };
        let config = IndexerConfig::load(&args).unwrap();
        assert_eq!(config.chain.chain_id, "env-file-chain");
        assert_eq!(config.sync.start_height, 42);

        unsafe {
            std::env::remove_var("TXN_CHAIN_ID");
            std::env::remove_var("TXN_SYNC_START_HEIGHT");
        }
    }

    #[test]
    #[serial]
    fn test_load_missing_env_file_with_override() {
        let args = Args {
            env_file: "/nonexistent/.env.txn".to_string(),
            start_height: Some(1_000),
        };
        let config = IndexerConfig::load(&args).unwrap();
        assert_eq!(config.sync.start_height, 1_000);
    }
}
