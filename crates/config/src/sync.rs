// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Output target value meaning "write records to stdout"
pub const STDOUT_OUTPUT: &str = "-";

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// First block height to normalize
    ///
    /// Env: TXN_SYNC_START_HEIGHT
    /// Default: 1
    pub start_height: u64,

    /// Number of transactions normalized concurrently within a block
    ///
    /// Env: TXN_SYNC_WORKER_COUNT
    /// Default: 8
    pub worker_count: usize,

    /// Delay between polls once the sync has caught up with the ledger, in milliseconds
    ///
    /// Env: TXN_SYNC_POLL_INTERVAL_MS
    /// Default: 5000
    pub poll_interval_ms: u64,

    /// Where normalized records are written (file path, or "-" for stdout)
    ///
    /// Env: TXN_SYNC_OUTPUT
    /// Default: -
    pub output: String,
}

pub(crate) fn default_start_height() -> u64 {
    1
}

pub(crate) fn default_worker_count() -> usize {
    8
}

pub(crate) fn default_poll_interval_ms() -> u64 {
    5000
}

pub(crate) fn default_output() -> String {
    STDOUT_OUTPUT.to_string()
}

impl SyncConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.start_height == 0 {
            return Err(ConfigError::ValidateError(
                "Sync start height must be at least 1".to_string(),
            ));
        }

        if self.worker_count == 0 {
            return Err(ConfigError::ValidateError(
                "Sync worker count must be at least 1".to_string(),
            ));
        }

        if self.poll_interval_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Sync poll interval cannot be 0".to_string(),
            ));
        }

        if self.output.trim().is_empty() {
            return Err(ConfigError::ValidateError(
                "Sync output cannot be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Whether records go to stdout rather than a file
    pub fn writes_to_stdout(&self) -> bool {
        self.output == STDOUT_OUTPUT
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            start_height: default_start_height(),
            worker_count: default_worker_count(),
            poll_interval_ms: default_poll_interval_ms(),
            output: default_output(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sync_config() {
        let config = SyncConfig::default();
        assert_eq!(config.start_height, 1);
        assert_eq!(config.worker_count, 8);
        assert!(config.writes_to_stdout());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_workers() {
        let config = SyncConfig {
            worker_count: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_zero_start_height() {
        let config = SyncConfig {
            start_height: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_file_output() {
        let config = SyncConfig {
            output: "/var/lib/txn/records.jsonl".to_string(),
            ..Default::default()
        };
        assert!(!config.writes_to_stdout());
        assert!(config.validate().is_ok());
    }
}
