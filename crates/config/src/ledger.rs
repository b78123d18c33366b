// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

#[derive(Debug, Clone)]
pub struct LedgerConfig {
    /// Ledger node RPC endpoint
    ///
    /// Env: TXN_LEDGER_URL
    /// Valid schemes: http://, https://
    /// Default: http://127.0.0.1:26657
    pub url: String,

    /// Number of pooled RPC client handles
    ///
    /// Env: TXN_LEDGER_POOL_SIZE
    /// Default: 4
    pub pool_size: usize,

    /// Delay before the single retry of a failed tx lookup, in milliseconds
    ///
    /// Env: TXN_LEDGER_RETRY_BACKOFF_MS
    /// Default: 1000
    pub retry_backoff_ms: u64,

    /// Per-request timeout, in milliseconds
    ///
    /// Env: TXN_LEDGER_REQUEST_TIMEOUT_MS
    /// Default: 10000
    pub request_timeout_ms: u64,
}

pub(crate) fn default_url() -> String {
    "http://127.0.0.1:26657".to_string()
}

pub(crate) fn default_pool_size() -> usize {
    4
}

pub(crate) fn default_retry_backoff_ms() -> u64 {
    1000
}

pub(crate) fn default_request_timeout_ms() -> u64 {
    10_000
}

impl LedgerConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_empty() {
            return Err(ConfigError::ValidateError(
                "Ledger URL cannot be empty".to_string(),
            ));
        }

        let parsed = url::Url::parse(&self.url).map_err(|e| {
            ConfigError::ValidateError(format!("Invalid URL '{}': {}", self.url, e))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid URL scheme '{}'. Must be http:// or https://",
                    scheme
                )));
            }
        }

        if self.pool_size == 0 {
            return Err(ConfigError::ValidateError(
                "Ledger pool size must be at least 1".to_string(),
            ));
        }

        if self.request_timeout_ms == 0 {
            return Err(ConfigError::ValidateError(
                "Ledger request timeout cannot be 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            pool_size: default_pool_size(),
            retry_backoff_ms: default_retry_backoff_ms(),
            request_timeout_ms: default_request_timeout_ms(),
        }
    }
}
