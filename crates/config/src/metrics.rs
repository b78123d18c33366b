// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Configuration for Prometheus metrics
#[derive(Debug, Clone)]
pub struct MetricsConfig {
    /// Enable or disable metrics collection
    ///
    /// Env: TXN_METRICS_ENABLED
    /// Default: false
    pub enabled: bool,

    /// Prometheus metric name prefix
    ///
    /// Env: TXN_METRICS_PREFIX
    /// Default: tx_normalizer
    pub prefix: String,

    /// File the text exposition is written to after every block
    /// (picked up by node-exporter's textfile collector)
    ///
    /// Env: TXN_METRICS_TEXTFILE
    /// Default: ./metrics/tx_normalizer.prom
    pub textfile: String,
}

pub(crate) fn default_prefix() -> String {
    "tx_normalizer".to_string()
}

pub(crate) fn default_textfile() -> String {
    "./metrics/tx_normalizer.prom".to_string()
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            prefix: default_prefix(),
            textfile: default_textfile(),
        }
    }
}

impl MetricsConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        // Prometheus names must match [a-zA-Z_:][a-zA-Z0-9_:]*
        if !self.prefix.is_empty() {
            let mut chars = self.prefix.chars();
            let valid_first = chars
                .next()
                .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == ':');
            let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == ':');
            if !valid_first || !valid_rest {
                return Err(ConfigError::ValidateError(format!(
                    "Invalid Prometheus prefix '{}': must start with [a-zA-Z_:] and contain only [a-zA-Z0-9_:]",
                    self.prefix
                )));
            }
        }

        if self.enabled && self.textfile.trim().is_empty() {
            return Err(ConfigError::ValidateError(
                "Metrics textfile cannot be empty when metrics are enabled".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_metrics_config() {
        let config = MetricsConfig::default();
        assert!(!config.enabled);
        assert_eq!(config.prefix, "tx_normalizer");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_prefix() {
        for prefix in ["txn", "_txn", "txn:sync", ""] {
            let config = MetricsConfig {
                prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_ok(), "Prefix {:?} should be valid", prefix);
        }

        for prefix in ["1txn", "tx-normalizer", "tx normalizer"] {
            let config = MetricsConfig {
                prefix: prefix.to_string(),
                ..Default::default()
            };
            assert!(config.validate().is_err(), "Prefix {:?} should be invalid", prefix);
        }
    }

    #[test]
    fn test_enabled_requires_textfile() {
        let config = MetricsConfig {
            enabled: true,
            textfile: "".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
