// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::ConfigError;

/// Maximum length of a bech32 human-readable part.
const MAX_HRP_LEN: usize = 83;

#[derive(Debug, Clone)]
pub struct ChainConfig {
    /// Network chain identifier
    ///
    /// Env: TXN_CHAIN_ID
    /// Default: irishub-1
    pub chain_id: String,

    /// Human-readable prefix used when rendering account addresses
    ///
    /// Env: TXN_CHAIN_BECH32_PREFIX
    /// Default: iaa
    pub bech32_prefix: String,
}

pub(crate) fn default_chain_id() -> String {
    "irishub-1".to_string()
}

pub(crate) fn default_bech32_prefix() -> String {
    "iaa".to_string()
}

impl ChainConfig {
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.chain_id.trim().is_empty() {
            return Err(ConfigError::ValidateError(
                "Chain id cannot be empty".to_string(),
            ));
        }

        let prefix = &self.bech32_prefix;
        if prefix.is_empty() || prefix.len() > MAX_HRP_LEN {
            return Err(ConfigError::ValidateError(format!(
                "Bech32 prefix must be 1 to {} characters, got {}",
                MAX_HRP_LEN,
                prefix.len()
            )));
        }

        // Lowercase only: bech32 forbids mixed case and addresses are rendered lowercase
        if !prefix
            .chars()
            .all(|c| c.is_ascii_graphic() && !c.is_ascii_uppercase())
        {
            return Err(ConfigError::ValidateError(format!(
                "Invalid bech32 prefix '{}': must be lowercase printable ASCII",
                prefix
            )));
        }

        Ok(())
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            chain_id: default_chain_id(),
            bech32_prefix: default_bech32_prefix(),
        }
    }
}
