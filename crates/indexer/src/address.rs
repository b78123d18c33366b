// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Rendering of raw account identifiers as bech32 display addresses.

use bech32::{Bech32, Hrp};
use thiserror::Error;

/// Raw account identifiers are 20 bytes; module and interchain accounts use 32.
const VALID_ADDRESS_LENGTHS: [usize; 2] = [20, 32];

#[derive(Debug, Error)]
pub enum EncodingError {
    #[error("Invalid account address length {0}, expected 20 or 32 bytes")]
    InvalidLength(usize),

    #[error("Invalid bech32 prefix '{prefix}': {source}")]
    InvalidPrefix {
        prefix: String,
        #[source]
        source: bech32::primitives::hrp::Error,
    },

    #[error("Failed to encode address: {0}")]
    Encode(#[from] bech32::EncodeError),
}

/// Encode `raw` with the human-readable `prefix`.
pub fn to_bech32(raw: &[u8], prefix: &str) -> Result<String, EncodingError> {
    AddressCodec::new(prefix)?.to_bech32(raw)
}

/// Address encoder bound to one chain prefix, parsed once.
#[derive(Debug, Clone)]
pub struct AddressCodec {
    hrp: Hrp,
    prefix: String,
}

impl AddressCodec {
    pub fn new(prefix: &str) -> Result<Self, EncodingError> {
        let hrp = Hrp::parse(prefix).map_err(|source| EncodingError::InvalidPrefix {
            prefix: prefix.to_string(),
            source,
        })?;
        Ok(Self {
            hrp,
            prefix: prefix.to_string(),
        })
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn to_bech32(&self, raw: &[u8]) -> Result<String, EncodingError> {
        if !VALID_ADDRESS_LENGTHS.contains(&raw.len()) {
            return Err(EncodingError::InvalidLength(raw.len()));
        }
        Ok(bech32::encode::<Bech32>(self.hrp, raw)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bech32_known_vector() {
        // 20 zero bytes under the cosmos prefix
        let address = to_bech32(&[0u8; 20], "cosmos").unwrap();
        assert_eq!(address, "cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnrql8a");
    }

    #[test]
    fn test_codec_prefix_is_applied() {
        let codec = AddressCodec::new("iaa").unwrap();
        let address = codec.to_bech32(&[7u8; 20]).unwrap();
        assert!(address.starts_with("iaa1"));
        assert_eq!(codec.prefix(), "iaa");
    }

    #[test]
    fn test_accepts_32_byte_accounts() {
        let address = to_bech32(&[1u8; 32], "iaa").unwrap();
        assert!(address.starts_with("iaa1"));
    }

    #[test]
    fn test_rejects_malformed_length() {
        assert!(matches!(
            to_bech32(&[1u8; 19], "iaa"),
            Err(EncodingError::InvalidLength(19))
        ));
        assert!(matches!(
            to_bech32(&[], "iaa"),
            Err(EncodingError::InvalidLength(0))
        ));
    }

    #[test]
    fn test_rejects_invalid_prefix() {
        assert!(matches!(
            to_bech32(&[1u8; 20], ""),
            Err(EncodingError::InvalidPrefix { .. })
        ));
        assert!(matches!(
            AddressCodec::new("i a"),
            Err(EncodingError::InvalidPrefix { .. })
        ));
    }
}
