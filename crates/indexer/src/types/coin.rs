// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use parity_scale_codec::{Decode, Encode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoinParseError {
    #[error("Coin '{0}' has no amount")]
    MissingAmount(String),

    #[error("Coin '{0}' has no denomination")]
    MissingDenom(String),

    #[error("Coin amount in '{0}' does not fit in u128")]
    AmountOverflow(String),
}

/// An amount of a single denomination.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Encode, Decode)]
pub struct Coin {
    pub denom: String,
    pub amount: u128,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: u128) -> Self {
        Self {
            denom: denom.into(),
            amount,
        }
    }
}

/// Fee declared by the transaction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Fee {
    pub amount: Vec<Coin>,
    pub gas: u64,
}

/// Fee actually charged, derived from gas used and gas price.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ActualFee {
    pub denom: String,
    pub amount: f64,
}

/// Parse a coin in ledger notation, e.g. `10stake` or `1500000uiris`.
pub fn parse_coin(value: &str) -> Result<Coin, CoinParseError> {
    let value = value.trim();
    let split = value
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(value.len());
    let (amount, denom) = value.split_at(split);

    if amount.is_empty() {
        return Err(CoinParseError::MissingAmount(value.to_string()));
    }
    let denom = denom.trim();
    if denom.is_empty() {
        return Err(CoinParseError::MissingDenom(value.to_string()));
    }

    let amount = amount
        .parse::<u128>()
        .map_err(|_| CoinParseError::AmountOverflow(value.to_string()))?;

    Ok(Coin::new(denom, amount))
}

/// Parse a comma separated coin list, e.g. `10stake,3uiris`. Empty input yields no coins.
pub fn parse_coins(value: &str) -> Result<Vec<Coin>, CoinParseError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(parse_coin)
        .collect()
}
