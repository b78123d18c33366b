// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! The normalized transaction record handed to persistence.

use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::ledger::{Event, TxStatus};
use crate::operations::OperationDocument;
use crate::types::{ActualFee, Coin, Fee, TxHash};

/// A transaction signer in both renderings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Signer {
    /// Upper-case hex of the raw account bytes
    pub address_hex: String,
    /// Empty when the raw bytes could not be encoded
    pub address_bech32: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedRecord {
    pub height: u64,
    pub time: DateTime<Utc>,
    pub time_unix: i64,
    pub tx_hash: TxHash,

    // Summary of the first processed operation.
    pub from: String,
    pub to: String,
    pub amount: Vec<Coin>,
    #[serde(rename = "type")]
    pub tx_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposal_id: Option<u64>,

    pub fee: Fee,
    pub actual_fee: ActualFee,
    pub memo: String,
    pub status: TxStatus,
    pub code: u32,
    pub log: String,
    pub gas_used: u64,
    pub gas_wanted: u64,
    pub gas_price: f64,
    pub events: Vec<Event>,

    pub signer: String,
    pub signers: Vec<Signer>,
    pub addrs: Vec<String>,
    pub types: Vec<String>,
    pub msgs: Vec<OperationDocument>,
}

/// Keep one occurrence of each non-empty value.
///
/// Callers must treat the result as a set; only membership is meaningful.
pub fn dedup_non_empty(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(values.len());
    values
        .into_iter()
        .filter(|value| !value.is_empty() && seen.insert(value.clone()))
        .collect()
}

/// Charged gas and fee figures derived from the declared fee.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GasSummary {
    pub gas_used: u64,
    pub gas_price: f64,
    pub actual_fee: ActualFee,
}

impl GasSummary {
    /// Gas used is capped at the declared limit. The price is the first fee
    /// coin over the limit, or 0 without fee coins or with a zero limit.
    pub fn compute(fee: &Fee, outcome_gas_used: u64) -> Self {
        let gas_used = outcome_gas_used.min(fee.gas);

        let Some(first) = fee.amount.first() else {
            return Self {
                gas_used,
                ..Default::default()
            };
        };

        let gas_price = if fee.gas == 0 {
            0.0
        } else {
            first.amount as f64 / fee.gas as f64
        };

        Self {
            gas_used,
            gas_price,
            actual_fee: ActualFee {
                denom: first.denom.clone(),
                amount: gas_used as f64 * gas_price,
            },
        }
    }
}
