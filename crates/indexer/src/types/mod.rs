// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Common value types shared by the codec, the ledger client and the record.

pub mod coin;
pub mod hash;

pub use coin::{ActualFee, Coin, CoinParseError, Fee, parse_coin, parse_coins};
pub use hash::TxHash;
