// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod address;
pub mod codec;
pub mod consts;
pub mod ledger;
pub mod logging;
pub mod metrics;
pub mod normalizer;
pub mod operations;
pub mod record;
pub mod sink;
pub mod sync;
pub mod types;
pub mod utils;

pub use normalizer::{NormalizeError, TransactionNormalizer};
pub use record::NormalizedRecord;
