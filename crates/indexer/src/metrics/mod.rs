// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

pub mod registry;
pub mod textfile;

pub use registry::{
    BLOCKS_SYNCED, LEDGER_FAILURES, LEDGER_RETRIES, MetricsError, TXS_NORMALIZED, TXS_PER_BLOCK,
    TXS_REJECTED, UNRECOGNIZED_OPERATIONS, gather_metrics, init,
};
pub use textfile::write_textfile;
