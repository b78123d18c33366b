// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use lazy_static::lazy_static;
use prometheus::{Encoder, Histogram, HistogramOpts, IntCounter, Registry, TextEncoder};
use std::sync::{Mutex, MutexGuard};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("Prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),

    #[error("Metrics text is not UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Failed to write metrics textfile '{path}': {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

lazy_static! {
    static ref REGISTRY: Mutex<Option<Registry>> = Mutex::new(None);

    // Created unregistered; `init` attaches them to the prefixed registry.
    pub static ref TXS_NORMALIZED: IntCounter = IntCounter::new(
        "txs_normalized",
        "Transactions turned into a normalized record"
    )
    .expect("Failed to create txs_normalized counter");

    pub static ref TXS_REJECTED: IntCounter = IntCounter::new(
        "txs_rejected",
        "Transactions rejected as undecodable or without usable operations"
    )
    .expect("Failed to create txs_rejected counter");

    pub static ref LEDGER_RETRIES: IntCounter = IntCounter::new(
        "ledger_retries",
        "Execution result lookups retried after a first failure"
    )
    .expect("Failed to create ledger_retries counter");

    pub static ref LEDGER_FAILURES: IntCounter = IntCounter::new(
        "ledger_failures",
        "Execution result lookups that failed on both attempts"
    )
    .expect("Failed to create ledger_failures counter");

    pub static ref UNRECOGNIZED_OPERATIONS: IntCounter = IntCounter::new(
        "unrecognized_operations",
        "Operations skipped because no handler is registered for their kind"
    )
    .expect("Failed to create unrecognized_operations counter");

    pub static ref BLOCKS_SYNCED: IntCounter = IntCounter::new(
        "blocks_synced",
        "Blocks whose transactions have all been processed"
    )
    .expect("Failed to create blocks_synced counter");

    pub static ref TXS_PER_BLOCK: Histogram = Histogram::with_opts(
        HistogramOpts::new("txs_per_block", "Number of transactions per block")
            .buckets(vec![0.0, 1.0, 2.0, 4.0, 8.0, 16.0, 32.0, 64.0, 128.0, 256.0, 512.0]),
    )
    .expect("Failed to create txs_per_block histogram");
}

fn registry() -> MutexGuard<'static, Option<Registry>> {
    REGISTRY.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Register every metric under `prefix`. Later calls are no-ops.
pub fn init(prefix: &str) -> Result<(), MetricsError> {
    let mut slot = registry();
    if slot.is_some() {
        return Ok(());
    }

    let registry = Registry::new_custom(Some(prefix.to_string()), None)?;
    registry.register(Box::new(TXS_NORMALIZED.clone()))?;
    registry.register(Box::new(TXS_REJECTED.clone()))?;
    registry.register(Box::new(LEDGER_RETRIES.clone()))?;
    registry.register(Box::new(LEDGER_FAILURES.clone()))?;
    registry.register(Box::new(UNRECOGNIZED_OPERATIONS.clone()))?;
    registry.register(Box::new(BLOCKS_SYNCED.clone()))?;
    registry.register(Box::new(TXS_PER_BLOCK.clone()))?;

    *slot = Some(registry);
    Ok(())
}

/// Gather all metrics as Prometheus text format. Empty before `init`.
pub fn gather_metrics() -> Result<String, MetricsError> {
    let slot = registry();
    let Some(registry) = slot.as_ref() else {
        return Ok(String::new());
    };

    let mut buffer = Vec::new();
    TextEncoder::new().encode(&registry.gather(), &mut buffer)?;
    Ok(String::from_utf8(buffer)?)
}
