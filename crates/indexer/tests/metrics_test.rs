// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use tx_normalizer::metrics;

#[tokio::test]
async fn test_metrics_initialization() {
    metrics::init("test").unwrap();
    metrics::TXS_NORMALIZED.inc();

    let metrics_text = metrics::gather_metrics().unwrap();

    // Counters always appear even with zero values
    for name in [
        "test_txs_normalized",
        "test_txs_rejected",
        "test_ledger_retries",
        "test_ledger_failures",
        "test_unrecognized_operations",
        "test_blocks_synced",
        "test_txs_per_block",
    ] {
        assert!(metrics_text.contains(name), "Should contain {name}");
    }

    // A second init keeps the first registry
    metrics::init("other").unwrap();
    assert!(!metrics::gather_metrics().unwrap().contains("other_"));

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("tx-normalizer.prom");
    metrics::write_textfile(&path).await.unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("test_txs_normalized"));
}
