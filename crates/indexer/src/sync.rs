// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Block-by-block ingestion loop.
//!
//! Heights are processed strictly in order and a height only advances once
//! every record of its block has reached the sink. Transactions inside a
//! block are normalized concurrently, bounded by the worker count.

use std::future::{self, Future};
use std::path::PathBuf;
use std::pin::{Pin, pin};
use std::sync::Arc;
use std::time::Duration;

use futures::FutureExt;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::ledger::{LedgerQueryError, SharedLedgerClient};
use crate::metrics;
use crate::normalizer::TransactionNormalizer;
use crate::sink::{RecordSink, SinkError};
use crate::utils::concurrency::run_with_concurrency_ordered;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Ledger query failed: {0}")]
    Ledger(#[from] LedgerQueryError),

    #[error("Record sink failed: {0}")]
    Sink(#[from] SinkError),
}

/// Outcome of syncing one block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockReport {
    pub height: u64,
    pub records: usize,
    pub rejected: usize,
}

pub struct BlockSyncer {
    ledger: SharedLedgerClient,
    normalizer: Arc<TransactionNormalizer>,
    sink: Arc<dyn RecordSink>,
    worker_count: usize,
    poll_interval: Duration,
    metrics_textfile: Option<PathBuf>,
    next_height: u64,
}

impl BlockSyncer {
    pub fn new(
        ledger: SharedLedgerClient,
        normalizer: Arc<TransactionNormalizer>,
        sink: Arc<dyn RecordSink>,
        start_height: u64,
    ) -> Self {
        Self {
            ledger,
            normalizer,
            sink,
            worker_count: 1,
            poll_interval: Duration::from_secs(5),
            metrics_textfile: None,
            next_height: start_height,
        }
    }

    pub fn with_worker_count(mut self, worker_count: usize) -> Self {
        self.worker_count = worker_count.max(1);
        self
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Rewrite the metrics textfile at `path` after every block.
    pub fn with_metrics_textfile(mut self, path: impl Into<PathBuf>) -> Self {
        self.metrics_textfile = Some(path.into());
        self
    }

    /// Height the next call to [`catch_up`](Self::catch_up) starts from.
    pub fn next_height(&self) -> u64 {
        self.next_height
    }

    /// Normalize every transaction of the block at `height` into the sink.
    ///
    /// Rejected transactions are logged and produce no record.
    pub async fn sync_block(&self, height: u64) -> Result<BlockReport, SyncError> {
        let block = self.ledger.fetch_block(height).await?;

        let tasks = block
            .txs
            .iter()
            .map(|raw| self.normalizer.normalize(raw, block.height, block.time));
        let results = run_with_concurrency_ordered(self.worker_count, tasks).await;

        let mut report = BlockReport {
            height,
            records: 0,
            rejected: 0,
        };
        for (index, result) in results.into_iter().enumerate() {
            match result {
                Ok(record) => {
                    self.sink.write(&record).await?;
                    report.records += 1;
                }
                Err(err) => {
                    warn!(height, index, error = %err, "Transaction rejected");
                    report.rejected += 1;
                }
            }
        }
        self.sink.flush().await?;

        metrics::BLOCKS_SYNCED.inc();
        metrics::TXS_PER_BLOCK.observe(block.txs.len() as f64);
        debug!(
            height,
            records = report.records,
            rejected = report.rejected,
            "Synced block"
        );
        Ok(report)
    }

    /// Sync every block from the next height up to the ledger's tip.
    ///
    /// Stops at the first failure; the failed height is retried next time.
    pub async fn catch_up(&mut self) -> Result<u64, SyncError> {
        let never = pin!(future::pending::<()>());
        self.catch_up_until(never).await?;
        Ok(self.next_height)
    }

    /// Like [`Self::catch_up`], but checks `shutdown` before each block.
    ///
    /// A block in progress always completes. Returns `true` when `shutdown`
    /// fired before the tip was reached.
    async fn catch_up_until<F>(&mut self, mut shutdown: Pin<&mut F>) -> Result<bool, SyncError>
    where
        F: Future<Output = ()>,
    {
        let latest = self.ledger.latest_height().await?;

        while self.next_height <= latest {
            if shutdown.as_mut().now_or_never().is_some() {
                return Ok(true);
            }
            self.sync_block(self.next_height).await?;
            self.next_height += 1;
            self.write_metrics().await;
        }

        Ok(false)
    }

    /// Follow the ledger until `shutdown` resolves.
    ///
    /// Shutdown is honored between blocks, including during a long catch-up.
    /// Ledger failures are retried on the next poll tick. Sink failures end
    /// the loop since records could otherwise be lost.
    pub async fn run(mut self, shutdown: impl Future<Output = ()>) -> Result<(), SyncError> {
        tokio::pin!(shutdown);
        info!(
            start_height = self.next_height,
            workers = self.worker_count,
            "Starting block sync"
        );

        loop {
            match self.catch_up_until(shutdown.as_mut()).await {
                Ok(true) => break,
                Ok(false) => debug!(next_height = self.next_height, "Caught up with ledger"),
                Err(SyncError::Ledger(err)) => {
                    warn!(height = self.next_height, error = %err, "Block sync stalled, will retry");
                }
                Err(err) => return Err(err),
            }

            tokio::select! {
                _ = shutdown.as_mut() => break,
                _ = tokio::time::sleep(self.poll_interval) => {}
            }
        }

        info!(next_height = self.next_height, "Block sync stopped");
        Ok(())
    }

    async fn write_metrics(&self) {
        let Some(path) = &self.metrics_textfile else {
            return;
        };
        if let Err(err) = metrics::write_textfile(path).await {
            warn!(error = %err, "Failed to write metrics textfile");
        }
    }
}
