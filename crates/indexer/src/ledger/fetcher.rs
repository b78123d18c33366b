// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use super::client::{LedgerClient, LedgerQueryError};
use super::pool::ClientPool;
use super::types::{ExecutionOutcome, TxStatus};
use crate::metrics;
use crate::types::TxHash;

pub const DEFAULT_RETRY_BACKOFF: Duration = Duration::from_secs(1);

pub type SharedLedgerClient = Arc<dyn LedgerClient>;

/// Looks up execution outcomes, retrying a failed lookup exactly once.
///
/// Query nodes can lag a few moments behind inclusion, so the second attempt
/// waits a fixed backoff first. The pooled handle is held for the whole call
/// and returned on every exit.
#[derive(Debug, Clone)]
pub struct ExecutionResultFetcher {
    pool: ClientPool<SharedLedgerClient>,
    backoff: Duration,
}

impl ExecutionResultFetcher {
    pub fn new(pool: ClientPool<SharedLedgerClient>) -> Self {
        Self::with_backoff(pool, DEFAULT_RETRY_BACKOFF)
    }

    pub fn with_backoff(pool: ClientPool<SharedLedgerClient>, backoff: Duration) -> Self {
        Self { pool, backoff }
    }

    pub fn pool(&self) -> &ClientPool<SharedLedgerClient> {
        &self.pool
    }

    pub async fn fetch(
        &self,
        tx_hash: &TxHash,
    ) -> Result<(TxStatus, ExecutionOutcome), LedgerQueryError> {
        let client = self.pool.acquire().await?;

        let outcome = match client.fetch_tx_result(tx_hash).await {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(
                    tx_hash = %tx_hash,
                    error = %err,
                    backoff_ms = self.backoff.as_millis() as u64,
                    "Execution result lookup failed, retrying once"
                );
                metrics::LEDGER_RETRIES.inc();
                tokio::time::sleep(self.backoff).await;

                client.fetch_tx_result(tx_hash).await.inspect_err(|_| {
                    metrics::LEDGER_FAILURES.inc();
                })?
            }
        };

        let status = TxStatus::from_code(outcome.code);
        debug!(tx_hash = %tx_hash, status = %status, gas_used = outcome.gas_used, "Fetched execution result");
        Ok((status, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::types::Block;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex;

    /// Replays scripted lookup results in order.
    struct Scripted {
        results: Mutex<VecDeque<Result<ExecutionOutcome, LedgerQueryError>>>,
        calls: Mutex<usize>,
    }

    impl Scripted {
        fn new(results: Vec<Result<ExecutionOutcome, LedgerQueryError>>) -> Arc<Self> {
            Arc::new(Self {
                results: Mutex::new(results.into()),
                calls: Mutex::new(0),
            })
        }

        fn calls(&self) -> usize {
            *self.calls.lock().unwrap()
        }
    }

    #[async_trait]
    impl LedgerClient for Scripted {
        async fn fetch_tx_result(&self, _: &TxHash) -> Result<ExecutionOutcome, LedgerQueryError> {
            *self.calls.lock().unwrap() += 1;
            self.results
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(LedgerQueryError::MissingResult("tx".into())))
        }

        async fn fetch_block(&self, _: u64) -> Result<Block, LedgerQueryError> {
            Err(LedgerQueryError::MissingResult("block".into()))
        }

        async fn latest_height(&self) -> Result<u64, LedgerQueryError> {
            Ok(0)
        }
    }

    fn fetcher_for(client: Arc<Scripted>) -> ExecutionResultFetcher {
        let pool = ClientPool::new(vec![client as SharedLedgerClient]).unwrap();
        ExecutionResultFetcher::new(pool)
    }

    fn outcome(code: u32, gas_used: u64) -> ExecutionOutcome {
        ExecutionOutcome {
            code,
            gas_used,
            ..Default::default()
        }
    }

    fn lookup_error() -> LedgerQueryError {
        LedgerQueryError::Status {
            method: "tx".into(),
            status: 500,
        }
    }

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let client = Scripted::new(vec![Ok(outcome(0, 10))]);
        let fetcher = fetcher_for(client.clone());

        let (status, result) = fetcher.fetch(&TxHash([1; 32])).await.unwrap();
        assert_eq!(status, TxStatus::Success);
        assert_eq!(result.gas_used, 10);
        assert_eq!(client.calls(), 1);
        assert_eq!(fetcher.pool().available(), 1);
    }

    #[tokio::test]
    async fn test_non_zero_code_is_fail() {
        let client = Scripted::new(vec![Ok(outcome(11, 10))]);
        let (status, _) = fetcher_for(client).fetch(&TxHash([1; 32])).await.unwrap();
        assert_eq!(status, TxStatus::Fail);
    }

    #[tokio::test(start_paused = true)]
    async fn test_retries_once_after_backoff() {
        let client = Scripted::new(vec![Err(lookup_error()), Ok(outcome(0, 42))]);
        let fetcher = fetcher_for(client.clone());

        let started = tokio::time::Instant::now();
        let (status, result) = fetcher.fetch(&TxHash([2; 32])).await.unwrap();

        assert!(started.elapsed() >= DEFAULT_RETRY_BACKOFF);
        assert_eq!(status, TxStatus::Success);
        assert_eq!(result.gas_used, 42);
        assert_eq!(client.calls(), 2);
        assert_eq!(fetcher.pool().available(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_gives_up_after_second_failure() {
        let client = Scripted::new(vec![
            Err(lookup_error()),
            Err(lookup_error()),
            Ok(outcome(0, 1)),
        ]);
        let fetcher = fetcher_for(client.clone());

        let err = fetcher.fetch(&TxHash([3; 32])).await.unwrap_err();
        assert!(matches!(err, LedgerQueryError::Status { status: 500, .. }));
        assert_eq!(client.calls(), 2);
        assert_eq!(fetcher.pool().available(), 1);
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_as_query_error() {
        let client = Scripted::new(vec![Ok(outcome(0, 1))]);
        let fetcher = fetcher_for(client.clone());
        fetcher.pool().close();

        let err = fetcher.fetch(&TxHash([4; 32])).await.unwrap_err();
        assert!(matches!(err, LedgerQueryError::Pool(_)));
        assert_eq!(client.calls(), 0);
    }
}
