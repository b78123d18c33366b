// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::sync::Arc;
use std::time::Duration;

use tx_normalizer::address::AddressCodec;
use tx_normalizer::ledger::{
    ClientPool, ExecutionResultFetcher, LedgerQueryError, RpcLedgerClient, SharedLedgerClient,
};
use tx_normalizer::logging::{self, LoggingConfig};
use tx_normalizer::metrics;
use tx_normalizer::operations::build_registry;
use tx_normalizer::sink::{JsonLinesSink, RecordSink};
use tx_normalizer::sync::BlockSyncer;
use tx_normalizer::TransactionNormalizer;
use tx_normalizer_config::{Args, IndexerConfig};
use url::Url;

#[cfg(not(target_os = "windows"))]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse_args();
    let config = IndexerConfig::load(&args)?;
    let _log_guard = logging::init_with_config(LoggingConfig::from(&config.log))?;

    if config.metrics.enabled {
        metrics::init(&config.metrics.prefix)?;
    }

    let ledger_url = Url::parse(&config.ledger.url)?;
    let request_timeout = Duration::from_millis(config.ledger.request_timeout_ms);
    let connect = || -> Result<SharedLedgerClient, LedgerQueryError> {
        Ok(Arc::new(RpcLedgerClient::new(
            ledger_url.clone(),
            request_timeout,
        )?))
    };

    let pool = ClientPool::from_fn(config.ledger.pool_size, connect)?;
    let fetcher = ExecutionResultFetcher::with_backoff(
        pool,
        Duration::from_millis(config.ledger.retry_backoff_ms),
    );
    let address_codec = AddressCodec::new(&config.chain.bech32_prefix)?;
    let normalizer = Arc::new(TransactionNormalizer::new(
        fetcher,
        Arc::new(build_registry()),
        address_codec,
    ));

    let sink: Arc<dyn RecordSink> = if config.sync.writes_to_stdout() {
        Arc::new(JsonLinesSink::stdout())
    } else {
        Arc::new(JsonLinesSink::append_to(&config.sync.output).await?)
    };

    let mut syncer = BlockSyncer::new(connect()?, normalizer, sink, config.sync.start_height)
        .with_worker_count(config.sync.worker_count)
        .with_poll_interval(Duration::from_millis(config.sync.poll_interval_ms));
    if config.metrics.enabled {
        syncer = syncer.with_metrics_textfile(&config.metrics.textfile);
    }

    tracing::info!("Chain: {}", config.chain.chain_id);
    tracing::info!("Ledger URL: {}", ledger_url);
    tracing::info!("Log level: {}", config.log.level);
    tracing::info!("Output: {}", config.sync.output);

    syncer
        .run(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %err, "Failed to listen for shutdown signal");
                std::future::pending::<()>().await;
            }
        })
        .await?;

    Ok(())
}
