// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Concurrency utilities for running futures with controlled parallelism.

use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Runs at most `max_concurrent` tasks at once and returns every output in
/// input order, regardless of completion order.
///
/// Unlike a short-circuiting collect, every task runs to completion; callers
/// decide per output what a failure means.
pub async fn run_with_concurrency_ordered<F, O>(
    max_concurrent: usize,
    tasks: impl IntoIterator<Item = F>,
) -> Vec<O>
where
    F: Future<Output = O>,
{
    let semaphore = Arc::new(Semaphore::new(max_concurrent.max(1)));
    let mut futs = FuturesUnordered::new();

    for (idx, task) in tasks.into_iter().enumerate() {
        let sem = semaphore.clone();
        futs.push(async move {
            // The semaphore is never closed, so a permit always arrives.
            let _permit = sem.acquire().await.ok();
            (idx, task.await)
        });
    }

    let mut indexed_results = Vec::with_capacity(futs.len());
    while let Some(result) = futs.next().await {
        indexed_results.push(result);
    }
    indexed_results.sort_by_key(|(idx, _)| *idx);
    indexed_results.into_iter().map(|(_, val)| val).collect()
}
