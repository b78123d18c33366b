// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Fixed-size pool of ledger client handles.
//!
//! A handle is checked out through [`ClientPool::acquire`] and goes back to
//! the pool when the returned [`PooledClient`] is dropped.

use std::ops::Deref;
use std::sync::{Arc, Mutex, MutexGuard};

use thiserror::Error;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};

#[derive(Debug, Error)]
pub enum PoolError {
    #[error("Client pool is closed")]
    Closed,

    #[error("Client pool requires at least one handle")]
    Empty,
}

struct Shared<C> {
    idle: Mutex<Vec<C>>,
    permits: Arc<Semaphore>,
    size: usize,
}

impl<C> Shared<C> {
    fn idle(&self) -> MutexGuard<'_, Vec<C>> {
        // A panic while holding the lock cannot leave the Vec half-updated.
        self.idle.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

pub struct ClientPool<C> {
    shared: Arc<Shared<C>>,
}

impl<C> Clone for ClientPool<C> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<C> ClientPool<C> {
    /// Handles currently idle.
    pub fn available(&self) -> usize {
        self.shared.permits.available_permits()
    }

    pub fn size(&self) -> usize {
        self.shared.size
    }

    /// Reject every pending and future `acquire`.
    pub fn close(&self) {
        self.shared.permits.close();
    }
}

impl<C> std::fmt::Debug for ClientPool<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientPool")
            .field("size", &self.shared.size)
            .field("available", &self.available())
            .finish()
    }
}

impl<C: Send> ClientPool<C> {
    pub fn new(clients: Vec<C>) -> Result<Self, PoolError> {
        if clients.is_empty() {
            return Err(PoolError::Empty);
        }
        let size = clients.len();
        Ok(Self {
            shared: Arc::new(Shared {
                idle: Mutex::new(clients),
                permits: Arc::new(Semaphore::new(size)),
                size,
            }),
        })
    }

    /// Build a pool of `size` handles from a factory.
    pub fn from_fn<E>(size: usize, mut make: impl FnMut() -> Result<C, E>) -> Result<Self, E>
    where
        E: From<PoolError>,
    {
        let clients = (0..size).map(|_| make()).collect::<Result<Vec<_>, E>>()?;
        Ok(Self::new(clients)?)
    }

    /// Wait for a free handle.
    pub async fn acquire(&self) -> Result<PooledClient<C>, PoolError> {
        let permit = Arc::clone(&self.shared.permits)
            .acquire_owned()
            .await
            .map_err(|_| PoolError::Closed)?;

        let client = self.shared.idle().pop().ok_or(PoolError::Closed)?;

        Ok(PooledClient {
            client: Some(client),
            shared: Arc::clone(&self.shared),
            _permit: permit,
        })
    }
}

/// A checked-out handle. Returned to the pool on drop.
pub struct PooledClient<C> {
    client: Option<C>,
    shared: Arc<Shared<C>>,
    // Dropped after the handle is pushed back, see `Drop`.
    _permit: OwnedSemaphorePermit,
}

impl<C> Deref for PooledClient<C> {
    type Target = C;

    fn deref(&self) -> &C {
        match &self.client {
            Some(client) => client,
            None => unreachable!("pooled client is only taken on drop"),
        }
    }
}

impl<C> Drop for PooledClient<C> {
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            self.shared.idle().push(client);
        }
    }
}
