// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Handler registration.
//!
//! The registry maps an operation kind identifier to its handler. It is
//! built once at startup and only read afterwards.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::info;

use super::OperationHandler;

#[derive(Default)]
pub struct OperationRegistry {
    handlers: HashMap<&'static str, Arc<dyn OperationHandler>>,
}

impl OperationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler under its kind identifier, replacing any previous one.
    pub fn register<H: OperationHandler + 'static>(&mut self, handler: H) {
        let handler: Arc<dyn OperationHandler> = Arc::new(handler);
        self.handlers.insert(handler.kind_id(), handler);
    }

    pub fn get(&self, kind_id: &str) -> Option<&Arc<dyn OperationHandler>> {
        self.handlers.get(kind_id)
    }

    pub fn contains(&self, kind_id: &str) -> bool {
        self.handlers.contains_key(kind_id)
    }

    pub fn kind_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.handlers.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }
}

impl std::fmt::Debug for OperationRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut kinds: Vec<_> = self.kind_ids().collect();
        kinds.sort_unstable();
        f.debug_struct("OperationRegistry")
            .field("kinds", &kinds)
            .finish()
    }
}

/// Build the registry with every built-in handler.
pub fn build_registry() -> OperationRegistry {
    let mut registry = OperationRegistry::new();

    super::bank::register_handlers(&mut registry);
    super::staking::register_handlers(&mut registry);
    super::distribution::register_handlers(&mut registry);
    super::gov::register_handlers(&mut registry);
    super::guardian::register_handlers(&mut registry);
    super::htlc::register_handlers(&mut registry);
    super::coinswap::register_handlers(&mut registry);
    super::token::register_handlers(&mut registry);
    super::nft::register_handlers(&mut registry);
    super::service::register_handlers(&mut registry);

    info!(
        handlers = registry.handler_count(),
        "Built operation registry"
    );

    registry
}
