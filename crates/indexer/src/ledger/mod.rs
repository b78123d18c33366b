// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Everything that talks to the ledger.

pub mod client;
pub mod events;
pub mod fetcher;
pub mod pool;
pub mod types;

pub use client::{LedgerClient, LedgerQueryError, RpcLedgerClient};
pub use events::{EventParseError, ProposalDeposit, proposal_deposit_from_events};
pub use fetcher::{DEFAULT_RETRY_BACKOFF, ExecutionResultFetcher, SharedLedgerClient};
pub use pool::{ClientPool, PoolError, PooledClient};
pub use types::{Attribute, Block, Event, ExecutionOutcome, TxStatus};
