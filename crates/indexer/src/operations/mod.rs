// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-kind operation handlers.
//!
//! Each handler turns one [`OperationPayload`] shape into an
//! [`OperationDocument`], the addresses it touches, and the candidate
//! top-level fields of the record. Handlers are looked up by kind through
//! [`OperationRegistry`].

pub mod bank;
pub mod coinswap;
pub mod distribution;
pub mod document;
pub mod gov;
pub mod guardian;
pub mod htlc;
pub mod nft;
pub mod registry;
pub mod service;
pub mod staking;
pub mod token;

pub use document::{OperationDocument, OperationDocumentBody};
pub use registry::{OperationRegistry, build_registry};

use crate::codec::OperationPayload;
use crate::ledger::Event;
use crate::record::Signer;
use crate::types::{Coin, TxHash};

/// Transaction-level data a handler may read while deriving primary fields.
#[derive(Debug, Clone, Copy)]
pub struct HandlerContext<'a> {
    pub tx_hash: &'a TxHash,
    pub signers: &'a [Signer],
    pub events: &'a [Event],
}

impl<'a> HandlerContext<'a> {
    /// Bech32 address of the first transaction signer, or "" when unknown.
    pub fn first_signer(&self) -> &'a str {
        self.signers
            .first()
            .map(|signer| signer.address_bech32.as_str())
            .unwrap_or_default()
    }
}

/// Candidate values for the record's top-level summary fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PrimaryFields {
    pub tx_type: &'static str,
    pub from: String,
    pub to: String,
    pub amount: Vec<Coin>,
    pub proposal_id: Option<u64>,
}

impl PrimaryFields {
    pub fn new(tx_type: &'static str, from: impl Into<String>) -> Self {
        Self {
            tx_type,
            from: from.into(),
            ..Default::default()
        }
    }

    pub fn with_to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    pub fn with_amount(mut self, amount: Vec<Coin>) -> Self {
        self.amount = amount;
        self
    }

    pub fn with_proposal_id(mut self, proposal_id: u64) -> Self {
        self.proposal_id = Some(proposal_id);
        self
    }
}

/// Object-safe handler interface stored in the registry.
///
/// Every method returns `None` when handed a payload of another kind.
pub trait OperationHandler: Send + Sync {
    fn kind_id(&self) -> &'static str;

    fn kind_label(&self) -> &'static str;

    fn build(&self, payload: &OperationPayload) -> Option<OperationDocument>;

    fn participant_addresses(&self, payload: &OperationPayload) -> Option<Vec<String>>;

    fn primary_fields(
        &self,
        payload: &OperationPayload,
        ctx: &HandlerContext<'_>,
    ) -> Option<PrimaryFields>;
}

/// Typed handler for a single payload shape.
///
/// Implementors get [`OperationHandler`] for free.
pub trait MessageHandler: Send + Sync {
    type Msg;

    const KIND_ID: &'static str;
    const LABEL: &'static str;

    fn extract(payload: &OperationPayload) -> Option<&Self::Msg>;

    fn document(msg: &Self::Msg) -> OperationDocumentBody;

    fn participants(msg: &Self::Msg) -> Vec<String>;

    fn primary(msg: &Self::Msg, ctx: &HandlerContext<'_>) -> PrimaryFields;
}

impl<H: MessageHandler> OperationHandler for H {
    fn kind_id(&self) -> &'static str {
        H::KIND_ID
    }

    fn kind_label(&self) -> &'static str {
        H::LABEL
    }

    fn build(&self, payload: &OperationPayload) -> Option<OperationDocument> {
        H::extract(payload).map(|msg| OperationDocument::new(H::LABEL, H::document(msg)))
    }

    fn participant_addresses(&self, payload: &OperationPayload) -> Option<Vec<String>> {
        H::extract(payload).map(H::participants)
    }

    fn primary_fields(
        &self,
        payload: &OperationPayload,
        ctx: &HandlerContext<'_>,
    ) -> Option<PrimaryFields> {
        H::extract(payload).map(|msg| H::primary(msg, ctx))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    pub fn signer(bech32: &str) -> Signer {
        Signer {
            address_hex: String::new(),
            address_bech32: bech32.to_string(),
        }
    }

    pub fn ctx<'a>(
        tx_hash: &'a TxHash,
        signers: &'a [Signer],
        events: &'a [Event],
    ) -> HandlerContext<'a> {
        HandlerContext {
            tx_hash,
            signers,
            events,
        }
    }
}
