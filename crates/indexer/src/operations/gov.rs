// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use tracing::warn;

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{MsgDeposit, MsgSubmitProposal, MsgVote};
use crate::consts::{kind, label};
use crate::ledger::proposal_deposit_from_events;

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(SubmitProposalHandler);
    registry.register(DepositHandler);
    registry.register(VoteHandler);
}

/// Proposal submission.
///
/// The proposal id only exists once the ledger has executed the
/// transaction, so id and deposit are read back from the `proposal_deposit`
/// event instead of the payload.
pub struct SubmitProposalHandler;

impl MessageHandler for SubmitProposalHandler {
    type Msg = MsgSubmitProposal;

    const KIND_ID: &'static str = kind::MSG_SUBMIT_PROPOSAL;
    const LABEL: &'static str = label::SUBMIT_PROPOSAL;

    fn extract(payload: &OperationPayload) -> Option<&MsgSubmitProposal> {
        match payload {
            OperationPayload::SubmitProposal(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgSubmitProposal) -> OperationDocumentBody {
        OperationDocumentBody::SubmitProposal(msg.clone())
    }

    fn participants(msg: &MsgSubmitProposal) -> Vec<String> {
        vec![msg.proposer.clone()]
    }

    fn primary(_msg: &MsgSubmitProposal, ctx: &HandlerContext<'_>) -> PrimaryFields {
        let deposit = proposal_deposit_from_events(ctx.events);
        let proposal_id = deposit.require_proposal_id().unwrap_or_else(|err| {
            warn!(
                tx_hash = %ctx.tx_hash,
                kind = Self::KIND_ID,
                error = %err,
                "Proposal id not recovered from events, defaulting to 0"
            );
            0
        });

        PrimaryFields::new(Self::LABEL, ctx.first_signer())
            .with_amount(deposit.amount)
            .with_proposal_id(proposal_id)
    }
}

pub struct DepositHandler;

impl MessageHandler for DepositHandler {
    type Msg = MsgDeposit;

    const KIND_ID: &'static str = kind::MSG_DEPOSIT;
    const LABEL: &'static str = label::DEPOSIT;

    fn extract(payload: &OperationPayload) -> Option<&MsgDeposit> {
        match payload {
            OperationPayload::Deposit(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgDeposit) -> OperationDocumentBody {
        OperationDocumentBody::Deposit(msg.clone())
    }

    fn participants(msg: &MsgDeposit) -> Vec<String> {
        vec![msg.depositor.clone()]
    }

    fn primary(msg: &MsgDeposit, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.depositor)
            .with_amount(msg.amount.clone())
            .with_proposal_id(msg.proposal_id)
    }
}

pub struct VoteHandler;

impl MessageHandler for VoteHandler {
    type Msg = MsgVote;

    const KIND_ID: &'static str = kind::MSG_VOTE;
    const LABEL: &'static str = label::VOTE;

    fn extract(payload: &OperationPayload) -> Option<&MsgVote> {
        match payload {
            OperationPayload::Vote(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgVote) -> OperationDocumentBody {
        OperationDocumentBody::Vote(msg.clone())
    }

    fn participants(msg: &MsgVote) -> Vec<String> {
        vec![msg.voter.clone()]
    }

    fn primary(msg: &MsgVote, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.voter).with_proposal_id(msg.proposal_id)
    }
}
