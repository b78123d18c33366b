// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{MsgClaimHtlc, MsgCreateHtlc, MsgRefundHtlc};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(CreateHtlcHandler);
    registry.register(ClaimHtlcHandler);
    registry.register(RefundHtlcHandler);
}

pub struct CreateHtlcHandler;

impl MessageHandler for CreateHtlcHandler {
    type Msg = MsgCreateHtlc;

    const KIND_ID: &'static str = kind::MSG_CREATE_HTLC;
    const LABEL: &'static str = label::CREATE_HTLC;

    fn extract(payload: &OperationPayload) -> Option<&MsgCreateHtlc> {
        match payload {
            OperationPayload::CreateHtlc(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgCreateHtlc) -> OperationDocumentBody {
        OperationDocumentBody::CreateHtlc(msg.clone())
    }

    fn participants(msg: &MsgCreateHtlc) -> Vec<String> {
        vec![msg.sender.clone(), msg.to.clone()]
    }

    fn primary(msg: &MsgCreateHtlc, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender)
            .with_to(&msg.to)
            .with_amount(msg.amount.clone())
    }
}

pub struct ClaimHtlcHandler;

impl MessageHandler for ClaimHtlcHandler {
    type Msg = MsgClaimHtlc;

    const KIND_ID: &'static str = kind::MSG_CLAIM_HTLC;
    const LABEL: &'static str = label::CLAIM_HTLC;

    fn extract(payload: &OperationPayload) -> Option<&MsgClaimHtlc> {
        match payload {
            OperationPayload::ClaimHtlc(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgClaimHtlc) -> OperationDocumentBody {
        OperationDocumentBody::ClaimHtlc(msg.clone())
    }

    fn participants(msg: &MsgClaimHtlc) -> Vec<String> {
        vec![msg.sender.clone()]
    }

    fn primary(msg: &MsgClaimHtlc, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender)
    }
}

pub struct RefundHtlcHandler;

impl MessageHandler for RefundHtlcHandler {
    type Msg = MsgRefundHtlc;

    const KIND_ID: &'static str = kind::MSG_REFUND_HTLC;
    const LABEL: &'static str = label::REFUND_HTLC;

    fn extract(payload: &OperationPayload) -> Option<&MsgRefundHtlc> {
        match payload {
            OperationPayload::RefundHtlc(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgRefundHtlc) -> OperationDocumentBody {
        OperationDocumentBody::RefundHtlc(msg.clone())
    }

    fn participants(msg: &MsgRefundHtlc) -> Vec<String> {
        vec![msg.sender.clone()]
    }

    fn primary(msg: &MsgRefundHtlc, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender)
    }
}
