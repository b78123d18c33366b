// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::MsgSend;
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(TransferHandler);
}

pub struct TransferHandler;

impl MessageHandler for TransferHandler {
    type Msg = MsgSend;

    const KIND_ID: &'static str = kind::MSG_SEND;
    const LABEL: &'static str = label::TRANSFER;

    fn extract(payload: &OperationPayload) -> Option<&MsgSend> {
        match payload {
            OperationPayload::Send(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgSend) -> OperationDocumentBody {
        OperationDocumentBody::Transfer(msg.clone())
    }

    fn participants(msg: &MsgSend) -> Vec<String> {
        vec![msg.from_address.clone(), msg.to_address.clone()]
    }

    fn primary(msg: &MsgSend, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.from_address)
            .with_to(&msg.to_address)
            .with_amount(msg.amount.clone())
    }
}
