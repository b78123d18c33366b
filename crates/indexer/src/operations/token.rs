// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{MsgEditToken, MsgIssueToken, MsgMintToken, MsgTransferTokenOwner};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(IssueTokenHandler);
    registry.register(EditTokenHandler);
    registry.register(MintTokenHandler);
    registry.register(TransferTokenOwnerHandler);
}

pub struct IssueTokenHandler;

impl MessageHandler for IssueTokenHandler {
    type Msg = MsgIssueToken;

    const KIND_ID: &'static str = kind::MSG_ISSUE_TOKEN;
    const LABEL: &'static str = label::ISSUE_TOKEN;

    fn extract(payload: &OperationPayload) -> Option<&MsgIssueToken> {
        match payload {
            OperationPayload::IssueToken(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgIssueToken) -> OperationDocumentBody {
        OperationDocumentBody::IssueToken(msg.clone())
    }

    fn participants(msg: &MsgIssueToken) -> Vec<String> {
        vec![msg.owner.clone()]
    }

    fn primary(msg: &MsgIssueToken, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.owner)
    }
}

pub struct EditTokenHandler;

impl MessageHandler for EditTokenHandler {
    type Msg = MsgEditToken;

    const KIND_ID: &'static str = kind::MSG_EDIT_TOKEN;
    const LABEL: &'static str = label::EDIT_TOKEN;

    fn extract(payload: &OperationPayload) -> Option<&MsgEditToken> {
        match payload {
            OperationPayload::EditToken(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgEditToken) -> OperationDocumentBody {
        OperationDocumentBody::EditToken(msg.clone())
    }

    fn participants(msg: &MsgEditToken) -> Vec<String> {
        vec![msg.owner.clone()]
    }

    fn primary(msg: &MsgEditToken, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.owner)
    }
}

pub struct MintTokenHandler;

impl MessageHandler for MintTokenHandler {
    type Msg = MsgMintToken;

    const KIND_ID: &'static str = kind::MSG_MINT_TOKEN;
    const LABEL: &'static str = label::MINT_TOKEN;

    fn extract(payload: &OperationPayload) -> Option<&MsgMintToken> {
        match payload {
            OperationPayload::MintToken(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgMintToken) -> OperationDocumentBody {
        OperationDocumentBody::MintToken(msg.clone())
    }

    fn participants(msg: &MsgMintToken) -> Vec<String> {
        vec![msg.owner.clone(), msg.to.clone()]
    }

    fn primary(msg: &MsgMintToken, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.owner).with_to(&msg.to)
    }
}

pub struct TransferTokenOwnerHandler;

impl MessageHandler for TransferTokenOwnerHandler {
    type Msg = MsgTransferTokenOwner;

    const KIND_ID: &'static str = kind::MSG_TRANSFER_TOKEN_OWNER;
    const LABEL: &'static str = label::TRANSFER_TOKEN_OWNER;

    fn extract(payload: &OperationPayload) -> Option<&MsgTransferTokenOwner> {
        match payload {
            OperationPayload::TransferTokenOwner(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgTransferTokenOwner) -> OperationDocumentBody {
        OperationDocumentBody::TransferTokenOwner(msg.clone())
    }

    fn participants(msg: &MsgTransferTokenOwner) -> Vec<String> {
        vec![msg.src_owner.clone(), msg.dst_owner.clone()]
    }

    fn primary(msg: &MsgTransferTokenOwner, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.src_owner).with_to(&msg.dst_owner)
    }
}
