// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! NFT denominations and tokens. Identifiers are stored lower-cased.

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{MsgBurnNft, MsgIssueDenom};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(IssueDenomHandler);
    registry.register(BurnNftHandler);
}

pub struct IssueDenomHandler;

impl MessageHandler for IssueDenomHandler {
    type Msg = MsgIssueDenom;

    const KIND_ID: &'static str = kind::MSG_ISSUE_DENOM;
    const LABEL: &'static str = label::ISSUE_DENOM;

    fn extract(payload: &OperationPayload) -> Option<&MsgIssueDenom> {
        match payload {
            OperationPayload::IssueDenom(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgIssueDenom) -> OperationDocumentBody {
        OperationDocumentBody::IssueDenom(MsgIssueDenom {
            id: msg.id.to_lowercase(),
            ..msg.clone()
        })
    }

    fn participants(msg: &MsgIssueDenom) -> Vec<String> {
        vec![msg.sender.clone()]
    }

    fn primary(msg: &MsgIssueDenom, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender)
    }
}

pub struct BurnNftHandler;

impl MessageHandler for BurnNftHandler {
    type Msg = MsgBurnNft;

    const KIND_ID: &'static str = kind::MSG_BURN_NFT;
    const LABEL: &'static str = label::BURN_NFT;

    fn extract(payload: &OperationPayload) -> Option<&MsgBurnNft> {
        match payload {
            OperationPayload::BurnNft(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgBurnNft) -> OperationDocumentBody {
        OperationDocumentBody::BurnNft(MsgBurnNft {
            id: msg.id.to_lowercase(),
            denom_id: msg.denom_id.to_lowercase(),
            sender: msg.sender.clone(),
        })
    }

    fn participants(msg: &MsgBurnNft) -> Vec<String> {
        vec![msg.sender.clone()]
    }

    fn primary(msg: &MsgBurnNft, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender)
    }
}
