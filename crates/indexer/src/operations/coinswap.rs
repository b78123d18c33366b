// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{MsgAddLiquidity, MsgRemoveLiquidity, MsgSwapOrder};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(AddLiquidityHandler);
    registry.register(RemoveLiquidityHandler);
    registry.register(SwapOrderHandler);
}

pub struct AddLiquidityHandler;

impl MessageHandler for AddLiquidityHandler {
    type Msg = MsgAddLiquidity;

    const KIND_ID: &'static str = kind::MSG_ADD_LIQUIDITY;
    const LABEL: &'static str = label::ADD_LIQUIDITY;

    fn extract(payload: &OperationPayload) -> Option<&MsgAddLiquidity> {
        match payload {
            OperationPayload::AddLiquidity(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgAddLiquidity) -> OperationDocumentBody {
        OperationDocumentBody::AddLiquidity(msg.clone())
    }

    fn participants(msg: &MsgAddLiquidity) -> Vec<String> {
        vec![msg.sender.clone()]
    }

    fn primary(msg: &MsgAddLiquidity, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender).with_amount(vec![msg.max_token.clone()])
    }
}

pub struct RemoveLiquidityHandler;

impl MessageHandler for RemoveLiquidityHandler {
    type Msg = MsgRemoveLiquidity;

    const KIND_ID: &'static str = kind::MSG_REMOVE_LIQUIDITY;
    const LABEL: &'static str = label::REMOVE_LIQUIDITY;

    fn extract(payload: &OperationPayload) -> Option<&MsgRemoveLiquidity> {
        match payload {
            OperationPayload::RemoveLiquidity(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgRemoveLiquidity) -> OperationDocumentBody {
        OperationDocumentBody::RemoveLiquidity(msg.clone())
    }

    fn participants(msg: &MsgRemoveLiquidity) -> Vec<String> {
        vec![msg.sender.clone()]
    }

    fn primary(msg: &MsgRemoveLiquidity, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.sender)
            .with_amount(vec![msg.withdraw_liquidity.clone()])
    }
}

/// Swap between two pool legs; the input leg pays.
pub struct SwapOrderHandler;

impl MessageHandler for SwapOrderHandler {
    type Msg = MsgSwapOrder;

    const KIND_ID: &'static str = kind::MSG_SWAP_ORDER;
    const LABEL: &'static str = label::SWAP_ORDER;

    fn extract(payload: &OperationPayload) -> Option<&MsgSwapOrder> {
        match payload {
            OperationPayload::SwapOrder(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgSwapOrder) -> OperationDocumentBody {
        OperationDocumentBody::SwapOrder(msg.clone())
    }

    fn participants(msg: &MsgSwapOrder) -> Vec<String> {
        vec![msg.input.address.clone(), msg.output.address.clone()]
    }

    fn primary(msg: &MsgSwapOrder, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.input.address)
            .with_to(&msg.output.address)
            .with_amount(vec![msg.input.coin.clone()])
    }
}
