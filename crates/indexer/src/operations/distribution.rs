// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{
    MsgFundCommunityPool, MsgSetWithdrawAddress, MsgWithdrawDelegatorReward,
    MsgWithdrawValidatorCommission,
};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(SetWithdrawAddressHandler);
    registry.register(WithdrawDelegatorRewardHandler);
    registry.register(FundCommunityPoolHandler);
    registry.register(WithdrawValidatorCommissionHandler);
}

pub struct SetWithdrawAddressHandler;

impl MessageHandler for SetWithdrawAddressHandler {
    type Msg = MsgSetWithdrawAddress;

    const KIND_ID: &'static str = kind::MSG_SET_WITHDRAW_ADDRESS;
    const LABEL: &'static str = label::SET_WITHDRAW_ADDRESS;

    fn extract(payload: &OperationPayload) -> Option<&MsgSetWithdrawAddress> {
        match payload {
            OperationPayload::SetWithdrawAddress(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgSetWithdrawAddress) -> OperationDocumentBody {
        OperationDocumentBody::SetWithdrawAddress(msg.clone())
    }

    fn participants(msg: &MsgSetWithdrawAddress) -> Vec<String> {
        vec![msg.delegator_address.clone(), msg.withdraw_address.clone()]
    }

    fn primary(msg: &MsgSetWithdrawAddress, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.delegator_address).with_to(&msg.withdraw_address)
    }
}

pub struct WithdrawDelegatorRewardHandler;

impl MessageHandler for WithdrawDelegatorRewardHandler {
    type Msg = MsgWithdrawDelegatorReward;

    const KIND_ID: &'static str = kind::MSG_WITHDRAW_DELEGATOR_REWARD;
    const LABEL: &'static str = label::WITHDRAW_DELEGATOR_REWARD;

    fn extract(payload: &OperationPayload) -> Option<&MsgWithdrawDelegatorReward> {
        match payload {
            OperationPayload::WithdrawDelegatorReward(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgWithdrawDelegatorReward) -> OperationDocumentBody {
        OperationDocumentBody::WithdrawDelegatorReward(msg.clone())
    }

    fn participants(msg: &MsgWithdrawDelegatorReward) -> Vec<String> {
        vec![msg.delegator_address.clone(), msg.validator_address.clone()]
    }

    fn primary(msg: &MsgWithdrawDelegatorReward, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.delegator_address).with_to(&msg.validator_address)
    }
}

pub struct FundCommunityPoolHandler;

impl MessageHandler for FundCommunityPoolHandler {
    type Msg = MsgFundCommunityPool;

    const KIND_ID: &'static str = kind::MSG_FUND_COMMUNITY_POOL;
    const LABEL: &'static str = label::FUND_COMMUNITY_POOL;

    fn extract(payload: &OperationPayload) -> Option<&MsgFundCommunityPool> {
        match payload {
            OperationPayload::FundCommunityPool(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgFundCommunityPool) -> OperationDocumentBody {
        OperationDocumentBody::FundCommunityPool(msg.clone())
    }

    fn participants(msg: &MsgFundCommunityPool) -> Vec<String> {
        vec![msg.depositor.clone()]
    }

    fn primary(msg: &MsgFundCommunityPool, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.depositor).with_amount(msg.amount.clone())
    }
}

pub struct WithdrawValidatorCommissionHandler;

impl MessageHandler for WithdrawValidatorCommissionHandler {
    type Msg = MsgWithdrawValidatorCommission;

    const KIND_ID: &'static str = kind::MSG_WITHDRAW_VALIDATOR_COMMISSION;
    const LABEL: &'static str = label::WITHDRAW_VALIDATOR_COMMISSION;

    fn extract(payload: &OperationPayload) -> Option<&MsgWithdrawValidatorCommission> {
        match payload {
            OperationPayload::WithdrawValidatorCommission(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgWithdrawValidatorCommission) -> OperationDocumentBody {
        OperationDocumentBody::WithdrawValidatorCommission(msg.clone())
    }

    fn participants(msg: &MsgWithdrawValidatorCommission) -> Vec<String> {
        vec![msg.validator_address.clone()]
    }

    fn primary(msg: &MsgWithdrawValidatorCommission, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.validator_address)
    }
}
