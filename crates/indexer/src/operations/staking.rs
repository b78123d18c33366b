// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Validator lifecycle and delegation, plus slashing's unjail.

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{
    MsgBeginRedelegate, MsgCreateValidator, MsgDelegate, MsgEditValidator, MsgUndelegate,
    MsgUnjail,
};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(CreateValidatorHandler);
    registry.register(EditValidatorHandler);
    registry.register(DelegateHandler);
    registry.register(BeginUnbondingHandler);
    registry.register(BeginRedelegateHandler);
    registry.register(UnjailHandler);
}

pub struct CreateValidatorHandler;

impl MessageHandler for CreateValidatorHandler {
    type Msg = MsgCreateValidator;

    const KIND_ID: &'static str = kind::MSG_CREATE_VALIDATOR;
    const LABEL: &'static str = label::CREATE_VALIDATOR;

    fn extract(payload: &OperationPayload) -> Option<&MsgCreateValidator> {
        match payload {
            OperationPayload::CreateValidator(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgCreateValidator) -> OperationDocumentBody {
        OperationDocumentBody::CreateValidator(msg.clone())
    }

    fn participants(msg: &MsgCreateValidator) -> Vec<String> {
        vec![msg.delegator_address.clone(), msg.validator_address.clone()]
    }

    fn primary(msg: &MsgCreateValidator, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.delegator_address)
            .with_to(&msg.validator_address)
            .with_amount(vec![msg.value.clone()])
    }
}

pub struct EditValidatorHandler;

impl MessageHandler for EditValidatorHandler {
    type Msg = MsgEditValidator;

    const KIND_ID: &'static str = kind::MSG_EDIT_VALIDATOR;
    const LABEL: &'static str = label::EDIT_VALIDATOR;

    fn extract(payload: &OperationPayload) -> Option<&MsgEditValidator> {
        match payload {
            OperationPayload::EditValidator(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgEditValidator) -> OperationDocumentBody {
        OperationDocumentBody::EditValidator(msg.clone())
    }

    fn participants(msg: &MsgEditValidator) -> Vec<String> {
        vec![msg.validator_address.clone()]
    }

    fn primary(msg: &MsgEditValidator, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.validator_address)
    }
}

pub struct DelegateHandler;

impl MessageHandler for DelegateHandler {
    type Msg = MsgDelegate;

    const KIND_ID: &'static str = kind::MSG_DELEGATE;
    const LABEL: &'static str = label::DELEGATE;

    fn extract(payload: &OperationPayload) -> Option<&MsgDelegate> {
        match payload {
            OperationPayload::Delegate(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgDelegate) -> OperationDocumentBody {
        OperationDocumentBody::Delegate(msg.clone())
    }

    fn participants(msg: &MsgDelegate) -> Vec<String> {
        vec![msg.delegator_address.clone(), msg.validator_address.clone()]
    }

    fn primary(msg: &MsgDelegate, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.delegator_address)
            .with_to(&msg.validator_address)
            .with_amount(vec![msg.amount.clone()])
    }
}

/// Undelegation. Recorded under the historical "BeginUnbonding" label.
pub struct BeginUnbondingHandler;

impl MessageHandler for BeginUnbondingHandler {
    type Msg = MsgUndelegate;

    const KIND_ID: &'static str = kind::MSG_UNDELEGATE;
    const LABEL: &'static str = label::BEGIN_UNBONDING;

    fn extract(payload: &OperationPayload) -> Option<&MsgUndelegate> {
        match payload {
            OperationPayload::Undelegate(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgUndelegate) -> OperationDocumentBody {
        OperationDocumentBody::BeginUnbonding(msg.clone())
    }

    fn participants(msg: &MsgUndelegate) -> Vec<String> {
        vec![msg.delegator_address.clone(), msg.validator_address.clone()]
    }

    fn primary(msg: &MsgUndelegate, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.delegator_address)
            .with_to(&msg.validator_address)
            .with_amount(vec![msg.amount.clone()])
    }
}

pub struct BeginRedelegateHandler;

impl MessageHandler for BeginRedelegateHandler {
    type Msg = MsgBeginRedelegate;

    const KIND_ID: &'static str = kind::MSG_BEGIN_REDELEGATE;
    const LABEL: &'static str = label::BEGIN_REDELEGATE;

    fn extract(payload: &OperationPayload) -> Option<&MsgBeginRedelegate> {
        match payload {
            OperationPayload::BeginRedelegate(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgBeginRedelegate) -> OperationDocumentBody {
        OperationDocumentBody::BeginRedelegate(msg.clone())
    }

    fn participants(msg: &MsgBeginRedelegate) -> Vec<String> {
        vec![
            msg.delegator_address.clone(),
            msg.validator_src_address.clone(),
            msg.validator_dst_address.clone(),
        ]
    }

    fn primary(msg: &MsgBeginRedelegate, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.delegator_address)
            .with_to(&msg.validator_dst_address)
            .with_amount(vec![msg.amount.clone()])
    }
}

pub struct UnjailHandler;

impl MessageHandler for UnjailHandler {
    type Msg = MsgUnjail;

    const KIND_ID: &'static str = kind::MSG_UNJAIL;
    const LABEL: &'static str = label::UNJAIL;

    fn extract(payload: &OperationPayload) -> Option<&MsgUnjail> {
        match payload {
            OperationPayload::Unjail(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgUnjail) -> OperationDocumentBody {
        OperationDocumentBody::Unjail(msg.clone())
    }

    fn participants(msg: &MsgUnjail) -> Vec<String> {
        vec![msg.validator_addr.clone()]
    }

    fn primary(msg: &MsgUnjail, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.validator_addr)
    }
}
