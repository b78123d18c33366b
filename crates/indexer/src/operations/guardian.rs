// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Profiler and trustee management. Add and delete share one payload shape
//! each, so the handlers are generic over the kind.

use std::marker::PhantomData;

use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{MsgAddGuardian, MsgDeleteGuardian};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(AddGuardianHandler::<Profiler>::new());
    registry.register(AddGuardianHandler::<Trustee>::new());
    registry.register(DeleteGuardianHandler::<Profiler>::new());
    registry.register(DeleteGuardianHandler::<Trustee>::new());
}

/// Guardian role a handler operates on.
pub trait GuardianRole: Send + Sync + 'static {
    const ADD_KIND_ID: &'static str;
    const ADD_LABEL: &'static str;
    const DELETE_KIND_ID: &'static str;
    const DELETE_LABEL: &'static str;

    fn added(payload: &OperationPayload) -> Option<&MsgAddGuardian>;
    fn deleted(payload: &OperationPayload) -> Option<&MsgDeleteGuardian>;
}

pub struct Profiler;

impl GuardianRole for Profiler {
    const ADD_KIND_ID: &'static str = kind::MSG_ADD_PROFILER;
    const ADD_LABEL: &'static str = label::ADD_PROFILER;
    const DELETE_KIND_ID: &'static str = kind::MSG_DELETE_PROFILER;
    const DELETE_LABEL: &'static str = label::DELETE_PROFILER;

    fn added(payload: &OperationPayload) -> Option<&MsgAddGuardian> {
        match payload {
            OperationPayload::AddProfiler(msg) => Some(msg),
            _ => None,
        }
    }

    fn deleted(payload: &OperationPayload) -> Option<&MsgDeleteGuardian> {
        match payload {
            OperationPayload::DeleteProfiler(msg) => Some(msg),
            _ => None,
        }
    }
}

pub struct Trustee;

impl GuardianRole for Trustee {
    const ADD_KIND_ID: &'static str = kind::MSG_ADD_TRUSTEE;
    const ADD_LABEL: &'static str = label::ADD_TRUSTEE;
    const DELETE_KIND_ID: &'static str = kind::MSG_DELETE_TRUSTEE;
    const DELETE_LABEL: &'static str = label::DELETE_TRUSTEE;

    fn added(payload: &OperationPayload) -> Option<&MsgAddGuardian> {
        match payload {
            OperationPayload::AddTrustee(msg) => Some(msg),
            _ => None,
        }
    }

    fn deleted(payload: &OperationPayload) -> Option<&MsgDeleteGuardian> {
        match payload {
            OperationPayload::DeleteTrustee(msg) => Some(msg),
            _ => None,
        }
    }
}

pub struct AddGuardianHandler<R>(PhantomData<R>);

impl<R: GuardianRole> AddGuardianHandler<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R: GuardianRole> Default for AddGuardianHandler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GuardianRole> MessageHandler for AddGuardianHandler<R> {
    type Msg = MsgAddGuardian;

    const KIND_ID: &'static str = R::ADD_KIND_ID;
    const LABEL: &'static str = R::ADD_LABEL;

    fn extract(payload: &OperationPayload) -> Option<&MsgAddGuardian> {
        R::added(payload)
    }

    fn document(msg: &MsgAddGuardian) -> OperationDocumentBody {
        OperationDocumentBody::AddGuardian(msg.clone())
    }

    fn participants(msg: &MsgAddGuardian) -> Vec<String> {
        vec![msg.address.clone(), msg.added_by.clone()]
    }

    fn primary(msg: &MsgAddGuardian, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.added_by).with_to(&msg.address)
    }
}

pub struct DeleteGuardianHandler<R>(PhantomData<R>);

impl<R: GuardianRole> DeleteGuardianHandler<R> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<R: GuardianRole> Default for DeleteGuardianHandler<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: GuardianRole> MessageHandler for DeleteGuardianHandler<R> {
    type Msg = MsgDeleteGuardian;

    const KIND_ID: &'static str = R::DELETE_KIND_ID;
    const LABEL: &'static str = R::DELETE_LABEL;

    fn extract(payload: &OperationPayload) -> Option<&MsgDeleteGuardian> {
        R::deleted(payload)
    }

    fn document(msg: &MsgDeleteGuardian) -> OperationDocumentBody {
        OperationDocumentBody::DeleteGuardian(msg.clone())
    }

    fn participants(msg: &MsgDeleteGuardian) -> Vec<String> {
        vec![msg.deleted_by.clone(), msg.address.clone()]
    }

    fn primary(msg: &MsgDeleteGuardian, _ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, &msg.deleted_by).with_to(&msg.address)
    }
}
