// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Service bindings, invocations and responses.
//!
//! The record's `from` for these kinds is the transaction's first signer
//! rather than a payload field.

use super::document::{RespondServiceDoc, UpdateRequestContextDoc};
use super::registry::OperationRegistry;
use super::{HandlerContext, MessageHandler, OperationDocumentBody, PrimaryFields};
use crate::codec::OperationPayload;
use crate::codec::msgs::{
    MsgBindService, MsgCallService, MsgRespondService, MsgUpdateRequestContext,
};
use crate::consts::{kind, label};

pub fn register_handlers(registry: &mut OperationRegistry) {
    registry.register(BindServiceHandler);
    registry.register(CallServiceHandler);
    registry.register(RespondServiceHandler);
    registry.register(UpdateRequestContextHandler);
}

pub struct BindServiceHandler;

impl MessageHandler for BindServiceHandler {
    type Msg = MsgBindService;

    const KIND_ID: &'static str = kind::MSG_BIND_SERVICE;
    const LABEL: &'static str = label::BIND_SERVICE;

    fn extract(payload: &OperationPayload) -> Option<&MsgBindService> {
        match payload {
            OperationPayload::BindService(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgBindService) -> OperationDocumentBody {
        OperationDocumentBody::BindService(msg.clone())
    }

    fn participants(msg: &MsgBindService) -> Vec<String> {
        vec![msg.provider.clone(), msg.owner.clone()]
    }

    fn primary(msg: &MsgBindService, ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, ctx.first_signer()).with_amount(msg.deposit.clone())
    }
}

pub struct CallServiceHandler;

impl MessageHandler for CallServiceHandler {
    type Msg = MsgCallService;

    const KIND_ID: &'static str = kind::MSG_CALL_SERVICE;
    const LABEL: &'static str = label::CALL_SERVICE;

    fn extract(payload: &OperationPayload) -> Option<&MsgCallService> {
        match payload {
            OperationPayload::CallService(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgCallService) -> OperationDocumentBody {
        OperationDocumentBody::CallService(msg.clone())
    }

    fn participants(msg: &MsgCallService) -> Vec<String> {
        let mut addrs = msg.providers.clone();
        addrs.push(msg.consumer.clone());
        addrs
    }

    fn primary(_msg: &MsgCallService, ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, ctx.first_signer())
    }
}

pub struct RespondServiceHandler;

impl MessageHandler for RespondServiceHandler {
    type Msg = MsgRespondService;

    const KIND_ID: &'static str = kind::MSG_RESPOND_SERVICE;
    const LABEL: &'static str = label::RESPOND_SERVICE;

    fn extract(payload: &OperationPayload) -> Option<&MsgRespondService> {
        match payload {
            OperationPayload::RespondService(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgRespondService) -> OperationDocumentBody {
        OperationDocumentBody::RespondService(RespondServiceDoc::from(msg))
    }

    fn participants(msg: &MsgRespondService) -> Vec<String> {
        vec![msg.provider.clone()]
    }

    fn primary(_msg: &MsgRespondService, ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, ctx.first_signer())
    }
}

pub struct UpdateRequestContextHandler;

impl MessageHandler for UpdateRequestContextHandler {
    type Msg = MsgUpdateRequestContext;

    const KIND_ID: &'static str = kind::MSG_UPDATE_REQUEST_CONTEXT;
    const LABEL: &'static str = label::UPDATE_REQUEST_CONTEXT;

    fn extract(payload: &OperationPayload) -> Option<&MsgUpdateRequestContext> {
        match payload {
            OperationPayload::UpdateRequestContext(msg) => Some(msg),
            _ => None,
        }
    }

    fn document(msg: &MsgUpdateRequestContext) -> OperationDocumentBody {
        OperationDocumentBody::UpdateRequestContext(UpdateRequestContextDoc::from(msg))
    }

    fn participants(msg: &MsgUpdateRequestContext) -> Vec<String> {
        let mut addrs = vec![msg.consumer.clone()];
        addrs.extend(msg.providers.iter().cloned());
        addrs
    }

    fn primary(_msg: &MsgUpdateRequestContext, ctx: &HandlerContext<'_>) -> PrimaryFields {
        PrimaryFields::new(Self::LABEL, ctx.first_signer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::OperationHandler;
    use crate::operations::test_support::{ctx, signer};
    use crate::types::{Coin, TxHash};

    #[test]
    fn test_bind_service_from_is_first_signer() {
        let hash = TxHash([0; 32]);
        let signers = vec![signer("iaa1signer"), signer("iaa1other")];
        let payload = OperationPayload::BindService(MsgBindService {
            service_name: "oracle".to_string(),
            provider: "iaa1provider".to_string(),
            deposit: vec![Coin::new("uiris", 5_000)],
            pricing: "{}".to_string(),
            qos: 50,
            options: "{}".to_string(),
            owner: "iaa1owner".to_string(),
        });

        let fields = BindServiceHandler
            .primary_fields(&payload, &ctx(&hash, &signers, &[]))
            .unwrap();
        assert_eq!(fields.from, "iaa1signer");
        assert_eq!(fields.amount, vec![Coin::new("uiris", 5_000)]);
        assert_eq!(
            BindServiceHandler.participant_addresses(&payload).unwrap(),
            vec!["iaa1provider", "iaa1owner"]
        );
    }

    #[test]
    fn test_call_service_participants() {
        let payload = OperationPayload::CallService(MsgCallService {
            service_name: "oracle".to_string(),
            providers: vec!["iaa1p1".to_string(), "iaa1p2".to_string()],
            consumer: "iaa1consumer".to_string(),
            input: "{}".to_string(),
            service_fee_cap: vec![],
            timeout: 100,
            super_mode: false,
            repeated: false,
            repeated_frequency: 0,
            repeated_total: 0,
        });
        assert_eq!(
            CallServiceHandler.participant_addresses(&payload).unwrap(),
            vec!["iaa1p1", "iaa1p2", "iaa1consumer"]
        );
    }

    #[test]
    fn test_update_request_context_id_is_hex() {
        let payload = OperationPayload::UpdateRequestContext(MsgUpdateRequestContext {
            request_context_id: vec![0x0a, 0xbc],
            providers: vec!["iaa1p1".to_string()],
            consumer: "iaa1consumer".to_string(),
            service_fee_cap: vec![],
            timeout: 0,
            repeated_frequency: 0,
            repeated_total: -1,
        });

        let doc = UpdateRequestContextHandler.build(&payload).unwrap();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["type"], "UpdateRequestContext");
        assert_eq!(json["msg"]["request_context_id"], "0ABC");
        assert_eq!(
            UpdateRequestContextHandler
                .participant_addresses(&payload)
                .unwrap(),
            vec!["iaa1consumer", "iaa1p1"]
        );
    }

    #[test]
    fn test_respond_service_without_signers_has_empty_from() {
        let hash = TxHash([0; 32]);
        let payload = OperationPayload::RespondService(MsgRespondService {
            request_id: vec![1],
            provider: "iaa1provider".to_string(),
            result: String::new(),
            output: String::new(),
        });
        let fields = RespondServiceHandler
            .primary_fields(&payload, &ctx(&hash, &[], &[]))
            .unwrap();
        assert_eq!(fields.from, "");
    }
}
