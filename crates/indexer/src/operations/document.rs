// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;

use crate::codec::msgs::*;
use crate::types::Coin;

/// One normalized operation inside a record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationDocument {
    #[serde(rename = "type")]
    pub kind: String,
    pub msg: OperationDocumentBody,
}

impl OperationDocument {
    pub fn new(kind: impl Into<String>, msg: OperationDocumentBody) -> Self {
        Self {
            kind: kind.into(),
            msg,
        }
    }
}

/// Kind-specific payload of an [`OperationDocument`].
///
/// Serialized without a tag; the enclosing document's `type` names the shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationDocumentBody {
    Transfer(MsgSend),

    CreateValidator(MsgCreateValidator),
    EditValidator(MsgEditValidator),
    Delegate(MsgDelegate),
    BeginUnbonding(MsgUndelegate),
    BeginRedelegate(MsgBeginRedelegate),
    Unjail(MsgUnjail),

    SetWithdrawAddress(MsgSetWithdrawAddress),
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
    FundCommunityPool(MsgFundCommunityPool),
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),

    SubmitProposal(MsgSubmitProposal),
    Deposit(MsgDeposit),
    Vote(MsgVote),

    AddGuardian(MsgAddGuardian),
    DeleteGuardian(MsgDeleteGuardian),

    CreateHtlc(MsgCreateHtlc),
    ClaimHtlc(MsgClaimHtlc),
    RefundHtlc(MsgRefundHtlc),

    AddLiquidity(MsgAddLiquidity),
    RemoveLiquidity(MsgRemoveLiquidity),
    SwapOrder(MsgSwapOrder),

    IssueToken(MsgIssueToken),
    EditToken(MsgEditToken),
    MintToken(MsgMintToken),
    TransferTokenOwner(MsgTransferTokenOwner),

    IssueDenom(MsgIssueDenom),
    BurnNft(MsgBurnNft),

    BindService(MsgBindService),
    CallService(MsgCallService),
    RespondService(RespondServiceDoc),
    UpdateRequestContext(UpdateRequestContextDoc),
}

/// [`MsgRespondService`] with its request id rendered as upper hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RespondServiceDoc {
    pub request_id: String,
    pub provider: String,
    pub result: String,
    pub output: String,
}

impl From<&MsgRespondService> for RespondServiceDoc {
    fn from(msg: &MsgRespondService) -> Self {
        Self {
            request_id: hex::encode_upper(&msg.request_id),
            provider: msg.provider.clone(),
            result: msg.result.clone(),
            output: msg.output.clone(),
        }
    }
}

/// [`MsgUpdateRequestContext`] with its context id rendered as upper hex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UpdateRequestContextDoc {
    pub request_context_id: String,
    pub providers: Vec<String>,
    pub consumer: String,
    pub service_fee_cap: Vec<Coin>,
    pub timeout: i64,
    pub repeated_frequency: u64,
    pub repeated_total: i64,
}

impl From<&MsgUpdateRequestContext> for UpdateRequestContextDoc {
    fn from(msg: &MsgUpdateRequestContext) -> Self {
        Self {
            request_context_id: hex::encode_upper(&msg.request_context_id),
            providers: msg.providers.clone(),
            consumer: msg.consumer.clone(),
            service_fee_cap: msg.service_fee_cap.clone(),
            timeout: msg.timeout,
            repeated_frequency: msg.repeated_frequency,
            repeated_total: msg.repeated_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_document_serializes_with_type_and_untagged_msg() {
        let doc = OperationDocument::new(
            "Transfer",
            OperationDocumentBody::Transfer(MsgSend {
                from_address: "iaa1a".to_string(),
                to_address: "iaa1b".to_string(),
                amount: vec![Coin::new("uiris", 3)],
            }),
        );

        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "Transfer",
                "msg": {
                    "from_address": "iaa1a",
                    "to_address": "iaa1b",
                    "amount": [{ "denom": "uiris", "amount": 3 }]
                }
            })
        );
    }

    #[test]
    fn test_respond_service_request_id_is_hex() {
        let doc = RespondServiceDoc::from(&MsgRespondService {
            request_id: vec![0xde, 0xad, 0x01],
            provider: "iaa1p".to_string(),
            result: "{\"code\":200}".to_string(),
            output: String::new(),
        });
        assert_eq!(doc.request_id, "DEAD01");
    }
}
