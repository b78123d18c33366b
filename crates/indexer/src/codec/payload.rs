// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use parity_scale_codec::{Decode, Encode};

use super::msgs::*;
use crate::consts::kind;

/// Closed set of operation payloads the codec can produce.
///
/// Discriminants are part of the wire format and must never be reused.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub enum OperationPayload {
    #[codec(index = 0)]
    Send(MsgSend),

    #[codec(index = 10)]
    CreateValidator(MsgCreateValidator),
    #[codec(index = 11)]
    EditValidator(MsgEditValidator),
    #[codec(index = 12)]
    Delegate(MsgDelegate),
    #[codec(index = 13)]
    Undelegate(MsgUndelegate),
    #[codec(index = 14)]
    BeginRedelegate(MsgBeginRedelegate),
    #[codec(index = 15)]
    Unjail(MsgUnjail),

    #[codec(index = 20)]
    SetWithdrawAddress(MsgSetWithdrawAddress),
    #[codec(index = 21)]
    WithdrawDelegatorReward(MsgWithdrawDelegatorReward),
    #[codec(index = 22)]
    FundCommunityPool(MsgFundCommunityPool),
    #[codec(index = 23)]
    WithdrawValidatorCommission(MsgWithdrawValidatorCommission),

    #[codec(index = 30)]
    SubmitProposal(MsgSubmitProposal),
    #[codec(index = 31)]
    Deposit(MsgDeposit),
    #[codec(index = 32)]
    Vote(MsgVote),

    #[codec(index = 40)]
    AddProfiler(MsgAddGuardian),
    #[codec(index = 41)]
    AddTrustee(MsgAddGuardian),
    #[codec(index = 42)]
    DeleteProfiler(MsgDeleteGuardian),
    #[codec(index = 43)]
    DeleteTrustee(MsgDeleteGuardian),

    #[codec(index = 50)]
    CreateHtlc(MsgCreateHtlc),
    #[codec(index = 51)]
    ClaimHtlc(MsgClaimHtlc),
    #[codec(index = 52)]
    RefundHtlc(MsgRefundHtlc),

    #[codec(index = 60)]
    AddLiquidity(MsgAddLiquidity),
    #[codec(index = 61)]
    RemoveLiquidity(MsgRemoveLiquidity),
    #[codec(index = 62)]
    SwapOrder(MsgSwapOrder),

    #[codec(index = 70)]
    IssueToken(MsgIssueToken),
    #[codec(index = 71)]
    EditToken(MsgEditToken),
    #[codec(index = 72)]
    MintToken(MsgMintToken),
    #[codec(index = 73)]
    TransferTokenOwner(MsgTransferTokenOwner),

    #[codec(index = 80)]
    IssueDenom(MsgIssueDenom),
    #[codec(index = 81)]
    BurnNft(MsgBurnNft),

    #[codec(index = 90)]
    BindService(MsgBindService),
    #[codec(index = 91)]
    CallService(MsgCallService),
    #[codec(index = 92)]
    RespondService(MsgRespondService),
    #[codec(index = 93)]
    UpdateRequestContext(MsgUpdateRequestContext),

    #[codec(index = 255)]
    Other(AnyMessage),
}

impl OperationPayload {
    /// Type identifier used to look the payload up in the operation registry.
    pub fn kind_id(&self) -> &str {
        match self {
            Self::Send(_) => kind::MSG_SEND,
            Self::CreateValidator(_) => kind::MSG_CREATE_VALIDATOR,
            Self::EditValidator(_) => kind::MSG_EDIT_VALIDATOR,
            Self::Delegate(_) => kind::MSG_DELEGATE,
            Self::Undelegate(_) => kind::MSG_UNDELEGATE,
            Self::BeginRedelegate(_) => kind::MSG_BEGIN_REDELEGATE,
            Self::Unjail(_) => kind::MSG_UNJAIL,
            Self::SetWithdrawAddress(_) => kind::MSG_SET_WITHDRAW_ADDRESS,
            Self::WithdrawDelegatorReward(_) => kind::MSG_WITHDRAW_DELEGATOR_REWARD,
            Self::FundCommunityPool(_) => kind::MSG_FUND_COMMUNITY_POOL,
            Self::WithdrawValidatorCommission(_) => kind::MSG_WITHDRAW_VALIDATOR_COMMISSION,
            Self::SubmitProposal(_) => kind::MSG_SUBMIT_PROPOSAL,
            Self::Deposit(_) => kind::MSG_DEPOSIT,
            Self::Vote(_) => kind::MSG_VOTE,
            Self::AddProfiler(_) => kind::MSG_ADD_PROFILER,
            Self::AddTrustee(_) => kind::MSG_ADD_TRUSTEE,
            Self::DeleteProfiler(_) => kind::MSG_DELETE_PROFILER,
            Self::DeleteTrustee(_) => kind::MSG_DELETE_TRUSTEE,
            Self::CreateHtlc(_) => kind::MSG_CREATE_HTLC,
            Self::ClaimHtlc(_) => kind::MSG_CLAIM_HTLC,
            Self::RefundHtlc(_) => kind::MSG_REFUND_HTLC,
            Self::AddLiquidity(_) => kind::MSG_ADD_LIQUIDITY,
            Self::RemoveLiquidity(_) => kind::MSG_REMOVE_LIQUIDITY,
            Self::SwapOrder(_) => kind::MSG_SWAP_ORDER,
            Self::IssueToken(_) => kind::MSG_ISSUE_TOKEN,
            Self::EditToken(_) => kind::MSG_EDIT_TOKEN,
            Self::MintToken(_) => kind::MSG_MINT_TOKEN,
            Self::TransferTokenOwner(_) => kind::MSG_TRANSFER_TOKEN_OWNER,
            Self::IssueDenom(_) => kind::MSG_ISSUE_DENOM,
            Self::BurnNft(_) => kind::MSG_BURN_NFT,
            Self::BindService(_) => kind::MSG_BIND_SERVICE,
            Self::CallService(_) => kind::MSG_CALL_SERVICE,
            Self::RespondService(_) => kind::MSG_RESPOND_SERVICE,
            Self::UpdateRequestContext(_) => kind::MSG_UPDATE_REQUEST_CONTEXT,
            Self::Other(any) => &any.type_url,
        }
    }
}
