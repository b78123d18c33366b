// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

/// Type identifiers of the operation kinds the codec understands.
/// The operation registry is keyed by these.
pub mod kind {
    pub const MSG_SEND: &str = "/cosmos.bank.v1beta1.MsgSend";

    pub const MSG_CREATE_VALIDATOR: &str = "/cosmos.staking.v1beta1.MsgCreateValidator";
    pub const MSG_EDIT_VALIDATOR: &str = "/cosmos.staking.v1beta1.MsgEditValidator";
    pub const MSG_DELEGATE: &str = "/cosmos.staking.v1beta1.MsgDelegate";
    pub const MSG_UNDELEGATE: &str = "/cosmos.staking.v1beta1.MsgUndelegate";
    pub const MSG_BEGIN_REDELEGATE: &str = "/cosmos.staking.v1beta1.MsgBeginRedelegate";
    pub const MSG_UNJAIL: &str = "/cosmos.slashing.v1beta1.MsgUnjail";

    pub const MSG_SET_WITHDRAW_ADDRESS: &str =
        "/cosmos.distribution.v1beta1.MsgSetWithdrawAddress";
    pub const MSG_WITHDRAW_DELEGATOR_REWARD: &str =
        "/cosmos.distribution.v1beta1.MsgWithdrawDelegatorReward";
    pub const MSG_FUND_COMMUNITY_POOL: &str = "/cosmos.distribution.v1beta1.MsgFundCommunityPool";
    pub const MSG_WITHDRAW_VALIDATOR_COMMISSION: &str =
        "/cosmos.distribution.v1beta1.MsgWithdrawValidatorCommission";

    pub const MSG_SUBMIT_PROPOSAL: &str = "/cosmos.gov.v1beta1.MsgSubmitProposal";
    pub const MSG_DEPOSIT: &str = "/cosmos.gov.v1beta1.MsgDeposit";
    pub const MSG_VOTE: &str = "/cosmos.gov.v1beta1.MsgVote";

    pub const MSG_ADD_PROFILER: &str = "/irishub.guardian.MsgAddProfiler";
    pub const MSG_ADD_TRUSTEE: &str = "/irishub.guardian.MsgAddTrustee";
    pub const MSG_DELETE_PROFILER: &str = "/irishub.guardian.MsgDeleteProfiler";
    pub const MSG_DELETE_TRUSTEE: &str = "/irishub.guardian.MsgDeleteTrustee";

    pub const MSG_CREATE_HTLC: &str = "/irismod.htlc.MsgCreateHTLC";
    pub const MSG_CLAIM_HTLC: &str = "/irismod.htlc.MsgClaimHTLC";
    pub const MSG_REFUND_HTLC: &str = "/irismod.htlc.MsgRefundHTLC";

    pub const MSG_ADD_LIQUIDITY: &str = "/irismod.coinswap.MsgAddLiquidity";
    pub const MSG_REMOVE_LIQUIDITY: &str = "/irismod.coinswap.MsgRemoveLiquidity";
    pub const MSG_SWAP_ORDER: &str = "/irismod.coinswap.MsgSwapOrder";

    pub const MSG_ISSUE_TOKEN: &str = "/irismod.token.MsgIssueToken";
    pub const MSG_EDIT_TOKEN: &str = "/irismod.token.MsgEditToken";
    pub const MSG_MINT_TOKEN: &str = "/irismod.token.MsgMintToken";
    pub const MSG_TRANSFER_TOKEN_OWNER: &str = "/irismod.token.MsgTransferTokenOwner";

    pub const MSG_ISSUE_DENOM: &str = "/irismod.nft.MsgIssueDenom";
    pub const MSG_BURN_NFT: &str = "/irismod.nft.MsgBurnNFT";

    pub const MSG_BIND_SERVICE: &str = "/irismod.service.MsgBindService";
    pub const MSG_CALL_SERVICE: &str = "/irismod.service.MsgCallService";
    pub const MSG_RESPOND_SERVICE: &str = "/irismod.service.MsgRespondService";
    pub const MSG_UPDATE_REQUEST_CONTEXT: &str = "/irismod.service.MsgUpdateRequestContext";
}

/// Labels written to the record's `type` field and to each operation document.
pub mod label {
    pub const TRANSFER: &str = "Transfer";

    pub const CREATE_VALIDATOR: &str = "CreateValidator";
    pub const EDIT_VALIDATOR: &str = "EditValidator";
    pub const DELEGATE: &str = "Delegate";
    pub const BEGIN_UNBONDING: &str = "BeginUnbonding";
    pub const BEGIN_REDELEGATE: &str = "BeginRedelegate";
    pub const UNJAIL: &str = "Unjail";

    pub const SET_WITHDRAW_ADDRESS: &str = "SetWithdrawAddress";
    pub const WITHDRAW_DELEGATOR_REWARD: &str = "WithdrawDelegatorReward";
    pub const FUND_COMMUNITY_POOL: &str = "FundCommunityPool";
    pub const WITHDRAW_VALIDATOR_COMMISSION: &str = "WithdrawValidatorCommission";

    pub const SUBMIT_PROPOSAL: &str = "SubmitProposal";
    pub const DEPOSIT: &str = "Deposit";
    pub const VOTE: &str = "Vote";

    pub const ADD_PROFILER: &str = "AddProfiler";
    pub const ADD_TRUSTEE: &str = "AddTrustee";
    pub const DELETE_PROFILER: &str = "DeleteProfiler";
    pub const DELETE_TRUSTEE: &str = "DeleteTrustee";

    pub const CREATE_HTLC: &str = "CreateHTLC";
    pub const CLAIM_HTLC: &str = "ClaimHTLC";
    pub const REFUND_HTLC: &str = "RefundHTLC";

    pub const ADD_LIQUIDITY: &str = "AddLiquidity";
    pub const REMOVE_LIQUIDITY: &str = "RemoveLiquidity";
    pub const SWAP_ORDER: &str = "SwapOrder";

    pub const ISSUE_TOKEN: &str = "IssueToken";
    pub const EDIT_TOKEN: &str = "EditToken";
    pub const MINT_TOKEN: &str = "MintToken";
    pub const TRANSFER_TOKEN_OWNER: &str = "TransferTokenOwner";

    pub const ISSUE_DENOM: &str = "IssueDenom";
    pub const BURN_NFT: &str = "BurnNFT";

    pub const BIND_SERVICE: &str = "BindService";
    pub const CALL_SERVICE: &str = "CallService";
    pub const RESPOND_SERVICE: &str = "RespondService";
    pub const UPDATE_REQUEST_CONTEXT: &str = "UpdateRequestContext";
}

/// Event emitted by the gov module when a deposit is made, including the
/// initial deposit of a new proposal.
pub const EVENT_TYPE_PROPOSAL_DEPOSIT: &str = "proposal_deposit";
pub const ATTRIBUTE_PROPOSAL_ID: &str = "proposal_id";
pub const ATTRIBUTE_AMOUNT: &str = "amount";
