// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Wire shapes of the operation payloads.
//!
//! Account fields hold bech32 strings exactly as the ledger encodes them inside
//! messages; only transaction signers travel as raw account bytes.

use parity_scale_codec::{Decode, Encode};
use serde::Serialize;

use crate::types::Coin;

// ================================================================================================
// Bank
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgSend {
    pub from_address: String,
    pub to_address: String,
    pub amount: Vec<Coin>,
}

// ================================================================================================
// Staking & slashing
// ================================================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct Description {
    pub moniker: String,
    pub identity: String,
    pub website: String,
    pub security_contact: String,
    pub details: String,
}

/// Commission rates as decimal strings, e.g. "0.100000000000000000".
#[derive(Debug, Clone, Default, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct CommissionRates {
    pub rate: String,
    pub max_rate: String,
    pub max_change_rate: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgCreateValidator {
    pub description: Description,
    pub commission: CommissionRates,
    pub min_self_delegation: String,
    pub delegator_address: String,
    pub validator_address: String,
    pub pubkey: String,
    pub value: Coin,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgEditValidator {
    pub description: Description,
    pub validator_address: String,
    pub commission_rate: Option<String>,
    pub min_self_delegation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgDelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Coin,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgUndelegate {
    pub delegator_address: String,
    pub validator_address: String,
    pub amount: Coin,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgBeginRedelegate {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub amount: Coin,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgUnjail {
    pub validator_addr: String,
}

// ================================================================================================
// Distribution
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgSetWithdrawAddress {
    pub delegator_address: String,
    pub withdraw_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgWithdrawDelegatorReward {
    pub delegator_address: String,
    pub validator_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgFundCommunityPool {
    pub amount: Vec<Coin>,
    pub depositor: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgWithdrawValidatorCommission {
    pub validator_address: String,
}

// ================================================================================================
// Governance
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct ProposalContent {
    pub proposal_type: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgSubmitProposal {
    pub content: ProposalContent,
    pub initial_deposit: Vec<Coin>,
    pub proposer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgDeposit {
    pub proposal_id: u64,
    pub depositor: String,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Encode, Decode, Serialize)]
pub enum VoteOption {
    Unspecified,
    Yes,
    Abstain,
    No,
    NoWithVeto,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgVote {
    pub proposal_id: u64,
    pub voter: String,
    pub option: VoteOption,
}

// ================================================================================================
// Guardian
// ================================================================================================

/// Shared shape of MsgAddProfiler and MsgAddTrustee.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgAddGuardian {
    pub description: String,
    pub address: String,
    pub added_by: String,
}

/// Shared shape of MsgDeleteProfiler and MsgDeleteTrustee.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgDeleteGuardian {
    pub address: String,
    pub deleted_by: String,
}

// ================================================================================================
// HTLC
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgCreateHtlc {
    pub sender: String,
    pub to: String,
    pub receiver_on_other_chain: String,
    pub amount: Vec<Coin>,
    pub hash_lock: String,
    pub timestamp: u64,
    pub time_lock: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgClaimHtlc {
    pub sender: String,
    pub hash_lock: String,
    pub secret: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgRefundHtlc {
    pub sender: String,
    pub hash_lock: String,
}

// ================================================================================================
// Coinswap
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgAddLiquidity {
    pub max_token: Coin,
    pub exact_standard_amt: u128,
    pub min_liquidity: u128,
    pub deadline: i64,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgRemoveLiquidity {
    pub withdraw_liquidity: Coin,
    pub min_token: u128,
    pub min_standard_amt: u128,
    pub deadline: i64,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct SwapLeg {
    pub address: String,
    pub coin: Coin,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgSwapOrder {
    pub input: SwapLeg,
    pub output: SwapLeg,
    pub deadline: i64,
    pub is_buy_order: bool,
}

// ================================================================================================
// Token
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgIssueToken {
    pub symbol: String,
    pub name: String,
    pub scale: u32,
    pub min_unit: String,
    pub initial_supply: u64,
    pub max_supply: u64,
    pub mintable: bool,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgEditToken {
    pub symbol: String,
    pub name: String,
    pub max_supply: u64,
    /// `None` leaves mintability unchanged
    pub mintable: Option<bool>,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgMintToken {
    pub symbol: String,
    pub amount: u64,
    pub to: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgTransferTokenOwner {
    pub src_owner: String,
    pub dst_owner: String,
    pub symbol: String,
}

// ================================================================================================
// NFT
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgIssueDenom {
    pub id: String,
    pub name: String,
    pub schema: String,
    pub sender: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgBurnNft {
    pub id: String,
    pub denom_id: String,
    pub sender: String,
}

// ================================================================================================
// Service
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgBindService {
    pub service_name: String,
    pub provider: String,
    pub deposit: Vec<Coin>,
    pub pricing: String,
    pub qos: u64,
    pub options: String,
    pub owner: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, Serialize)]
pub struct MsgCallService {
    pub service_name: String,
    pub providers: Vec<String>,
    pub consumer: String,
    pub input: String,
    pub service_fee_cap: Vec<Coin>,
    pub timeout: i64,
    pub super_mode: bool,
    pub repeated: bool,
    pub repeated_frequency: u64,
    pub repeated_total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MsgRespondService {
    pub request_id: Vec<u8>,
    pub provider: String,
    pub result: String,
    pub output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct MsgUpdateRequestContext {
    pub request_context_id: Vec<u8>,
    pub providers: Vec<String>,
    pub consumer: String,
    pub service_fee_cap: Vec<Coin>,
    pub timeout: i64,
    pub repeated_frequency: u64,
    pub repeated_total: i64,
}

// ================================================================================================
// Unrecognized
// ================================================================================================

/// A message the codec has no shape for; carried through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct AnyMessage {
    pub type_url: String,
    pub value: Vec<u8>,
}
