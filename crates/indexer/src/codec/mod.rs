// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transaction decoding.
//!
//! The normalizer only depends on [`TxDecoder`]; [`ScaleTxDecoder`] is the
//! default implementation, reading a SCALE-encoded [`WireTx`].

pub mod msgs;
pub mod payload;

pub use payload::OperationPayload;

use parity_scale_codec::{Decode, DecodeAll, Encode};
use thiserror::Error;

use crate::types::{Coin, Fee};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Transaction is empty")]
    Empty,

    #[error("Malformed transaction bytes: {0}")]
    Malformed(#[from] parity_scale_codec::Error),
}

// ================================================================================================
// Wire format
// ================================================================================================

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct WireTx {
    pub body: WireBody,
    pub fee: WireFee,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct WireBody {
    pub messages: Vec<WireMessage>,
    pub memo: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct WireMessage {
    /// Raw account identifiers that must sign this message
    pub signers: Vec<Vec<u8>>,
    pub payload: OperationPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
pub struct WireFee {
    pub amount: Vec<Coin>,
    pub gas_limit: u64,
}

// ================================================================================================
// Decoded form
// ================================================================================================

/// One operation of a decoded transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub signers: Vec<Vec<u8>>,
    pub payload: OperationPayload,
}

impl Operation {
    pub fn kind_id(&self) -> &str {
        self.payload.kind_id()
    }
}

/// Structured transaction, read-only once produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTransaction {
    /// Every operation signer, in first-seen order, without repeats
    pub signers: Vec<Vec<u8>>,
    pub fee: Fee,
    pub memo: String,
    pub operations: Vec<Operation>,
}

impl DecodedTransaction {
    /// A transaction is usable only when its first operation carries a signer.
    pub fn is_signed(&self) -> bool {
        self.operations
            .first()
            .is_some_and(|op| !op.signers.is_empty())
    }
}

impl From<WireTx> for DecodedTransaction {
    fn from(tx: WireTx) -> Self {
        let mut signers: Vec<Vec<u8>> = Vec::new();
        for message in &tx.body.messages {
            for signer in &message.signers {
                if !signers.contains(signer) {
                    signers.push(signer.clone());
                }
            }
        }

        let operations = tx
            .body
            .messages
            .into_iter()
            .map(|message| Operation {
                signers: message.signers,
                payload: message.payload,
            })
            .collect();

        Self {
            signers,
            fee: Fee {
                amount: tx.fee.amount,
                gas: tx.fee.gas_limit,
            },
            memo: tx.body.memo,
            operations,
        }
    }
}

// ================================================================================================
// Decoder
// ================================================================================================

/// Turns raw transaction bytes into a [`DecodedTransaction`].
pub trait TxDecoder: Send + Sync {
    fn decode(&self, raw_tx: &[u8]) -> Result<DecodedTransaction, DecodeError>;
}

/// Decoder for SCALE-encoded [`WireTx`] bytes. Trailing bytes are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScaleTxDecoder;

impl TxDecoder for ScaleTxDecoder {
    fn decode(&self, raw_tx: &[u8]) -> Result<DecodedTransaction, DecodeError> {
        if raw_tx.is_empty() {
            return Err(DecodeError::Empty);
        }
        let wire = WireTx::decode_all(&mut &raw_tx[..])?;
        Ok(wire.into())
    }
}

#[cfg(test)]
mod tests {
    use super::msgs::{AnyMessage, MsgSend, MsgUnjail};
    use super::*;

    fn send(from: &str, to: &str) -> OperationPayload {
        OperationPayload::Send(MsgSend {
            from_address: from.to_string(),
            to_address: to.to_string(),
            amount: vec![Coin::new("uiris", 5)],
        })
    }

    fn sample_tx() -> WireTx {
        WireTx {
            body: WireBody {
                messages: vec![
                    WireMessage {
                        signers: vec![vec![1; 20]],
                        payload: send("iaa1alice", "iaa1bob"),
                    },
                    WireMessage {
                        signers: vec![vec![2; 20], vec![1; 20]],
                        payload: OperationPayload::Unjail(MsgUnjail {
                            validator_addr: "iva1val".to_string(),
                        }),
                    },
                ],
                memo: "hello".to_string(),
            },
            fee: WireFee {
                amount: vec![Coin::new("uiris", 100)],
                gas_limit: 50,
            },
        }
    }

    #[test]
    fn test_decode_round_trips_structure() {
        let raw = sample_tx().encode();
        let decoded = ScaleTxDecoder.decode(&raw).unwrap();

        assert_eq!(decoded.memo, "hello");
        assert_eq!(decoded.fee.gas, 50);
        assert_eq!(decoded.fee.amount, vec![Coin::new("uiris", 100)]);
        assert_eq!(decoded.operations.len(), 2);
        assert_eq!(
            decoded.operations[0].kind_id(),
            "/cosmos.bank.v1beta1.MsgSend"
        );
        assert!(decoded.is_signed());
    }

    #[test]
    fn test_signers_are_unioned_in_first_seen_order() {
        let decoded: DecodedTransaction = sample_tx().into();
        assert_eq!(decoded.signers, vec![vec![1; 20], vec![2; 20]]);
    }

    #[test]
    fn test_decode_rejects_empty_and_garbage() {
        assert!(matches!(
            ScaleTxDecoder.decode(&[]),
            Err(DecodeError::Empty)
        ));
        assert!(matches!(
            ScaleTxDecoder.decode(&[0xff, 0xff, 0xff]),
            Err(DecodeError::Malformed(_))
        ));
    }

    #[test]
    fn test_decode_rejects_trailing_bytes() {
        let mut raw = sample_tx().encode();
        raw.push(0);
        assert!(ScaleTxDecoder.decode(&raw).is_err());
    }

    #[test]
    fn test_unrecognized_payload_survives_decoding() {
        let mut tx = sample_tx();
        tx.body.messages[0].payload = OperationPayload::Other(AnyMessage {
            type_url: "/ibc.core.client.v1.MsgUpdateClient".to_string(),
            value: vec![9, 9],
        });
        let decoded = ScaleTxDecoder.decode(&tx.encode()).unwrap();
        assert_eq!(
            decoded.operations[0].kind_id(),
            "/ibc.core.client.v1.MsgUpdateClient"
        );
    }

    #[test]
    fn test_unsigned_first_operation() {
        let mut tx = sample_tx();
        tx.body.messages[0].signers.clear();
        let decoded: DecodedTransaction = tx.into();
        assert!(!decoded.is_signed());
        assert_eq!(decoded.signers, vec![vec![2; 20], vec![1; 20]]);
    }

    #[test]
    fn test_unsigned_operations() {
        let mut tx = sample_tx();
        for message in &mut tx.body.messages {
            message.signers.clear();
        }
        let decoded: DecodedTransaction = tx.into();
        assert!(!decoded.is_signed());
        assert!(decoded.signers.is_empty());
    }
}
