// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Raw transaction to [`NormalizedRecord`].
//!
//! Decoding and the "no signed operation" check are the only fatal steps.
//! Ledger lookups, address encoding and event parsing degrade a field, log,
//! and carry on. Operations without a registered handler are skipped.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, warn};

use crate::address::AddressCodec;
use crate::codec::{DecodeError, DecodedTransaction, ScaleTxDecoder, TxDecoder};
use crate::ledger::{ExecutionOutcome, ExecutionResultFetcher, TxStatus};
use crate::metrics;
use crate::operations::{HandlerContext, OperationDocument, OperationRegistry, PrimaryFields};
use crate::record::{GasSummary, NormalizedRecord, Signer, dedup_non_empty};
use crate::types::TxHash;

#[derive(Debug, Error)]
pub enum NormalizeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error("Transaction {0} carries no signed operation")]
    EmptyMessage(TxHash),
}

pub struct TransactionNormalizer {
    decoder: Arc<dyn TxDecoder>,
    fetcher: ExecutionResultFetcher,
    registry: Arc<OperationRegistry>,
    address_codec: AddressCodec,
}

impl TransactionNormalizer {
    pub fn new(
        fetcher: ExecutionResultFetcher,
        registry: Arc<OperationRegistry>,
        address_codec: AddressCodec,
    ) -> Self {
        Self {
            decoder: Arc::new(ScaleTxDecoder),
            fetcher,
            registry,
            address_codec,
        }
    }

    pub fn with_decoder(mut self, decoder: Arc<dyn TxDecoder>) -> Self {
        self.decoder = decoder;
        self
    }

    pub async fn normalize(
        &self,
        raw_tx: &[u8],
        height: u64,
        time: DateTime<Utc>,
    ) -> Result<NormalizedRecord, NormalizeError> {
        let result = self.normalize_inner(raw_tx, height, time).await;
        match &result {
            Ok(_) => metrics::TXS_NORMALIZED.inc(),
            Err(_) => metrics::TXS_REJECTED.inc(),
        }
        result
    }

    async fn normalize_inner(
        &self,
        raw_tx: &[u8],
        height: u64,
        time: DateTime<Utc>,
    ) -> Result<NormalizedRecord, NormalizeError> {
        let decoded = self.decoder.decode(raw_tx)?;
        let tx_hash = TxHash::of(raw_tx);

        if !decoded.is_signed() {
            return Err(NormalizeError::EmptyMessage(tx_hash));
        }

        let signers = self.signers(&tx_hash, &decoded);

        let (status, outcome) = match self.fetcher.fetch(&tx_hash).await {
            Ok(found) => found,
            Err(err) => {
                warn!(
                    tx_hash = %tx_hash,
                    height,
                    error = %err,
                    "Execution result unavailable, recording status unknown"
                );
                (TxStatus::Unknown, ExecutionOutcome::default())
            }
        };

        let gas = GasSummary::compute(&decoded.fee, outcome.gas_used);
        let dispatch = self.dispatch(&tx_hash, &decoded, &signers, &outcome);
        let primary = dispatch.primary.unwrap_or_default();

        Ok(NormalizedRecord {
            height,
            time,
            time_unix: time.timestamp(),
            tx_hash,
            from: primary.from,
            to: primary.to,
            amount: primary.amount,
            tx_type: primary.tx_type.to_string(),
            proposal_id: primary.proposal_id,
            fee: decoded.fee,
            actual_fee: gas.actual_fee,
            memo: decoded.memo,
            status,
            code: outcome.code,
            log: outcome.log,
            gas_used: gas.gas_used,
            gas_wanted: outcome.gas_wanted,
            gas_price: gas.gas_price,
            events: outcome.events,
            signer: signers
                .first()
                .map(|signer| signer.address_bech32.clone())
                .unwrap_or_default(),
            signers,
            addrs: dedup_non_empty(dispatch.addrs),
            types: dedup_non_empty(dispatch.types),
            msgs: dispatch.msgs,
        })
    }

    fn signers(&self, tx_hash: &TxHash, decoded: &DecodedTransaction) -> Vec<Signer> {
        decoded
            .signers
            .iter()
            .map(|raw| {
                let address_bech32 = self.address_codec.to_bech32(raw).unwrap_or_else(|err| {
                    warn!(
                        tx_hash = %tx_hash,
                        signer = %hex::encode_upper(raw),
                        error = %err,
                        "Failed to encode signer address"
                    );
                    String::new()
                });
                Signer {
                    address_hex: hex::encode_upper(raw),
                    address_bech32,
                }
            })
            .collect()
    }

    /// Run every signed operation through its handler, in order.
    fn dispatch(
        &self,
        tx_hash: &TxHash,
        decoded: &DecodedTransaction,
        signers: &[Signer],
        outcome: &ExecutionOutcome,
    ) -> Dispatch {
        let ctx = HandlerContext {
            tx_hash,
            signers,
            events: &outcome.events,
        };
        // Signers are participants even when no payload names them.
        let mut dispatch = Dispatch {
            addrs: signers
                .iter()
                .map(|signer| signer.address_bech32.clone())
                .collect(),
            ..Default::default()
        };

        for (index, operation) in decoded.operations.iter().enumerate() {
            let kind_id = operation.kind_id();

            if operation.signers.is_empty() {
                debug!(tx_hash = %tx_hash, index, kind = kind_id, "Skipping unsigned operation");
                continue;
            }

            let Some(handler) = self.registry.get(kind_id) else {
                debug!(tx_hash = %tx_hash, index, kind = kind_id, "Skipping unrecognized operation");
                metrics::UNRECOGNIZED_OPERATIONS.inc();
                continue;
            };

            let (Some(document), Some(addrs)) = (
                handler.build(&operation.payload),
                handler.participant_addresses(&operation.payload),
            ) else {
                warn!(
                    tx_hash = %tx_hash,
                    index,
                    kind = kind_id,
                    "Handler rejected payload registered under its kind"
                );
                continue;
            };

            dispatch.msgs.push(document);
            dispatch.addrs.extend(addrs);
            dispatch.types.push(handler.kind_label().to_string());

            // Only the first processed operation summarizes the transaction.
            if dispatch.primary.is_none() {
                dispatch.primary = handler.primary_fields(&operation.payload, &ctx);
            }
        }

        dispatch
    }
}

#[derive(Default)]
struct Dispatch {
    primary: Option<PrimaryFields>,
    msgs: Vec<OperationDocument>,
    addrs: Vec<String>,
    types: Vec<String>,
}
