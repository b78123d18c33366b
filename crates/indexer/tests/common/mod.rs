// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parity_scale_codec::Encode;
use tx_normalizer::TransactionNormalizer;
use tx_normalizer::address::{AddressCodec, to_bech32};
use tx_normalizer::codec::msgs::MsgSend;
use tx_normalizer::codec::{OperationPayload, WireBody, WireFee, WireMessage, WireTx};
use tx_normalizer::ledger::{
    Block, ClientPool, ExecutionOutcome, ExecutionResultFetcher, LedgerClient, LedgerQueryError,
    SharedLedgerClient,
};
use tx_normalizer::operations::build_registry;
use tx_normalizer::record::NormalizedRecord;
use tx_normalizer::sink::{RecordSink, SinkError};
use tx_normalizer::types::{Coin, TxHash};

pub const PREFIX: &str = "iaa";

/// 20-byte raw account filled with `byte`.
pub fn account(byte: u8) -> Vec<u8> {
    vec![byte; 20]
}

pub fn bech32(byte: u8) -> String {
    to_bech32(&account(byte), PREFIX).unwrap()
}

pub fn block_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2021, 2, 18, 12, 0, 0).unwrap()
}

pub fn send(from: u8, to: u8, amount: u128) -> OperationPayload {
    OperationPayload::Send(MsgSend {
        from_address: bech32(from),
        to_address: bech32(to),
        amount: vec![Coin::new("uiris", amount)],
    })
}

pub fn signed_by(signer: u8, payload: OperationPayload) -> WireMessage {
    WireMessage {
        signers: vec![account(signer)],
        payload,
    }
}

pub fn unsigned(payload: OperationPayload) -> WireMessage {
    WireMessage {
        signers: vec![],
        payload,
    }
}

pub struct TxBuilder {
    tx: WireTx,
}

impl TxBuilder {
    pub fn new() -> Self {
        Self {
            tx: WireTx {
                body: WireBody {
                    messages: vec![],
                    memo: String::new(),
                },
                fee: WireFee {
                    amount: vec![Coin::new("uiris", 400_000)],
                    gas_limit: 200_000,
                },
            },
        }
    }

    pub fn message(mut self, message: WireMessage) -> Self {
        self.tx.body.messages.push(message);
        self
    }

    pub fn memo(mut self, memo: &str) -> Self {
        self.tx.body.memo = memo.to_string();
        self
    }

    pub fn fee(mut self, amount: Vec<Coin>, gas_limit: u64) -> Self {
        self.tx.fee = WireFee { amount, gas_limit };
        self
    }

    pub fn encode(self) -> Vec<u8> {
        self.tx.encode()
    }
}

/// In-memory ledger with scripted lookups.
#[derive(Default)]
pub struct ScriptedLedger {
    outcomes: Mutex<HashMap<TxHash, ExecutionOutcome>>,
    failures: Mutex<HashMap<TxHash, usize>>,
    blocks: Mutex<HashMap<u64, Block>>,
    latest: Mutex<u64>,
    tx_lookups: AtomicUsize,
    block_lookups: Mutex<VecDeque<u64>>,
}

impl ScriptedLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn set_outcome(&self, raw_tx: &[u8], outcome: ExecutionOutcome) {
        self.outcomes
            .lock()
            .unwrap()
            .insert(TxHash::of(raw_tx), outcome);
    }

    /// Make the next `count` lookups of `raw_tx` fail.
    pub fn fail_lookups(&self, raw_tx: &[u8], count: usize) {
        self.failures
            .lock()
            .unwrap()
            .insert(TxHash::of(raw_tx), count);
    }

    pub fn add_block(&self, height: u64, txs: Vec<Vec<u8>>) {
        self.blocks.lock().unwrap().insert(
            height,
            Block {
                height,
                time: block_time(),
                txs,
            },
        );
    }

    pub fn set_latest(&self, height: u64) {
        *self.latest.lock().unwrap() = height;
    }

    pub fn tx_lookups(&self) -> usize {
        self.tx_lookups.load(Ordering::SeqCst)
    }

    pub fn block_lookups(&self) -> Vec<u64> {
        self.block_lookups.lock().unwrap().iter().copied().collect()
    }
}

#[async_trait]
impl LedgerClient for ScriptedLedger {
    async fn fetch_tx_result(&self, hash: &TxHash) -> Result<ExecutionOutcome, LedgerQueryError> {
        self.tx_lookups.fetch_add(1, Ordering::SeqCst);

        if let Some(left) = self.failures.lock().unwrap().get_mut(hash) {
            if *left > 0 {
                *left -= 1;
                return Err(LedgerQueryError::InvalidResponse("node lagging".into()));
            }
        }

        self.outcomes
            .lock()
            .unwrap()
            .get(hash)
            .cloned()
            .ok_or_else(|| LedgerQueryError::MissingResult("tx".into()))
    }

    async fn fetch_block(&self, height: u64) -> Result<Block, LedgerQueryError> {
        self.block_lookups.lock().unwrap().push_back(height);
        self.blocks
            .lock()
            .unwrap()
            .get(&height)
            .cloned()
            .ok_or_else(|| LedgerQueryError::MissingResult("block".into()))
    }

    async fn latest_height(&self) -> Result<u64, LedgerQueryError> {
        Ok(*self.latest.lock().unwrap())
    }
}

pub fn normalizer(ledger: Arc<ScriptedLedger>) -> TransactionNormalizer {
    let client: SharedLedgerClient = ledger;
    let pool = ClientPool::new(vec![client.clone(), client]).unwrap();
    TransactionNormalizer::new(
        ExecutionResultFetcher::with_backoff(pool, Duration::from_secs(1)),
        Arc::new(build_registry()),
        AddressCodec::new(PREFIX).unwrap(),
    )
}

/// Sink that keeps every record in memory.
#[derive(Default)]
pub struct MemorySink {
    records: Mutex<Vec<NormalizedRecord>>,
}

impl MemorySink {
    pub fn records(&self) -> Vec<NormalizedRecord> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl RecordSink for MemorySink {
    async fn write(&self, record: &NormalizedRecord) -> Result<(), SinkError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }
}

/// Sink whose storage is gone.
pub struct BrokenSink;

#[async_trait]
impl RecordSink for BrokenSink {
    async fn write(&self, _record: &NormalizedRecord) -> Result<(), SinkError> {
        Err(SinkError::Io(std::io::Error::other("disk full")))
    }
}
