// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Ledger query client.
//!
//! [`RpcLedgerClient`] speaks CometBFT JSON-RPC over HTTP POST. Integers arrive
//! as decimal strings and byte fields as base64.

use std::time::Duration;

use async_trait::async_trait;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;
use url::Url;

use super::pool::PoolError;
use super::types::{Attribute, Block, Event, ExecutionOutcome};
use crate::types::TxHash;

#[derive(Debug, Error)]
pub enum LedgerQueryError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Ledger returned HTTP {status} for '{method}'")]
    Status { method: String, status: u16 },

    #[error("Ledger RPC error {code} for '{method}': {message}")]
    Rpc {
        method: String,
        code: i64,
        message: String,
    },

    #[error("Ledger response for '{0}' carried neither result nor error")]
    MissingResult(String),

    #[error("Invalid ledger response: {0}")]
    InvalidResponse(String),

    #[error(transparent)]
    Pool(#[from] PoolError),
}

/// Read access to the ledger.
#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Execution outcome of an included transaction.
    async fn fetch_tx_result(&self, hash: &TxHash) -> Result<ExecutionOutcome, LedgerQueryError>;

    async fn fetch_block(&self, height: u64) -> Result<Block, LedgerQueryError>;

    /// Height of the most recent committed block.
    async fn latest_height(&self) -> Result<u64, LedgerQueryError>;
}

// ================================================================================================
// Wire shapes
// ================================================================================================

#[derive(Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: Value,
}

#[derive(Deserialize)]
struct RpcResponse<T> {
    result: Option<T>,
    error: Option<RpcErrorBody>,
}

#[derive(Deserialize)]
struct RpcErrorBody {
    code: i64,
    message: String,
    #[serde(default)]
    data: Option<String>,
}

#[derive(Deserialize)]
struct TxResponse {
    tx_result: TxResultBody,
}

#[derive(Deserialize)]
struct TxResultBody {
    #[serde(default)]
    code: u32,
    #[serde(default)]
    log: String,
    #[serde(deserialize_with = "u64_from_str")]
    gas_wanted: u64,
    #[serde(deserialize_with = "u64_from_str")]
    gas_used: u64,
    #[serde(default)]
    events: Vec<RawEvent>,
}

#[derive(Deserialize)]
struct RawEvent {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    attributes: Vec<RawAttribute>,
}

#[derive(Deserialize)]
struct RawAttribute {
    key: String,
    #[serde(default)]
    value: Option<String>,
}

#[derive(Deserialize)]
struct BlockResponse {
    block: BlockBody,
}

#[derive(Deserialize)]
struct BlockBody {
    header: BlockHeader,
    data: BlockData,
}

#[derive(Deserialize)]
struct BlockHeader {
    #[serde(deserialize_with = "u64_from_str")]
    height: u64,
    time: DateTime<Utc>,
}

#[derive(Deserialize)]
struct BlockData {
    #[serde(default)]
    txs: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct StatusResponse {
    sync_info: SyncInfo,
}

#[derive(Deserialize)]
struct SyncInfo {
    #[serde(deserialize_with = "u64_from_str")]
    latest_block_height: u64,
}

fn u64_from_str<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Numeric {
        Str(String),
        Num(u64),
    }

    match Numeric::deserialize(deserializer)? {
        Numeric::Str(s) => s.parse().map_err(de::Error::custom),
        Numeric::Num(n) => Ok(n),
    }
}

impl From<TxResultBody> for ExecutionOutcome {
    fn from(body: TxResultBody) -> Self {
        let events = body
            .events
            .into_iter()
            .map(|event| Event {
                kind: event.kind,
                attributes: event
                    .attributes
                    .into_iter()
                    .map(|attr| Attribute {
                        key: attr.key,
                        value: attr.value.unwrap_or_default(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            code: body.code,
            log: body.log,
            gas_used: body.gas_used,
            gas_wanted: body.gas_wanted,
            events,
        }
    }
}

// ================================================================================================
// Client
// ================================================================================================

#[derive(Debug, Clone)]
pub struct RpcLedgerClient {
    http: reqwest::Client,
    url: Url,
}

impl RpcLedgerClient {
    pub fn new(url: Url, request_timeout: Duration) -> Result<Self, LedgerQueryError> {
        let http = reqwest::Client::builder().timeout(request_timeout).build()?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    async fn call<T: DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, LedgerQueryError> {
        let request = RpcRequest {
            jsonrpc: "2.0",
            id: 1,
            method,
            params,
        };

        let response = self
            .http
            .post(self.url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LedgerQueryError::Status {
                method: method.to_string(),
                status: status.as_u16(),
            });
        }

        let body: RpcResponse<T> = response.json().await?;
        match (body.result, body.error) {
            (_, Some(err)) => Err(LedgerQueryError::Rpc {
                method: method.to_string(),
                code: err.code,
                message: match err.data {
                    Some(data) if !data.is_empty() => format!("{}: {}", err.message, data),
                    _ => err.message,
                },
            }),
            (Some(result), None) => Ok(result),
            (None, None) => Err(LedgerQueryError::MissingResult(method.to_string())),
        }
    }
}

#[async_trait]
impl LedgerClient for RpcLedgerClient {
    async fn fetch_tx_result(&self, hash: &TxHash) -> Result<ExecutionOutcome, LedgerQueryError> {
        let params = json!({
            "hash": STANDARD.encode(hash.as_bytes()),
            "prove": false,
        });
        let response: TxResponse = self.call("tx", params).await?;
        Ok(response.tx_result.into())
    }

    async fn fetch_block(&self, height: u64) -> Result<Block, LedgerQueryError> {
        let response: BlockResponse = self
            .call("block", json!({ "height": height.to_string() }))
            .await?;

        let txs = response
            .block
            .data
            .txs
            .unwrap_or_default()
            .iter()
            .map(|tx| STANDARD.decode(tx))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                LedgerQueryError::InvalidResponse(format!("block {height} tx is not base64: {e}"))
            })?;

        Ok(Block {
            height: response.block.header.height,
            time: response.block.header.time,
            txs,
        })
    }

    async fn latest_height(&self) -> Result<u64, LedgerQueryError> {
        let response: StatusResponse = self.call("status", json!({})).await?;
        Ok(response.sync_info.latest_block_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};
    use std::net::TcpListener;

    fn localhost_binding_permitted() -> bool {
        TcpListener::bind("127.0.0.1:0").is_ok()
    }

    fn client_for(server: &Server) -> RpcLedgerClient {
        let url = Url::parse(&server.url()).unwrap();
        RpcLedgerClient::new(url, Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_tx_result_parses_outcome() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"hash":"AB","height":"12","index":0,
            "tx_result":{"code":0,"log":"ok","gas_wanted":"200000","gas_used":"81234",
            "events":[{"type":"proposal_deposit","attributes":[
                {"key":"amount","value":"10stake","index":true},
                {"key":"proposal_id","value":"7","index":true}]}]}}}"#;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"tx""#.to_string()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await;

        let outcome = client_for(&server)
            .fetch_tx_result(&TxHash([0xab; 32]))
            .await
            .unwrap();

        assert_eq!(outcome.code, 0);
        assert_eq!(outcome.log, "ok");
        assert_eq!(outcome.gas_wanted, 200_000);
        assert_eq!(outcome.gas_used, 81_234);
        assert_eq!(outcome.events.len(), 1);
        assert_eq!(outcome.events[0].attribute("proposal_id"), Some("7"));
    }

    #[tokio::test]
    async fn test_rpc_error_is_a_failed_lookup() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":1,"error":{"code":-32603,"message":"Internal error","data":"tx not found"}}"#;
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_tx_result(&TxHash([0; 32]))
            .await
            .unwrap_err();

        match err {
            LedgerQueryError::Rpc { code, message, .. } => {
                assert_eq!(code, -32603);
                assert!(message.contains("tx not found"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_failed_lookup() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let _m = server
            .mock("POST", "/")
            .with_status(503)
            .create_async()
            .await;

        let err = client_for(&server).latest_height().await.unwrap_err();
        assert!(matches!(err, LedgerQueryError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_fetch_block_decodes_txs() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"block_id":{},"block":{
            "header":{"height":"42","time":"2021-02-18T12:00:00.5Z"},
            "data":{"txs":["AQID","BAU="]}}}}"#;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""height"\s*:\s*"42""#.to_string()))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let block = client_for(&server).fetch_block(42).await.unwrap();
        assert_eq!(block.height, 42);
        assert_eq!(block.txs, vec![vec![1, 2, 3], vec![4, 5]]);
        assert_eq!(block.time.timestamp(), 1_613_649_600);
    }

    #[tokio::test]
    async fn test_empty_block_has_no_txs() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"block":{
            "header":{"height":"3","time":"2021-02-18T12:00:00Z"},
            "data":{"txs":null}}}}"#;
        let _m = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        let block = client_for(&server).fetch_block(3).await.unwrap();
        assert!(block.txs.is_empty());
    }

    #[tokio::test]
    async fn test_latest_height() {
        if !localhost_binding_permitted() {
            return;
        }
        let mut server = Server::new_async().await;
        let body = r#"{"jsonrpc":"2.0","id":1,"result":{"node_info":{},
            "sync_info":{"latest_block_height":"17000000","catching_up":false}}}"#;
        let _m = server
            .mock("POST", "/")
            .match_body(Matcher::Regex(r#""method"\s*:\s*"status""#.to_string()))
            .with_status(200)
            .with_body(body)
            .create_async()
            .await;

        assert_eq!(client_for(&server).latest_height().await.unwrap(), 17_000_000);
    }
}
