// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

//! Destinations for finished records.

use std::path::Path;

use async_trait::async_trait;
use thiserror::Error;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::sync::Mutex;

use crate::record::NormalizedRecord;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("Failed to serialize record {tx_hash}: {source}")]
    Serialize {
        tx_hash: String,
        source: serde_json::Error,
    },

    #[error("Failed to write record: {0}")]
    Io(#[from] std::io::Error),
}

/// Accepts one record per call and takes ownership of its storage.
#[async_trait]
pub trait RecordSink: Send + Sync {
    async fn write(&self, record: &NormalizedRecord) -> Result<(), SinkError>;

    async fn flush(&self) -> Result<(), SinkError> {
        Ok(())
    }
}

type Output = Box<dyn AsyncWrite + Send + Unpin>;

/// Writes each record as one JSON document per line.
pub struct JsonLinesSink {
    out: Mutex<Output>,
}

impl JsonLinesSink {
    pub fn stdout() -> Self {
        Self::from_writer(tokio::io::stdout())
    }

    /// Append to `path`, creating it and its parent directories as needed.
    pub async fn append_to(path: impl AsRef<Path>) -> Result<Self, SinkError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        let file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .await?;
        Ok(Self::from_writer(file))
    }

    pub fn from_writer(writer: impl AsyncWrite + Send + Unpin + 'static) -> Self {
        Self {
            out: Mutex::new(Box::new(writer)),
        }
    }
}

#[async_trait]
impl RecordSink for JsonLinesSink {
    async fn write(&self, record: &NormalizedRecord) -> Result<(), SinkError> {
        let mut line = serde_json::to_vec(record).map_err(|source| SinkError::Serialize {
            tx_hash: record.tx_hash.to_string(),
            source,
        })?;
        line.push(b'\n');

        let mut out = self.out.lock().await;
        out.write_all(&line).await?;
        Ok(())
    }

    async fn flush(&self) -> Result<(), SinkError> {
        self.out.lock().await.flush().await?;
        Ok(())
    }
}
