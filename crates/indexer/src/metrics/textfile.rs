// Copyright (C) 2026 Parity Technologies (UK) Ltd.
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::registry::{MetricsError, gather_metrics};

/// Write the current exposition to `path` for a textfile collector.
///
/// The text goes to a sibling temp file first and is renamed into place, so a
/// scraper never reads a partial file.
pub async fn write_textfile(path: impl AsRef<Path>) -> Result<(), MetricsError> {
    let path = path.as_ref();
    let text = gather_metrics()?;
    let write_err = |source: std::io::Error| MetricsError::Write {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await.map_err(write_err)?;
    }

    let tmp = path.with_extension("prom.tmp");
    tokio::fs::write(&tmp, text).await.map_err(write_err)?;
    tokio::fs::rename(&tmp, path).await.map_err(write_err)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::registry::{TXS_NORMALIZED, init};

    #[tokio::test]
    async fn test_write_textfile_creates_parent_dirs() {
        init("txn_test").unwrap();
        TXS_NORMALIZED.inc();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("tx_normalizer.prom");
        write_textfile(&path).await.unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("txs_normalized"));
        assert!(!path.with_extension("prom.tmp").exists());
    }
}
