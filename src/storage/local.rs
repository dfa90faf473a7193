//! Local filesystem cache implementation.
//!
//! One UTF-8 text file per affair, `{root}/{id}.txt`, holding the response
//! body byte for byte.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use crate::error::{AppError, Result};
use crate::models::AffairId;
use crate::storage::AffairCache;

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// File-backed affair cache.
#[derive(Debug, Clone)]
pub struct LocalCache {
    root_dir: PathBuf,
}

impl LocalCache {
    /// Create a cache rooted at the given directory.
    ///
    /// The directory is not created here; see `ensure_root`.
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        Self {
            root_dir: root_dir.into(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root_dir
    }

    /// Create the cache directory if it does not exist yet.
    pub async fn ensure_root(&self) -> Result<()> {
        tokio::fs::create_dir_all(&self.root_dir).await?;
        Ok(())
    }

    /// Full path of the entry for an affair.
    pub fn entry_path(&self, id: &AffairId) -> PathBuf {
        self.root_dir.join(format!("{id}.txt"))
    }

    /// Write bytes atomically (write to temp, then rename).
    ///
    /// The temp name is unique per process and write, so overlapping runs
    /// on the same entry end up last-write-wins.
    async fn write_bytes(&self, path: &Path, bytes: &[u8]) -> Result<()> {
        let seq = TMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        let tmp = path.with_extension(format!("{}.{seq}.tmp", std::process::id()));

        let mut file = tokio::fs::File::create(&tmp).await?;
        let written = async {
            file.write_all(bytes).await?;
            file.flush().await?;
            file.sync_all().await
        }
        .await;
        drop(file);

        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::Io(e));
        }

        if let Err(e) = tokio::fs::rename(&tmp, path).await {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(AppError::Io(e));
        }
        Ok(())
    }
}

#[async_trait]
impl AffairCache for LocalCache {
    async fn get(&self, id: &AffairId) -> Result<Option<String>> {
        let path = self.entry_path(id);
        match tokio::fs::read_to_string(&path).await {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Io(e)),
        }
    }

    async fn put(&self, id: &AffairId, raw: &str) -> Result<()> {
        let path = self.entry_path(id);
        self.write_bytes(&path, raw.as_bytes()).await?;
        log::debug!("Cached {} at {}", id, path.display());
        Ok(())
    }
}
