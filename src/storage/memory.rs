//! In-memory cache implementation, for tests and embedding.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::error::{AppError, Result};
use crate::models::AffairId;
use crate::storage::AffairCache;

/// Affair cache backed by a `HashMap`.
#[derive(Debug, Default)]
pub struct MemoryCache {
    entries: RwLock<HashMap<AffairId, String>>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl AffairCache for MemoryCache {
    async fn get(&self, id: &AffairId) -> Result<Option<String>> {
        let entries = self
            .entries
            .read()
            .map_err(|_| AppError::cache_read(id.as_str(), "cache lock poisoned"))?;
        Ok(entries.get(id).cloned())
    }

    async fn put(&self, id: &AffairId, raw: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| AppError::cache_write(id.as_str(), "cache lock poisoned"))?;
        entries.insert(id.clone(), raw.to_string());
        Ok(())
    }
}
