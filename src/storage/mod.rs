//! Raw-payload cache for affair records.
//!
//! The cache stores the exact response body per affair, keyed only by the
//! canonical identifier. Parsed records are never cached.
//!
//! ## Directory Structure
//!
//! ```text
//! cache/
//! ├── 20212355.txt
//! └── 20220001.txt
//! ```

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::AffairId;

// Re-export for convenience
pub use local::LocalCache;
pub use memory::MemoryCache;

/// Key-value store for raw affair payloads.
#[async_trait]
pub trait AffairCache: Send + Sync {
    /// Read the raw payload for an affair, `None` if it was never cached.
    async fn get(&self, id: &AffairId) -> Result<Option<String>>;

    /// Store the raw payload for an affair, replacing any previous entry.
    ///
    /// Readers never observe a partially written entry.
    async fn put(&self, id: &AffairId, raw: &str) -> Result<()>;
}
