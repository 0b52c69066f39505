//! onet-store-sled
//!
//! Embedded [`LedgerStore`] over a sled tree: the world-state backend for
//! hosts that want the ledger on local disk. Keys arrive already namespaced
//! by the collection layer; values are opaque envelope bytes. Durability
//! semantics are sled's own; callers that need bytes on disk at a known
//! point use [`SledStore::flush`].

use std::path::Path;

use anyhow::Context;

use onet_ledger::{BoxError, LedgerStore};

/// Env var naming the on-disk ledger directory for [`SledStore::open_from_env`].
pub const ENV_LEDGER_PATH: &str = "ONET_LEDGER_PATH";

/// A sled-backed ledger store. Cloning shares the same underlying tree.
#[derive(Debug, Clone)]
pub struct SledStore {
    db: sled::Db,
}

impl SledStore {
    /// Open (or create) the ledger at `path`.
    pub fn open(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let db = sled::open(path)
            .with_context(|| format!("open sled ledger at {}", path.display()))?;
        Ok(Self { db })
    }

    /// Open the ledger at the directory named by [`ENV_LEDGER_PATH`].
    pub fn open_from_env() -> anyhow::Result<Self> {
        let path = std::env::var(ENV_LEDGER_PATH)
            .with_context(|| format!("missing env var {ENV_LEDGER_PATH}"))?;
        Self::open(path)
    }

    /// Throwaway store in a temporary location; contents vanish on drop.
    pub fn open_temporary() -> anyhow::Result<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .context("open temporary sled ledger")?;
        Ok(Self { db })
    }

    /// Flush dirty pages to disk. Returns the number of bytes flushed.
    pub fn flush(&self) -> anyhow::Result<usize> {
        self.db.flush().context("flush sled ledger")
    }
}

impl LedgerStore for SledStore {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError> {
        let value = self.db.get(key)?;
        Ok(value.map(|ivec| ivec.to_vec()))
    }

    async fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), BoxError> {
        self.db.insert(key, value)?;
        Ok(())
    }
}
