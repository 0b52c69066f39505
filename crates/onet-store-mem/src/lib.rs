//! onet-store-mem
//!
//! Deterministic in-memory [`LedgerStore`]: a `BTreeMap` keyed by the full
//! store key, so iteration order is stable across runs. This is the
//! development and test double for real backends, with just enough
//! inspection surface to assert on ledger contents and a one-shot fault
//! toggle to exercise write-failure paths.

use std::collections::BTreeMap;

use onet_ledger::{BoxError, LedgerStore};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, Vec<u8>>,
    fail_put_once: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Stored keys in deterministic (sorted) order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Raw stored bytes, bypassing any decoding.
    pub fn raw(&self, key: &str) -> Option<&[u8]> {
        self.entries.get(key).map(Vec::as_slice)
    }

    /// Plant raw bytes under a key, bypassing any encoding. Lets tests
    /// simulate foreign or corrupt writers.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Make the next `put_state` fail; the flag clears after firing, so a
    /// retry succeeds. Reads are unaffected.
    pub fn fail_next_put(&mut self) {
        self.fail_put_once = true;
    }
}

impl LedgerStore for MemoryStore {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError> {
        Ok(self.entries.get(key).cloned())
    }

    async fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), BoxError> {
        if self.fail_put_once {
            self.fail_put_once = false;
            return Err("injected put failure".into());
        }
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}
