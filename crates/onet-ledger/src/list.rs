//! Namespaced state collection.
//!
//! # Invariants
//!
//! - Every operation is a single strictly ordered read or read-then-write
//!   against the backing store; nothing here caches across calls.
//! - `add` writes a key at most once: one existence probe, then one put.
//!   A present key fails with [`LedgerError::AlreadyExists`] and the stored
//!   record is left untouched. The probe-to-put window is not coordinated
//!   here; conflicting concurrent writers are resolved by the surrounding
//!   ledger at commit time.
//! - `get` requires presence ([`LedgerError::NotFound`] otherwise) and
//!   decodes through the class-checked envelope.
//! - `update` is one unconditional put. Callers reach it only after a
//!   successful `get` in the same invocation, which is what keeps lifecycle
//!   operations at one get plus one put.

use std::marker::PhantomData;

use crate::envelope;
use crate::error::LedgerError;
use crate::key::SEPARATOR;
use crate::state::LedgerState;
use crate::store::LedgerStore;

/// A typed view over one collection of records in a [`LedgerStore`].
///
/// Borrows the store for the duration of one invocation; the store stays
/// owned by the host. `name` prefixes every store key, so collections
/// sharing a store never collide.
pub struct StateList<'a, S, T> {
    store: &'a mut S,
    name: String,
    _record: PhantomData<T>,
}

impl<'a, S: LedgerStore, T: LedgerState> StateList<'a, S, T> {
    pub fn new(store: &'a mut S, name: impl Into<String>) -> Self {
        Self {
            store,
            name: name.into(),
            _record: PhantomData,
        }
    }

    /// Collection namespace prefixed to every store key.
    pub fn name(&self) -> &str {
        &self.name
    }

    fn store_key(&self, key: &str) -> String {
        format!("{}{}{}", self.name, SEPARATOR, key)
    }

    /// Insert a record that must not exist yet.
    ///
    /// # Errors
    /// [`LedgerError::AlreadyExists`] if the key is already present (the
    /// existing record is never overwritten); key, codec, and store failures
    /// propagate.
    pub async fn add(&mut self, state: &T) -> Result<(), LedgerError> {
        let key = state.key()?;
        let store_key = self.store_key(&key);
        let existing = self
            .store
            .get_state(&store_key)
            .await
            .map_err(|source| LedgerError::Store { key: key.clone(), source })?;
        if existing.is_some() {
            return Err(LedgerError::AlreadyExists { key });
        }
        let bytes = envelope::encode_state(state)?;
        self.store
            .put_state(&store_key, &bytes)
            .await
            .map_err(|source| LedgerError::Store { key, source })
    }

    /// Fetch and decode the record stored under `key`.
    ///
    /// # Errors
    /// [`LedgerError::NotFound`] if the key is absent;
    /// [`LedgerError::Decode`] if the stored bytes are not a valid envelope
    /// of `T`; store failures propagate.
    pub async fn get(&self, key: &str) -> Result<T, LedgerError> {
        let store_key = self.store_key(key);
        let bytes = self
            .store
            .get_state(&store_key)
            .await
            .map_err(|source| LedgerError::Store { key: key.to_string(), source })?
            .ok_or_else(|| LedgerError::NotFound { key: key.to_string() })?;
        envelope::decode_state(&bytes, key)
    }

    /// Overwrite the record under its own key.
    pub async fn update(&mut self, state: &T) -> Result<(), LedgerError> {
        let key = state.key()?;
        let bytes = envelope::encode_state(state)?;
        let store_key = self.store_key(&key);
        self.store
            .put_state(&store_key, &bytes)
            .await
            .map_err(|source| LedgerError::Store { key, source })
    }
}
