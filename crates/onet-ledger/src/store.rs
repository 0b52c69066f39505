//! The backing-store seam.
//!
//! The ledger core never talks to a storage engine directly; it goes through
//! [`LedgerStore`], implemented by adapter crates (in-memory, sled). Methods
//! are async because real backends sit behind I/O; the state list awaits them
//! without reordering its read-decide-write sequence.

use std::future::Future;

use crate::error::BoxError;

/// Raw key-value access scoped to a single invocation.
///
/// # Contract
///
/// - `get_state` returns `Ok(None)` for an absent key; absence is not an
///   error at this layer.
/// - `put_state` either stores the full value under the key or fails without
///   partial effect.
/// - Adapters report failures as [`BoxError`]; the state list wraps them with
///   the offending key. Adapters must not retry or swallow.
///
/// Records are never deleted, so the seam carries no delete operation.
pub trait LedgerStore {
    /// Read the raw bytes stored under `key`, or `None` when absent.
    fn get_state(
        &self,
        key: &str,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, BoxError>> + Send;

    /// Store `value` under `key`, overwriting any previous value.
    fn put_state(
        &mut self,
        key: &str,
        value: &[u8],
    ) -> impl Future<Output = Result<(), BoxError>> + Send;
}
