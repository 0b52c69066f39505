//! Per-invocation transaction context.
//!
//! The host owns the store; each invocation gets a fresh context borrowing
//! it. Nothing survives the invocation: the context holds no cache, and the
//! store remains the single source of truth between calls. The transaction
//! id exists for log correlation only.

use uuid::Uuid;

use onet_ledger::LedgerStore;

use crate::list::OptionList;

/// Everything a single contract invocation may touch.
pub struct OptionContext<'a, S: LedgerStore> {
    txn_id: Uuid,
    options: OptionList<'a, S>,
}

impl<'a, S: LedgerStore> OptionContext<'a, S> {
    /// Context with a freshly generated transaction id.
    pub fn new(store: &'a mut S) -> Self {
        Self::with_txn_id(store, Uuid::new_v4())
    }

    /// Context with a host-assigned transaction id (e.g. the id the
    /// surrounding ledger gave this transaction).
    pub fn with_txn_id(store: &'a mut S, txn_id: Uuid) -> Self {
        Self {
            txn_id,
            options: OptionList::new(store),
        }
    }

    pub fn txn_id(&self) -> Uuid {
        self.txn_id
    }

    /// The charging option collection, scoped to this invocation.
    pub fn options(&mut self) -> &mut OptionList<'a, S> {
        &mut self.options
    }
}
