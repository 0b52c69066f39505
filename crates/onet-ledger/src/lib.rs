//! onet-ledger
//!
//! Generic ledger-state plumbing shared by every record type:
//!
//! - composite keys (`key`) with a reversible join,
//! - the [`LedgerState`] capability trait record types implement,
//! - the class-tagged serialization envelope (`envelope`),
//! - the [`StateList`] collection performing create/read/update against an
//!   externally provided [`LedgerStore`],
//! - the [`LedgerError`] taxonomy.
//!
//! Storage engines stay outside this crate; adapters implement
//! [`LedgerStore`] and are borrowed per invocation. Records are never
//! cached here, never defaulted on decode failure, and never deleted.

pub mod envelope;
pub mod key;

mod error;
mod list;
mod state;
mod store;

pub use error::{BoxError, LedgerError};
pub use list::StateList;
pub use state::LedgerState;
pub use store::LedgerStore;
