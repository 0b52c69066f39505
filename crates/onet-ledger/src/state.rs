//! The ledger state capability.
//!
//! Record types opt into ledger persistence by implementing [`LedgerState`]:
//! they name their wire class and expose their ordered key parts, and the
//! generic machinery (envelope + state list) does the rest. Composition over
//! a base class keeps record types plain data structs.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::LedgerError;
use crate::key;

/// A typed record that can be persisted in a ledger collection.
///
/// # Contract
///
/// - [`CLASS`][Self::CLASS] is a stable, globally unique type tag. It is
///   embedded in every serialized envelope and checked on decode, so bytes
///   from one record class can never silently materialize as another.
/// - [`key_parts`][Self::key_parts] returns the ordered identity parts.
///   Implementations must keep these immutable for the lifetime of the
///   record; the derived key addresses the record in the store.
pub trait LedgerState: Serialize + DeserializeOwned {
    /// Wire-format type tag for this record class.
    const CLASS: &'static str;

    /// Ordered parts of the composite key.
    fn key_parts(&self) -> Vec<String>;

    /// The record's composite key, joined with the ledger separator.
    ///
    /// # Errors
    /// Returns [`LedgerError::InvalidKeyPart`] if any part is empty or
    /// contains the separator. Validating constructors make this unreachable
    /// for records built through them.
    fn key(&self) -> Result<String, LedgerError> {
        key::make_key(&self.key_parts())
    }
}
