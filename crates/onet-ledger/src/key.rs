//! Composite key construction.
//!
//! A ledger key is an ordered sequence of string parts joined with
//! [`SEPARATOR`]. The join must be reversible, so parts that are empty or
//! contain the separator are rejected at construction instead of producing a
//! key that splits into the wrong parts later.

use crate::error::LedgerError;

/// Separator between key parts and between a collection name and a key.
pub const SEPARATOR: char = ':';

/// Join ordered `parts` into a single composite key.
///
/// # Errors
/// Returns [`LedgerError::InvalidKeyPart`] if any part is empty or contains
/// [`SEPARATOR`].
pub fn make_key<S: AsRef<str>>(parts: &[S]) -> Result<String, LedgerError> {
    let mut key = String::new();
    for (i, part) in parts.iter().enumerate() {
        let part = part.as_ref();
        validate_part(part)?;
        if i > 0 {
            key.push(SEPARATOR);
        }
        key.push_str(part);
    }
    Ok(key)
}

/// Split a composite key back into its parts. Inverse of [`make_key`] for
/// every key that function can produce.
pub fn split_key(key: &str) -> Vec<String> {
    key.split(SEPARATOR).map(str::to_string).collect()
}

/// Check that a single part is usable inside a composite key.
pub fn validate_part(part: &str) -> Result<(), LedgerError> {
    if part.is_empty() || part.contains(SEPARATOR) {
        return Err(LedgerError::InvalidKeyPart {
            part: part.to_string(),
        });
    }
    Ok(())
}
