//! Serialization envelope.
//!
//! Every stored record is a JSON object carrying two envelope fields next to
//! the record's own attributes:
//!
//! ```text
//! { "class": "<type tag>", "key": "<composite key>", ...record fields... }
//! ```
//!
//! Encoding goes through a [`serde_json::Value`] map so the envelope fields
//! are injected without a wrapper struct; serde_json's object map keeps keys
//! sorted, so identical field values always produce identical bytes.
//!
//! Decoding is strict: malformed payloads, a missing or foreign `class` tag,
//! fields that do not bind to the record type, and an embedded key that
//! disagrees with the decoded record's own identity all fail with
//! [`LedgerError::Decode`]. Bytes are never coerced into a defaulted record.

use serde_json::Value;

use crate::error::LedgerError;
use crate::state::LedgerState;

const CLASS_FIELD: &str = "class";
const KEY_FIELD: &str = "key";

/// Serialize `state` into its envelope bytes.
///
/// # Errors
/// [`LedgerError::InvalidKeyPart`] if the record's key parts are unusable;
/// [`LedgerError::Encode`] if the record does not serialize to a JSON object
/// or collides with an envelope field name.
pub fn encode_state<T: LedgerState>(state: &T) -> Result<Vec<u8>, LedgerError> {
    let key = state.key()?;
    let encode_err = |detail: String| LedgerError::Encode { key: key.clone(), detail };

    let mut value = serde_json::to_value(state).map_err(|e| encode_err(e.to_string()))?;
    let map = value
        .as_object_mut()
        .ok_or_else(|| encode_err("record did not serialize to a JSON object".into()))?;

    for reserved in [CLASS_FIELD, KEY_FIELD] {
        if map.contains_key(reserved) {
            return Err(encode_err(format!(
                "record field {reserved:?} collides with an envelope field"
            )));
        }
    }
    map.insert(CLASS_FIELD.into(), Value::String(T::CLASS.into()));
    map.insert(KEY_FIELD.into(), Value::String(key.clone()));

    serde_json::to_vec(&value).map_err(|e| encode_err(e.to_string()))
}

/// Deserialize envelope bytes into a `T`.
///
/// `key` is the caller's key context; it appears in every error message.
///
/// # Errors
/// [`LedgerError::Decode`] on any of the failure modes listed in the module
/// docs.
pub fn decode_state<T: LedgerState>(bytes: &[u8], key: &str) -> Result<T, LedgerError> {
    let decode_err = |detail: String| LedgerError::Decode { key: key.to_string(), detail };

    let mut value: Value =
        serde_json::from_slice(bytes).map_err(|e| decode_err(format!("malformed JSON: {e}")))?;
    let map = value
        .as_object_mut()
        .ok_or_else(|| decode_err("payload is not a JSON object".into()))?;

    let class = match map.remove(CLASS_FIELD) {
        Some(Value::String(class)) => class,
        Some(_) => return Err(decode_err("class tag is not a string".into())),
        None => return Err(decode_err("missing class tag".into())),
    };
    if class != T::CLASS {
        return Err(decode_err(format!(
            "unknown state class {class:?}, expected {:?}",
            T::CLASS
        )));
    }

    let embedded = match map.remove(KEY_FIELD) {
        Some(Value::String(embedded)) => embedded,
        Some(_) => return Err(decode_err("embedded key is not a string".into())),
        None => return Err(decode_err("missing embedded key".into())),
    };

    let state: T = serde_json::from_value(value).map_err(|e| decode_err(e.to_string()))?;

    // The envelope key must agree with the identity the record itself claims.
    let derived = state
        .key()
        .map_err(|e| decode_err(format!("record identity is unusable: {e}")))?;
    if derived != embedded {
        return Err(decode_err(format!(
            "embedded key {embedded:?} does not match record identity {derived:?}"
        )));
    }

    Ok(state)
}
