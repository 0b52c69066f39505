//! Ledger error taxonomy.
//!
//! Every failure raised by the ledger layer names its kind and the offending
//! key (or key part) in the message, so callers can surface the error
//! verbatim. Errors are raised at the point of detection and propagated
//! unmodified; nothing in this layer retries or swallows.

/// Boxed error type carried by store adapters across the [`crate::LedgerStore`]
/// boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures raised by key construction, the serialization envelope, and the
/// state list.
#[derive(Debug)]
pub enum LedgerError {
    /// `add` found an existing record under the same composite key.
    AlreadyExists { key: String },
    /// `get` found nothing under the requested key.
    NotFound { key: String },
    /// A composite key part was empty or contained the separator.
    InvalidKeyPart { part: String },
    /// Stored bytes could not be decoded into the expected record class.
    Decode { key: String, detail: String },
    /// A record could not be encoded into its envelope.
    Encode { key: String, detail: String },
    /// The backing store reported a failure for this key.
    Store { key: String, source: BoxError },
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AlreadyExists { key } => write!(f, "state {key} already exists"),
            Self::NotFound { key } => write!(f, "state {key} not found"),
            Self::InvalidKeyPart { part } => {
                write!(f, "invalid key part {part:?}: must be non-empty and must not contain ':'")
            }
            Self::Decode { key, detail } => write!(f, "cannot decode state {key}: {detail}"),
            Self::Encode { key, detail } => write!(f, "cannot encode state {key}: {detail}"),
            Self::Store { key, source } => write!(f, "store failure for state {key}: {source}"),
        }
    }
}

impl std::error::Error for LedgerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_always_name_the_key() {
        let cases: Vec<LedgerError> = vec![
            LedgerError::AlreadyExists { key: "CS1:1".into() },
            LedgerError::NotFound { key: "CS1:1".into() },
            LedgerError::Decode { key: "CS1:1".into(), detail: "bad json".into() },
            LedgerError::Encode { key: "CS1:1".into(), detail: "not an object".into() },
            LedgerError::Store { key: "CS1:1".into(), source: "disk on fire".into() },
        ];
        for err in cases {
            assert!(err.to_string().contains("CS1:1"), "missing key in: {err}");
        }
    }

    #[test]
    fn store_error_preserves_source_chain() {
        let err = LedgerError::Store {
            key: "k".into(),
            source: "io refused".into(),
        };
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "io refused");
    }
}
