//! Contract error taxonomy.
//!
//! Refusals raised by the lifecycle engine and the invocation dispatcher.
//! Ledger-layer failures (duplicate key, absent key, decode, store) pass
//! through unmodified in the [`ContractError::Ledger`] variant so callers
//! see the original kind and key.

use onet_ledger::LedgerError;

#[derive(Debug)]
pub enum ContractError {
    /// The caller-asserted owner does not match the stored owner.
    NotOwner { key: String, claimed: String },
    /// A sale was attempted while the option cannot trade.
    NotTrading { key: String, state: &'static str },
    /// Delivery was attempted on an already delivered option.
    AlreadyDelivered { key: String },
    /// An invocation argument failed validation or parsing.
    InvalidArgument { detail: String },
    /// The dispatcher received a function name it does not route.
    UnknownFunction { name: String },
    /// Propagated ledger failure.
    Ledger(LedgerError),
}

impl std::fmt::Display for ContractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner { key, claimed } => {
                write!(f, "option {key} is not owned by {claimed}")
            }
            Self::NotTrading { key, state } => {
                write!(f, "option {key} is not trading (current state = {state})")
            }
            Self::AlreadyDelivered { key } => write!(f, "option {key} already delivered"),
            Self::InvalidArgument { detail } => write!(f, "invalid argument: {detail}"),
            Self::UnknownFunction { name } => write!(f, "unknown contract function {name:?}"),
            Self::Ledger(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for ContractError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Ledger(err) => Some(err),
            _ => None,
        }
    }
}

impl From<LedgerError> for ContractError {
    fn from(err: LedgerError) -> Self {
        Self::Ledger(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refusal_messages_name_the_key() {
        let cases: Vec<ContractError> = vec![
            ContractError::NotOwner { key: "CS1:1".into(), claimed: "Bob".into() },
            ContractError::NotTrading { key: "CS1:1".into(), state: "DELIVERED" },
            ContractError::AlreadyDelivered { key: "CS1:1".into() },
        ];
        for err in cases {
            assert!(err.to_string().contains("CS1:1"), "missing key in: {err}");
        }
    }

    #[test]
    fn ledger_errors_pass_through_verbatim() {
        let inner = LedgerError::AlreadyExists { key: "CS1:1".into() };
        let wrapped = ContractError::from(inner);
        assert_eq!(wrapped.to_string(), "state CS1:1 already exists");
        assert!(std::error::Error::source(&wrapped).is_some());
    }
}
