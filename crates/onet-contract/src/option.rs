//! The charging option record.
//!
//! A charging option is identified by `(chargingStation, optionNumber)` and
//! moves through a fixed lifecycle once issued. The struct is plain data;
//! all transition rules live in the lifecycle engine, which is the only
//! writer of `owner` and `currentState`.

use serde::{Deserialize, Serialize};

use onet_ledger::{key, LedgerState};

use crate::error::ContractError;

// ---------------------------------------------------------------------------
// OptionState
// ---------------------------------------------------------------------------

/// Lifecycle states a charging option can occupy.
///
/// Serialized on the wire as `"ISSUED"`, `"TRADING"`, `"DELIVERED"`. The
/// enum is closed: the lifecycle engine matches on it exhaustively, so a new
/// state cannot be added without updating every transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OptionState {
    /// Issued by its charging station; not yet sold.
    Issued,
    /// At least one sale has happened; further sales are permitted.
    Trading,
    /// Delivered back to the issuing station. **Terminal.**
    Delivered,
}

impl OptionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Issued => "ISSUED",
            Self::Trading => "TRADING",
            Self::Delivered => "DELIVERED",
        }
    }

    /// Returns `true` if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Delivered)
    }
}

impl std::fmt::Display for OptionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ChargingOption
// ---------------------------------------------------------------------------

/// A single charging option record.
///
/// Field names serialize in camelCase to match the ledger wire format.
/// `owner` and `currentState` are absent until the engine sets them, and are
/// omitted from the envelope while unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingOption {
    charging_station: String,
    option_number: String,
    issue_date_time: String,
    maturity_date_time: String,
    face_value: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    current_state: Option<OptionState>,
}

impl ChargingOption {
    /// Build a new record, validating every required field up front.
    ///
    /// The record starts with no owner and no lifecycle state; issuance
    /// assigns both. Key fields must be non-empty and free of the key
    /// separator so the derived composite key is reversible.
    ///
    /// # Errors
    /// [`ContractError::InvalidArgument`] naming the offending field.
    pub fn create(
        charging_station: impl Into<String>,
        option_number: impl Into<String>,
        issue_date_time: impl Into<String>,
        maturity_date_time: impl Into<String>,
        face_value: i64,
    ) -> Result<Self, ContractError> {
        let charging_station = charging_station.into();
        let option_number = option_number.into();
        let issue_date_time = issue_date_time.into();
        let maturity_date_time = maturity_date_time.into();

        require_key_part("chargingStation", &charging_station)?;
        require_key_part("optionNumber", &option_number)?;
        require_present("issueDateTime", &issue_date_time)?;
        require_present("maturityDateTime", &maturity_date_time)?;

        Ok(Self {
            charging_station,
            option_number,
            issue_date_time,
            maturity_date_time,
            face_value,
            owner: None,
            current_state: None,
        })
    }

    // --- identity + attributes -------------------------------------------

    pub fn charging_station(&self) -> &str {
        &self.charging_station
    }

    pub fn option_number(&self) -> &str {
        &self.option_number
    }

    pub fn issue_date_time(&self) -> &str {
        &self.issue_date_time
    }

    pub fn maturity_date_time(&self) -> &str {
        &self.maturity_date_time
    }

    pub fn face_value(&self) -> i64 {
        self.face_value
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = Some(owner.into());
    }

    // --- lifecycle state --------------------------------------------------

    pub fn current_state(&self) -> Option<OptionState> {
        self.current_state
    }

    /// Label for messages: the state name, or `"UNSET"` before issuance.
    pub fn state_label(&self) -> &'static str {
        match self.current_state {
            Some(state) => state.as_str(),
            None => "UNSET",
        }
    }

    pub fn mark_issued(&mut self) {
        self.current_state = Some(OptionState::Issued);
    }

    pub fn mark_trading(&mut self) {
        self.current_state = Some(OptionState::Trading);
    }

    pub fn mark_delivered(&mut self) {
        self.current_state = Some(OptionState::Delivered);
    }

    pub fn is_issued(&self) -> bool {
        self.current_state == Some(OptionState::Issued)
    }

    pub fn is_trading(&self) -> bool {
        self.current_state == Some(OptionState::Trading)
    }

    pub fn is_delivered(&self) -> bool {
        self.current_state == Some(OptionState::Delivered)
    }
}

impl LedgerState for ChargingOption {
    const CLASS: &'static str = "org.optionnet.chargingoption";

    fn key_parts(&self) -> Vec<String> {
        vec![self.charging_station.clone(), self.option_number.clone()]
    }
}

fn require_present(field: &'static str, value: &str) -> Result<(), ContractError> {
    if value.is_empty() {
        return Err(ContractError::InvalidArgument {
            detail: format!("{field} must not be empty"),
        });
    }
    Ok(())
}

fn require_key_part(field: &'static str, value: &str) -> Result<(), ContractError> {
    require_present(field, value)?;
    if value.contains(key::SEPARATOR) {
        return Err(ContractError::InvalidArgument {
            detail: format!("{field} must not contain {:?}", key::SEPARATOR),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
