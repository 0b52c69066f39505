//! Charging option lifecycle engine.
//!
//! # Design
//!
//! Every operation is one strictly ordered read-modify-write against the
//! collection in the supplied [`OptionContext`]: fetch the record, validate
//! against the caller's claims, mutate a local copy, write it back. The
//! write happens only after all validation has passed, and a failed write
//! aborts the whole operation, so the stored record is either untouched or
//! fully transitioned, never half mutated.
//!
//! # State diagram
//!
//! ```text
//!                issue              buy                buy (repeat)
//!     (none) ──────────► ISSUED ─────────► TRADING ◄──────────────┐
//!                           │                 │  │                │
//!                           │ deliver         │  └────────────────┘
//!                           │                 │ deliver
//!                           ▼                 ▼
//!                        DELIVERED (terminal, owner = charging station)
//! ```
//!
//! State only moves forward. `DELIVERED` is terminal: no buy or deliver is
//! accepted afterwards. An ISSUED option may be delivered directly by its
//! owner without ever trading.
//!
//! # Ownership rules
//!
//! - `issue` sets the issuing charging station as the first owner.
//! - `buy` requires the caller-asserted seller to match the stored owner
//!   before any state consideration.
//! - `deliver` requires the delivering owner to match the stored owner and
//!   returns the option to its charging station.

use tracing::{info, warn};

use onet_ledger::{key, LedgerStore};

use crate::context::OptionContext;
use crate::error::ContractError;
use crate::option::{ChargingOption, OptionState};

/// The charging option smart contract: issue, buy, deliver, query.
///
/// Stateless by construction; everything an operation touches comes in
/// through the [`OptionContext`] parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionContract;

impl OptionContract {
    pub fn new() -> Self {
        Self
    }

    /// Deploy hook. Nothing to set up; logs so hosts can see the contract
    /// came up.
    pub async fn instantiate<S: LedgerStore>(
        &self,
        ctx: &mut OptionContext<'_, S>,
    ) -> Result<(), ContractError> {
        info!(txn = %ctx.txn_id(), "charging option contract instantiated");
        Ok(())
    }

    /// Issue a new charging option owned by its charging station.
    ///
    /// # Errors
    /// [`ContractError::InvalidArgument`] if a field fails validation;
    /// `AlreadyExists` (via [`ContractError::Ledger`]) if an option with the
    /// same key was issued before. Issuance never overwrites.
    pub async fn issue<S: LedgerStore>(
        &self,
        ctx: &mut OptionContext<'_, S>,
        charging_station: &str,
        option_number: &str,
        issue_date_time: &str,
        maturity_date_time: &str,
        face_value: i64,
    ) -> Result<ChargingOption, ContractError> {
        let mut option = ChargingOption::create(
            charging_station,
            option_number,
            issue_date_time,
            maturity_date_time,
            face_value,
        )?;
        option.mark_issued();
        option.set_owner(charging_station);

        ctx.options().add_option(&option).await?;
        info!(
            txn = %ctx.txn_id(),
            station = charging_station,
            number = option_number,
            face_value,
            "charging option issued"
        );
        Ok(option)
    }

    /// Sell the option from `current_owner` to `new_owner`.
    ///
    /// The first sale moves an ISSUED option to TRADING; an option already
    /// TRADING simply changes owner, with no cap on repeat sales. `price`
    /// and `purchase_date_time` travel with the invocation for audit and are
    /// not validated or stored on the record.
    ///
    /// # Errors
    /// [`ContractError::InvalidArgument`] for an empty `new_owner` (a stored
    /// owner is never empty); [`ContractError::NotOwner`] if `current_owner`
    /// is not the stored owner; [`ContractError::NotTrading`] if the option
    /// is DELIVERED (or has no state); `NotFound` via
    /// [`ContractError::Ledger`] for an unknown key. On any refusal the
    /// stored record is left untouched.
    pub async fn buy<S: LedgerStore>(
        &self,
        ctx: &mut OptionContext<'_, S>,
        charging_station: &str,
        option_number: &str,
        current_owner: &str,
        new_owner: &str,
        price: i64,
        purchase_date_time: &str,
    ) -> Result<ChargingOption, ContractError> {
        if new_owner.is_empty() {
            return Err(ContractError::InvalidArgument {
                detail: "newOwner must not be empty".to_string(),
            });
        }
        let option_key = make_option_key(charging_station, option_number)?;
        let mut option = ctx.options().get_option(&option_key).await?;

        if option.owner() != Some(current_owner) {
            warn!(
                txn = %ctx.txn_id(),
                key = %option_key,
                claimed = current_owner,
                "buy refused: claimed owner does not hold the option"
            );
            return Err(ContractError::NotOwner {
                key: option_key,
                claimed: current_owner.to_string(),
            });
        }

        match option.current_state() {
            Some(OptionState::Issued) => {
                option.mark_trading();
                option.set_owner(new_owner);
            }
            Some(OptionState::Trading) => {
                option.set_owner(new_owner);
            }
            Some(OptionState::Delivered) | None => {
                warn!(
                    txn = %ctx.txn_id(),
                    key = %option_key,
                    state = option.state_label(),
                    "buy refused: option is not trading"
                );
                return Err(ContractError::NotTrading {
                    key: option_key,
                    state: option.state_label(),
                });
            }
        }

        ctx.options().update_option(&option).await?;
        info!(
            txn = %ctx.txn_id(),
            key = %option_key,
            seller = current_owner,
            buyer = new_owner,
            price,
            purchased = purchase_date_time,
            "charging option sold"
        );
        Ok(option)
    }

    /// Deliver the option back to its charging station.
    ///
    /// The delivered check precedes the ownership check, so a double deliver
    /// is reported as such regardless of who asks. `deliver_date_time`
    /// travels with the invocation for audit only.
    ///
    /// # Errors
    /// [`ContractError::AlreadyDelivered`] if the option is DELIVERED;
    /// [`ContractError::NotOwner`] if `delivering_owner` is not the stored
    /// owner; `NotFound` via [`ContractError::Ledger`] for an unknown key.
    pub async fn deliver<S: LedgerStore>(
        &self,
        ctx: &mut OptionContext<'_, S>,
        charging_station: &str,
        option_number: &str,
        delivering_owner: &str,
        deliver_date_time: &str,
    ) -> Result<ChargingOption, ContractError> {
        let option_key = make_option_key(charging_station, option_number)?;
        let mut option = ctx.options().get_option(&option_key).await?;

        match option.current_state() {
            Some(OptionState::Delivered) => {
                warn!(txn = %ctx.txn_id(), key = %option_key, "deliver refused: already delivered");
                return Err(ContractError::AlreadyDelivered { key: option_key });
            }
            Some(OptionState::Issued) | Some(OptionState::Trading) | None => {}
        }

        if option.owner() != Some(delivering_owner) {
            warn!(
                txn = %ctx.txn_id(),
                key = %option_key,
                claimed = delivering_owner,
                "deliver refused: claimed owner does not hold the option"
            );
            return Err(ContractError::NotOwner {
                key: option_key,
                claimed: delivering_owner.to_string(),
            });
        }

        option.set_owner(charging_station);
        option.mark_delivered();

        ctx.options().update_option(&option).await?;
        info!(
            txn = %ctx.txn_id(),
            key = %option_key,
            station = charging_station,
            delivered = deliver_date_time,
            "charging option delivered"
        );
        Ok(option)
    }

    /// Read-only fetch of a stored option.
    ///
    /// # Errors
    /// `NotFound` via [`ContractError::Ledger`] for an unknown key.
    pub async fn query<S: LedgerStore>(
        &self,
        ctx: &mut OptionContext<'_, S>,
        charging_station: &str,
        option_number: &str,
    ) -> Result<ChargingOption, ContractError> {
        let option_key = make_option_key(charging_station, option_number)?;
        let option = ctx.options().get_option(&option_key).await?;
        Ok(option)
    }
}

/// Derive the composite key from caller arguments; malformed key fields are
/// an argument problem, not a ledger one.
fn make_option_key(charging_station: &str, option_number: &str) -> Result<String, ContractError> {
    key::make_key(&[charging_station, option_number]).map_err(|err| {
        ContractError::InvalidArgument {
            detail: err.to_string(),
        }
    })
}

// ---------------------------------------------------------------------------
// Unit tests (edge guards; full lifecycle choreography lives in tests/)
// ---------------------------------------------------------------------------
