//! onet-contract
//!
//! The charging option smart contract: the [`ChargingOption`] record with
//! its closed lifecycle enum, the typed collection it lives in, the
//! per-invocation [`OptionContext`], and the [`OptionContract`] operations
//! (`issue`, `buy`, `deliver`, `query`) plus the name-based `invoke`
//! dispatcher a request front end calls.
//!
//! The contract holds no state of its own and talks to storage only through
//! the `LedgerStore` seam from `onet-ledger`, so any backend (in-memory for
//! tests, sled for an embedded ledger) plugs in unchanged.

mod context;
mod contract;
mod dispatch;
mod error;
mod list;
mod option;

pub use context::OptionContext;
pub use contract::OptionContract;
pub use error::ContractError;
pub use list::{OptionList, OPTION_LIST_NAME};
pub use option::{ChargingOption, OptionState};
