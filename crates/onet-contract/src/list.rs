//! The charging option collection.

use onet_ledger::{LedgerError, LedgerStore, StateList};

use crate::option::ChargingOption;

/// Namespace for all charging option records in the ledger.
pub const OPTION_LIST_NAME: &str = "org.optionnet.chargingoptionlist";

/// Typed view over the charging option collection.
pub struct OptionList<'a, S: LedgerStore> {
    list: StateList<'a, S, ChargingOption>,
}

impl<'a, S: LedgerStore> OptionList<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self {
            list: StateList::new(store, OPTION_LIST_NAME),
        }
    }

    pub async fn add_option(&mut self, option: &ChargingOption) -> Result<(), LedgerError> {
        self.list.add(option).await
    }

    pub async fn get_option(&self, key: &str) -> Result<ChargingOption, LedgerError> {
        self.list.get(key).await
    }

    pub async fn update_option(&mut self, option: &ChargingOption) -> Result<(), LedgerError> {
        self.list.update(option).await
    }
}
