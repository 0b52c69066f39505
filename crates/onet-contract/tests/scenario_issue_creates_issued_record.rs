//! Scenario: a charging station issues a new option.

use onet_contract::{OptionContext, OptionContract, OptionState};
use onet_store_mem::MemoryStore;

#[tokio::test]
async fn issue_creates_an_issued_station_owned_record() {
    // GIVEN an empty ledger.
    let mut store = MemoryStore::new();
    let contract = OptionContract::new();

    // WHEN CS1 issues option 00001.
    let mut ctx = OptionContext::new(&mut store);
    let option = contract
        .issue(&mut ctx, "CS1", "00001", "2023-01-01", "2023-06-01", 1000)
        .await
        .unwrap();

    // THEN the returned record is ISSUED and owned by the issuing station.
    assert_eq!(option.charging_station(), "CS1");
    assert_eq!(option.option_number(), "00001");
    assert_eq!(option.issue_date_time(), "2023-01-01");
    assert_eq!(option.maturity_date_time(), "2023-06-01");
    assert_eq!(option.face_value(), 1000);
    assert_eq!(option.owner(), Some("CS1"));
    assert_eq!(option.current_state(), Some(OptionState::Issued));

    // AND the stored copy is identical to the returned record.
    let mut ctx = OptionContext::new(&mut store);
    let stored = contract.query(&mut ctx, "CS1", "00001").await.unwrap();
    assert_eq!(stored, option);

    // AND exactly one record exists, under the namespaced collection key.
    assert_eq!(store.len(), 1);
    assert!(store.contains_key("org.optionnet.chargingoptionlist:CS1:00001"));
}
