//! Scenario: delivery hands the option back to its charging station and
//! closes the lifecycle.

use onet_contract::{ContractError, OptionContext, OptionContract, OptionState};
use onet_store_mem::MemoryStore;

async fn issue_and_sell_to_alice(store: &mut MemoryStore, contract: &OptionContract) {
    let mut ctx = OptionContext::new(store);
    contract
        .issue(&mut ctx, "CS1", "1", "2023-01-01", "2023-06-01", 1000)
        .await
        .unwrap();
    let mut ctx = OptionContext::new(store);
    contract
        .buy(&mut ctx, "CS1", "1", "CS1", "alice", 950, "2023-01-05")
        .await
        .unwrap();
}

#[tokio::test]
async fn deliver_sets_station_owner_and_delivered_state() {
    // GIVEN option CS1:1 trading, owned by alice.
    let mut store = MemoryStore::new();
    let contract = OptionContract::new();
    issue_and_sell_to_alice(&mut store, &contract).await;

    // WHEN alice delivers it at maturity.
    let mut ctx = OptionContext::new(&mut store);
    let option = contract
        .deliver(&mut ctx, "CS1", "1", "alice", "2023-06-01")
        .await
        .unwrap();

    // THEN the option returns to the station, DELIVERED.
    assert_eq!(option.owner(), Some("CS1"));
    assert_eq!(option.current_state(), Some(OptionState::Delivered));

    // AND the stored record agrees.
    let mut ctx = OptionContext::new(&mut store);
    let stored = contract.query(&mut ctx, "CS1", "1").await.unwrap();
    assert_eq!(stored, option);
}

#[tokio::test]
async fn second_deliver_is_refused_as_already_delivered() {
    // GIVEN option CS1:1 delivered.
    let mut store = MemoryStore::new();
    let contract = OptionContract::new();
    issue_and_sell_to_alice(&mut store, &contract).await;
    let mut ctx = OptionContext::new(&mut store);
    contract
        .deliver(&mut ctx, "CS1", "1", "alice", "2023-06-01")
        .await
        .unwrap();

    // WHEN anyone, even the station that now owns it, delivers again.
    let mut ctx = OptionContext::new(&mut store);
    let err = contract
        .deliver(&mut ctx, "CS1", "1", "CS1", "2023-06-02")
        .await
        .unwrap_err();

    // THEN the refusal is AlreadyDelivered, named before any ownership check.
    assert!(matches!(
        err,
        ContractError::AlreadyDelivered { ref key } if key == "CS1:1"
    ));
    assert_eq!(err.to_string(), "option CS1:1 already delivered");
}

#[tokio::test]
async fn issued_option_can_be_delivered_by_its_station_without_trading() {
    // GIVEN option CS2:5 issued and never sold.
    let mut store = MemoryStore::new();
    let contract = OptionContract::new();
    let mut ctx = OptionContext::new(&mut store);
    contract
        .issue(&mut ctx, "CS2", "5", "2023-01-01", "2023-06-01", 500)
        .await
        .unwrap();

    // WHEN the owning station delivers it directly.
    let mut ctx = OptionContext::new(&mut store);
    let option = contract
        .deliver(&mut ctx, "CS2", "5", "CS2", "2023-06-01")
        .await
        .unwrap();

    // THEN delivery succeeds straight from ISSUED.
    assert_eq!(option.current_state(), Some(OptionState::Delivered));
    assert_eq!(option.owner(), Some("CS2"));
}
