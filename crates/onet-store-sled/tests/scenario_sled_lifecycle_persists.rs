//! Scenario: a lifecycle executed against an on-disk sled ledger survives
//! closing and reopening the store.

use onet_contract::{OptionContext, OptionContract, OptionState};
use onet_store_sled::SledStore;

#[tokio::test]
async fn traded_option_survives_store_reopen() -> anyhow::Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("ledger");
    let contract = OptionContract::new();

    // GIVEN an option issued and sold against an on-disk ledger.
    {
        let mut store = SledStore::open(&path)?;
        let mut ctx = OptionContext::new(&mut store);
        contract
            .issue(&mut ctx, "CS1", "1", "2023-01-01", "2023-06-01", 1000)
            .await?;
        let mut ctx = OptionContext::new(&mut store);
        contract
            .buy(&mut ctx, "CS1", "1", "CS1", "alice", 950, "2023-01-05")
            .await?;
        store.flush()?;
    }

    // WHEN the same directory is opened again.
    let mut store = SledStore::open(&path)?;

    // THEN the traded option reads back exactly as written.
    let mut ctx = OptionContext::new(&mut store);
    let option = contract.query(&mut ctx, "CS1", "1").await?;
    assert_eq!(option.owner(), Some("alice"));
    assert_eq!(option.current_state(), Some(OptionState::Trading));
    assert_eq!(option.face_value(), 1000);
    Ok(())
}

#[tokio::test]
async fn duplicate_issue_is_refused_on_sled_too() -> anyhow::Result<()> {
    let mut store = SledStore::open_temporary()?;
    let contract = OptionContract::new();

    let mut ctx = OptionContext::new(&mut store);
    contract
        .issue(&mut ctx, "CS9", "3", "2023-01-01", "2023-06-01", 700)
        .await?;

    let mut ctx = OptionContext::new(&mut store);
    let err = contract
        .issue(&mut ctx, "CS9", "3", "2023-01-01", "2023-06-01", 700)
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "state CS9:3 already exists");
    Ok(())
}
