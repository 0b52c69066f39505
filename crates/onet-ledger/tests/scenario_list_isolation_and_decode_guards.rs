//! Scenario: collections sharing one store stay isolated, and the decode
//! guards refuse foreign or corrupt bytes instead of materializing a record.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use onet_ledger::{envelope, BoxError, LedgerError, LedgerState, LedgerStore, StateList};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Badge {
    station: String,
    holder: String,
}

impl LedgerState for Badge {
    const CLASS: &'static str = "test.badge";

    fn key_parts(&self) -> Vec<String> {
        vec![self.station.clone(), self.holder.clone()]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Tariff {
    station: String,
    holder: String,
    cents: i64,
}

impl LedgerState for Tariff {
    const CLASS: &'static str = "test.tariff";

    fn key_parts(&self) -> Vec<String> {
        vec![self.station.clone(), self.holder.clone()]
    }
}

#[derive(Default)]
struct MapStore {
    entries: BTreeMap<String, Vec<u8>>,
}

impl LedgerStore for MapStore {
    async fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, BoxError> {
        Ok(self.entries.get(key).cloned())
    }

    async fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), BoxError> {
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }
}

#[tokio::test]
async fn same_key_in_two_collections_does_not_collide() {
    let mut store = MapStore::default();

    // GIVEN two collections over the same store, holding records that share
    // the composite key "CS1:alice".
    {
        let mut badges = StateList::<_, Badge>::new(&mut store, "test.badgelist");
        badges
            .add(&Badge { station: "CS1".into(), holder: "alice".into() })
            .await
            .unwrap();
    }
    {
        let mut tariffs = StateList::<_, Tariff>::new(&mut store, "test.tarifflist");
        tariffs
            .add(&Tariff { station: "CS1".into(), holder: "alice".into(), cents: 40 })
            .await
            .unwrap();
    }

    // THEN both records exist independently under their namespaces.
    assert_eq!(store.entries.len(), 2);
    let badges = StateList::<_, Badge>::new(&mut store, "test.badgelist");
    assert_eq!(badges.get("CS1:alice").await.unwrap().holder, "alice");
}

#[tokio::test]
async fn corrupt_bytes_fail_with_decode_not_a_default_record() {
    let mut store = MapStore::default();

    // GIVEN garbage stored under an otherwise valid collection key.
    store
        .entries
        .insert("test.badgelist:CS1:alice".into(), b"{\"half a rec".to_vec());

    // WHEN the collection reads it back.
    let badges = StateList::<_, Badge>::new(&mut store, "test.badgelist");
    let err = badges.get("CS1:alice").await.unwrap_err();

    // THEN the failure is a decode error naming the key.
    assert!(matches!(err, LedgerError::Decode { .. }), "got: {err:?}");
    assert!(err.to_string().contains("CS1:alice"));
}

#[tokio::test]
async fn bytes_of_another_class_are_refused() {
    let mut store = MapStore::default();

    // GIVEN tariff bytes misfiled into the badge collection.
    let tariff = Tariff { station: "CS1".into(), holder: "alice".into(), cents: 40 };
    let bytes = envelope::encode_state(&tariff).unwrap();
    store.entries.insert("test.badgelist:CS1:alice".into(), bytes);

    // WHEN the badge collection decodes them.
    let badges = StateList::<_, Badge>::new(&mut store, "test.badgelist");
    let err = badges.get("CS1:alice").await.unwrap_err();

    // THEN the class tag check refuses the payload.
    assert!(err.to_string().contains("unknown state class"), "got: {err}");
}
