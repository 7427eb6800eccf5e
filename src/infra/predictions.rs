//! Saved predictions, one ordered list per user under
//! `savedPredictions_<uid>`, most recent first.

use time::OffsetDateTime;

use super::storage::{KeyValueStore, StorageError};
use crate::domain::{format_inr, iso_timestamp, unix_millis, SavedPrediction};

const KEY_PREFIX: &str = "savedPredictions_";

pub fn storage_key(uid: &str) -> String {
    format!("{KEY_PREFIX}{uid}")
}

/// Writes to one uid are not coordinated across processes; the last
/// writer wins.
#[derive(Debug)]
pub struct PredictionStore<S> {
    backend: S,
}

impl<S: KeyValueStore> PredictionStore<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    pub fn into_inner(self) -> S {
        self.backend
    }

    /// Saves `price` for `uid` with the current time as id and date.
    ///
    /// A blank `uid` means nobody is signed in: nothing is written and
    /// `Ok(None)` comes back.
    pub fn save(&mut self, uid: &str, price: f64) -> Result<Option<SavedPrediction>, StorageError> {
        self.save_at(uid, price, OffsetDateTime::now_utc())
    }

    pub fn save_at(
        &mut self,
        uid: &str,
        price: f64,
        at: OffsetDateTime,
    ) -> Result<Option<SavedPrediction>, StorageError> {
        if uid.trim().is_empty() {
            tracing::debug!("ignoring save without a signed-in user");
            return Ok(None);
        }

        let record = SavedPrediction {
            id: unix_millis(at),
            price,
            date: iso_timestamp(at),
            formatted_price: format_inr(price),
        };

        let mut records = self.list(uid);
        records.insert(0, record.clone());
        self.write(uid, &records)?;
        tracing::info!(uid, id = record.id, price, "saved prediction");
        Ok(Some(record))
    }

    /// Saved records for `uid`. Missing or corrupt data reads as empty; a
    /// corrupt value stays in place until the next successful write.
    pub fn list(&self, uid: &str) -> Vec<SavedPrediction> {
        let key = storage_key(uid);
        let Some(raw) = self.backend.get(&key) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(%key, "ignoring corrupt saved predictions: {err}");
                Vec::new()
            }
        }
    }

    /// Drops every record whose id matches; other records keep their order.
    pub fn delete_one(&mut self, uid: &str, id: i64) -> Result<(), StorageError> {
        let mut records = self.list(uid);
        let before = records.len();
        records.retain(|record| record.id != id);
        if records.len() == before {
            return Ok(());
        }
        self.write(uid, &records)?;
        tracing::info!(uid, id, "deleted prediction");
        Ok(())
    }

    pub fn delete_all(&mut self, uid: &str) -> Result<(), StorageError> {
        self.backend.remove(&storage_key(uid))?;
        tracing::info!(uid, "deleted all predictions");
        Ok(())
    }

    /// Runs when `uid`'s session ends.
    pub fn purge_on_logout(&mut self, uid: &str) -> Result<(), StorageError> {
        self.delete_all(uid)
    }

    fn write(&mut self, uid: &str, records: &[SavedPrediction]) -> Result<(), StorageError> {
        let json = serde_json::to_string(records)?;
        self.backend.set(&storage_key(uid), &json)
    }
}

#[cfg(test)]
mod tests {
    use time::{macros::datetime, Duration};

    use super::*;
    use crate::infra::storage::MemoryStore;

    const T0: OffsetDateTime = datetime!(2026-10-18 09:30:00 UTC);

    fn seeded(uid: &str, prices: &[f64]) -> PredictionStore<MemoryStore> {
        let mut store = PredictionStore::new(MemoryStore::new());
        for (idx, price) in prices.iter().enumerate() {
            store
                .save_at(uid, *price, T0 + Duration::seconds(idx as i64))
                .unwrap();
        }
        store
    }

    #[test]
    fn save_prepends_and_formats() {
        let store = seeded("user_1", &[8_500_000.0, 15_000_000.0]);
        let records = store.list("user_1");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].price, 15_000_000.0);
        assert_eq!(records[0].formatted_price, "₹1.50 Cr");
        assert_eq!(records[0].date, "2026-10-18T09:30:01.000Z");
        assert_eq!(records[1].formatted_price, "₹85.00 Lakhs");
        assert_eq!(records[0].id - records[1].id, 1000);
    }

    #[test]
    fn blank_uid_is_ignored() {
        let mut store = PredictionStore::new(MemoryStore::new());
        assert_eq!(store.save("", 1.0).unwrap(), None);
        assert_eq!(store.save("  ", 1.0).unwrap(), None);
        assert!(store.into_inner().is_empty());
    }

    #[test]
    fn delete_one_keeps_relative_order() {
        let mut store = seeded("user_1", &[1.0, 2.0, 3.0, 4.0]);
        let ids: Vec<i64> = store.list("user_1").iter().map(|r| r.id).collect();
        store.delete_one("user_1", ids[1]).unwrap();
        let remaining: Vec<i64> = store.list("user_1").iter().map(|r| r.id).collect();
        assert_eq!(remaining, vec![ids[0], ids[2], ids[3]]);

        store.delete_one("user_1", 42).unwrap();
        assert_eq!(store.list("user_1").len(), 3);
    }

    #[test]
    fn delete_all_and_purge_clear_the_list() {
        let mut store = seeded("user_1", &[1.0, 2.0]);
        store.delete_all("user_1").unwrap();
        assert!(store.list("user_1").is_empty());

        let mut store = seeded("user_2", &[1.0]);
        store.purge_on_logout("user_2").unwrap();
        assert!(store.list("user_2").is_empty());
    }

    #[test]
    fn corrupt_json_reads_as_empty_until_overwritten() {
        let mut backend = MemoryStore::new();
        backend.set(&storage_key("user_1"), "{not json").unwrap();
        let mut store = PredictionStore::new(backend);
        assert!(store.list("user_1").is_empty());

        store.save_at("user_1", 250_000.0, T0).unwrap();
        let records = store.list("user_1");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].formatted_price, "₹2.50 Lakhs");
    }

    #[test]
    fn users_are_isolated() {
        let mut store = seeded("alice", &[1_000_000.0]);
        store.save_at("bob", 2_000_000.0, T0).unwrap();
        assert!(store.list("alice").iter().all(|r| r.price == 1_000_000.0));
        assert!(store.list("bob").iter().all(|r| r.price == 2_000_000.0));
        store.delete_all("alice").unwrap();
        assert_eq!(store.list("bob").len(), 1);
    }
}
