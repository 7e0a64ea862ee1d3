//! Local persistence of generated cards.
//!
//! All cards live as one JSON array under [`STORAGE_KEY`]. Each element is
//! decoded on its own: an unreadable entry is logged and hidden from
//! [`CardStore::list`] but stays in storage. Writes rewrite the whole array and
//! refuse to run when the stored value is not an array at all.

use std::cell::RefCell;
use std::collections::HashMap;

use log::{debug, error, warn};
use serde_json::Value;
use uuid::Uuid;

use crate::config::STORAGE_KEY;
use crate::error::{StorageError, StoreError};
use crate::model::timestamp::now_millis;
use crate::model::{CardRecord, NewCard};

/// String key-value backend, shaped after the browser's `Storage` interface.
pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-process storage used by tests and anywhere no browser is present.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> Option<String> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }
}

/// Append-only collection of [`CardRecord`]s over a [`KeyValueStorage`].
#[derive(Debug)]
pub struct CardStore<S> {
    storage: S,
}

impl<S: KeyValueStorage> CardStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Assigns a fresh id and creation time to `card`, appends it and writes
    /// the whole collection back. Returns the record exactly as stored.
    pub fn save(&self, card: NewCard) -> Result<CardRecord, StoreError> {
        let mut entries = self.read_entries()?;
        let record = card.into_record(Uuid::new_v4().to_string(), now_millis());
        entries.push(serde_json::to_value(&record)?);
        self.write_all(&entries)?;
        debug!("saved card {} ({} stored)", record.id, entries.len());
        Ok(record)
    }

    /// Every readable stored card, oldest first.
    pub fn list(&self) -> Vec<CardRecord> {
        let entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(err) => {
                error!("Error parsing saved cards from local storage: {err}");
                return Vec::new();
            }
        };
        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(card) => Some(card),
                Err(err) => {
                    warn!("skipping unreadable saved card #{index}: {err}");
                    None
                }
            })
            .collect()
    }

    pub fn get_by_id(&self, id: &str) -> Option<CardRecord> {
        self.list().into_iter().find(|card| card.id == id)
    }

    /// Removes every entry whose `id` is `id` and returns how many were
    /// dropped. Entries that cannot be read as cards are kept unless their id
    /// matches.
    pub fn delete_by_id(&self, id: &str) -> Result<usize, StoreError> {
        let mut entries = self.read_entries()?;
        let before = entries.len();
        entries.retain(|entry| entry.get("id").and_then(Value::as_str) != Some(id));
        let removed = before - entries.len();
        if removed > 0 {
            self.write_all(&entries)?;
        }
        Ok(removed)
    }

    /// Raw stored entries. A missing key is an empty collection; anything that
    /// is not a JSON array is [`StoreError::Corrupted`].
    fn read_entries(&self) -> Result<Vec<Value>, StoreError> {
        let Some(raw) = self.storage.get_item(STORAGE_KEY) else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Array(entries)) => Ok(entries),
            Ok(other) => Err(StoreError::Corrupted(format!(
                "expected an array, found {}",
                json_kind(&other)
            ))),
            Err(err) => Err(StoreError::Corrupted(err.to_string())),
        }
    }

    fn write_all(&self, entries: &[Value]) -> Result<(), StoreError> {
        let json = serde_json::to_string(entries)?;
        self.storage.set_item(STORAGE_KEY, &json)?;
        Ok(())
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Allergy, BusRoute, ClassCode, PhotoData};

    fn card(name: &str) -> NewCard {
        NewCard {
            name: name.to_string(),
            roll_number: "7".to_string(),
            class: ClassCode::Class2B,
            allergies: vec![Allergy::Eggs],
            photo: PhotoData::from_uri("data:image/png;base64,AA=="),
            rack_number: "B2".to_string(),
            bus_route: BusRoute::None,
        }
    }

    struct ReadOnlyStorage;

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, _key: &str) -> Option<String> {
            None
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Write("QuotaExceededError".to_string()))
        }
    }

    #[test]
    fn empty_storage_lists_nothing() {
        let store = CardStore::new(MemoryStorage::new());
        assert!(store.list().is_empty());
        assert!(store.get_by_id("missing").is_none());
    }

    #[test]
    fn save_appends_in_order_with_unique_ids() {
        let store = CardStore::new(MemoryStorage::new());
        let first = store.save(card("A")).unwrap();
        let second = store.save(card("B")).unwrap();

        let names: Vec<_> = store.list().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_ne!(first.id, second.id);
        assert!(Uuid::parse_str(&first.id).is_ok());
    }

    #[test]
    fn saved_record_reads_back_identically() {
        let store = CardStore::new(MemoryStorage::new());
        let saved = store.save(card("Round Trip")).unwrap();

        assert_eq!(store.list(), vec![saved.clone()]);
        assert_eq!(store.get_by_id(&saved.id), Some(saved.clone()));
        assert_eq!(saved.to_new_card(), card("Round Trip"));
    }

    #[test]
    fn corrupted_content_degrades_to_empty() {
        let storage = MemoryStorage::new();
        storage.set_item(STORAGE_KEY, "{not json").unwrap();
        let store = CardStore::new(&storage);
        assert!(store.list().is_empty());
        assert!(store.get_by_id("1").is_none());
    }

    #[test]
    fn one_unreadable_entry_hides_only_itself() {
        let storage = MemoryStorage::new();
        let store = CardStore::new(&storage);
        let alice = store.save(card("Alice")).unwrap();
        let bob = store.save(card("Bob")).unwrap();

        let mut entries: Vec<Value> =
            serde_json::from_str(&storage.get_item(STORAGE_KEY).unwrap()).unwrap();
        let mut bad = entries[0].clone();
        bad["id"] = Value::from("bad");
        bad["class"] = Value::from("6C");
        entries.push(bad);
        entries.push(serde_json::json!({"id": "2", "name": "x"}));
        storage
            .set_item(STORAGE_KEY, &serde_json::to_string(&entries).unwrap())
            .unwrap();

        assert_eq!(store.list(), vec![alice, bob.clone()]);
        assert_eq!(store.get_by_id(&bob.id), Some(bob));
    }

    #[test]
    fn writes_keep_unreadable_entries() {
        let storage = MemoryStorage::new();
        let store = CardStore::new(&storage);
        let alice = store.save(card("Alice")).unwrap();
        let stored = storage.get_item(STORAGE_KEY).unwrap();
        let with_bad = stored.replacen('[', r#"[{"id":"bad","class":"6C"},"#, 1);
        storage.set_item(STORAGE_KEY, &with_bad).unwrap();

        let carol = store.save(card("Carol")).unwrap();
        assert_eq!(store.delete_by_id(&alice.id).unwrap(), 1);

        let raw: Vec<Value> =
            serde_json::from_str(&storage.get_item(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw[0]["id"], "bad");
        assert_eq!(store.list(), vec![carol]);
    }

    #[test]
    fn writes_refuse_to_replace_non_array_content() {
        let storage = MemoryStorage::new();
        let store = CardStore::new(&storage);
        for garbage in ["garbage", r#"{"cards":[]}"#] {
            storage.set_item(STORAGE_KEY, garbage).unwrap();

            assert!(matches!(
                store.save(card("Fresh")),
                Err(StoreError::Corrupted(_))
            ));
            assert!(matches!(
                store.delete_by_id("any"),
                Err(StoreError::Corrupted(_))
            ));
            assert_eq!(storage.get_item(STORAGE_KEY).as_deref(), Some(garbage));
        }
    }

    #[test]
    fn delete_removes_only_matching_cards() {
        let store = CardStore::new(MemoryStorage::new());
        let keep = store.save(card("Keep")).unwrap();
        let drop = store.save(card("Drop")).unwrap();

        assert_eq!(store.delete_by_id(&drop.id).unwrap(), 1);
        assert_eq!(store.list(), vec![keep]);
        assert_eq!(store.delete_by_id("unknown").unwrap(), 0);
    }

    #[test]
    fn write_failures_are_reported() {
        let store = CardStore::new(ReadOnlyStorage);
        let err = store.save(card("Nope")).unwrap_err();
        assert!(matches!(err, StoreError::Storage(StorageError::Write(_))));
    }
}
