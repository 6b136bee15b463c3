//! Lock-guarded, append-only record sequence.
//!
//! # Responsibility
//! - Hold the records of one entity type in insertion order.
//! - Serialize appends so id uniqueness survives concurrent requests.
//!
//! # Invariants
//! - No two records in a collection share an id.
//! - Records are never reordered, updated or removed.

use super::{StoreError, StoreResult};
use crate::model::Record;
use log::debug;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One in-memory collection of records.
#[derive(Debug)]
pub struct Collection<T: Record> {
    name: &'static str,
    records: RwLock<Vec<T>>,
}

impl<T: Record> Collection<T> {
    /// Creates an empty collection labelled `name` in logs and errors.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            records: RwLock::new(Vec::new()),
        }
    }

    /// Creates a collection pre-populated with `records`.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when two seed records share an id.
    pub fn with_records(name: &'static str, records: Vec<T>) -> StoreResult<Self> {
        let collection = Self::new(name);
        for record in records {
            collection.append(record)?;
        }
        Ok(collection)
    }

    /// Collection label, e.g. `properties`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns every record in insertion order.
    pub fn list(&self) -> StoreResult<Vec<T>> {
        Ok(self.read()?.clone())
    }

    /// Returns the records matching `predicate`, in insertion order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> StoreResult<Vec<T>> {
        Ok(self
            .read()?
            .iter()
            .filter(|record| predicate(record))
            .cloned()
            .collect())
    }

    /// Looks up one record by id.
    pub fn get_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        Ok(self.read()?.iter().find(|record| record.id() == id).cloned())
    }

    /// Appends `record` to the end of the collection and returns the stored copy.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when the id is already taken; the
    ///   collection is left unchanged.
    pub fn append(&self, record: T) -> StoreResult<T> {
        let mut records = self.write()?;
        if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::DuplicateId {
                collection: self.name,
                id: record.id().to_string(),
            });
        }

        records.push(record.clone());
        debug!(
            "event=record_append module=store status=ok collection={} id={} size={}",
            self.name,
            record.id(),
            records.len()
        );
        Ok(record)
    }

    /// Number of records currently held.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read()?.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read()?.is_empty())
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, Vec<T>>> {
        self.records
            .read()
            .map_err(|_| StoreError::LockPoisoned(self.name))
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, Vec<T>>> {
        self.records
            .write()
            .map_err(|_| StoreError::LockPoisoned(self.name))
    }
}

#[cfg(test)]
mod tests {
    use super::Collection;
    use crate::model::Record;
    use crate::store::StoreError;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: String,
        label: &'static str,
    }

    impl Record for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    fn item(id: &str, label: &'static str) -> Item {
        Item {
            id: id.to_string(),
            label,
        }
    }

    #[test]
    fn append_preserves_insertion_order() {
        let collection = Collection::new("items");
        collection.append(item("b", "first")).unwrap();
        collection.append(item("a", "second")).unwrap();
        collection.append(item("c", "third")).unwrap();

        let labels: Vec<_> = collection.list().unwrap().into_iter().map(|i| i.label).collect();
        assert_eq!(labels, vec!["first", "second", "third"]);
    }

    #[test]
    fn append_rejects_duplicate_id_and_keeps_size() {
        let collection = Collection::new("items");
        collection.append(item("1", "original")).unwrap();

        let err = collection.append(item("1", "clash")).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateId { collection: "items", ref id } if id == "1"
        ));
        assert_eq!(collection.len().unwrap(), 1);
        assert_eq!(collection.get_by_id("1").unwrap().unwrap().label, "original");
    }

    #[test]
    fn get_by_id_returns_none_for_unknown_id() {
        let collection = Collection::with_records("items", vec![item("1", "one")]).unwrap();
        assert!(collection.get_by_id("2").unwrap().is_none());
    }

    #[test]
    fn with_records_rejects_duplicate_seed_ids() {
        let result = Collection::with_records("items", vec![item("1", "a"), item("1", "b")]);
        assert!(result.is_err());
    }

    #[test]
    fn filter_keeps_order_of_matches() {
        let collection = Collection::with_records(
            "items",
            vec![item("1", "keep"), item("2", "drop"), item("3", "keep")],
        )
        .unwrap();

        let ids: Vec<_> = collection
            .filter(|i| i.label == "keep")
            .unwrap()
            .into_iter()
            .map(|i| i.id)
            .collect();
        assert_eq!(ids, vec!["1", "3"]);
    }
}
