//! In-memory store implementation.
//!
//! Backs tests and the local-persistence variant of the frontend: the
//! embedding app can export the records, persist them itself (e.g. to
//! localStorage), and rebuild the store from them on the next start.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use uuid::Uuid;

use super::{BoxFuture, PostFields, PostRecord, RemoteStore, StoreError};

/// An in-memory posts table and image bucket.
///
/// Uses `Arc<RwLock<..>>` so clones share the same underlying storage.
/// Rows keep their insertion order, which serves as the creation-order
/// secondary sort key when listing.
#[derive(Clone, Default)]
pub struct MemoryStore {
    /// Rows in insertion order
    records: Arc<RwLock<Vec<PostRecord>>>,
    /// Uploaded blobs stored as path -> bytes
    blobs: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with rows (insertion order preserved).
    /// Useful for rebuilding from records the frontend persisted itself.
    pub fn with_records(records: Vec<PostRecord>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records)),
            blobs: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Export all rows in insertion order, for persistence by the caller.
    pub fn export_records(&self) -> Vec<PostRecord> {
        self.records.read().unwrap().clone()
    }

    /// Get uploaded blob bytes (for test assertions).
    pub fn blob(&self, path: &str) -> Option<Vec<u8>> {
        self.blobs.read().unwrap().get(path).cloned()
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.records.read().unwrap().len()
    }

    /// True when no rows are stored.
    pub fn is_empty(&self) -> bool {
        self.records.read().unwrap().is_empty()
    }

    /// Rows ordered by date descending, newest insertion first within a
    /// date. Matches the listing contract of the hosted backend.
    fn ordered_records(&self) -> Vec<PostRecord> {
        let records = self.records.read().unwrap();
        let mut ordered: Vec<PostRecord> = records.iter().rev().cloned().collect();
        // Stable sort keeps the reversed insertion order within equal dates
        ordered.sort_by(|a, b| b.date.cmp(&a.date));
        ordered
    }
}

impl RemoteStore for MemoryStore {
    fn list_posts(&self) -> BoxFuture<'_, Result<Vec<PostRecord>, StoreError>> {
        let records = self.ordered_records();
        Box::pin(async move { Ok(records) })
    }

    fn insert_post<'a>(
        &'a self,
        fields: &'a PostFields,
    ) -> BoxFuture<'a, Result<PostRecord, StoreError>> {
        let record = fields.clone().into_record(Uuid::new_v4().to_string());
        self.records.write().unwrap().push(record.clone());
        Box::pin(async move { Ok(record) })
    }

    fn delete_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        self.records.write().unwrap().retain(|r| r.id != id);
        Box::pin(async move { Ok(()) })
    }

    fn upload_blob<'a>(
        &'a self,
        path: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        self.blobs
            .write()
            .unwrap()
            .insert(path.to_string(), bytes.to_vec());
        Box::pin(async move { Ok(()) })
    }

    fn public_url(&self, path: &str) -> String {
        format!("memory://images/{}", path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::block_on;
    use chrono::NaiveDate;

    fn fields(title: &str, date: (i32, u32, u32)) -> PostFields {
        PostFields {
            title: title.to_string(),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            time: None,
            content: "content".to_string(),
            location: None,
            image_url: None,
        }
    }

    #[test]
    fn test_insert_assigns_unique_ids() {
        let store = MemoryStore::new();
        let a = block_on(store.insert_post(&fields("a", (2023, 11, 20)))).unwrap();
        let b = block_on(store.insert_post(&fields("b", (2023, 11, 20)))).unwrap();

        assert_ne!(a.id, b.id);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_list_orders_by_date_then_insertion() {
        let store = MemoryStore::new();
        block_on(store.insert_post(&fields("old", (2023, 11, 20)))).unwrap();
        block_on(store.insert_post(&fields("new", (2023, 11, 23)))).unwrap();
        block_on(store.insert_post(&fields("same-day-later", (2023, 11, 20)))).unwrap();

        let titles: Vec<String> = block_on(store.list_posts())
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();

        assert_eq!(titles, vec!["new", "same-day-later", "old"]);
    }

    #[test]
    fn test_delete_unknown_id_is_success() {
        let store = MemoryStore::new();
        block_on(store.insert_post(&fields("a", (2023, 11, 20)))).unwrap();

        assert!(block_on(store.delete_post("no-such-id")).is_ok());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_blob_roundtrip() {
        let store = MemoryStore::new();
        block_on(store.upload_blob("pic.jpg", &[1, 2, 3])).unwrap();

        assert_eq!(store.blob("pic.jpg"), Some(vec![1, 2, 3]));
        assert_eq!(store.public_url("pic.jpg"), "memory://images/pic.jpg");
    }

    #[test]
    fn test_clones_share_storage() {
        let store = MemoryStore::new();
        let clone = store.clone();
        block_on(store.insert_post(&fields("a", (2023, 11, 20)))).unwrap();

        assert_eq!(clone.len(), 1);
    }

    #[test]
    fn test_export_and_rebuild() {
        let store = MemoryStore::new();
        block_on(store.insert_post(&fields("a", (2023, 11, 20)))).unwrap();
        block_on(store.insert_post(&fields("b", (2023, 11, 22)))).unwrap();

        let rebuilt = MemoryStore::with_records(store.export_records());
        let titles: Vec<String> = block_on(rebuilt.list_posts())
            .unwrap()
            .into_iter()
            .map(|r| r.title)
            .collect();

        assert_eq!(titles, vec!["b", "a"]);
    }
}
