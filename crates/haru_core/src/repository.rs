//! Entry repository: the single source of truth for the session's entry
//! list.
//!
//! All mutations go through the [`RemoteStore`] first; local state only
//! changes after the store confirms. A failed insert or delete therefore
//! leaves the snapshot exactly as it was - there is no optimistic update
//! and nothing to roll back. Store errors are caught here, logged, and
//! returned as tagged failures; they never propagate as panics into view
//! rendering.
//!
//! The snapshot lives behind an `RwLock` that is never held across an
//! await: remote calls run lock-free, and the lock is taken only to apply
//! a confirmed result. Readers always observe either the previous or the
//! fully-replaced list.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::entry::{Entry, EntryDraft, insertion_index, sort_newest_first};
use crate::error::{HaruError, Result};
use crate::seed;
use crate::store::RemoteStore;

/// Owns the in-memory entry list and mediates all mutations through the
/// store. One instance lives per application session; views read
/// [`entries`](EntryRepository::entries) and issue intents through the
/// async operations.
pub struct EntryRepository<S> {
    store: S,
    entries: RwLock<Vec<Entry>>,
    seed_on_empty: bool,
    seeded: AtomicBool,
}

impl<S: RemoteStore> EntryRepository<S> {
    /// Create a repository over a store. Seeding is off; enable it with
    /// [`with_seed_on_empty`](EntryRepository::with_seed_on_empty).
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: RwLock::new(Vec::new()),
            seed_on_empty: false,
            seeded: AtomicBool::new(false),
        }
    }

    /// Seed an empty store with the demo entries on the first refresh
    /// that finds it empty. One-time per repository instance.
    pub fn with_seed_on_empty(mut self, enabled: bool) -> Self {
        self.seed_on_empty = enabled;
        self
    }

    /// The underlying store, for collaborators that talk to the same
    /// backend (photo upload).
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Current snapshot, newest first. Side-effect-free.
    pub fn entries(&self) -> Vec<Entry> {
        self.entries.read().unwrap().clone()
    }

    /// Fetch the full list from the store and replace the snapshot
    /// atomically. On failure the previous snapshot is retained.
    pub async fn refresh(&self) -> Result<()> {
        let rows = match self.store.list_posts().await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("Failed to refresh entries: {}", e);
                return Err(HaruError::Fetch(e));
            }
        };

        let mut fresh: Vec<Entry> =
            if rows.is_empty() && self.seed_on_empty && !self.seeded.swap(true, Ordering::SeqCst) {
                self.insert_demo_entries().await
            } else {
                rows.into_iter().map(Entry::from_record).collect()
            };

        // The store lists date-descending with creation order within a
        // date; the stable sort adds the clock-label tie-break on top.
        sort_newest_first(&mut fresh);
        *self.entries.write().unwrap() = fresh;
        Ok(())
    }

    /// Validate and create an entry. The draft's photos must already be
    /// resolved URLs (see [`crate::photos`]). Returns the confirmed entry
    /// with its store-assigned id; on failure the snapshot is untouched.
    pub async fn add_entry(&self, draft: EntryDraft) -> Result<Entry> {
        draft.validate()?;

        let record = match self.store.insert_post(&draft.to_fields()).await {
            Ok(record) => record,
            Err(e) => {
                log::warn!("Failed to save entry '{}': {}", draft.title, e);
                return Err(HaruError::Write(e));
            }
        };

        let entry = draft.into_entry(record.id);
        let mut entries = self.entries.write().unwrap();
        let position = insertion_index(&entries, &entry);
        entries.insert(position, entry.clone());
        Ok(entry)
    }

    /// Delete an entry by id. An id absent from the snapshot is a no-op
    /// success; otherwise the entry is removed only after the store
    /// confirms the deletion.
    pub async fn delete_entry(&self, id: &str) -> Result<()> {
        let present = self.entries.read().unwrap().iter().any(|e| e.id == id);
        if !present {
            return Ok(());
        }

        if let Err(e) = self.store.delete_post(id).await {
            log::warn!("Failed to delete entry '{}': {}", id, e);
            return Err(HaruError::Write(e));
        }

        self.entries.write().unwrap().retain(|e| e.id != id);
        Ok(())
    }

    /// Insert the demo drafts into the empty store. A draft the store
    /// rejects is logged and skipped; the rest still seed.
    async fn insert_demo_entries(&self) -> Vec<Entry> {
        log::debug!("Store is empty, seeding demo entries");
        let mut seeded = Vec::new();
        for draft in seed::demo_drafts() {
            match self.store.insert_post(&draft.to_fields()).await {
                Ok(record) => seeded.push(draft.into_entry(record.id)),
                Err(e) => log::warn!("Skipping demo entry '{}': {}", draft.title, e),
            }
        }
        seeded
    }
}
