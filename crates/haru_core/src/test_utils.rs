//! Test utilities for haru_core
//!
//! This module provides shared testing infrastructure: a blocking
//! executor for the store futures, a draft builder, and a store wrapper
//! with switchable failure injection.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use chrono::NaiveDate;

use crate::entry::EntryDraft;
use crate::store::{BoxFuture, MemoryStore, PostFields, PostRecord, RemoteStore, StoreError};

/// Drive a store future to completion. The in-memory store resolves
/// without yielding, so no runtime is needed.
pub fn block_on<F: Future>(f: F) -> F::Output {
    futures_lite::future::block_on(f)
}

/// A minimal valid draft for a given title and date.
pub fn draft(title: &str, date: (i32, u32, u32)) -> EntryDraft {
    EntryDraft {
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        time: None,
        content: "content".to_string(),
        location: None,
        photos: vec![],
    }
}

/// A store wrapper that can be switched to fail lists, writes, or
/// uploads, for exercising the repository's failure paths.
#[derive(Clone)]
pub struct FailingStore {
    inner: MemoryStore,
    lists_fail: Arc<AtomicBool>,
    writes_fail: Arc<AtomicBool>,
    uploads_to_fail: Arc<AtomicUsize>,
}

impl FailingStore {
    /// Wrap a store; all operations pass through until a failure toggle
    /// is flipped.
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            lists_fail: Arc::new(AtomicBool::new(false)),
            writes_fail: Arc::new(AtomicBool::new(false)),
            uploads_to_fail: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Make `list_posts` fail.
    pub fn fail_lists(&self, fail: bool) {
        self.lists_fail.store(fail, Ordering::SeqCst);
    }

    /// Make `insert_post` and `delete_post` fail.
    pub fn fail_writes(&self, fail: bool) {
        self.writes_fail.store(fail, Ordering::SeqCst);
    }

    /// Make the next `count` calls to `upload_blob` fail.
    pub fn fail_next_uploads(&self, count: usize) {
        self.uploads_to_fail.store(count, Ordering::SeqCst);
    }

    /// The wrapped store, for direct assertions.
    pub fn inner(&self) -> &MemoryStore {
        &self.inner
    }

    fn injected<T>(&self) -> BoxFuture<'static, Result<T, StoreError>>
    where
        T: Send + 'static,
    {
        Box::pin(async { Err(StoreError::Network("injected failure".to_string())) })
    }
}

impl RemoteStore for FailingStore {
    fn list_posts(&self) -> BoxFuture<'_, Result<Vec<PostRecord>, StoreError>> {
        if self.lists_fail.load(Ordering::SeqCst) {
            return self.injected();
        }
        self.inner.list_posts()
    }

    fn insert_post<'a>(
        &'a self,
        fields: &'a PostFields,
    ) -> BoxFuture<'a, Result<PostRecord, StoreError>> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return self.injected();
        }
        self.inner.insert_post(fields)
    }

    fn delete_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        if self.writes_fail.load(Ordering::SeqCst) {
            return self.injected();
        }
        self.inner.delete_post(id)
    }

    fn upload_blob<'a>(
        &'a self,
        path: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        let remaining = self.uploads_to_fail.load(Ordering::SeqCst);
        if remaining > 0 {
            self.uploads_to_fail
                .store(remaining.saturating_sub(1), Ordering::SeqCst);
            return self.injected();
        }
        self.inner.upload_blob(path, bytes)
    }

    fn public_url(&self, path: &str) -> String {
        self.inner.public_url(path)
    }
}
