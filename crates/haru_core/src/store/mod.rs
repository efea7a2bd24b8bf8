//! Remote store abstraction module.
//!
//! This module provides the `RemoteStore` trait for abstracting the hosted
//! backend: a relational table of posts plus a blob bucket for uploaded
//! images. The repository and the photo uploader depend only on this
//! capability set, never on a concrete backend.
//!
//! Implementations:
//! - [`HttpStore`]: the hosted backend, speaking the Supabase REST dialect
//! - [`MemoryStore`]: an in-memory table/bucket for tests and for the
//!   local-persistence variant of the frontend
//!
//! ## Object safety
//!
//! `RemoteStore` is designed to be object-safe so it can be used behind
//! `dyn RemoteStore`. To enable this, all async methods return boxed
//! futures.

use std::future::Future;
use std::pin::Pin;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod http;
mod memory;

pub use http::HttpStore;
pub use memory::MemoryStore;

/// A boxed future for object-safe async methods.
///
/// On native targets, futures are `Send` for compatibility with
/// multi-threaded runtimes. On WASM, there's no `Send` requirement since
/// JavaScript is single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// A boxed future for object-safe async methods.
///
/// WASM version without `Send` requirement - JavaScript is single-threaded.
#[cfg(target_arch = "wasm32")]
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Error type for store operations.
///
/// Carries the backend-level failure detail; the repository wraps these
/// into the fetch/write/upload taxonomy of [`crate::error::HaruError`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http {
        /// Response status code
        status: u16,
        /// Response body, as far as it could be read
        message: String,
    },

    /// The request never completed (connectivity, DNS, TLS)
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a body this client could not decode
    #[error("Malformed response: {0}")]
    Decode(String),

    /// An insert reported success but returned no row
    #[error("Insert returned no row")]
    MissingRow,
}

/// One row of the persisted `posts` table.
///
/// `image_url` is singular: only the cover photo is durably stored, even
/// though [`crate::entry::Entry`] models an ordered photo list in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostRecord {
    /// Row identifier generated by the store
    pub id: String,
    /// Entry title
    pub title: String,
    /// User-chosen calendar date
    pub date: NaiveDate,
    /// Clock label captured at submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Entry body text
    pub content: String,
    /// Free-text location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Public URL of the cover photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Insert payload for the `posts` table: a row without its generated `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostFields {
    /// Entry title
    pub title: String,
    /// User-chosen calendar date
    pub date: NaiveDate,
    /// Clock label captured at submission
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Entry body text
    pub content: String,
    /// Free-text location
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Public URL of the cover photo
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl PostFields {
    /// Attach a generated row id, producing the confirmed record.
    pub fn into_record(self, id: impl Into<String>) -> PostRecord {
        PostRecord {
            id: id.into(),
            title: self.title,
            date: self.date,
            time: self.time,
            content: self.content,
            location: self.location,
            image_url: self.image_url,
        }
    }
}

/// Abstraction over the hosted backend: posts table + image bucket.
///
/// Listing returns rows ordered by `date` descending with creation order
/// descending as the secondary key; implementations are responsible for
/// that ordering contract.
#[cfg(not(target_arch = "wasm32"))]
pub trait RemoteStore: Send + Sync {
    /// List all posts, newest date first, then newest created first.
    fn list_posts(&self) -> BoxFuture<'_, Result<Vec<PostRecord>, StoreError>>;

    /// Insert a post and return the stored row with its generated id.
    fn insert_post<'a>(
        &'a self,
        fields: &'a PostFields,
    ) -> BoxFuture<'a, Result<PostRecord, StoreError>>;

    /// Delete a post by id. Deleting an id the store does not know is a
    /// success (the row is gone either way).
    fn delete_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Upload image bytes to the bucket under `path`.
    fn upload_blob<'a>(
        &'a self,
        path: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Public URL for a blob previously uploaded under `path`.
    fn public_url(&self, path: &str) -> String;
}

/// Abstraction over the hosted backend: posts table + image bucket.
///
/// WASM version without the `Send + Sync` bound - JavaScript is
/// single-threaded.
#[cfg(target_arch = "wasm32")]
pub trait RemoteStore {
    /// List all posts, newest date first, then newest created first.
    fn list_posts(&self) -> BoxFuture<'_, Result<Vec<PostRecord>, StoreError>>;

    /// Insert a post and return the stored row with its generated id.
    fn insert_post<'a>(
        &'a self,
        fields: &'a PostFields,
    ) -> BoxFuture<'a, Result<PostRecord, StoreError>>;

    /// Delete a post by id. Deleting an id the store does not know is a
    /// success (the row is gone either way).
    fn delete_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Upload image bytes to the bucket under `path`.
    fn upload_blob<'a>(
        &'a self,
        path: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<(), StoreError>>;

    /// Public URL for a blob previously uploaded under `path`.
    fn public_url(&self, path: &str) -> String;
}
