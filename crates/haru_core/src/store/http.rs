//! Hosted backend client.
//!
//! Speaks the Supabase REST dialect: rows live under `/rest/v1/{table}`,
//! blobs under `/storage/v1/object/{bucket}`. On native targets requests
//! go through rustls; on wasm32 reqwest rides the browser's fetch.

use reqwest::Client;

use super::{BoxFuture, PostFields, PostRecord, RemoteStore, StoreError};
use crate::config::Config;

/// Client for the hosted posts table and image bucket.
#[derive(Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
    api_key: String,
    table: String,
    bucket: String,
}

impl HttpStore {
    /// Create a store client for a backend at `base_url` (no trailing
    /// slash) authenticated with `api_key`. Table and bucket names take
    /// the standard defaults.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            table: Config::DEFAULT_POSTS_TABLE.to_string(),
            bucket: Config::DEFAULT_IMAGES_BUCKET.to_string(),
        }
    }

    /// Wire a store client from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let mut store = Self::new(config.store_url.clone(), config.api_key.clone());
        store.table = config.posts_table.clone();
        store.bucket = config.images_bucket.clone();
        store
    }

    fn rows_url(&self) -> String {
        format!("{}/rest/v1/{}", self.base_url, self.table)
    }

    fn object_url(&self, path: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, path)
    }

    fn authed(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }
}

/// Map a transport-level failure into a store error.
fn network_err(err: reqwest::Error) -> StoreError {
    StoreError::Network(err.to_string())
}

/// Fail on non-success statuses, carrying the body for diagnostics.
async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response.text().await.unwrap_or_default();
    Err(StoreError::Http {
        status: status.as_u16(),
        message,
    })
}

impl RemoteStore for HttpStore {
    fn list_posts(&self) -> BoxFuture<'_, Result<Vec<PostRecord>, StoreError>> {
        let request = self.authed(self.client.get(self.rows_url())).query(&[
            ("select", "*"),
            // The hosted table keeps a created_at column for creation order
            ("order", "date.desc,created_at.desc"),
        ]);

        Box::pin(async move {
            let response = check_status(request.send().await.map_err(network_err)?).await?;
            let body = response.text().await.map_err(network_err)?;
            serde_json::from_str::<Vec<PostRecord>>(&body)
                .map_err(|e| StoreError::Decode(e.to_string()))
        })
    }

    fn insert_post<'a>(
        &'a self,
        fields: &'a PostFields,
    ) -> BoxFuture<'a, Result<PostRecord, StoreError>> {
        let request = self
            .authed(self.client.post(self.rows_url()))
            .header("Prefer", "return=representation")
            .json(fields);

        Box::pin(async move {
            let response = check_status(request.send().await.map_err(network_err)?).await?;
            // The backend answers an insert with the array of created rows
            let body = response.text().await.map_err(network_err)?;
            let mut rows = serde_json::from_str::<Vec<PostRecord>>(&body)
                .map_err(|e| StoreError::Decode(e.to_string()))?;
            if rows.is_empty() {
                return Err(StoreError::MissingRow);
            }
            Ok(rows.remove(0))
        })
    }

    fn delete_post<'a>(&'a self, id: &'a str) -> BoxFuture<'a, Result<(), StoreError>> {
        let request = self
            .authed(self.client.delete(self.rows_url()))
            .query(&[("id", format!("eq.{}", id))]);

        Box::pin(async move {
            check_status(request.send().await.map_err(network_err)?).await?;
            Ok(())
        })
    }

    fn upload_blob<'a>(
        &'a self,
        path: &'a str,
        bytes: &'a [u8],
    ) -> BoxFuture<'a, Result<(), StoreError>> {
        let request = self
            .authed(self.client.post(self.object_url(path)))
            .header("Content-Type", "application/octet-stream")
            .body(bytes.to_vec());

        Box::pin(async move {
            check_status(request.send().await.map_err(network_err)?).await?;
            Ok(())
        })
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, self.bucket, path
        )
    }
}
