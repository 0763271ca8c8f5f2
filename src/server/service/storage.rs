//! Object storage client for profile and meal images.
//!
//! Thin typed client for the storage bucket's HTTP API: authenticated PUT to
//! upload, DELETE to remove, and deterministic public URLs per key. Keys are
//! stable per owner (one object per user profile, one per meal), so an upload
//! replaces the previous image in place.

use url::Url;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
};

/// Client for the object storage bucket.
#[derive(Clone)]
pub struct StorageClient {
    http: reqwest::Client,
    base_url: String,
    bucket: String,
    token: String,
}

impl StorageClient {
    /// Creates a storage client from application configuration.
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.storage_url.trim_end_matches('/').to_string(),
            bucket: config.storage_bucket.clone(),
            token: config.storage_token.clone(),
        }
    }

    /// Uploads an object and returns its public URL.
    ///
    /// # Arguments
    /// - `key` - Object key within the bucket, e.g. `profiles/42`
    /// - `data` - Raw object bytes
    /// - `content_type` - MIME type stored with the object
    ///
    /// # Returns
    /// - `Ok(String)` - Public URL of the stored object
    /// - `Err(AppError::ReqwestErr)` - Network failure or non-success status
    pub async fn upload(
        &self,
        key: &str,
        data: Vec<u8>,
        content_type: &str,
    ) -> Result<String, AppError> {
        let url = self.object_url(key)?;

        self.http
            .put(url.clone())
            .bearer_auth(&self.token)
            .header(reqwest::header::CONTENT_TYPE, content_type.to_string())
            .body(data)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Uploaded object {}", key);

        Ok(url.to_string())
    }

    /// Deletes an object from the bucket.
    ///
    /// Missing objects are treated as already deleted.
    pub async fn delete(&self, key: &str) -> Result<(), AppError> {
        let url = self.object_url(key)?;

        let response = self
            .http
            .delete(url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status() != reqwest::StatusCode::NOT_FOUND {
            response.error_for_status()?;
        }

        Ok(())
    }

    /// Builds the public URL for an object key.
    fn object_url(&self, key: &str) -> Result<Url, AppError> {
        let raw = format!("{}/{}/{}", self.base_url, self.bucket, key);

        let url = Url::parse(&raw).map_err(|source| InternalError::InvalidStorageUrl {
            url: raw,
            source,
        })?;

        Ok(url)
    }
}
