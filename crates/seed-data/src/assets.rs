//! Remote image-asset service client.
//!
//! Uploads source images and returns permanent identifiers plus optimized
//! delivery URLs. Every operation here is best-effort from the pipeline's
//! point of view: a media step that fails falls back to a placeholder URL
//! and the owning routine continues.

use std::time::Duration;

use newsroom::models::MediaKind;
use reqwest::Client;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use thiserror::Error;

const DEFAULT_BASE_URL: &str = "https://api.pixvault.io";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("source URL rejected with status {0}")]
    InvalidSource(u16),
    #[error("no alternative image found for '{0}'")]
    NoAlternative(String),
    #[error("missing {0} in environment")]
    MissingCredentials(&'static str),
}

/// Result of a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct UploadedAsset {
    /// Optimized delivery URL.
    pub secure_url: String,
    /// Permanent identifier within the asset service.
    pub public_id: String,
    pub version: i64,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    url: Option<String>,
}

/// Client for the asset service's upload and search endpoints.
pub struct AssetClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl AssetClient {
    /// Reads credentials from the environment. `MEDIA_API_KEY` must be set;
    /// `MEDIA_API_URL` overrides the default endpoint.
    pub fn from_env() -> Result<Self, AssetError> {
        let api_key = std::env::var("MEDIA_API_KEY")
            .map_err(|_| AssetError::MissingCredentials("MEDIA_API_KEY"))?;
        let base_url =
            std::env::var("MEDIA_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Ok(Self::new(base_url, api_key))
    }

    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Checks that a candidate source URL answers with a success status.
    pub async fn validate(&self, url: &str) -> Result<(), AssetError> {
        let response = self
            .client
            .head(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(AssetError::InvalidSource(response.status().as_u16()))
        }
    }

    /// Downloads a source image into memory for the buffer-upload fallback.
    pub async fn download(&self, url: &str) -> Result<Vec<u8>, AssetError> {
        let response = self
            .client
            .get(url)
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.bytes().await?.to_vec())
    }

    /// Direct-URL upload; the service fetches the source itself.
    pub async fn upload_url(
        &self,
        source_url: &str,
        public_id: &str,
        folder: &str,
    ) -> Result<UploadedAsset, AssetError> {
        let form = Form::new()
            .text("file", source_url.to_string())
            .text("public_id", public_id.to_string())
            .text("folder", folder.to_string());

        self.upload(form).await
    }

    /// Buffer upload fallback for sources the service cannot fetch itself.
    pub async fn upload_buffer(
        &self,
        bytes: Vec<u8>,
        public_id: &str,
        folder: &str,
    ) -> Result<UploadedAsset, AssetError> {
        let part = Part::bytes(bytes)
            .file_name(format!("{public_id}.jpg"))
            .mime_str("image/jpeg")?;

        let form = Form::new()
            .part("file", part)
            .text("public_id", public_id.to_string())
            .text("folder", folder.to_string());

        self.upload(form).await
    }

    async fn upload(&self, form: Form) -> Result<UploadedAsset, AssetError> {
        let url = format!("{}/v1/upload", self.base_url);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json().await?)
    }

    /// Searches the stock catalog for a replacement image.
    pub async fn search_alternative(&self, term: &str) -> Result<String, AssetError> {
        let url = format!("{}/v1/search", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.api_key)
            .timeout(REQUEST_TIMEOUT)
            .query(&[("q", term)])
            .send()
            .await?
            .error_for_status()?;

        let parsed: SearchResponse = response.json().await?;
        parsed
            .url
            .ok_or_else(|| AssetError::NoAlternative(term.to_string()))
    }

    /// Full acquisition path: validate the candidate, search an alternative
    /// if it is rejected, then upload (direct URL first, buffer second).
    pub async fn acquire(
        &self,
        candidate_url: &str,
        search_term: &str,
        public_id: &str,
        folder: &str,
    ) -> Result<UploadedAsset, AssetError> {
        let source = match self.validate(candidate_url).await {
            Ok(()) => candidate_url.to_string(),
            Err(err) => {
                tracing::warn!("candidate image rejected ({err}); searching alternative");
                self.search_alternative(search_term).await?
            }
        };

        match self.upload_url(&source, public_id, folder).await {
            Ok(asset) => Ok(asset),
            Err(err) => {
                tracing::warn!("direct upload failed ({err}); retrying with buffer");
                let bytes = self.download(&source).await?;
                self.upload_buffer(bytes, public_id, folder).await
            }
        }
    }
}

/// Pixel dimensions used for placeholder generation per media role.
pub fn dimensions(kind: MediaKind) -> (u32, u32) {
    match kind {
        MediaKind::Logo => (400, 400),
        MediaKind::OgImage => (1200, 630),
        MediaKind::TwitterImage => (1200, 600),
        MediaKind::PostImage => (1280, 720),
        MediaKind::Gallery => (1024, 768),
    }
}

/// Deterministic placeholder used when the asset service is disabled or a
/// media step fails.
pub fn placeholder_url(kind: MediaKind, slug: &str) -> String {
    let (w, h) = dimensions(kind);
    format!("https://placehold.co/{w}x{h}?text={slug}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_urls_are_deterministic() {
        let a = placeholder_url(MediaKind::Logo, "acme-corp");
        let b = placeholder_url(MediaKind::Logo, "acme-corp");
        assert_eq!(a, b);
        assert!(a.contains("400x400"));
        assert!(a.contains("acme-corp"));
    }

    #[test]
    fn test_dimensions_cover_all_kinds() {
        for kind in [
            MediaKind::Logo,
            MediaKind::OgImage,
            MediaKind::TwitterImage,
            MediaKind::PostImage,
            MediaKind::Gallery,
        ] {
            let (w, h) = dimensions(kind);
            assert!(w > 0 && h > 0);
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_reports_http_error() {
        let client = AssetClient::new("http://127.0.0.1:1", "k");
        let result = client.search_alternative("office building").await;
        assert!(matches!(result, Err(AssetError::Http(_))));
    }
}
