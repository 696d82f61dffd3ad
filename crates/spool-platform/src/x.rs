// X API v2 client implementation (HTTP direct, no SDK)

use std::path::Path;

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::multipart;
use serde::Deserialize;

use crate::error::PlatformError;
use crate::traits::PlatformClient;

const X_API_BASE: &str = "https://api.x.com/2";

/// X API v2 client (HTTP direct, no SDK)
///
/// A single OAuth2 bearer token covers both posting and media upload.
pub struct XApiClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl XApiClient {
    /// Create new client with a bearer token
    pub fn new(bearer_token: impl Into<String>) -> Result<Self> {
        let bearer_token = bearer_token.into();

        let mut headers = HeaderMap::new();
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", bearer_token))
                .context("Invalid bearer token format")?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            http_client,
            base_url: X_API_BASE.to_string(),
        })
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, PlatformError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let message = response.text().await.unwrap_or_default();
        Err(PlatformError::Api { status, message })
    }
}

#[async_trait]
impl PlatformClient for XApiClient {
    async fn create_post(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
        media_ids: &[String],
    ) -> Result<String, PlatformError> {
        let mut body = serde_json::json!({ "text": text });
        if let Some(parent) = in_reply_to {
            body["reply"] = serde_json::json!({ "in_reply_to_tweet_id": parent });
        }
        if !media_ids.is_empty() {
            body["media"] = serde_json::json!({ "media_ids": media_ids });
        }

        let response = self
            .http_client
            .post(format!("{}/tweets", self.base_url))
            .json(&body)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let raw: CreatePostResponse = response.json().await?;

        Ok(raw.data.id)
    }

    async fn upload_media(&self, path: &Path) -> Result<String, PlatformError> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|source| PlatformError::Media {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "media".to_string());

        let form = multipart::Form::new().part("media", multipart::Part::bytes(bytes).file_name(file_name));

        let response = self
            .http_client
            .post(format!("{}/media/upload", self.base_url))
            .multipart(form)
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let raw: MediaUploadResponse = response.json().await?;

        Ok(raw.data.id)
    }
}

// ============================================================================
// X-SPECIFIC RESPONSE TYPES
// ============================================================================

#[derive(Debug, Clone, Deserialize)]
struct CreatePostResponse {
    data: CreatedPost,
}

#[derive(Debug, Clone, Deserialize)]
struct CreatedPost {
    id: String,
}

#[derive(Debug, Clone, Deserialize)]
struct MediaUploadResponse {
    data: UploadedMedia,
}

#[derive(Debug, Clone, Deserialize)]
struct UploadedMedia {
    id: String,
}
