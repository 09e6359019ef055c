// Storage backend client for signed-URL minting
// Author: kelexine (https://github.com/kelexine)

use crate::config::{RetryConfig, StorageConfig};
use crate::error::{FieldbookError, Result};
use crate::utils::retry::{with_retry, RetryPolicy};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Client for the object storage API holding capture photos.
///
/// Speaks the Supabase storage REST contract: a signed URL for a private
/// object is minted with `POST /object/sign/{bucket}/{path}` and a
/// validity window in seconds.
pub struct StorageClient {
    http_client: Client,
    base_url: String,
    bucket: String,
    api_key: String,
    validity_seconds: u64,
    retry_policy: RetryPolicy,
}

#[derive(Deserialize)]
struct SignedUrlResponse {
    #[serde(rename = "signedURL")]
    signed_url: String,
}

impl StorageClient {
    /// Create a new storage client with a pooled HTTP client.
    pub fn new(config: &StorageConfig, retry: &RetryConfig) -> Result<Self> {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .connect_timeout(Duration::from_secs(10))
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Some(Duration::from_secs(60)))
            .tcp_nodelay(true)
            .use_rustls_tls()
            .build()
            .map_err(|e| FieldbookError::Internal(format!("Failed to create HTTP client: {}", e)))?;

        debug!("Created HTTP client with connection pooling and keep-alive");

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            bucket: config.bucket.clone(),
            api_key: config.api_key.clone(),
            validity_seconds: config.signed_url_validity_seconds,
            retry_policy: RetryPolicy::from(retry),
        })
    }

    /// The backend validity window for minted URLs, in seconds.
    pub fn validity_seconds(&self) -> u64 {
        self.validity_seconds
    }

    /// Mint a time-limited signed URL for `path` inside the configured bucket.
    ///
    /// `path` is the bucket-relative storage path (already stripped of any
    /// legacy public-URL prefix). Transient failures are retried per the
    /// configured policy; the final error is recoverable for callers.
    pub async fn create_signed_url(&self, path: &str) -> Result<String> {
        let url = format!(
            "{}/object/sign/{}/{}",
            self.base_url,
            self.bucket,
            encode_path(path)
        );
        let payload = serde_json::json!({ "expiresIn": self.validity_seconds });

        debug!("Minting signed URL via {}", url);

        let client = self.http_client.clone();
        let api_key = self.api_key.clone();

        let signed = with_retry("Signed URL mint", &self.retry_policy, || async {
            let response = client
                .post(&url)
                .header("Authorization", format!("Bearer {}", api_key))
                .header("apikey", api_key.as_str())
                .header("Content-Type", "application/json")
                .json(&payload)
                .send()
                .await
                .map_err(|e| (500, format!("HTTP error: {}", e)))?;

            let status = response.status();
            let response_text = response.text().await.unwrap_or_default();

            if !status.is_success() {
                let error_msg = Self::extract_error_message(&response_text)
                    .unwrap_or_else(|| response_text.clone());
                return Err((status.as_u16(), error_msg));
            }

            let parsed: SignedUrlResponse = serde_json::from_str(&response_text)
                .map_err(|e| (500, format!("Invalid response: {}", e)))?;

            Ok(parsed.signed_url)
        })
        .await
        .map_err(|(status, body)| FieldbookError::Storage(format!("HTTP {}: {}", status, body)))?;

        // The backend returns a path relative to the storage API root
        if signed.starts_with("http://") || signed.starts_with("https://") {
            Ok(signed)
        } else if signed.starts_with('/') {
            Ok(format!("{}{}", self.base_url, signed))
        } else {
            Ok(format!("{}/{}", self.base_url, signed))
        }
    }

    /// Extract error message from API response JSON
    fn extract_error_message(response_text: &str) -> Option<String> {
        #[derive(Deserialize)]
        struct ErrorResponse {
            message: Option<String>,
            error: Option<String>,
        }

        if let Ok(error_resp) = serde_json::from_str::<ErrorResponse>(response_text) {
            return error_resp.message.or(error_resp.error);
        }
        None
    }
}

/// Percent-encode each path segment, keeping the separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_path_keeps_separators() {
        assert_eq!(encode_path("u1/img.jpg"), "u1/img.jpg");
        assert_eq!(encode_path("u 1/summer trip.jpg"), "u%201/summer%20trip.jpg");
    }

    #[test]
    fn test_extract_error_message() {
        let body = r#"{"statusCode":"404","error":"not_found","message":"Object not found"}"#;
        assert_eq!(
            StorageClient::extract_error_message(body),
            Some("Object not found".to_string())
        );
        assert_eq!(StorageClient::extract_error_message("not json"), None);
    }
}
