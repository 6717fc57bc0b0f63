//! HTTP client for the destination upload endpoints.
//!
//! This module provides the [`UploadClient`] type, which sends one
//! `multipart/related` upload per call with the live source stream as the
//! media part.

use std::collections::HashMap;

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::{Destination, UploadError};
use crate::clients::multipart::RelatedBody;
use crate::clients::source::SourceStream;
use crate::config::{HostUrl, RelayConfig};
use crate::resource::PropertyMap;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying Google's upload id, reported back in errors.
const UPLOAD_ID_HEADER: &str = "x-guploader-uploadid";

/// A single upload call, minus the media.
#[derive(Clone, Debug)]
pub struct UploadRequest {
    /// Which destination the request targets.
    pub destination: Destination,
    /// Endpoint path relative to the upload host.
    pub path: &'static str,
    /// Query parameters, sent in order.
    pub query: PropertyMap,
    /// JSON metadata sent as the first multipart part.
    pub metadata: Value,
    /// Credentials for the `Authorization` header.
    pub credentials: Credentials,
}

/// A successful answer from an upload endpoint.
#[derive(Clone, Debug)]
pub struct UploadResponse {
    /// The HTTP status code, always in the 2xx range.
    pub code: u16,
    /// The parsed response body; `{}` when the body was empty.
    pub body: Value,
    /// Google's upload id, if the response carried one.
    pub upload_id: Option<String>,
}

/// HTTP client for the Google upload endpoints.
///
/// The client handles:
/// - Endpoint URL construction from the configured upload host
/// - Default headers including User-Agent
/// - Streaming the source body as the media part without buffering it
/// - Mapping destination error bodies to [`UploadError`]
///
/// Uploads are never retried: the source stream can only be read once.
///
/// # Thread Safety
///
/// `UploadClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct UploadClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL for upload endpoints.
    upload_host: HostUrl,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify UploadClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<UploadClient>();
};

impl UploadClient {
    /// Creates a new upload client for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS initialization failure).
    #[must_use]
    pub fn new(config: &RelayConfig) -> Self {
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");
        Self::with_client(client, config)
    }

    /// Creates an upload client around an existing reqwest client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, config: &RelayConfig) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Media Relay Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        Self {
            client,
            upload_host: config.upload_host().clone(),
            default_headers,
        }
    }

    /// Returns the underlying reqwest client.
    #[must_use]
    pub const fn http(&self) -> &reqwest::Client {
        &self.client
    }

    /// Returns the base URL for upload endpoints.
    #[must_use]
    pub const fn upload_host(&self) -> &HostUrl {
        &self.upload_host
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends an upload with the source stream as its media part.
    ///
    /// Returns the destination's status and JSON response body.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] with:
    /// - `code == 0` if the request failed in transport, including the
    ///   source stream breaking mid-upload
    /// - the destination status if it answered with a non-2xx response
    ///   or a body that is not JSON
    pub async fn upload(
        &self,
        request: UploadRequest,
        media: SourceStream,
    ) -> Result<UploadResponse, UploadError> {
        let url = self.upload_host.join(request.path);
        let destination = request.destination;

        let body = RelatedBody::new(&request.metadata, media.media_type());
        let content_type = body.content_type();
        let content_length = body.content_length(media.content_length());

        tracing::debug!(
            "Uploading {} to {} ({} bytes announced)",
            media.url(),
            destination,
            media
                .content_length()
                .map_or_else(|| "unknown".to_string(), |len| len.to_string())
        );

        let mut req_builder = self
            .client
            .post(&url)
            .query(&request.query)
            .header("Authorization", request.credentials.authorization_header())
            .header("Content-Type", content_type);
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if let Some(length) = content_length {
            req_builder = req_builder.header("Content-Length", length);
        }

        let res = req_builder
            .body(body.into_body(media.into_bytes_stream()))
            .send()
            .await
            .map_err(|e| UploadError {
                destination,
                code: 0,
                message: format!("Network error: {e}"),
                error_reference: None,
            })?;

        let code = res.status().as_u16();
        let upload_id = res
            .headers()
            .get(UPLOAD_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .map(String::from);
        let body_text = res.text().await.unwrap_or_default();

        if !(200..300).contains(&code) {
            let message = Self::serialize_error(code, &body_text);
            tracing::warn!("{} upload failed with status {}: {}", destination, code, message);
            return Err(UploadError {
                destination,
                code,
                message,
                error_reference: upload_id,
            });
        }

        let body = if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(&body_text).map_err(|e| UploadError {
                destination,
                code,
                message: format!("Failed to parse upload response: {e}"),
                error_reference: upload_id.clone(),
            })?
        };

        Ok(UploadResponse {
            code,
            body,
            upload_id,
        })
    }

    /// Extracts a readable message from a Google API error body.
    ///
    /// Google wraps errors as `{"error": {"code": 403, "message": "..."}}`;
    /// OAuth failures use `{"error": "...", "error_description": "..."}`.
    /// Anything else is returned as the raw body.
    fn serialize_error(code: u16, body_text: &str) -> String {
        let parsed: Option<Value> = serde_json::from_str(body_text).ok();
        let error = parsed.as_ref().and_then(|body| body.get("error"));

        let message = match error {
            Some(Value::Object(details)) => details
                .get("message")
                .and_then(Value::as_str)
                .map(String::from),
            Some(Value::String(error)) => {
                let description = parsed
                    .as_ref()
                    .and_then(|body| body.get("error_description"))
                    .and_then(Value::as_str);
                Some(description.map_or_else(|| error.clone(), |d| format!("{error}: {d}")))
            }
            _ => None,
        };

        message
            .or_else(|| (!body_text.trim().is_empty()).then(|| body_text.trim().to_string()))
            .unwrap_or_else(|| format!("Request failed with status {code}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client() -> UploadClient {
        UploadClient::new(&RelayConfig::default())
    }

    #[test]
    fn test_client_uses_configured_upload_host() {
        let config = RelayConfig::builder()
            .upload_host(HostUrl::new("http://localhost:9000").unwrap())
            .build();
        let client = UploadClient::new(&config);
        assert_eq!(client.upload_host().as_ref(), "http://localhost:9000");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client();
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.contains("Media Relay Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = RelayConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = UploadClient::new(&config);
        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_accept_header_is_json() {
        let client = create_test_client();
        assert_eq!(
            client.default_headers().get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_serialize_google_error_envelope() {
        let body = r#"{"error":{"code":403,"message":"The user has exceeded their quota.","errors":[]}}"#;
        assert_eq!(
            UploadClient::serialize_error(403, body),
            "The user has exceeded their quota."
        );
    }

    #[test]
    fn test_serialize_oauth_error() {
        let body = r#"{"error":"invalid_token","error_description":"Token expired"}"#;
        assert_eq!(
            UploadClient::serialize_error(401, body),
            "invalid_token: Token expired"
        );
    }

    #[test]
    fn test_serialize_raw_and_empty_bodies() {
        assert_eq!(UploadClient::serialize_error(502, "Bad Gateway\n"), "Bad Gateway");
        assert_eq!(
            UploadClient::serialize_error(500, ""),
            "Request failed with status 500"
        );
    }
}
