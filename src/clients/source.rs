//! Opening byte streams from a remote media origin.

use bytes::Bytes;
use futures_util::Stream;

use crate::clients::errors::FetchError;

/// Content type assumed when the origin does not send one.
pub const DEFAULT_MEDIA_TYPE: &str = "application/octet-stream";

/// Opens byte streams from remote origins.
///
/// Only the response headers are awaited; the body is handed on unread so it
/// can be piped straight into an upload.
#[derive(Clone, Debug)]
pub struct SourceFetcher {
    client: reqwest::Client,
}

impl SourceFetcher {
    /// Creates a fetcher that shares the given HTTP client.
    #[must_use]
    pub const fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Sends a GET request and waits for the response headers.
    ///
    /// # Errors
    ///
    /// - [`FetchError::Network`] if no response is received
    /// - [`FetchError::Status`] if the origin answers with a non-2xx status
    pub async fn open(&self, url: &str) -> Result<SourceStream, FetchError> {
        tracing::debug!("Opening media stream from {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Media origin {} returned status {}", url, status);
            return Err(FetchError::Status {
                url: url.to_string(),
                code: status.as_u16(),
            });
        }

        Ok(SourceStream::from_response(url, response))
    }
}

/// A live response body from the media origin.
///
/// Headers have been received; the body has not been read.
#[derive(Debug)]
pub struct SourceStream {
    url: String,
    content_type: Option<String>,
    content_length: Option<u64>,
    response: reqwest::Response,
}

impl SourceStream {
    fn from_response(url: &str, response: reqwest::Response) -> Self {
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(String::from);

        Self {
            url: url.to_string(),
            content_type,
            content_length: response.content_length(),
            response,
        }
    }

    /// Returns the source URL.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Returns the media type of the body, defaulting to
    /// [`DEFAULT_MEDIA_TYPE`].
    #[must_use]
    pub fn media_type(&self) -> &str {
        self.content_type.as_deref().unwrap_or(DEFAULT_MEDIA_TYPE)
    }

    /// Returns the body length announced by the origin, if any.
    #[must_use]
    pub const fn content_length(&self) -> Option<u64> {
        self.content_length
    }

    /// Consumes the stream, yielding body chunks as they arrive.
    pub fn into_bytes_stream(self) -> impl Stream<Item = Result<Bytes, reqwest::Error>> {
        self.response.bytes_stream()
    }
}
