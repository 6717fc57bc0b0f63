//! `multipart/related` framing for metadata-plus-media uploads.
//!
//! Google upload endpoints accept `uploadType=multipart` requests whose body
//! is a JSON metadata part followed by the media part. The media part is
//! streamed through untouched, so only the small framing around it is held
//! in memory.

use bytes::Bytes;
use futures_util::{stream, Stream, StreamExt};
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde_json::Value;

/// A `multipart/related` body with one JSON part and one media part.
///
/// # Example
///
/// ```rust
/// use media_relay::clients::RelatedBody;
/// use serde_json::json;
///
/// let body = RelatedBody::new(&json!({ "name": "clip.mp4" }), "video/mp4");
/// assert!(body.content_type().starts_with("multipart/related; boundary="));
/// ```
#[derive(Clone, Debug)]
pub struct RelatedBody {
    boundary: String,
    metadata: String,
    media_type: String,
}

impl RelatedBody {
    /// Length of generated boundaries.
    const BOUNDARY_LENGTH: usize = 32;

    /// Creates a body for the given metadata and media type with a random boundary.
    #[must_use]
    pub fn new(metadata: &Value, media_type: &str) -> Self {
        let boundary: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(Self::BOUNDARY_LENGTH)
            .map(char::from)
            .collect();
        Self::with_boundary(boundary, metadata, media_type)
    }

    /// Creates a body with a fixed boundary.
    #[must_use]
    pub fn with_boundary(boundary: impl Into<String>, metadata: &Value, media_type: &str) -> Self {
        Self {
            boundary: boundary.into(),
            metadata: metadata.to_string(),
            media_type: media_type.to_string(),
        }
    }

    /// Returns the boundary separating the parts.
    #[must_use]
    pub fn boundary(&self) -> &str {
        &self.boundary
    }

    /// Returns the `Content-Type` header value for the request.
    #[must_use]
    pub fn content_type(&self) -> String {
        format!("multipart/related; boundary={}", self.boundary)
    }

    /// Everything that precedes the media bytes.
    fn head(&self) -> Bytes {
        Bytes::from(format!(
            "--{b}\r\nContent-Type: application/json; charset=UTF-8\r\n\r\n{meta}\r\n--{b}\r\nContent-Type: {media}\r\n\r\n",
            b = self.boundary,
            meta = self.metadata,
            media = self.media_type,
        ))
    }

    /// Everything that follows the media bytes.
    fn tail(&self) -> Bytes {
        Bytes::from(format!("\r\n--{}--\r\n", self.boundary))
    }

    /// Returns the total body length when the media length is known.
    #[must_use]
    pub fn content_length(&self, media_length: Option<u64>) -> Option<u64> {
        let framing = (self.head().len() + self.tail().len()) as u64;
        media_length.map(|len| len + framing)
    }

    /// Wraps the media stream in the multipart framing.
    pub fn frame<S, E>(self, media: S) -> impl Stream<Item = Result<Bytes, E>>
    where
        S: Stream<Item = Result<Bytes, E>>,
    {
        let head = stream::iter([Ok(self.head())]);
        let tail = stream::iter([Ok(self.tail())]);
        head.chain(media).chain(tail)
    }

    /// Converts the framed media stream into a streaming request body.
    pub fn into_body<S, E>(self, media: S) -> reqwest::Body
    where
        S: Stream<Item = Result<Bytes, E>> + Send + Sync + 'static,
        E: Into<Box<dyn std::error::Error + Send + Sync>> + Send + Sync + 'static,
    {
        reqwest::Body::wrap_stream(self.frame(media))
    }
}
