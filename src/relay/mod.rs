//! Relaying remote media into YouTube and Google Drive.
//!
//! A relay call opens the source URL, waits for the origin's response
//! headers, then issues a single upload whose media part is the live source
//! body. Nothing is written to disk and the body is never fully buffered.
//!
//! # Example
//!
//! ```rust,ignore
//! use media_relay::{copy_to_youtube, CopyOptions};
//!
//! let options = CopyOptions::new("ya29.a0Af...")
//!     .with_description("Uploaded by the relay")
//!     .with_tags("relay,demo");
//!
//! let success = copy_to_youtube("https://media.example.com/clip.mp4", Some("Clip"), &options).await?;
//! assert_eq!(success.status_code, "OK");
//! ```

mod outcome;
mod state;

pub use outcome::{UploadFailure, UploadSuccess};
pub use state::UploadState;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::{
    Destination, DriveFile, FileUploader, RelayError, SourceFetcher, UploadClient, VideoUploader,
};
use crate::config::{AccessToken, RelayConfig};
use crate::resource::VideoRequest;
use state::Lifecycle;

/// Per-call options for a relay.
///
/// Only the access token is required. The video fields are ignored by
/// [`Relay::copy_to_gdrive`].
#[derive(Clone, Debug)]
pub struct CopyOptions {
    /// Bearer token for the destination API.
    pub access_token: AccessToken,
    /// Video description.
    pub description: Option<String>,
    /// Comma-joined video tags.
    pub tags: Option<String>,
    /// Video privacy status; defaults to `private`.
    pub privacy_status: Option<String>,
    /// Video category id; defaults to `22`.
    pub category_id: Option<String>,
    /// Language of the title and description.
    pub default_language: Option<String>,
}

impl CopyOptions {
    /// Creates options carrying only an access token.
    #[must_use]
    pub fn new(access_token: impl Into<AccessToken>) -> Self {
        Self {
            access_token: access_token.into(),
            description: None,
            tags: None,
            privacy_status: None,
            category_id: None,
            default_language: None,
        }
    }

    /// Sets the video description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the video tags from a comma-joined list.
    #[must_use]
    pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
        self.tags = Some(tags.into());
        self
    }

    /// Sets the video privacy status.
    #[must_use]
    pub fn with_privacy_status(mut self, status: impl Into<String>) -> Self {
        self.privacy_status = Some(status.into());
        self
    }

    /// Sets the video category id.
    #[must_use]
    pub fn with_category_id(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Sets the default language of the video metadata.
    #[must_use]
    pub fn with_default_language(mut self, language: impl Into<String>) -> Self {
        self.default_language = Some(language.into());
        self
    }

    /// Writes the video overrides into a request's flat properties.
    fn apply(&self, mut request: VideoRequest) -> VideoRequest {
        if let Some(description) = &self.description {
            request = request.with_description(description);
        }
        if let Some(tags) = &self.tags {
            request = request.with_tags(tags);
        }
        if let Some(status) = &self.privacy_status {
            request = request.with_privacy_status(status);
        }
        if let Some(category_id) = &self.category_id {
            request = request.with_category_id(category_id);
        }
        if let Some(language) = &self.default_language {
            request = request.with_default_language(language);
        }
        request
    }
}

/// Streams remote media into YouTube or Google Drive.
///
/// A `Relay` holds only immutable configuration and a connection pool, so it
/// can be shared across tasks. Every call builds its own request objects.
///
/// # Example
///
/// ```rust,ignore
/// use media_relay::{CopyOptions, HostUrl, Relay, RelayConfig};
///
/// let relay = Relay::new(
///     RelayConfig::builder()
///         .upload_host(HostUrl::new("https://upload-proxy.example.com").unwrap())
///         .build(),
/// );
///
/// let file = relay
///     .copy_to_gdrive("https://media.example.com/clip.mp4", Some("clip.mp4"), &options)
///     .await?;
/// println!("File Id: {}", file.id);
/// ```
#[derive(Debug)]
pub struct Relay {
    config: RelayConfig,
    uploads: UploadClient,
    fetcher: SourceFetcher,
}

// Verify Relay is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Relay>();
};

impl Relay {
    /// Creates a relay for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created; see
    /// [`UploadClient::new`].
    #[must_use]
    pub fn new(config: RelayConfig) -> Self {
        let uploads = UploadClient::new(&config);
        let fetcher = SourceFetcher::new(uploads.http().clone());
        Self {
            config,
            uploads,
            fetcher,
        }
    }

    /// Returns the relay's configuration.
    #[must_use]
    pub const fn config(&self) -> &RelayConfig {
        &self.config
    }

    /// Uploads the media at `stream_url` to YouTube as a new video.
    ///
    /// The video is private unless `options` says otherwise. When
    /// `stream_title` is `None` or empty a timestamped title is generated.
    ///
    /// # Errors
    ///
    /// - [`RelayError::Fetch`] if the source cannot be opened; the upload
    ///   endpoint is not called
    /// - [`RelayError::Upload`] if YouTube rejects the upload
    pub async fn copy_to_youtube(
        &self,
        stream_url: &str,
        stream_title: Option<&str>,
        options: &CopyOptions,
    ) -> Result<UploadSuccess, RelayError> {
        let title = resolve_title(stream_title);
        let request = options.apply(VideoRequest::new(&title));
        let mut lifecycle = Lifecycle::new(Destination::YouTube);

        let result = self
            .relay_video(&mut lifecycle, stream_url, &request, options)
            .await;
        lifecycle.settle(&result);

        let video = result?;
        let video_id = video.get("id").and_then(Value::as_str).map(String::from);
        tracing::info!(
            "YouTube upload of '{}' succeeded (video id: {})",
            title,
            video_id.as_deref().unwrap_or("unknown")
        );
        Ok(UploadSuccess::ok(video_id))
    }

    /// Uploads the media at `stream_url` to Google Drive as a new file.
    ///
    /// When `stream_title` is `None` or empty a timestamped name is generated.
    ///
    /// # Errors
    ///
    /// - [`RelayError::Fetch`] if the source cannot be opened; the upload
    ///   endpoint is not called
    /// - [`RelayError::Upload`] if Drive rejects the upload; its message
    ///   contains Drive's own error text
    pub async fn copy_to_gdrive(
        &self,
        stream_url: &str,
        stream_title: Option<&str>,
        options: &CopyOptions,
    ) -> Result<DriveFile, RelayError> {
        let name = resolve_title(stream_title);
        let mut lifecycle = Lifecycle::new(Destination::Drive);

        let result = self
            .relay_file(&mut lifecycle, stream_url, &name, options)
            .await;
        lifecycle.settle(&result);

        let file = result?;
        tracing::info!("Drive upload of '{}' succeeded (file id: {})", name, file.id);
        Ok(file)
    }

    async fn relay_video(
        &self,
        lifecycle: &mut Lifecycle,
        stream_url: &str,
        request: &VideoRequest,
        options: &CopyOptions,
    ) -> Result<Value, RelayError> {
        lifecycle.advance(UploadState::Fetching);
        let media = self.fetcher.open(stream_url).await?;

        lifecycle.advance(UploadState::Responding);
        let credentials = Credentials::from_access_token(&options.access_token);

        lifecycle.advance(UploadState::Uploading);
        let video = VideoUploader::new(&self.uploads)
            .insert(request, &credentials, media)
            .await?;
        Ok(video)
    }

    async fn relay_file(
        &self,
        lifecycle: &mut Lifecycle,
        stream_url: &str,
        name: &str,
        options: &CopyOptions,
    ) -> Result<DriveFile, RelayError> {
        lifecycle.advance(UploadState::Fetching);
        let media = self.fetcher.open(stream_url).await?;

        lifecycle.advance(UploadState::Responding);
        let credentials = Credentials::from_access_token(&options.access_token);

        lifecycle.advance(UploadState::Uploading);
        let file = FileUploader::new(&self.uploads)
            .create(name, &credentials, media)
            .await?;
        Ok(file)
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new(RelayConfig::default())
    }
}

/// Uploads the media at `stream_url` to YouTube using the default endpoints.
///
/// See [`Relay::copy_to_youtube`].
///
/// # Errors
///
/// Returns [`RelayError`] if fetching or uploading fails.
pub async fn copy_to_youtube(
    stream_url: &str,
    stream_title: Option<&str>,
    options: &CopyOptions,
) -> Result<UploadSuccess, RelayError> {
    Relay::default()
        .copy_to_youtube(stream_url, stream_title, options)
        .await
}

/// Uploads the media at `stream_url` to Google Drive using the default endpoints.
///
/// See [`Relay::copy_to_gdrive`].
///
/// # Errors
///
/// Returns [`RelayError`] if fetching or uploading fails.
pub async fn copy_to_gdrive(
    stream_url: &str,
    stream_title: Option<&str>,
    options: &CopyOptions,
) -> Result<DriveFile, RelayError> {
    Relay::default()
        .copy_to_gdrive(stream_url, stream_title, options)
        .await
}

/// Returns the caller's title, or a timestamped placeholder when it is unset.
fn resolve_title(stream_title: Option<&str>) -> String {
    match stream_title {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => format!(
            "Some random title {}",
            Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_title_keeps_caller_title() {
        assert_eq!(resolve_title(Some("My clip")), "My clip");
    }

    #[test]
    fn test_resolve_title_generates_placeholder() {
        for title in [None, Some("")] {
            let resolved = resolve_title(title);
            assert!(resolved.starts_with("Some random title "));
            assert!(resolved.ends_with('Z'));
        }
    }

    #[test]
    fn test_copy_options_apply_overrides() {
        let options = CopyOptions::new("token")
            .with_description("desc")
            .with_tags("a,b")
            .with_privacy_status("public")
            .with_category_id("10")
            .with_default_language("fr");
        let request = options.apply(VideoRequest::new("Title"));

        assert_eq!(
            Value::Object(request.resource()),
            json!({
                "snippet": {
                    "categoryId": "10",
                    "defaultLanguage": "fr",
                    "description": "desc",
                    "tags": ["a", "b"],
                    "title": "Title"
                },
                "status": { "privacyStatus": "public" }
            })
        );
    }

    #[test]
    fn test_copy_options_without_overrides_keep_defaults() {
        let request = CopyOptions::new("token").apply(VideoRequest::new("Title"));
        assert_eq!(request, VideoRequest::new("Title"));
    }

    #[test]
    fn test_copy_options_debug_masks_token() {
        let options = CopyOptions::new("secret-token");
        assert!(!format!("{options:?}").contains("secret-token"));
    }
}
