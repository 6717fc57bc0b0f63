//! Video uploads to the YouTube Data API v3.

use serde_json::Value;

use crate::auth::Credentials;
use crate::clients::errors::{Destination, UploadError};
use crate::clients::http_client::{UploadClient, UploadRequest};
use crate::clients::source::SourceStream;
use crate::resource::{PropertyMap, VideoRequest};

/// Endpoint path for multipart video inserts.
pub const VIDEOS_UPLOAD_PATH: &str = "/upload/youtube/v3/videos";

/// Inserts videos through an [`UploadClient`].
///
/// # Example
///
/// ```rust,ignore
/// use media_relay::clients::{SourceFetcher, UploadClient, VideoUploader};
/// use media_relay::resource::VideoRequest;
///
/// let media = fetcher.open("https://media.example.com/clip.mp4").await?;
/// let video = VideoUploader::new(&client)
///     .insert(&VideoRequest::new("My clip"), &credentials, media)
///     .await?;
/// println!("Video id: {}", video["id"]);
/// ```
#[derive(Debug)]
pub struct VideoUploader<'a> {
    client: &'a UploadClient,
}

impl<'a> VideoUploader<'a> {
    /// Creates an uploader that sends through the given client.
    #[must_use]
    pub const fn new(client: &'a UploadClient) -> Self {
        Self { client }
    }

    /// Uploads the source stream as a new video.
    ///
    /// The request's flat properties are built into the video resource and
    /// its parameters are sanitized before sending. Subscribers are never
    /// notified.
    ///
    /// Returns the created video resource.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError`] if the upload fails.
    pub async fn insert(
        &self,
        request: &VideoRequest,
        credentials: &Credentials,
        media: SourceStream,
    ) -> Result<Value, UploadError> {
        let upload = UploadRequest {
            destination: Destination::YouTube,
            path: VIDEOS_UPLOAD_PATH,
            query: Self::query(request),
            metadata: Value::Object(request.resource()),
            credentials: credentials.clone(),
        };
        let response = self.client.upload(upload, media).await?;
        Ok(response.body)
    }

    fn query(request: &VideoRequest) -> PropertyMap {
        let mut query = PropertyMap::from([("uploadType", "multipart")]);
        for (key, value) in request.sanitized_params() {
            query.insert(key, value);
        }
        query.insert("notifySubscribers", "false");
        query
    }
}
