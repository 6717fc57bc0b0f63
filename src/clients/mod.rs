//! HTTP plumbing between the media origin and the upload endpoints.
//!
//! # Overview
//!
//! - [`SourceFetcher`]: opens the source URL and hands back a [`SourceStream`]
//!   once response headers arrive
//! - [`UploadClient`]: sends one streaming `multipart/related` upload
//! - [`VideoUploader`]: YouTube video inserts with a built resource
//! - [`FileUploader`]: Google Drive file creation
//! - [`RelatedBody`]: multipart framing around the live media stream
//! - [`RelayError`], [`FetchError`], [`UploadError`]: failure taxonomy
//!
//! # Example
//!
//! ```rust,ignore
//! use media_relay::clients::{FileUploader, SourceFetcher, UploadClient};
//! use media_relay::{AccessToken, Credentials, RelayConfig};
//!
//! let client = UploadClient::new(&RelayConfig::default());
//! let fetcher = SourceFetcher::new(client.http().clone());
//!
//! let media = fetcher.open("https://media.example.com/clip.mp4").await?;
//! let credentials = Credentials::from_access_token(&AccessToken::new("ya29..."));
//! let file = FileUploader::new(&client).create("clip.mp4", &credentials, media).await?;
//! ```
//!
//! # Retry Behavior
//!
//! None. The source body can only be read once, so a failed upload is
//! reported to the caller instead of being retried.

mod drive;
mod errors;
mod http_client;
mod multipart;
mod source;
mod youtube;

pub use drive::{DriveFile, FileUploader, FILES_UPLOAD_PATH, FILE_FIELDS};
pub use errors::{Destination, FetchError, RelayError, UploadError};
pub use http_client::{UploadClient, UploadRequest, UploadResponse, SDK_VERSION};
pub use multipart::RelatedBody;
pub use source::{SourceFetcher, SourceStream, DEFAULT_MEDIA_TYPE};
pub use youtube::{VideoUploader, VIDEOS_UPLOAD_PATH};
