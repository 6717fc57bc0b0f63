//! Error types for fetching and uploading media.
//!
//! # Error Handling
//!
//! - [`FetchError`]: the source stream could not be opened
//! - [`UploadError`]: the destination rejected the upload or could not be reached
//! - [`RelayError`]: unified error returned by the relay entry points
//!
//! No operation is retried. Every failure is returned to the caller as-is.
//!
//! # Example
//!
//! ```rust,ignore
//! use media_relay::{copy_to_gdrive, CopyOptions, RelayError};
//!
//! match copy_to_gdrive(url, Some("clip.mp4"), &options).await {
//!     Ok(file) => println!("Created {}", file.id),
//!     Err(RelayError::Fetch(e)) => eprintln!("Source unavailable: {e}"),
//!     Err(RelayError::Upload(e)) => eprintln!("Drive said {}: {}", e.code, e.message),
//! }
//! ```

use std::fmt;

use thiserror::Error;

/// The upload destination an error or request belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Destination {
    /// YouTube Data API v3 video insert.
    YouTube,
    /// Google Drive v3 file create.
    Drive,
}

impl Destination {
    /// Returns the prefix used when reporting upload failures.
    #[must_use]
    pub const fn error_prefix(self) -> &'static str {
        match self {
            Self::YouTube => "The API returned an error:",
            Self::Drive => "Error while uploading the media to google drive.",
        }
    }

    /// Returns a short lowercase name for logging.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::YouTube => "youtube",
            Self::Drive => "drive",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when the source stream cannot be opened.
///
/// Raised before any byte is sent to the destination.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (DNS, connect, TLS, invalid URL).
    #[error("Request to {url} failed: {source}")]
    Network {
        /// The source URL.
        url: String,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The origin answered with a non-2xx status.
    #[error("Request to {url} returned status {code}")]
    Status {
        /// The source URL.
        url: String,
        /// The HTTP status code of the origin response.
        code: u16,
    },
}

impl FetchError {
    /// Returns the origin status code, or `0` when no response was received.
    #[must_use]
    pub const fn code(&self) -> u16 {
        match self {
            Self::Network { .. } => 0,
            Self::Status { code, .. } => *code,
        }
    }
}

/// Error returned when a destination upload fails.
///
/// `code` is the destination's HTTP status, or `0` when the request failed
/// in transport (including the source stream failing mid-upload).
/// `message` carries the destination's own error text.
///
/// # Example
///
/// ```rust
/// use media_relay::clients::{Destination, UploadError};
///
/// let error = UploadError {
///     destination: Destination::Drive,
///     code: 403,
///     message: "Insufficient Permission".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(
///     error.to_string(),
///     "Error while uploading the media to google drive. Insufficient Permission"
/// );
/// ```
#[derive(Debug, Error)]
#[error("{} {message}", .destination.error_prefix())]
pub struct UploadError {
    /// The destination that produced the error.
    pub destination: Destination,
    /// The HTTP status code of the destination response, `0` if none.
    pub code: u16,
    /// The destination's error message.
    pub message: String,
    /// Upload id reported by the destination (from `X-GUploader-UploadID`).
    pub error_reference: Option<String>,
}

/// Unified error type for relay operations.
#[derive(Debug, Error)]
pub enum RelayError {
    /// The source stream could not be opened.
    #[error("Error while fetching the media link. {0}")]
    Fetch(#[from] FetchError),

    /// The destination upload failed.
    #[error(transparent)]
    Upload(#[from] UploadError),
}

impl RelayError {
    /// Returns the status code most relevant to this failure.
    ///
    /// This is the origin status for fetch failures and the destination
    /// status for upload failures; `0` when no response was received.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Fetch(e) => e.code(),
            Self::Upload(e) => e.code,
        }
    }
}

// Verify errors are Send + Sync std errors at compile time
const _: fn() = || {
    const fn assert_error<T: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<FetchError>();
    assert_error::<UploadError>();
    assert_error::<RelayError>();
};
