//! Result markers returned to relay callers.

use serde::{Deserialize, Serialize};

use crate::clients::RelayError;

/// Success marker returned by a video relay.
///
/// # Example
///
/// ```rust
/// use media_relay::UploadSuccess;
///
/// let success = UploadSuccess::ok(None);
/// assert_eq!(serde_json::to_string(&success).unwrap(), r#"{"statusCode":"OK"}"#);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadSuccess {
    /// Always `"OK"`.
    pub status_code: String,
    /// Id of the created video, when the destination returned one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_id: Option<String>,
}

impl UploadSuccess {
    /// Status code carried by every success marker.
    pub const OK: &'static str = "OK";

    /// Creates a success marker.
    #[must_use]
    pub fn ok(video_id: Option<String>) -> Self {
        Self {
            status_code: Self::OK.to_string(),
            video_id,
        }
    }
}

/// Failure descriptor for reporting a relay error.
///
/// `status_code` is the origin or destination status, `0` if no response was
/// received; `error` is the error's display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadFailure {
    /// The most relevant HTTP status code.
    pub status_code: u16,
    /// Description of the failure.
    pub error: String,
}

impl From<&RelayError> for UploadFailure {
    fn from(error: &RelayError) -> Self {
        Self {
            status_code: error.status_code(),
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::{Destination, UploadError};

    #[test]
    fn test_success_serializes_video_id_when_present() {
        let success = UploadSuccess::ok(Some("dQw4w9WgXcQ".to_string()));
        let json = serde_json::to_value(&success).unwrap();
        assert_eq!(json["statusCode"], "OK");
        assert_eq!(json["videoId"], "dQw4w9WgXcQ");
    }

    #[test]
    fn test_failure_from_relay_error() {
        let error = RelayError::from(UploadError {
            destination: Destination::YouTube,
            code: 403,
            message: "quotaExceeded".to_string(),
            error_reference: None,
        });
        let failure = UploadFailure::from(&error);

        assert_eq!(failure.status_code, 403);
        assert!(failure.error.contains("quotaExceeded"));

        let json = serde_json::to_value(&failure).unwrap();
        assert_eq!(json["statusCode"], 403);
    }
}
