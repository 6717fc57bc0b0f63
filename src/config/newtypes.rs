//! Newtype wrappers for configuration values.
//!
//! [`HostUrl`] validates its contents on construction. [`AccessToken`] is
//! opaque: the relay never inspects, validates or refreshes it.

use crate::error::ConfigError;
use std::fmt;

/// An OAuth 2.0 bearer token supplied by the caller.
///
/// The token is passed through untouched to the destination API. Its `Debug`
/// implementation masks the value so it cannot leak into logs.
///
/// # Example
///
/// ```rust
/// use media_relay::AccessToken;
///
/// let token = AccessToken::new("ya29.secret");
/// assert_eq!(token.as_ref(), "ya29.secret");
/// assert_eq!(format!("{:?}", token), "AccessToken(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a bearer token.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl AsRef<str> for AccessToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(*****)")
    }
}

impl From<&str> for AccessToken {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for AccessToken {
    fn from(token: String) -> Self {
        Self::new(token)
    }
}

/// A validated base URL for the upload endpoints.
///
/// Trailing slashes are removed so endpoint paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use media_relay::HostUrl;
///
/// let url = HostUrl::new("https://www.googleapis.com/").unwrap();
/// assert_eq!(url.scheme(), "https");
/// assert_eq!(url.host_name(), Some("www.googleapis.com"));
/// assert_eq!(url.as_ref(), "https://www.googleapis.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostUrl {
    url: String,
    scheme_end: usize,
    host_start: usize,
    host_end: usize,
}

impl HostUrl {
    /// Base URL of the public Google upload endpoints.
    pub const GOOGLE_APIS: &'static str = "https://www.googleapis.com";

    /// Returns the Google APIs base URL.
    #[must_use]
    pub fn google_apis() -> Self {
        let url = Self::GOOGLE_APIS.to_string();
        Self {
            host_end: url.len(),
            url,
            scheme_end: 5,
            host_start: 8,
        }
    }

    /// Creates a new validated host URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHostUrl`] if the URL has no scheme or
    /// no host.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let url = url.trim().trim_end_matches('/').to_string();

        let scheme_end = url
            .find("://")
            .ok_or_else(|| ConfigError::InvalidHostUrl { url: url.clone() })?;

        let scheme = &url[..scheme_end];
        if scheme.is_empty() || !scheme.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        let host_start = scheme_end + 3;
        if host_start >= url.len() {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        // Authority stops at the first delimiter
        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidHostUrl { url });
        }

        Ok(Self {
            url,
            scheme_end,
            host_start,
            host_end,
        })
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        let host = &self.url[self.host_start..self.host_end];
        if host.is_empty() {
            None
        } else {
            Some(host)
        }
    }

    /// Joins an absolute endpoint path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}/{}", self.url, path.trim_start_matches('/'))
    }
}

impl AsRef<str> for HostUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_masks_value_in_debug() {
        let token = AccessToken::new("super-secret-token");
        let debug_output = format!("{token:?}");
        assert_eq!(debug_output, "AccessToken(*****)");
        assert!(!debug_output.contains("super-secret-token"));
    }

    #[test]
    fn test_access_token_accepts_any_value() {
        // Tokens are opaque; even an empty one is passed through.
        assert_eq!(AccessToken::new("").as_ref(), "");
        assert_eq!(AccessToken::from("abc").as_ref(), "abc");
    }

    #[test]
    fn test_host_url_validates_format() {
        let url = HostUrl::new("https://www.googleapis.com").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_name(), Some("www.googleapis.com"));

        let url = HostUrl::new("http://127.0.0.1:8080").unwrap();
        assert_eq!(url.scheme(), "http");
        assert_eq!(url.host_name(), Some("127.0.0.1"));

        let url = HostUrl::new("https://proxy.example.com/google").unwrap();
        assert_eq!(url.host_name(), Some("proxy.example.com"));
    }

    #[test]
    fn test_google_apis_matches_parsed_url() {
        assert_eq!(
            HostUrl::google_apis(),
            HostUrl::new(HostUrl::GOOGLE_APIS).unwrap()
        );
    }

    #[test]
    fn test_host_url_rejects_invalid() {
        assert!(HostUrl::new("www.googleapis.com").is_err());
        assert!(HostUrl::new("https://").is_err());
        assert!(HostUrl::new("://example.com").is_err());
        assert!(HostUrl::new("https:///path").is_err());
    }

    #[test]
    fn test_host_url_join_strips_duplicate_slashes() {
        let url = HostUrl::new("http://localhost:3000/").unwrap();
        assert_eq!(
            url.join("/upload/drive/v3/files"),
            "http://localhost:3000/upload/drive/v3/files"
        );
        assert_eq!(
            url.join("upload/drive/v3/files"),
            "http://localhost:3000/upload/drive/v3/files"
        );
    }
}
