//! Configuration types for the media relay.
//!
//! # Overview
//!
//! - [`RelayConfig`]: endpoint and client settings shared by every upload
//! - [`RelayConfigBuilder`]: a builder for constructing [`RelayConfig`] instances
//! - [`AccessToken`]: an opaque, debug-masked bearer token
//! - [`HostUrl`]: a validated base URL for the upload endpoints
//!
//! # Example
//!
//! ```rust
//! use media_relay::{HostUrl, RelayConfig};
//! use std::time::Duration;
//!
//! let config = RelayConfig::builder()
//!     .upload_host(HostUrl::new("https://upload-proxy.example.com").unwrap())
//!     .user_agent_prefix("MyApp/1.0")
//!     .timeout(Duration::from_secs(600))
//!     .build();
//!
//! assert_eq!(config.upload_host().as_ref(), "https://upload-proxy.example.com");
//! ```

mod newtypes;

pub use newtypes::{AccessToken, HostUrl};

use std::time::Duration;

/// Configuration for a [`Relay`](crate::Relay).
///
/// `RelayConfig` is `Clone`, `Send`, and `Sync`. There is no global
/// configuration; each relay owns its own copy.
#[derive(Clone, Debug)]
pub struct RelayConfig {
    upload_host: HostUrl,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl RelayConfig {
    /// Creates a new builder for constructing a `RelayConfig`.
    #[must_use]
    pub fn builder() -> RelayConfigBuilder {
        RelayConfigBuilder::new()
    }

    /// Returns the base URL the upload endpoints are resolved against.
    #[must_use]
    pub const fn upload_host(&self) -> &HostUrl {
        &self.upload_host
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns the overall request timeout, if configured.
    ///
    /// The timeout covers the whole request including the streamed body, so
    /// it must be generous enough for the largest expected media file.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for RelayConfig {
    fn default() -> Self {
        RelayConfigBuilder::new().build()
    }
}

// Verify RelayConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RelayConfig>();
};

/// Builder for constructing [`RelayConfig`] instances.
///
/// # Defaults
///
/// - `upload_host`: `https://www.googleapis.com`
/// - `user_agent_prefix`: `None`
/// - `timeout`: `None` (no deadline beyond the caller's own)
#[derive(Debug, Default)]
pub struct RelayConfigBuilder {
    upload_host: Option<HostUrl>,
    user_agent_prefix: Option<String>,
    timeout: Option<Duration>,
}

impl RelayConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL for the upload endpoints.
    #[must_use]
    pub fn upload_host(mut self, host: HostUrl) -> Self {
        self.upload_host = Some(host);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Sets an overall timeout applied to both the source fetch and the upload.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the [`RelayConfig`].
    #[must_use]
    pub fn build(self) -> RelayConfig {
        RelayConfig {
            upload_host: self.upload_host.unwrap_or_else(HostUrl::google_apis),
            user_agent_prefix: self.user_agent_prefix,
            timeout: self.timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = RelayConfig::builder().build();

        assert_eq!(config.upload_host().as_ref(), "https://www.googleapis.com");
        assert!(config.user_agent_prefix().is_none());
        assert!(config.timeout().is_none());
    }

    #[test]
    fn test_default_matches_empty_builder() {
        let config = RelayConfig::default();
        assert_eq!(config.upload_host(), &HostUrl::google_apis());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let host = HostUrl::new("http://localhost:9000").unwrap();

        let config = RelayConfig::builder()
            .upload_host(host.clone())
            .user_agent_prefix("MyApp/1.0")
            .timeout(Duration::from_secs(30))
            .build();

        assert_eq!(config.upload_host(), &host);
        assert_eq!(config.user_agent_prefix(), Some("MyApp/1.0"));
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn test_config_is_clone_and_debug() {
        let config = RelayConfig::builder().user_agent_prefix("x").build();

        let cloned = config.clone();
        assert_eq!(cloned.user_agent_prefix(), config.user_agent_prefix());

        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("RelayConfig"));
    }
}
