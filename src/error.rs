//! Error types for relay configuration.
//!
//! This module contains the error type returned when building a
//! [`RelayConfig`](crate::RelayConfig) or one of its validated newtypes.
//! Errors raised while fetching or uploading media live in
//! [`clients`](crate::clients).
//!
//! # Example
//!
//! ```rust
//! use media_relay::{ConfigError, HostUrl};
//!
//! let result = HostUrl::new("www.googleapis.com");
//! assert!(matches!(result, Err(ConfigError::InvalidHostUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur during relay configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Host URL is invalid.
    #[error("Invalid host URL '{url}'. Please provide a valid URL with scheme (e.g., 'https://www.googleapis.com').")]
    InvalidHostUrl {
        /// The invalid URL that was provided.
        url: String,
    },
}
