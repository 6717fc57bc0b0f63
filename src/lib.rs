//! # Media Relay
//!
//! Streams a remote media file into a YouTube video upload or a Google Drive
//! file upload without buffering the whole file in memory.
//!
//! ## Overview
//!
//! This crate provides:
//! - Flat-to-nested resource building via [`resource::build_resource`]
//! - Request parameter sanitizing via [`resource::sanitize_parameters`]
//! - Streaming source fetches via [`clients::SourceFetcher`]
//! - Pass-through `multipart/related` uploads via [`clients::UploadClient`]
//! - One-call relays via [`copy_to_youtube`] and [`copy_to_gdrive`]
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use media_relay::{copy_to_gdrive, copy_to_youtube, CopyOptions};
//!
//! let options = CopyOptions::new("ya29.a0Af...");
//!
//! // Private YouTube video titled "Launch recording"
//! let success = copy_to_youtube(
//!     "https://media.example.com/launch.mp4",
//!     Some("Launch recording"),
//!     &options,
//! )
//! .await?;
//! assert_eq!(success.status_code, "OK");
//!
//! // Google Drive file, named with a timestamp
//! let file = copy_to_gdrive("https://media.example.com/launch.mp4", None, &options).await?;
//! println!("File Id: {}", file.id);
//! ```
//!
//! ## Resource Building
//!
//! ```rust
//! use media_relay::resource::{build_resource, PropertyMap};
//! use serde_json::json;
//!
//! let props = PropertyMap::from([
//!     ("snippet.title", "Foo"),
//!     ("snippet.tags[]", "a,b,c"),
//!     ("status.license", ""),
//! ]);
//!
//! assert_eq!(
//!     serde_json::Value::Object(build_resource(&props)),
//!     json!({ "snippet": { "title": "Foo", "tags": ["a", "b", "c"] } })
//! );
//! ```
//!
//! ## Custom Endpoints
//!
//! ```rust
//! use media_relay::{HostUrl, Relay, RelayConfig};
//!
//! let relay = Relay::new(
//!     RelayConfig::builder()
//!         .upload_host(HostUrl::new("http://localhost:8080").unwrap())
//!         .user_agent_prefix("MyApp/1.0")
//!         .build(),
//! );
//! assert_eq!(relay.config().upload_host().as_ref(), "http://localhost:8080");
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Opaque tokens**: Access tokens are never validated, refreshed or logged
//! - **One shot**: No retries; every failure is returned to the caller
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod relay;
pub mod resource;

// Re-export public types at crate root for convenience
pub use auth::Credentials;
pub use config::{AccessToken, HostUrl, RelayConfig, RelayConfigBuilder};
pub use error::ConfigError;

// Re-export relay entry points
pub use clients::{DriveFile, FetchError, RelayError, UploadError};
pub use relay::{
    copy_to_gdrive, copy_to_youtube, CopyOptions, Relay, UploadFailure, UploadState,
    UploadSuccess,
};
