//! Flat property maps and the nested resources built from them.
//!
//! Destination APIs expect nested JSON resources such as
//! `{"snippet": {"title": "..."}, "status": {"privacyStatus": "private"}}`.
//! Callers describe them instead as a flat [`PropertyMap`] of dotted paths:
//!
//! | Flat key | Value | Resource |
//! |---|---|---|
//! | `snippet.title` | `Foo` | `{"snippet": {"title": "Foo"}}` |
//! | `snippet.tags[]` | `a,b` | `{"snippet": {"tags": ["a", "b"]}}` |
//! | `status.license` | (empty) | omitted |
//!
//! [`build_resource`] performs the translation and [`sanitize_parameters`]
//! strips unset request parameters. [`VideoRequest`] holds the defaults used
//! for video uploads.

mod builder;
mod property_map;
mod video_request;

pub use builder::{build_resource, sanitize_parameters, LIST_SUFFIX};
pub use property_map::{PropertyMap, PropertyValue};
pub use video_request::{
    VideoRequest, DEFAULT_CATEGORY_ID, DEFAULT_PARTS, DEFAULT_PRIVACY_STATUS,
};
