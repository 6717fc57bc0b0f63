//! Default request metadata for video uploads.

use serde_json::{Map, Value};

use super::builder::{build_resource, sanitize_parameters};
use super::property_map::PropertyMap;

/// YouTube category id for "People & Blogs".
pub const DEFAULT_CATEGORY_ID: &str = "22";

/// Privacy status applied to relayed videos unless overridden.
pub const DEFAULT_PRIVACY_STATUS: &str = "private";

/// Resource parts written by a video insert.
pub const DEFAULT_PARTS: &str = "snippet,status";

/// Request parameters and flat resource properties for a video insert.
///
/// Every property the destination understands is listed up front; the ones
/// left empty are dropped by [`build_resource`] when the request is sent.
///
/// # Example
///
/// ```rust
/// use media_relay::resource::VideoRequest;
/// use serde_json::json;
///
/// let request = VideoRequest::new("My clip").with_tags("a,b");
/// let resource = serde_json::Value::Object(request.resource());
///
/// assert_eq!(resource["snippet"]["title"], json!("My clip"));
/// assert_eq!(resource["snippet"]["tags"], json!(["a", "b"]));
/// assert_eq!(resource["status"]["privacyStatus"], json!("private"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VideoRequest {
    /// Request parameters sent alongside the upload.
    pub params: PropertyMap,
    /// Flat, dot-annotated resource properties.
    pub properties: PropertyMap,
}

impl VideoRequest {
    /// Creates the default request for a video with the given title.
    #[must_use]
    pub fn new(title: &str) -> Self {
        let params = PropertyMap::from([("part", DEFAULT_PARTS)]);
        let properties = PropertyMap::from([
            ("snippet.categoryId", DEFAULT_CATEGORY_ID),
            ("snippet.defaultLanguage", ""),
            ("snippet.description", ""),
            ("snippet.tags[]", ""),
            ("snippet.title", title),
            ("status.embeddable", ""),
            ("status.license", ""),
            ("status.privacyStatus", DEFAULT_PRIVACY_STATUS),
            ("status.publicStatsViewable", ""),
        ]);
        Self { params, properties }
    }

    /// Sets the video description.
    #[must_use]
    pub fn with_description(self, description: &str) -> Self {
        self.with_property("snippet.description", description)
    }

    /// Sets the tags from a comma-joined list.
    #[must_use]
    pub fn with_tags(self, tags: &str) -> Self {
        self.with_property("snippet.tags[]", tags)
    }

    /// Sets the privacy status (`private`, `unlisted` or `public`).
    #[must_use]
    pub fn with_privacy_status(self, status: &str) -> Self {
        self.with_property("status.privacyStatus", status)
    }

    /// Sets the category id.
    #[must_use]
    pub fn with_category_id(self, category_id: &str) -> Self {
        self.with_property("snippet.categoryId", category_id)
    }

    /// Sets the default language of the title and description.
    #[must_use]
    pub fn with_default_language(self, language: &str) -> Self {
        self.with_property("snippet.defaultLanguage", language)
    }

    /// Sets an arbitrary flat property.
    #[must_use]
    pub fn with_property(mut self, key: &str, value: &str) -> Self {
        self.properties.insert(key, value);
        self
    }

    /// Builds the nested resource from the flat properties.
    #[must_use]
    pub fn resource(&self) -> Map<String, Value> {
        build_resource(&self.properties)
    }

    /// Returns the request parameters with unset entries removed.
    #[must_use]
    pub fn sanitized_params(&self) -> PropertyMap {
        sanitize_parameters(self.params.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_request_resource() {
        let request = VideoRequest::new("Title");
        assert_eq!(
            Value::Object(request.resource()),
            json!({
                "snippet": { "categoryId": "22", "title": "Title" },
                "status": { "privacyStatus": "private" }
            })
        );
    }

    #[test]
    fn test_default_params() {
        let request = VideoRequest::new("Title");
        let params: Vec<_> = request.sanitized_params().into_iter().collect();
        assert_eq!(params, [("part".to_string(), "snippet,status".to_string())]);
    }

    #[test]
    fn test_overrides_flow_through_builder() {
        let request = VideoRequest::new("Title")
            .with_description("desc")
            .with_tags("one,two")
            .with_privacy_status("unlisted")
            .with_category_id("10")
            .with_default_language("en");
        let resource = Value::Object(request.resource());

        assert_eq!(resource["snippet"]["description"], json!("desc"));
        assert_eq!(resource["snippet"]["tags"], json!(["one", "two"]));
        assert_eq!(resource["snippet"]["categoryId"], json!("10"));
        assert_eq!(resource["snippet"]["defaultLanguage"], json!("en"));
        assert_eq!(resource["status"]["privacyStatus"], json!("unlisted"));
        assert!(resource["status"].get("license").is_none());
    }

    #[test]
    fn test_empty_title_is_omitted() {
        let resource = Value::Object(VideoRequest::new("").resource());
        assert!(resource["snippet"].get("title").is_none());
    }
}
