//! Integration tests for resource building and parameter sanitizing.

use media_relay::resource::{build_resource, sanitize_parameters, PropertyMap, VideoRequest};
use serde_json::{json, Value};

/// Collects every key in the tree, at every depth.
fn all_keys(value: &Value, keys: &mut Vec<String>) {
    if let Value::Object(map) = value {
        for (key, child) in map {
            keys.push(key.clone());
            all_keys(child, keys);
        }
    }
}

/// Follows a dotted path through the tree.
fn lookup<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(value, |node, segment| node.get(segment))
}

#[test]
fn test_leaves_equal_original_scalars() {
    let props = PropertyMap::from([
        ("snippet.title", "Title"),
        ("snippet.localized.title", "Titre"),
        ("status.privacyStatus", "unlisted"),
        ("recordingDetails.location.latitude", "48.85"),
        ("kind", "youtube#video"),
    ]);
    let resource = Value::Object(build_resource(&props));

    for (key, value) in props.iter() {
        assert_eq!(lookup(&resource, key), Some(&json!(value)), "leaf {key}");
    }
}

#[test]
fn test_empty_values_absent_at_every_depth() {
    let props = PropertyMap::from([
        ("a.b.c", ""),
        ("a.b.keep", "1"),
        ("a.unset", ""),
        ("x.y.z", ""),
        ("list[]", ""),
    ]);
    let resource = Value::Object(build_resource(&props));

    let mut keys = Vec::new();
    all_keys(&resource, &mut keys);
    assert_eq!(keys, ["a", "b", "keep"]);
}

#[test]
fn test_list_keys_split_and_lose_suffix() {
    let props = PropertyMap::from([
        ("snippet.tags[]", "a,b,c"),
        ("topics[]", "music"),
        ("empty[]", ""),
    ]);
    let resource = Value::Object(build_resource(&props));

    let mut keys = Vec::new();
    all_keys(&resource, &mut keys);
    assert!(keys.iter().all(|key| !key.ends_with("[]")));

    assert_eq!(resource["snippet"]["tags"], json!(["a", "b", "c"]));
    assert_eq!(resource["topics"], json!(["music"]));
    assert!(resource.get("empty").is_none());
}

#[test]
fn test_sanitize_example() {
    let params = PropertyMap::from([
        ("part", "snippet,status"),
        ("foo", ""),
        ("bar", "undefined"),
        ("baz", "x"),
    ]);

    let sanitized = sanitize_parameters(params);

    assert_eq!(sanitized.len(), 2);
    assert_eq!(sanitized.get("part"), Some("snippet,status"));
    assert_eq!(sanitized.get("baz"), Some("x"));
    assert_eq!(sanitized.keys().collect::<Vec<_>>(), ["part", "baz"]);
}

#[test]
fn test_video_request_resource_shape() {
    let request = VideoRequest::new("Launch").with_description("Recorded live");
    let resource = Value::Object(request.resource());

    assert_eq!(
        resource,
        json!({
            "snippet": {
                "categoryId": "22",
                "description": "Recorded live",
                "title": "Launch"
            },
            "status": { "privacyStatus": "private" }
        })
    );
}
