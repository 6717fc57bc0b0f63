//! Flat-to-nested resource building and parameter sanitizing.

use serde_json::{Map, Value};

use super::property_map::{PropertyMap, PropertyValue};

/// Suffix marking a flat key whose value is a comma-joined list.
pub const LIST_SUFFIX: &str = "[]";

/// Parameter value produced upstream by stringifying an unset value.
const UNDEFINED: &str = "undefined";

/// Builds a nested resource from a flat, dot-annotated property map.
///
/// Keys are split on `.` into descent steps. A key ending in `[]` has its
/// value split on `,` into an array stored under the key without the suffix.
/// Properties with empty values are left out entirely, at every depth.
///
/// Keys are applied in map order. A later key that must descend through a
/// segment holding a leaf replaces that leaf with an object; a later key
/// that assigns a leaf where an object exists overwrites the object.
///
/// # Example
///
/// ```rust
/// use media_relay::resource::{build_resource, PropertyMap};
/// use serde_json::json;
///
/// let props = PropertyMap::from([
///     ("snippet.title", "Foo"),
///     ("snippet.tags[]", "a,b,c"),
///     ("status.license", ""),
/// ]);
///
/// let resource = build_resource(&props);
/// assert_eq!(
///     serde_json::Value::Object(resource),
///     json!({ "snippet": { "title": "Foo", "tags": ["a", "b", "c"] } })
/// );
/// ```
#[must_use]
pub fn build_resource(props: &PropertyMap) -> Map<String, Value> {
    let mut resource = Map::new();
    for (path, value) in normalize(props) {
        if !value.is_set() {
            continue;
        }
        let segments: Vec<&str> = path.split('.').collect();
        insert_path(&mut resource, &segments, value.into());
    }
    resource
}

/// Removes parameters whose value is empty or the literal `"undefined"`.
///
/// All other entries keep their value and relative order.
///
/// # Example
///
/// ```rust
/// use media_relay::resource::{sanitize_parameters, PropertyMap};
///
/// let params = PropertyMap::from([
///     ("part", "snippet,status"),
///     ("foo", ""),
///     ("bar", "undefined"),
///     ("baz", "x"),
/// ]);
///
/// let sanitized = sanitize_parameters(params);
/// assert_eq!(sanitized, PropertyMap::from([("part", "snippet,status"), ("baz", "x")]));
/// ```
#[must_use]
pub fn sanitize_parameters(mut params: PropertyMap) -> PropertyMap {
    params.retain(|_, value| !value.is_empty() && value != UNDEFINED);
    params
}

/// Resolves `[]` list keys into list values under their bare names.
///
/// The bracketed key is always dropped; the bare key is only written when the
/// list string was non-empty.
fn normalize(props: &PropertyMap) -> Vec<(String, PropertyValue)> {
    let mut normalized: Vec<(String, PropertyValue)> = props
        .iter()
        .map(|(key, value)| (key.to_string(), PropertyValue::Scalar(value.to_string())))
        .collect();

    for (key, value) in props.iter() {
        let Some(name) = key.strip_suffix(LIST_SUFFIX) else {
            continue;
        };
        if !value.is_empty() {
            let list = PropertyValue::split_list(value);
            match normalized.iter_mut().find(|(k, _)| k == name) {
                Some((_, existing)) => *existing = list,
                None => normalized.push((name.to_string(), list)),
            }
        }
        normalized.retain(|(k, _)| k != key);
    }

    normalized
}

fn insert_path(node: &mut Map<String, Value>, segments: &[&str], value: Value) {
    match segments {
        [] => {}
        [leaf] => {
            node.insert((*leaf).to_string(), value);
        }
        [head, rest @ ..] => {
            let slot = node
                .entry((*head).to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            match slot {
                Value::Object(child) => insert_path(child, rest, value),
                other => {
                    let mut child = Map::new();
                    insert_path(&mut child, rest, value);
                    *other = Value::Object(child);
                }
            }
        }
    }
}
