//! Insertion-ordered string maps used for flat properties and request parameters.

use serde::{Serialize, Serializer};
use serde_json::Value;

/// An insertion-ordered map of string keys to string values.
///
/// Used both as the flat property map fed to
/// [`build_resource`](super::build_resource) and as the request parameter map
/// passed through [`sanitize_parameters`](super::sanitize_parameters).
///
/// Inserting an existing key replaces its value in place; a new key is
/// appended at the end.
///
/// # Example
///
/// ```rust
/// use media_relay::resource::PropertyMap;
///
/// let mut props = PropertyMap::new();
/// props.insert("snippet.title", "Foo");
/// props.insert("status.privacyStatus", "private");
/// props.insert("snippet.title", "Bar");
///
/// assert_eq!(props.get("snippet.title"), Some("Bar"));
/// assert_eq!(props.keys().collect::<Vec<_>>(), ["snippet.title", "status.privacyStatus"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropertyMap {
    entries: Vec<(String, String)>,
}

impl PropertyMap {
    /// Creates an empty map.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts a value, replacing any existing value for the key in place.
    ///
    /// Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value for the key, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Removes a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Keeps only the entries for which the predicate returns `true`.
    pub fn retain(&mut self, mut keep: impl FnMut(&str, &str) -> bool) {
        self.entries.retain(|(k, v)| keep(k, v));
    }

    /// Returns `true` if the map contains the key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for PropertyMap
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl IntoIterator for PropertyMap {
    type Item = (String, String);
    type IntoIter = std::vec::IntoIter<(String, String)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for PropertyMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_map(self.iter())
    }
}

/// A normalized flat property value.
///
/// Keys carrying the `[]` list marker are split on `,` into [`List`](Self::List);
/// everything else stays a [`Scalar`](Self::Scalar).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PropertyValue {
    /// A single string value.
    Scalar(String),
    /// A sequence produced by splitting a comma-joined string.
    List(Vec<String>),
}

impl PropertyValue {
    /// Splits a comma-joined string into a list value.
    #[must_use]
    pub fn split_list(joined: &str) -> Self {
        Self::List(joined.split(',').map(str::to_string).collect())
    }

    /// Returns `true` if the value should be written into a resource.
    ///
    /// Empty scalars are unset; lists are always set since they only exist
    /// when their source string was non-empty.
    #[must_use]
    pub fn is_set(&self) -> bool {
        match self {
            Self::Scalar(value) => !value.is_empty(),
            Self::List(_) => true,
        }
    }
}

impl From<PropertyValue> for Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Scalar(value) => Self::String(value),
            PropertyValue::List(items) => Self::Array(items.into_iter().map(Self::String).collect()),
        }
    }
}
