//! Dynamically typed key/value bags attached to nodes.

use serde::{Deserialize, Serialize, de::DeserializeOwned};
use serde_json::{Map, Value};

/// Arbitrary per-node configuration as a JSON object.
///
/// Every node type carries its own shape (a trigger holds its event filter,
/// a delay holds a duration), so values stay dynamically typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Properties(Map<String, Value>);

impl Properties {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self(Map::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Gets a value by key, deserialized into `T`.
    pub fn get<T: DeserializeOwned>(
        &self,
        key: &str,
    ) -> Option<T> {
        self.0.get(key).and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    /// Sets a value by key, replacing any existing entry.
    pub fn set(
        &mut self,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) {
        self.0.insert(key.into(), value.into());
    }

    /// Shallow-merges `other` into this bag. Existing keys are replaced,
    /// nested objects are not merged recursively.
    pub fn merge(
        &mut self,
        other: &Properties,
    ) {
        for (key, value) in other.0.iter() {
            self.0.insert(key.clone(), value.clone());
        }
    }

    /// Returns an iterator over the entries of the bag.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl From<Map<String, Value>> for Properties {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl From<Properties> for Value {
    fn from(props: Properties) -> Self {
        Value::Object(props.0)
    }
}
