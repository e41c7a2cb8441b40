use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Per-download metadata record handed over by the host.
///
/// Hosts keep download metadata as a loosely typed dictionary with
/// arbitrary keys. Typed accessors cover the fields this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRecord(Map<String, Value>);

impl MediaRecord {
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// The uploading channel's name, when present and textual.
    pub fn channel(&self) -> Option<&str> {
        self.0.get("channel").and_then(Value::as_str)
    }

    /// On-disk path of the downloaded file. Only present once the transfer
    /// has happened.
    pub fn filepath(&self) -> Option<&str> {
        self.0.get("filepath").and_then(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for MediaRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl FromIterator<(String, Value)> for MediaRecord {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
