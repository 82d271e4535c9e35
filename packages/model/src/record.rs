use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Persisted unit of page content: a type tag plus an arbitrary content payload.
///
/// The `kind` tag is resolved against the renderer registry at render time.
/// `content` is an open map - renderers pull the keys they understand and
/// fall back to defaults for anything missing or mistyped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub id: String,

    /// Type tag into the renderer registry (`"type"` on the wire).
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(default)]
    pub content: Map<String, Value>,
}

impl ComponentRecord {
    pub fn new(id: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            content: Map::new(),
        }
    }

    /// Record with a freshly minted id, as created by a canvas drop or a
    /// template instantiation.
    pub fn create(kind: impl Into<String>) -> Self {
        let kind = kind.into();
        let id = pageforge_common::component_id(&kind);
        Self::new(id, kind)
    }

    pub fn with_content(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.content.insert(key.into(), value.into());
        self
    }

    /// String content field, or `None` if absent or not a string.
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(Value::as_str)
    }

    /// Unsigned integer content field, or `None` if absent or not a number.
    pub fn u64_field(&self, key: &str) -> Option<u64> {
        self.content.get(key).and_then(Value::as_u64)
    }

    pub fn bool_field(&self, key: &str) -> Option<bool> {
        self.content.get(key).and_then(Value::as_bool)
    }
}
