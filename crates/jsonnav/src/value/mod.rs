use std::sync::Arc;

use ahash::AHashMap;

/// Object representation shared between all wrappers that point into it.
pub type Object = AHashMap<Box<str>, JsonValue>;

/// A decoded JSON document.
///
/// Every JSON number is held as `f64`. Containers are reference-counted, so cloning a value
/// (and therefore navigating into it) never copies the underlying tree.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum JsonValue {
    /// JSON `null`. Absent object members are represented the same way.
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    String(Arc<str>),
    Array(Arc<[JsonValue]>),
    Object(Arc<Object>),
}

const _: () = const {
    assert!(std::mem::size_of::<JsonValue>() <= 24);
};

impl JsonValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    #[must_use]
    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items.as_ref()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            JsonValue::Object(object) => Some(object.as_ref()),
            _ => None,
        }
    }
}

impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value.into())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value.into())
    }
}

impl From<Object> for JsonValue {
    fn from(value: Object) -> Self {
        JsonValue::Object(Arc::new(value))
    }
}
