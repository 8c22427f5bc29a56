use std::{io::Read, str::FromStr};

use crate::{Error, JsonValue};

/// A read-only cursor into a decoded JSON document.
///
/// `PathValue` lets you assume a document shape without checking it at every step. When an
/// assumption is wrong, navigation yields a wrapper around `null` and coercion yields a zero
/// value, so validation can happen later, in one place.
///
/// A default `PathValue` wraps `null` and can be used like any other.
///
/// All navigation is by value: [`PathValue::field`] and [`PathValue::index`] return new
/// wrappers and leave `self` untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathValue {
    value: JsonValue,
}

impl PathValue {
    #[must_use]
    pub fn new(value: JsonValue) -> Self {
        Self { value }
    }

    /// Decode `bytes` as JSON into a new `PathValue`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `bytes` is not valid JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let mut path = Self::default();
        path.parse(bytes)?;
        Ok(path)
    }

    /// Buffer `reader` in memory and decode its contents as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails and [`Error::Decode`] if the contents are not
    /// valid JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, Error> {
        let mut path = Self::default();
        path.parse_reader(reader)?;
        Ok(path)
    }

    /// Decode `bytes` as JSON and replace the wrapped value with the result.
    ///
    /// The previous value is discarded even if decoding fails, in which case `self` wraps
    /// `null` afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `bytes` is not valid JSON.
    pub fn parse(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.value = JsonValue::Null;
        match serde_json::from_slice::<serde_json::Value>(bytes) {
            Ok(decoded) => {
                tracing::trace!(len = bytes.len(), "Decoded JSON input");
                self.value = decoded.into();
                Ok(())
            }
            Err(error) => {
                tracing::debug!(len = bytes.len(), %error, "Failed to decode JSON input");
                Err(error.into())
            }
        }
    }

    /// Same as [`PathValue::parse`] for text input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if `input` is not valid JSON.
    pub fn parse_str(&mut self, input: &str) -> Result<(), Error> {
        self.parse(input.as_bytes())
    }

    /// Read `reader` to the end, then [`PathValue::parse`] the buffered contents.
    ///
    /// Partial input is never decoded: a read failure leaves `self` wrapping `null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if reading fails and [`Error::Decode`] if the contents are not
    /// valid JSON.
    pub fn parse_reader<R: Read>(&mut self, mut reader: R) -> Result<(), Error> {
        self.value = JsonValue::Null;
        let mut buffer = Vec::new();
        if let Err(error) = reader.read_to_end(&mut buffer) {
            tracing::debug!(%error, "Failed to read JSON input");
            return Err(error.into());
        }
        self.parse(&buffer)
    }

    /// The wrapped value.
    #[must_use]
    pub fn value(&self) -> &JsonValue {
        &self.value
    }

    #[must_use]
    pub fn into_value(self) -> JsonValue {
        self.value
    }

    /// Number of elements if the wrapped value is an array, `0` otherwise.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.as_array().map_or(0, <[JsonValue]>::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `i`-th array element.
    ///
    /// Wraps `null` if the wrapped value is not an array or `i` is out of bounds. Negative
    /// indices are always out of bounds.
    #[must_use]
    pub fn index<I: TryInto<usize>>(&self, i: I) -> PathValue {
        let item = i
            .try_into()
            .ok()
            .and_then(|i| self.value.as_array()?.get(i));
        PathValue::new(item.cloned().unwrap_or_default())
    }

    /// The object member called `name`.
    ///
    /// Wraps `null` if the wrapped value is not an object or has no such member.
    #[must_use]
    pub fn field(&self, name: &str) -> PathValue {
        let member = self.value.as_object().and_then(|object| object.get(name));
        PathValue::new(member.cloned().unwrap_or_default())
    }

    /// Member names of the wrapped object in no particular order. Empty for non-objects.
    #[must_use]
    pub fn fields(&self) -> Vec<String> {
        self.value
            .as_object()
            .map(|object| object.keys().map(|key| String::from(&**key)).collect())
            .unwrap_or_default()
    }

    /// Array elements in order. Yields nothing for non-arrays.
    pub fn elements(&self) -> impl Iterator<Item = PathValue> + '_ {
        self.value
            .as_array()
            .unwrap_or_default()
            .iter()
            .cloned()
            .map(PathValue::new)
    }

    /// Whether the wrapped value is `null`.
    ///
    /// An absent object member and a member explicitly set to `null` are indistinguishable.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.value.is_null()
    }

    /// Alias of [`PathValue::is_null`]. `null` and absence are the same state.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        self.is_null()
    }
}

impl FromStr for PathValue {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s.as_bytes())
    }
}

impl From<JsonValue> for PathValue {
    fn from(value: JsonValue) -> Self {
        PathValue::new(value)
    }
}

impl From<serde_json::Value> for PathValue {
    fn from(value: serde_json::Value) -> Self {
        PathValue::new(value.into())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use serde_json::json;
    use test_case::test_case;

    fn path(value: serde_json::Value) -> PathValue {
        PathValue::from(value)
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }
    }

    #[test]
    fn parse_replaces_value() {
        let mut path = PathValue::from(json!([1]));
        path.parse_str(r#"{"a": 1}"#).expect("Valid JSON");
        assert_eq!(path.len(), 0);
        assert_eq!(path.fields(), vec!["a".to_string()]);
    }

    #[test]
    fn failed_parse_resets_to_null() {
        let mut path = PathValue::from(json!({"a": 1}));
        let error = path.parse(b"{bad json").expect_err("Invalid JSON");
        assert!(error.is_decode());
        assert!(path.is_null());
        assert_eq!(path.as_string(), "");
    }

    #[test]
    fn parse_reader_buffers_input() {
        let path = PathValue::from_reader(io::Cursor::new(b"[1, 2, 3]")).expect("Valid JSON");
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn reader_with_invalid_json() {
        let mut path = PathValue::from(json!([1]));
        let error = path
            .parse_reader(io::Cursor::new(b"{bad"))
            .expect_err("Invalid JSON");
        assert!(error.is_decode());
        assert!(path.is_null());
        assert!(PathValue::from_reader(io::Cursor::new(b"{bad"))
            .expect_err("Invalid JSON")
            .is_decode());
    }

    #[test]
    fn read_failure_is_returned_as_is() {
        let mut path = PathValue::from(json!("previous"));
        let error = path.parse_reader(FailingReader).expect_err("Read fails");
        assert!(error.is_io());
        assert!(path.is_null());
    }

    #[test]
    fn from_str() {
        let path: PathValue = "[true]".parse().expect("Valid JSON");
        assert_eq!(path.index(0).value(), &JsonValue::Bool(true));
        assert!("[".parse::<PathValue>().is_err());
    }

    #[test_case(json!([1, 2, 3]), 3; "array")]
    #[test_case(json!([]), 0; "empty array")]
    #[test_case(json!({"a": 1}), 0; "object")]
    #[test_case(json!("abc"), 0; "string")]
    #[test_case(json!(null), 0; "null")]
    fn len(value: serde_json::Value, expected: usize) {
        let path = path(value);
        assert_eq!(path.len(), expected);
        assert_eq!(path.is_empty(), expected == 0);
    }

    #[test_case(0, &json!("a"); "first")]
    #[test_case(2, &json!(null); "explicit null")]
    #[test_case(3, &json!(null); "past the end")]
    #[test_case(-1, &json!(null); "negative")]
    #[test_case(i64::MIN, &json!(null); "very negative")]
    fn index(i: i64, expected: &serde_json::Value) {
        let path = path(json!(["a", "b", null]));
        assert_eq!(path.index(i).value(), expected);
    }

    #[test_case(json!({"0": 1}); "object")]
    #[test_case(json!("abc"); "string")]
    #[test_case(json!(null); "null")]
    fn index_non_array(value: serde_json::Value) {
        assert!(path(value).index(0_usize).is_null());
    }

    #[test]
    fn field() {
        let path = path(json!({"a": {"b": [10]}, "n": null}));
        assert_eq!(path.field("a").field("b").index(0_usize).as_i64(), 10);
        assert!(path.field("missing").is_null());
        assert_eq!(path.field("missing"), path.field("n"));
        assert!(path.field("a").field("b").field("c").is_undefined());
    }

    #[test_case(json!([{"a": 1}]); "array")]
    #[test_case(json!(1); "number")]
    #[test_case(json!(null); "null")]
    fn field_non_object(value: serde_json::Value) {
        assert!(path(value).field("a").is_null());
    }

    #[test]
    fn fields_non_object() {
        assert!(path(json!([1, 2])).fields().is_empty());
        assert!(PathValue::default().fields().is_empty());
    }

    #[test]
    fn elements_match_index() {
        let path = path(json!([1, "two", [3]]));
        let items: Vec<_> = path.elements().collect();
        let indexed: Vec<_> = (0..path.len()).map(|i| path.index(i)).collect();
        assert_eq!(items, indexed);
        assert_eq!(PathValue::default().elements().count(), 0);
    }

    #[test]
    fn navigation_leaves_parent_untouched() {
        let parent = path(json!({"a": [1, 2]}));
        let before = parent.clone();
        let first = parent.field("a");
        let second = parent.field("a");
        assert_eq!(first, second);
        assert_eq!(parent, before);
    }
}
