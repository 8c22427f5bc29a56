use serde_json::Value;

use crate::{value::Object, JsonValue};

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Bool(b),
            Value::Number(num) => JsonValue::Number(number_to_f64(&num)),
            Value::String(s) => JsonValue::String(s.into()),
            Value::Array(old) => old
                .into_iter()
                .map(JsonValue::from)
                .collect::<Vec<_>>()
                .into(),
            Value::Object(old) => {
                let mut new = Object::with_capacity(old.len());
                for (k, v) in old {
                    new.insert(k.into_boxed_str(), JsonValue::from(v));
                }
                new.into()
            }
        }
    }
}

/// Out-of-range numbers become infinite, the same as out-of-range numeric strings.
fn number_to_f64(num: &serde_json::Number) -> f64 {
    // `as_f64` only fails under `arbitrary_precision`
    num.as_f64()
        .or_else(|| num.to_string().parse().ok())
        .unwrap_or_default()
}

impl PartialEq<Value> for JsonValue {
    fn eq(&self, other: &Value) -> bool {
        eq(other, self)
    }
}

impl PartialEq<JsonValue> for Value {
    fn eq(&self, other: &JsonValue) -> bool {
        eq(self, other)
    }
}

fn eq(lhs: &Value, rhs: &JsonValue) -> bool {
    match (lhs, rhs) {
        (Value::Null, JsonValue::Null) => true,
        (Value::Bool(l), JsonValue::Bool(r)) => l == r,
        (Value::Number(l), JsonValue::Number(r)) => number_to_f64(l) == *r,
        (Value::String(l), JsonValue::String(r)) => l.as_str() == &**r,
        (Value::Array(l), JsonValue::Array(r)) => {
            l.len() == r.len() && l.iter().zip(r.iter()).all(|(l, r)| eq(l, r))
        }
        (Value::Object(l), JsonValue::Object(r)) => {
            if l.len() != r.len() {
                return false;
            }
            for (key, lv) in l {
                match r.get(key.as_str()) {
                    Some(rv) if eq(lv, rv) => continue,
                    _ => return false,
                }
            }
            true
        }
        _ => false,
    }
}
