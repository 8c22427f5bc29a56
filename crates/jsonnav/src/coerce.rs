//! Best-effort conversions from the wrapped value to primitives.
//!
//! Every conversion is total. Values of an unexpected shape become zero values.
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
use core::fmt;

use ahash::AHashMap;

use crate::{JsonValue, PathValue};

impl PathValue {
    /// Strings as-is, numbers with exactly six decimal places (`42` is `"42.000000"`), `""`
    /// for anything else.
    ///
    /// Booleans render as `""`, not `"true"` or `"false"`.
    #[must_use]
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// Numbers as-is. Strings are parsed as floats, including `"NaN"` and `"inf"`.
    /// Unparsable strings and all other values are `0.0`.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self.value() {
            JsonValue::Number(n) => *n,
            JsonValue::String(s) => s.parse().unwrap_or(0.0),
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Array(_) | JsonValue::Object(_) => {
                0.0
            }
        }
    }

    #[must_use]
    pub fn as_f32(&self) -> f32 {
        self.as_f64() as f32
    }

    /// [`PathValue::as_f64`] truncated toward zero.
    ///
    /// `NaN` is `0`. Values beyond the `i64` range saturate.
    #[must_use]
    pub fn as_i64(&self) -> i64 {
        let value = self.as_f64();
        if value.is_nan() {
            return 0;
        }
        value as i64
    }

    #[must_use]
    pub fn as_i32(&self) -> i32 {
        self.as_i64() as i32
    }

    #[must_use]
    pub fn as_i16(&self) -> i16 {
        self.as_i64() as i16
    }

    #[must_use]
    pub fn as_i8(&self) -> i8 {
        self.as_i64() as i8
    }

    #[must_use]
    pub fn as_isize(&self) -> isize {
        self.as_i64() as isize
    }

    /// [`PathValue::as_f64`] truncated toward zero.
    ///
    /// `NaN` and negative values are `0`. Values above `u64::MAX` saturate.
    #[must_use]
    pub fn as_u64(&self) -> u64 {
        let value = self.as_f64();
        if value.is_nan() {
            return 0;
        }
        value as u64
    }

    #[must_use]
    pub fn as_u32(&self) -> u32 {
        self.as_u64() as u32
    }

    #[must_use]
    pub fn as_u16(&self) -> u16 {
        self.as_u64() as u16
    }

    #[must_use]
    pub fn as_u8(&self) -> u8 {
        self.as_u64() as u8
    }

    #[must_use]
    pub fn as_usize(&self) -> usize {
        self.as_u64() as usize
    }

    /// Every member of the wrapped object coerced with [`PathValue::as_string`].
    ///
    /// Nested containers and booleans become `""`. Empty for non-objects.
    #[must_use]
    pub fn as_string_map(&self) -> AHashMap<String, String> {
        let Some(object) = self.value().as_object() else {
            return AHashMap::new();
        };
        object
            .iter()
            .map(|(key, value)| {
                (
                    String::from(&**key),
                    PathValue::new(value.clone()).as_string(),
                )
            })
            .collect()
    }
}

/// Same as [`PathValue::as_string`].
impl fmt::Display for PathValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value() {
            JsonValue::String(s) => f.write_str(s),
            JsonValue::Number(n) => write!(f, "{n:.6}"),
            JsonValue::Null | JsonValue::Bool(_) | JsonValue::Array(_) | JsonValue::Object(_) => {
                Ok(())
            }
        }
    }
}
