//! # jsonnav
//!
//! Navigate loosely-shaped JSON without checking its structure at every step.
//!
//! ```rust
//! use jsonnav::PathValue;
//!
//! # fn main() -> Result<(), jsonnav::Error> {
//! let list: PathValue = r#"[1, 2, "3", 4, "05", "NaN"]"#.parse()?;
//! let numbers: Vec<i64> = list.elements().map(|item| item.as_i64()).collect();
//! assert_eq!(numbers, [1, 2, 3, 4, 5, 0]);
//!
//! // Wrong assumptions produce zero values instead of errors
//! assert_eq!(list.field("id").as_u64(), 0);
//! assert_eq!(list.index(10).as_string(), "");
//! # Ok(())
//! # }
//! ```
//!
//! Decoding is the only step that can fail. Once a document is wrapped in a [`PathValue`],
//! every navigation and coercion returns a value: [`PathValue::field`] and
//! [`PathValue::index`] yield a wrapper around `null` when the shape does not match, and the
//! `as_*` methods yield `0`, `""` or an empty collection. Validate the results later, where
//! it matters.
mod coerce;
mod error;
mod impls;
mod path;
mod value;

pub use error::Error;
pub use path::PathValue;
pub use value::{JsonValue, Object};

/// Decode `bytes` as JSON and wrap the result.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `bytes` is not valid JSON.
pub fn from_slice(bytes: &[u8]) -> Result<PathValue, Error> {
    PathValue::from_slice(bytes)
}

/// Decode `input` as JSON and wrap the result.
///
/// # Errors
///
/// Returns [`Error::Decode`] if `input` is not valid JSON.
pub fn from_str(input: &str) -> Result<PathValue, Error> {
    input.parse()
}

/// Buffer `reader` and decode its contents as JSON.
///
/// # Errors
///
/// Returns [`Error::Io`] if reading fails and [`Error::Decode`] if the contents are not
/// valid JSON.
pub fn from_reader<R: std::io::Read>(reader: R) -> Result<PathValue, Error> {
    PathValue::from_reader(reader)
}
