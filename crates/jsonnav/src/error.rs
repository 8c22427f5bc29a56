use core::fmt;
use std::io;

/// Failure to construct a [`PathValue`](crate::PathValue) from raw input.
///
/// Decoding is the only fallible step. Navigation and coercion never produce errors.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input is not valid JSON.
    Decode(serde_json::Error),
    /// Reading the input stream failed before decoding started.
    Io(io::Error),
}

impl Error {
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_))
    }

    #[must_use]
    pub fn is_io(&self) -> bool {
        matches!(self, Error::Io(_))
    }

    /// One-based line of the decode failure, if known.
    #[must_use]
    pub fn line(&self) -> Option<usize> {
        match self {
            Error::Decode(error) => Some(error.line()),
            Error::Io(_) => None,
        }
    }

    /// One-based column of the decode failure, if known.
    #[must_use]
    pub fn column(&self) -> Option<usize> {
        match self {
            Error::Decode(error) => Some(error.column()),
            Error::Io(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decode(error) => write!(f, "Failed to decode JSON: {error}"),
            Error::Io(error) => write!(f, "Failed to read JSON input: {error}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decode(error) => Some(error),
            Error::Io(error) => Some(error),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Decode(error)
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::Io(error)
    }
}
