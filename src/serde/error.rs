//! Serde error and result types

use std::fmt::Display;

use thiserror::Error;

/// Alias for `Result<T, serde::Error>`
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An enumeration of potential errors that appear during serde serialization and
/// deserialization
#[derive(Debug, Error)]
pub enum Error {
    /// The bencode itself was malformed, or a value had no bencode encoding
    #[error(transparent)]
    InvalidInput(#[from] crate::Error),
    /// The serializer encountered a type with no bencode representation
    #[error("serializing values of type `{0}` is not supported")]
    UnsupportedType(&'static str),
    /// A serde-related error reported by a `Serialize` or `Deserialize` impl
    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub(crate) fn unsupported_type(name: &'static str) -> Error {
        Self::UnsupportedType(name)
    }
}

impl From<Error> for crate::Error {
    fn from(_: Error) -> Self {
        crate::Error::InvalidInput
    }
}

impl serde::ser::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}
