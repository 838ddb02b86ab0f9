//! Serde bencode serialization and deserialization.
//!
//! Serialization goes through [`Value`](crate::Value): a type is first turned
//! into a `Value` with [`to_value`] and then encoded, and deserialization
//! decodes a `Value` and hands it to the type's `Deserialize` impl. Because a
//! `Value` knows its own kind, `deserialize_any` (and therefore untagged
//! data, `Value` itself and `serde_json`-style visitors) works.
//!
//! The Serde data model contains a number of types which have no native bencode
//! representation. Serializing these types fails with
//! [`Error::UnsupportedType`]:
//! - `()` and unit structs
//! - `Option::None` (`Some(v)` is serialized as `v`)
//! - `bool`
//! - `char`
//! - `f32` and `f64`
//! - enums
//! - maps whose keys are not strings or byte strings
//!
//! Integers outside the `i64` range fail with [`Error::InvalidInput`].

mod de;
mod error;
mod ser;

pub use de::{from_bytes, from_value};
pub use error::{Error, Result};
pub use ser::{to_bytes, to_value, DictSerializer, ListSerializer, Serializer};
