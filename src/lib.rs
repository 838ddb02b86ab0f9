//! Encodes and decodes bencoded values.
//!
//! Bencode knows four kinds of values: integers, byte strings, lists and
//! dictionaries with byte string keys. [`Value`] models exactly these four
//! kinds, so anything that type-checks as a [`Value`] can be encoded.
//!
//! The encoder always produces the canonical form: integers without leading
//! zeros and dictionary keys in ascending byte order, so a given value has
//! exactly one encoding.
//!
//! The decoder walks the input once with a single forward-only cursor and
//! returns the first complete value it finds. Anything after that value is
//! left untouched; use [`decoding::Decoder`] directly to inspect it.
//!
//! ```
//! use bencode_canonical::{decode, encode, Value};
//!
//! # fn main() -> Result<(), bencode_canonical::Error> {
//! let value = decode("d4:spaml1:a1:bee")?;
//! assert_eq!(
//!     value.get(b"spam"),
//!     Some(&Value::List(vec![Value::string("a"), Value::string("b")]))
//! );
//!
//! assert_eq!(encode(&value)?, b"d4:spaml1:a1:bee");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(test), warn(missing_docs))]

extern crate alloc;

#[cfg(doctest)]
doc_comment::doctest!("../README.md");

use alloc::vec::Vec;

pub mod decoding;
pub mod encoding;
mod error;
pub mod value;

#[cfg(feature = "serde")]
pub mod serde;

pub use crate::{
    decoding::FromBencode,
    encoding::ToBencode,
    error::{Error, Result},
    value::Value,
};

/// Encode `value` into its canonical bencode representation.
///
/// Fails with [`Error::InvalidInput`] if anything inside `value` has no
/// bencode representation (for example an integer outside the `i64` range).
///
/// ```
/// # use bencode_canonical::{encode, Error};
/// # fn main() -> Result<(), Error> {
/// assert_eq!(encode(&-10)?, b"i-10e");
/// assert_eq!(encode("bob")?, b"3:bob");
/// assert_eq!(encode(&Vec::<i64>::new())?, b"le");
/// # Ok(())
/// # }
/// ```
pub fn encode<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + ToBencode,
{
    value.to_bencode()
}

/// Decode the first bencoded value at the start of `input`.
///
/// Trailing bytes after that value are ignored. Any malformed or truncated
/// encoding, or nesting deeper than [`decoding::DEFAULT_MAX_DEPTH`], fails with
/// [`Error::InvalidInput`].
///
/// ```
/// # use bencode_canonical::{decode, Error, Value};
/// # fn main() -> Result<(), Error> {
/// assert_eq!(decode("i10egarbage")?, Value::Integer(10));
/// assert_eq!(decode("3:"), Err(Error::InvalidInput));
/// # Ok(())
/// # }
/// ```
pub fn decode(input: impl AsRef<[u8]>) -> Result<Value> {
    decoding::Decoder::new(input.as_ref()).next_value()
}
