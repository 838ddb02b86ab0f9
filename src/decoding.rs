//! Decodes bencoded values.
//!
//! # Basic decoding
//!
//! [`decode`](crate::decode) reads the first complete value from a buffer. For
//! more control, create a [`Decoder`]:
//!
//! ```
//! # use bencode_canonical::{decoding::Decoder, Error, Value};
//! # fn main() -> Result<(), Error> {
//! let mut decoder = Decoder::new(b"i1e3:fooextra");
//!
//! assert_eq!(decoder.next_value()?, Value::Integer(1));
//! assert_eq!(decoder.next_value()?, Value::string("foo"));
//! assert_eq!(decoder.remaining(), b"extra");
//! # Ok(())
//! # }
//! ```
//!
//! Nesting is limited to [`DEFAULT_MAX_DEPTH`] levels unless a different bound
//! is set, so hostile input cannot exhaust the stack:
//!
//! ```
//! # use bencode_canonical::{decoding::Decoder, Error};
//! let mut decoder = Decoder::new(b"lllleeee").with_max_depth(3);
//! assert_eq!(decoder.next_value(), Err(Error::InvalidInput));
//! ```
//!
//! Atoms (integers and strings) have depth zero, and lists and dicts have a depth equal to the
//! depth of their deepest member plus one. As a special case, an empty list or dict has depth 1.
//!
//! # Typed decoding
//!
//! Types implementing [`FromBencode`] can be read straight from a buffer:
//!
//! ```
//! # use bencode_canonical::{FromBencode, Error};
//! # fn main() -> Result<(), Error> {
//! let list = Vec::<String>::from_bencode(b"l3:foo3:bare")?;
//! assert_eq!(list, ["foo", "bar"]);
//! # Ok(())
//! # }
//! ```

mod decoder;
mod from_bencode;

pub use self::{
    decoder::{Decoder, DEFAULT_MAX_DEPTH},
    from_bencode::FromBencode,
};
