//! An encoder for bencode. Guarantees that the output is valid, canonical bencode.
//!
//! # Encoding a structure
//!
//! The easiest way to encode a structure is to implement [`ToBencode`] for it:
//!
//! ```
//! # use bencode_canonical::{encoding::{SingleItemEncoder, ToBencode}, Error};
//! struct Message {
//!     foo: i32,
//!     bar: String,
//! }
//!
//! impl ToBencode for Message {
//!     fn encode(&self, encoder: SingleItemEncoder) -> Result<(), Error> {
//!         encoder.emit_dict(|mut e| {
//!             // Keys must be emitted in ascending order here
//!             e.emit_pair(b"bar", &self.bar)?;
//!             e.emit_pair(b"foo", self.foo)
//!         })
//!     }
//! }
//!
//! # fn main() -> Result<(), Error> {
//! let message = Message {
//!     foo: 1,
//!     bar: "quux".to_string(),
//! };
//!
//! assert_eq!(message.to_bencode()?, b"d3:bar4:quux3:fooi1ee");
//! # Ok(())
//! # }
//! ```
//!
//! If the keys are not known to be in order, use [`Encoder::emit_and_sort_dict`]
//! instead, which buffers the pairs and sorts them before writing.
//!
//! Most primitive and collection types already implement [`ToBencode`].
//!
//! # Error handling
//!
//! Every failure is reported as [`Error::InvalidInput`]: an integer outside
//! the `i64` range, dictionary keys out of order or repeated, or an
//! implementation that emitted nothing. The first failure aborts the whole
//! encoding; no partial output is returned.
//!
//! [`Error::InvalidInput`]: crate::Error::InvalidInput

mod encoder;
mod printable_integer;
mod to_bencode;

pub use self::{
    encoder::{Encoder, SingleItemEncoder, SortedDictEncoder, UnsortedDictEncoder},
    printable_integer::PrintableInteger,
    to_bencode::{AsString, ToBencode},
};
