use alloc::{collections::BTreeMap, string::ToString, vec::Vec};
use core::ops::Range;

use crate::{
    encoding::{PrintableInteger, ToBencode},
    error::{Error, Result},
};

/// The actual encoder. Values are appended to an in-memory buffer which is
/// handed out by [`Encoder::get_output`].
#[derive(Default, Debug, Clone)]
pub struct Encoder {
    output: Vec<u8>,
}

impl Encoder {
    /// Create a new encoder
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Emit an arbitrary encodable object
    ///
    /// Fails if the object's [`ToBencode::encode`] wrote nothing.
    pub fn emit<E: ToBencode>(&mut self, value: E) -> Result<()> {
        let mut value_written = false;
        value.encode(SingleItemEncoder {
            encoder: self,
            value_written: &mut value_written,
        })?;

        if !value_written {
            return Err(Error::InvalidInput);
        }

        Ok(())
    }

    /// Emit an integer
    ///
    /// Fails if the value does not fit into an `i64`.
    pub fn emit_int<T: PrintableInteger>(&mut self, value: T) -> Result<()> {
        let value = value.to_i64()?;
        self.output.push(b'i');
        self.output.extend_from_slice(value.to_string().as_bytes());
        self.output.push(b'e');
        Ok(())
    }

    /// Emit a string
    pub fn emit_str(&mut self, value: &str) -> Result<()> {
        self.emit_bytes(value.as_bytes())
    }

    /// Emit a byte array
    pub fn emit_bytes(&mut self, value: &[u8]) -> Result<()> {
        self.output
            .extend_from_slice(value.len().to_string().as_bytes());
        self.output.push(b':');
        self.output.extend_from_slice(value);
        Ok(())
    }

    /// Emit an arbitrary list. The callback should emit the contents
    /// of the list to the given encoder.
    ///
    /// E.g., to emit the list `[1,2,3]`, you would write
    ///
    /// ```
    /// # use bencode_canonical::{encoding::Encoder, Error};
    /// # fn main() -> Result<(), Error> {
    /// let mut encoder = Encoder::new();
    /// encoder.emit_list(|e| {
    ///     e.emit_int(1)?;
    ///     e.emit_int(2)?;
    ///     e.emit_int(3)
    /// })?;
    /// assert_eq!(encoder.get_output(), b"li1ei2ei3ee");
    /// # Ok(())
    /// # }
    /// ```
    pub fn emit_list<F>(&mut self, list_cb: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder) -> Result<()>,
    {
        self.output.push(b'l');
        list_cb(self)?;
        self.output.push(b'e');
        Ok(())
    }

    /// Emit a dictionary where you know that the keys are already
    /// sorted. The callback must emit key/value pairs to the given
    /// encoder in strictly ascending key order; a key that is out of
    /// order or repeated fails the encoding. If the pairs may not be
    /// sorted, [`emit_and_sort_dict`] should be used instead.
    ///
    /// [`emit_and_sort_dict`]: Encoder::emit_and_sort_dict
    ///
    /// ```
    /// # use bencode_canonical::{encoding::Encoder, Error};
    /// # fn main() -> Result<(), Error> {
    /// let mut encoder = Encoder::new();
    /// encoder.emit_dict(|mut e| {
    ///     e.emit_pair(b"a", "foo")?;
    ///     e.emit_pair(b"b", 2)
    /// })?;
    /// assert_eq!(encoder.get_output(), b"d1:a3:foo1:bi2ee");
    /// # Ok(())
    /// # }
    /// ```
    pub fn emit_dict<F>(&mut self, content_cb: F) -> Result<()>
    where
        F: FnOnce(SortedDictEncoder) -> Result<()>,
    {
        self.output.push(b'd');
        content_cb(SortedDictEncoder {
            encoder: self,
            last_key: None,
        })?;
        self.output.push(b'e');
        Ok(())
    }

    /// Emit a dictionary that may have keys out of order. This will write the dict
    /// values to temporary memory, then sort them before adding them to the serialized
    /// stream
    ///
    /// ```
    /// # use bencode_canonical::{encoding::Encoder, Error};
    /// # fn main() -> Result<(), Error> {
    /// let mut encoder = Encoder::new();
    /// encoder.emit_and_sort_dict(|e| {
    ///     // Unlike in the example for Encoder::emit_dict(), these keys aren't sorted
    ///     e.emit_pair(b"b", 2)?;
    ///     e.emit_pair(b"a", "foo")
    /// })?;
    /// assert_eq!(encoder.get_output(), b"d1:a3:foo1:bi2ee");
    /// # Ok(())
    /// # }
    /// ```
    pub fn emit_and_sort_dict<F>(&mut self, content_cb: F) -> Result<()>
    where
        F: FnOnce(&mut UnsortedDictEncoder) -> Result<()>,
    {
        let mut encoder = UnsortedDictEncoder::default();
        content_cb(&mut encoder)?;

        self.output.push(b'd');
        for (key, value) in encoder.pairs {
            self.emit_bytes(&key)?;
            self.output.extend_from_slice(&value);
        }
        self.output.push(b'e');
        Ok(())
    }

    /// Return the encoded bytes
    pub fn get_output(self) -> Vec<u8> {
        self.output
    }
}

/// An encoder that can only encode a single item. See [`Encoder`]
/// for usage examples; the only difference between these classes is
/// that `SingleItemEncoder` can only be used once.
///
/// Every `emit_*` method consumes the encoder, so an implementation of
/// [`ToBencode`] cannot write two values into one slot:
///
/// ```compile_fail
/// # use bencode_canonical::{encoding::{SingleItemEncoder, ToBencode}, Error};
/// struct Two;
///
/// impl ToBencode for Two {
///     fn encode(&self, encoder: SingleItemEncoder) -> Result<(), Error> {
///         encoder.emit_int(1)?;
///         encoder.emit_int(2)
///     }
/// }
/// ```
///
/// Several values go into a list instead:
///
/// ```
/// # use bencode_canonical::{encoding::{SingleItemEncoder, ToBencode}, Error};
/// struct Two;
///
/// impl ToBencode for Two {
///     fn encode(&self, encoder: SingleItemEncoder) -> Result<(), Error> {
///         encoder.emit_list(|e| {
///             e.emit_int(1)?;
///             e.emit_int(2)
///         })
///     }
/// }
///
/// assert_eq!(Two.to_bencode(), Ok(b"li1ei2ee".to_vec()));
/// ```
#[derive(Debug)]
pub struct SingleItemEncoder<'a> {
    encoder: &'a mut Encoder,
    /// Whether a value was written. Meaningless if the encode method failed.
    value_written: &'a mut bool,
}

impl<'a> SingleItemEncoder<'a> {
    /// Emit an arbitrary encodable object
    pub fn emit<E: ToBencode + ?Sized>(self, value: &E) -> Result<()> {
        value.encode(self)
    }

    /// Emit a single object using an encoder
    pub fn emit_with<F>(self, value_cb: F) -> Result<()>
    where
        F: FnOnce(SingleItemEncoder) -> Result<()>,
    {
        value_cb(self)
    }

    /// Emit an integer
    pub fn emit_int<T: PrintableInteger>(self, value: T) -> Result<()> {
        *self.value_written = true;
        self.encoder.emit_int(value)
    }

    /// Emit a string
    pub fn emit_str(self, value: &str) -> Result<()> {
        *self.value_written = true;
        self.encoder.emit_str(value)
    }

    /// Emit a byte array
    pub fn emit_bytes(self, value: &[u8]) -> Result<()> {
        *self.value_written = true;
        self.encoder.emit_bytes(value)
    }

    /// Emit an arbitrary list
    pub fn emit_list<F>(self, list_cb: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder) -> Result<()>,
    {
        *self.value_written = true;
        self.encoder.emit_list(list_cb)
    }

    /// Emit a dictionary whose keys are emitted in ascending order. See
    /// [`Encoder::emit_dict`].
    pub fn emit_dict<F>(self, content_cb: F) -> Result<()>
    where
        F: FnOnce(SortedDictEncoder) -> Result<()>,
    {
        *self.value_written = true;
        self.encoder.emit_dict(content_cb)
    }

    /// Emit a dictionary that may have keys out of order. See
    /// [`Encoder::emit_and_sort_dict`].
    pub fn emit_and_sort_dict<F>(self, content_cb: F) -> Result<()>
    where
        F: FnOnce(&mut UnsortedDictEncoder) -> Result<()>,
    {
        *self.value_written = true;
        self.encoder.emit_and_sort_dict(content_cb)
    }
}

/// Encodes the pairs of a dictionary whose keys arrive in ascending order
#[derive(Debug)]
pub struct SortedDictEncoder<'a> {
    encoder: &'a mut Encoder,
    // position of the previous key inside the output buffer
    last_key: Option<Range<usize>>,
}

impl<'a> SortedDictEncoder<'a> {
    /// Emit a key/value pair. `key` must sort strictly after the previous key.
    pub fn emit_pair<E>(&mut self, key: &[u8], value: E) -> Result<()>
    where
        E: ToBencode,
    {
        if let Some(last_key) = self.last_key.clone() {
            if &self.encoder.output[last_key] >= key {
                return Err(Error::InvalidInput);
            }
        }

        self.encoder.emit_bytes(key)?;
        let end = self.encoder.output.len();
        self.last_key = Some(end - key.len()..end);

        self.encoder.emit(value)
    }
}

/// Collects the pairs of a dictionary in any order and sorts them on output
#[derive(Debug, Default)]
pub struct UnsortedDictEncoder {
    pairs: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl UnsortedDictEncoder {
    /// Emit a key/value pair. A key may only be emitted once.
    pub fn emit_pair<E>(&mut self, key: &[u8], value: E) -> Result<()>
    where
        E: ToBencode,
    {
        let mut encoder = Encoder::new();
        encoder.emit(value)?;

        if self.pairs.insert(key.to_vec(), encoder.get_output()).is_some() {
            return Err(Error::InvalidInput);
        }

        Ok(())
    }
}
