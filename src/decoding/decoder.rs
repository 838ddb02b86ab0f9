use alloc::{collections::BTreeMap, vec::Vec};
use core::str;

use crate::{
    error::{Error, Result},
    value::Value,
};

/// Nesting depth accepted by a [`Decoder`] unless [`Decoder::with_max_depth`] says otherwise.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// A bencode decoder
///
/// Holds a single forward-only cursor over the input. Every decoding routine
/// consumes exactly the bytes of its value and leaves the cursor on the first
/// byte after it.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    source: &'a [u8],
    offset: usize,
    max_depth: usize,
}

impl<'ser> Decoder<'ser> {
    /// Create a new decoder from the given byte array. Nesting is limited to
    /// [`DEFAULT_MAX_DEPTH`].
    pub fn new(buffer: &'ser [u8]) -> Self {
        Decoder {
            source: buffer,
            offset: 0,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum nesting depth of the decoder. Values nested deeper than this
    /// fail with [`Error::InvalidInput`].
    ///
    /// Decoding recurses once per level, so a large bound needs a matching
    /// amount of stack.
    #[must_use]
    pub fn with_max_depth(mut self, new_max_depth: usize) -> Self {
        self.max_depth = new_max_depth;
        self
    }

    /// The number of bytes consumed so far
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The bytes following the last decoded value
    pub fn remaining(&self) -> &'ser [u8] {
        &self.source[self.offset..]
    }

    /// Read the next complete value from the input.
    ///
    /// On failure the cursor is left where it was before the call.
    pub fn next_value(&mut self) -> Result<Value> {
        let start = self.offset;
        let result = self.decode_value(0);
        if result.is_err() {
            self.offset = start;
        }
        result
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.offset).copied()
    }

    fn advance(&mut self) {
        self.offset += 1;
    }

    fn descend(&self, depth: usize) -> Result<usize> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(Error::InvalidInput);
        }
        Ok(depth)
    }

    fn decode_value(&mut self, depth: usize) -> Result<Value> {
        match self.peek() {
            Some(b'i') => self.decode_integer().map(Value::Integer),
            Some(b'0'..=b'9') => self.decode_bytes().map(Value::Bytes),
            Some(b'l') => self.decode_list(depth),
            Some(b'd') => self.decode_dict(depth),
            _ => Err(Error::InvalidInput),
        }
    }

    fn decode_integer(&mut self) -> Result<i64> {
        self.advance();

        let start = self.offset;
        loop {
            match self.peek() {
                Some(b'e') => break,
                Some(_) => self.advance(),
                None => return Err(Error::InvalidInput),
            }
        }
        let digits = &self.source[start..self.offset];
        self.advance();

        parse_integer(digits)
    }

    fn decode_bytes(&mut self) -> Result<Vec<u8>> {
        let start = self.offset;
        while let Some(b'0'..=b'9') = self.peek() {
            self.advance();
        }
        let digits = &self.source[start..self.offset];

        if digits.is_empty() || self.peek() != Some(b':') {
            return Err(Error::InvalidInput);
        }
        self.advance();

        let len: usize = str::from_utf8(digits)?.parse()?;
        let end = self
            .offset
            .checked_add(len)
            .filter(|&end| end <= self.source.len())
            .ok_or(Error::InvalidInput)?;

        let bytes = self.source[self.offset..end].to_vec();
        self.offset = end;
        Ok(bytes)
    }

    fn decode_list(&mut self, depth: usize) -> Result<Value> {
        self.advance();
        let depth = self.descend(depth)?;

        let mut list = Vec::new();
        loop {
            match self.peek() {
                Some(b'e') => break,
                Some(_) => list.push(self.decode_value(depth)?),
                None => return Err(Error::InvalidInput),
            }
        }
        self.advance();

        Ok(Value::List(list))
    }

    fn decode_dict(&mut self, depth: usize) -> Result<Value> {
        self.advance();
        let depth = self.descend(depth)?;

        let mut dict = BTreeMap::new();
        loop {
            match self.peek() {
                Some(b'e') => break,
                Some(_) => {
                    let key = self.decode_bytes()?;
                    let value = self.decode_value(depth)?;
                    // a repeated key replaces the earlier value
                    dict.insert(key, value);
                },
                None => return Err(Error::InvalidInput),
            }
        }
        self.advance();

        Ok(Value::Dict(dict))
    }
}

/// Parse the body of an `i...e` integer. Only the canonical form is accepted:
/// an optional `-`, then digits without leading zeros, and no `-0`.
fn parse_integer(digits: &[u8]) -> Result<i64> {
    let magnitude = digits.strip_prefix(b"-").unwrap_or(digits);
    let negative = magnitude.len() != digits.len();

    match magnitude {
        [] => return Err(Error::InvalidInput),
        [b'0'] if negative => return Err(Error::InvalidInput),
        [b'0', _, ..] => return Err(Error::InvalidInput),
        _ if !magnitude.iter().all(u8::is_ascii_digit) => return Err(Error::InvalidInput),
        _ => {},
    }

    Ok(str::from_utf8(digits)?.parse()?)
}
