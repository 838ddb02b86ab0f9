use alloc::{
    boxed::Box,
    collections::{BTreeMap, VecDeque},
    rc::Rc,
    string::String,
    vec::Vec,
};

#[cfg(feature = "std")]
use std::{
    collections::HashMap,
    hash::{BuildHasher, Hash},
};

use crate::{
    decoding::Decoder,
    encoding::AsString,
    error::{Error, Result},
    value::Value,
};

///Basic trait for bencode based value deserialization.
pub trait FromBencode {
    /// Deserialize an object from its byte representation.
    ///
    /// Only the first value in `bytes` is read; anything after it is ignored.
    fn from_bencode(bytes: &[u8]) -> Result<Self>
    where
        Self: Sized,
    {
        let value = Decoder::new(bytes).next_value()?;
        Self::decode_bencode_value(value)
    }

    /// Deserialize an object from an already decoded [`Value`].
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized;
}

macro_rules! impl_from_bencode_for_integer {
    ($($type:ty)*) => {$(
        impl FromBencode for $type {
            fn decode_bencode_value(value: Value) -> Result<Self>
            where
                Self: Sized,
            {
                let number = value.as_integer().ok_or(Error::InvalidInput)?;
                Ok(<$type>::try_from(number)?)
            }
        }
    )*}
}

impl_from_bencode_for_integer!(u8 u16 u32 u64 u128 usize i8 i16 i32 i64 i128 isize);

impl<ContentT: FromBencode> FromBencode for Vec<ContentT> {
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        match value {
            Value::List(list) => list
                .into_iter()
                .map(ContentT::decode_bencode_value)
                .collect(),
            _ => Err(Error::InvalidInput),
        }
    }
}

impl<ContentT: FromBencode> FromBencode for VecDeque<ContentT> {
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        Vec::<ContentT>::decode_bencode_value(value).map(VecDeque::from)
    }
}

impl FromBencode for String {
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        match value {
            Value::Bytes(bytes) => Ok(String::from_utf8(bytes)?),
            _ => Err(Error::InvalidInput),
        }
    }
}

// Keys are handed to `K` as byte strings.
impl<K, V> FromBencode for BTreeMap<K, V>
where
    K: FromBencode + Ord,
    V: FromBencode,
{
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        match value {
            Value::Dict(dict) => dict
                .into_iter()
                .map(|(key, value)| -> Result<(K, V)> {
                    Ok((
                        K::decode_bencode_value(Value::Bytes(key))?,
                        V::decode_bencode_value(value)?,
                    ))
                })
                .collect(),
            _ => Err(Error::InvalidInput),
        }
    }
}

#[cfg(feature = "std")]
impl<K, V, H> FromBencode for HashMap<K, V, H>
where
    K: FromBencode + Hash + Eq,
    V: FromBencode,
    H: BuildHasher + Default,
{
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        match value {
            Value::Dict(dict) => dict
                .into_iter()
                .map(|(key, value)| -> Result<(K, V)> {
                    Ok((
                        K::decode_bencode_value(Value::Bytes(key))?,
                        V::decode_bencode_value(value)?,
                    ))
                })
                .collect(),
            _ => Err(Error::InvalidInput),
        }
    }
}

impl<T: FromBencode> FromBencode for Box<T> {
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        T::decode_bencode_value(value).map(Box::new)
    }
}

impl<T: FromBencode> FromBencode for Rc<T> {
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        T::decode_bencode_value(value).map(Rc::new)
    }
}

impl FromBencode for AsString<Vec<u8>> {
    fn decode_bencode_value(value: Value) -> Result<Self>
    where
        Self: Sized,
    {
        match value {
            Value::Bytes(bytes) => Ok(AsString(bytes)),
            _ => Err(Error::InvalidInput),
        }
    }
}
