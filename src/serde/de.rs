//! Serde bencode deserialization.

use serde::{
    de::{
        value::{MapDeserializer, SeqDeserializer},
        DeserializeOwned, IntoDeserializer, Visitor,
    },
    forward_to_deserialize_any,
};

use crate::{
    serde::{Error, Result},
    value::Value,
};

/// Deserialize an instance of `T` from the first bencoded value in `bytes`
pub fn from_bytes<T>(bytes: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    from_value(crate::decode(bytes)?)
}

/// Deserialize an instance of `T` from a [`Value`]
pub fn from_value<T>(value: Value) -> Result<T>
where
    T: DeserializeOwned,
{
    T::deserialize(value)
}

impl<'de> serde::de::Deserializer<'de> for Value {
    type Error = Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        match self {
            Value::Integer(integer) => visitor.visit_i64(integer),
            Value::Bytes(bytes) => visitor.visit_byte_buf(bytes),
            Value::List(list) => {
                let mut access = SeqDeserializer::<_, Error>::new(list.into_iter());
                let value = visitor.visit_seq(&mut access)?;
                access.end()?;
                Ok(value)
            },
            Value::Dict(dict) => {
                let mut access = MapDeserializer::<_, Error>::new(
                    dict.into_iter().map(|(key, value)| (Value::Bytes(key), value)),
                );
                let value = visitor.visit_map(&mut access)?;
                access.end()?;
                Ok(value)
            },
        }
    }

    // Absent values never reach the deserializer, so anything present is `Some`
    fn deserialize_option<V>(self, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_some(self)
    }

    fn deserialize_newtype_struct<V>(self, _name: &'static str, visitor: V) -> Result<V::Value>
    where
        V: Visitor<'de>,
    {
        visitor.visit_newtype_struct(self)
    }

    forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf unit unit_struct seq tuple tuple_struct map struct enum
        identifier ignored_any
    }
}

impl<'de> IntoDeserializer<'de, Error> for Value {
    type Deserializer = Self;

    fn into_deserializer(self) -> Self {
        self
    }
}
