//! Serde bencode serialization.

use std::collections::BTreeMap;

use serde::ser::{
    Impossible, Serialize, SerializeMap, SerializeSeq, SerializeStruct, SerializeTuple,
    SerializeTupleStruct,
};

use crate::{
    serde::{Error, Result},
    value::Value,
};

/// Serialize an instance of `T` to bencode
pub fn to_bytes<T>(value: &T) -> Result<Vec<u8>>
where
    T: ?Sized + Serialize,
{
    Ok(crate::encode(&to_value(value)?)?)
}

/// Convert an instance of `T` into a [`Value`]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(Serializer)
}

fn integer<T>(v: T) -> Result<Value>
where
    i64: TryFrom<T>,
{
    i64::try_from(v)
        .map(Value::Integer)
        .map_err(|_| Error::from(crate::Error::InvalidInput))
}

/// A serde serializer producing [`Value`]s
#[derive(Clone, Copy, Debug, Default)]
pub struct Serializer;

impl serde::ser::Serializer for Serializer {
    type Error = Error;
    type Ok = Value;
    type SerializeMap = DictSerializer;
    type SerializeSeq = ListSerializer;
    type SerializeStruct = DictSerializer;
    type SerializeStructVariant = Impossible<Value, Error>;
    type SerializeTuple = ListSerializer;
    type SerializeTupleStruct = ListSerializer;
    type SerializeTupleVariant = Impossible<Value, Error>;

    fn serialize_bool(self, _v: bool) -> Result<Value> {
        Err(Error::unsupported_type("bool"))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        integer(v)
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        integer(v)
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        integer(v)
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Integer(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        integer(v)
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        integer(v)
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        integer(v)
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        integer(v)
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        integer(v)
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        integer(v)
    }

    fn serialize_f32(self, _v: f32) -> Result<Value> {
        Err(Error::unsupported_type("f32"))
    }

    fn serialize_f64(self, _v: f64) -> Result<Value> {
        Err(Error::unsupported_type("f64"))
    }

    fn serialize_char(self, _v: char) -> Result<Value> {
        Err(Error::unsupported_type("char"))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::Bytes(v.as_bytes().to_vec()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        Ok(Value::Bytes(v.to_vec()))
    }

    fn serialize_none(self) -> Result<Value> {
        Err(Error::unsupported_type("Option::None"))
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Err(Error::unsupported_type("()"))
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Err(Error::unsupported_type("unit struct"))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<Value> {
        Err(Error::unsupported_type("enum unit variant"))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Err(Error::unsupported_type("enum newtype variant"))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<Self::SerializeSeq> {
        Ok(ListSerializer::with_capacity(len.unwrap_or(0)))
    }

    fn serialize_tuple(self, len: usize) -> Result<Self::SerializeTuple> {
        Ok(ListSerializer::with_capacity(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<Self::SerializeTupleStruct> {
        Ok(ListSerializer::with_capacity(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant> {
        Err(Error::unsupported_type("enum tuple variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap> {
        Ok(DictSerializer::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<Self::SerializeStruct> {
        Ok(DictSerializer::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant> {
        Err(Error::unsupported_type("enum struct variant"))
    }
}

/// Bencode sub-serializer for sequences, tuples and tuple structs.
#[derive(Debug)]
pub struct ListSerializer {
    list: Vec<Value>,
}

impl ListSerializer {
    fn with_capacity(capacity: usize) -> Self {
        ListSerializer {
            list: Vec::with_capacity(capacity),
        }
    }

    fn push<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.list.push(value.serialize(Serializer)?);
        Ok(())
    }
}

impl SerializeSeq for ListSerializer {
    type Error = Error;
    type Ok = Value;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.list))
    }
}

impl SerializeTuple for ListSerializer {
    type Error = Error;
    type Ok = Value;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.list))
    }
}

impl SerializeTupleStruct for ListSerializer {
    type Error = Error;
    type Ok = Value;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.push(value)
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.list))
    }
}

/// Bencode sub-serializer for maps and structs. Entries are kept sorted by key.
#[derive(Debug, Default)]
pub struct DictSerializer {
    dict: BTreeMap<Vec<u8>, Value>,
    key: Option<Vec<u8>>,
}

impl SerializeMap for DictSerializer {
    type Error = Error;
    type Ok = Value;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        match key.serialize(Serializer)? {
            Value::Bytes(key) => {
                self.key = Some(key);
                Ok(())
            },
            _ => Err(Error::unsupported_type("non-string map key")),
        }
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .key
            .take()
            .ok_or_else(|| <Error as serde::ser::Error>::custom("map value without a key"))?;
        self.dict.insert(key, value.serialize(Serializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.dict))
    }
}

impl SerializeStruct for DictSerializer {
    type Error = Error;
    type Ok = Value;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.dict
            .insert(key.as_bytes().to_vec(), value.serialize(Serializer)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Dict(self.dict))
    }
}
