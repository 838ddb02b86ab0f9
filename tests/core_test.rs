//! Port of https://github.com/jamesleonis/bencode-cljc/blob/master/test/bencode_cljc/core_test.cljc
//!
//! Should only use #![no_std] compatible features but still requires the
//! `std` feature flag to avoid that we need to define a global allocator.

extern crate alloc;
use alloc::collections::BTreeMap;

use bencode_canonical::{
    decode,
    decoding::{Decoder, DEFAULT_MAX_DEPTH},
    encode, Error, FromBencode, ToBencode, Value,
};

// -----------------------------------------------------------------------------
// Macros
// -----------------------------------------------------------------------------

macro_rules! list(
    {} => { Value::List(Vec::new()) };
    { $($value:expr),+ } => {
        {
            let mut list = Vec::new();
            $( list.push(Value::from($value)); )+

            Value::List(list)
        }
     };
);

macro_rules! map(
    { $($key:expr => $value:expr),+ } => {
        {
            let mut map = BTreeMap::new();
            $( map.insert($key.as_bytes().to_vec(), Value::from($value)); )+

            Value::Dict(map)
        }
     };
);

fn check_pairs(pairs: &[(Value, &str)]) -> Result<(), Error> {
    for (original, expected_encoding) in pairs {
        let encoded = encode(original)?;
        assert_eq!(
            expected_encoding.as_bytes(),
            encoded.as_slice(),
            "unexpected encoding of {:?}",
            original
        );

        let decoded = decode(&encoded)?;
        assert_eq!(original, &decoded);
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// Round trips
// -----------------------------------------------------------------------------

#[test]
fn string_test_pairs() -> Result<(), Error> {
    let pairs = [
        ("", "0:"),
        ("hello", "5:hello"),
        ("goodbye", "7:goodbye"),
        ("hello world", "11:hello world"),
        ("1-5%3~]+=\\| []>.,`??", "20:1-5%3~]+=\\| []>.,`??"),
    ];

    for (original, expected_encoding) in &pairs {
        let encoded = original.to_bencode()?;
        assert_eq!(expected_encoding.as_bytes(), encoded.as_slice());

        let decoded = String::from_bencode(&encoded)?;
        assert_eq!(original, &decoded);
    }

    Ok(())
}

#[test]
fn binary_strings_are_kept_verbatim() -> Result<(), Error> {
    let original = Value::Bytes(vec![0x00, 0xff, b'e', b':', 0x80]);
    let encoded = encode(&original)?;
    assert_eq!(encoded, b"5:\x00\xffe:\x80");
    assert_eq!(decode(&encoded)?, original);

    Ok(())
}

#[test]
fn integer_test_pairs() -> Result<(), Error> {
    let pairs = [
        (0, "i0e"),
        (5, "i5e"),
        (-5, "i-5e"),
        (1234567890, "i1234567890e"),
        (-1234567890, "i-1234567890e"),
        (i64::MAX, "i9223372036854775807e"),
        (i64::MIN, "i-9223372036854775808e"),
    ];

    for (original, expected_encoding) in &pairs {
        let encoded = original.to_bencode()?;
        assert_eq!(expected_encoding.as_bytes(), encoded.as_slice());

        let decoded = i64::from_bencode(&encoded)?;
        assert_eq!(original, &decoded);
    }

    Ok(())
}

#[test]
fn list_test_pairs() -> Result<(), Error> {
    check_pairs(&[
        (list![], "le"),
        (list!["abra", "cadabra"], "l4:abra7:cadabrae"),
        (list!["spam", "eggs"], "l4:spam4:eggse"),
        (
            list![list!["list", "of", "lists"], list!["like", "omygawd!"]],
            "ll4:list2:of5:listsel4:like8:omygawd!ee",
        ),
    ])
}

#[test]
fn map_test_pairs() -> Result<(), Error> {
    check_pairs(&[
        (Value::Dict(BTreeMap::new()), "de"),
        (
            map! {"cow" => "moo", "spam" => "eggs"},
            "d3:cow3:moo4:spam4:eggse",
        ),
        (
            map! {"cow" => "moo", "dog" => "bark"},
            "d3:cow3:moo3:dog4:barke",
        ),
        (
            map! {"dog" => "bark", "cow" => "moo"},
            "d3:cow3:moo3:dog4:barke",
        ),
        (
            map! {"first" => "first", "2ace" => "second", "3ace" => "third"},
            "d4:2ace6:second4:3ace5:third5:first5:firste",
        ),
        (
            map! {"Goodbye" => map! {"maps" => "that don't work", "number" => 100}},
            "d7:Goodbyed4:maps15:that don't work6:numberi100eee",
        ),
        (
            map! {
            "publisher" => "bob", "publisher-webpage" => "www.example.com",
            "publisher.location" => "home"
            },
            "d9:publisher3:bob17:publisher-webpage15:www.example.com18:publisher.location4:homee",
        ),
    ])
}

#[test]
fn mixed_use_list_pairs() -> Result<(), Error> {
    check_pairs(&[(
        list![0, "heterogeneous", -5, "lists", 10, map! {"map" => "well"}],
        "li0e13:heterogeneousi-5e5:listsi10ed3:map4:wellee",
    )])
}

#[test]
fn mixed_use_dict_pairs() -> Result<(), Error> {
    check_pairs(&[
        (
            map! {
                "hello" => list!["world!", "gaia!", "mother earth!"],
                "Goodbye" => map! {"maps" => "that don't work", "number" => 100}
            },
            "d7:Goodbyed4:maps15:that don't work6:numberi100ee5:hellol6:world!5:gaia!13:mother earth!ee"
        ),
        (map! {"spam" => list!["a", "b"]}, "d4:spaml1:a1:bee"),
        (
            map! {
                "t" => "aa", "y" => "q", "q" => "ping",
                "a" => map! { "id" => "abcdefghij0123456789" }
            },
            "d1:ad2:id20:abcdefghij0123456789e1:q4:ping1:t2:aa1:y1:qe",
        ),
        (
            map! {
                "t" => "aa", "y" => "q", "q" => "get_peers",
                "a" => map! { "id" => "abcdefghij0123456789", "info_hash" => "mnopqrstuvwxyz123456" }
            },
            "d1:ad2:id20:abcdefghij01234567899:info_hash20:mnopqrstuvwxyz123456e1:q9:get_peers1:t2:aa1:y1:qe"
        ),
        (
            map! {
                "t" => "aa", "y" => "r",
                "r" => map! {
                    "id" => "abcdefghij0123456789",
                    "token" => "aoeusnth", "values" => list!["axje.u", "idhtnm"]
                }
            },
            "d1:rd2:id20:abcdefghij01234567895:token8:aoeusnth6:valuesl6:axje.u6:idhtnmee1:t2:aa1:y1:re"
        ),
    ])
}

#[test]
fn empty_containers_nest() -> Result<(), Error> {
    check_pairs(&[
        (list![list![]], "llee"),
        (list![Value::Dict(BTreeMap::new())], "ldee"),
        (map! {"list" => list![]}, "d4:listlee"),
        (map! {"" => ""}, "d0:0:e"),
    ])
}

#[test]
fn keys_are_sorted_as_raw_bytes() -> Result<(), Error> {
    let mut dict = BTreeMap::new();
    dict.insert(b"b".to_vec(), Value::Integer(1));
    dict.insert(b"a".to_vec(), Value::Integer(2));
    dict.insert(b"B".to_vec(), Value::Integer(3));
    dict.insert(b"ab".to_vec(), Value::Integer(4));
    dict.insert(vec![0xff], Value::Integer(5));

    let encoded = encode(&Value::Dict(dict))?;
    assert_eq!(encoded, b"d1:Bi3e1:ai2e2:abi4e1:bi1e1:\xffi5ee");

    Ok(())
}

#[test]
fn deep_nesting_round_trips() -> Result<(), Error> {
    let mut value = Value::Integer(1);
    for _ in 0..256 {
        value = Value::List(vec![value]);
    }

    let encoded = encode(&value)?;
    assert_eq!(encoded.len(), 256 * 2 + 3);
    assert_eq!(decode(&encoded)?, value);

    Ok(())
}

// -----------------------------------------------------------------------------
// Malformed input
// -----------------------------------------------------------------------------

fn assert_rejected(values: &[&str]) {
    for value in values {
        assert_eq!(
            decode(value.as_bytes()),
            Err(Error::InvalidInput),
            "`{}` should be rejected",
            value
        );
    }
}

#[test]
fn malformed_values() {
    assert_rejected(&["", "ie", "10e", "i10", "ibobe", "3:", ":bob", "bob", "l", "d", "e"]);
}

#[test]
fn illegal_integer_encodings() {
    assert_rejected(&[
        "i-0e", "i09e", "i-09e", "i-0123e", "i-00123e", "i0123e", "i00123e", "i12-345", "i-12-345",
        "i-1", "i1", "i+1e", "i-e", "i 1e", "i9223372036854775808e", "i-9223372036854775809e",
    ]);
}

#[test]
fn illegal_string_encodings() {
    assert_rejected(&[":hello", "-5:hello", "-5:", "5:", "10:hello", "5hello", "18446744073709551616:a"]);
}

#[test]
fn illegal_list_encodings() {
    assert_rejected(&[
        "l",
        "lsde",
        "li10e5hello",
        "l10:helloi123456789ee",
        "l10:helloi123456789e5:helloe",
        "l5:helloi123456789e10:helloe",
    ]);
}

#[test]
fn illegal_dictionary_encodings() {
    assert_rejected(&[
        "d",
        "duuuuure",
        "d5:hello5:world",
        "d10:helloi123456789ee",
        "d5:helloi123456789e5:helloe",
        "di10e5:hello5:worldi10ee",
        "d5:worldi10ei10e5:helloe",
        "dle5:hello5:worldi10ee",
        "dli10ei11ee5:hello5:worldi10ee",
        "dde5:hello5:worldi10ee",
        "dd8:innermapi11ee5:hello5:worldi10ee",
        "d3:fooe",
    ]);
}

// -----------------------------------------------------------------------------
// Lenient decoding
// -----------------------------------------------------------------------------

#[test]
fn trailing_data_is_ignored() -> Result<(), Error> {
    assert_eq!(decode("i10egarbage")?, Value::Integer(10));
    assert_eq!(decode("5:hello5:hello")?, Value::string("hello"));
    assert_eq!(decode("l5:hello5:worldei10e")?, list!["hello", "world"]);
    assert_eq!(decode("d5:hello5:worldei10e")?, map! {"hello" => "world"});

    Ok(())
}

#[test]
fn trailing_data_is_left_in_the_decoder() -> Result<(), Error> {
    let mut decoder = Decoder::new(b"i1ei2e");
    assert_eq!(decoder.next_value()?, Value::Integer(1));
    assert_eq!(decoder.remaining(), b"i2e");
    assert_eq!(decoder.next_value()?, Value::Integer(2));
    assert!(decoder.remaining().is_empty());

    Ok(())
}

#[test]
fn unsorted_keys_are_accepted_and_sorted() -> Result<(), Error> {
    let decoded = decode("d3:fooi1e3:bari2ee")?;
    assert_eq!(encode(&decoded)?, b"d3:bari2e3:fooi1ee");

    Ok(())
}

#[test]
fn duplicate_keys_keep_the_last_value() -> Result<(), Error> {
    assert_eq!(decode("d1:ai1e1:ai2ee")?, map! {"a" => 2});

    Ok(())
}

#[test]
fn length_prefixes_may_have_leading_zeros() -> Result<(), Error> {
    assert_eq!(decode("03:bob")?, Value::string("bob"));

    Ok(())
}

#[test]
fn max_depth_is_enforced() -> Result<(), Error> {
    assert_eq!(
        Decoder::new(b"llee").with_max_depth(2).next_value()?,
        list![list![]]
    );
    assert_eq!(
        Decoder::new(b"llleee").with_max_depth(2).next_value(),
        Err(Error::InvalidInput)
    );
    assert_eq!(
        Decoder::new(b"i1e").with_max_depth(0).next_value()?,
        Value::Integer(1)
    );

    Ok(())
}

#[test]
fn hostile_nesting_is_rejected_without_overflow() {
    assert_eq!(decode(vec![b'l'; 1_000_000]), Err(Error::InvalidInput));
    assert_eq!(decode(b"d1:a".repeat(1_000_000)), Err(Error::InvalidInput));

    let mut nested = vec![b'l'; DEFAULT_MAX_DEPTH + 1];
    nested.extend(vec![b'e'; DEFAULT_MAX_DEPTH + 1]);
    assert_eq!(decode(&nested), Err(Error::InvalidInput));
    assert!(decode(&nested[1..nested.len() - 1]).is_ok());
}

// -----------------------------------------------------------------------------
// Encoding failures
// -----------------------------------------------------------------------------

#[test]
fn integers_outside_i64_are_rejected() {
    assert_eq!(u64::MAX.to_bencode(), Err(Error::InvalidInput));
    assert_eq!(encode(&vec![1u128 << 64]), Err(Error::InvalidInput));
    assert_eq!(encode(&(i64::MAX as u64)), Ok(b"i9223372036854775807e".to_vec()));
}
