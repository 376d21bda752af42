#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use jsontree::{ParserOptions, parse_many, parse_with_options};
use libfuzzer_sys::fuzz_target;
use serde_json::{Map, Value};

#[derive(Debug)]
struct ArbitraryValue(Value);

impl<'a> Arbitrary<'a> for ArbitraryValue {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let node_type = u.choose_index(21)?;
        let value = match node_type {
            0 => Value::Null,
            1 => Value::Bool(u.arbitrary()?),
            2 => {
                let n: f64 = u.arbitrary()?;
                Value::Number(
                    serde_json::Number::from_f64(n).ok_or(arbitrary::Error::IncorrectFormat)?,
                )
            }
            3..=10 => Value::String(u.arbitrary()?),
            11..=15 => {
                let elems: Vec<ArbitraryValue> = u.arbitrary()?;
                Value::Array(elems.into_iter().map(|v| v.0).collect())
            }
            16..=20 => {
                let m: Vec<(String, ArbitraryValue)> = u.arbitrary()?;
                Value::Object(Map::from_iter(m.into_iter().map(|(k, v)| (k, v.0))))
            }
            _ => Err(arbitrary::Error::IncorrectFormat)?,
        };
        Ok(ArbitraryValue(value))
    }
}

fn to_tree(value: &Value) -> jsontree::Value {
    match value {
        Value::Null => jsontree::Value::Null,
        Value::Bool(b) => jsontree::Value::Boolean(*b),
        Value::Number(n) => n.as_f64().map_or(jsontree::Value::Null, jsontree::Value::Number),
        Value::String(s) => jsontree::Value::String(s.clone()),
        Value::Array(items) => items.iter().map(to_tree).collect(),
        Value::Object(members) => members.iter().map(|(k, v)| (k.as_str(), to_tree(v))).collect(),
    }
}

/// Raw bytes: never panic, and agree with `serde_json` whenever it accepts.
fn raw(data: &[u8], options: ParserOptions) {
    let ours = parse_with_options(data, options);
    if let Ok(theirs) = serde_json::from_slice::<Value>(data) {
        assert_eq!(ours.expect("serde_json accepted this input"), to_tree(&theirs));
    }
    for _ in parse_many(data, options) {}
}

/// Structured: every document `serde_json` writes must parse back.
fn structured(data: &[u8]) {
    let Ok(ArbitraryValue(value)) = ArbitraryValue::arbitrary(&mut Unstructured::new(data)) else {
        return;
    };
    let expected = to_tree(&value);
    let options = ParserOptions {
        max_depth: 4096,
        max_input_len: None,
    };
    let compact = serde_json::to_string(&value).expect("serializable");
    let pretty = serde_json::to_string_pretty(&value).expect("serializable");
    assert_eq!(parse_with_options(&compact, options).expect("compact output parses"), expected);
    assert_eq!(parse_with_options(&pretty, options).expect("pretty output parses"), expected);
}

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    if flags & 1 != 0 {
        structured(rest);
    } else {
        let options = ParserOptions {
            // At least `serde_json`'s own recursion limit of 128.
            max_depth: 128 + usize::from(flags >> 1),
            max_input_len: None,
        };
        raw(rest, options);
    }
});
