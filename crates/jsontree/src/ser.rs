//! `serde::Serialize` for [`Value`], in the natural JSON shape.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::Value;

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Number(n) => match self.as_i64() {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            Value::String(s) => serializer.serialize_str(s),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (k, v) in map {
                    out.serialize_entry(k, v)?;
                }
                out.end()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parse;

    #[test]
    fn serializes_in_document_order() {
        let value = parse(r#"{"b": [1, 2.5, -0], "a": {"x": null, "y": "s"}, "c": true}"#).unwrap();
        let text = serde_json::to_string(&value).unwrap();
        assert_eq!(text, r#"{"b":[1,2.5,0],"a":{"x":null,"y":"s"},"c":true}"#);
    }

    #[test]
    fn agrees_with_serde_json_value() {
        let input = r#"[{"k": "é\n"}, 12, -7, 0.1, false]"#;
        let ours = serde_json::to_value(parse(input).unwrap()).unwrap();
        let theirs: serde_json::Value = serde_json::from_str(input).unwrap();
        assert_eq!(ours, theirs);
    }
}
