#![allow(missing_docs, dead_code)]

use jsontree::{Map, Value};

/// Converts `serde_json`'s tree into ours, so `serde_json` can act as the
/// reference parser.
pub fn from_serde_json(value: &serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Boolean(*b),
        serde_json::Value::Number(n) => n.as_f64().map_or(Value::Null, Value::Number),
        serde_json::Value::String(s) => Value::String(s.clone()),
        serde_json::Value::Array(items) => items.iter().map(from_serde_json).collect(),
        serde_json::Value::Object(members) => Value::Object(
            members
                .iter()
                .map(|(k, v)| (k.clone(), from_serde_json(v)))
                .collect::<Map>(),
        ),
    }
}

pub const DOCUMENT: &str = r#"
{
    "request": {
        "filename": "example.rs",
        "language": "rust",
        "options": {
            "opt_level": "2",
            "features": [
                "serde",
                "tokio"
            ]
        }
    },
    "snippets": [
        "fn main() {}",
        "println!(\"hi\")"
    ],
    "entities": [
        {
            "type": "function",
            "name": "main",
            "line": 1
        },
        {
            "type": "macro",
            "name": "println",
            "line": 2
        }
    ],
    "matrix": [[1, 2, 3], [4.5, -6e-1, 7E2]],
    "escapes": "tab\t quote\" slash\/ unicode\u00e9 pair\ud834\udd1e",
    "flags": [true, false, null],
    "empty": {"object": {}, "array": []}
}
"#;
