//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value, together with the [`Map`] and [`Array`] containers it is built from.

use alloc::{string::String, vec::Vec};
use core::hash::BuildHasherDefault;

use ahash::AHasher;
use indexmap::IndexMap;

/// Object container: keys in first-insertion order, unique per object.
///
/// Inserting a key that is already present replaces its value and keeps its
/// original position, which is how duplicate keys in a document resolve
/// (last write wins).
pub type Map = IndexMap<String, Value, BuildHasherDefault<AHasher>>;

/// Array container.
pub type Array = Vec<Value>;

/// Largest integer magnitude an `f64` represents exactly (2^53 - 1).
const MAX_SAFE_INTEGER: i64 = (1i64 << 53) - 1;

/// A JSON value as defined by [RFC 8259].
///
/// The `Value` enum can represent any JSON data type:
///
/// - Null
/// - Boolean
/// - Number
/// - String
/// - Array
/// - Object
///
/// JSON does not distinguish integers from floating point numbers, so every
/// number is held as an `f64`; integers up to 2^53 round-trip exactly.
///
/// # Examples
///
/// ```
/// use jsontree::{Map, Value};
///
/// let mut map = Map::default();
/// map.insert("key".to_string(), Value::from("value"));
/// let v = Value::Object(map);
/// assert_eq!(v.get("key").and_then(Value::as_str), Some("value"));
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// `null`
    #[default]
    Null,
    /// `true` or `false`
    Boolean(bool),
    /// Any JSON number.
    Number(f64),
    /// A string with all escapes decoded.
    String(String),
    /// An ordered sequence of values.
    Array(Array),
    /// A mapping from unique string keys to values.
    Object(Map),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.into())
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Self::Object(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::Object(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Boolean`].
    ///
    /// [`Boolean`]: Value::Boolean
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Boolean(..))
    }

    /// Returns `true` if the value is [`Number`].
    ///
    /// [`Number`]: Value::Number
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`].
    ///
    /// [`String`]: Value::String
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`].
    ///
    /// [`Array`]: Value::Array
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`].
    ///
    /// [`Object`]: Value::Object
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The boolean payload, if any.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if any.
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The numeric payload as an integer, if it is integral and within
    /// ±(2^53 - 1), the range an `f64` holds without loss.
    ///
    /// ```
    /// use jsontree::Value;
    ///
    /// assert_eq!(Value::Number(42.0).as_i64(), Some(42));
    /// assert_eq!(Value::Number(4.5).as_i64(), None);
    /// assert_eq!(Value::Number(1e300).as_i64(), None);
    /// ```
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )]
    pub fn as_i64(&self) -> Option<i64> {
        let Self::Number(n) = *self else {
            return None;
        };
        // `as` saturates and maps NaN to 0, so the round trip rejects both.
        let i = n as i64;
        ((i as f64) == n && (-MAX_SAFE_INTEGER..=MAX_SAFE_INTEGER).contains(&i)).then_some(i)
    }

    /// The string payload, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements of an array.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The members of an object.
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(m) => Some(m),
            _ => None,
        }
    }

    /// Looks up `key` when `self` is an object.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object()?.get(key)
    }

    /// Looks up element `index` when `self` is an array.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        self.as_array()?.get(index)
    }

    /// Looks up a value by [RFC 6901] JSON Pointer.
    ///
    /// The empty pointer addresses `self`. Reference tokens are unescaped
    /// (`~1` to `/`, then `~0` to `~`) and array indices must be plain
    /// decimal without leading zeros.
    ///
    /// ```
    /// use jsontree::{parse, Value};
    ///
    /// let doc = parse(r#"{"a/b": [10, {"~k": null}]}"#).unwrap();
    /// assert_eq!(doc.pointer("/a~1b/0"), Some(&Value::from(10)));
    /// assert_eq!(doc.pointer("/a~1b/1/~0k"), Some(&Value::Null));
    /// assert_eq!(doc.pointer("/a~1b/01"), None);
    /// ```
    ///
    /// [RFC 6901]: https://datatracker.ietf.org/doc/html/rfc6901
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        if pointer.is_empty() {
            return Some(self);
        }
        pointer
            .strip_prefix('/')?
            .split('/')
            .map(|token| token.replace("~1", "/").replace("~0", "~"))
            .try_fold(self, |target, token| match target {
                Self::Object(map) => map.get(token.as_str()),
                Self::Array(list) => parse_index(&token).and_then(|i| list.get(i)),
                _ => None,
            })
    }
}

fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty()
        || !token.bytes().all(|b| b.is_ascii_digit())
        || (token.len() > 1 && token.starts_with('0'))
    {
        return None;
    }
    token.parse().ok()
}
