//! A recursive-descent JSON parser that turns a resident byte buffer into an
//! owned [`Value`] tree.
//!
//! ```rust
//! use jsontree::{parse, Value};
//!
//! let value = parse(r#"{"name": "jsontree", "tags": ["json", "parser"]}"#).unwrap();
//! assert_eq!(value.get("name"), Some(&Value::from("jsontree")));
//! assert_eq!(value.pointer("/tags/1").and_then(Value::as_str), Some("parser"));
//! ```
//!
//! Parsing is fail-fast: the first grammar violation aborts the whole
//! document and is reported as a [`ParseError`] carrying its [`ErrorKind`],
//! byte offset, and line/column.

#![no_std]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod trace;

mod cursor;
mod error;
mod options;
mod parser;
mod value;

#[cfg(feature = "serde")]
mod ser;

#[cfg(test)]
mod tests;

pub use error::{ErrorKind, EscapeError, ParseError};
pub use options::ParserOptions;
pub use parser::Values;
pub use value::{Array, Map, Value};

/// Parses a complete JSON document with the default [`ParserOptions`].
///
/// Leading and trailing whitespace is accepted; any other byte after the
/// root value is reported as [`ErrorKind::TrailingContent`]. The root may be
/// any of the six value kinds.
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered.
///
/// # Examples
///
/// ```rust
/// use jsontree::{parse, ErrorKind, Value};
///
/// assert_eq!(parse("true").unwrap(), Value::Boolean(true));
/// assert_eq!(parse(b"[1,2,]").unwrap_err().kind(), ErrorKind::TrailingComma);
/// ```
pub fn parse<T>(input: &T) -> Result<Value, ParseError>
where
    T: AsRef<[u8]> + ?Sized,
{
    parse_with_options(input, ParserOptions::default())
}

/// Parses a complete JSON document with explicit [`ParserOptions`].
///
/// # Errors
///
/// Returns the first [`ParseError`] encountered, including
/// [`ErrorKind::NestingTooDeep`] and [`ErrorKind::InputTooLarge`] when the
/// configured limits are exceeded.
pub fn parse_with_options<T>(input: &T, options: ParserOptions) -> Result<Value, ParseError>
where
    T: AsRef<[u8]> + ?Sized,
{
    parser::Parser::new(input.as_ref(), options)?.parse_document()
}

/// Returns an iterator over a whitespace-separated sequence of JSON documents
/// held in one buffer, such as JSON Lines.
///
/// The iterator yields one `Result` per document and stops after the first
/// error.
///
/// ```rust
/// use jsontree::{parse_many, ParserOptions, Value};
///
/// let docs: Result<Vec<_>, _> = parse_many("1\n\"two\"\n[3]\n", ParserOptions::default()).collect();
/// assert_eq!(
///     docs.unwrap(),
///     vec![Value::from(1), Value::from("two"), Value::Array(vec![Value::from(3)])]
/// );
/// ```
#[must_use]
pub fn parse_many<T>(input: &T, options: ParserOptions) -> Values<'_>
where
    T: AsRef<[u8]> + ?Sized,
{
    Values::new(input.as_ref(), options)
}
