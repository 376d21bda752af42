use core::fmt;

use bstr::ByteSlice;
use thiserror::Error;

/// A parse failure: what went wrong and where.
///
/// The position is reported both as a byte offset into the input and as a
/// 1-based line/column pair. Columns count Unicode scalar values, so they
/// match what an editor shows for UTF-8 input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at line {line} column {column}")]
pub struct ParseError {
    kind: ErrorKind,
    offset: usize,
    line: usize,
    column: usize,
}

impl ParseError {
    pub(crate) fn new(kind: ErrorKind, input: &[u8], offset: usize) -> Self {
        let consumed = &input[..offset.min(input.len())];
        let line_start = consumed.rfind_byte(b'\n').map_or(0, |i| i + 1);
        let line = consumed.iter().filter(|&&b| b == b'\n').count() + 1;
        let column = consumed[line_start..].chars().count() + 1;
        Self {
            kind,
            offset,
            line,
            column,
        }
    }

    /// The category of the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Byte offset into the input at which the failure was detected.
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// 1-based line of [`offset`](Self::offset).
    #[must_use]
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column of [`offset`](Self::offset), in characters.
    #[must_use]
    pub fn column(&self) -> usize {
        self.column
    }
}

/// The reason a document was rejected.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Input ended where more bytes were required.
    #[error("unexpected end of input")]
    UnexpectedEnd,
    /// A specific byte was required but another one was found.
    #[error("expected {}, found {}", byte_repr(.expected), byte_repr(.found))]
    UnexpectedByte {
        /// The byte the grammar required.
        expected: u8,
        /// The byte actually present.
        found: u8,
    },
    /// No value can start with the byte found (`None` at end of input).
    #[error("expected a value, found {}", found_repr(.found))]
    UnexpectedToken {
        /// The offending byte, or `None` at end of input.
        found: Option<u8>,
    },
    /// A `true`, `false` or `null` keyword was misspelled.
    #[error("invalid literal, expected `{expected}`")]
    InvalidLiteral {
        /// The keyword implied by the first byte.
        expected: &'static str,
    },
    /// The number grammar was violated.
    #[error("invalid number: {0}")]
    InvalidNumber(&'static str),
    /// A well-formed number does not fit in an `f64`.
    #[error("number out of range")]
    NumberOutOfRange,
    /// Input ended inside a string literal.
    #[error("unterminated string")]
    UnterminatedString,
    /// A backslash escape inside a string is malformed.
    #[error("invalid escape sequence: {0}")]
    InvalidEscape(EscapeError),
    /// A control character appeared unescaped inside a string.
    #[error("unescaped control character {} in string", byte_repr(.0))]
    ControlCharacter(u8),
    /// A string contains bytes that are not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
    /// An object key was required but something else was found.
    #[error("expected a string key")]
    ExpectedString,
    /// An object key was not followed by `:`.
    #[error("expected `:` after object key")]
    ExpectedColon,
    /// An object member was not followed by `,` or `}`.
    #[error("expected `,` or `}}` after object member")]
    ExpectedCommaOrBrace,
    /// An array element was not followed by `,` or `]`.
    #[error("expected `,` or `]` after array element")]
    ExpectedCommaOrBracket,
    /// A `,` was directly followed by the closing `}` or `]`.
    #[error("trailing comma")]
    TrailingComma,
    /// Non-whitespace bytes follow the root value.
    #[error("trailing content after JSON value")]
    TrailingContent,
    /// Containers are nested deeper than the configured limit.
    #[error("nesting deeper than {limit} levels")]
    NestingTooDeep {
        /// The configured [`max_depth`](crate::ParserOptions::max_depth).
        limit: usize,
    },
    /// The input is longer than the configured limit.
    #[error("input larger than {limit} bytes")]
    InputTooLarge {
        /// The configured [`max_input_len`](crate::ParserOptions::max_input_len).
        limit: usize,
    },
}

/// Detail of an [`ErrorKind::InvalidEscape`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EscapeError {
    /// The byte after `\` does not start a known escape.
    #[error("unknown escape character {}", byte_repr(.0))]
    UnknownEscape(u8),
    /// A `\u` escape contains a non-hexadecimal digit.
    #[error("invalid hex digit {} in \\u escape", byte_repr(.0))]
    InvalidHexDigit(u8),
    /// A UTF-16 surrogate escape is not part of a high/low pair.
    #[error("unpaired surrogate \\u{0:04X}")]
    LoneSurrogate(u16),
}

/// Renders a byte as a quoted character when printable, `0xNN` otherwise.
struct ByteRepr(u8);

impl fmt::Display for ByteRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_ascii_graphic() || self.0 == b' ' {
            write!(f, "'{}'", char::from(self.0))
        } else {
            write!(f, "0x{:02X}", self.0)
        }
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn byte_repr(byte: &u8) -> ByteRepr {
    ByteRepr(*byte)
}

#[allow(clippy::ref_option)]
fn found_repr(found: &Option<u8>) -> FoundRepr {
    FoundRepr(*found)
}

struct FoundRepr(Option<u8>);

impl fmt::Display for FoundRepr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(b) => ByteRepr(b).fmt(f),
            None => f.write_str("end of input"),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn line_and_column_follow_newlines() {
        let input = b"{\n  \"a\": tru\n}";
        let err = ParseError::new(ErrorKind::InvalidLiteral { expected: "true" }, input, 9);
        assert_eq!(err.line(), 2);
        assert_eq!(err.column(), 8);
        assert_eq!(err.offset(), 9);
    }

    #[test]
    fn column_counts_characters_not_bytes() {
        let input = "[\"é\", x]".as_bytes();
        let err = ParseError::new(ErrorKind::UnexpectedToken { found: Some(b'x') }, input, 7);
        assert_eq!(err.line(), 1);
        assert_eq!(err.column(), 7);
    }

    #[test]
    fn display_renders_bytes_readably() {
        let err = ParseError::new(
            ErrorKind::UnexpectedByte {
                expected: b':',
                found: b'\n',
            },
            b"x",
            0,
        );
        assert_eq!(err.to_string(), "expected ':', found 0x0A at line 1 column 1");

        let kind = ErrorKind::UnexpectedToken { found: None };
        assert_eq!(kind.to_string(), "expected a value, found end of input");

        let kind = ErrorKind::InvalidEscape(EscapeError::LoneSurrogate(0xD83D));
        assert_eq!(
            kind.to_string(),
            "invalid escape sequence: unpaired surrogate \\uD83D"
        );
    }
}
