//! String literals: escape decoding and UTF-8 validation.

use alloc::string::String;

use bstr::ByteSlice;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, EscapeError, ParseError},
};

/// Parses a string literal; the cursor must be on the opening quote.
///
/// Runs of plain bytes are validated and copied in one step. Such a run can
/// only end on ASCII (`"`, `\` or a control byte), so it never splits a
/// multi-byte sequence of valid UTF-8.
pub(crate) fn parse_string(cursor: &mut Cursor<'_>) -> Result<String, ParseError> {
    cursor.expect_byte(b'"')?;
    let mut out = String::new();
    loop {
        let remaining = cursor.remaining();
        let run = remaining
            .iter()
            .position(|&b| b == b'"' || b == b'\\' || b < 0x20)
            .unwrap_or(remaining.len());
        if run > 0 {
            match remaining[..run].to_str() {
                Ok(text) => out.push_str(text),
                Err(e) => {
                    return Err(
                        cursor.error_at(ErrorKind::InvalidUtf8, cursor.offset() + e.valid_up_to())
                    );
                }
            }
            cursor.bump(run);
        }

        match cursor.peek_opt() {
            None => return Err(cursor.error(ErrorKind::UnterminatedString)),
            Some(b'"') => {
                cursor.bump(1);
                return Ok(out);
            }
            Some(b'\\') => out.push(parse_escape(cursor)?),
            Some(b) => return Err(cursor.error(ErrorKind::ControlCharacter(b))),
        }
    }
}

/// Decodes one escape sequence starting at the backslash.
fn parse_escape(cursor: &mut Cursor<'_>) -> Result<char, ParseError> {
    let start = cursor.offset();
    cursor.bump(1);
    let at = cursor.offset();
    let b = cursor
        .advance()
        .map_err(|_| cursor.error(ErrorKind::UnterminatedString))?;
    Ok(match b {
        b'"' => '"',
        b'\\' => '\\',
        b'/' => '/',
        b'b' => '\u{8}',
        b'f' => '\u{c}',
        b'n' => '\n',
        b'r' => '\r',
        b't' => '\t',
        b'u' => return parse_unicode_escape(cursor, start),
        other => {
            return Err(cursor.error_at(
                ErrorKind::InvalidEscape(EscapeError::UnknownEscape(other)),
                at,
            ));
        }
    })
}

/// Decodes the digits of a `\u` escape, joining a high surrogate with the
/// low surrogate escape that must follow it.
fn parse_unicode_escape(cursor: &mut Cursor<'_>, start: usize) -> Result<char, ParseError> {
    let lone = |cursor: &Cursor<'_>, unit: u16| {
        cursor.error_at(
            ErrorKind::InvalidEscape(EscapeError::LoneSurrogate(unit)),
            start,
        )
    };

    let first = read_hex4(cursor)?;
    let code = match first {
        0xD800..=0xDBFF => {
            let rest = cursor.remaining();
            if !rest.starts_with(b"\\u") {
                return Err(if b"\\u".starts_with(rest) {
                    cursor.error_at(ErrorKind::UnterminatedString, cursor.offset() + rest.len())
                } else {
                    lone(cursor, first)
                });
            }
            cursor.bump(2);
            let second = read_hex4(cursor)?;
            if !(0xDC00..=0xDFFF).contains(&second) {
                return Err(lone(cursor, first));
            }
            0x10000 + ((u32::from(first) - 0xD800) << 10) + (u32::from(second) - 0xDC00)
        }
        0xDC00..=0xDFFF => return Err(lone(cursor, first)),
        _ => u32::from(first),
    };
    char::from_u32(code).ok_or_else(|| lone(cursor, first))
}

fn read_hex4(cursor: &mut Cursor<'_>) -> Result<u16, ParseError> {
    let mut acc: u16 = 0;
    for _ in 0..4 {
        let Some(b) = cursor.peek_opt() else {
            return Err(cursor.error(ErrorKind::UnterminatedString));
        };
        let digit = hex_val(b).ok_or_else(|| {
            cursor.error(ErrorKind::InvalidEscape(EscapeError::InvalidHexDigit(b)))
        })?;
        acc = (acc << 4) | digit;
        cursor.bump(1);
    }
    Ok(acc)
}

#[inline]
fn hex_val(b: u8) -> Option<u16> {
    match b {
        b'0'..=b'9' => Some(u16::from(b - b'0')),
        b'a'..=b'f' => Some(u16::from(b - b'a' + 10)),
        b'A'..=b'F' => Some(u16::from(b - b'A' + 10)),
        _ => None,
    }
}
