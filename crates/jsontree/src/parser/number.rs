//! Number literals.
//!
//! The lexeme is validated against the JSON grammar
//!
//! ```text
//! number = [ "-" ] ( "0" / digit1-9 *digit ) [ "." 1*digit ] [ ( "e" / "E" ) [ "+" / "-" ] 1*digit ]
//! ```
//!
//! before being handed to `f64::from_str`, which rounds correctly.

use bstr::ByteSlice;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
};

pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<f64, ParseError> {
    let start = cursor.offset();
    if cursor.peek_opt() == Some(b'-') {
        cursor.bump(1);
    }

    match cursor.peek_opt() {
        Some(b'0') => {
            cursor.bump(1);
            if let Some(b'0'..=b'9') = cursor.peek_opt() {
                return Err(cursor.error(ErrorKind::InvalidNumber("leading zero")));
            }
        }
        Some(b'1'..=b'9') => {
            skip_digits(cursor);
        }
        _ => return Err(cursor.error(ErrorKind::InvalidNumber("expected digit"))),
    }

    if cursor.peek_opt() == Some(b'.') {
        cursor.bump(1);
        if skip_digits(cursor) == 0 {
            return Err(cursor.error(ErrorKind::InvalidNumber(
                "expected digit after decimal point",
            )));
        }
    }

    if let Some(b'e' | b'E') = cursor.peek_opt() {
        cursor.bump(1);
        if let Some(b'+' | b'-') = cursor.peek_opt() {
            cursor.bump(1);
        }
        if skip_digits(cursor) == 0 {
            return Err(cursor.error(ErrorKind::InvalidNumber("expected digit in exponent")));
        }
    }

    let lexeme = cursor
        .consumed_since(start)
        .to_str()
        .map_err(|_| cursor.error_at(ErrorKind::InvalidNumber("malformed"), start))?;
    let n: f64 = lexeme
        .parse()
        .map_err(|_| cursor.error_at(ErrorKind::InvalidNumber("malformed"), start))?;
    if n.is_infinite() {
        return Err(cursor.error_at(ErrorKind::NumberOutOfRange, start));
    }
    Ok(n)
}

fn skip_digits(cursor: &mut Cursor<'_>) -> usize {
    let n = cursor
        .remaining()
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    cursor.bump(n);
    n
}
