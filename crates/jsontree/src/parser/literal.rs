use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    value::Value,
};

/// The three keyword literals of JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Literal {
    Null,
    True,
    False,
}

impl Literal {
    /// The literal a keyword starting with `first` must be. Capitalized
    /// spellings map to the keyword they misspell.
    fn from_first_byte(first: u8) -> Option<Self> {
        match first.to_ascii_lowercase() {
            b'n' => Some(Self::Null),
            b't' => Some(Self::True),
            b'f' => Some(Self::False),
            _ => None,
        }
    }

    fn keyword(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::True => "true",
            Self::False => "false",
        }
    }

    fn value(self) -> Value {
        match self {
            Self::Null => Value::Null,
            Self::True => Value::Boolean(true),
            Self::False => Value::Boolean(false),
        }
    }
}

/// Parses `true`, `false` or `null`; the keyword is consumed only when it
/// matches in full.
pub(crate) fn parse_literal(cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
    let found = cursor.peek_opt();
    let literal = found
        .and_then(Literal::from_first_byte)
        .ok_or_else(|| cursor.error(ErrorKind::UnexpectedToken { found }))?;
    let keyword = literal.keyword();
    cursor.expect_literal(keyword)?;
    cursor.bump(keyword.len());
    Ok(literal.value())
}
