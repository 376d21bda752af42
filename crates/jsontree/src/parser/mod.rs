//! Recursive-descent JSON parser.
//!
//! [`Parser::parse_value`] is the dispatcher: it skips whitespace, looks at
//! one byte and hands off to the production that byte starts. Objects and
//! arrays call back into it for every member and element, so the call stack
//! mirrors the nesting of the document. The depth of that recursion is
//! capped by [`ParserOptions::max_depth`].
//!
//! Every production returns on the first error; nothing is recovered and no
//! partial tree is returned.

mod literal;
mod number;
mod string;

use core::iter::FusedIterator;

use crate::{
    cursor::Cursor,
    error::{ErrorKind, ParseError},
    options::ParserOptions,
    value::{Array, Map, Value},
};

pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    options: ParserOptions,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(input: &'a [u8], options: ParserOptions) -> Result<Self, ParseError> {
        let parser = Self {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        };
        parser.check_input_len(input.len())?;
        Ok(parser)
    }

    fn check_input_len(&self, len: usize) -> Result<(), ParseError> {
        match self.options.max_input_len {
            Some(limit) if len > limit => Err(self
                .cursor
                .error_at(ErrorKind::InputTooLarge { limit }, 0)),
            _ => Ok(()),
        }
    }

    /// Parses exactly one document; only whitespace may surround it.
    pub(crate) fn parse_document(mut self) -> Result<Value, ParseError> {
        let result = self.parse_root();
        if let Err(err) = &result {
            log_failure(err);
        }
        result
    }

    fn parse_root(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        let value = self.parse_value()?;
        self.cursor.skip_whitespace();
        if !self.cursor.is_at_end() {
            return Err(self.cursor.error(ErrorKind::TrailingContent));
        }
        Ok(value)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        self.cursor.skip_whitespace();
        match self.cursor.peek_opt() {
            Some(b'{') => self.parse_object(),
            Some(b'[') => self.parse_array(),
            Some(b'"') => string::parse_string(&mut self.cursor).map(Value::String),
            Some(b'-' | b'0'..=b'9') => number::parse_number(&mut self.cursor).map(Value::Number),
            Some(b't' | b'f' | b'n' | b'T' | b'F' | b'N') => literal::parse_literal(&mut self.cursor),
            found => Err(self.cursor.error(ErrorKind::UnexpectedToken { found })),
        }
    }

    /// Accounts for one more level of nesting before a container is opened.
    fn enter(&mut self) -> Result<(), ParseError> {
        if self.depth >= self.options.max_depth {
            return Err(self.cursor.error(ErrorKind::NestingTooDeep {
                limit: self.options.max_depth,
            }));
        }
        self.depth += 1;
        trace!(depth = self.depth, offset = self.cursor.offset(), "enter container");
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    fn parse_object(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.expect_byte(b'{')?;
        self.cursor.skip_whitespace();

        let mut map = Map::default();
        if self.cursor.peek()? == b'}' {
            self.cursor.bump(1);
            self.leave();
            return Ok(Value::Object(map));
        }

        loop {
            let key = self.parse_key()?;
            self.cursor.skip_whitespace();
            if self.cursor.peek()? != b':' {
                return Err(self.cursor.error(ErrorKind::ExpectedColon));
            }
            self.cursor.bump(1);
            let value = self.parse_value()?;
            // Duplicate keys: the later member replaces the earlier one.
            map.insert(key, value);

            self.cursor.skip_whitespace();
            match self.cursor.peek()? {
                b',' => {
                    self.cursor.bump(1);
                    self.cursor.skip_whitespace();
                    if self.cursor.peek()? == b'}' {
                        return Err(self.cursor.error(ErrorKind::TrailingComma));
                    }
                }
                b'}' => {
                    self.cursor.bump(1);
                    break;
                }
                _ => return Err(self.cursor.error(ErrorKind::ExpectedCommaOrBrace)),
            }
        }

        self.leave();
        Ok(Value::Object(map))
    }

    fn parse_key(&mut self) -> Result<alloc::string::String, ParseError> {
        if self.cursor.peek()? != b'"' {
            return Err(self.cursor.error(ErrorKind::ExpectedString));
        }
        string::parse_string(&mut self.cursor)
    }

    fn parse_array(&mut self) -> Result<Value, ParseError> {
        self.enter()?;
        self.cursor.expect_byte(b'[')?;
        self.cursor.skip_whitespace();

        let mut items = Array::new();
        if self.cursor.peek()? == b']' {
            self.cursor.bump(1);
            self.leave();
            return Ok(Value::Array(items));
        }

        loop {
            items.push(self.parse_value()?);

            self.cursor.skip_whitespace();
            match self.cursor.peek()? {
                b',' => {
                    self.cursor.bump(1);
                    self.cursor.skip_whitespace();
                    if self.cursor.peek()? == b']' {
                        return Err(self.cursor.error(ErrorKind::TrailingComma));
                    }
                }
                b']' => {
                    self.cursor.bump(1);
                    break;
                }
                _ => return Err(self.cursor.error(ErrorKind::ExpectedCommaOrBracket)),
            }
        }

        self.leave();
        Ok(Value::Array(items))
    }
}

#[allow(unused_variables)]
fn log_failure(err: &ParseError) {
    debug!(
        kind = %err.kind(),
        offset = err.offset(),
        line = err.line(),
        column = err.column(),
        "rejected JSON document"
    );
}

/// Iterator over the JSON documents of one buffer, returned by
/// [`parse_many`](crate::parse_many).
///
/// Documents may be separated by whitespace (as in JSON Lines) or simply
/// concatenated. Each call to `next` parses one document. After the first
/// error the iterator is exhausted.
pub struct Values<'a> {
    parser: Parser<'a>,
    pending: Option<ParseError>,
    done: bool,
}

impl<'a> Values<'a> {
    pub(crate) fn new(input: &'a [u8], options: ParserOptions) -> Self {
        let parser = Parser {
            cursor: Cursor::new(input),
            options,
            depth: 0,
        };
        let pending = parser.check_input_len(input.len()).err();
        Self {
            parser,
            pending,
            done: false,
        }
    }
}

impl Iterator for Values<'_> {
    type Item = Result<Value, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if let Some(err) = self.pending.take() {
            self.done = true;
            log_failure(&err);
            return Some(Err(err));
        }

        self.parser.cursor.skip_whitespace();
        if self.parser.cursor.is_at_end() {
            self.done = true;
            return None;
        }
        let result = self.parser.parse_value();
        if let Err(err) = &result {
            self.done = true;
            log_failure(err);
        }
        Some(result)
    }
}

impl FusedIterator for Values<'_> {}

impl core::fmt::Debug for Values<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Values")
            .field("offset", &self.parser.cursor.offset())
            .field("done", &self.done)
            .finish_non_exhaustive()
    }
}
