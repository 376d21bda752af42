//! Byte-level read position over a resident input buffer.
//!
//! Every grammar production is built from the primitives here. The cursor
//! only moves forward, and `offset <= input.len()` holds at all times.

use crate::error::{ErrorKind, ParseError};

#[derive(Debug)]
pub(crate) struct Cursor<'a> {
    input: &'a [u8],
    offset: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a [u8]) -> Self {
        Self { input, offset: 0 }
    }

    #[inline]
    pub(crate) fn offset(&self) -> usize {
        self.offset
    }

    #[inline]
    pub(crate) fn is_at_end(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Unread bytes.
    #[inline]
    pub(crate) fn remaining(&self) -> &'a [u8] {
        self.input.get(self.offset..).unwrap_or_default()
    }

    /// Bytes consumed since `start`.
    #[inline]
    pub(crate) fn consumed_since(&self, start: usize) -> &'a [u8] {
        self.input.get(start..self.offset).unwrap_or_default()
    }

    /// Current byte without consuming it.
    #[inline]
    pub(crate) fn peek(&self) -> Result<u8, ParseError> {
        self.peek_opt()
            .ok_or_else(|| self.error(ErrorKind::UnexpectedEnd))
    }

    #[inline]
    pub(crate) fn peek_opt(&self) -> Option<u8> {
        self.input.get(self.offset).copied()
    }

    /// Consumes and returns the current byte.
    #[inline]
    pub(crate) fn advance(&mut self) -> Result<u8, ParseError> {
        let b = self.peek()?;
        self.offset += 1;
        Ok(b)
    }

    /// Skips `n` bytes the caller has already inspected.
    #[inline]
    pub(crate) fn bump(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.input.len());
    }

    /// Consumes `expected` if it is the current byte. Nothing is consumed on
    /// mismatch.
    pub(crate) fn expect_byte(&mut self, expected: u8) -> Result<(), ParseError> {
        let found = self.peek()?;
        if found != expected {
            return Err(self.error(ErrorKind::UnexpectedByte { expected, found }));
        }
        self.offset += 1;
        Ok(())
    }

    /// Checks that the next `literal.len()` bytes spell `literal`, without
    /// consuming them.
    ///
    /// A literal ending exactly at the end of the input matches. If the input
    /// ends early but what remains is a prefix of `literal`, the failure is
    /// [`ErrorKind::UnexpectedEnd`]; any other mismatch is
    /// [`ErrorKind::InvalidLiteral`].
    pub(crate) fn expect_literal(&self, literal: &'static str) -> Result<(), ParseError> {
        let expected = literal.as_bytes();
        let available = self.remaining();
        if self.offset + expected.len() <= self.input.len() {
            if available.starts_with(expected) {
                return Ok(());
            }
        } else if expected.starts_with(available) {
            return Err(self.error_at(ErrorKind::UnexpectedEnd, self.input.len()));
        }
        Err(self.error(ErrorKind::InvalidLiteral { expected: literal }))
    }

    /// Consumes a maximal run of JSON whitespace. Never fails.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek_opt() {
            self.offset += 1;
        }
    }

    /// Builds an error located at the current offset.
    pub(crate) fn error(&self, kind: ErrorKind) -> ParseError {
        self.error_at(kind, self.offset)
    }

    pub(crate) fn error_at(&self, kind: ErrorKind, offset: usize) -> ParseError {
        ParseError::new(kind, self.input, offset)
    }
}
