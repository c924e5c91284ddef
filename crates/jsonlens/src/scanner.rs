//! Byte-span scanning primitives.
//!
//! `Scanner` is a cursor over the raw document bytes, bounded to one
//! sub-range but positioned by absolute offset so that errors point into the
//! original buffer even when scanning a nested region.
//!
//! Invariants
//! - Whitespace is space, carriage return, and line feed only. Tabs are not
//!   treated as insignificant.
//! - Quoted strings are scanned without backslash-escape decoding; the first
//!   quote byte after the opening one terminates the string. An escaped
//!   quote is therefore misread as the terminator. Known gap, kept.
//! - `find_balanced` counts delimiter depth while treating bytes inside
//!   quoted strings as opaque; it validates balance, not pairing.

use alloc::string::String;
use core::ops::Range;

use bstr::ByteSlice;

use crate::error::ParseError;

pub(crate) const QUOTE: u8 = b'"';
pub(crate) const COLON: u8 = b':';
pub(crate) const COMMA: u8 = b',';
pub(crate) const BRACE_OPEN: u8 = b'{';
pub(crate) const BRACE_CLOSE: u8 = b'}';
pub(crate) const BRACKET_OPEN: u8 = b'[';
pub(crate) const BRACKET_CLOSE: u8 = b']';

pub(crate) const TRUE: &[u8] = b"true";
pub(crate) const FALSE: &[u8] = b"false";
pub(crate) const NULL: &[u8] = b"null";

/// Cursor over one balanced sub-range of the document.
#[derive(Debug, Clone)]
pub(crate) struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> Scanner<'a> {
    pub(crate) fn new(buf: &'a [u8], range: Range<usize>) -> Self {
        Self {
            buf,
            pos: range.start,
            end: range.end,
        }
    }

    /// Absolute offset of the next unconsumed byte.
    pub(crate) fn pos(&self) -> usize {
        self.pos
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        (self.pos < self.end).then(|| self.buf[self.pos])
    }

    fn bump(&mut self) {
        self.pos += 1;
    }

    /// Advances past spaces, carriage returns, and line feeds.
    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b' ' | b'\r' | b'\n') = self.peek() {
            self.bump();
        }
    }

    /// Consumes one structural byte, failing if anything else is next.
    pub(crate) fn expect_token(&mut self, expected: u8) -> Result<(), ParseError> {
        match self.peek() {
            None => Err(ParseError::UnexpectedEndOfInput { at: self.pos }),
            Some(found) if found != expected => Err(ParseError::UnexpectedToken {
                expected: char::from(expected),
                found: char::from(found),
                at: self.pos,
            }),
            Some(_) => {
                self.bump();
                Ok(())
            }
        }
    }

    /// Reads a quoted string and returns its contents, undecoded.
    pub(crate) fn read_quoted_string(&mut self) -> Result<String, ParseError> {
        match self.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput { at: self.pos }),
            Some(QUOTE) => {}
            Some(found) => {
                return Err(ParseError::ExpectedStringStart {
                    found: char::from(found),
                    at: self.pos,
                });
            }
        }
        let start = self.pos;
        self.bump();
        let content = self.pos;
        while let Some(byte) = self.peek() {
            if byte == QUOTE {
                let text = self.buf[content..self.pos].to_str_lossy().into_owned();
                self.bump();
                return Ok(text);
            }
            self.bump();
        }
        Err(ParseError::UnterminatedString { start })
    }

    /// Matches a fixed literal (`true`, `false`, `null`) byte for byte.
    pub(crate) fn read_literal(&mut self, expected: &'static [u8]) -> Result<(), ParseError> {
        let end = usize::min(self.pos + expected.len(), self.end);
        let found = &self.buf[self.pos..end];
        if found != expected {
            return Err(ParseError::UnknownLiteral {
                found: found.to_vec(),
                at: self.pos,
            });
        }
        self.pos = end;
        Ok(())
    }

    /// Captures a balanced `{...}` or `[...]` region, delimiters included.
    ///
    /// A quote toggles in-string mode; bytes inside a string never affect
    /// nesting depth.
    pub(crate) fn find_balanced(&mut self) -> Result<Range<usize>, ParseError> {
        debug_assert!(matches!(self.peek(), Some(BRACE_OPEN | BRACKET_OPEN)));
        let start = self.pos;
        let mut depth = 0usize;
        let mut in_string = false;
        while let Some(byte) = self.peek() {
            match byte {
                QUOTE => in_string = !in_string,
                BRACE_OPEN | BRACKET_OPEN if !in_string => depth += 1,
                BRACE_CLOSE | BRACKET_CLOSE if !in_string => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        return Ok(start..self.pos);
                    }
                }
                _ => {}
            }
            self.bump();
        }
        Err(ParseError::UnbalancedContainer { start })
    }
}
