//! Single-level container materialization.
//!
//! One pass over a balanced region decodes scalar values in place and
//! records nested containers as raw byte ranges, without recursing into
//! them. Separator policy is lenient: entries are comma-separated and a
//! trailing comma before the closing delimiter is tolerated.
//!
//! Bare numeric literals are not materialized; a value starting with a digit
//! (or anything other than a quote, delimiter, `t`, or `f`) fails with
//! [`ParseError::InvalidPropertyValue`]. A `null` literal is recognized but
//! likewise rejected, since no entry kind exists for it.

use core::ops::Range;

use crate::entry::{Entry, MaterializedArray, MaterializedObject};
use crate::error::ParseError;
use crate::scanner::{
    BRACE_CLOSE, BRACE_OPEN, BRACKET_CLOSE, BRACKET_OPEN, COLON, COMMA, FALSE, NULL, QUOTE,
    Scanner, TRUE,
};

/// Splits an object region into named entries.
pub(crate) fn materialize_object(
    buf: &[u8],
    range: Range<usize>,
) -> Result<MaterializedObject, ParseError> {
    let mut scanner = Scanner::new(buf, range);
    scanner.skip_whitespace();
    scanner.expect_token(BRACE_OPEN)?;
    let mut object = MaterializedObject::new();
    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput { at: scanner.pos() }),
            Some(BRACE_CLOSE) => {
                scanner.expect_token(BRACE_CLOSE)?;
                return Ok(object);
            }
            Some(_) => {}
        }
        let name = scanner.read_quoted_string()?;
        scanner.expect_token(COLON)?;
        scanner.skip_whitespace();
        let entry = read_value(&mut scanner)?;
        object.insert(name, entry);
        if !expect_separator(&mut scanner, BRACE_CLOSE)? {
            return Ok(object);
        }
    }
}

/// Splits an array region into entries. Every element must itself be a
/// container; scalar elements are out of scope for this engine.
pub(crate) fn materialize_array(
    buf: &[u8],
    range: Range<usize>,
) -> Result<MaterializedArray, ParseError> {
    let mut scanner = Scanner::new(buf, range);
    scanner.skip_whitespace();
    scanner.expect_token(BRACKET_OPEN)?;
    let mut array = MaterializedArray::new();
    loop {
        scanner.skip_whitespace();
        match scanner.peek() {
            None => return Err(ParseError::UnexpectedEndOfInput { at: scanner.pos() }),
            Some(BRACKET_CLOSE) => {
                scanner.expect_token(BRACKET_CLOSE)?;
                return Ok(array);
            }
            Some(BRACE_OPEN | BRACKET_OPEN) => {
                array.push(Entry::Container(scanner.find_balanced()?));
            }
            Some(found) => {
                return Err(ParseError::InvalidPropertyValue {
                    found: char::from(found),
                    at: scanner.pos(),
                });
            }
        }
        if !expect_separator(&mut scanner, BRACKET_CLOSE)? {
            return Ok(array);
        }
    }
}

fn read_value(scanner: &mut Scanner<'_>) -> Result<Entry, ParseError> {
    match scanner.peek() {
        None => Err(ParseError::UnexpectedEndOfInput { at: scanner.pos() }),
        Some(QUOTE) => Ok(Entry::Str(scanner.read_quoted_string()?)),
        Some(BRACE_OPEN | BRACKET_OPEN) => Ok(Entry::Container(scanner.find_balanced()?)),
        Some(b't') => {
            scanner.read_literal(TRUE)?;
            Ok(Entry::Bool(true))
        }
        Some(b'f') => {
            scanner.read_literal(FALSE)?;
            Ok(Entry::Bool(false))
        }
        Some(b'n') => {
            // Recognized as a literal, but there is no entry kind for it.
            let at = scanner.pos();
            scanner.read_literal(NULL)?;
            Err(ParseError::InvalidPropertyValue { found: 'n', at })
        }
        Some(found) => Err(ParseError::InvalidPropertyValue {
            found: char::from(found),
            at: scanner.pos(),
        }),
    }
}

/// Consumes the separator after an entry. `Ok(true)` means a comma was
/// taken and more entries may follow; `Ok(false)` means the closing
/// delimiter was taken and the container is done.
fn expect_separator(scanner: &mut Scanner<'_>, close: u8) -> Result<bool, ParseError> {
    scanner.skip_whitespace();
    match scanner.peek() {
        None => Err(ParseError::UnexpectedEndOfInput { at: scanner.pos() }),
        Some(COMMA) => {
            scanner.expect_token(COMMA)?;
            Ok(true)
        }
        Some(found) if found == close => {
            scanner.expect_token(close)?;
            Ok(false)
        }
        Some(found) => Err(ParseError::UnexpectedToken {
            expected: char::from(COMMA),
            found: char::from(found),
            at: scanner.pos(),
        }),
    }
}
