use alloc::string::String;
use alloc::vec::Vec;

use bstr::BStr;
use thiserror::Error;

/// A structural error found while scanning or materializing a document.
///
/// Every variant carries the absolute byte offset into the original document
/// at which the problem was found, so errors from nested sub-ranges still
/// point at the right place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A structural byte (colon, comma, brace, bracket) was expected but
    /// something else was found.
    #[error("expected '{expected}' but found '{found}' at byte {at}")]
    UnexpectedToken {
        /// The structural byte that was required here.
        expected: char,
        /// The byte actually present.
        found: char,
        /// Absolute offset of the offending byte.
        at: usize,
    },

    /// The buffer ended while more input was required.
    #[error("unexpected end of input at byte {at}")]
    UnexpectedEndOfInput {
        /// Absolute offset at which input ran out.
        at: usize,
    },

    /// A quoted string was expected but the position does not hold a `"`.
    #[error("expected '\"' to start a string but found '{found}' at byte {at}")]
    ExpectedStringStart {
        /// The byte actually present.
        found: char,
        /// Absolute offset of the offending byte.
        at: usize,
    },

    /// A string's closing quote was never found before the end of input.
    #[error("string starting at byte {start} is never terminated")]
    UnterminatedString {
        /// Absolute offset of the opening quote.
        start: usize,
    },

    /// Bytes at a literal position did not spell `true`, `false`, or `null`.
    #[error("unknown literal \"{}\" at byte {at}", BStr::new(.found))]
    UnknownLiteral {
        /// The bytes that were found instead of the expected literal.
        found: Vec<u8>,
        /// Absolute offset where the literal was expected.
        at: usize,
    },

    /// A `{`/`[` region was never closed before the end of input.
    #[error("container starting at byte {start} is never closed")]
    UnbalancedContainer {
        /// Absolute offset of the opening delimiter.
        start: usize,
    },

    /// A property value (or array element) starts with a byte the engine
    /// does not materialize, such as a bare numeric literal.
    #[error("invalid property value starting with '{found}' at byte {at}")]
    InvalidPropertyValue {
        /// The first byte of the rejected value.
        found: char,
        /// Absolute offset of the rejected value.
        at: usize,
    },
}

/// Any failure surfaced by a decode entry point or a [`Reader`] accessor.
///
/// Both failure families share this one channel: parse errors
/// (the document is malformed) arrive through [`ReadError::Parse`], while the
/// remaining variants are access errors (the document is fine but the query
/// does not match it). Nothing is ever defaulted or swallowed; a document
/// either fully decodes or the call fails.
///
/// [`Reader`]: crate::Reader
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReadError {
    /// The document itself is malformed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// An accessor was called with an empty property name.
    #[error("property name must not be empty")]
    EmptyPropertyName,

    /// The materialized object has no property under the requested name.
    #[error("no property named \"{name}\"")]
    MissingField {
        /// The name that was looked up.
        name: String,
    },

    /// The stored entry's kind does not match the requested accessor.
    #[error("property \"{name}\" holds a {found} value, not {expected}")]
    TypeMismatch {
        /// The name that was looked up.
        name: String,
        /// What the accessor required.
        expected: &'static str,
        /// What the entry actually holds.
        found: &'static str,
    },

    /// The stored text does not parse as the requested numeric type.
    #[error("property \"{name}\" does not hold a valid {expected}: \"{text}\"")]
    NumberFormat {
        /// The name that was looked up.
        name: String,
        /// The numeric type that was requested.
        expected: &'static str,
        /// The text that failed to parse.
        text: String,
    },
}
