//! A lazy, typed JSON decoding engine.
//!
//! `jsonlens` converts a UTF-8 JSON document into a queryable, typed
//! structure without building a generic value tree up front. An object is
//! split on first pass into a mapping from property name to an opaque entry:
//! scalar values (booleans and strings) are decoded immediately, while nested
//! objects and arrays are kept as unparsed byte ranges into the original
//! buffer. A nested range is only materialized when a caller asks for it by
//! name and expected shape, via [`Reader::read_structure`] or
//! [`Reader::read_array_of`].
//!
//! Caller-defined record types participate through the [`FromReader`] trait:
//! a type supplies a factory that consumes a [`Reader`] and produces an
//! instance, so arbitrarily nested schemas decode without the engine knowing
//! their shape in advance.
//!
//! ```
//! use jsonlens::{FromReader, ReadError, Reader, decode_object};
//!
//! struct Greeting {
//!     hello: bool,
//!     nice: bool,
//!     wir: String,
//! }
//!
//! impl FromReader for Greeting {
//!     fn from_reader(reader: &Reader<'_>) -> Result<Self, ReadError> {
//!         Ok(Self {
//!             hello: reader.read_bool("hello")?,
//!             nice: reader.read_bool("nice")?,
//!             wir: reader.read_string("wir")?,
//!         })
//!     }
//! }
//!
//! let doc = br#"{"hello": true, "nice": false, "wir": "hello my friend"}"#;
//! let greeting: Greeting = decode_object(doc).unwrap();
//! assert!(greeting.hello);
//! assert!(!greeting.nice);
//! assert_eq!(greeting.wir, "hello my friend");
//! ```
//!
//! # Scope and known gaps
//!
//! The engine deliberately covers a narrow slice of the JSON grammar:
//!
//! - Backslash escapes inside strings are **not** decoded; the first quote
//!   byte after the opening one terminates the string, so an escaped quote is
//!   misread as the terminator.
//! - Bare numeric literals are not materialized as property values;
//!   [`Reader::read_int`] and [`Reader::read_double`] parse the text of
//!   string-typed entries instead.
//! - Only space, carriage return, and line feed count as insignificant
//!   whitespace (no tabs).
//! - A trailing comma before a closing `}` or `]` is tolerated.
//! - No streaming, no serialization back to JSON.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod decode;
mod entry;
mod error;
mod materialize;
mod reader;
mod scanner;

#[cfg(test)]
mod tests;

pub use decode::{FromReader, decode_array, decode_object};
pub use entry::{Entry, MaterializedArray, MaterializedObject};
pub use error::{ParseError, ReadError};
pub use reader::Reader;
