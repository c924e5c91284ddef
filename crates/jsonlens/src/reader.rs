//! The public handle over one materialized object.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use bstr::BStr;

use crate::decode::FromReader;
use crate::entry::{Entry, MaterializedObject};
use crate::error::ReadError;
use crate::materialize::{materialize_array, materialize_object};
use crate::scanner::{BRACE_OPEN, BRACKET_OPEN};

/// A queryable view over one materialized JSON object.
///
/// A `Reader` borrows the root document buffer. Nested containers are stored
/// as byte ranges into that buffer and materialized only on demand, so child
/// readers produced by [`Reader::read_structure`] and
/// [`Reader::read_array_of`] are independent views into the same allocation
/// rather than copies.
///
/// All accessors take a non-empty, case-sensitive property name. An empty
/// name fails with [`ReadError::EmptyPropertyName`] and an absent one with
/// [`ReadError::MissingField`]; no accessor ever returns a default.
#[derive(Clone)]
pub struct Reader<'a> {
    buf: &'a [u8],
    object: MaterializedObject,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(buf: &'a [u8], object: MaterializedObject) -> Self {
        Self { buf, object }
    }

    /// The materialized object backing this reader.
    #[must_use]
    pub fn object(&self) -> &MaterializedObject {
        &self.object
    }

    fn entry(&self, name: &str) -> Result<&Entry, ReadError> {
        if name.is_empty() {
            return Err(ReadError::EmptyPropertyName);
        }
        self.object.get(name).ok_or_else(|| ReadError::MissingField {
            name: name.into(),
        })
    }

    fn mismatch(&self, name: &str, expected: &'static str, entry: &Entry) -> ReadError {
        ReadError::TypeMismatch {
            name: name.into(),
            expected,
            found: entry.kind_name(self.buf),
        }
    }

    /// The boolean stored under `name`.
    pub fn read_bool(&self, name: &str) -> Result<bool, ReadError> {
        match self.entry(name)? {
            Entry::Bool(value) => Ok(*value),
            other => Err(self.mismatch(name, "a boolean", other)),
        }
    }

    /// The string stored under `name`.
    pub fn read_string(&self, name: &str) -> Result<String, ReadError> {
        match self.entry(name)? {
            Entry::Str(value) => Ok(value.clone()),
            other => Err(self.mismatch(name, "a string", other)),
        }
    }

    /// Parses the textual form of the entry under `name` as an integer.
    ///
    /// The materializer never stores bare numeric literals, so this reaches
    /// only string-typed digits such as `{"n": "42"}`.
    pub fn read_int(&self, name: &str) -> Result<i64, ReadError> {
        let text = self.numeric_text(name, "an integer")?;
        text.parse().map_err(|_| ReadError::NumberFormat {
            name: name.into(),
            expected: "integer",
            text: text.into(),
        })
    }

    /// Parses the textual form of the entry under `name` as a float.
    ///
    /// Subject to the same reachability note as [`Reader::read_int`].
    pub fn read_double(&self, name: &str) -> Result<f64, ReadError> {
        let text = self.numeric_text(name, "a number")?;
        text.parse().map_err(|_| ReadError::NumberFormat {
            name: name.into(),
            expected: "number",
            text: text.into(),
        })
    }

    fn numeric_text(&self, name: &str, expected: &'static str) -> Result<&str, ReadError> {
        match self.entry(name)? {
            Entry::Str(value) => Ok(value),
            other => Err(self.mismatch(name, expected, other)),
        }
    }

    /// Materializes the nested object stored under `name` and returns a
    /// child reader over it.
    pub fn read_structure(&self, name: &str) -> Result<Reader<'a>, ReadError> {
        match self.entry(name)? {
            Entry::Container(range) if self.buf[range.start] == BRACE_OPEN => {
                let object = materialize_object(self.buf, range.clone())?;
                Ok(Reader::new(self.buf, object))
            }
            other => Err(self.mismatch(name, "an object", other)),
        }
    }

    /// Materializes the nested array stored under `name` and decodes every
    /// element through `T`'s factory.
    ///
    /// Elements must themselves be objects; a failure from any element's
    /// factory propagates unchanged.
    pub fn read_array_of<T: FromReader>(&self, name: &str) -> Result<Vec<T>, ReadError> {
        match self.entry(name)? {
            Entry::Container(range) if self.buf[range.start] == BRACKET_OPEN => {
                let array = materialize_array(self.buf, range.clone())?;
                let mut items = Vec::with_capacity(array.len());
                for element in &array {
                    match element {
                        Entry::Container(range) if self.buf[range.start] == BRACE_OPEN => {
                            let object = materialize_object(self.buf, range.clone())?;
                            items.push(T::from_reader(&Reader::new(self.buf, object))?);
                        }
                        other => return Err(self.mismatch(name, "an object element", other)),
                    }
                }
                Ok(items)
            }
            other => Err(self.mismatch(name, "an array", other)),
        }
    }
}

impl fmt::Debug for Reader<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (name, entry) in self.object.iter() {
            match entry {
                Entry::Bool(value) => map.entry(&name, value),
                Entry::Str(value) => map.entry(&name, value),
                Entry::Container(range) => {
                    map.entry(&name, &BStr::new(&self.buf[range.clone()]))
                }
            };
        }
        map.finish()
    }
}
