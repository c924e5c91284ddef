//! The typed decoding protocol and its top-level entry points.

use alloc::format;
use alloc::vec::Vec;

use crate::entry::Entry;
use crate::error::ReadError;
use crate::materialize::{materialize_array, materialize_object};
use crate::reader::Reader;
use crate::scanner::BRACE_OPEN;

/// Capability contract for types that decode themselves from a [`Reader`].
///
/// The engine never inspects the implementing type's shape. Recursion into
/// nested objects and arrays is driven entirely by the factory calling
/// [`Reader::read_structure`] and [`Reader::read_array_of`], which hand out
/// further readers over lazily materialized sub-regions.
pub trait FromReader: Sized {
    /// Builds a value by pulling named fields from `reader`.
    ///
    /// # Errors
    ///
    /// Returns whatever the accessors surface: access errors for absent or
    /// wrong-shaped fields, parse errors when a deferred container turns out
    /// malformed on materialization.
    fn from_reader(reader: &Reader<'_>) -> Result<Self, ReadError>;
}

/// Decodes a document whose root is a JSON object into `T`.
///
/// # Errors
///
/// Fails with a parse error if the root is not a well-formed object (a root
/// starting with anything but `{` is an [`UnexpectedToken`]), or with
/// whatever `T`'s factory surfaces.
///
/// [`UnexpectedToken`]: crate::ParseError::UnexpectedToken
pub fn decode_object<T: FromReader>(bytes: &[u8]) -> Result<T, ReadError> {
    let object = materialize_object(bytes, 0..bytes.len())?;
    T::from_reader(&Reader::new(bytes, object))
}

/// Decodes a document whose root is a JSON array of objects into a `Vec<T>`.
///
/// Each element of the root array must itself be an object; `T`'s factory is
/// invoked once per element with a reader over that element's region.
///
/// # Errors
///
/// Fails with a parse error if the root is not a well-formed array, with a
/// [`TypeMismatch`] naming the element's index if an element is not
/// object-shaped, or with whatever `T`'s factory surfaces.
///
/// [`TypeMismatch`]: ReadError::TypeMismatch
pub fn decode_array<T: FromReader>(bytes: &[u8]) -> Result<Vec<T>, ReadError> {
    let array = materialize_array(bytes, 0..bytes.len())?;
    let mut items = Vec::with_capacity(array.len());
    for (index, element) in array.iter().enumerate() {
        match element {
            Entry::Container(range) if bytes[range.start] == BRACE_OPEN => {
                let object = materialize_object(bytes, range.clone())?;
                items.push(T::from_reader(&Reader::new(bytes, object))?);
            }
            other => {
                return Err(ReadError::TypeMismatch {
                    name: format!("[{index}]"),
                    expected: "an object",
                    found: other.kind_name(bytes),
                });
            }
        }
    }
    Ok(items)
}
