//! Materialized container representations.

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::scanner::BRACKET_OPEN;

/// One decoded property of an object, or one element of an array.
///
/// Scalars are decoded when the enclosing container is materialized; nested
/// containers are kept as byte ranges into the root buffer until a caller
/// asks for them by name and expected shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A `true`/`false` literal, decoded.
    Bool(bool),
    /// A quoted string, decoded. Escape sequences are not interpreted.
    Str(String),
    /// An unparsed, balanced `{...}` or `[...]` region. The range is
    /// expressed in absolute offsets into the root buffer and always spans a
    /// complete region including both delimiters.
    Container(Range<usize>),
}

impl Entry {
    /// Name of the stored kind, for [`TypeMismatch`] diagnostics. Container
    /// entries report their shape from the opening delimiter.
    ///
    /// [`TypeMismatch`]: crate::ReadError::TypeMismatch
    pub(crate) fn kind_name(&self, buf: &[u8]) -> &'static str {
        match self {
            Entry::Bool(_) => "boolean",
            Entry::Str(_) => "string",
            Entry::Container(range) if buf.get(range.start) == Some(&BRACKET_OPEN) => "array",
            Entry::Container(_) => "object",
        }
    }
}

/// An object split into ordered `(name, entry)` pairs.
///
/// Property names are unique within one object: a duplicate name overwrites
/// the earlier entry (last wins), keeping the first occurrence's position in
/// the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MaterializedObject {
    entries: Vec<(String, Entry)>,
}

impl MaterializedObject {
    pub(crate) fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, name: String, entry: Entry) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = entry,
            None => self.entries.push((name, entry)),
        }
    }

    /// Looks up a property by exact, case-sensitive name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, entry)| entry)
    }

    /// Number of properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the object holds no properties.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in document order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries
            .iter()
            .map(|(name, entry)| (name.as_str(), entry))
    }
}

/// An array split into ordered, unnamed entries.
pub type MaterializedArray = Vec<Entry>;
