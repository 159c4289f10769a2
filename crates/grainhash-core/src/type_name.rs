//! The grain type name used to tell type-name requests apart from keys.

use std::fmt;
use std::sync::Arc;

/// Immutable grain type name, fixed when a hasher is constructed.
///
/// The name must stay identical across every runtime version being kept
/// compatible; if it drifts, type-name detection silently diverges from
/// legacy behaviour. Cloning is cheap (the text is shared).
///
/// The character count is cached at construction so the disambiguator
/// can reject short inputs without re-walking the string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct GrainTypeName {
    name: Arc<str>,
    char_len: usize,
}

impl GrainTypeName {
    /// Create a type name from any string-like value.
    pub fn new(name: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let char_len = name.chars().count();
        Self { name, char_len }
    }

    /// The type name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// The UTF-8 encoding of the type name.
    pub fn as_bytes(&self) -> &[u8] {
        self.name.as_bytes()
    }

    /// Length of the UTF-8 encoding in bytes.
    pub fn byte_len(&self) -> usize {
        self.name.len()
    }

    /// Number of Unicode scalar values in the name.
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

impl fmt::Debug for GrainTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GrainTypeName").field(&&*self.name).finish()
    }
}

impl fmt::Display for GrainTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for GrainTypeName {
    fn from(v: &str) -> Self {
        Self::new(v)
    }
}

impl From<String> for GrainTypeName {
    fn from(v: String) -> Self {
        Self::new(v)
    }
}

impl AsRef<str> for GrainTypeName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
