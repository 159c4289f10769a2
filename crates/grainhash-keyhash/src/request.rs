//! Explicit hash request kinds.

/// What a caller wants hashed.
///
/// [`KeyHasher::hash`](crate::KeyHasher::hash) re-derives this from the
/// input bytes for legacy callers. Code that already knows which kind it
/// holds should build the request directly and call
/// [`KeyHasher::hash_request`](crate::KeyHasher::hash_request), which
/// never guesses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HashRequest<'a> {
    /// A grain's string key, as UTF-8 bytes. Always zero-extended.
    Key(&'a [u8]),
    /// The hasher's configured grain type name. Never extended.
    TypeName,
}

impl<'a> HashRequest<'a> {
    /// Request a hash of a string key.
    pub fn key(key: &'a str) -> Self {
        Self::Key(key.as_bytes())
    }

    /// Whether the request is for the type name.
    pub fn is_type_name(&self) -> bool {
        matches!(self, Self::TypeName)
    }
}
