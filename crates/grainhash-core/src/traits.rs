//! Core abstraction trait for the underlying hash primitive.

use std::sync::Arc;

/// A deterministic, versioned `bytes -> i32` hash primitive.
///
/// The key hasher treats implementations as a black box. Output must be
/// byte-exact across the compatibility boundary: two runtime versions
/// that agree on the primitive must agree on every hash it produces.
pub trait HashFunction {
    /// Hash `data` to a signed 32-bit value.
    fn hash(&self, data: &[u8]) -> i32;

    /// Human-readable algorithm name, for diagnostics only.
    fn description(&self) -> &str;
}

impl<T: HashFunction + ?Sized> HashFunction for &T {
    fn hash(&self, data: &[u8]) -> i32 {
        (**self).hash(data)
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

impl<T: HashFunction + ?Sized> HashFunction for Box<T> {
    fn hash(&self, data: &[u8]) -> i32 {
        (**self).hash(data)
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}

impl<T: HashFunction + ?Sized> HashFunction for Arc<T> {
    fn hash(&self, data: &[u8]) -> i32 {
        (**self).hash(data)
    }

    fn description(&self) -> &str {
        (**self).description()
    }
}
