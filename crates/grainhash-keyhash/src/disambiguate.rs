//! Content-based detection of type-name hash requests.
//!
//! Callers hash both string keys and the grain's type name through the
//! same `hash(&[u8])` entry point, and only the key path carries the
//! legacy zero extension. The only way to tell the two apart is to look
//! at the bytes: input equal to the UTF-8 type name is a type-name
//! request.
//!
//! # Accepted false positive
//!
//! A string key that happens to equal the grain's type name is classified
//! as a type-name request and hashed without extension. The legacy runtime
//! did exactly the same, so "fixing" it here would move those grains.
//! New call paths should pass an explicit
//! [`HashRequest`](crate::HashRequest) instead of relying on this.

use grainhash_core::GrainTypeName;

/// Whether `data` is the UTF-8 encoding of `type_name`.
pub fn is_type_name(data: &[u8], type_name: &GrainTypeName) -> bool {
    // UTF-8 spends at least one byte per char: fewer bytes can never match.
    if data.len() < type_name.char_len() {
        return false;
    }
    if data.len() != type_name.byte_len() {
        return false;
    }
    data == type_name.as_bytes()
}
