//! Core types and traits for legacy-compatible grain key hashing.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the grainhash workspace:
//! the grain type name, the hash primitive trait, and error types.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod type_name;

pub use error::{HashError, PoolError};
pub use traits::HashFunction;
pub use type_name::GrainTypeName;

/// Number of zero bytes appended to a string key before hashing.
///
/// Mirrors the byte layout the legacy runtime used for integer-keyed
/// grains, where the key occupied an extra 8-byte slot.
pub const EXTENSION_LEN: usize = 8;
