//! grainhash: legacy-compatible hashing of string grain keys.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all grainhash sub-crates. For most users, adding `grainhash` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use grainhash::prelude::*;
//!
//! let hasher = KeyHasher::new(JenkinsHash, "MyGrain");
//!
//! // String keys are hashed with the legacy 8-byte zero extension.
//! let key_hash = hasher.hash(b"abc").unwrap();
//! assert_eq!(key_hash, JenkinsHash.hash(b"abc\0\0\0\0\0\0\0\0"));
//!
//! // The grain type name is recognised and hashed unchanged.
//! let type_hash = hasher.hash(b"MyGrain").unwrap();
//! assert_eq!(type_hash, JenkinsHash.hash(b"MyGrain"));
//!
//! // New code can say what it means instead.
//! let explicit = hasher.hash_request(HashRequest::TypeName).unwrap();
//! assert_eq!(explicit, type_hash);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `grainhash-core` | `HashFunction`, `GrainTypeName`, errors |
//! | [`buffer`] | `grainhash-buffer` | Inline scratch tiers and the shared `BufferPool` |
//! | [`jenkins`] | `grainhash-jenkins` | The legacy Jenkins lookup2 primitive |
//! | [`keyhash`] | `grainhash-keyhash` | `KeyHasher`, type-name detection, `HashRequest` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`grainhash-core`).
pub use grainhash_core as types;

/// Scratch buffers and the shared pool (`grainhash-buffer`).
///
/// Most users only need [`buffer::BufferPool`] and [`buffer::PoolConfig`],
/// to share one pool between several hashers.
pub use grainhash_buffer as buffer;

/// The legacy hash primitive (`grainhash-jenkins`).
pub use grainhash_jenkins as jenkins;

/// The string key hasher (`grainhash-keyhash`).
pub use grainhash_keyhash as keyhash;

/// Common imports for typical grainhash usage.
///
/// ```rust
/// use grainhash::prelude::*;
/// ```
pub mod prelude {
    pub use grainhash_buffer::{BufferPool, PoolConfig};
    pub use grainhash_core::{GrainTypeName, HashError, HashFunction, PoolError};
    pub use grainhash_jenkins::JenkinsHash;
    pub use grainhash_keyhash::{HashRequest, KeyHasher};
}
