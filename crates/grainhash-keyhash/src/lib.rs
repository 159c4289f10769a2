//! Legacy-compatible string key hashing for grain placement.
//!
//! The previous major version of the runtime hashed string grain keys
//! as if they were integer keys: the key's UTF-8 bytes followed by eight
//! zero bytes. Requests for the grain's *type name* arrive through the
//! same byte-slice entry point but were never extended. [`KeyHasher`]
//! reproduces both behaviours bit for bit.
//!
//! # Pipeline
//!
//! ```text
//! KeyHasher::hash(data)
//! ├── classify: data == UTF-8(type name)?
//! │   └── yes → inner.hash(data)
//! └── no  → ScratchBuffer::acquire(len + 8)
//!           ├── copy key, zero the 8-byte extension
//!           └── inner.hash(extended)   (lease returned on drop)
//! ```
//!
//! Callers that already know whether they hold a key or a type name can
//! skip the content-based guess with [`KeyHasher::hash_request`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod disambiguate;
pub mod hasher;
pub mod request;

pub use disambiguate::is_type_name;
pub use hasher::KeyHasher;
pub use request::HashRequest;
