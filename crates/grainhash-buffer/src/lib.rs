//! Scratch buffer allocation for grain key hashing.
//!
//! Provides the two-level buffer policy the key hasher uses to build
//! its zero-extended input:
//!
//! ```text
//! ScratchBuffer::acquire(n)
//! ├── n <= 256  → inline stack array (32 / 64 / 128 / 256)
//! └── n  > 256  → BufferPool::rent(n) → PooledBuffer lease
//!                 └── returned to its size class on drop
//! ```
//!
//! The pool is an ordinary value with an explicit lifecycle; share it
//! with `Arc<BufferPool>` rather than relying on a process global.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod pool;
pub mod scratch;

// Public re-exports for the primary API surface.
pub use config::PoolConfig;
pub use pool::{BufferPool, PooledBuffer, MIN_POOLED_LEN};
pub use scratch::{ScratchBuffer, Tier, INLINE_TIERS, MAX_INLINE_LEN};
