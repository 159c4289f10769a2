//! Tiered scratch buffers: stack arrays for short requests, pool leases
//! for the rest.
//!
//! [`ScratchBuffer::acquire`] picks the smallest inline tier that fits
//! (32, 64, 128 or 256 bytes) and falls back to renting from a
//! [`BufferPool`] above that. Short keys (GUIDs, small strings, integers
//! written as strings) therefore hash without touching the heap.

use grainhash_core::PoolError;

use crate::pool::{BufferPool, PooledBuffer};

/// Inline tier sizes in bytes, smallest first.
pub const INLINE_TIERS: [usize; 4] = [32, 64, 128, 256];

/// Largest request served without the pool.
pub const MAX_INLINE_LEN: usize = 256;

/// Which storage backs a [`ScratchBuffer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// 32-byte stack array.
    Inline32,
    /// 64-byte stack array.
    Inline64,
    /// 128-byte stack array.
    Inline128,
    /// 256-byte stack array.
    Inline256,
    /// Buffer rented from the shared pool.
    Pooled,
}

/// A writable scratch buffer of at least the requested length.
///
/// Inline variants live wherever the value lives (normally the caller's
/// stack frame). The pooled variant holds a lease that returns its buffer
/// when the scratch buffer is dropped.
///
/// Contents are unspecified: inline tiers start zeroed but pooled buffers
/// may hold stale bytes, so callers must overwrite every byte they read.
#[allow(clippy::large_enum_variant)]
pub enum ScratchBuffer<'p> {
    /// 32-byte stack array.
    Inline32([u8; 32]),
    /// 64-byte stack array.
    Inline64([u8; 64]),
    /// 128-byte stack array.
    Inline128([u8; 128]),
    /// 256-byte stack array.
    Inline256([u8; 256]),
    /// Lease on a pooled buffer.
    Pooled(PooledBuffer<'p>),
}

impl<'p> ScratchBuffer<'p> {
    /// Acquire a buffer of at least `len` bytes.
    ///
    /// # Errors
    ///
    /// Only the pooled path can fail, with the pool's
    /// [`PoolError::AllocationFailed`], returned unchanged.
    pub fn acquire(len: usize, pool: &'p BufferPool) -> Result<Self, PoolError> {
        Ok(match len {
            0..=32 => Self::Inline32([0; 32]),
            33..=64 => Self::Inline64([0; 64]),
            65..=128 => Self::Inline128([0; 128]),
            129..=MAX_INLINE_LEN => Self::Inline256([0; 256]),
            _ => Self::Pooled(pool.rent(len)?),
        })
    }

    /// The storage tier backing this buffer.
    pub fn tier(&self) -> Tier {
        match self {
            Self::Inline32(_) => Tier::Inline32,
            Self::Inline64(_) => Tier::Inline64,
            Self::Inline128(_) => Tier::Inline128,
            Self::Inline256(_) => Tier::Inline256,
            Self::Pooled(_) => Tier::Pooled,
        }
    }

    /// Whether the buffer was rented from the pool.
    pub fn is_pooled(&self) -> bool {
        matches!(self, Self::Pooled(_))
    }

    /// Usable length of the buffer.
    pub fn capacity(&self) -> usize {
        self.as_slice().len()
    }

    /// The whole buffer, read-only.
    pub fn as_slice(&self) -> &[u8] {
        match self {
            Self::Inline32(a) => &a[..],
            Self::Inline64(a) => &a[..],
            Self::Inline128(a) => &a[..],
            Self::Inline256(a) => &a[..],
            Self::Pooled(lease) => &lease[..],
        }
    }

    /// The whole buffer, writable.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Inline32(a) => &mut a[..],
            Self::Inline64(a) => &mut a[..],
            Self::Inline128(a) => &mut a[..],
            Self::Inline256(a) => &mut a[..],
            Self::Pooled(lease) => &mut lease[..],
        }
    }
}
