//! Buffer pool configuration parameters.

use grainhash_core::PoolError;

use crate::pool::MIN_POOLED_LEN;

/// Configuration for the shared buffer pool.
///
/// Controls how many buffers are kept for reuse and how large a buffer
/// may be before it is dropped instead of retained. Validated at pool
/// construction; immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PoolConfig {
    /// Maximum number of idle buffers retained per size class.
    ///
    /// Default: 16. Zero disables retention entirely; every rent then
    /// allocates a fresh buffer. At most
    /// [`MAX_RETAINED_PER_CLASS_LIMIT`](Self::MAX_RETAINED_PER_CLASS_LIMIT).
    pub max_retained_per_class: usize,

    /// Largest buffer length (in bytes) the pool will retain.
    ///
    /// Default: 1 MiB. The limit is rounded up to the next power of two,
    /// which is the largest size class kept; requests above that class
    /// are served by a one-off allocation freed when the lease ends. Must
    /// be at least [`MIN_POOLED_LEN`] and at most
    /// [`MAX_RETAINED_LEN_LIMIT`](Self::MAX_RETAINED_LEN_LIMIT).
    pub max_retained_len: usize,
}

impl PoolConfig {
    /// Default number of idle buffers per size class.
    pub const DEFAULT_MAX_RETAINED_PER_CLASS: usize = 16;

    /// Default largest retained buffer: 1 MiB.
    pub const DEFAULT_MAX_RETAINED_LEN: usize = 1 << 20;

    /// Largest accepted `max_retained_per_class`. Each class channel
    /// allocates its slots up front.
    pub const MAX_RETAINED_PER_CLASS_LIMIT: usize = 1 << 16;

    /// Largest accepted `max_retained_len`: the highest power of two a
    /// `usize` can hold.
    pub const MAX_RETAINED_LEN_LIMIT: usize = 1 << (usize::BITS - 1);

    /// Create a config with default values.
    pub fn new() -> Self {
        Self {
            max_retained_per_class: Self::DEFAULT_MAX_RETAINED_PER_CLASS,
            max_retained_len: Self::DEFAULT_MAX_RETAINED_LEN,
        }
    }

    /// Check that every value is in range.
    pub fn validate(&self) -> Result<(), PoolError> {
        if self.max_retained_len < MIN_POOLED_LEN {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_retained_len must be >= {MIN_POOLED_LEN}, got {}",
                    self.max_retained_len
                ),
            });
        }
        if self.max_retained_len > Self::MAX_RETAINED_LEN_LIMIT {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_retained_len must be <= {}, got {}",
                    Self::MAX_RETAINED_LEN_LIMIT,
                    self.max_retained_len
                ),
            });
        }
        if self.max_retained_per_class > Self::MAX_RETAINED_PER_CLASS_LIMIT {
            return Err(PoolError::InvalidConfig {
                reason: format!(
                    "max_retained_per_class must be <= {}, got {}",
                    Self::MAX_RETAINED_PER_CLASS_LIMIT,
                    self.max_retained_per_class
                ),
            });
        }
        Ok(())
    }

    /// Number of power-of-two size classes, from [`MIN_POOLED_LEN`] up to
    /// `max_retained_len` rounded up to a power of two.
    ///
    /// Lengths above [`MAX_RETAINED_LEN_LIMIT`](Self::MAX_RETAINED_LEN_LIMIT)
    /// are clamped to it.
    pub fn class_count(&self) -> usize {
        let top = self
            .max_retained_len
            .clamp(MIN_POOLED_LEN, Self::MAX_RETAINED_LEN_LIMIT)
            .next_power_of_two();
        (top.trailing_zeros() - MIN_POOLED_LEN.trailing_zeros()) as usize + 1
    }
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self::new()
    }
}
