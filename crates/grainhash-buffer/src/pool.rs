//! Shared, thread-safe pool of reusable byte buffers.
//!
//! [`BufferPool`] keeps idle buffers in power-of-two size classes, each
//! backed by a bounded lock-free channel. Renting pops from the class
//! that fits; returning pushes back, dropping the buffer if the class is
//! full. Leases ([`PooledBuffer`]) return their buffer on drop, so a
//! buffer goes back to the pool exactly once on every exit path,
//! including unwinding.
//!
//! Returned buffers are not cleared. A rented buffer may hold bytes from
//! a previous tenant and must be treated as uninitialized.

use std::fmt;
use std::ops::{Deref, DerefMut};

use crossbeam_channel::{Receiver, Sender, TrySendError};
use grainhash_core::PoolError;
use tracing::{debug, trace, warn};

use crate::config::PoolConfig;

/// Length of the smallest pooled size class.
///
/// The first power of two above the largest inline scratch tier; shorter
/// requests never reach the pool on the hashing path.
pub const MIN_POOLED_LEN: usize = 512;

/// One power-of-two size class: idle buffers of exactly `len` bytes.
struct SizeClass {
    len: usize,
    idle_tx: Sender<Vec<u8>>,
    idle_rx: Receiver<Vec<u8>>,
}

/// A thread-safe pool of reusable byte buffers.
///
/// Share it between hashers with `Arc<BufferPool>`. The pool owns every
/// idle buffer; dropping the pool frees them.
pub struct BufferPool {
    classes: Vec<SizeClass>,
    config: PoolConfig,
}

// Compile-time assertion: BufferPool must be Send + Sync.
const _: fn() = || {
    fn assert<T: Send + Sync>() {}
    assert::<BufferPool>();
};

impl BufferPool {
    /// Create a pool with the given configuration.
    pub fn new(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: PoolConfig) -> Self {
        let classes: Vec<SizeClass> = (0..config.class_count())
            .map(|i| {
                let (idle_tx, idle_rx) = crossbeam_channel::bounded(config.max_retained_per_class);
                SizeClass {
                    len: MIN_POOLED_LEN << i,
                    idle_tx,
                    idle_rx,
                }
            })
            .collect();
        debug!(
            classes = classes.len(),
            max_retained_per_class = config.max_retained_per_class,
            max_retained_len = config.max_retained_len,
            "buffer_pool_created"
        );
        Self { classes, config }
    }

    /// The configuration this pool was built with.
    pub fn config(&self) -> &PoolConfig {
        &self.config
    }

    /// Rent a buffer of at least `min_len` bytes.
    ///
    /// The returned lease derefs to the whole buffer, which may be longer
    /// than requested and may contain stale bytes. The buffer is returned
    /// to the pool when the lease is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::AllocationFailed`] if no idle buffer fits and
    /// the allocator refuses a new one.
    pub fn rent(&self, min_len: usize) -> Result<PooledBuffer<'_>, PoolError> {
        let buf = match self.class_for(min_len) {
            Some(class) => match class.idle_rx.try_recv() {
                Ok(buf) => buf,
                Err(_) => {
                    trace!(requested = min_len, class_len = class.len, "pool_miss");
                    allocate(class.len)?
                }
            },
            None => {
                trace!(requested = min_len, "pool_oversized_rent");
                allocate(min_len)?
            }
        };
        Ok(PooledBuffer { buf, pool: self })
    }

    /// Number of idle buffers currently held across all size classes.
    pub fn retained(&self) -> usize {
        self.classes.iter().map(|c| c.idle_rx.len()).sum()
    }

    /// Total bytes held by idle buffers.
    pub fn retained_bytes(&self) -> usize {
        self.classes.iter().map(|c| c.idle_rx.len() * c.len).sum()
    }

    /// Drop every idle buffer. Outstanding leases are unaffected and
    /// still return their buffers normally.
    pub fn clear(&self) {
        let mut freed = 0usize;
        for class in &self.classes {
            while class.idle_rx.try_recv().is_ok() {
                freed += 1;
            }
        }
        debug!(freed, "buffer_pool_cleared");
    }

    /// The smallest size class that fits `min_len`, if any is retained.
    fn class_for(&self, min_len: usize) -> Option<&SizeClass> {
        let class_len = min_len.max(MIN_POOLED_LEN).checked_next_power_of_two()?;
        let idx = (class_len.trailing_zeros() - MIN_POOLED_LEN.trailing_zeros()) as usize;
        self.classes.get(idx)
    }

    /// Take a buffer back from an ending lease.
    fn give_back(&self, buf: Vec<u8>) {
        let Some(class) = self.classes.iter().find(|c| c.len == buf.len()) else {
            debug!(len = buf.len(), "pool_release_untracked_len");
            return;
        };
        if let Err(TrySendError::Full(buf)) = class.idle_tx.try_send(buf) {
            trace!(len = buf.len(), "pool_class_full");
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::from_valid(PoolConfig::default())
    }
}

impl fmt::Debug for BufferPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BufferPool")
            .field("config", &self.config)
            .field("retained", &self.retained())
            .finish()
    }
}

/// Allocate a zero-filled buffer of exactly `len` bytes, surfacing
/// allocator refusal instead of aborting.
fn allocate(len: usize) -> Result<Vec<u8>, PoolError> {
    let mut buf = Vec::new();
    if buf.try_reserve_exact(len).is_err() {
        warn!(requested = len, "buffer_allocation_failed");
        return Err(PoolError::AllocationFailed { requested: len });
    }
    buf.resize(len, 0);
    Ok(buf)
}

/// A buffer rented from a [`BufferPool`].
///
/// Derefs to the full rented buffer. Dropping the lease returns the
/// buffer to its pool.
pub struct PooledBuffer<'p> {
    buf: Vec<u8>,
    pool: &'p BufferPool,
}

impl PooledBuffer<'_> {
    /// Length of the rented buffer (at least the requested length).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Whether the rented buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }
}

impl Deref for PooledBuffer<'_> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut [u8] {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        let buf = std::mem::take(&mut self.buf);
        self.pool.give_back(buf);
    }
}

impl fmt::Debug for PooledBuffer<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuffer").field("len", &self.buf.len()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn small_pool(per_class: usize) -> BufferPool {
        BufferPool::new(PoolConfig {
            max_retained_per_class: per_class,
            max_retained_len: 4096,
        })
        .unwrap()
    }

    #[test]
    fn rent_rounds_up_to_class() {
        let pool = small_pool(4);
        let buf = pool.rent(257).unwrap();
        assert_eq!(buf.len(), 512);
        let buf = pool.rent(513).unwrap();
        assert_eq!(buf.len(), 1024);
        let buf = pool.rent(4096).unwrap();
        assert_eq!(buf.len(), 4096);
    }

    #[test]
    fn drop_returns_buffer_once() {
        let pool = small_pool(4);
        assert_eq!(pool.retained(), 0);
        {
            let _buf = pool.rent(300).unwrap();
            assert_eq!(pool.retained(), 0);
        }
        assert_eq!(pool.retained(), 1);
        assert_eq!(pool.retained_bytes(), 512);
    }

    #[test]
    fn reused_buffer_keeps_stale_bytes() {
        let pool = small_pool(4);
        {
            let mut buf = pool.rent(300).unwrap();
            buf.fill(0xAB);
        }
        let buf = pool.rent(300).unwrap();
        assert!(buf.iter().all(|&b| b == 0xAB));
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn oversized_rent_is_exact_and_not_retained() {
        let pool = small_pool(4);
        {
            let buf = pool.rent(10_000).unwrap();
            assert_eq!(buf.len(), 10_000);
        }
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn class_quota_caps_retention() {
        let pool = small_pool(2);
        let leases: Vec<_> = (0..5).map(|_| pool.rent(600).unwrap()).collect();
        drop(leases);
        assert_eq!(pool.retained(), 2);
    }

    #[test]
    fn zero_quota_never_retains() {
        let pool = small_pool(0);
        drop(pool.rent(600).unwrap());
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn clear_drops_idle_buffers() {
        let pool = small_pool(4);
        let a = pool.rent(600).unwrap();
        let b = pool.rent(2000).unwrap();
        drop(a);
        drop(b);
        assert_eq!(pool.retained(), 2);
        pool.clear();
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn invalid_config_rejected() {
        let err = BufferPool::new(PoolConfig {
            max_retained_per_class: 1,
            max_retained_len: 100,
        })
        .unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfig { .. }));
    }

    #[test]
    fn unbounded_max_len_is_an_error_not_a_panic() {
        let err = BufferPool::new(PoolConfig {
            max_retained_per_class: 1,
            max_retained_len: usize::MAX,
        })
        .unwrap_err();
        assert!(matches!(err, PoolError::InvalidConfig { .. }));
    }

    #[test]
    fn max_len_rounds_up_to_retained_class() {
        let pool = BufferPool::new(PoolConfig {
            max_retained_per_class: 4,
            max_retained_len: 600,
        })
        .unwrap();
        // 1000 fits the 1024 class that 600 rounds up to.
        drop(pool.rent(1000).unwrap());
        assert_eq!(pool.retained(), 1);
        assert_eq!(pool.retained_bytes(), 1024);
        // Past the top class: exact one-off allocation.
        drop(pool.rent(1025).unwrap());
        assert_eq!(pool.retained(), 1);
    }

    #[test]
    fn huge_request_reports_allocation_failure() {
        let pool = small_pool(1);
        let err = pool.rent(usize::MAX).unwrap_err();
        assert_eq!(err, PoolError::AllocationFailed { requested: usize::MAX });
    }

    #[test]
    fn lease_returns_on_panic() {
        let pool = small_pool(4);
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _buf = pool.rent(700).unwrap();
            panic!("tenant failed mid-use");
        }));
        assert!(result.is_err());
        assert_eq!(pool.retained(), 1);
    }

    #[test]
    fn concurrent_rent_return_never_shares_buffers() {
        let pool = Arc::new(small_pool(8));
        let handles: Vec<_> = (0..8u8)
            .map(|id| {
                let pool = Arc::clone(&pool);
                thread::spawn(move || {
                    for _ in 0..500 {
                        let mut buf = pool.rent(1000).unwrap();
                        buf.fill(id);
                        thread::yield_now();
                        assert!(buf.iter().all(|&b| b == id), "buffer shared across threads");
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert!(pool.retained() <= 8);
    }
}
