//! Error types for grain key hashing.
//!
//! Organized by subsystem: the shared buffer pool and the key hasher.
//! Well-formed input never fails to hash; the only failure mode is the
//! pool refusing to hand out a buffer.

use std::error::Error;
use std::fmt;

/// Errors from the shared buffer pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PoolError {
    /// The allocator refused to provide a buffer of the requested size.
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
    },
    /// A pool configuration value is out of range.
    InvalidConfig {
        /// Description of the offending value.
        reason: String,
    },
}

impl fmt::Display for PoolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AllocationFailed { requested } => {
                write!(f, "buffer allocation failed: requested {requested} bytes")
            }
            Self::InvalidConfig { reason } => write!(f, "invalid pool config: {reason}"),
        }
    }
}

impl Error for PoolError {}

/// Errors from key hashing.
///
/// The hasher performs no local recovery: a pool failure is surfaced
/// unchanged, wrapped in [`HashError::Pool`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HashError {
    /// Acquiring the extension buffer from the pool failed.
    Pool(PoolError),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pool(err) => write!(f, "could not acquire extension buffer: {err}"),
        }
    }
}

impl Error for HashError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Pool(err) => Some(err),
        }
    }
}

impl From<PoolError> for HashError {
    fn from(err: PoolError) -> Self {
        Self::Pool(err)
    }
}
