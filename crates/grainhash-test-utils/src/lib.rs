//! Test utilities and mock hash primitives for grainhash development.
//!
//! Provides a deterministic stand-in primitive ([`Fnv1aHash`]), a
//! recording wrapper ([`RecordingHasher`]) for asserting exactly which
//! bytes reached the primitive, and reference computations of the legacy
//! extension convention that bypass the inline buffer tiers.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Mutex;

use grainhash_buffer::BufferPool;
use grainhash_core::{HashFunction, EXTENSION_LEN};

/// FNV-1a 32-bit offset basis.
const FNV_OFFSET: u32 = 0x811c_9dc5;
/// FNV-1a 32-bit prime.
const FNV_PRIME: u32 = 0x0100_0193;

/// FNV-1a 32-bit, as a cheap deterministic [`HashFunction`].
///
/// Not the legacy primitive. Useful where a test only needs a stable,
/// length-sensitive function.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fnv1aHash;

impl HashFunction for Fnv1aHash {
    fn hash(&self, data: &[u8]) -> i32 {
        let mut hash = FNV_OFFSET;
        for &b in data {
            hash = (hash ^ b as u32).wrapping_mul(FNV_PRIME);
        }
        hash as i32
    }

    fn description(&self) -> &str {
        "Fnv1a32"
    }
}

/// Records every input passed to the primitive, then delegates to
/// [`Fnv1aHash`].
///
/// Inspect with [`calls`](RecordingHasher::calls).
#[derive(Default)]
pub struct RecordingHasher {
    calls: Mutex<Vec<Vec<u8>>>,
}

impl RecordingHasher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every input seen so far, in call order.
    pub fn calls(&self) -> Vec<Vec<u8>> {
        self.calls.lock().unwrap().clone()
    }

    /// Forget recorded inputs.
    pub fn reset(&self) {
        self.calls.lock().unwrap().clear();
    }
}

impl HashFunction for RecordingHasher {
    fn hash(&self, data: &[u8]) -> i32 {
        self.calls.lock().unwrap().push(data.to_vec());
        Fnv1aHash.hash(data)
    }

    fn description(&self) -> &str {
        "Recording(Fnv1a32)"
    }
}

/// `data ++ [0; 8]` as an owned vector.
pub fn extend_with_zeros(data: &[u8]) -> Vec<u8> {
    let mut extended = Vec::with_capacity(data.len() + EXTENSION_LEN);
    extended.extend_from_slice(data);
    extended.resize(data.len() + EXTENSION_LEN, 0);
    extended
}

/// The legacy convention computed naively: `inner.hash(data ++ [0; 8])`.
pub fn extended_reference<H: HashFunction>(inner: &H, data: &[u8]) -> i32 {
    inner.hash(&extend_with_zeros(data))
}

/// The legacy convention computed through the pool regardless of length.
///
/// Never uses the inline tiers, so comparing against it checks that tier
/// selection does not change the result.
pub fn pooled_reference<H: HashFunction>(inner: &H, data: &[u8], pool: &BufferPool) -> i32 {
    let extended_len = data.len() + EXTENSION_LEN;
    let mut lease = pool.rent(extended_len).unwrap();
    lease[..data.len()].copy_from_slice(data);
    lease[data.len()..extended_len].fill(0);
    inner.hash(&lease[..extended_len])
}

/// Leave an idle buffer of `len` bytes filled with `byte` in the pool,
/// so the next rent of that size class sees stale contents.
pub fn poison_pool(pool: &BufferPool, len: usize, byte: u8) {
    let mut lease = pool.rent(len).unwrap();
    lease.fill(byte);
}

/// Deterministic pseudo-random key bytes of length `len`, derived from
/// `seed` with a 64-bit LCG. Avoids pulling an RNG into unit tests.
pub fn key_bytes(seed: u64, len: usize) -> Vec<u8> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            (state >> 56) as u8
        })
        .collect()
}
