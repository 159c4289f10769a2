//! Legacy Jenkins hash primitive.
//!
//! Bob Jenkins' 32-bit lookup2 hash, as used by the previous major
//! version of the runtime for grain placement. The function is frozen:
//! any change to its output re-partitions every stored grain, so the
//! constants and block layout below must never be altered.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use grainhash_core::HashFunction;

/// Golden-ratio seed loaded into `a` and `b` before the first block.
const GOLDEN_RATIO: u32 = 0x9e37_79b9;

/// Bytes consumed per mixing round.
const BLOCK_LEN: usize = 12;

/// Reversible mix of three 32-bit lanes (lookup2 `mix`).
#[inline]
fn mix(mut a: u32, mut b: u32, mut c: u32) -> (u32, u32, u32) {
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 13);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 8);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 13);
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 12);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 16);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 5);
    a = a.wrapping_sub(b).wrapping_sub(c) ^ (c >> 3);
    b = b.wrapping_sub(c).wrapping_sub(a) ^ (a << 10);
    c = c.wrapping_sub(a).wrapping_sub(b) ^ (b >> 15);
    (a, b, c)
}

/// Read 4 bytes at `at` as a little-endian u32.
#[inline]
fn le_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Compute the lookup2 hash of `data` with a zero initial value.
///
/// Full 12-byte blocks are added into `a`, `b`, `c` as little-endian
/// words and mixed. The input length is then folded into `c`, the tail
/// bytes are added (the low byte of `c` is reserved for the length),
/// and a final mix produces `c`.
pub fn lookup2(data: &[u8]) -> u32 {
    let mut a = GOLDEN_RATIO;
    let mut b = GOLDEN_RATIO;
    let mut c = 0u32;

    let mut blocks = data.chunks_exact(BLOCK_LEN);
    for block in &mut blocks {
        a = a.wrapping_add(le_u32(block, 0));
        b = b.wrapping_add(le_u32(block, 4));
        c = c.wrapping_add(le_u32(block, 8));
        (a, b, c) = mix(a, b, c);
    }

    // The legacy runtime truncated the length to 32 bits.
    c = c.wrapping_add(data.len() as u32);
    for (i, &byte) in blocks.remainder().iter().enumerate() {
        let byte = byte as u32;
        let shift = 8 * (i % 4) as u32;
        match i / 4 {
            0 => a = a.wrapping_add(byte << shift),
            1 => b = b.wrapping_add(byte << shift),
            _ => c = c.wrapping_add(byte << (shift + 8)),
        }
    }

    mix(a, b, c).2
}

/// The legacy Jenkins lookup2 primitive as a [`HashFunction`].
///
/// Returns the 32-bit lookup2 value reinterpreted as `i32`, which is how
/// the previous runtime exposed it to placement code.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JenkinsHash;

impl JenkinsHash {
    /// Create the primitive. Stateless; equal to the unit value.
    ///
    /// ```rust
    /// use grainhash_core::HashFunction;
    /// use grainhash_jenkins::{lookup2, JenkinsHash};
    ///
    /// let hash = JenkinsHash::new();
    /// assert_eq!(hash.hash(b"abc") as u32, lookup2(b"abc"));
    /// ```
    pub fn new() -> Self {
        Self
    }
}

impl HashFunction for JenkinsHash {
    fn hash(&self, data: &[u8]) -> i32 {
        lookup2(data) as i32
    }

    fn description(&self) -> &str {
        "JenkinsHash"
    }
}
