//! Benchmark inputs for grainhash.
//!
//! Provides deterministic key sets shaped like real grain keys:
//!
//! - [`guid_keys`]: 36-character hyphenated GUID strings
//! - [`random_keys`]: arbitrary bytes of a fixed length, via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `count` keys of exactly `len` random bytes, reproducible from `seed`.
pub fn random_keys(seed: u64, count: usize, len: usize) -> Vec<Vec<u8>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut key = vec![0u8; len];
            rng.fill_bytes(&mut key);
            key
        })
        .collect()
}

/// `count` lowercase hyphenated GUID strings (36 bytes each).
///
/// The most common string key shape; extended length 44 lands in the
/// 64-byte inline tier.
pub fn guid_keys(seed: u64, count: usize) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut raw = [0u8; 16];
            rng.fill_bytes(&mut raw);
            let hex: String = raw.iter().map(|b| format!("{b:02x}")).collect();
            format!(
                "{}-{}-{}-{}-{}",
                &hex[0..8],
                &hex[8..12],
                &hex[12..16],
                &hex[16..20],
                &hex[20..32]
            )
        })
        .collect()
}
