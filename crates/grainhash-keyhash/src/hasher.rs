//! The legacy-compatible string key hasher.
//!
//! [`KeyHasher`] reproduces the previous runtime's placement hash for
//! string-keyed grains: the key's UTF-8 bytes followed by eight zero
//! bytes, fed to the underlying primitive. Requests for the grain's type
//! name bypass the extension, because type names were never extended.

use std::fmt;
use std::sync::Arc;

use grainhash_buffer::{BufferPool, ScratchBuffer};
use grainhash_core::{GrainTypeName, HashError, HashFunction, EXTENSION_LEN};
use tracing::{debug, trace};

use crate::disambiguate::is_type_name;
use crate::request::HashRequest;

/// Hashes grain keys bit-identically to the legacy runtime.
///
/// Immutable after construction. A single instance can be shared across
/// threads (`Send + Sync` whenever the primitive is); every call builds
/// its extended input in its own scratch buffer.
pub struct KeyHasher<H> {
    inner: H,
    grain_type: GrainTypeName,
    pool: Arc<BufferPool>,
    description: String,
}

impl<H: HashFunction> KeyHasher<H> {
    /// Create a hasher with its own buffer pool.
    ///
    /// `grain_type` must be the exact type name the legacy runtime used;
    /// a different spelling silently breaks type-name detection.
    pub fn new(inner: H, grain_type: impl Into<GrainTypeName>) -> Self {
        Self::with_pool(inner, grain_type, Arc::new(BufferPool::default()))
    }

    /// Create a hasher that rents long-key buffers from a shared pool.
    pub fn with_pool(inner: H, grain_type: impl Into<GrainTypeName>, pool: Arc<BufferPool>) -> Self {
        let grain_type = grain_type.into();
        let description = format!("LegacyStringKeyHasher({})", inner.description());
        debug!(grain_type = %grain_type, description = %description, "key_hasher_created");
        Self {
            inner,
            grain_type,
            pool,
            description,
        }
    }

    /// Hash raw bytes arriving on the shared key/type-name path.
    ///
    /// Input equal to the type name hashes unchanged; anything else is
    /// hashed with eight trailing zero bytes.
    ///
    /// # Errors
    ///
    /// Returns [`HashError::Pool`] if a key longer than the inline tiers
    /// needs a pooled buffer and the pool cannot supply one.
    pub fn hash(&self, data: &[u8]) -> Result<i32, HashError> {
        self.hash_request(self.classify(data))
    }

    /// Hash a string key through the same path as [`hash`](Self::hash).
    pub fn hash_str(&self, key: &str) -> Result<i32, HashError> {
        self.hash(key.as_bytes())
    }

    /// Decide what kind of request `data` represents.
    pub fn classify<'a>(&self, data: &'a [u8]) -> HashRequest<'a> {
        if is_type_name(data, &self.grain_type) {
            trace!(grain_type = %self.grain_type, "classified_as_type_name");
            HashRequest::TypeName
        } else {
            HashRequest::Key(data)
        }
    }

    /// Hash an explicit request without inspecting its bytes.
    pub fn hash_request(&self, request: HashRequest<'_>) -> Result<i32, HashError> {
        match request {
            HashRequest::TypeName => Ok(self.inner.hash(self.grain_type.as_bytes())),
            HashRequest::Key(data) => self.hash_extended(data),
        }
    }

    /// Hash `data ++ [0; EXTENSION_LEN]`.
    fn hash_extended(&self, data: &[u8]) -> Result<i32, HashError> {
        // Slice lengths never exceed isize::MAX, so this cannot overflow.
        let extended_len = data.len() + EXTENSION_LEN;
        let mut scratch = ScratchBuffer::acquire(extended_len, &self.pool)?;

        let extended = &mut scratch.as_mut_slice()[..extended_len];
        let (key, extension) = extended.split_at_mut(data.len());
        key.copy_from_slice(data);
        // Pooled buffers carry stale bytes.
        extension.fill(0);

        Ok(self.inner.hash(extended))
    }
}

impl<H> KeyHasher<H> {
    /// Diagnostic name naming the underlying algorithm. Carries no
    /// behavioural contract.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The configured grain type name.
    pub fn grain_type(&self) -> &GrainTypeName {
        &self.grain_type
    }

    /// The pool backing keys longer than the inline tiers.
    pub fn pool(&self) -> &Arc<BufferPool> {
        &self.pool
    }

    /// The underlying hash primitive.
    pub fn inner(&self) -> &H {
        &self.inner
    }
}

impl<H> fmt::Debug for KeyHasher<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHasher")
            .field("grain_type", &self.grain_type)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use grainhash_jenkins::JenkinsHash;
    use grainhash_test_utils::{poison_pool, RecordingHasher};

    #[test]
    fn type_name_is_not_extended() {
        let hasher = KeyHasher::new(RecordingHasher::new(), "MyGrain");
        hasher.hash(b"MyGrain").unwrap();
        assert_eq!(hasher.inner().calls(), vec![b"MyGrain".to_vec()]);
    }

    #[test]
    fn key_is_extended_with_eight_zeros() {
        let hasher = KeyHasher::new(RecordingHasher::new(), "MyGrain");
        hasher.hash(b"abc").unwrap();
        assert_eq!(hasher.inner().calls(), vec![b"abc\0\0\0\0\0\0\0\0".to_vec()]);
    }

    #[test]
    fn empty_key_hashes_eight_zeros() {
        let hasher = KeyHasher::new(RecordingHasher::new(), "MyGrain");
        hasher.hash(b"").unwrap();
        assert_eq!(hasher.inner().calls(), vec![vec![0u8; 8]]);
    }

    #[test]
    fn stale_pool_bytes_never_leak_into_extension() {
        let pool = Arc::new(BufferPool::default());
        poison_pool(&pool, 1024, 0xEE);
        let hasher = KeyHasher::with_pool(RecordingHasher::new(), "MyGrain", Arc::clone(&pool));

        let key = vec![b'k'; 600];
        hasher.hash(&key).unwrap();

        let calls = hasher.inner().calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].len(), 608);
        assert_eq!(&calls[0][..600], &key[..]);
        assert!(calls[0][600..].iter().all(|&b| b == 0));
    }

    #[test]
    fn pooled_buffer_returned_after_hash() {
        let pool = Arc::new(BufferPool::default());
        let hasher = KeyHasher::with_pool(JenkinsHash, "MyGrain", Arc::clone(&pool));
        assert_eq!(pool.retained(), 0);
        hasher.hash(&[1u8; 300]).unwrap();
        assert_eq!(pool.retained(), 1);
        hasher.hash(&[2u8; 300]).unwrap();
        assert_eq!(pool.retained(), 1);
    }

    #[test]
    fn short_keys_do_not_touch_pool() {
        let pool = Arc::new(BufferPool::default());
        let hasher = KeyHasher::with_pool(JenkinsHash, "MyGrain", Arc::clone(&pool));
        hasher.hash(&[9u8; 248]).unwrap();
        assert_eq!(pool.retained(), 0);
    }

    #[test]
    fn explicit_key_request_always_extends() {
        let hasher = KeyHasher::new(RecordingHasher::new(), "MyGrain");
        hasher.hash_request(HashRequest::key("MyGrain")).unwrap();
        assert_eq!(hasher.inner().calls(), vec![b"MyGrain\0\0\0\0\0\0\0\0".to_vec()]);
    }

    #[test]
    fn explicit_type_name_request_hashes_name() {
        let hasher = KeyHasher::new(JenkinsHash, "MyGrain");
        assert_eq!(
            hasher.hash_request(HashRequest::TypeName).unwrap(),
            JenkinsHash.hash(b"MyGrain")
        );
    }

    #[test]
    fn classify_distinguishes_name_from_key() {
        let hasher = KeyHasher::new(JenkinsHash, "MyGrain");
        assert!(hasher.classify(b"MyGrain").is_type_name());
        assert_eq!(hasher.classify(b"abc"), HashRequest::Key(b"abc"));
    }

    #[test]
    fn hash_str_matches_bytes() {
        let hasher = KeyHasher::new(JenkinsHash, "MyGrain");
        assert_eq!(hasher.hash_str("user-42").unwrap(), hasher.hash(b"user-42").unwrap());
    }

    #[test]
    fn description_names_inner_algorithm() {
        let hasher = KeyHasher::new(JenkinsHash, "MyGrain");
        assert_eq!(hasher.description(), "LegacyStringKeyHasher(JenkinsHash)");
        assert_eq!(hasher.grain_type().as_str(), "MyGrain");
    }

    #[test]
    fn hasher_is_send_and_sync() {
        fn assert<T: Send + Sync>() {}
        assert::<KeyHasher<JenkinsHash>>();
    }
}
