use blake2::digest::consts::U8;
use blake2::{Blake2b, Digest};
use xxhash_rust::xxh3::xxh3_64;
use xxhash_rust::xxh64::xxh64;

/// Uniform contract every candidate hash function is adapted to: reduce a
/// byte slice to a 64-bit digest. Implementations are stateless value types;
/// constructing one is free, so a fresh instance may be made per invocation.
pub trait Hash64: Copy {
    fn digest(self, data: &[u8]) -> u64;
}

/// BLAKE2b truncated to 64 bits. The cryptographic baseline; expected to be
/// the slowest entry by a wide margin.
#[derive(Clone, Copy, Debug, Default)]
pub struct Blake2b64;

impl Hash64 for Blake2b64 {
    fn digest(self, data: &[u8]) -> u64 {
        let mut hasher = Blake2b::<U8>::new();
        hasher.update(data);
        u64::from_le_bytes(hasher.finalize().into())
    }
}

/// Classic xxHash, 64-bit variant, seed 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh64;

impl Hash64 for Xxh64 {
    fn digest(self, data: &[u8]) -> u64 {
        xxh64(data, 0)
    }
}

/// XXH3, the current-generation xxHash.
#[derive(Clone, Copy, Debug, Default)]
pub struct Xxh3;

impl Hash64 for Xxh3 {
    fn digest(self, data: &[u8]) -> u64 {
        xxh3_64(data)
    }
}

/// FxHash, the rustc hash table hash.
#[derive(Clone, Copy, Debug, Default)]
pub struct Fx;

impl Hash64 for Fx {
    fn digest(self, data: &[u8]) -> u64 {
        fxhash::hash64(data)
    }
}
