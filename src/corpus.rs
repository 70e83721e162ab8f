use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Corpus size: 1 MiB, small enough to stay cache-resident for small keys.
pub const CORPUS_LEN: usize = 1 << 20;

/// Fixed seed so every run hashes the same bytes.
pub const CORPUS_SEED: u64 = 1729;

static CORPUS: Lazy<Vec<u8>> = Lazy::new(|| generate(CORPUS_LEN, CORPUS_SEED));

/// The shared, process-lifetime benchmark corpus. Generated on first access,
/// read-only afterwards.
pub fn corpus() -> &'static [u8] {
    &CORPUS
}

/// Generates a deterministic pseudo-random byte buffer.
pub fn generate(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut buf = vec![0u8; len];
    rng.fill_bytes(&mut buf);
    buf
}
