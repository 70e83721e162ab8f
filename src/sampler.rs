use std::hint::black_box;

use crate::hashers::Hash64;

/// Performs exactly `iters` hash calls over shifting, wrapping `k`-byte
/// windows of `corpus`, discarding every digest.
///
/// The cursor starts at 0, advances by one byte per call, and resets to 0
/// whenever the next window would run past the corpus end, so a fixed buffer
/// services any iteration count. Each digest is routed through `black_box`
/// so the call cannot be elided as dead code.
///
/// `k` exceeding the corpus length is a misconfigured benchmark and panics.
/// Returns the number of calls performed, always `iters`.
pub fn run_windowed<H: Hash64>(corpus: &[u8], hasher: H, k: usize, iters: u64) -> u64 {
    assert!(
        k <= corpus.len(),
        "slice length {} exceeds corpus length {}",
        k,
        corpus.len()
    );
    let mut pos = 0usize;
    for _ in 0..iters {
        if pos + k > corpus.len() {
            pos = 0;
        }
        black_box(hasher.digest(&corpus[pos..pos + k]));
        pos += 1;
    }
    iters
}
