use std::fmt;

/// One slice length in the size sweep, tagged with how it was derived so the
/// benchmark name renders the way the sweep was specified (`k=12` vs `k=2^4`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SizeSpec {
    /// Linear sweep entry: k itself, exercising small-key overhead.
    Linear(usize),
    /// Exponential sweep entry: k = 2^i, exercising large-buffer throughput.
    Pow2(u32),
}

impl SizeSpec {
    /// The slice length in bytes.
    pub fn k(self) -> usize {
        match self {
            SizeSpec::Linear(k) => k,
            SizeSpec::Pow2(i) => 1usize << i,
        }
    }
}

impl fmt::Display for SizeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeSpec::Linear(k) => write!(f, "k={}", k),
            SizeSpec::Pow2(i) => write!(f, "k=2^{}", i),
        }
    }
}

/// The full size sweep, in registration order: k = 1..16 linear, then
/// k = 2^0..2^15. 31 entries, every one within the corpus.
pub fn sweep() -> Vec<SizeSpec> {
    let linear = (1..16).map(SizeSpec::Linear);
    let pow2 = (0..16).map(SizeSpec::Pow2);
    linear.chain(pow2).collect()
}

/// Sizes registered per hasher, including the trailing separator.
pub const UNITS_PER_HASHER: usize = 15 + 16 + 1;
