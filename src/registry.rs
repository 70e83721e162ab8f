use tracing::debug;

use crate::hashers::{Blake2b64, Fx, Hash64, Xxh3, Xxh64};
use crate::sampler::run_windowed;
use crate::sweep::sweep;

/// Benchmark body: performs the requested number of iterations and returns
/// the number actually performed (always equal to the request).
pub type BenchFn = Box<dyn Fn(u64) -> u64 + Send + Sync>;

/// Display name of the inert unit delimiting one hasher's block from the next.
pub const SEPARATOR: &str = "-";

/// Sink for measurement units. The benchmark runner (criterion bench or the
/// CLI quick runner) implements this; execution order is registration order.
pub trait Runner {
    fn register(&mut self, name: String, body: BenchFn);
}

/// One registered benchmark: one hasher bound to one slice length, or a
/// separator. Immutable after creation.
pub struct MeasurementUnit {
    name: String,
    body: BenchFn,
}

impl MeasurementUnit {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_separator(&self) -> bool {
        self.name == SEPARATOR
    }

    /// Runs the unit for exactly `iters` iterations; returns the count
    /// performed (0 for separators).
    pub fn run(&self, iters: u64) -> u64 {
        (self.body)(iters)
    }
}

/// In-crate runner that just collects units, for the CLI and for tests.
#[derive(Default)]
pub struct UnitRegistry {
    units: Vec<MeasurementUnit>,
}

impl UnitRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn units(&self) -> &[MeasurementUnit] {
        &self.units
    }
}

impl Runner for UnitRegistry {
    fn register(&mut self, name: String, body: BenchFn) {
        self.units.push(MeasurementUnit { name, body });
    }
}

/// Registers the full sweep for one hasher, then an inert separator so the
/// report visually delimits hasher blocks.
pub fn register_hasher_sweep<R, H>(runner: &mut R, corpus: &'static [u8], name: &str, hasher: H)
where
    R: Runner + ?Sized,
    H: Hash64 + Send + Sync + 'static,
{
    for size in sweep() {
        let k = size.k();
        runner.register(
            format!("{}: {}", name, size),
            Box::new(move |iters| run_windowed(corpus, hasher, k, iters)),
        );
    }
    runner.register(SEPARATOR.to_string(), Box::new(|_| 0));
    debug!(hasher = name, "registered size sweep");
}

/// Registers every candidate hasher against the shared corpus. The adapter
/// table here is the single place a new candidate gets added.
pub fn register_all<R: Runner + ?Sized>(runner: &mut R, corpus: &'static [u8]) {
    register_hasher_sweep(runner, corpus, "Blake2b64", Blake2b64);
    register_hasher_sweep(runner, corpus, "Xxh64", Xxh64);
    register_hasher_sweep(runner, corpus, "Xxh3", Xxh3);
    register_hasher_sweep(runner, corpus, "Fx", Fx);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sweep::UNITS_PER_HASHER;

    #[test]
    fn test_register_all_unit_count() {
        let mut registry = UnitRegistry::new();
        register_all(&mut registry, crate::corpus::corpus());
        assert_eq!(registry.units().len(), 4 * UNITS_PER_HASHER);
        assert_eq!(registry.units().len(), 128);
    }

    #[test]
    fn test_one_separator_per_hasher_block() {
        let mut registry = UnitRegistry::new();
        register_all(&mut registry, crate::corpus::corpus());
        let separators = registry.units().iter().filter(|u| u.is_separator()).count();
        assert_eq!(separators, 4);
        // Every block ends with its separator.
        for block in registry.units().chunks(UNITS_PER_HASHER) {
            assert!(block.last().is_some_and(|u| u.is_separator()));
            assert_eq!(block.iter().filter(|u| u.is_separator()).count(), 1);
        }
    }

    #[test]
    fn test_unit_names_in_sweep_order() {
        let mut registry = UnitRegistry::new();
        register_hasher_sweep(&mut registry, crate::corpus::corpus(), "Xxh64", Xxh64);
        let names: Vec<&str> = registry.units().iter().map(|u| u.name()).collect();
        assert_eq!(names[0], "Xxh64: k=1");
        assert_eq!(names[14], "Xxh64: k=15");
        assert_eq!(names[15], "Xxh64: k=2^0");
        assert_eq!(names[30], "Xxh64: k=2^15");
        assert_eq!(names[31], SEPARATOR);
    }

    #[test]
    fn test_unit_returns_requested_iterations() {
        let mut registry = UnitRegistry::new();
        register_hasher_sweep(&mut registry, crate::corpus::corpus(), "Fx", Fx);
        let unit = &registry.units()[0];
        assert_eq!(unit.run(0), 0);
        assert_eq!(unit.run(17), 17);
    }

    #[test]
    fn test_separator_performs_no_work() {
        let mut registry = UnitRegistry::new();
        register_hasher_sweep(&mut registry, crate::corpus::corpus(), "Fx", Fx);
        let separator = registry.units().last().unwrap();
        assert!(separator.is_separator());
        assert_eq!(separator.run(1000), 0);
    }
}
