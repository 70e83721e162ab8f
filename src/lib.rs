pub mod corpus;
pub mod hashers;
pub mod registry;
pub mod sampler;
pub mod sweep;
pub mod utils;

use anyhow::Result;
use clap::Parser;
use std::time::Instant;
use tracing::info;

use registry::{register_all, UnitRegistry};
use utils::{format_rate, format_time};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Print registered benchmark names without running anything
    #[arg(long)]
    pub list: bool,

    /// Iterations per measurement unit for the quick single-pass run
    #[arg(long, default_value_t = 100_000)]
    pub iters: u64,

    /// Only run units whose name contains this substring
    #[arg(long)]
    pub filter: Option<String>,
}

const NAME_COL: usize = 40;
const RULE: &str =
    "================================================================";

/// Quick single-pass run: executes every registered unit once at a fixed
/// iteration count and prints a throughput table. For statistically
/// calibrated numbers use `cargo bench` instead.
pub fn run(args: Args) -> Result<()> {
    let mut registry = UnitRegistry::new();
    register_all(&mut registry, corpus::corpus());
    info!(units = registry.units().len(), "registered benchmarks");

    if args.list {
        for unit in registry.units() {
            println!("{}", unit.name());
        }
        return Ok(());
    }

    println!("{}", RULE);
    println!("{:<NAME_COL$}{:>12}{:>12}", "hashmark", "time/iter", "iters/s");
    println!("{}", RULE);

    for unit in registry.units() {
        if unit.is_separator() {
            println!("{}", RULE.replace('=', "-"));
            continue;
        }
        if let Some(filter) = &args.filter {
            if !unit.name().contains(filter.as_str()) {
                continue;
            }
        }

        let start = Instant::now();
        let done = unit.run(args.iters);
        let elapsed = start.elapsed();

        let ns_per_iter = if done == 0 {
            0.0
        } else {
            elapsed.as_nanos() as f64 / done as f64
        };
        let rate = if ns_per_iter > 0.0 {
            1e9 / ns_per_iter
        } else {
            0.0
        };
        println!(
            "{:<NAME_COL$}{:>12}{:>12}",
            unit.name(),
            format_time(ns_per_iter),
            format_rate(rate)
        );
    }

    Ok(())
}
