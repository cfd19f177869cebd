//! Queue Radix Sort Demo
//!
//! Sorts pseudorandom integers with the linked-queue radix sort and compares
//! it against:
//! - **Counting radix sort**: the same digit passes over flat arrays
//! - **pdqsort**: the standard library's unstable comparison sort
//! - **Parallel pdqsort**: rayon across all cores
//!
//! Set `RUST_LOG=queue_radix_sort=trace` to log every pass.

use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use queue_radix_sort::{baseline, counting, digits_needed, InputGenerator, RadixSorter, SortConfig};
use tracing_subscriber::EnvFilter;

/// Inputs up to this many are printed before and after sorting.
const PRINT_LIMIT: usize = 20;

/// Radix sort a batch of random integers and time it against comparison sorts.
#[derive(Parser, Debug)]
#[command(name = "radix", version, about)]
struct Args {
    /// Radix (number of buckets per pass)
    #[arg(short, long, default_value_t = 10)]
    radix: u32,

    /// Number of values to sort
    #[arg(short = 'n', long, default_value_t = 100_000)]
    count: usize,

    /// Base-10 length of the values; inputs are drawn from [0, 10^length)
    #[arg(short, long, default_value_t = 5)]
    length: u32,

    /// Seed for reproducible input (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let end = 10u32
        .checked_pow(args.length)
        .with_context(|| format!("10^{} does not fit in a u32", args.length))?;

    println!("radix: {}", args.radix);
    println!("n: {}", args.count);
    println!("range: [0, {})", end);

    let mut generator = match args.seed {
        Some(seed) => InputGenerator::seeded(seed),
        None => InputGenerator::from_entropy(),
    };
    let data = generator.values(args.count, end);
    if args.count <= PRINT_LIMIT {
        data.iter().for_each(|value| println!("{}", value));
    }

    let length = digits_needed(end - 1, args.radix)?;
    println!("length in base-{}: {}", args.radix, length);

    let sorter = RadixSorter::new(SortConfig::new(args.radix, length))
        .context("invalid radix sort configuration")?;

    // Queue radix sort
    println!("\n--- Queue Radix Sort (Knuth Algorithm R) ---");
    let start = Instant::now();
    let sorted = sorter.sort(&data)?;
    let radix_duration = start.elapsed();
    report("queue radix sort", radix_duration, &data, &sorted);

    if args.count <= PRINT_LIMIT {
        println!();
        sorted.iter().for_each(|value| println!("{}", value));
    }

    // Counting radix sort
    println!("\n--- Counting Radix Sort (array buckets) ---");
    let mut counted = data.clone();
    let start = Instant::now();
    counting::sort(&mut counted, sorter.plan());
    let counting_duration = start.elapsed();
    report("counting radix sort", counting_duration, &data, &counted);

    // std pdqsort
    println!("\n--- CPU Sorting (std::sort unstable / pdqsort) ---");
    let mut std_sorted = data.clone();
    let start = Instant::now();
    baseline::sort_unstable(&mut std_sorted);
    let std_duration = start.elapsed();
    report("pdqsort", std_duration, &data, &std_sorted);

    // rayon parallel pdqsort
    println!("\n--- CPU Sorting (rayon parallel pdqsort) ---");
    let mut par_sorted = data.clone();
    let start = Instant::now();
    baseline::parallel_sort(&mut par_sorted);
    let par_duration = start.elapsed();
    report("parallel pdqsort", par_duration, &data, &par_sorted);

    println!("\n--- Performance Comparison ---");
    compare("Queue radix", radix_duration, "pdqsort", std_duration);
    compare("Queue radix", radix_duration, "Counting radix", counting_duration);
    compare("Queue radix", radix_duration, "Parallel pdqsort", par_duration);

    Ok(())
}

/// Print the elapsed time of one sort and whether it matches the reference.
fn report(name: &str, elapsed: Duration, inputs: &[u32], sorted: &[u32]) {
    println!("{} time: {:.3} ms", name, elapsed.as_secs_f64() * 1000.0);
    if baseline::matches_reference(inputs, sorted) {
        println!("{} verified: OK", name);
    } else {
        println!("ERROR: {} failed verification!", name);
    }
}

fn compare(name: &str, duration: Duration, other_name: &str, other: Duration) {
    let speedup = other.as_secs_f64() / duration.as_secs_f64();
    if speedup > 1.0 {
        println!("{} vs {}: {} is {:.2}x faster", name, other_name, name, speedup);
    } else {
        println!("{} vs {}: {} is {:.2}x faster", name, other_name, other_name, 1.0 / speedup);
    }
}
