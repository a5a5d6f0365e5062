//! Count a synthetic latency-style workload and print all three dump
//! formats, then the median of the change between two snapshots.

use scaled_histogram::{
    enum_histogram, int_histogram, log_histogram, EnumDumper, GenericDumper, IntDumper,
};

fn main() -> scaled_histogram::Result<()> {
    // Log-spaced histogram: microsecond latencies up to 10s.
    let mut latency = log_histogram(40, 0.0, 10_000_000.0)?;
    for i in 0..5000u32 {
        // Bursty synthetic workload with a heavy tail.
        let v = (i % 97) as f64 * 120.0 + ((i % 11) as f64).exp2() * 50.0;
        latency.count(v);
    }

    println!("latency histogram ({} bins):", latency.capacity());
    let mut dumper = GenericDumper::new(std::io::stdout());
    latency.dump(&mut dumper)?;

    // Enum histogram: four variants plus out-of-range guards.
    let mut variants = enum_histogram(3)?;
    for v in [0.0, 1.0, 1.0, 2.0, 3.0, -4.0, 17.0] {
        variants.count(v);
    }
    println!("\nvariant histogram:");
    let mut dumper = EnumDumper::new(std::io::stdout());
    variants.dump(&mut dumper)?;

    // Integer buckets.
    let mut retries = int_histogram(16)?;
    for v in [0.0, 0.0, 0.0, 1.0, 1.0, 2.0, 5.0] {
        retries.count(v);
    }
    println!("\nretry histogram:");
    let mut dumper = IntDumper::new(std::io::stdout());
    retries.dump(&mut dumper)?;

    // Snapshot comparison: median latency of the traffic that arrived
    // between the two snapshots.
    let snapshot = latency.clone();
    let mut live = latency;
    for i in 0..2000u32 {
        live.count((i % 89) as f64 * 300.0);
    }
    println!(
        "\nmedian latency since snapshot: {:.1}",
        snapshot.delta_median(&live)
    );

    Ok(())
}
