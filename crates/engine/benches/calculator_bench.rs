//! Benchmarks for the forward calculator and sweeps.
//! Run with: cargo bench -p forecast-engine

use forecast_engine::{break_even_points, calculate, insights, sensitivity_ctr, SensitivityRange};
use std::hint::black_box;

fn main() {
    // Warmup
    for _ in 0..1_000 {
        black_box(calculate(10_000.0, 8.0, 2.5, 3.0, 150.0));
    }

    let iterations = 1_000_000u32;
    let start = std::time::Instant::now();
    for i in 0..iterations {
        let budget = 1_000.0 + f64::from(i % 1_000);
        let m = calculate(black_box(budget), 8.0, 2.5, 3.0, 150.0);
        black_box(insights(&m, 2.5, 3.0, 150.0));
    }
    let elapsed = start.elapsed();

    println!("=== Calculator Benchmark ===");
    println!("Iterations:  {}", iterations);
    println!("Total time:  {:?}", elapsed);
    println!("Per call:    {:?}", elapsed / iterations);

    let sweeps = 100_000u32;
    let start = std::time::Instant::now();
    for _ in 0..sweeps {
        black_box(break_even_points(8.0, 2.5, 3.0, 150.0, black_box(30_000.0)));
        black_box(sensitivity_ctr(10_000.0, 8.0, 2.5, 3.0, 150.0, SensitivityRange::default()));
    }
    let elapsed = start.elapsed();

    println!("Sweep pairs: {}", sweeps);
    println!("Per pair:    {:?}", elapsed / sweeps);
}
