//! Synthetic CPU-bound workload and its chat report.
//!
//! The workload is a fixed sum of trigonometric and square-root terms, so the
//! total depends only on the iteration count. Only the elapsed time varies
//! between runs.

use std::time::{Duration, Instant};

use tracing::info;

pub const ITERATIONS: u64 = 1_000_000;

// Truncated literals, kept as-is so totals line up with the other bots.
#[allow(clippy::approx_constant)]
const PI_LITERAL: f64 = 3.14159;
#[allow(clippy::approx_constant)]
const E_LITERAL: f64 = 2.71828;
const SQRT_SCALE: f64 = 1.414;

/// Outcome of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    pub total: f64,
    pub elapsed: Duration,
}

impl BenchmarkResult {
    /// Formats the result as the chat report.
    ///
    /// ```
    /// use std::time::Duration;
    /// use benchbot::benchmark::BenchmarkResult;
    ///
    /// let report = BenchmarkResult { total: 1.5, elapsed: Duration::from_micros(12_500) }.report();
    /// assert!(report.ends_with("Temps d'exécution: 12.50ms"));
    /// ```
    #[must_use]
    pub fn report(&self) -> String {
        format!(
            "**Benchmark Rust**\n• Test: {} itérations avec opérations mathématiques\n• Résultat: {:.6}\n• Temps d'exécution: {:.2}ms",
            ITERATIONS,
            self.total,
            self.elapsed_ms()
        )
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Accumulates the workload for iteration `i`.
#[inline]
fn term(i: u64) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let x = i as f64;
    (x * PI_LITERAL).sin() + (x / E_LITERAL).cos() + x.sqrt() * SQRT_SCALE
}

/// Runs the workload and times the loop. Blocks the caller until done.
#[must_use]
pub fn measure() -> BenchmarkResult {
    let start = Instant::now();

    let mut total = 0.0_f64;
    for i in 0..ITERATIONS {
        total += term(i);
    }

    let elapsed = start.elapsed();
    info!(
        iterations = ITERATIONS,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "Benchmark finished"
    );

    BenchmarkResult { total, elapsed }
}

/// Runs the benchmark and returns the formatted report.
#[must_use]
pub fn run_benchmark() -> String {
    measure().report()
}
