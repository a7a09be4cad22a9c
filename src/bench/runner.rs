//! The sweep loop: drive every rule across every problem and count.

use std::time::{Duration, Instant};

use rand::Rng;
use tracing::info;

use crate::quadrature::{IntegrationRequest, Method};

use super::problem::Problem;

/// Interval counts of the standard sweep, spanning four decades.
pub const DEFAULT_INTERVAL_COUNTS: [i64; 5] = [100, 1_000, 10_000, 100_000, 1_000_000];

/// Outcome of one `(problem, method, intervals)` benchmark case.
#[derive(Debug, Clone)]
pub struct BenchmarkRecord {
    /// Name of the integrand.
    pub function_name: &'static str,
    /// The rule that produced this record.
    pub method: Method,
    /// The interval count actually used, after alignment.
    pub intervals: i64,
    /// The computed integral; `NAN` marks an invalid case.
    pub result: f64,
    /// `|result - exact|`; `NAN` when the result is invalid.
    pub absolute_error: f64,
    /// Wall-clock duration of the single rule invocation.
    pub duration: Duration,
}

impl BenchmarkRecord {
    /// Duration in milliseconds with fractional part.
    pub fn execution_time_ms(&self) -> f64 {
        self.duration.as_secs_f64() * 1000.0
    }
}

/// Round `intervals` up to the nearest count `method` accepts.
///
/// Simpson's 1/3 needs an even count and Simpson's 3/8 a multiple of 3;
/// the sweep bumps a non-conforming count to the next valid one instead
/// of letting the precondition trip. Every other rule takes the count
/// as-is.
pub fn align_intervals(method: Method, intervals: i64) -> i64 {
    match method.required_divisor() {
        Some(divisor) => intervals + (divisor - intervals % divisor) % divisor,
        None => intervals,
    }
}

/// Run the full sweep: every method on every problem at every count.
///
/// Each case times a single rule invocation with [`Instant`] and compares
/// the outcome against the problem's exact value. The generator is shared
/// across the whole sweep as one continuous stream seeded by the caller,
/// so Monte Carlo rows are reproducible from the initial seed.
pub fn run_sweep<R: Rng>(
    problems: &[Problem],
    interval_counts: &[i64],
    rng: &mut R,
) -> Vec<BenchmarkRecord> {
    let total = problems.len() * interval_counts.len() * Method::ALL.len();
    info!(cases = total, "starting benchmark sweep");

    let mut records = Vec::with_capacity(total);

    for problem in problems {
        for &count in interval_counts {
            for method in Method::ALL {
                let intervals = align_intervals(method, count);
                let f = problem.function;
                let request =
                    IntegrationRequest::new(&f, problem.lower, problem.upper, intervals);

                let start = Instant::now();
                let result = method.integrate(&request, rng);
                let duration = start.elapsed();

                let absolute_error = (result - problem.exact).abs();

                records.push(BenchmarkRecord {
                    function_name: problem.name,
                    method,
                    intervals,
                    result,
                    absolute_error,
                    duration,
                });
            }
        }
        info!(function = problem.name, "completed benchmarks");
    }

    records
}
