//! Benchmark driver for the quadrature engine.
//!
//! Supplies test integrals with known exact values, sweeps each of the
//! seven rules across a range of interval counts, measures wall-clock
//! duration per call, and serializes one CSV row per case for downstream
//! analysis tooling.
//!
//! The driver is deliberately thin: all numerical content lives in
//! [`crate::quadrature`]. What the driver owns is policy: which
//! functions, which counts, how Simpson counts are aligned to their
//! divisibility constraints, and how an invalid outcome is rendered.

mod problem;
mod report;
mod runner;

pub use problem::{standard_problems, Problem};
pub use report::{write_report, CSV_HEADER};
pub use runner::{align_intervals, run_sweep, BenchmarkRecord, DEFAULT_INTERVAL_COUNTS};
