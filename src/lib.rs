//! Classical quadrature rules and a benchmark harness for comparing them.
//!
//! `quadbench` approximates definite integrals of single-variable real
//! functions with seven classical techniques and measures how each one
//! trades accuracy for work as the subdivision count grows.
//!
//! # Modules
//!
//! - [`quadrature`] is the engine: seven stateless rules behind one request
//!   contract ([`quadrature::IntegrationRequest`] in, `f64` out, with
//!   `f64::NAN` signalling an invalid request)
//! - [`bench`] is the driver: known test integrals, interval sweeps,
//!   wall-clock timing, and CSV reporting
//!
//! # Example
//!
//! ```
//! use quadbench::quadrature::{simpson_one_third, IntegrationRequest};
//!
//! // Integrate x^2 over [0, 1]; Simpson's 1/3 is exact for quadratics.
//! let f = |x: f64| x * x;
//! let request = IntegrationRequest::new(&f, 0.0, 1.0, 100);
//! let result = simpson_one_third(&request);
//! assert!((result - 1.0 / 3.0).abs() < 1e-10);
//! ```

pub mod bench;
pub mod quadrature;
