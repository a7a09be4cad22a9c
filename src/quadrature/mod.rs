//! Quadrature rules for approximating definite integrals.
//!
//! Every rule shares one contract: it takes an [`IntegrationRequest`]
//! describing the integrand, the bounds, and the subdivision count, and
//! returns the approximation as an `f64`. An invalid request, or an unmet
//! rule-specific divisibility precondition, yields `f64::NAN` without the
//! integrand being evaluated.
//!
//! # Available Rules
//!
//! | Rule | Order | Precondition |
//! |------|-------|--------------|
//! | [`left_rectangle`] | O(h) | none |
//! | [`right_rectangle`] | O(h) | none |
//! | [`midpoint`] | O(h²) | none |
//! | [`trapezoidal`] | O(h²) | none |
//! | [`simpson_one_third`] | O(h⁴) | `intervals` even |
//! | [`simpson_three_eighths`] | O(h⁴) | `intervals` divisible by 3 |
//! | [`monte_carlo`] | O(1/√n) | none (consumes a caller-owned RNG) |
//!
//! # Choosing a Rule
//!
//! - **Smooth integrands**: [`simpson_one_third`] or
//!   [`simpson_three_eighths`] for the fastest convergence
//! - **Minimal assumptions**: [`midpoint`] or [`trapezoidal`]
//! - **Reference/teaching baselines**: the endpoint rectangle rules
//! - **Reproducible sampling experiments**: [`monte_carlo`] with a seeded
//!   generator
//!
//! All seven are also reachable through the [`Method`] enum when the rule
//! itself is data, as in the benchmark driver.

mod error;
mod method;
mod monte_carlo;
mod rectangle;
mod request;
mod simpson;
mod trapezoid;

pub use error::InvalidRequest;
pub use method::Method;
pub use monte_carlo::monte_carlo;
pub use rectangle::{left_rectangle, midpoint, right_rectangle};
pub use request::{Integrand, IntegrationRequest};
pub use simpson::{simpson_one_third, simpson_three_eighths};
pub use trapezoid::trapezoidal;
