//! Rectangle (Riemann sum) rules.
//!
//! The simplest quadrature family: partition `[lower, upper]` into
//! `intervals` equal strips and approximate the area of each strip by a
//! rectangle. The three variants differ only in where the strip's height
//! is sampled, which is exactly what separates their accuracy: endpoint
//! sampling is O(h), midpoint sampling O(h²).

use super::request::IntegrationRequest;

/// Left-endpoint rectangle rule.
///
/// Samples each subinterval at its left edge: `f(lower + i*dx)` for
/// `i = 0, 1, ..., intervals-1`.
///
/// # Returns
///
/// The approximate integral, or `f64::NAN` for an invalid request.
///
/// # Example
///
/// ```
/// use quadbench::quadrature::{left_rectangle, IntegrationRequest};
///
/// let f = |x: f64| x * x;
/// let request = IntegrationRequest::new(&f, 0.0, 1.0, 10_000);
/// let result = left_rectangle(&request);
/// assert!((result - 1.0 / 3.0).abs() < 1e-3);
/// ```
pub fn left_rectangle(request: &IntegrationRequest<'_>) -> f64 {
    let Some(f) = request.checked_integrand() else {
        return f64::NAN;
    };

    let a = request.lower;
    let n = request.intervals;
    let dx = request.dx();

    let mut sum = 0.0;
    for i in 0..n {
        sum += f(a + i as f64 * dx);
    }

    sum * dx
}

/// Right-endpoint rectangle rule.
///
/// Samples each subinterval at its right edge: `f(lower + i*dx)` for
/// `i = 1, 2, ..., intervals`.
///
/// # Returns
///
/// The approximate integral, or `f64::NAN` for an invalid request.
pub fn right_rectangle(request: &IntegrationRequest<'_>) -> f64 {
    let Some(f) = request.checked_integrand() else {
        return f64::NAN;
    };

    let a = request.lower;
    let n = request.intervals;
    let dx = request.dx();

    let mut sum = 0.0;
    for i in 1..=n {
        sum += f(a + i as f64 * dx);
    }

    sum * dx
}

/// Midpoint rectangle rule.
///
/// Samples each subinterval at its center: `f(lower + (i + 0.5)*dx)`.
/// Centering cancels the leading error term of the endpoint rules.
///
/// # Returns
///
/// The approximate integral, or `f64::NAN` for an invalid request.
///
/// # Example
///
/// ```
/// use quadbench::quadrature::{midpoint, IntegrationRequest};
///
/// let f = |x: f64| x * x;
/// let request = IntegrationRequest::new(&f, 0.0, 1.0, 1000);
/// let result = midpoint(&request);
/// assert!((result - 1.0 / 3.0).abs() < 1e-6);
/// ```
pub fn midpoint(request: &IntegrationRequest<'_>) -> f64 {
    let Some(f) = request.checked_integrand() else {
        return f64::NAN;
    };

    let a = request.lower;
    let n = request.intervals;
    let dx = request.dx();

    let mut sum = 0.0;
    for i in 0..n {
        sum += f(a + (i as f64 + 0.5) * dx);
    }

    sum * dx
}
