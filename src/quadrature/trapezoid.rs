//! Trapezoidal rule.

use super::request::IntegrationRequest;

/// Composite trapezoidal rule.
///
/// Joins consecutive samples with straight lines: the two endpoint
/// evaluations carry weight 0.5, every interior point `lower + i*dx` for
/// `i = 1, ..., intervals-1` carries weight 1, and the weighted sum is
/// scaled by `dx`. Equivalent to averaging the left and right rectangle
/// rules, with O(h²) accuracy for smooth integrands.
///
/// # Returns
///
/// The approximate integral, or `f64::NAN` for an invalid request.
///
/// # Example
///
/// ```
/// use quadbench::quadrature::{trapezoidal, IntegrationRequest};
///
/// // Integrate sin(x) from 0 to pi; exact value is 2.
/// let f = |x: f64| x.sin();
/// let request = IntegrationRequest::new(&f, 0.0, std::f64::consts::PI, 1000);
/// let result = trapezoidal(&request);
/// assert!((result - 2.0).abs() < 1e-4);
/// ```
pub fn trapezoidal(request: &IntegrationRequest<'_>) -> f64 {
    let Some(f) = request.checked_integrand() else {
        return f64::NAN;
    };

    let a = request.lower;
    let b = request.upper;
    let n = request.intervals;
    let dx = request.dx();

    let mut sum = 0.5 * (f(a) + f(b));
    for i in 1..n {
        sum += f(a + i as f64 * dx);
    }

    sum * dx
}
