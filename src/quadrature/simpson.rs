//! Simpson's 1/3 and 3/8 rules.
//!
//! Both fit low-degree polynomials through groups of samples instead of
//! straight lines: the 1/3 rule a parabola through interval pairs, the
//! 3/8 rule a cubic through interval triples. Each therefore constrains
//! the subdivision count (even for 1/3, a multiple of 3 for 3/8) and
//! reports a count that does not comply as `f64::NAN`, the same sentinel
//! used for a malformed request.

use super::request::IntegrationRequest;

/// Composite Simpson's 1/3 rule.
///
/// Requires an even `intervals`. Endpoint evaluations carry weight 1,
/// odd-indexed interior points (`i = 1, 3, ..., intervals-1`) weight 4,
/// even-indexed interior points (`i = 2, 4, ..., intervals-2`) weight 2;
/// the weighted sum is scaled by `dx / 3`. Exact for polynomials up to
/// degree 3.
///
/// # Returns
///
/// The approximate integral, or `f64::NAN` for an invalid request or an
/// odd `intervals`.
///
/// # Example
///
/// ```
/// use quadbench::quadrature::{simpson_one_third, IntegrationRequest};
///
/// let f = |x: f64| x * x;
/// let request = IntegrationRequest::new(&f, 0.0, 1.0, 100);
/// let result = simpson_one_third(&request);
/// assert!((result - 1.0 / 3.0).abs() < 1e-10);
/// ```
pub fn simpson_one_third(request: &IntegrationRequest<'_>) -> f64 {
    let Some(f) = request.checked_integrand() else {
        return f64::NAN;
    };
    if request.intervals % 2 != 0 {
        return f64::NAN;
    }

    let a = request.lower;
    let b = request.upper;
    let n = request.intervals;
    let dx = request.dx();

    let mut sum = f(a) + f(b);

    for i in (1..n).step_by(2) {
        sum += 4.0 * f(a + i as f64 * dx);
    }

    for i in (2..n - 1).step_by(2) {
        sum += 2.0 * f(a + i as f64 * dx);
    }

    sum * dx / 3.0
}

/// Composite Simpson's 3/8 rule.
///
/// Requires `intervals` divisible by 3. Endpoint evaluations carry
/// weight 1; each interior point `i = 1, ..., intervals-1` carries
/// weight 2 when `i` is a multiple of 3 (the seam between cubic groups)
/// and weight 3 otherwise; the weighted sum is scaled by `3*dx/8`.
///
/// # Returns
///
/// The approximate integral, or `f64::NAN` for an invalid request or an
/// `intervals` not divisible by 3.
///
/// # Example
///
/// ```
/// use quadbench::quadrature::{simpson_three_eighths, IntegrationRequest};
///
/// let f = |x: f64| x * x * x;
/// let request = IntegrationRequest::new(&f, 0.0, 1.0, 99);
/// let result = simpson_three_eighths(&request);
/// assert!((result - 0.25).abs() < 1e-10);
/// ```
pub fn simpson_three_eighths(request: &IntegrationRequest<'_>) -> f64 {
    let Some(f) = request.checked_integrand() else {
        return f64::NAN;
    };
    if request.intervals % 3 != 0 {
        return f64::NAN;
    }

    let a = request.lower;
    let b = request.upper;
    let n = request.intervals;
    let dx = request.dx();

    let mut sum = f(a) + f(b);

    for i in 1..n {
        if i % 3 == 0 {
            sum += 2.0 * f(a + i as f64 * dx);
        } else {
            sum += 3.0 * f(a + i as f64 * dx);
        }
    }

    sum * dx * 3.0 / 8.0
}
