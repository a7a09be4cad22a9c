//! Benchmark problems: integrands with known exact integrals.

/// One benchmark problem: a named integrand, its bounds, and the exact
/// value the approximations are judged against.
#[derive(Clone, Copy)]
pub struct Problem {
    /// Display name used in the report ("x^2", "sin(x)", ...).
    pub name: &'static str,
    /// The integrand.
    pub function: fn(f64) -> f64,
    /// Lower bound of integration.
    pub lower: f64,
    /// Upper bound of integration.
    pub upper: f64,
    /// The analytically known value of the integral.
    pub exact: f64,
}

fn quadratic(x: f64) -> f64 {
    x * x
}

fn sine(x: f64) -> f64 {
    x.sin()
}

fn gaussian(x: f64) -> f64 {
    (-x * x).exp()
}

// Integral of exp(-x^2) over [0, 1] = sqrt(pi)/2 * erf(1).
const GAUSSIAN_EXACT: f64 = 0.746824132812;

/// The standard problem set.
///
/// Three smooth integrands of increasing character: a polynomial the
/// Simpson rules integrate exactly, a half-period of sine, and a Gaussian
/// whose antiderivative is not elementary.
pub fn standard_problems() -> Vec<Problem> {
    vec![
        Problem {
            name: "x^2",
            function: quadratic,
            lower: 0.0,
            upper: 1.0,
            exact: 1.0 / 3.0,
        },
        Problem {
            name: "sin(x)",
            function: sine,
            lower: 0.0,
            upper: std::f64::consts::PI,
            exact: 2.0,
        },
        Problem {
            name: "exp(-x^2)",
            function: gaussian,
            lower: 0.0,
            upper: 1.0,
            exact: GAUSSIAN_EXACT,
        },
    ]
}
