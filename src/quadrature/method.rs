//! The seven rules as data.

use rand::Rng;

use super::monte_carlo::monte_carlo;
use super::rectangle::{left_rectangle, midpoint, right_rectangle};
use super::request::IntegrationRequest;
use super::simpson::{simpson_one_third, simpson_three_eighths};
use super::trapezoid::trapezoidal;

/// A quadrature rule, selectable at runtime.
///
/// Useful wherever the rule itself is an input; the benchmark driver
/// iterates [`Method::ALL`] and dispatches through [`Method::integrate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    LeftRectangle,
    RightRectangle,
    Midpoint,
    Trapezoidal,
    SimpsonOneThird,
    SimpsonThreeEighths,
    MonteCarlo,
}

impl Method {
    /// Every rule, ordered from simple to sophisticated.
    pub const ALL: [Method; 7] = [
        Method::LeftRectangle,
        Method::RightRectangle,
        Method::Midpoint,
        Method::Trapezoidal,
        Method::SimpsonOneThird,
        Method::SimpsonThreeEighths,
        Method::MonteCarlo,
    ];

    /// The label used in benchmark reports.
    pub fn label(&self) -> &'static str {
        match self {
            Method::LeftRectangle => "1. Left Rectangle",
            Method::RightRectangle => "2. Right Rectangle",
            Method::Midpoint => "3. Midpoint Rule",
            Method::Trapezoidal => "4. Trapezoidal Rule",
            Method::SimpsonOneThird => "5. Simpson's 1/3 Rule",
            Method::SimpsonThreeEighths => "6. Simpson's 3/8 Rule",
            Method::MonteCarlo => "7. Monte Carlo",
        }
    }

    /// The divisor `intervals` must be a multiple of, if the rule has one.
    pub fn required_divisor(&self) -> Option<i64> {
        match self {
            Method::SimpsonOneThird => Some(2),
            Method::SimpsonThreeEighths => Some(3),
            _ => None,
        }
    }

    /// Run this rule on `request`.
    ///
    /// The generator is threaded through the uniform signature but only
    /// the Monte Carlo arm consumes entropy from it.
    pub fn integrate<R: Rng>(&self, request: &IntegrationRequest<'_>, rng: &mut R) -> f64 {
        match self {
            Method::LeftRectangle => left_rectangle(request),
            Method::RightRectangle => right_rectangle(request),
            Method::Midpoint => midpoint(request),
            Method::Trapezoidal => trapezoidal(request),
            Method::SimpsonOneThird => simpson_one_third(request),
            Method::SimpsonThreeEighths => simpson_three_eighths(request),
            Method::MonteCarlo => monte_carlo(request, rng),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn square(x: f64) -> f64 {
        x * x
    }

    #[test]
    fn test_dispatch_matches_free_functions() {
        let request = IntegrationRequest::new(&square, 0.0, 1.0, 102);
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            Method::LeftRectangle.integrate(&request, &mut rng),
            left_rectangle(&request)
        );
        assert_eq!(
            Method::Trapezoidal.integrate(&request, &mut rng),
            trapezoidal(&request)
        );
        assert_eq!(
            Method::SimpsonOneThird.integrate(&request, &mut rng),
            simpson_one_third(&request)
        );
    }

    #[test]
    fn test_deterministic_rules_ignore_the_generator() {
        let request = IntegrationRequest::new(&square, 0.0, 1.0, 60);
        for method in Method::ALL {
            if method == Method::MonteCarlo {
                continue;
            }
            let mut rng_a = StdRng::seed_from_u64(1);
            let mut rng_b = StdRng::seed_from_u64(2);
            assert_eq!(
                method.integrate(&request, &mut rng_a),
                method.integrate(&request, &mut rng_b),
                "{}",
                method.label()
            );
        }
    }

    #[test]
    fn test_all_rules_reject_an_invalid_request() {
        let request = IntegrationRequest::new(&square, 0.0, 1.0, -1);
        let mut rng = StdRng::seed_from_u64(0);
        for method in Method::ALL {
            assert!(
                method.integrate(&request, &mut rng).is_nan(),
                "{}",
                method.label()
            );
        }
    }

    #[test]
    fn test_all_rules_converge_on_a_smooth_integrand() {
        // n = 600 satisfies both Simpson divisibility constraints.
        let request = IntegrationRequest::new(&square, 0.0, 1.0, 600);
        let mut rng = StdRng::seed_from_u64(11);
        for method in Method::ALL {
            let result = method.integrate(&request, &mut rng);
            let tolerance = if method == Method::MonteCarlo { 0.05 } else { 1e-2 };
            assert!(
                (result - 1.0 / 3.0).abs() < tolerance,
                "{}: result = {}",
                method.label(),
                result
            );
        }
    }

    #[test]
    fn test_required_divisor() {
        assert_eq!(Method::SimpsonOneThird.required_divisor(), Some(2));
        assert_eq!(Method::SimpsonThreeEighths.required_divisor(), Some(3));
        assert_eq!(Method::MonteCarlo.required_divisor(), None);
        assert_eq!(Method::Trapezoidal.required_divisor(), None);
    }

    #[test]
    fn test_labels_are_unique() {
        let mut labels: Vec<_> = Method::ALL.iter().map(|m| m.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Method::ALL.len());
    }
}
