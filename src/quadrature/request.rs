//! The shared input contract for all quadrature rules.

use std::fmt;

use super::error::InvalidRequest;

/// A real-to-real integrand.
///
/// Integrands must be pure and defined on the closed interval
/// `[lower, upper]` of the request they are attached to.
pub type Integrand<'f> = &'f dyn Fn(f64) -> f64;

/// One integration problem: integrand, bounds, and subdivision count.
///
/// Requests are immutable; a rule never mutates one and the driver builds
/// a fresh request per benchmark case. The integrand is optional so the
/// missing-function precondition stays representable, but
/// [`IntegrationRequest::new`] always stores one; `None` only arises when
/// a caller assembles the struct by hand.
///
/// # Example
///
/// ```
/// use quadbench::quadrature::{trapezoidal, IntegrationRequest};
///
/// let f = |x: f64| x.sin();
/// let request = IntegrationRequest::new(&f, 0.0, std::f64::consts::PI, 1000);
/// let result = trapezoidal(&request);
/// assert!((result - 2.0).abs() < 1e-4);
/// ```
#[derive(Clone, Copy)]
pub struct IntegrationRequest<'f> {
    /// The function to integrate.
    pub function: Option<Integrand<'f>>,
    /// Lower bound of integration.
    pub lower: f64,
    /// Upper bound of integration; must exceed `lower`.
    pub upper: f64,
    /// Number of equal-width subdivisions; must be positive.
    pub intervals: i64,
}

impl<'f> IntegrationRequest<'f> {
    /// Create a request for integrating `function` over `[lower, upper]`
    /// with `intervals` subdivisions.
    ///
    /// Bounds and the interval count are not checked here: rules validate
    /// on entry and report failure through their `f64::NAN` outcome, so a
    /// request is allowed to exist in an invalid state.
    pub fn new(function: Integrand<'f>, lower: f64, upper: f64, intervals: i64) -> Self {
        Self {
            function: Some(function),
            lower,
            upper,
            intervals,
        }
    }

    /// Check the shared precondition every rule requires.
    ///
    /// A request is well-formed when it carries an integrand, its bounds
    /// satisfy `lower < upper`, and `intervals` is positive. Rule-specific
    /// divisibility requirements (Simpson's rules) are checked by the
    /// rules themselves.
    ///
    /// # Errors
    ///
    /// Returns the first failed precondition as an [`InvalidRequest`].
    ///
    /// # Example
    ///
    /// ```
    /// use quadbench::quadrature::IntegrationRequest;
    ///
    /// let f = |x: f64| x;
    /// let request = IntegrationRequest::new(&f, 1.0, 0.0, 100);
    /// assert!(request.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<(), InvalidRequest> {
        if self.function.is_none() {
            return Err(InvalidRequest::MissingFunction);
        }

        if self.intervals <= 0 {
            return Err(InvalidRequest::NonPositiveIntervals {
                intervals: self.intervals,
            });
        }

        if self.upper <= self.lower {
            return Err(InvalidRequest::InvalidBounds {
                lower: self.lower,
                upper: self.upper,
            });
        }

        Ok(())
    }

    /// Width of one subdivision.
    ///
    /// Only meaningful on a request that passed [`validate`](Self::validate).
    pub(crate) fn dx(&self) -> f64 {
        (self.upper - self.lower) / self.intervals as f64
    }

    /// The integrand, but only if the shared precondition holds.
    ///
    /// Rules call this first so that an invalid request never reaches the
    /// integrand. The function may be expensive, or partial outside its
    /// intended domain.
    pub(crate) fn checked_integrand(&self) -> Option<Integrand<'f>> {
        self.validate().ok().and(self.function)
    }
}

impl fmt::Debug for IntegrationRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegrationRequest")
            .field("function", &self.function.map(|_| "<fn>"))
            .field("lower", &self.lower)
            .field("upper", &self.upper)
            .field("intervals", &self.intervals)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(x: f64) -> f64 {
        x
    }

    #[test]
    fn test_new_is_valid() {
        let request = IntegrationRequest::new(&identity, 0.0, 1.0, 10);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_missing_function() {
        let request = IntegrationRequest {
            function: None,
            lower: 0.0,
            upper: 1.0,
            intervals: 10,
        };
        assert_eq!(request.validate(), Err(InvalidRequest::MissingFunction));
    }

    #[test]
    fn test_non_positive_intervals() {
        let zero = IntegrationRequest::new(&identity, 0.0, 1.0, 0);
        assert_eq!(
            zero.validate(),
            Err(InvalidRequest::NonPositiveIntervals { intervals: 0 })
        );

        let negative = IntegrationRequest::new(&identity, 0.0, 1.0, -5);
        assert_eq!(
            negative.validate(),
            Err(InvalidRequest::NonPositiveIntervals { intervals: -5 })
        );
    }

    #[test]
    fn test_inverted_and_degenerate_bounds() {
        let inverted = IntegrationRequest::new(&identity, 1.0, 0.0, 10);
        assert!(matches!(
            inverted.validate(),
            Err(InvalidRequest::InvalidBounds { .. })
        ));

        // A single point is a degenerate interval, not a valid domain.
        let degenerate = IntegrationRequest::new(&identity, 2.0, 2.0, 10);
        assert!(matches!(
            degenerate.validate(),
            Err(InvalidRequest::InvalidBounds { .. })
        ));
    }

    #[test]
    fn test_dx() {
        let request = IntegrationRequest::new(&identity, 0.0, 2.0, 4);
        assert!((request.dx() - 0.5).abs() < 1e-15);
    }
}
