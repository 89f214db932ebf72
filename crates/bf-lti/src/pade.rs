//! Padé approximation of a pure time delay.
//!
//! A delay `exp(-sT)` is not rational, so it cannot be multiplied into a
//! transfer function directly. The `[p/q]` Padé approximant matches the Taylor
//! series of `exp(-sT)` up to order `p + q` with a numerator of degree `p` and a
//! denominator of degree `q`. Coefficients follow Golub & Van Loan, Algorithm
//! 11.3.1, evaluated as a running product.

use bf_core::{Time, ensure_all_finite, ensure_finite, seconds_of};
use serde::{Deserialize, Serialize};

use crate::error::{LtiError, LtiResult};
use crate::polynomial::Polynomial;
use crate::rational::RationalFunction;

fn default_order() -> usize {
    1
}

/// Approximation options for a delay.
///
/// `numerator_degree` defaults to `order`. A negative value counts back from
/// `order`, so `-1` means `order - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PadeOptions {
    /// Denominator degree of the approximant.
    #[serde(default = "default_order")]
    pub order: usize,
    /// Numerator degree override.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numerator_degree: Option<i64>,
}

impl Default for PadeOptions {
    fn default() -> Self {
        Self {
            order: default_order(),
            numerator_degree: None,
        }
    }
}

impl PadeOptions {
    pub fn new(order: usize) -> Self {
        Self {
            order,
            numerator_degree: None,
        }
    }

    pub fn with_numerator_degree(mut self, degree: i64) -> Self {
        self.numerator_degree = Some(degree);
        self
    }

    /// Resolve the numerator degree against `order` and check `0 <= p <= order`.
    pub fn resolve_numerator_degree(&self) -> LtiResult<usize> {
        let order = i64::try_from(self.order).map_err(|_| LtiError::InvalidParameter {
            what: "require order to fit in a signed 64-bit integer",
        })?;
        let degree = match self.numerator_degree {
            None => order,
            Some(d) if d < 0 => d + order,
            Some(d) => d,
        };
        if !(0..=order).contains(&degree) {
            return Err(LtiError::InvalidParameter {
                what: "require 0 <= numerator_degree <= order",
            });
        }
        // Bounded by `order`, which came from a usize.
        Ok(degree as usize)
    }
}

/// A validated delay with its approximation degrees resolved.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelaySpec {
    delay_time: f64,
    order: usize,
    numerator_degree: usize,
}

impl DelaySpec {
    /// Validate a delay in seconds together with its approximation options.
    pub fn new(delay_time: f64, options: PadeOptions) -> LtiResult<Self> {
        // Also rejects NaN.
        if !(delay_time >= 0.0) {
            return Err(LtiError::InvalidParameter {
                what: "require delay_time >= 0",
            });
        }
        ensure_finite(delay_time, "delay_time")?;
        let numerator_degree = options.resolve_numerator_degree()?;
        Ok(Self {
            delay_time,
            order: options.order,
            numerator_degree,
        })
    }

    /// Same as [`DelaySpec::new`] with a typed time quantity.
    pub fn from_time(delay: Time, options: PadeOptions) -> LtiResult<Self> {
        Self::new(seconds_of(delay), options)
    }

    pub fn delay_time(&self) -> f64 {
        self.delay_time
    }

    pub fn order(&self) -> usize {
        self.order
    }

    pub fn numerator_degree(&self) -> usize {
        self.numerator_degree
    }

    /// Rational approximant of `exp(-s * delay_time)`.
    ///
    /// A zero delay is exact: the identity `([1], [1])` regardless of order.
    ///
    /// # Errors
    ///
    /// [`LtiError::Numeric`] when a coefficient overflows, which happens for
    /// very long delays at high order.
    pub fn approximant(&self) -> LtiResult<RationalFunction> {
        if self.delay_time == 0.0 {
            return Ok(RationalFunction::identity());
        }

        let t = self.delay_time;
        let p = self.numerator_degree;
        let q = self.order;

        let mut num = vec![0.0; p + 1];
        num[p] = 1.0;
        let mut cn = 1.0;
        for k in 1..=p {
            cn *= -t * (p - k + 1) as f64 / (p + q - k + 1) as f64 / k as f64;
            num[p - k] = cn;
        }

        let mut den = vec![0.0; q + 1];
        den[q] = 1.0;
        let mut cd = 1.0;
        for k in 1..=q {
            cd *= t * (q - k + 1) as f64 / (p + q - k + 1) as f64 / k as f64;
            den[q - k] = cd;
        }

        ensure_all_finite(&num, "Padé numerator coefficient")?;
        ensure_all_finite(&den, "Padé denominator coefficient")?;

        // The constant term is 1, so the denominator is never zero.
        Ok(RationalFunction::from_parts(Polynomial::new(num), Polynomial::new(den)))
    }
}

/// Padé approximant of `exp(-s * delay_time)`.
///
/// `order` is the denominator degree. `numerator_degree` defaults to `order`;
/// negative values resolve to `order + numerator_degree`.
///
/// # Errors
///
/// [`LtiError::InvalidParameter`] when `delay_time < 0` or the resolved
/// numerator degree falls outside `0..=order`. [`LtiError::Numeric`] when a
/// coefficient overflows.
///
/// # Example
///
/// ```
/// use bf_lti::approximate;
///
/// let pade = approximate(1.0, 1, None).unwrap();
/// assert_eq!(pade.numerator().coeffs(), &[-0.5, 1.0]);
/// assert_eq!(pade.denominator().coeffs(), &[0.5, 1.0]);
/// ```
pub fn approximate(
    delay_time: f64,
    order: usize,
    numerator_degree: Option<i64>,
) -> LtiResult<RationalFunction> {
    let options = PadeOptions {
        order,
        numerator_degree,
    };
    DelaySpec::new(delay_time, options)?.approximant()
}

#[cfg(test)]
mod tests {
    use super::*;
    use bf_core::{BfError, Tolerances, slices_nearly_equal};

    #[test]
    fn zero_delay_is_identity_for_any_order() {
        for order in 0..6 {
            let r = approximate(0.0, order, None).unwrap();
            assert_eq!(r.numerator().coeffs(), &[1.0]);
            assert_eq!(r.denominator().coeffs(), &[1.0]);
        }
    }

    #[test]
    fn second_order_coefficients() {
        // [2/2] approximant of exp(-s): (s^2/12 - s/2 + 1) / (s^2/12 + s/2 + 1)
        let r = approximate(1.0, 2, None).unwrap();
        let tol = Tolerances::default();
        assert!(slices_nearly_equal(
            r.numerator().coeffs(),
            &[1.0 / 12.0, -0.5, 1.0],
            tol
        ));
        assert!(slices_nearly_equal(
            r.denominator().coeffs(),
            &[1.0 / 12.0, 0.5, 1.0],
            tol
        ));
    }

    #[test]
    fn reduced_numerator_degree() {
        // [0/1]: 1 / (T s + 1)
        let r = approximate(2.0, 1, Some(0)).unwrap();
        assert_eq!(r.numerator().coeffs(), &[1.0]);
        assert_eq!(r.denominator().coeffs(), &[2.0, 1.0]);

        // Negative degree counts back from order: 3 + (-1) = 2
        let r = approximate(1.0, 3, Some(-1)).unwrap();
        assert_eq!(r.degrees(), (2, 3));
    }

    #[test]
    fn coefficient_lengths_follow_degrees() {
        for q in 1..6_usize {
            for p in 0..=q {
                let r = approximate(0.7, q, Some(p as i64)).unwrap();
                assert_eq!(r.numerator().len(), p + 1);
                assert_eq!(r.denominator().len(), q + 1);
                assert_eq!(*r.numerator().coeffs().last().unwrap(), 1.0);
                assert_eq!(*r.denominator().coeffs().last().unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn numerator_degree_above_order_is_rejected() {
        let err = approximate(1.0, 2, Some(5)).unwrap_err();
        assert_eq!(
            err,
            LtiError::InvalidParameter {
                what: "require 0 <= numerator_degree <= order"
            }
        );
        assert!(approximate(1.0, 2, Some(-3)).is_err());
    }

    #[test]
    fn negative_or_nan_delay_is_rejected() {
        let err = approximate(-1.0, 1, None).unwrap_err();
        assert!(err.to_string().contains("delay_time >= 0"));
        assert!(approximate(f64::NAN, 1, None).is_err());
        assert!(approximate(f64::INFINITY, 1, None).is_err());
    }

    #[test]
    fn order_zero_with_delay_is_unity() {
        let r = approximate(3.0, 0, None).unwrap();
        assert_eq!(r.degrees(), (0, 0));
        assert_eq!(r.dc_gain(), 1.0);
    }

    #[test]
    fn dc_gain_is_one() {
        for q in 1..8 {
            let r = approximate(1.5, q, None).unwrap();
            assert_eq!(r.dc_gain(), 1.0);
        }
    }

    #[test]
    fn diagonal_approximant_is_all_pass() {
        let r = approximate(1.0, 3, None).unwrap();
        for &w in &[0.1, 1.0, 10.0] {
            let (n, d) = r.eval_parts_at(w);
            assert!(((n / d).norm() - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn overflowing_coefficients_are_rejected() {
        let err = approximate(1e200, 2, None).unwrap_err();
        assert!(matches!(
            err,
            LtiError::Numeric(BfError::NonFinite {
                what: "Padé numerator coefficient",
                ..
            })
        ));
        assert!(approximate(1e200, 1, None).is_ok());
    }

    #[test]
    fn typed_delay() {
        let spec = DelaySpec::from_time(bf_core::s(0.25), PadeOptions::new(2)).unwrap();
        assert_eq!(spec.delay_time(), 0.25);
        assert_eq!(spec.order(), 2);
        assert_eq!(spec.numerator_degree(), 2);
    }
}
