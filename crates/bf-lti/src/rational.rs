//! Rational functions `N(s) / D(s)` and their algebra.

use std::fmt;
use std::ops::Mul;

use num_complex::Complex64;
use serde::Serialize;

use crate::error::{LtiError, LtiResult};
use crate::polynomial::Polynomial;

/// Ratio of two real polynomials.
///
/// The denominator is never the zero polynomial when built through
/// [`RationalFunction::new`]. A denominator of `[1]` is a pure gain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RationalFunction {
    numerator: Polynomial,
    denominator: Polynomial,
}

impl RationalFunction {
    /// Create a rational function, rejecting a zero denominator.
    pub fn new(numerator: Polynomial, denominator: Polynomial) -> LtiResult<Self> {
        if denominator.is_zero() {
            return Err(LtiError::DegenerateSystem {
                what: "denominator must not be the zero polynomial",
            });
        }
        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Skips the zero-denominator check. Callers guarantee a nonzero denominator.
    pub(crate) fn from_parts(numerator: Polynomial, denominator: Polynomial) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The identity `1 / 1`.
    pub fn identity() -> Self {
        Self {
            numerator: Polynomial::one(),
            denominator: Polynomial::one(),
        }
    }

    pub fn numerator(&self) -> &Polynomial {
        &self.numerator
    }

    pub fn denominator(&self) -> &Polynomial {
        &self.denominator
    }

    /// Stored `(numerator degree, denominator degree)`.
    pub fn degrees(&self) -> (usize, usize) {
        (self.numerator.degree(), self.denominator.degree())
    }

    /// True when the denominator is exactly `[1]`.
    pub fn is_pure_gain(&self) -> bool {
        self.denominator.coeffs() == [1.0]
    }

    /// Multiply by another rational function. See [`multiply`].
    pub fn multiply(&self, other: &RationalFunction) -> RationalFunction {
        RationalFunction {
            numerator: self.numerator.convolve(&other.numerator),
            denominator: self.denominator.convolve(&other.denominator),
        }
    }

    /// Numerator and denominator evaluated at `s = jω`.
    pub fn eval_parts_at(&self, omega: f64) -> (Complex64, Complex64) {
        let s = Complex64::new(0.0, omega);
        (
            self.numerator.eval_complex(s),
            self.denominator.eval_complex(s),
        )
    }

    /// Steady-state gain `N(0) / D(0)`. Infinite for a pole at the origin.
    pub fn dc_gain(&self) -> f64 {
        self.numerator.eval(0.0) / self.denominator.eval(0.0)
    }
}

impl Default for RationalFunction {
    fn default() -> Self {
        Self::identity()
    }
}

/// Product of two rational functions by polynomial convolution.
///
/// Numerators and denominators are convolved independently; no pole-zero
/// cancellation is attempted. Degrees add component-wise.
pub fn multiply(f: &RationalFunction, g: &RationalFunction) -> RationalFunction {
    f.multiply(g)
}

impl Mul for &RationalFunction {
    type Output = RationalFunction;

    fn mul(self, rhs: Self) -> RationalFunction {
        self.multiply(rhs)
    }
}

impl fmt::Display for RationalFunction {
    /// Fraction layout: numerator over a dash rule over denominator, centred.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let num = self.numerator.to_string();
        let den = self.denominator.to_string();
        let width = num.len().max(den.len());
        writeln!(f, "{num:^width$}")?;
        writeln!(f, "{}", "-".repeat(width))?;
        write!(f, "{den:^width$}")
    }
}
