//! Real polynomials in the Laplace variable `s`.
//!
//! Coefficients are stored in descending powers: index 0 is the highest-degree
//! term and the last entry is the constant term. Storage is degree-preserving,
//! so leading zeros produced by arithmetic stay in place until a caller asks
//! for [`Polynomial::trimmed`].

use std::fmt;
use std::ops::Mul;

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

/// Polynomial with real coefficients, highest power first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Polynomial {
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Create a polynomial from coefficients in descending powers.
    pub fn new(coeffs: impl Into<Vec<f64>>) -> Self {
        Self {
            coeffs: coeffs.into(),
        }
    }

    /// The constant polynomial `1`.
    pub fn one() -> Self {
        Self::new(vec![1.0])
    }

    /// Coefficients in descending powers.
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Stored degree (`len - 1`), counting leading zeros.
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// True when there are no coefficients or all of them are zero.
    pub fn is_zero(&self) -> bool {
        self.coeffs.iter().all(|&c| c == 0.0)
    }

    /// Copy with leading zero coefficients removed.
    ///
    /// The zero polynomial trims to `[0]` so the result always has a degree.
    pub fn trimmed(&self) -> Self {
        match self.coeffs.iter().position(|&c| c != 0.0) {
            Some(first) => Self::new(&self.coeffs[first..]),
            None => Self::new(vec![0.0]),
        }
    }

    /// Degree after dropping leading zeros.
    pub fn effective_degree(&self) -> usize {
        self.trimmed().degree()
    }

    /// Polynomial product by direct convolution.
    ///
    /// Degrees add: `len(out) = len(a) + len(b) - 1`. An empty operand yields
    /// an empty product.
    pub fn convolve(&self, other: &Polynomial) -> Polynomial {
        if self.is_empty() || other.is_empty() {
            return Polynomial::new(Vec::new());
        }
        let mut out = vec![0.0; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                out[i + j] += a * b;
            }
        }
        Polynomial::new(out)
    }

    /// Evaluate at a real point using Horner's method.
    pub fn eval(&self, x: f64) -> f64 {
        self.coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
    }

    /// Evaluate at a complex point using Horner's method.
    pub fn eval_complex(&self, z: Complex64) -> Complex64 {
        self.coeffs
            .iter()
            .fold(Complex64::new(0.0, 0.0), |acc, &c| acc * z + c)
    }
}

impl Default for Polynomial {
    fn default() -> Self {
        Self::one()
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Self {
        Self::new(coeffs)
    }
}

impl Mul for &Polynomial {
    type Output = Polynomial;

    fn mul(self, rhs: Self) -> Polynomial {
        self.convolve(rhs)
    }
}

impl fmt::Display for Polynomial {
    /// Renders e.g. `10 s^2 - s + 0.5`. Zero terms are skipped.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut wrote_any = false;

        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            let power = degree - i;
            let magnitude = c.abs();

            if wrote_any {
                write!(f, "{}", if c < 0.0 { " - " } else { " + " })?;
            } else if c < 0.0 {
                write!(f, "-")?;
            }

            let show_number = power == 0 || magnitude != 1.0;
            if show_number {
                write!(f, "{magnitude}")?;
            }
            match power {
                0 => {}
                1 if show_number => write!(f, " s")?,
                1 => write!(f, "s")?,
                p if show_number => write!(f, " s^{p}")?,
                p => write!(f, "s^{p}")?,
            }
            wrote_any = true;
        }

        if !wrote_any {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degree_counts_leading_zeros() {
        let p = Polynomial::new(vec![0.0, 0.0, 2.0, 1.0]);
        assert_eq!(p.degree(), 3);
        assert_eq!(p.effective_degree(), 1);
        assert_eq!(p.trimmed().coeffs(), &[2.0, 1.0]);
    }

    #[test]
    fn zero_detection() {
        assert!(Polynomial::new(vec![0.0, 0.0]).is_zero());
        assert!(Polynomial::new(Vec::new()).is_zero());
        assert!(!Polynomial::new(vec![0.0, 1e-300]).is_zero());
        assert_eq!(Polynomial::new(vec![0.0, 0.0]).trimmed().coeffs(), &[0.0]);
    }

    #[test]
    fn convolution_matches_hand_expansion() {
        // (s + 1)(s - 2) = s^2 - s - 2
        let a = Polynomial::new(vec![1.0, 1.0]);
        let b = Polynomial::new(vec![1.0, -2.0]);
        assert_eq!((&a * &b).coeffs(), &[1.0, -1.0, -2.0]);
    }

    #[test]
    fn convolution_keeps_leading_zeros() {
        let a = Polynomial::new(vec![0.0, 1.0]);
        let b = Polynomial::new(vec![3.0, 2.0]);
        let c = a.convolve(&b);
        assert_eq!(c.coeffs(), &[0.0, 3.0, 2.0]);
        assert_eq!(c.degree(), 2);
    }

    #[test]
    fn empty_operand_gives_empty_product() {
        let a = Polynomial::new(Vec::new());
        assert!(a.convolve(&Polynomial::one()).is_empty());
    }

    #[test]
    fn horner_real_and_complex() {
        // 2s^2 + 3s + 4
        let p = Polynomial::new(vec![2.0, 3.0, 4.0]);
        assert_eq!(p.eval(2.0), 18.0);

        // at s = j: -2 + 3j + 4 = 2 + 3j
        let v = p.eval_complex(Complex64::new(0.0, 1.0));
        assert!((v.re - 2.0).abs() < 1e-15);
        assert!((v.im - 3.0).abs() < 1e-15);
    }

    #[test]
    fn display_formats_terms() {
        assert_eq!(Polynomial::new(vec![10.0, 1.0]).to_string(), "10 s + 1");
        assert_eq!(Polynomial::new(vec![1.0, 0.0]).to_string(), "s");
        assert_eq!(
            Polynomial::new(vec![-1.0, 0.5, -1.0, 2.0]).to_string(),
            "-s^3 + 0.5 s^2 - s + 2"
        );
        assert_eq!(Polynomial::new(vec![0.0, 0.0]).to_string(), "0");
        assert_eq!(Polynomial::one().to_string(), "1");
    }
}
