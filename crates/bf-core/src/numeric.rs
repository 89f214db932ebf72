use crate::BfError;

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Element-wise `nearly_equal` over two slices of equal length.
pub fn slices_nearly_equal(a: &[Real], b: &[Real], tol: Tolerances) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| nearly_equal(x, y, tol))
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, BfError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(BfError::NonFinite { what, value: v })
    }
}

/// Fails on the first non-finite entry of `values`.
pub fn ensure_all_finite(values: &[Real], what: &'static str) -> Result<(), BfError> {
    for &v in values {
        ensure_finite(v, what)?;
    }
    Ok(())
}

/// Amplitude ratio to decibels: `20 * log10(ratio)`.
#[inline]
pub fn to_db(ratio: Real) -> Real {
    20.0 * ratio.log10()
}
