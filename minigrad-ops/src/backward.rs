//! # Backward Helpers
//!
//! Local derivative contributions of the scalar operators, scaled by an
//! upstream gradient `d`.
//!
//! `log_back` differentiates the plain logarithm, not the `EPS`-shifted one
//! that [`log`](crate::scalar::log) computes.

use crate::error::{OpsError, OpsResult};
use crate::scalar::inv;

/// d/dx ln(x) * d = d / x
///
/// # Errors
///
/// [`OpsError::DivisionByZero`] when `x == 0.0`.
#[inline]
pub fn log_back(x: f64, d: f64) -> OpsResult<f64> {
    Ok(d * inv(x)?)
}

/// d/dx (1/x) * d = -d / x²
///
/// # Errors
///
/// [`OpsError::DivisionByZero`] when `x²` is zero, which includes every
/// |x| small enough for the square to underflow (below ~1.5e-162).
#[inline]
pub fn inv_back(x: f64, d: f64) -> OpsResult<f64> {
    let sq = x * x;
    if sq == 0.0 {
        return Err(OpsError::division_by_zero("inv_back"));
    }
    Ok(d * -1.0 / sq)
}

/// ReLU subgradient: d if x > 0 else 0.0
///
/// x = 0 takes the inactive branch.
#[inline]
pub fn relu_back(x: f64, d: f64) -> f64 {
    if x > 0.0 { d } else { 0.0 }
}
