//! # Scalar Operators
//!
//! Elementary functions over one or two `f64` values.
//!
//! ## Functions
//!
//! | Function | Description |
//! |----------|-------------|
//! | `mul` | x * y |
//! | `id` | Identity |
//! | `add` | x + y |
//! | `neg` | -x |
//! | `lt` | 1.0 if x < y else 0.0 |
//! | `eq` | 1.0 if x == y else 0.0 |
//! | `max` | Larger of x, y (ties return y) |
//! | `is_close` | 1.0 if \|x - y\| < `CLOSE_TOLERANCE` |
//! | `sigmoid` | Logistic sigmoid, branch-stabilized |
//! | `relu` | Rectified Linear Unit |
//! | `log` | ln(x + `EPS`) |
//! | `exp` | e^x (unguarded) |
//! | `inv` | 1 / x, fails at zero |
//!
//! ## Implementation Notes
//!
//! Comparisons use the boolean-as-float encoding: true is `1.0`, false is `0.0`.

use crate::error::{OpsError, OpsResult};

/// Additive stabilizer applied inside [`log`].
pub const EPS: f64 = 1e-6;

/// Absolute tolerance used by [`is_close`].
pub const CLOSE_TOLERANCE: f64 = 1e-2;

/// Multiplication: x * y
#[inline]
pub fn mul(x: f64, y: f64) -> f64 {
    x * y
}

/// Identity
#[inline]
pub fn id(x: f64) -> f64 {
    x
}

/// Addition: x + y
#[inline]
pub fn add(x: f64, y: f64) -> f64 {
    x + y
}

/// Negation: -x
#[inline]
pub fn neg(x: f64) -> f64 {
    -x
}

/// Less-than as a float: 1.0 if x < y else 0.0
#[inline]
pub fn lt(x: f64, y: f64) -> f64 {
    if x < y { 1.0 } else { 0.0 }
}

/// Exact equality as a float: 1.0 if x == y else 0.0
#[inline]
pub fn eq(x: f64, y: f64) -> f64 {
    if x == y { 1.0 } else { 0.0 }
}

/// Maximum of x and y
///
/// Uses a strict `x > y` test, so ties (and NaN comparisons) return `y`.
#[inline]
pub fn max(x: f64, y: f64) -> f64 {
    if x > y { x } else { y }
}

/// Approximate equality: 1.0 if |x - y| < 0.01 else 0.0
#[inline]
pub fn is_close(x: f64, y: f64) -> f64 {
    if (x - y).abs() < CLOSE_TOLERANCE { 1.0 } else { 0.0 }
}

/// Sigmoid activation: 1 / (1 + e^(-x))
///
/// For negative inputs the equivalent form e^x / (1 + e^x) is used so that
/// e^(-x) is never evaluated for large negative x.
#[inline]
pub fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + exp(-x))
    } else {
        let e = exp(x);
        e / (1.0 + e)
    }
}

/// ReLU activation: x if x > 0 else 0.0
#[inline]
pub fn relu(x: f64) -> f64 {
    if x > 0.0 { x } else { 0.0 }
}

/// Stabilized natural log: ln(x + EPS)
///
/// Finite (about -13.8) at x = 0. Not the exact logarithm near zero.
#[inline]
pub fn log(x: f64) -> f64 {
    (x + EPS).ln()
}

/// Exponential: e^x
///
/// No overflow guard. Returns `f64::INFINITY` for x above ~709.78.
#[inline]
pub fn exp(x: f64) -> f64 {
    x.exp()
}

/// Reciprocal: 1 / x
///
/// # Errors
///
/// [`OpsError::DivisionByZero`] when `x == 0.0` (either sign).
#[inline]
pub fn inv(x: f64) -> OpsResult<f64> {
    if x == 0.0 {
        return Err(OpsError::division_by_zero("inv"));
    }
    Ok(1.0 / x)
}
