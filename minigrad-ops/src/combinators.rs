//! # Higher-Order Combinators
//!
//! `map`, `zip_with` and `reduce` take a scalar operator and return a closure
//! over sequences. `neg_list`, `add_lists`, `sum` and `prod` are those
//! combinators with a fixed operator.
//!
//! ## Reduction order
//!
//! `reduce(f, start)` over `[x1, x2, ..., xn]` computes
//! `f(xn, f(xn-1, ... f(x2, x1)))`. Empty input yields `0.0` and a single
//! element is returned as-is. The seed is not used; see [`fold`] for the
//! seeded variant.

use std::convert::Infallible;

use crate::scalar::{add, mul, neg};

/// Higher-order map
///
/// Returns a function applying `f` to every element, in input order.
pub fn map<F>(f: F) -> impl Fn(&[f64]) -> Vec<f64>
where
    F: Fn(f64) -> f64,
{
    move |ls: &[f64]| ls.iter().map(|&x| f(x)).collect()
}

/// Higher-order zip-with (map2)
///
/// Returns a function combining `ls1[i]` and `ls2[i]` with `f`. Pairing
/// stops at the shorter input.
pub fn zip_with<F>(f: F) -> impl Fn(&[f64], &[f64]) -> Vec<f64>
where
    F: Fn(f64, f64) -> f64,
{
    move |ls1: &[f64], ls2: &[f64]| {
        if ls1.len() != ls2.len() {
            tracing::debug!(
                left = ls1.len(),
                right = ls2.len(),
                "zip_with truncating to shorter input"
            );
        }
        ls1.iter().zip(ls2).map(|(&x, &y)| f(x, y)).collect()
    }
}

/// Higher-order reduce
///
/// - `[]` → `0.0`
/// - `[x1]` → `x1`
/// - `[x1, ..., xn]` → `f(xn, f(xn-1, ... f(x2, x1)))`
///
/// `_start` is accepted for signature compatibility and never read.
/// Runs in a loop, so stack depth does not grow with the input.
pub fn reduce<F>(f: F, _start: f64) -> impl Fn(&[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    move |ls: &[f64]| {
        let Ok(value) = try_reduce_right(ls, |x, acc| Ok::<_, Infallible>(f(x, acc)));
        value
    }
}

/// Seeded right-associative fold
///
/// `[x1, ..., xn]` → `f(xn, ... f(x1, start))`, and `start` for `[]`.
pub fn fold<F>(f: F, start: f64) -> impl Fn(&[f64]) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    move |ls: &[f64]| {
        let Ok(value) = try_fold_right(ls, start, |x, acc| Ok::<_, Infallible>(f(x, acc)));
        value
    }
}

/// Reduction shared by [`reduce`] and [`reduce_op`](crate::op::reduce_op)
///
/// `0.0` for `[]`, `x1` for `[x1]`, otherwise `f(xn, ... f(x2, x1))`.
/// Stops at the first error.
pub(crate) fn try_reduce_right<E, F>(ls: &[f64], f: F) -> Result<f64, E>
where
    F: Fn(f64, f64) -> Result<f64, E>,
{
    match ls.split_first() {
        None => Ok(0.0),
        Some((&first, rest)) => rest.iter().try_fold(first, |acc, &x| f(x, acc)),
    }
}

/// Seeded fold shared by [`fold`] and [`fold_op`](crate::op::fold_op)
pub(crate) fn try_fold_right<E, F>(ls: &[f64], start: f64, f: F) -> Result<f64, E>
where
    F: Fn(f64, f64) -> Result<f64, E>,
{
    ls.iter().try_fold(start, |acc, &x| f(x, acc))
}

/// Negate every element
pub fn neg_list(ls: &[f64]) -> Vec<f64> {
    map(neg)(ls)
}

/// Element-wise sum of two lists (truncates to the shorter one)
pub fn add_lists(ls1: &[f64], ls2: &[f64]) -> Vec<f64> {
    zip_with(add)(ls1, ls2)
}

/// Sum of a list
pub fn sum(ls: &[f64]) -> f64 {
    reduce(add, 0.0)(ls)
}

/// Product of a list
///
/// Empty input yields `0.0`, as every `reduce` does.
pub fn prod(ls: &[f64]) -> f64 {
    reduce(mul, 0.0)(ls)
}
