//! # Operator Registry
//!
//! Named handles for every scalar operator so that callers (the CLI, config
//! files) can pick one at runtime.
//!
//! | Kind | Names |
//! |------|-------|
//! | Unary | `id`, `neg`, `sigmoid`, `relu`, `log`, `exp`, `inv` |
//! | Binary | `add`, `mul`, `lt`, `eq`, `max`, `is_close`, `log_back`, `inv_back`, `relu_back` |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::backward::{inv_back, log_back, relu_back};
use crate::combinators::{try_fold_right, try_reduce_right};
use crate::error::{OpsError, OpsResult};
use crate::scalar::{add, eq, exp, id, inv, is_close, log, lt, max, mul, neg, relu, sigmoid};

/// Operator of one argument
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnaryOp {
    Id,
    Neg,
    Sigmoid,
    Relu,
    Log,
    Exp,
    Inv,
}

impl UnaryOp {
    pub const ALL: [UnaryOp; 7] = [
        UnaryOp::Id,
        UnaryOp::Neg,
        UnaryOp::Sigmoid,
        UnaryOp::Relu,
        UnaryOp::Log,
        UnaryOp::Exp,
        UnaryOp::Inv,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            UnaryOp::Id => "id",
            UnaryOp::Neg => "neg",
            UnaryOp::Sigmoid => "sigmoid",
            UnaryOp::Relu => "relu",
            UnaryOp::Log => "log",
            UnaryOp::Exp => "exp",
            UnaryOp::Inv => "inv",
        }
    }

    /// Apply to a value. Only `Inv` can fail.
    pub fn apply(self, x: f64) -> OpsResult<f64> {
        tracing::trace!(op = self.name(), x, "unary");
        match self {
            UnaryOp::Id => Ok(id(x)),
            UnaryOp::Neg => Ok(neg(x)),
            UnaryOp::Sigmoid => Ok(sigmoid(x)),
            UnaryOp::Relu => Ok(relu(x)),
            UnaryOp::Log => Ok(log(x)),
            UnaryOp::Exp => Ok(exp(x)),
            UnaryOp::Inv => inv(x),
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for UnaryOp {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "id" | "identity" => Ok(UnaryOp::Id),
            "neg" | "negate" => Ok(UnaryOp::Neg),
            "sigmoid" | "logistic" => Ok(UnaryOp::Sigmoid),
            "relu" => Ok(UnaryOp::Relu),
            "log" | "ln" => Ok(UnaryOp::Log),
            "exp" => Ok(UnaryOp::Exp),
            "inv" | "reciprocal" => Ok(UnaryOp::Inv),
            _ => Err(OpsError::UnknownOperator(s.to_string())),
        }
    }
}

/// Operator of two arguments, including the backward helpers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BinaryOp {
    Add,
    Mul,
    Lt,
    Eq,
    Max,
    IsClose,
    LogBack,
    InvBack,
    ReluBack,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 9] = [
        BinaryOp::Add,
        BinaryOp::Mul,
        BinaryOp::Lt,
        BinaryOp::Eq,
        BinaryOp::Max,
        BinaryOp::IsClose,
        BinaryOp::LogBack,
        BinaryOp::InvBack,
        BinaryOp::ReluBack,
    ];

    /// Canonical name
    pub fn name(self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Mul => "mul",
            BinaryOp::Lt => "lt",
            BinaryOp::Eq => "eq",
            BinaryOp::Max => "max",
            BinaryOp::IsClose => "is_close",
            BinaryOp::LogBack => "log_back",
            BinaryOp::InvBack => "inv_back",
            BinaryOp::ReluBack => "relu_back",
        }
    }

    /// Apply to a pair. `LogBack` and `InvBack` fail when `x == 0`.
    pub fn apply(self, x: f64, y: f64) -> OpsResult<f64> {
        tracing::trace!(op = self.name(), x, y, "binary");
        match self {
            BinaryOp::Add => Ok(add(x, y)),
            BinaryOp::Mul => Ok(mul(x, y)),
            BinaryOp::Lt => Ok(lt(x, y)),
            BinaryOp::Eq => Ok(eq(x, y)),
            BinaryOp::Max => Ok(max(x, y)),
            BinaryOp::IsClose => Ok(is_close(x, y)),
            BinaryOp::LogBack => log_back(x, y),
            BinaryOp::InvBack => inv_back(x, y),
            BinaryOp::ReluBack => Ok(relu_back(x, y)),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BinaryOp {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "add" | "plus" => Ok(BinaryOp::Add),
            "mul" | "multiply" | "times" => Ok(BinaryOp::Mul),
            "lt" | "less" => Ok(BinaryOp::Lt),
            "eq" | "equal" => Ok(BinaryOp::Eq),
            "max" | "maximum" => Ok(BinaryOp::Max),
            "is_close" | "isclose" | "close" => Ok(BinaryOp::IsClose),
            "log_back" => Ok(BinaryOp::LogBack),
            "inv_back" => Ok(BinaryOp::InvBack),
            "relu_back" => Ok(BinaryOp::ReluBack),
            _ => Err(OpsError::UnknownOperator(s.to_string())),
        }
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase().replace('-', "_")
}

/// Map a named unary operator, stopping at the first error
pub fn map_op(op: UnaryOp, ls: &[f64]) -> OpsResult<Vec<f64>> {
    ls.iter().map(|&x| op.apply(x)).collect()
}

/// Zip two lists with a named binary operator (truncates to the shorter one)
pub fn zip_with_op(op: BinaryOp, ls1: &[f64], ls2: &[f64]) -> OpsResult<Vec<f64>> {
    if ls1.len() != ls2.len() {
        tracing::debug!(
            op = op.name(),
            left = ls1.len(),
            right = ls2.len(),
            "zip_with_op truncating to shorter input"
        );
    }
    ls1.iter().zip(ls2).map(|(&x, &y)| op.apply(x, y)).collect()
}

/// Reduce with a named binary operator
///
/// Same contract as [`reduce`](crate::combinators::reduce): `0.0` for `[]`,
/// the element itself for a singleton, right-associative otherwise.
pub fn reduce_op(op: BinaryOp, _start: f64, ls: &[f64]) -> OpsResult<f64> {
    try_reduce_right(ls, |x, acc| op.apply(x, acc))
}

/// Seeded fold with a named binary operator, see [`fold`](crate::combinators::fold)
pub fn fold_op(op: BinaryOp, start: f64, ls: &[f64]) -> OpsResult<f64> {
    try_fold_right(ls, start, |x, acc| op.apply(x, acc))
}
