//! # minigrad-ops — Scalar Operators and List Combinators
//!
//! Elementary functions and higher-order list operations for a small
//! automatic-differentiation learning stack.
//!
//! ## Features
//!
//! - **scalar**: arithmetic, comparisons (boolean-as-float), `sigmoid`, `relu`,
//!   stabilized `log`, `exp`, `inv`
//! - **backward**: derivative contributions `log_back`, `inv_back`, `relu_back`
//! - **combinators**: `map`, `zip_with`, `reduce`, `fold` and the
//!   `neg_list` / `add_lists` / `sum` / `prod` shorthands
//! - **op**: `UnaryOp` / `BinaryOp` registry for by-name dispatch
//!
//! ## Example
//!
//! ```
//! use minigrad_ops::prelude::*;
//!
//! let doubled = map(|x| mul(x, 2.0))(&[1.0, 2.0, 3.0]);
//! assert_eq!(doubled, vec![2.0, 4.0, 6.0]);
//! assert_eq!(sum(&[1.0, 2.0, 3.0, 4.0]), 10.0);
//! assert!(inv(0.0).is_err());
//! ```

pub mod error;
pub use error::{OpsError, OpsResult};

pub mod scalar;
pub use scalar::*;

pub mod backward;
pub use backward::*;

pub mod combinators;
pub use combinators::*;

pub mod op;
pub use op::{fold_op, map_op, reduce_op, zip_with_op, BinaryOp, UnaryOp};

/// Prelude module with common re-exports
pub mod prelude {
    pub use crate::backward::*;
    pub use crate::combinators::*;
    pub use crate::error::{OpsError, OpsResult};
    pub use crate::op::{fold_op, map_op, reduce_op, zip_with_op, BinaryOp, UnaryOp};
    pub use crate::scalar::*;
}
