//! subst evaluator.
//!
//! Reduces expressions to normal form by substitution: a binding's value is
//! written into the body in place of the bound name before the body is
//! evaluated. There is no environment and no closure capture.

pub mod error;
pub mod evaluator;
pub mod ops;
pub mod substitute;

pub use error::{ErrorCategory, EvalError, EvalResult};
pub use evaluator::{evaluate, Evaluator, DEFAULT_GAS_LIMIT, MAX_DEPTH};
pub use substitute::substitute;
