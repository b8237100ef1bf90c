//! Runtime error types for the evaluator.

use serde::{Deserialize, Serialize};
use subst_types::{BinOp, ExprKind};
use thiserror::Error;

/// Broad class of an [`EvalError`], for callers that treat scoping and
/// type errors differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Scope,
    Type,
    Arithmetic,
    Resource,
}

/// Evaluation error. Each failed evaluation surfaces exactly one.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// A variable was reached that no substitution eliminated.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),
    /// The callee of a function call reduced to a number.
    ///
    /// `callee` describes the unevaluated callee expression; the only
    /// non-function normal form is a literal, so `value` is what it produced.
    #[error("type error: {callee} evaluated to {value}, which is not callable")]
    NotCallable { callee: String, value: f64 },
    /// An operand of an arithmetic operation is not a number.
    #[error("type error: cannot apply '{op}' to {found}")]
    OperandNotNumeric { op: BinOp, found: ExprKind },
    #[error("arithmetic trap: division of {dividend} by zero")]
    DivisionByZero { dividend: f64 },
    /// The result of `op` is NaN or infinite.
    #[error("arithmetic trap: '{op}' produced NaN/Infinity")]
    ArithmeticOverflow { op: BinOp },
    /// A literal that is NaN or infinite.
    #[error("arithmetic trap: literal {value} is not finite")]
    InvalidLiteral { value: f64 },
    #[error("gas exhausted after {limit} steps")]
    GasExhausted { limit: u64 },
    /// Expression nesting exceeds the evaluator's recursion limit.
    #[error("maximum nesting depth is {limit}")]
    DepthExceeded { limit: usize },
}

impl EvalError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnboundVariable(_) => ErrorCategory::Scope,
            Self::NotCallable { .. } | Self::OperandNotNumeric { .. } => ErrorCategory::Type,
            Self::DivisionByZero { .. }
            | Self::ArithmeticOverflow { .. }
            | Self::InvalidLiteral { .. } => ErrorCategory::Arithmetic,
            Self::GasExhausted { .. } | Self::DepthExceeded { .. } => ErrorCategory::Resource,
        }
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
