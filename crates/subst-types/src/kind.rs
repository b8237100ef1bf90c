//! Variant predicates for [`Expr`].

use crate::Expr;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tag naming which variant an expression is, without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExprKind {
    Literal,
    Variable,
    Operation,
    LetIn,
    Function,
    FunctionCall,
}

impl ExprKind {
    /// Human-readable name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ExprKind::Literal => "literal",
            ExprKind::Variable => "variable",
            ExprKind::Operation => "operation",
            ExprKind::LetIn => "let-in",
            ExprKind::Function => "function",
            ExprKind::FunctionCall => "function call",
        }
    }
}

impl fmt::Display for ExprKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Expr {
    pub fn kind(&self) -> ExprKind {
        match self {
            Expr::Literal(_) => ExprKind::Literal,
            Expr::Variable(_) => ExprKind::Variable,
            Expr::Operation { .. } => ExprKind::Operation,
            Expr::LetIn { .. } => ExprKind::LetIn,
            Expr::Function { .. } => ExprKind::Function,
            Expr::FunctionCall { .. } => ExprKind::FunctionCall,
        }
    }

    pub fn is_literal(&self) -> bool {
        self.kind() == ExprKind::Literal
    }

    pub fn is_variable(&self) -> bool {
        self.kind() == ExprKind::Variable
    }

    pub fn is_operation(&self) -> bool {
        self.kind() == ExprKind::Operation
    }

    pub fn is_let_in(&self) -> bool {
        self.kind() == ExprKind::LetIn
    }

    pub fn is_function(&self) -> bool {
        self.kind() == ExprKind::Function
    }

    pub fn is_function_call(&self) -> bool {
        self.kind() == ExprKind::FunctionCall
    }

    /// `true` for the two forms evaluation never reduces further.
    pub fn is_normal_form(&self) -> bool {
        matches!(self.kind(), ExprKind::Literal | ExprKind::Function)
    }

    pub fn as_literal(&self) -> Option<f64> {
        match self {
            Expr::Literal(n) => Some(*n),
            _ => None,
        }
    }

    /// Parameter name and body, if this is a function value.
    pub fn as_function(&self) -> Option<(&str, &Expr)> {
        match self {
            Expr::Function { param, body } => Some((param, body)),
            _ => None,
        }
    }
}
