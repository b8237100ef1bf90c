//! Expression node types.
//!
//! Nodes are immutable values: every rewrite builds a new tree.
//! Recursive children are boxed to keep the enum size reasonable.

use serde::{Deserialize, Serialize};
use std::fmt;

// ══════════════════════════════════════════════════════════════════════════════
// Expressions
// ══════════════════════════════════════════════════════════════════════════════

/// An expression of the language.
///
/// `Literal` and `Function` are the only normal forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// `42`
    Literal(f64),
    /// `x`
    Variable(String),
    /// `left op right`
    Operation {
        left: Box<Expr>,
        op: BinOp,
        right: Box<Expr>,
    },
    /// `let name = head in body`
    LetIn {
        name: String,
        head: Box<Expr>,
        body: Box<Expr>,
    },
    /// `fun param -> body`
    Function { param: String, body: Box<Expr> },
    /// `fun_expr arg`
    FunctionCall { fun: Box<Expr>, arg: Box<Expr> },
}

impl Expr {
    pub fn literal(value: f64) -> Self {
        Self::Literal(value)
    }

    pub fn var(name: impl Into<String>) -> Self {
        Self::Variable(name.into())
    }

    pub fn op(left: Expr, op: BinOp, right: Expr) -> Self {
        Self::Operation {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn let_in(name: impl Into<String>, head: Expr, body: Expr) -> Self {
        Self::LetIn {
            name: name.into(),
            head: Box::new(head),
            body: Box::new(body),
        }
    }

    pub fn fun(param: impl Into<String>, body: Expr) -> Self {
        Self::Function {
            param: param.into(),
            body: Box::new(body),
        }
    }

    pub fn call(fun: Expr, arg: Expr) -> Self {
        Self::FunctionCall {
            fun: Box::new(fun),
            arg: Box::new(arg),
        }
    }

    /// Height of the tree; a leaf has depth 1.
    ///
    /// Walks with an explicit stack, so it is safe on trees too deep to
    /// recurse over.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((expr, depth)) = stack.pop() {
            max = max.max(depth);
            match expr {
                Expr::Literal(_) | Expr::Variable(_) => {}
                Expr::Operation { left, right, .. } => {
                    stack.push((&**left, depth + 1));
                    stack.push((&**right, depth + 1));
                }
                Expr::LetIn { head, body, .. } => {
                    stack.push((&**head, depth + 1));
                    stack.push((&**body, depth + 1));
                }
                Expr::Function { body, .. } => stack.push((&**body, depth + 1)),
                Expr::FunctionCall { fun, arg } => {
                    stack.push((&**fun, depth + 1));
                    stack.push((&**arg, depth + 1));
                }
            }
        }
        max
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Operators
// ══════════════════════════════════════════════════════════════════════════════

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    pub const ALL: [BinOp; 4] = [BinOp::Add, BinOp::Sub, BinOp::Mul, BinOp::Div];

    /// Returns the operator symbol for error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::Mul => "*",
            BinOp::Div => "/",
        }
    }
}

impl fmt::Display for BinOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
