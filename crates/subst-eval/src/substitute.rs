//! Substitution of a value for a free name.
//!
//! Shadowing is the only capture protection: there is no alpha-renaming.
//! The engine also never descends into a `Function` body; the evaluator
//! substitutes into a function body only when the function is applied
//! (see [`crate::evaluator`]). A free name inside a function value that
//! sits in a larger expression is therefore left in place.

use crate::error::{EvalError, EvalResult};
use crate::evaluator::MAX_DEPTH;
use subst_types::Expr;

/// Replace every free occurrence of `Variable(name)` in `expr` with `value`.
///
/// Fails with [`EvalError::DepthExceeded`] if `expr`, or the rewritten
/// tree, nests deeper than [`MAX_DEPTH`].
pub fn substitute(value: &Expr, name: &str, expr: &Expr) -> EvalResult<Expr> {
    if expr.depth() > MAX_DEPTH {
        return Err(EvalError::DepthExceeded { limit: MAX_DEPTH });
    }
    Substitution::new(value, name, MAX_DEPTH).apply(expr)
}

/// A single `value`-for-`name` rewrite with a recursion limit.
pub(crate) struct Substitution<'a> {
    value: &'a Expr,
    value_depth: usize,
    name: &'a str,
    depth: usize,
    max_depth: usize,
}

impl<'a> Substitution<'a> {
    pub(crate) fn new(value: &'a Expr, name: &'a str, max_depth: usize) -> Self {
        Self {
            value,
            value_depth: value.depth(),
            name,
            depth: 0,
            max_depth,
        }
    }

    pub(crate) fn apply(&mut self, expr: &Expr) -> EvalResult<Expr> {
        self.depth += 1;
        if self.depth > self.max_depth {
            self.depth -= 1;
            return Err(EvalError::DepthExceeded {
                limit: self.max_depth,
            });
        }
        let result = self.rewrite(expr);
        self.depth -= 1;
        result
    }

    fn rewrite(&mut self, expr: &Expr) -> EvalResult<Expr> {
        Ok(match expr {
            Expr::Literal(_) => expr.clone(),
            Expr::Variable(n) if n == self.name => {
                // The value replaces a leaf at the current depth.
                if self.depth - 1 + self.value_depth > self.max_depth {
                    return Err(EvalError::DepthExceeded {
                        limit: self.max_depth,
                    });
                }
                self.value.clone()
            }
            Expr::Variable(_) => expr.clone(),
            Expr::Operation { left, op, right } => {
                Expr::op(self.apply(left)?, *op, self.apply(right)?)
            }
            Expr::LetIn {
                name: bound,
                head,
                body,
            } => {
                // The head is outside the binder's scope, so it is always rewritten.
                let head = self.apply(head)?;
                let body = if bound == self.name {
                    body.as_ref().clone()
                } else {
                    self.apply(body)?
                };
                Expr::let_in(bound.clone(), head, body)
            }
            Expr::Function { .. } => expr.clone(),
            Expr::FunctionCall { fun, arg } => Expr::call(self.apply(fun)?, self.apply(arg)?),
        })
    }
}
