//! Core expression evaluator.

use crate::error::{EvalError, EvalResult};
use crate::ops;
use crate::substitute::Substitution;
use subst_types::{BinOp, Expr};
use tracing::{debug, trace};

/// Gas limit used by [`evaluate`] and [`Evaluator::default`].
pub const DEFAULT_GAS_LIMIT: u64 = 1_000_000;

/// Default nesting limit for evaluation and substitution.
pub const MAX_DEPTH: usize = 256;

/// Evaluate `expr` to a normal form with a default evaluator.
pub fn evaluate(expr: &Expr) -> EvalResult<Expr> {
    Evaluator::default().eval_expr(expr)
}

/// Reduces expressions to `Literal` or `Function` by substitution.
pub struct Evaluator {
    /// Gas counter, one unit per reduction step.
    gas: u64,
    gas_limit: u64,
    /// Current `eval_expr` nesting.
    depth: usize,
    max_depth: usize,
}

impl Evaluator {
    /// Create a new evaluator with the given gas limit and [`MAX_DEPTH`].
    pub fn new(gas_limit: u64) -> Self {
        Self {
            gas: 0,
            gas_limit,
            depth: 0,
            max_depth: MAX_DEPTH,
        }
    }

    /// Replace the nesting limit.
    ///
    /// Each level of nesting costs native stack, so raising the limit far
    /// past the default needs a correspondingly larger thread stack.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Steps consumed so far.
    pub fn gas_used(&self) -> u64 {
        self.gas
    }

    fn tick(&mut self) -> EvalResult<()> {
        self.gas += 1;
        if self.gas > self.gas_limit {
            Err(EvalError::GasExhausted {
                limit: self.gas_limit,
            })
        } else {
            Ok(())
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Expression evaluation
    // ══════════════════════════════════════════════════════════════════════

    fn too_deep(&self) -> EvalError {
        EvalError::DepthExceeded {
            limit: self.max_depth,
        }
    }

    /// Evaluate an expression to a normal form.
    pub fn eval_expr(&mut self, expr: &Expr) -> EvalResult<Expr> {
        // Trees built during evaluation stay within the limit; only the
        // caller's tree needs measuring.
        if self.depth == 0 && expr.depth() > self.max_depth {
            return Err(self.too_deep());
        }
        self.tick()?;
        self.depth += 1;
        if self.depth > self.max_depth {
            self.depth -= 1;
            return Err(self.too_deep());
        }
        let result = self.eval_node(expr);
        self.depth -= 1;
        result
    }

    fn eval_node(&mut self, expr: &Expr) -> EvalResult<Expr> {
        match expr {
            Expr::Literal(n) if !n.is_finite() => Err(EvalError::InvalidLiteral { value: *n }),
            Expr::Literal(_) | Expr::Function { .. } => Ok(expr.clone()),
            Expr::Variable(name) => Err(EvalError::UnboundVariable(name.clone())),
            Expr::Operation { left, op, right } => self.eval_operation(left, *op, right),
            Expr::LetIn { name, head, body } => self.eval_let_in(name, head, body),
            Expr::FunctionCall { fun, arg } => self.eval_call(fun, arg),
        }
    }

    // ── Operators ────────────────────────────────────────────────────────

    fn eval_operation(&mut self, left: &Expr, op: BinOp, right: &Expr) -> EvalResult<Expr> {
        let lv = self.eval_number(left, op)?;
        let rv = self.eval_number(right, op)?;
        let result = ops::apply(op, lv, rv)?;
        trace!(%op, lv, rv, result, "reduced operation");
        Ok(Expr::Literal(result))
    }

    fn eval_number(&mut self, operand: &Expr, op: BinOp) -> EvalResult<f64> {
        let value = self.eval_expr(operand)?;
        value.as_literal().ok_or(EvalError::OperandNotNumeric {
            op,
            found: value.kind(),
        })
    }

    // ── Bindings ─────────────────────────────────────────────────────────

    fn eval_let_in(&mut self, name: &str, head: &Expr, body: &Expr) -> EvalResult<Expr> {
        let value = self.eval_expr(head)?;
        debug!(binder = name, kind = %value.kind(), gas = self.gas, "let binding");
        let body = Substitution::new(&value, name, self.max_depth).apply(body)?;
        self.eval_expr(&body)
    }

    // ── Application ──────────────────────────────────────────────────────

    fn eval_call(&mut self, fun: &Expr, arg: &Expr) -> EvalResult<Expr> {
        let callee = self.eval_expr(fun)?;
        let (param, body) = match callee {
            Expr::Function { param, body } => (param, body),
            other => {
                return Err(EvalError::NotCallable {
                    callee: describe_callee(fun),
                    value: other.as_literal().unwrap_or(f64::NAN),
                })
            }
        };
        let value = self.eval_expr(arg)?;
        debug!(param = %param, gas = self.gas, "function application");
        let body = instantiate(&value, &param, &body, self.max_depth)?;
        self.eval_expr(&body)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_LIMIT)
    }
}

/// Substitute an argument for `param` in a function body.
///
/// Unlike the generic engine this reaches one level into a body that is
/// itself a function, which is what makes curried application work. The
/// inner function's own parameter still shadows `param`. Functions nested
/// deeper than that are left untouched.
fn instantiate(value: &Expr, param: &str, body: &Expr, max_depth: usize) -> EvalResult<Expr> {
    match body {
        Expr::Function {
            param: inner,
            body: inner_body,
        } => {
            if inner == param {
                Ok(body.clone())
            } else {
                // One level is taken by the rebuilt function node.
                let limit = max_depth.saturating_sub(1);
                let inner_body = Substitution::new(value, param, limit).apply(inner_body)?;
                Ok(Expr::fun(inner.clone(), inner_body))
            }
        }
        _ => Substitution::new(value, param, max_depth).apply(body),
    }
}

/// Short description of an unevaluated callee for diagnostics.
fn describe_callee(fun: &Expr) -> String {
    match fun {
        Expr::Variable(name) => format!("variable '{name}'"),
        Expr::Operation { op, .. } => format!("operation '{op}'"),
        other => other.kind().to_string(),
    }
}
