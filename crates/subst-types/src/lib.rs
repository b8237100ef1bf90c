//! Shared types for the subst interpreter.
//!
//! This crate defines the expression tree consumed by the substitution
//! engine and the evaluator, the closed set of arithmetic operators,
//! and the variant predicates used to dispatch over expressions.

pub mod ast;
mod kind;

pub use ast::{BinOp, Expr};
pub use kind::ExprKind;
