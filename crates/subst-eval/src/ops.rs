//! Arithmetic operation table.

use crate::error::{EvalError, EvalResult};
use subst_types::BinOp;

/// Apply `op` to two numbers.
///
/// Division by zero and non-finite results are traps, never values.
pub fn apply(op: BinOp, left: f64, right: f64) -> EvalResult<f64> {
    let result = match op {
        BinOp::Add => left + right,
        BinOp::Sub => left - right,
        BinOp::Mul => left * right,
        BinOp::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero { dividend: left });
            }
            left / right
        }
    };
    if result.is_nan() || result.is_infinite() {
        return Err(EvalError::ArithmeticOverflow { op });
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_arithmetic() {
        assert_eq!(apply(BinOp::Add, -10.0, 2.0), Ok(-8.0));
        assert_eq!(apply(BinOp::Sub, 10.0, -2.0), Ok(12.0));
        assert_eq!(apply(BinOp::Mul, -1.0, 5.0), Ok(-5.0));
        assert_eq!(apply(BinOp::Div, 6.0, 2.0), Ok(3.0));
    }

    #[test]
    fn division_is_not_truncated() {
        assert_eq!(apply(BinOp::Div, 7.0, 2.0), Ok(3.5));
    }

    #[test]
    fn division_by_zero_traps() {
        assert_eq!(
            apply(BinOp::Div, 6.0, 0.0),
            Err(EvalError::DivisionByZero { dividend: 6.0 })
        );
        assert_eq!(
            apply(BinOp::Div, 6.0, -0.0),
            Err(EvalError::DivisionByZero { dividend: 6.0 })
        );
    }

    #[test]
    fn zero_dividend_is_fine() {
        assert_eq!(apply(BinOp::Div, 0.0, 4.0), Ok(0.0));
    }

    #[test]
    fn overflow_traps() {
        assert_eq!(
            apply(BinOp::Mul, f64::MAX, 2.0),
            Err(EvalError::ArithmeticOverflow { op: BinOp::Mul })
        );
        assert_eq!(
            apply(BinOp::Add, f64::MAX, f64::MAX),
            Err(EvalError::ArithmeticOverflow { op: BinOp::Add })
        );
    }
}
