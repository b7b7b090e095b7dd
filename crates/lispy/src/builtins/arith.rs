//! Integer arithmetic: `+ - * /`

use super::expect_number;
use crate::error::{EvalError, Result};
use crate::{Environment, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ArithOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl ArithOp {
    fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Sub => "-",
            ArithOp::Mul => "*",
            ArithOp::Div => "/",
        }
    }

    fn apply(self, x: i64, y: i64) -> Result<i64> {
        let result = match self {
            ArithOp::Add => x.checked_add(y),
            ArithOp::Sub => x.checked_sub(y),
            ArithOp::Mul => x.checked_mul(y),
            ArithOp::Div => {
                if y == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                x.checked_div(y)
            }
        };
        result.ok_or_else(|| EvalError::IntegerOverflow {
            op: self.symbol().to_string(),
        })
    }
}

/// Fold `args` left to right with `op`.
///
/// Every operand is type-checked before any arithmetic happens. A lone
/// operand to `-` is negated.
fn arithmetic(op: ArithOp, args: Vec<Value>) -> Result<Value> {
    let numbers = args
        .into_iter()
        .enumerate()
        .map(|(i, v)| expect_number(op.symbol(), i + 1, v))
        .collect::<Result<Vec<i64>>>()?;

    let (first, rest) = numbers
        .split_first()
        .ok_or_else(|| EvalError::ArityMismatch {
            op: op.symbol().to_string(),
            expected: crate::value::Arity::AtLeast(1),
            got: 0,
        })?;

    if op == ArithOp::Sub && rest.is_empty() {
        return first
            .checked_neg()
            .map(Value::Number)
            .ok_or_else(|| EvalError::IntegerOverflow {
                op: op.symbol().to_string(),
            });
    }

    rest.iter()
        .try_fold(*first, |acc, &y| op.apply(acc, y))
        .map(Value::Number)
}

pub(super) fn builtin_add(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    arithmetic(ArithOp::Add, args)
}

pub(super) fn builtin_sub(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    arithmetic(ArithOp::Sub, args)
}

pub(super) fn builtin_mul(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    arithmetic(ArithOp::Mul, args)
}

pub(super) fn builtin_div(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    arithmetic(ArithOp::Div, args)
}
