//! Comparison and conditionals: `> < >= <= == != if`

use super::{expect_number, expect_qexpr, take_args};
use crate::error::Result;
use crate::eval::eval_sexpr;
use crate::{Environment, Value};

fn ordering(op: &str, args: Vec<Value>, cmp: fn(i64, i64) -> bool) -> Result<Value> {
    let [x, y] = take_args(op, args)?;
    let x = expect_number(op, 1, x)?;
    let y = expect_number(op, 2, y)?;
    Ok(Value::from(cmp(x, y)))
}

pub(super) fn builtin_gt(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    ordering(">", args, |x, y| x > y)
}

pub(super) fn builtin_lt(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    ordering("<", args, |x, y| x < y)
}

pub(super) fn builtin_ge(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    ordering(">=", args, |x, y| x >= y)
}

pub(super) fn builtin_le(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    ordering("<=", args, |x, y| x <= y)
}

/// Structural equality; any two values may be compared.
pub(super) fn builtin_eq(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [x, y] = take_args("==", args)?;
    Ok(Value::from(x == y))
}

pub(super) fn builtin_ne(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [x, y] = take_args("!=", args)?;
    Ok(Value::from(x != y))
}

/// Evaluate exactly one of two Q-expression branches. Nonzero is true.
pub(super) fn builtin_if(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [cond, then, otherwise] = take_args("if", args)?;
    let cond = expect_number("if", 1, cond)?;
    let then = expect_qexpr("if", 2, then)?;
    let otherwise = expect_qexpr("if", 3, otherwise)?;

    let branch = if cond != 0 { then } else { otherwise };
    Ok(eval_sexpr(branch, env))
}
