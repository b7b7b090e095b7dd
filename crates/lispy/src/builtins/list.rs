//! List functions: `list head tail join cons eval`

use super::{expect_qexpr, take_args};
use crate::error::{EvalError, Result};
use crate::eval::eval_sexpr;
use crate::{Environment, Value};

pub(super) fn builtin_list(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    Ok(Value::QExpr(args))
}

pub(super) fn builtin_head(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [list] = take_args("head", args)?;
    let mut items = expect_qexpr("head", 1, list)?;
    if items.is_empty() {
        return Err(EvalError::EmptyList {
            op: "head".to_string(),
        });
    }
    items.truncate(1);
    Ok(Value::QExpr(items))
}

pub(super) fn builtin_tail(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [list] = take_args("tail", args)?;
    let mut items = expect_qexpr("tail", 1, list)?;
    if items.is_empty() {
        return Err(EvalError::EmptyList {
            op: "tail".to_string(),
        });
    }
    items.remove(0);
    Ok(Value::QExpr(items))
}

pub(super) fn builtin_join(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let mut joined = Vec::new();
    for (i, arg) in args.into_iter().enumerate() {
        joined.extend(expect_qexpr("join", i + 1, arg)?);
    }
    Ok(Value::QExpr(joined))
}

pub(super) fn builtin_cons(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [item, list] = take_args("cons", args)?;
    let mut items = expect_qexpr("cons", 2, list)?;
    items.insert(0, item);
    Ok(Value::QExpr(items))
}

/// Retag a Q-expression as an S-expression and evaluate it here.
pub(super) fn builtin_eval(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [expr] = take_args("eval", args)?;
    let cells = expect_qexpr("eval", 1, expr)?;
    Ok(eval_sexpr(cells, env))
}
