//! Errors, output and file loading: `error print load`

use super::{expect_string, take_args};
use crate::error::{EvalError, Result};
use crate::loader::load_file;
use crate::{Environment, Value};

/// Raise a user error from a string message.
pub(super) fn builtin_error(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [message] = take_args("error", args)?;
    Err(EvalError::User(expect_string("error", 1, message)?))
}

pub(super) fn builtin_print(_env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            print!(" ");
        }
        print!("{}", arg);
    }
    println!();
    Ok(Value::unit())
}

/// Evaluate every top-level form in a file at global scope.
///
/// Errors from individual forms are printed and do not stop the load.
pub(super) fn builtin_load(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [path] = take_args("load", args)?;
    let path = expect_string("load", 1, path)?;
    let outcome = env.in_global_scope(|env| load_file(env, &path))?;
    for err in &outcome.errors {
        println!("{}", err);
    }
    Ok(Value::unit())
}
