//! Binding and function construction: `def = put \ fun`

use tracing::debug;

use super::{expect_qexpr, take_args};
use crate::error::{type_name, EvalError, Result};
use crate::value::{ClosureValue, Params};
use crate::{Environment, Value};

#[derive(Debug, Clone, Copy)]
enum Target {
    Global,
    Local,
}

/// Bind the symbols in the first argument to the remaining arguments.
fn bind(op: &str, target: Target, env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let mut args = args.into_iter();
    let Some(first) = args.next() else {
        return Err(EvalError::ArityMismatch {
            op: op.to_string(),
            expected: crate::value::Arity::AtLeast(1),
            got: 0,
        });
    };

    let names = expect_qexpr(op, 1, first)?
        .into_iter()
        .map(|v| match v {
            Value::Symbol(name) => Ok(name),
            other => Err(EvalError::NonSymbol {
                op: op.to_string(),
                got: type_name(&other),
            }),
        })
        .collect::<Result<Vec<String>>>()?;

    let values: Vec<Value> = args.collect();
    if names.len() != values.len() {
        return Err(EvalError::BindingCountMismatch {
            op: op.to_string(),
            symbols: names.len(),
            values: values.len(),
        });
    }

    for (name, value) in names.into_iter().zip(values) {
        match target {
            Target::Global => env.bind_global(name, value),
            Target::Local => env.bind_local(name, value),
        }
    }
    Ok(Value::unit())
}

pub(super) fn builtin_def(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    bind("def", Target::Global, env, args)
}

pub(super) fn builtin_assign(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    bind("=", Target::Local, env, args)
}

pub(super) fn builtin_put(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    bind("put", Target::Local, env, args)
}

/// Build a closure from a formals list and a body list.
///
/// The closure is linked to the current call frame, so it sees that
/// frame's bindings as they are when it runs.
fn lambda(op: &str, env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    let [formals, body] = take_args(op, args)?;
    let formals = expect_qexpr(op, 1, formals)?;
    let body = expect_qexpr(op, 2, body)?;
    let params = Params::from_formals(op, formals)?;
    let parent = env.capture();

    debug!(
        params = params.required.len(),
        variadic = params.rest.is_some(),
        local = parent.is_some(),
        "closure constructed"
    );
    Ok(ClosureValue::with_parent(params, body, parent).into())
}

pub(super) fn builtin_lambda(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    lambda("\\", env, args)
}

pub(super) fn builtin_fun(env: &mut Environment, args: Vec<Value>) -> Result<Value> {
    lambda("fun", env, args)
}
