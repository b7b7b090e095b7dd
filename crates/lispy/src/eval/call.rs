//! Function call evaluation

use tracing::trace;

use crate::error::type_name;
use crate::value::Arity;
use crate::{BuiltinFn, ClosureValue, Environment, EvalError, Value};

use super::eval_sexpr;

/// Name used for closures in arity errors.
const LAMBDA_NAME: &str = "\\";

/// Call a Value as a function.
///
/// Arguments are already evaluated and are moved into the callee.
/// Any failure is returned as a [`Value::Error`].
pub fn call_value(func: Value, args: Vec<Value>, env: &mut Environment) -> Value {
    match func {
        Value::Builtin(f) => call_builtin(&f, args, env),
        Value::Closure(c) => call_closure(*c, args, env),
        other => EvalError::NotAFunction {
            got: type_name(&other),
        }
        .into(),
    }
}

/// Call a built-in function.
fn call_builtin(func: &BuiltinFn, args: Vec<Value>, env: &mut Environment) -> Value {
    trace!(builtin = %func.name, args = args.len(), "apply");

    // Check arity before handing over the arguments
    if !func.arity.accepts(args.len()) {
        return EvalError::ArityMismatch {
            op: func.name.clone(),
            expected: func.arity,
            got: args.len(),
        }
        .into();
    }

    (func.func)(env, args).unwrap_or_else(Value::from)
}

/// Call a closure.
///
/// Arguments fill the required parameters in order. Surplus arguments go
/// to the rest parameter, or are an arity error when there is none. When
/// required parameters are left over, the closure is returned with the
/// supplied arguments bound, awaiting the remainder. Otherwise the body
/// runs in a fresh frame linked to the closure's defining frame.
fn call_closure(mut closure: ClosureValue, args: Vec<Value>, env: &mut Environment) -> Value {
    let required = closure.params.required.len();
    trace!(params = required, args = args.len(), depth = env.depth(), "apply closure");

    if args.len() > required && closure.params.rest.is_none() {
        return EvalError::ArityMismatch {
            op: LAMBDA_NAME.to_string(),
            expected: Arity::Exact(required),
            got: args.len(),
        }
        .into();
    }

    let mut args = args.into_iter();
    let take = args.len().min(required);
    for (name, arg) in closure.params.required.drain(..take).zip(args.by_ref()) {
        closure.bound.insert(name, arg);
    }

    if !closure.params.is_saturated() {
        return Value::Closure(Box::new(closure));
    }

    if let Some(rest) = closure.params.rest.take() {
        closure.bound.insert(rest, Value::QExpr(args.collect()));
    }

    let ClosureValue { body, bound, parent, .. } = closure;
    let mut frame = env.call_frame(bound, parent);
    eval_sexpr(body, &mut frame)
}
