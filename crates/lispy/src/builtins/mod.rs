//! Builtin registry: the native operations installed at startup
//!
//! The registry is an explicit, ordered table built once by
//! [`Registry::standard`] and handed to
//! [`Environment::with_registry`](crate::Environment::with_registry).
//! Nothing else holds a global copy of it.

mod arith;
mod bind;
mod compare;
mod io;
mod list;

use indexmap::IndexMap;

use crate::error::{EvalError, Result};
use crate::value::{Arity, BuiltinFn, Value};
use crate::Environment;

/// An ordered table of builtins keyed by name.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: IndexMap<String, BuiltinFn>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The standard builtin set.
    pub fn standard() -> Self {
        Self::new()
            // List functions
            .with("list", Arity::Any, list::builtin_list)
            .with("head", Arity::Exact(1), list::builtin_head)
            .with("tail", Arity::Exact(1), list::builtin_tail)
            .with("eval", Arity::Exact(1), list::builtin_eval)
            .with("join", Arity::AtLeast(1), list::builtin_join)
            .with("cons", Arity::Exact(2), list::builtin_cons)
            // Arithmetic
            .with("+", Arity::AtLeast(1), arith::builtin_add)
            .with("-", Arity::AtLeast(1), arith::builtin_sub)
            .with("*", Arity::AtLeast(1), arith::builtin_mul)
            .with("/", Arity::AtLeast(1), arith::builtin_div)
            // Binding and functions
            .with("def", Arity::AtLeast(1), bind::builtin_def)
            .with("=", Arity::AtLeast(1), bind::builtin_assign)
            .with("put", Arity::AtLeast(1), bind::builtin_put)
            .with("\\", Arity::Exact(2), bind::builtin_lambda)
            .with("fun", Arity::Exact(2), bind::builtin_fun)
            // Comparison and conditionals
            .with(">", Arity::Exact(2), compare::builtin_gt)
            .with("<", Arity::Exact(2), compare::builtin_lt)
            .with(">=", Arity::Exact(2), compare::builtin_ge)
            .with("<=", Arity::Exact(2), compare::builtin_le)
            .with("==", Arity::Exact(2), compare::builtin_eq)
            .with("!=", Arity::Exact(2), compare::builtin_ne)
            .with("if", Arity::Exact(3), compare::builtin_if)
            // Errors, output and files
            .with("error", Arity::Exact(1), io::builtin_error)
            .with("print", Arity::Any, io::builtin_print)
            .with("load", Arity::Exact(1), io::builtin_load)
    }

    /// Add an entry (builder pattern). A later entry replaces an earlier
    /// one with the same name.
    pub fn with(
        mut self,
        name: &str,
        arity: Arity,
        func: fn(&mut Environment, Vec<Value>) -> Result<Value>,
    ) -> Self {
        self.entries
            .insert(name.to_string(), BuiltinFn::new(name, arity, func));
        self
    }

    /// Get an entry by name.
    pub fn get(&self, name: &str) -> Option<&BuiltinFn> {
        self.entries.get(name)
    }

    /// Iterate over entries in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &BuiltinFn> {
        self.entries.values()
    }

    /// Get the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Argument Helpers
// ═══════════════════════════════════════════════════════════════════════

/// Move exactly `N` arguments out of `args`.
fn take_args<const N: usize>(op: &str, args: Vec<Value>) -> Result<[Value; N]> {
    let got = args.len();
    <[Value; N]>::try_from(args).map_err(|_| EvalError::ArityMismatch {
        op: op.to_string(),
        expected: Arity::Exact(N),
        got,
    })
}

fn expect_number(op: &str, position: usize, value: Value) -> Result<i64> {
    match value {
        Value::Number(n) => Ok(n),
        other => Err(EvalError::type_mismatch(op, position, "Number", &other)),
    }
}

fn expect_qexpr(op: &str, position: usize, value: Value) -> Result<Vec<Value>> {
    match value {
        Value::QExpr(items) => Ok(items),
        other => Err(EvalError::type_mismatch(op, position, "Q-Expression", &other)),
    }
}

fn expect_string(op: &str, position: usize, value: Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s),
        other => Err(EvalError::type_mismatch(op, position, "String", &other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_names() {
        let registry = Registry::standard();
        for name in [
            "list", "head", "tail", "eval", "join", "cons", "+", "-", "*", "/", "def", "=", "put",
            "\\", "fun", ">", "<", ">=", "<=", "==", "!=", "if", "error", "print", "load",
        ] {
            assert!(registry.get(name).is_some(), "missing {}", name);
        }
        assert_eq!(registry.len(), 25);
    }

    #[test]
    fn test_with_replaces_same_name() {
        let registry = Registry::new()
            .with("x", Arity::Any, list::builtin_list)
            .with("x", Arity::Exact(1), list::builtin_head);
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("x").map(|b| b.arity), Some(Arity::Exact(1)));
    }

    #[test]
    fn test_take_args_wrong_count() {
        let err = take_args::<2>("cons", vec![Value::Number(1)]).unwrap_err();
        assert!(matches!(err, EvalError::ArityMismatch { got: 1, .. }));
    }

    #[test]
    fn test_expect_helpers() {
        assert_eq!(expect_number("+", 1, Value::Number(3)), Ok(3));
        let err = expect_qexpr("head", 1, Value::Number(3)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Function 'head' passed incorrect type for argument 1. Got Number, Expected Q-Expression."
        );
        assert!(expect_string("error", 1, Value::symbol("s")).is_err());
    }
}
