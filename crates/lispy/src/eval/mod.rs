//! Expression evaluation

pub mod call;

use tracing::trace;

use crate::{Environment, EvalError, Value};

pub use call::call_value;

/// Trait for reducing values in an environment.
///
/// Evaluation consumes the value: arguments move into the call engine
/// and are only copied when something decides to store them.
pub trait Evaluate {
    /// Evaluate this value in the given environment.
    ///
    /// Failures come back as [`Value::Error`], never as a panic.
    fn eval(self, env: &mut Environment) -> Value;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Value {
    fn eval(self, env: &mut Environment) -> Value {
        match self {
            Value::Symbol(name) => env.lookup(&name).unwrap_or_else(Value::from),
            Value::SExpr(cells) => eval_sexpr(cells, env),

            // Numbers, errors, strings, Q-expressions and functions are
            // already fully reduced
            other => other,
        }
    }
}

/// Evaluate the cells of an S-expression.
///
/// Every cell is evaluated left to right before anything is checked, so
/// side effects of later cells happen even when an earlier one failed.
/// The lowest-index error then wins. An empty list evaluates to itself,
/// a single cell is unwrapped, and anything longer is a call.
pub fn eval_sexpr(cells: Vec<Value>, env: &mut Environment) -> Value {
    trace!(cells = cells.len(), depth = env.depth(), "eval sexpr");
    let mut cells: Vec<Value> = cells.into_iter().map(|cell| cell.eval(env)).collect();

    if let Some(idx) = cells.iter().position(Value::is_error) {
        return cells.swap_remove(idx);
    }

    match cells.len() {
        0 => Value::SExpr(cells),
        1 => cells.remove(0),
        _ => {
            let args = cells.split_off(1);
            let func = cells.remove(0);
            if !func.is_callable() {
                return EvalError::NotAFunction {
                    got: crate::error::type_name(&func),
                }
                .into();
            }
            call_value(func, args, env)
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a value (convenience wrapper).
pub fn eval_expr(value: Value, env: &mut Environment) -> Value {
    value.eval(env)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_atoms_evaluate_to_themselves() {
        let mut env = Environment::new();
        assert_eq!(Value::Number(3).eval(&mut env), Value::Number(3));
        assert_eq!(Value::string("s").eval(&mut env), Value::string("s"));
        assert_eq!(Value::error("e").eval(&mut env), Value::error("e"));
        let q = Value::qexpr(vec![Value::symbol("undefined")]);
        assert_eq!(q.clone().eval(&mut env), q);
    }

    #[test]
    fn test_unbound_symbol_is_error_value() {
        let mut env = Environment::new();
        let result = Value::symbol("nope").eval(&mut env);
        assert_eq!(result, Value::error("Unbound Symbol 'nope'"));
    }

    #[test]
    fn test_empty_and_singleton_sexpr() {
        let mut env = Environment::new();
        assert_eq!(eval_sexpr(vec![], &mut env), Value::unit());
        assert_eq!(
            eval_sexpr(vec![Value::Number(9)], &mut env),
            Value::Number(9)
        );
    }

    #[test]
    fn test_non_function_head() {
        let mut env = Environment::new();
        let result = eval_sexpr(vec![Value::Number(1), Value::Number(2)], &mut env);
        assert_eq!(
            result,
            Value::error("S-Expression starts with incorrect type. Got Number, Expected Function.")
        );
    }

    #[test]
    fn test_first_error_wins() {
        let mut env = Environment::new();
        let result = eval_sexpr(
            vec![
                Value::Number(1),
                Value::symbol("first"),
                Value::symbol("second"),
            ],
            &mut env,
        );
        assert_eq!(result, Value::error("Unbound Symbol 'first'"));
    }
}
