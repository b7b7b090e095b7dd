//! # Lispy
//!
//! A tree-walking evaluator for a small Lisp with two list kinds:
//! S-expressions `( … )`, evaluated eagerly, and Q-expressions `{ … }`,
//! which stay inert data until `eval`, `if` or a function call turns
//! them into code.
//!
//! ## Architecture
//!
//! - **Frontend**: Parse source text into a generic tagged parse tree
//! - **Reader**: Turn the parse tree into [`Value`]s
//! - **Evaluator**: Reduce values in an [`Environment`], applying builtins
//!   and closures (with partial application and rest parameters)
//! - **Builtins**: An explicit [`Registry`] of native operations
//!   installed into the global scope
//!
//! Errors are values: every failure during evaluation comes back as
//! [`Value::Error`] and is printed like any other result.
//!
//! ## Limits
//!
//! Evaluation recurses on the native stack. Unbounded recursion in a
//! program (a closure that always calls itself) exhausts that stack and
//! aborts the process; it is not reported as an error value.
//!
//! ```
//! use lispy::{eval_str, Environment, Value};
//!
//! let mut env = Environment::with_prelude();
//! eval_str(&mut env, "def {add} (\\ {x y} {+ x y})");
//! assert_eq!(eval_str(&mut env, "add 1 2"), Value::Number(3));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builtins;
pub mod environment;
pub mod error;
pub mod eval;
pub mod frontend;
pub mod loader;
pub mod reader;
pub mod value;

// Re-export main types
pub use builtins::Registry;
pub use environment::{CallGuard, Environment, Frame, FrameRef, Scope};
pub use error::{EvalError, Result};
pub use eval::{call_value, eval_expr, eval_sexpr, Evaluate};
pub use frontend::{parse, ParseError, ParseNode, SourceLocation};
pub use loader::{load_file, load_source, LoadOutcome};
pub use reader::{read, read_forms, read_str};
pub use value::{Arity, BuiltinFn, BuiltinFnPtr, ClosureValue, Params, Value};

/// Lispy version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Origin reported for text typed at the prompt.
pub const STDIN_ORIGIN: &str = "<stdin>";

/// Parse one line of input and evaluate it.
///
/// The whole line is read as a single S-expression, so `+ 1 2` needs no
/// surrounding parentheses. A parse failure comes back as an error value.
pub fn eval_str(env: &mut Environment, source: &str) -> Value {
    match read_str(source, STDIN_ORIGIN) {
        Ok(value) => value.eval(env),
        Err(err) => EvalError::from(err).into(),
    }
}
