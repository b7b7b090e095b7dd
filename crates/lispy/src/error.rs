//! Error types for Lispy evaluation
//!
//! Evaluation errors are ordinary values at runtime: native operations
//! return `Result<Value, EvalError>` and the call engine folds any `Err`
//! into a [`Value::Error`] carrying the rendered message.

use thiserror::Error;

use crate::frontend::ParseError;
use crate::value::{Arity, Value};

/// The evaluation error taxonomy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A symbol with no binding anywhere in the scope chain
    #[error("Unbound Symbol '{name}'")]
    UnboundSymbol {
        /// The symbol that failed to resolve
        name: String,
    },

    /// An argument of the wrong kind
    #[error("Function '{op}' passed incorrect type for argument {position}. Got {got}, Expected {expected}.")]
    TypeMismatch {
        /// Operation that rejected the argument
        op: String,
        /// 1-based argument position
        position: usize,
        /// Kind the operation wanted
        expected: &'static str,
        /// Kind it received
        got: &'static str,
    },

    /// Wrong number of arguments
    #[error("Function '{op}' passed incorrect number of arguments. Got {got}, Expected {expected}.")]
    ArityMismatch {
        /// Operation that was called
        op: String,
        /// Declared arity
        expected: Arity,
        /// Number of arguments given
        got: usize,
    },

    /// Integer division by zero
    #[error("Division By Zero!")]
    DivisionByZero,

    /// Arithmetic result does not fit in 64 bits
    #[error("Integer overflow in '{op}'")]
    IntegerOverflow {
        /// Operation that overflowed
        op: String,
    },

    /// Head of an S-expression is not callable
    #[error("S-Expression starts with incorrect type. Got {got}, Expected Function.")]
    NotAFunction {
        /// Kind found in head position
        got: &'static str,
    },

    /// `&` in a parameter list not followed by exactly one symbol
    #[error("Function format invalid. Symbol '&' not followed by single symbol.")]
    MalformedVariadicSpec,

    /// `head`/`tail` on an empty Q-expression
    #[error("Function '{op}' passed {{}}!")]
    EmptyList {
        /// Operation that needed a non-empty list
        op: String,
    },

    /// Binding or parameter list contains something other than a symbol
    #[error("Function '{op}' cannot define non-symbol. Got {got}, Expected Symbol.")]
    NonSymbol {
        /// Operation that inspected the list
        op: String,
        /// Kind found instead of a symbol
        got: &'static str,
    },

    /// `def`/`=` given a different number of values than symbols
    #[error("Function '{op}' cannot define incorrect number of values to symbols. Got {values}, Expected {symbols}.")]
    BindingCountMismatch {
        /// Binding operation
        op: String,
        /// Number of symbols in the binding list
        symbols: usize,
        /// Number of values supplied
        values: usize,
    },

    /// Number literal outside the 64-bit range
    #[error("invalid number '{text}'")]
    InvalidNumber {
        /// The literal as written
        text: String,
    },

    /// Source text could not be parsed
    #[error("{0}")]
    ParseFailure(String),

    /// A file could not be read
    #[error("Could not load Library '{path}': {message}")]
    LoadFailure {
        /// Path as given
        path: String,
        /// Underlying I/O message
        message: String,
    },

    /// Raised by the `error` builtin
    #[error("{0}")]
    User(String),
}

impl EvalError {
    /// Build a `TypeMismatch` for `value` at `position`.
    pub fn type_mismatch(
        op: impl Into<String>,
        position: usize,
        expected: &'static str,
        value: &Value,
    ) -> Self {
        EvalError::TypeMismatch {
            op: op.into(),
            position,
            expected,
            got: type_name(value),
        }
    }
}

impl From<ParseError> for EvalError {
    fn from(err: ParseError) -> Self {
        EvalError::ParseFailure(err.to_string())
    }
}

impl From<EvalError> for Value {
    fn from(err: EvalError) -> Self {
        Value::Error(err.to_string())
    }
}

/// Human-readable name of a value's kind, as used in error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Number(_) => "Number",
        Value::Error(_) => "Error",
        Value::Symbol(_) => "Symbol",
        Value::String(_) => "String",
        Value::Builtin(_) | Value::Closure(_) => "Function",
        Value::SExpr(_) => "S-Expression",
        Value::QExpr(_) => "Q-Expression",
    }
}

/// Result type alias for native operations
pub type Result<T> = std::result::Result<T, EvalError>;
