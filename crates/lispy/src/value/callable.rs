//! Callable value types: closures and builtins

use std::fmt;
use std::sync::Arc;

use super::Value;
use crate::environment::{Environment, FrameRef, Scope};
use crate::error::{type_name, EvalError};

/// Marker separating required parameters from the rest parameter.
pub const REST_MARKER: &str = "&";

/// Type alias for builtin function pointers to reduce complexity
pub type BuiltinFnPtr =
    Arc<dyn Fn(&mut Environment, Vec<Value>) -> Result<Value, EvalError> + Send + Sync>;

/// Declared argument count of a builtin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Exactly this many arguments
    Exact(usize),
    /// This many or more
    AtLeast(usize),
    /// Any number, including none
    Any,
}

impl Arity {
    /// Whether `count` arguments satisfy this arity.
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exact(n) => count == n,
            Arity::AtLeast(n) => count >= n,
            Arity::Any => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Exact(n) => write!(f, "{}", n),
            Arity::AtLeast(n) => write!(f, "at least {}", n),
            Arity::Any => write!(f, "any number"),
        }
    }
}

/// A built-in native function.
///
/// Identity is the registry entry name; two builtins are equal when
/// they were installed under the same name.
#[derive(Clone)]
pub struct BuiltinFn {
    /// Registry name (for display/debugging)
    pub name: String,

    /// Argument count checked before `func` runs
    pub arity: Arity,

    /// The actual function pointer
    pub func: BuiltinFnPtr,
}

impl BuiltinFn {
    /// Create a builtin from a plain function.
    pub fn new(
        name: impl Into<String>,
        arity: Arity,
        func: fn(&mut Environment, Vec<Value>) -> Result<Value, EvalError>,
    ) -> Self {
        Self {
            name: name.into(),
            arity,
            func: Arc::new(func),
        }
    }
}

impl fmt::Debug for BuiltinFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuiltinFn({})", self.name)
    }
}

/// A closure's parameter list, decided once when the closure is built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Params {
    /// Names bound positionally, in order
    pub required: Vec<String>,

    /// Name that collects surplus arguments into a Q-expression
    pub rest: Option<String>,
}

impl Params {
    /// Build a parameter list from the contents of a formals Q-expression.
    ///
    /// Every entry must be a symbol. `&` may appear once and must be
    /// followed by exactly one more symbol.
    pub fn from_formals(op: &str, formals: Vec<Value>) -> Result<Self, EvalError> {
        let mut names = Vec::with_capacity(formals.len());
        for formal in formals {
            match formal {
                Value::Symbol(name) => names.push(name),
                other => {
                    return Err(EvalError::NonSymbol {
                        op: op.to_string(),
                        got: type_name(&other),
                    })
                }
            }
        }

        match names.iter().position(|n| n == REST_MARKER) {
            None => Ok(Self {
                required: names,
                rest: None,
            }),
            Some(idx) => {
                let mut tail = names.split_off(idx);
                // tail = ["&", rest]
                if tail.len() != 2 || tail[1] == REST_MARKER {
                    return Err(EvalError::MalformedVariadicSpec);
                }
                Ok(Self {
                    required: names,
                    rest: tail.pop(),
                })
            }
        }
    }

    /// Render back to formal symbols, with `&` restored before the rest name.
    pub fn to_formals(&self) -> Vec<Value> {
        let mut formals: Vec<Value> = self.required.iter().cloned().map(Value::Symbol).collect();
        if let Some(rest) = &self.rest {
            formals.push(Value::symbol(REST_MARKER));
            formals.push(Value::Symbol(rest.clone()));
        }
        formals
    }

    /// Whether no positional parameters remain to be filled.
    pub fn is_saturated(&self) -> bool {
        self.required.is_empty()
    }
}

/// A user-defined function.
///
/// `bound` holds arguments already supplied through partial application.
/// `parent` is the call frame the closure was built in; every call links
/// its fresh frame to it, so names resolve where the closure was written.
/// Cloning shares the parent frame and copies `bound`.
#[derive(Debug, Clone)]
pub struct ClosureValue {
    /// Parameters still awaiting arguments
    pub params: Params,

    /// Body, stored as the contents of a Q-expression
    pub body: Vec<Value>,

    /// Arguments bound by partial application
    pub bound: Scope,

    /// Defining frame; `None` for closures built at global scope
    pub parent: Option<FrameRef>,
}

impl ClosureValue {
    /// Create a closure with no defining frame.
    pub fn new(params: Params, body: Vec<Value>) -> Self {
        Self::with_parent(params, body, None)
    }

    /// Create a closure linked to `parent`.
    pub fn with_parent(params: Params, body: Vec<Value>, parent: Option<FrameRef>) -> Self {
        Self {
            params,
            body,
            bound: Scope::new(),
            parent,
        }
    }
}
