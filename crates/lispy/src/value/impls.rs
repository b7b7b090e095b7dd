//! Value trait implementations: constructors, predicates, extractors, From traits, PartialEq

use super::*;

// ═══════════════════════════════════════════════════════════════════
// Convenience Constructors
// ═══════════════════════════════════════════════════════════════════

impl Value {
    /// Create a symbol value
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    /// Create a string value
    pub fn string(s: impl Into<String>) -> Self {
        Value::String(s.into())
    }

    /// Create an error value
    pub fn error(message: impl Into<String>) -> Self {
        Value::Error(message.into())
    }

    /// Create an S-expression
    pub fn sexpr(items: Vec<Value>) -> Self {
        Value::SExpr(items)
    }

    /// Create a Q-expression
    pub fn qexpr(items: Vec<Value>) -> Self {
        Value::QExpr(items)
    }

    /// The empty S-expression `()`, returned by side-effecting builtins
    pub fn unit() -> Self {
        Value::SExpr(Vec::new())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Type Predicates
    // ═══════════════════════════════════════════════════════════════════

    /// Check if value is an error
    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    /// Check if value is callable (builtin or closure)
    pub fn is_callable(&self) -> bool {
        matches!(self, Value::Builtin(_) | Value::Closure(_))
    }

    /// Check if value is the empty S-expression
    pub fn is_unit(&self) -> bool {
        matches!(self, Value::SExpr(items) if items.is_empty())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Extractors (return Option for safe access)
    // ═══════════════════════════════════════════════════════════════════

    /// Extract number
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Extract symbol name
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Extract the children of either list kind
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    /// Extract the error message
    pub fn as_error(&self) -> Option<&str> {
        match self {
            Value::Error(message) => Some(message.as_str()),
            _ => None,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// PartialEq Implementation
// ═══════════════════════════════════════════════════════════════════

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,

            // Lists compare element-wise; S and Q never equal each other
            (Value::SExpr(a), Value::SExpr(b)) => a == b,
            (Value::QExpr(a), Value::QExpr(b)) => a == b,

            // Builtins are equal if same registry entry (identity)
            (Value::Builtin(a), Value::Builtin(b)) => a.name == b.name,

            // Closures by parameters and body; bound arguments and frames are ignored
            (Value::Closure(a), Value::Closure(b)) => a.params == b.params && a.body == b.body,

            // Different types are never equal
            _ => false,
        }
    }
}

// ═══════════════════════════════════════════════════════════════════
// From Trait Implementations
// ═══════════════════════════════════════════════════════════════════

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Number(i64::from(b))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::string(s)
    }
}

impl From<ClosureValue> for Value {
    fn from(closure: ClosureValue) -> Self {
        Value::Closure(Box::new(closure))
    }
}

impl From<BuiltinFn> for Value {
    fn from(builtin: BuiltinFn) -> Self {
        Value::Builtin(builtin)
    }
}
