//! Value representation for runtime values

mod callable;
mod display;
mod impls;

pub use callable::{Arity, BuiltinFn, BuiltinFnPtr, ClosureValue, Params};
pub use display::escape;

/// Runtime value representation for the Lispy evaluator.
///
/// Every list owns its children outright and `Clone` is a deep copy, so
/// storing a clone into an environment never aliases the original. The
/// one shared part is a closure's defining frame, which all copies of the
/// closure resolve names against.
#[derive(Debug, Clone)]
pub enum Value {
    // ═══════════════════════════════════════════════════════════════════
    // Atoms
    // ═══════════════════════════════════════════════════════════════════
    /// 64-bit signed integer
    Number(i64),

    /// First-class error carrying its rendered message
    Error(String),

    /// Symbol, resolved through the environment when evaluated
    Symbol(String),

    /// String literal (stored unescaped)
    String(String),

    // ═══════════════════════════════════════════════════════════════════
    // Functions
    // ═══════════════════════════════════════════════════════════════════
    /// Native operation from the builtin registry
    Builtin(BuiltinFn),

    /// User-defined function linked to its defining frame
    Closure(Box<ClosureValue>),

    // ═══════════════════════════════════════════════════════════════════
    // Lists
    // ═══════════════════════════════════════════════════════════════════
    /// S-expression: evaluated eagerly, head applied to the tail
    SExpr(Vec<Value>),

    /// Q-expression: inert data until retagged by `eval`, `if` or a call
    QExpr(Vec<Value>),
}
