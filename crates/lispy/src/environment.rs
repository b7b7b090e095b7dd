//! Runtime environment managing name bindings
//!
//! The global scope lives as long as the environment. Every closure call
//! pushes one call [`Frame`], seeded with the closure's bound arguments
//! and linked to the frame the closure was defined in, and pops it when
//! the body has been evaluated.
//!
//! Resolution is lexical: a name is looked up along the innermost frame's
//! parent chain and then in the global scope. Frames belonging to callers
//! further down the stack are never consulted. Frames are shared, so a
//! closure sees bindings added to its defining frame after it was built,
//! including a binding of the closure itself.

mod frame;
mod prelude;

pub use frame::CallGuard;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use crate::error::EvalError;
use crate::value::{BuiltinFn, Value};

/// One table of bindings.
///
/// The global scope is a `Scope`; so is the seed of a call frame and the
/// set of arguments a partially applied closure carries. Insertion order
/// is preserved so listings are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scope {
    bindings: IndexMap<String, Value>,
}

impl Scope {
    /// Create an empty scope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a binding in this scope only.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.bindings.get(name)
    }

    /// Insert or replace a binding.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), value);
    }

    /// Check if a binding exists in this scope.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Iterate over bindings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the scope is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl FromIterator<(String, Value)> for Scope {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Call Frames
// ═══════════════════════════════════════════════════════════════════════

/// Shared handle to a call frame.
pub type FrameRef = Rc<Frame>;

/// The local bindings of one closure call.
///
/// A frame outlives its call when a closure built during the call keeps
/// it as its parent. A closure stored into its own defining frame forms
/// a reference cycle; such frames are never freed.
#[derive(Default)]
pub struct Frame {
    bindings: RefCell<Scope>,
    parent: Option<FrameRef>,
}

impl Frame {
    /// Create a frame seeded with `bindings` under `parent`.
    pub fn new(bindings: Scope, parent: Option<FrameRef>) -> Self {
        Self {
            bindings: RefCell::new(bindings),
            parent,
        }
    }

    /// Look up `name` here, then along the parent chain.
    pub fn get(&self, name: &str) -> Option<Value> {
        let mut frame = Some(self);
        while let Some(current) = frame {
            if let Some(value) = current.bindings.borrow().get(name) {
                return Some(value.clone());
            }
            frame = current.parent.as_deref();
        }
        None
    }

    /// Insert or replace a binding in this frame.
    pub fn insert(&self, name: impl Into<String>, value: Value) {
        self.bindings.borrow_mut().insert(name, value);
    }

    /// Check if a binding exists in this frame, ignoring parents.
    pub fn contains_local(&self, name: &str) -> bool {
        self.bindings.borrow().contains(name)
    }

    /// The frame this one was linked to.
    pub fn parent(&self) -> Option<&FrameRef> {
        self.parent.as_ref()
    }

    /// Get the number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.bindings.borrow().len()
    }

    /// Check if this frame has no bindings of its own.
    pub fn is_empty(&self) -> bool {
        self.bindings.borrow().is_empty()
    }
}

// Names only: bindings may hold closures whose parent is this frame.
impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bindings = self.bindings.borrow();
        let names: Vec<&str> = bindings.iter().map(|(name, _)| name).collect();
        f.debug_struct("Frame")
            .field("names", &names)
            .field("has_parent", &self.parent.is_some())
            .finish()
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Environment
// ═══════════════════════════════════════════════════════════════════════

/// The runtime environment.
///
/// # Example
///
/// ```
/// use lispy::{Environment, Scope, Value};
///
/// let mut env = Environment::new();
/// env.bind_global("x", Value::Number(1));
///
/// {
///     let mut call = env.call_frame(Scope::new(), None);
///     call.bind_local("y", Value::Number(2));
///     assert_eq!(call.lookup("x").unwrap(), Value::Number(1));
///     assert_eq!(call.lookup("y").unwrap(), Value::Number(2));
/// }
///
/// assert!(env.lookup("y").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Environment {
    global: Scope,

    /// Active call frames, innermost last
    frames: Vec<FrameRef>,
}

impl Environment {
    /// Create a new environment with an empty global scope.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Frame Management
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a call frame.
    pub fn push_frame(&mut self, frame: FrameRef) {
        self.frames.push(frame);
    }

    /// Leave the innermost call frame, returning it.
    ///
    /// Returns `None` at global scope.
    pub fn pop_frame(&mut self) -> Option<FrameRef> {
        self.frames.pop()
    }

    /// Get the current depth (1 at global scope).
    pub fn depth(&self) -> usize {
        self.frames.len() + 1
    }

    /// Check if we're at global scope.
    pub fn is_global_scope(&self) -> bool {
        self.frames.is_empty()
    }

    /// The innermost call frame, if any.
    pub fn current_frame(&self) -> Option<&FrameRef> {
        self.frames.last()
    }

    /// The global scope.
    pub fn global(&self) -> &Scope {
        &self.global
    }

    /// Run `f` with every call frame set aside, so it evaluates at
    /// global scope. The frames are restored afterwards.
    pub fn in_global_scope<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        let saved = std::mem::take(&mut self.frames);
        let result = f(self);
        self.frames = saved;
        result
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in the innermost frame (the global scope when no call
    /// is active), replacing any existing binding there.
    pub fn bind_local(&mut self, name: impl Into<String>, value: Value) {
        match self.frames.last() {
            Some(frame) => frame.insert(name, value),
            None => self.global.insert(name, value),
        }
    }

    /// Bind `name` in the global scope.
    pub fn bind_global(&mut self, name: impl Into<String>, value: Value) {
        self.global.insert(name, value);
    }

    /// Register a built-in function in the global scope.
    pub fn define_builtin(&mut self, builtin: BuiltinFn) {
        let name = builtin.name.clone();
        self.bind_global(name, Value::Builtin(builtin));
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a binding by name, returning a copy of its value.
    ///
    /// Searches the innermost frame and its parents, then the global scope.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.frames
            .last()
            .and_then(|frame| frame.get(name))
            .or_else(|| self.global.get(name).cloned())
    }

    /// Look up a binding, failing with `UnboundSymbol`.
    pub fn lookup(&self, name: &str) -> Result<Value, EvalError> {
        self.get(name).ok_or_else(|| EvalError::UnboundSymbol {
            name: name.to_string(),
        })
    }

    /// Check if a binding is visible.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Check if a binding exists in the innermost frame only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        match self.frames.last() {
            Some(frame) => frame.contains_local(name),
            None => self.global.contains(name),
        }
    }

    /// The frame a closure built here should be linked to.
    ///
    /// `None` at global scope, since globals are resolved at call time.
    pub fn capture(&self) -> Option<FrameRef> {
        self.frames.last().cloned()
    }
}
