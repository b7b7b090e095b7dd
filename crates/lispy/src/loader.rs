//! Loading whole source files
//!
//! A file is a sequence of top-level forms. Each form is evaluated in
//! order; a form that evaluates to an error is recorded and loading
//! continues with the next one. A file that does not parse evaluates
//! nothing.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::EvalError;
use crate::eval::Evaluate;
use crate::reader::read_forms;
use crate::{Environment, Value};

/// What happened while loading a source.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    /// Number of top-level forms evaluated
    pub forms: usize,

    /// Error values produced by top-level forms, in source order
    pub errors: Vec<Value>,
}

impl LoadOutcome {
    /// Check if every form evaluated without error.
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Evaluate every top-level form of `source`.
pub fn load_source(
    env: &mut Environment,
    source: &str,
    origin: &str,
) -> Result<LoadOutcome, EvalError> {
    let forms = read_forms(source, origin)?;
    let mut outcome = LoadOutcome::default();

    for form in forms {
        let result = form.eval(env);
        outcome.forms += 1;
        if result.is_error() {
            warn!(origin, form = outcome.forms, error = %result, "top-level form failed");
            outcome.errors.push(result);
        }
    }

    debug!(
        origin,
        forms = outcome.forms,
        errors = outcome.errors.len(),
        "source loaded"
    );
    Ok(outcome)
}

/// Read a file and evaluate every top-level form in it.
pub fn load_file(env: &mut Environment, path: impl AsRef<Path>) -> Result<LoadOutcome, EvalError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    debug!(path = %origin, "loading file");

    let source = std::fs::read_to_string(path).map_err(|e| EvalError::LoadFailure {
        path: origin.clone(),
        message: e.to_string(),
    })?;

    load_source(env, &source, &origin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_source_continues_after_error() {
        let mut env = Environment::with_prelude();
        let outcome = load_source(
            &mut env,
            "(def {a} 1)\n(head {})\n(def {b} 2)",
            "<test>",
        )
        .unwrap();
        assert_eq!(outcome.forms, 3);
        assert_eq!(outcome.errors.len(), 1);
        assert!(!outcome.is_clean());
        assert_eq!(env.get("a"), Some(Value::Number(1)));
        assert_eq!(env.get("b"), Some(Value::Number(2)));
    }

    #[test]
    fn test_load_source_parse_failure_evaluates_nothing() {
        let mut env = Environment::with_prelude();
        let err = load_source(&mut env, "(def {a} 1)\n(def {b} 2", "<test>").unwrap_err();
        assert!(matches!(err, EvalError::ParseFailure(_)));
        assert!(!env.contains("a"));
    }

    #[test]
    fn test_load_file_missing() {
        let mut env = Environment::new();
        let err = load_file(&mut env, "/no/such/dir/file.lspy").unwrap_err();
        match err {
            EvalError::LoadFailure { path, .. } => assert_eq!(path, "/no/such/dir/file.lspy"),
            other => panic!("expected LoadFailure, got {:?}", other),
        }
    }
}
