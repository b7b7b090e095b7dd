//! Standard prelude: installs the builtin registry into the global scope

use super::Environment;
use crate::builtins::Registry;

impl Environment {
    /// Create an environment with the standard builtins installed.
    pub fn with_prelude() -> Self {
        Self::with_registry(&Registry::standard())
    }

    /// Create an environment with the builtins from `registry` installed.
    pub fn with_registry(registry: &Registry) -> Self {
        let mut env = Self::new();
        env.load_registry(registry);
        env
    }

    /// Install every entry of `registry` as a global binding.
    pub fn load_registry(&mut self, registry: &Registry) {
        for builtin in registry.iter() {
            self.define_builtin(builtin.clone());
        }
        tracing::debug!(count = registry.len(), "builtins installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Value;

    #[test]
    fn test_prelude_binds_every_entry() {
        let registry = Registry::standard();
        let env = Environment::with_prelude();
        for builtin in registry.iter() {
            assert!(
                matches!(env.get(&builtin.name), Some(Value::Builtin(_))),
                "missing builtin {}",
                builtin.name
            );
        }
        assert_eq!(env.global().len(), registry.len());
    }

    #[test]
    fn test_empty_registry_leaves_environment_empty() {
        let env = Environment::with_registry(&Registry::new());
        assert!(env.global().is_empty());
    }
}
