//! Explicit rule-definition registry.
//!
//! Discovery by naming convention is replaced with an explicit mapping
//! from key to loader function, populated once at startup — either by
//! static registration or by a single scan the host performs over its
//! own definition location.
//!
//! # Architecture
//!
//! ```text
//! DefinitionSource trait (definition.rs)   ← abstract fetch seam
//!          │
//!          └── DefinitionRegistry (THIS MODULE)   ← startup-populated map
//! ```
//!
//! # Example
//!
//! ```
//! use rolegate_ability::{DefinitionKey, DefinitionRegistry, DefinitionSource};
//!
//! let registry = DefinitionRegistry::new()
//!     .register_default(|policy| policy.allow("read", "Post"))
//!     .register("admin", |policy| policy.allow("destroy", "Post"));
//!
//! assert!(registry.fetch(&DefinitionKey::Default).unwrap().is_some());
//! assert!(registry.fetch(&DefinitionKey::role("admin")).unwrap().is_some());
//! assert!(registry.fetch(&DefinitionKey::role("viewer")).unwrap().is_none());
//! ```

use crate::{DefinitionKey, DefinitionSource, LoadError, PolicyBuilder, RuleDefinition};
use std::collections::HashMap;
use std::sync::Arc;

type Loader = Box<dyn Fn() -> Result<Arc<RuleDefinition>, LoadError> + Send + Sync>;

/// Startup-populated mapping from definition key to loader function.
///
/// Ready definitions are registered with [`register`](Self::register) /
/// [`register_default`](Self::register_default); sources that must
/// parse external content at load time use
/// [`register_loader`](Self::register_loader), whose failures surface
/// as [`LoadError`] on fetch. Keys with no registration fetch as
/// `None` (absent, not an error).
#[derive(Default)]
pub struct DefinitionRegistry {
    loaders: HashMap<DefinitionKey, Loader>,
}

impl DefinitionRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a ready definition for one role.
    #[must_use]
    pub fn register<F>(self, role: impl Into<String>, definition: F) -> Self
    where
        F: Fn(&mut dyn PolicyBuilder) + Send + Sync + 'static,
    {
        self.register_ready(DefinitionKey::role(role), definition)
    }

    /// Registers the default ("all users") definition.
    #[must_use]
    pub fn register_default<F>(self, definition: F) -> Self
    where
        F: Fn(&mut dyn PolicyBuilder) + Send + Sync + 'static,
    {
        self.register_ready(DefinitionKey::Default, definition)
    }

    fn register_ready<F>(mut self, key: DefinitionKey, definition: F) -> Self
    where
        F: Fn(&mut dyn PolicyBuilder) + Send + Sync + 'static,
    {
        let definition: Arc<RuleDefinition> = Arc::new(definition);
        self.loaders
            .insert(key, Box::new(move || Ok(Arc::clone(&definition))));
        self
    }

    /// Registers a fallible loader for `key`.
    ///
    /// The loader runs on every fetch; memoization is
    /// [`DefinitionCache`](crate::DefinitionCache)'s job. A loader that
    /// fails models a source that exists but cannot be parsed.
    #[must_use]
    pub fn register_loader<F>(mut self, key: DefinitionKey, loader: F) -> Self
    where
        F: Fn() -> Result<Arc<RuleDefinition>, LoadError> + Send + Sync + 'static,
    {
        self.loaders.insert(key, Box::new(loader));
        self
    }

    /// Number of registered keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.loaders.len()
    }

    /// True if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.loaders.is_empty()
    }
}

impl std::fmt::Debug for DefinitionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionRegistry")
            .field("keys", &self.loaders.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl DefinitionSource for DefinitionRegistry {
    fn fetch(&self, key: &DefinitionKey) -> Result<Option<Arc<RuleDefinition>>, LoadError> {
        match self.loaders.get(key) {
            Some(loader) => loader().map(Some),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::RecordingAbility;

    #[test]
    fn empty_registry_fetches_absent() {
        let registry = DefinitionRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.fetch(&DefinitionKey::Default).unwrap().is_none());
        assert!(registry
            .fetch(&DefinitionKey::role("admin"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn registered_definition_is_fetched_and_applies_rules() {
        let registry = DefinitionRegistry::new().register("admin", |policy| {
            policy.allow("destroy", "Post");
        });

        let definition = registry
            .fetch(&DefinitionKey::role("admin"))
            .unwrap()
            .expect("registered");

        let mut ability = RecordingAbility::default();
        definition(&mut ability);
        assert!(ability.can("destroy", "Post"));
    }

    #[test]
    fn default_key_is_separate_from_roles() {
        let registry = DefinitionRegistry::new().register_default(|policy| {
            policy.allow("read", "Post");
        });

        assert!(registry.fetch(&DefinitionKey::Default).unwrap().is_some());
        assert!(registry
            .fetch(&DefinitionKey::role("default"))
            .unwrap()
            .is_none());
    }

    #[test]
    fn failing_loader_surfaces_load_error() {
        let registry = DefinitionRegistry::new().register_loader(DefinitionKey::role("admin"), || {
            Err(LoadError::new(
                DefinitionKey::role("admin"),
                "syntax error in source",
            ))
        });

        let err = registry
            .fetch(&DefinitionKey::role("admin"))
            .err()
            .unwrap();
        assert_eq!(err.key(), &DefinitionKey::role("admin"));
        assert!(err.to_string().contains("syntax error"), "got: {err}");
    }

    #[test]
    fn later_registration_replaces_earlier() {
        let registry = DefinitionRegistry::new()
            .register("admin", |policy| policy.allow("read", "Post"))
            .register("admin", |policy| policy.deny("read", "Post"));

        assert_eq!(registry.len(), 1);

        let definition = registry
            .fetch(&DefinitionKey::role("admin"))
            .unwrap()
            .expect("registered");
        let mut ability = RecordingAbility::default();
        definition(&mut ability);
        assert!(!ability.can("read", "Post"));
    }
}
