//! Process-wide lazy cache of loaded rule definitions.
//!
//! The first request for a key fetches from the wrapped
//! [`DefinitionSource`]; both outcomes worth remembering — a loaded
//! definition and a confirmed absence — are cached for the process
//! lifetime. Fetch errors propagate uncached, so the distinction
//! between "no source" and "broken source" stays visible to callers.
//!
//! # Concurrency
//!
//! The cache is shared state. The fetch runs outside the lock, so two
//! threads racing on a cold key may both fetch; the first writer into
//! the cache wins and later racers discard their fetch. Every load of
//! a key produces equivalent content, so the race is harmless.

use crate::{DefinitionKey, DefinitionSource, LoadError, RuleDefinition};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Memoizing wrapper around a [`DefinitionSource`].
///
/// # Example
///
/// ```
/// use rolegate_ability::{DefinitionCache, DefinitionKey, DefinitionRegistry};
///
/// let registry = DefinitionRegistry::new()
///     .register("admin", |policy| policy.allow("destroy", "Post"));
/// let cache = DefinitionCache::new(registry);
///
/// let first = cache.load(&DefinitionKey::role("admin")).unwrap().unwrap();
/// let second = cache.load(&DefinitionKey::role("admin")).unwrap().unwrap();
/// assert!(std::sync::Arc::ptr_eq(&first, &second)); // no duplicate fetch
///
/// // Absence is cached too, and is not an error.
/// assert!(cache.load(&DefinitionKey::role("viewer")).unwrap().is_none());
/// ```
pub struct DefinitionCache<S> {
    source: S,
    loaded: RwLock<HashMap<DefinitionKey, Option<Arc<RuleDefinition>>>>,
}

impl<S> std::fmt::Debug for DefinitionCache<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DefinitionCache")
            .field("cached_keys", &self.loaded.read().keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<S: DefinitionSource> DefinitionCache<S> {
    /// Wraps `source` with an empty cache.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self {
            source,
            loaded: RwLock::new(HashMap::new()),
        }
    }

    /// The definition for `key`, fetched on first request and cached
    /// thereafter. `None` means no source exists for the key (cached
    /// permanently as well — the lookup is not repeated).
    ///
    /// # Errors
    ///
    /// [`LoadError`] from the source; errors are not cached, so the
    /// key stays cold.
    pub fn load(&self, key: &DefinitionKey) -> Result<Option<Arc<RuleDefinition>>, LoadError> {
        if let Some(cached) = self.loaded.read().get(key) {
            return Ok(cached.clone());
        }

        // Fetch outside the lock: concurrent first loads of the same
        // key are idempotent; the first writer into the cache wins and
        // later racers discard their fetch.
        let fetched = self.source.fetch(key)?;
        match &fetched {
            Some(_) => tracing::debug!(%key, "rule definition loaded"),
            None => tracing::debug!(%key, "no rule definition; caching absence"),
        }

        let mut loaded = self.loaded.write();
        let entry = loaded.entry(key.clone()).or_insert(fetched);
        Ok(entry.clone())
    }

    /// Number of cached entries (loaded definitions plus confirmed
    /// absences).
    #[must_use]
    pub fn cached_len(&self) -> usize {
        self.loaded.read().len()
    }
}
