//! Rule-definition keys, callables, and the fetch seam.
//!
//! A rule definition is a stateless callable keyed by role symbol (or
//! the reserved default key). When invoked with a policy builder it
//! registers zero or more permission rules. Definitions are loaded
//! through a [`DefinitionSource`] and, once loaded, are immutable for
//! the process lifetime.

use crate::{LoadError, PolicyBuilder};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A loadable rule-definition callable.
///
/// Shared via `Arc` so the process-wide cache and every resolution can
/// hold the same loaded instance.
pub type RuleDefinition = dyn Fn(&mut dyn PolicyBuilder) + Send + Sync;

/// Identifies a rule-definition source.
///
/// [`Default`](DefinitionKey::Default) is the reserved "all users" key:
/// its definition, when present, applies to every entity before any
/// per-role definition.
///
/// # Example
///
/// ```
/// use rolegate_ability::DefinitionKey;
///
/// assert_eq!(DefinitionKey::Default.to_string(), "default");
/// assert_eq!(DefinitionKey::role("admin").to_string(), "admin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefinitionKey {
    /// The reserved default key, applied to every entity first.
    Default,
    /// A per-role key.
    Role(String),
}

impl DefinitionKey {
    /// Key for one role's definition.
    #[must_use]
    pub fn role(name: impl Into<String>) -> Self {
        Self::Role(name.into())
    }
}

impl std::fmt::Display for DefinitionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Default => write!(f, "default"),
            Self::Role(name) => write!(f, "{name}"),
        }
    }
}

/// Supplier of rule definitions by key.
///
/// The seam between ability resolution and wherever definitions live
/// (a static registry populated at startup, a directory scan, a remote
/// store). Fetching may block on external storage; callers cache
/// results via [`DefinitionCache`](crate::DefinitionCache).
///
/// # Contract
///
/// - An absent source is `Ok(None)` — never an error.
/// - A source that exists but cannot be loaded is `Err(LoadError)`.
/// - Repeated fetches of the same key must produce equivalent content
///   (definitions are immutable once deployed), so concurrent fetches
///   are safe to race.
pub trait DefinitionSource: Send + Sync {
    /// Fetches the definition for `key`, or `None` if no source exists.
    ///
    /// # Errors
    ///
    /// [`LoadError`] if a source exists but fails to load or parse.
    fn fetch(&self, key: &DefinitionKey) -> Result<Option<Arc<RuleDefinition>>, LoadError>;
}
