//! Rule-definition loading errors.

use crate::DefinitionKey;
use thiserror::Error;

/// A rule-definition source exists but failed to load.
///
/// Distinct from an absent source, which is reported as `Ok(None)` by
/// [`DefinitionSource::fetch`](crate::DefinitionSource::fetch) and is
/// never an error. The source is assumed static, so the core performs
/// no automatic retry; the failure surfaces at the first resolution
/// attempt that needs the definition.
#[derive(Debug, Error)]
#[error("rule definition for '{key}' failed to load: {reason}")]
pub struct LoadError {
    /// The key whose source failed.
    key: DefinitionKey,
    /// Why loading failed.
    reason: String,
    /// Underlying error from the source, when one exists.
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl LoadError {
    /// A load failure described by a message.
    #[must_use]
    pub fn new(key: DefinitionKey, reason: impl Into<String>) -> Self {
        Self {
            key,
            reason: reason.into(),
            source: None,
        }
    }

    /// A load failure wrapping an underlying source error.
    #[must_use]
    pub fn with_source(
        key: DefinitionKey,
        reason: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            key,
            reason: reason.into(),
            source: Some(Box::new(source)),
        }
    }

    /// The key whose source failed to load.
    #[must_use]
    pub fn key(&self) -> &DefinitionKey {
        &self.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_key_and_reason() {
        let err = LoadError::new(DefinitionKey::role("admin"), "unexpected token");
        let msg = err.to_string();
        assert!(msg.contains("admin"), "got: {msg}");
        assert!(msg.contains("unexpected token"), "got: {msg}");
    }

    #[test]
    fn with_source_preserves_cause() {
        use std::error::Error as _;

        let io = std::io::Error::new(std::io::ErrorKind::InvalidData, "bad byte");
        let err = LoadError::with_source(DefinitionKey::Default, "parse failed", io);

        assert!(err.source().is_some());
        assert_eq!(err.key(), &DefinitionKey::Default);
    }
}
