//! Ability resolution.
//!
//! Composes a policy object for one entity instance: the default rule
//! definition first, then the definition of each role the instance
//! holds, in ascending declared-bit order. With the collaborator's
//! last-rule-wins evaluation, the fixed order makes authorization
//! outcomes deterministic and reproducible for a given role set.
//!
//! # Data Flow
//!
//! ```text
//! entity mask ──RoleModel──► held roles (declaration order)
//!                                 │
//!        DefinitionCache ◄── default key + one key per role
//!                                 │
//!              each loaded definition applies rules
//!                                 ▼
//!                       PolicyBuilder (returned)
//! ```

use crate::{DefinitionCache, DefinitionKey, DefinitionSource, LoadError, PolicyBuilder};
use rolegate_roles::{MaskStore, RoleModel};

/// Per-entity-type ability resolver.
///
/// Owns the type's [`RoleModel`] view and the process-wide definition
/// cache; one resolver per role-aware entity type, shared across
/// checks.
///
/// # Example
///
/// ```
/// use rolegate_ability::{AbilityResolver, DefinitionRegistry, PolicyBuilder};
/// use rolegate_roles::{MaskStore, RoleModel};
///
/// #[derive(Default)]
/// struct User {
///     roles_mask: u64,
/// }
///
/// impl MaskStore for User {
///     fn roles_mask(&self) -> u64 {
///         self.roles_mask
///     }
///     fn set_roles_mask(&mut self, mask: u64) {
///         self.roles_mask = mask;
///     }
/// }
///
/// #[derive(Default)]
/// struct Rules(Vec<(bool, String)>);
///
/// impl PolicyBuilder for Rules {
///     fn allow(&mut self, action: &str, subject: &str) {
///         self.0.push((true, format!("{action} {subject}")));
///     }
///     fn deny(&mut self, action: &str, subject: &str) {
///         self.0.push((false, format!("{action} {subject}")));
///     }
/// }
///
/// let model = RoleModel::declare_for::<User, _, _>(["viewer", "admin"]).unwrap();
/// let registry = DefinitionRegistry::new()
///     .register_default(|policy| policy.allow("read", "Post"))
///     .register("admin", |policy| policy.allow("destroy", "Post"));
/// let resolver = AbilityResolver::new(model.clone(), registry);
///
/// let mut user = User::default();
/// model.add_role(&mut user, "admin").unwrap();
///
/// let policy = resolver.resolve(&user, Rules::default()).unwrap();
/// assert_eq!(policy.0.len(), 2); // default + admin
/// ```
#[derive(Debug)]
pub struct AbilityResolver<S> {
    model: RoleModel,
    definitions: DefinitionCache<S>,
}

impl<S: DefinitionSource> AbilityResolver<S> {
    /// Builds a resolver for one entity type over a definition source.
    #[must_use]
    pub fn new(model: RoleModel, source: S) -> Self {
        Self {
            model,
            definitions: DefinitionCache::new(source),
        }
    }

    /// The role configuration this resolver reads.
    #[must_use]
    pub fn model(&self) -> &RoleModel {
        &self.model
    }

    /// The definition cache this resolver loads through.
    #[must_use]
    pub fn definitions(&self) -> &DefinitionCache<S> {
        &self.definitions
    }

    /// Composes the policy for `entity`.
    ///
    /// Applies the default definition (if one exists), then each held
    /// role's definition in declaration order; absent definitions are
    /// skipped silently. The populated policy is returned by value —
    /// callers create a fresh one per check, bound to the acting
    /// entity.
    ///
    /// # Errors
    ///
    /// [`LoadError`] if any needed definition source exists but fails
    /// to load.
    pub fn resolve<B, St>(&self, entity: &St, mut policy: B) -> Result<B, LoadError>
    where
        B: PolicyBuilder,
        St: MaskStore,
    {
        self.apply(&DefinitionKey::Default, &mut policy)?;
        for role in self.model.roles_of(entity) {
            self.apply(&DefinitionKey::role(role), &mut policy)?;
        }
        Ok(policy)
    }

    fn apply<B: PolicyBuilder>(&self, key: &DefinitionKey, policy: &mut B) -> Result<(), LoadError> {
        if let Some(definition) = self.definitions.load(key)? {
            tracing::trace!(%key, "applying rule definition");
            definition(policy);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::test_support::RecordingAbility;
    use crate::DefinitionRegistry;

    #[derive(Default)]
    struct User {
        roles_mask: u64,
    }

    impl MaskStore for User {
        fn roles_mask(&self) -> u64 {
            self.roles_mask
        }
        fn set_roles_mask(&mut self, mask: u64) {
            self.roles_mask = mask;
        }
    }

    fn model() -> RoleModel {
        RoleModel::declare_for::<User, _, _>(["viewer", "author", "admin"]).expect("declare")
    }

    fn user_with(model: &RoleModel, roles: &[&str]) -> User {
        let mut user = User::default();
        model
            .set_roles(&mut user, roles.iter().copied())
            .expect("roles");
        user
    }

    #[test]
    fn default_definition_applies_to_everyone() {
        let resolver = AbilityResolver::new(
            model(),
            DefinitionRegistry::new().register_default(|policy| policy.allow("read", "Post")),
        );
        let nobody = User::default();

        let policy = resolver
            .resolve(&nobody, RecordingAbility::default())
            .unwrap();
        assert!(policy.can("read", "Post"));
    }

    #[test]
    fn missing_default_definition_is_not_an_error() {
        let resolver = AbilityResolver::new(
            model(),
            DefinitionRegistry::new().register("admin", |policy| policy.allow("destroy", "Post")),
        );
        let model = model();
        let admin = user_with(&model, &["admin"]);

        let policy = resolver.resolve(&admin, RecordingAbility::default()).unwrap();
        assert!(policy.can("destroy", "Post"));
    }

    #[test]
    fn roles_without_definitions_are_skipped_silently() {
        let resolver = AbilityResolver::new(
            model(),
            DefinitionRegistry::new().register_default(|policy| policy.allow("read", "Post")),
        );
        let model = model();
        let user = user_with(&model, &["viewer", "author", "admin"]);

        let policy = resolver.resolve(&user, RecordingAbility::default()).unwrap();
        assert_eq!(policy.rule_count(), 1); // default only
    }

    #[test]
    fn definitions_apply_in_declaration_order() {
        // author (bit 1) grants, admin (bit 2, declared later) revokes:
        // with last-rule-wins evaluation, the revoke must stick no
        // matter the input order of the roles.
        let resolver = AbilityResolver::new(
            model(),
            DefinitionRegistry::new()
                .register("author", |policy| policy.allow("publish", "Post"))
                .register("admin", |policy| policy.deny("publish", "Post")),
        );
        let model = model();
        let user = user_with(&model, &["admin", "author"]);

        let policy = resolver.resolve(&user, RecordingAbility::default()).unwrap();
        assert!(!policy.can("publish", "Post"));
    }

    #[test]
    fn per_role_definitions_apply_after_default() {
        let resolver = AbilityResolver::new(
            model(),
            DefinitionRegistry::new()
                .register_default(|policy| policy.deny("destroy", "Post"))
                .register("admin", |policy| policy.allow("destroy", "Post")),
        );
        let model = model();

        let admin = user_with(&model, &["admin"]);
        let policy = resolver.resolve(&admin, RecordingAbility::default()).unwrap();
        assert!(policy.can("destroy", "Post"));

        let viewer = user_with(&model, &["viewer"]);
        let policy = resolver.resolve(&viewer, RecordingAbility::default()).unwrap();
        assert!(!policy.can("destroy", "Post"));
    }

    #[test]
    fn broken_definition_source_fails_resolution() {
        let resolver = AbilityResolver::new(
            model(),
            DefinitionRegistry::new().register_loader(DefinitionKey::role("admin"), || {
                Err(LoadError::new(DefinitionKey::role("admin"), "parse failure"))
            }),
        );
        let model = model();
        let admin = user_with(&model, &["admin"]);

        let err = resolver
            .resolve(&admin, RecordingAbility::default())
            .unwrap_err();
        assert_eq!(err.key(), &DefinitionKey::role("admin"));
    }

    #[test]
    fn role_unaware_model_applies_only_default() {
        let resolver = AbilityResolver::new(
            RoleModel::role_unaware(),
            DefinitionRegistry::new()
                .register_default(|policy| policy.allow("read", "Post"))
                .register("admin", |policy| policy.allow("destroy", "Post")),
        );
        let user = User { roles_mask: u64::MAX };

        let policy = resolver.resolve(&user, RecordingAbility::default()).unwrap();
        assert!(policy.can("read", "Post"));
        assert!(!policy.can("destroy", "Post"));
    }
}
