//! Per-entity-type role configuration and role state operations.
//!
//! [`RoleModel`] is the declaration surface: built once when an entity
//! type declares its roles, then shared read-only by every instance,
//! scope lookup, and ability resolution for that type.
//!
//! # Architecture
//!
//! ```text
//! RoleModel (one per entity type, process lifetime)
//!     │  owns RoleSet + generated RoleScopes
//!     │
//!     ├── roles_of / set_roles / has_role / add_role / remove_role
//!     │        └── operate on any MaskStore instance explicitly
//!     │
//!     └── scopes / with_any_role / with_all_roles
//!              └── produce MaskPredicate filters for the store layer
//! ```
//!
//! Behavior is attached by explicit composition: operations take the
//! entity instance as a parameter instead of injecting methods into the
//! entity type.
//!
//! # Role-Unaware Types
//!
//! Declaring roles for a type without a mask field, or declaring an
//! empty role list, silently yields a role-unaware model: empty
//! [`valid_roles`](RoleModel::valid_roles), no scopes, no error. This
//! is a legitimate configuration, distinct from the hard errors raised
//! for undeclared or duplicated symbols.
//!
//! # Example
//!
//! ```
//! use rolegate_roles::{MaskStore, RoleModel};
//!
//! #[derive(Default)]
//! struct User {
//!     roles_mask: u64,
//! }
//!
//! impl MaskStore for User {
//!     fn roles_mask(&self) -> u64 {
//!         self.roles_mask
//!     }
//!     fn set_roles_mask(&mut self, mask: u64) {
//!         self.roles_mask = mask;
//!     }
//! }
//!
//! let model = RoleModel::declare_for::<User, _, _>(["viewer", "author", "admin"]).unwrap();
//!
//! let mut user = User::default();
//! model.add_role(&mut user, "author").unwrap();
//!
//! assert!(model.has_role(&user, "author").unwrap());
//! assert_eq!(model.roles_of(&user), vec!["author"]);
//! ```

use crate::{MaskPredicate, MaskStore, RoleError, RoleScope, RoleSet};

/// Role configuration for one entity type.
///
/// Constructed once at type-declaration time via
/// [`declare_for`](Self::declare_for) and never mutated afterwards.
/// All instance operations take the [`MaskStore`] explicitly.
#[derive(Debug, Clone, Default)]
pub struct RoleModel {
    set: RoleSet,
    scopes: Vec<RoleScope>,
}

impl RoleModel {
    /// Declares the valid roles for entity type `St`.
    ///
    /// If `St` has no usable mask field
    /// ([`HAS_MASK_FIELD`](MaskStore::HAS_MASK_FIELD) is `false`) or
    /// the symbol list is empty, the returned model is role-unaware:
    /// no scopes, empty valid-role list, **no error** — this mirrors
    /// declaring against a type that simply is not role-aware.
    ///
    /// # Errors
    ///
    /// For a role-aware declaration,
    /// [`RoleError::DuplicateRole`] / [`RoleError::TooManyRoles`] as
    /// per [`RoleSet::define`].
    pub fn declare_for<St, I, S>(symbols: I) -> Result<Self, RoleError>
    where
        St: MaskStore,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        if !St::HAS_MASK_FIELD {
            // Silent skip: declaring roles for a type with no storage
            // is the documented "not role-aware" configuration.
            return Ok(Self::role_unaware());
        }
        let set = RoleSet::define(symbols)?;
        Ok(Self::from_set(set))
    }

    /// A model for a type that is not role-aware.
    ///
    /// Equivalent to declaring an empty role list.
    #[must_use]
    pub fn role_unaware() -> Self {
        Self::default()
    }

    fn from_set(set: RoleSet) -> Self {
        let mut scopes = Vec::with_capacity(set.len() * 2);
        for role in set.roles() {
            scopes.push(RoleScope::new(
                format!("{}s", role.name()),
                MaskPredicate::any(role.mask()),
            ));
            scopes.push(RoleScope::new(
                format!("non_{}s", role.name()),
                MaskPredicate::none(role.mask()),
            ));
        }
        Self { set, scopes }
    }

    /// The declared role set.
    #[must_use]
    pub fn role_set(&self) -> &RoleSet {
        &self.set
    }

    /// Declared role symbols in declaration order; empty for
    /// role-unaware models.
    #[must_use]
    pub fn valid_roles(&self) -> Vec<&str> {
        self.set.names()
    }

    /// True if this type declared at least one role.
    #[must_use]
    pub fn is_role_aware(&self) -> bool {
        !self.set.is_empty()
    }

    // ---- instance role state ------------------------------------------

    /// The roles currently held by `store`, in declaration order.
    ///
    /// Lenient read: mask bits beyond the declared list are ignored.
    #[must_use]
    pub fn roles_of<St: MaskStore>(&self, store: &St) -> Vec<&str> {
        self.set.symbols_for(store.roles_mask())
    }

    /// Replaces the instance's roles with `symbols`.
    ///
    /// Every symbol is validated before the mask is recomputed and
    /// written in a single field write, so no partial state is ever
    /// observable. Unknown bits present in the old mask are dropped
    /// (writes normalize to declared bits).
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] on any undeclared symbol; the store
    /// is left untouched.
    pub fn set_roles<St, I, S>(&self, store: &mut St, symbols: I) -> Result<(), RoleError>
    where
        St: MaskStore,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mask = self.set.mask_for(symbols)?;
        store.set_roles_mask(mask);
        Ok(())
    }

    /// Whether the instance holds `symbol`.
    ///
    /// Strict by name: an undeclared symbol is an error rather than
    /// `false`, so typos surface at the call site. This holds even for
    /// role-unaware models, where every symbol is undeclared.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if `symbol` is not declared.
    pub fn has_role<St: MaskStore>(&self, store: &St, symbol: &str) -> Result<bool, RoleError> {
        let role = self.set.role_for(symbol)?;
        Ok(store.roles_mask() & role.mask() != 0)
    }

    /// Adds `symbol` to the instance's roles.
    ///
    /// Idempotent: adding an already-held role is a no-op. The write
    /// normalizes the mask to declared bits.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if `symbol` is not declared.
    pub fn add_role<St: MaskStore>(&self, store: &mut St, symbol: &str) -> Result<(), RoleError> {
        let role = self.set.role_for(symbol)?;
        let current = store.roles_mask() & self.set.known_bits();
        store.set_roles_mask(current | role.mask());
        Ok(())
    }

    /// Removes `symbol` from the instance's roles.
    ///
    /// Idempotent: removing an absent role is a no-op. The write
    /// normalizes the mask to declared bits.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if `symbol` is not declared.
    pub fn remove_role<St: MaskStore>(
        &self,
        store: &mut St,
        symbol: &str,
    ) -> Result<(), RoleError> {
        let role = self.set.role_for(symbol)?;
        let current = store.roles_mask() & self.set.known_bits();
        store.set_roles_mask(current & !role.mask());
        Ok(())
    }

    // ---- derived scopes ------------------------------------------------

    /// The generated scopes, two per declared role (`{role}s` and
    /// `non_{role}s`); empty for role-unaware models.
    #[must_use]
    pub fn scopes(&self) -> &[RoleScope] {
        &self.scopes
    }

    /// Looks up a generated scope by name.
    #[must_use]
    pub fn scope(&self, name: &str) -> Option<&RoleScope> {
        self.scopes.iter().find(|s| s.name() == name)
    }

    /// Predicate matching instances holding `symbol`.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if `symbol` is not declared.
    pub fn with_role(&self, symbol: &str) -> Result<MaskPredicate, RoleError> {
        Ok(MaskPredicate::any(self.set.role_for(symbol)?.mask()))
    }

    /// Predicate matching instances not holding `symbol`.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if `symbol` is not declared.
    pub fn without_role(&self, symbol: &str) -> Result<MaskPredicate, RoleError> {
        Ok(MaskPredicate::none(self.set.role_for(symbol)?.mask()))
    }

    /// Predicate matching instances holding at least one of `symbols`.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] on any undeclared symbol.
    pub fn with_any_role<I, S>(&self, symbols: I) -> Result<MaskPredicate, RoleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(MaskPredicate::any(self.set.mask_for(symbols)?))
    }

    /// Predicate matching instances holding every one of `symbols`.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] on any undeclared symbol.
    pub fn with_all_roles<I, S>(&self, symbols: I) -> Result<MaskPredicate, RoleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Ok(MaskPredicate::all(self.set.mask_for(symbols)?))
    }
}
