//! Persistence seam for the role mask.
//!
//! [`MaskStore`] is the only contact point between this crate and the
//! host's persistence layer: one integer field per entity instance.
//! The trait lives here, implementations live in the integrating
//! application (an ORM-backed record, a plain struct in tests).
//!
//! # Concurrency
//!
//! Mask mutations are read-modify-write through this seam and are
//! **not** internally atomic across concurrent mutators of the same
//! instance. Two concurrent `add_role` calls on one instance may lose
//! an update under naive last-write-wins persistence; optimistic or
//! pessimistic locking, where needed, belongs to the persistence
//! collaborator.

/// Access to an entity instance's stored role mask.
///
/// # Role-Unaware Types
///
/// A type with no usable backing field sets
/// [`HAS_MASK_FIELD`](Self::HAS_MASK_FIELD) to `false` and stubs the
/// accessors; declaring roles for such a type silently yields a
/// role-unaware [`RoleModel`](crate::RoleModel) (no error — legitimate
/// absence of role-awareness, not a misuse).
///
/// # Example
///
/// ```
/// use rolegate_roles::MaskStore;
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
///
///     fn set_roles_mask(&mut self, mask: u64) {
///         self.roles_mask = mask;
///     }
/// }
/// ```
pub trait MaskStore {
    /// Whether the type has a usable backing field for the mask.
    ///
    /// Defaults to `true`. Types without storage override this to
    /// `false` and are treated as role-unaware at declaration time.
    const HAS_MASK_FIELD: bool = true;

    /// The stored mask. A never-written instance reads as 0 (no roles).
    fn roles_mask(&self) -> u64;

    /// Replaces the stored mask in a single field write.
    fn set_roles_mask(&mut self, mask: u64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Plain {
        mask: u64,
    }

    impl MaskStore for Plain {
        fn roles_mask(&self) -> u64 {
            self.mask
        }
        fn set_roles_mask(&mut self, mask: u64) {
            self.mask = mask;
        }
    }

    struct Fieldless;

    impl MaskStore for Fieldless {
        const HAS_MASK_FIELD: bool = false;
        fn roles_mask(&self) -> u64 {
            0
        }
        fn set_roles_mask(&mut self, _mask: u64) {}
    }

    #[test]
    fn default_instance_has_empty_mask() {
        let user = Plain::default();
        assert_eq!(user.roles_mask(), 0);
    }

    #[test]
    fn set_replaces_whole_mask() {
        let mut user = Plain::default();
        user.set_roles_mask(0b101);
        assert_eq!(user.roles_mask(), 0b101);
        user.set_roles_mask(0b010);
        assert_eq!(user.roles_mask(), 0b010);
    }

    #[test]
    fn has_mask_field_defaults_true() {
        assert!(Plain::HAS_MASK_FIELD);
        assert!(!Fieldless::HAS_MASK_FIELD);
    }
}
