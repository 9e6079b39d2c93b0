//! Role declaration and lookup errors.
//!
//! All errors here indicate a programming or configuration mistake and
//! are surfaced to the caller immediately — nothing in this crate
//! recovers from them silently.
//!
//! | Variant | Raised when |
//! |---------|-------------|
//! | [`UnknownRole`](RoleError::UnknownRole) | a name-based query or mutation uses an undeclared symbol |
//! | [`DuplicateRole`](RoleError::DuplicateRole) | a role list declares the same symbol twice |
//! | [`TooManyRoles`](RoleError::TooManyRoles) | a role list exceeds the mask width |

use thiserror::Error;

/// Error for role set declaration and by-name role access.
///
/// The "not role-aware" configuration (no mask field, or an empty role
/// list) is deliberately **not** an error — see
/// [`RoleModel::declare_for`](crate::RoleModel::declare_for).
///
/// # Example
///
/// ```
/// use rolegate_roles::{RoleError, RoleSet};
///
/// let set = RoleSet::define(["viewer", "author"]).unwrap();
/// let err = set.bit_for("admin").unwrap_err();
///
/// assert!(matches!(err, RoleError::UnknownRole { .. }));
/// assert!(err.to_string().contains("admin"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// A symbol not present in the declared role set was used in a
    /// strict (name-based) query or mutation.
    #[error("unknown role: '{role}' is not declared for this type")]
    UnknownRole {
        /// The undeclared symbol.
        role: String,
    },

    /// A role list declaration repeats a symbol.
    #[error("duplicate role: '{role}' declared more than once")]
    DuplicateRole {
        /// The repeated symbol.
        role: String,
    },

    /// A role list declaration exceeds the mask capacity.
    #[error("too many roles: {declared} declared, mask holds at most {max}")]
    TooManyRoles {
        /// Number of roles in the declaration.
        declared: usize,
        /// Maximum number of roles a mask can hold.
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_role_display() {
        let err = RoleError::UnknownRole {
            role: "admin".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown role"), "got: {msg}");
        assert!(msg.contains("admin"), "got: {msg}");
    }

    #[test]
    fn duplicate_role_display() {
        let err = RoleError::DuplicateRole {
            role: "viewer".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("duplicate role"), "got: {msg}");
        assert!(msg.contains("viewer"), "got: {msg}");
    }

    #[test]
    fn too_many_roles_display() {
        let err = RoleError::TooManyRoles {
            declared: 70,
            max: 64,
        };
        let msg = err.to_string();
        assert!(msg.contains("70"), "got: {msg}");
        assert!(msg.contains("64"), "got: {msg}");
    }
}
