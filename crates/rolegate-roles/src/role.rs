//! Role bitmask codec.
//!
//! Maps an ordered list of role symbols to bit positions and converts
//! between symbol lists and integer masks.
//!
//! # Bit Assignment
//!
//! Position is assigned by declaration order and is **stable for the
//! lifetime of stored data**: role `i` in the declared list owns bit
//! `1 << i`. Reordering or removing entries from a declared list
//! silently changes the meaning of previously persisted masks — treat
//! the declared order as part of the storage schema.
//!
//! ```text
//! declare(["viewer", "author", "admin"])
//!
//! bit 2    bit 1    bit 0
//! admin    author   viewer
//!   │        │        │
//!   0        1        1     = mask 3  → roles [viewer, author]
//! ```
//!
//! # Strict Writes, Lenient Reads
//!
//! Name-based lookups ([`bit_for`](RoleSet::bit_for),
//! [`mask_for`](RoleSet::mask_for)) reject undeclared symbols so typos
//! fail at the call site. Mask-based reads
//! ([`symbols_for`](RoleSet::symbols_for)) silently ignore bits beyond
//! the declared list, so old code reading a mask produced by a newer
//! schema does not crash.
//!
//! # Example
//!
//! ```
//! use rolegate_roles::RoleSet;
//!
//! let set = RoleSet::define(["viewer", "author", "admin"]).unwrap();
//!
//! assert_eq!(set.bit_for("admin").unwrap(), 2);
//! assert_eq!(set.mask_for(["viewer", "admin"]).unwrap(), 0b101);
//!
//! // Reads come back in declaration order, unknown bits are dropped.
//! assert_eq!(set.symbols_for(0b101 | (1 << 40)), vec!["viewer", "admin"]);
//! ```

use crate::RoleError;
use serde::{Deserialize, Serialize};

/// Maximum number of roles a single mask can hold.
pub const MAX_ROLES: usize = u64::BITS as usize;

/// A declared role: an immutable symbol with its bit position.
///
/// Roles are created only through [`RoleSet::define`]; the bit position
/// is the symbol's index in the declared list. There is deliberately no
/// way to decode a standalone `Role` — a wire-supplied bit could fall
/// outside the mask width or contradict the declared order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Role {
    name: String,
    bit: u8,
}

impl Role {
    /// The role's symbol.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The role's bit position within the mask.
    #[must_use]
    pub fn bit(&self) -> u8 {
        self.bit
    }

    /// The single-bit mask for this role: `1 << bit`.
    #[must_use]
    pub fn mask(&self) -> u64 {
        1 << self.bit
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// An ordered, duplicate-free set of declared roles for one entity type.
///
/// Built once at type-declaration time and shared read-only afterwards;
/// all conversions are pure functions over the declared list.
///
/// An empty set is valid (the degenerate "no roles" configuration —
/// every mask reads as empty).
///
/// # Wire Format
///
/// Serializes as the declared name list; bit positions are implied by
/// order, so deserialization rebuilds them through the same validation
/// as [`define`](Self::define) and rejects duplicates or oversized
/// lists instead of admitting a set no declaration could produce.
///
/// # Example
///
/// ```
/// use rolegate_roles::RoleSet;
///
/// let set = RoleSet::define(["viewer", "author", "admin"]).unwrap();
/// assert_eq!(set.len(), 3);
///
/// let mask = set.mask_for(["author"]).unwrap();
/// assert_eq!(mask, 0b010);
/// assert_eq!(set.symbols_for(mask), vec!["author"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct RoleSet {
    roles: Vec<Role>,
}

impl TryFrom<Vec<String>> for RoleSet {
    type Error = RoleError;

    fn try_from(names: Vec<String>) -> Result<Self, RoleError> {
        Self::define(names)
    }
}

impl From<RoleSet> for Vec<String> {
    fn from(set: RoleSet) -> Self {
        set.roles.into_iter().map(|r| r.name).collect()
    }
}

impl RoleSet {
    /// Declares an ordered role set.
    ///
    /// Accepts an empty list (valid zero-role configuration).
    ///
    /// # Errors
    ///
    /// - [`RoleError::DuplicateRole`] if a symbol repeats.
    /// - [`RoleError::TooManyRoles`] if more than [`MAX_ROLES`] symbols
    ///   are declared.
    pub fn define<I, S>(symbols: I) -> Result<Self, RoleError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = symbols.into_iter().map(Into::into).collect();
        if names.len() > MAX_ROLES {
            return Err(RoleError::TooManyRoles {
                declared: names.len(),
                max: MAX_ROLES,
            });
        }
        let mut roles: Vec<Role> = Vec::with_capacity(names.len());
        for name in names {
            if roles.iter().any(|r| r.name == name) {
                return Err(RoleError::DuplicateRole { role: name });
            }
            let bit = roles.len() as u8;
            roles.push(Role { name, bit });
        }
        Ok(Self { roles })
    }

    /// Number of declared roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// True if no roles are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }

    /// True if `symbol` is declared.
    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.roles.iter().any(|r| r.name == symbol)
    }

    /// Iterates the declared roles in declaration order.
    pub fn roles(&self) -> impl Iterator<Item = &Role> {
        self.roles.iter()
    }

    /// Declared symbols in declaration order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.roles.iter().map(|r| r.name.as_str()).collect()
    }

    /// The bit position for `symbol`.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if the symbol is not declared.
    pub fn bit_for(&self, symbol: &str) -> Result<u8, RoleError> {
        self.role_for(symbol).map(Role::bit)
    }

    /// The declared [`Role`] for `symbol`.
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] if the symbol is not declared.
    pub fn role_for(&self, symbol: &str) -> Result<&Role, RoleError> {
        self.roles
            .iter()
            .find(|r| r.name == symbol)
            .ok_or_else(|| RoleError::UnknownRole {
                role: symbol.to_string(),
            })
    }

    /// Combines the given symbols into a mask.
    ///
    /// Duplicate symbols in the input collapse harmlessly (OR is
    /// idempotent).
    ///
    /// # Errors
    ///
    /// [`RoleError::UnknownRole`] on the first undeclared symbol.
    pub fn mask_for<I, S>(&self, symbols: I) -> Result<u64, RoleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut mask = 0u64;
        for symbol in symbols {
            mask |= self.role_for(symbol.as_ref())?.mask();
        }
        Ok(mask)
    }

    /// The symbols whose bits are set in `mask`, in declaration order.
    ///
    /// Bits beyond the declared list are silently ignored (lenient-read
    /// policy: a mask written by a newer schema must not crash readers).
    #[must_use]
    pub fn symbols_for(&self, mask: u64) -> Vec<&str> {
        self.roles
            .iter()
            .filter(|r| mask & r.mask() != 0)
            .map(|r| r.name.as_str())
            .collect()
    }

    /// The union of every declared role's bit.
    ///
    /// `mask & known_bits()` strips unknown bits from a stored mask.
    #[must_use]
    pub fn known_bits(&self) -> u64 {
        self.roles.iter().fold(0, |acc, r| acc | r.mask())
    }
}
