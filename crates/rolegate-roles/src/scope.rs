//! Derived query predicates over stored role masks.
//!
//! A [`MaskPredicate`] is a pure bitmask-to-filter description: it
//! names the comparison a persistent store should run, using only
//! integer bit operations, so role scopes translate to efficient
//! equality/inequality conditions instead of in-memory scans.
//!
//! | Predicate | Matches when |
//! |-----------|--------------|
//! | [`any`](MaskPredicate::any) | `stored & mask != 0` |
//! | [`none`](MaskPredicate::none) | `stored & mask == 0` |
//! | [`all`](MaskPredicate::all) | `stored & mask == mask` |
//!
//! How a predicate composes with the store's filter mechanism is the
//! integration's concern; this module only supplies
//! [`matches`](MaskPredicate::matches) for in-memory evaluation and
//! [`sql_fragment`](MaskPredicate::sql_fragment) as a reference
//! translation.

use serde::{Deserialize, Serialize};

/// The comparison a [`MaskPredicate`] performs against a stored mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaskOp {
    /// At least one of the predicate's bits is set.
    Any,
    /// Every one of the predicate's bits is set.
    All,
    /// None of the predicate's bits is set.
    None,
}

/// A bitmask comparison against an entity's stored role mask.
///
/// # Example
///
/// ```
/// use rolegate_roles::MaskPredicate;
///
/// let admins = MaskPredicate::any(0b100);
/// assert!(admins.matches(0b101));
/// assert!(!admins.matches(0b011));
///
/// assert_eq!(admins.sql_fragment("roles_mask"), "roles_mask & 4 <> 0");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaskPredicate {
    op: MaskOp,
    mask: u64,
}

impl MaskPredicate {
    /// Matches masks with at least one of `mask`'s bits set.
    #[must_use]
    pub fn any(mask: u64) -> Self {
        Self {
            op: MaskOp::Any,
            mask,
        }
    }

    /// Matches masks with all of `mask`'s bits set.
    #[must_use]
    pub fn all(mask: u64) -> Self {
        Self {
            op: MaskOp::All,
            mask,
        }
    }

    /// Matches masks with none of `mask`'s bits set.
    #[must_use]
    pub fn none(mask: u64) -> Self {
        Self {
            op: MaskOp::None,
            mask,
        }
    }

    /// The comparison operation.
    #[must_use]
    pub fn op(&self) -> MaskOp {
        self.op
    }

    /// The bits this predicate tests.
    #[must_use]
    pub fn mask(&self) -> u64 {
        self.mask
    }

    /// Evaluates the predicate against a stored mask.
    ///
    /// Equivalent to the comparison a store would run; useful for
    /// in-memory collections and tests.
    #[must_use]
    pub fn matches(&self, stored: u64) -> bool {
        match self.op {
            MaskOp::Any => stored & self.mask != 0,
            MaskOp::All => stored & self.mask == self.mask,
            MaskOp::None => stored & self.mask == 0,
        }
    }

    /// Renders the predicate as a SQL condition on `column`.
    ///
    /// A reference translation for stores with SQL-like filter
    /// languages; integrations with richer query builders should map
    /// [`op`](Self::op) and [`mask`](Self::mask) directly instead.
    #[must_use]
    pub fn sql_fragment(&self, column: &str) -> String {
        match self.op {
            MaskOp::Any => format!("{column} & {} <> 0", self.mask),
            MaskOp::All => format!("{column} & {m} = {m}", m = self.mask),
            MaskOp::None => format!("{column} & {} = 0", self.mask),
        }
    }
}

/// A named scope generated for one declared role.
///
/// For a role `admin` the model generates `admins`
/// ([`MaskPredicate::any`] on the role's bit) and `non_admins`
/// ([`MaskPredicate::none`] on the same bit).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleScope {
    name: String,
    predicate: MaskPredicate,
}

impl RoleScope {
    pub(crate) fn new(name: String, predicate: MaskPredicate) -> Self {
        Self { name, predicate }
    }

    /// The generated scope name, e.g. `admins` or `non_admins`.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The predicate the scope applies.
    #[must_use]
    pub fn predicate(&self) -> MaskPredicate {
        self.predicate
    }
}
