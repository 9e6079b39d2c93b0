//! Role bitmask engine for record-like entity types.
//!
//! Stores a set of named roles per record as a single integer bitmask,
//! and derives query predicates from that bitmask so role scopes
//! translate to efficient integer comparisons in a persistent store.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-roles  ◄── THIS CRATE                          │
//! │    RoleSet        : symbol list ⇄ integer mask codec     │
//! │    MaskStore      : persistence seam (one u64 field)     │
//! │    RoleModel      : per-type declaration + role ops      │
//! │    MaskPredicate  : derived query filters                │
//! └──────────────────────────────────────────────────────────┘
//!                           ↑
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-ability                                        │
//! │    per-role rule definitions → composed policy objects   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Explicit composition** — operations take the entity instance and
//!   the declared [`RoleModel`] as parameters; nothing is injected into
//!   the entity type.
//! - **Strict by name, lenient by mask** — undeclared symbols in
//!   name-based calls are hard errors; unknown bits in stored masks are
//!   silently ignored on read and dropped on write.
//! - **Declaration order is schema** — bit positions follow the
//!   declared list and must stay stable for the lifetime of stored
//!   masks.
//! - **No intrinsic locking** — mask read-modify-write atomicity is the
//!   persistence collaborator's concern.
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
//! model.set_roles(&mut user, ["viewer", "admin"]).unwrap();
//! assert!(model.has_role(&user, "admin").unwrap());
//!
//! // Derived scope: "entities holding admin", as a store-side filter.
//! let admins = model.with_role("admin").unwrap();
//! assert!(admins.matches(user.roles_mask()));
//! assert_eq!(admins.sql_fragment("roles_mask"), "roles_mask & 4 <> 0");
//! ```

mod error;
mod model;
mod role;
mod scope;
mod store;

pub use error::RoleError;
pub use model::RoleModel;
pub use role::{Role, RoleSet, MAX_ROLES};
pub use scope::{MaskOp, MaskPredicate, RoleScope};
pub use store::MaskStore;
