//! Ability resolution over role bitmasks.
//!
//! Turns an entity's held roles into one authorization policy object by
//! applying registered per-role rule definitions against a
//! policy-builder supplied by the external permission-evaluation
//! collaborator.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-roles                                          │
//! │    RoleModel / MaskStore : who holds which roles         │
//! └──────────────────────────────────────────────────────────┘
//!                           ↑
//! ┌──────────────────────────────────────────────────────────┐
//! │  rolegate-ability  ◄── THIS CRATE                        │
//! │    PolicyBuilder      : rule-registration seam           │
//! │    DefinitionRegistry : key → loader, set up at startup  │
//! │    DefinitionCache    : lazy, process-lifetime memo      │
//! │    AbilityResolver    : default + per-role composition   │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! # Resolution Order
//!
//! For each check: the default ("all users") definition first, then
//! each held role's definition in declared-bit ascending order. Under
//! the collaborator's last-rule-wins evaluation this makes outcomes
//! deterministic for a given role set — a later-declared role can
//! tighten or widen what an earlier one granted.
//!
//! # Design Principles
//!
//! - **Produce, never evaluate** — this crate registers rules through
//!   [`PolicyBuilder`]; "can perform action?" queries belong to the
//!   collaborator.
//! - **Explicit registry** — definitions are registered by key at
//!   startup, not discovered by naming convention at call time.
//! - **Absence is not failure** — a role without a definition is
//!   skipped; only a source that exists but cannot load is an error.

mod cache;
mod definition;
mod error;
mod policy;
mod registry;
mod resolver;

pub use cache::DefinitionCache;
pub use definition::{DefinitionKey, DefinitionSource, RuleDefinition};
pub use error::LoadError;
pub use policy::PolicyBuilder;
pub use registry::DefinitionRegistry;
pub use resolver::AbilityResolver;
