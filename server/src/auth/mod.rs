//! Authentication and authorization
//!
//! Token issuance and validation live in an external identity collaborator.
//! This module consumes only the role-check contract: a [`RoleProvider`]
//! resolves a bearer token into a [`Principal`] carrying role tokens, and
//! middleware gates routes on those roles.

pub mod middleware;
pub mod principal;
pub mod provider;

pub use middleware::{require_any_role, require_auth};
pub use principal::{Principal, Role};
pub use provider::{HttpRoleProvider, RoleProvider, StaticRoleProvider};
