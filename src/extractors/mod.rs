//! Request extractors and the role-check seam.

pub mod auth;
pub use auth::{AuthContext, Role, RoleCheck, StaticRoleCheck};
