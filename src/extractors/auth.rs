//! Bearer-token and API-key extraction, plus the pluggable role check.
//!
//! Role resolution belongs to an external collaborator; this module only
//! defines the seam (`RoleCheck`) and a static table implementation used
//! by the demo server and the tests. Extraction never fails by itself —
//! enforcement happens in `AuthContext::require`, which must run before
//! any service call so an unauthorized request never touches the store.

use crate::error::AppError;
use crate::state::AppState;
use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use std::collections::HashMap;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Teacher,
    Student,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Teacher => write!(f, "Teacher"),
            Role::Student => write!(f, "Student"),
        }
    }
}

/// External role-check collaborator: resolves whether the bearer of a
/// session token holds a role.
#[async_trait]
pub trait RoleCheck: Send + Sync {
    async fn has_role(&self, token: &str, role: Role) -> Result<bool, AppError>;
}

/// Token-to-roles table. Stands in for the auth service in the demo
/// server and in tests.
#[derive(Clone, Debug, Default)]
pub struct StaticRoleCheck {
    grants: HashMap<String, Vec<Role>>,
}

impl StaticRoleCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grant(mut self, token: impl Into<String>, role: Role) -> Self {
        self.grants.entry(token.into()).or_default().push(role);
        self
    }
}

#[async_trait]
impl RoleCheck for StaticRoleCheck {
    async fn has_role(&self, token: &str, role: Role) -> Result<bool, AppError> {
        Ok(self
            .grants
            .get(token)
            .map(|roles| roles.contains(&role))
            .unwrap_or(false))
    }
}

/// Bearer token and API key pulled from the request headers.
#[derive(Clone, Debug)]
pub struct AuthContext {
    pub token: Option<String>,
    pub api_key: Option<String>,
}

#[async_trait]
impl FromRequestParts<AppState> for AuthContext {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.strip_prefix("Bearer "))
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        let api_key = parts
            .headers
            .get(state.apikey_header.as_str())
            .and_then(|v| v.to_str().ok())
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Ok(AuthContext { token, api_key })
    }
}

impl AuthContext {
    /// 403 unless the shared API key matches and the token holds `role`.
    pub async fn require(&self, state: &AppState, role: Role) -> Result<(), AppError> {
        if let Some(secret) = &state.apikey_secret {
            if self.api_key.as_deref() != Some(secret.as_str()) {
                return Err(AppError::Forbidden("missing or invalid API key".into()));
            }
        }
        let token = self
            .token
            .as_deref()
            .ok_or_else(|| AppError::Forbidden("missing bearer token".into()))?;
        if !state.roles.has_role(token, role).await? {
            return Err(AppError::Forbidden(format!(
                "current user does not have the {role} role"
            )));
        }
        Ok(())
    }
}
