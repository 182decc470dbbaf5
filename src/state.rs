//! Shared application state for all routes.

use crate::extractors::RoleCheck;
use sqlx::PgPool;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    /// External collaborator deciding role membership for session tokens.
    pub roles: Arc<dyn RoleCheck>,
    /// Header carrying the shared API key, e.g. `X-ApiKey-Backend`.
    pub apikey_header: String,
    /// Expected API key. `None` disables the check.
    pub apikey_secret: Option<String>,
}

impl AppState {
    pub fn new(pool: PgPool, roles: Arc<dyn RoleCheck>, config: &crate::config::Config) -> Self {
        Self {
            pool,
            roles,
            apikey_header: config.apikey_header.clone(),
            apikey_secret: config.apikey_secret.clone(),
        }
    }
}
