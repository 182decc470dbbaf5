//! Server entrypoint: config from env, database bootstrap, router mount.
//!
//! Role grants come from `QUIZD_TEACHER_TOKENS` / `QUIZD_STUDENT_TOKENS`
//! (comma-separated session tokens) so the server runs without a real
//! auth service; swap in another `RoleCheck` to delegate for real.

use axum::Router;
use quizd::{
    common_routes, ensure_database_exists, ensure_tables, quiz_routes, AppState, Config, Role,
    StaticRoleCheck,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("quizd=info".parse()?))
        .init();

    let config = Config::from_env()?;
    ensure_database_exists(&config.database_url).await?;
    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database_url)
        .await?;
    ensure_tables(&pool).await?;

    let state = AppState::new(pool, Arc::new(role_check_from_env()), &config);

    let app = Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", quiz_routes(state))
        .layer(TraceLayer::new_for_http());

    let listener = TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn role_check_from_env() -> StaticRoleCheck {
    let mut check = StaticRoleCheck::new();
    for (var, role) in [
        ("QUIZD_TEACHER_TOKENS", Role::Teacher),
        ("QUIZD_STUDENT_TOKENS", Role::Student),
    ] {
        if let Ok(tokens) = std::env::var(var) {
            for token in tokens.split(',').map(str::trim).filter(|t| !t.is_empty()) {
                check = check.grant(token, role);
            }
        }
    }
    check
}
