//! quizd: quiz backend REST service and client library.

pub mod client;
pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use client::{BackendClient, ResponseData};
pub use config::Config;
pub use domain::{Answer, NewAnswer, NewQuestion, Question};
pub use error::{AppError, ConfigError};
pub use extractors::{AuthContext, Role, RoleCheck, StaticRoleCheck};
pub use routes::{common_routes, quiz_routes};
pub use state::AppState;
pub use store::{ensure_database_exists, ensure_tables};
