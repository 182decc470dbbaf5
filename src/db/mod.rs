//! Table-level accessors. Every operation takes an explicit connection so
//! the caller owns the unit-of-work boundary.

pub mod answers;
pub mod questions;

/// PostgreSQL `unique_violation`.
pub(crate) const UNIQUE_VIOLATION: &str = "23505";
/// PostgreSQL `foreign_key_violation`.
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// SQLSTATE code of a database-level error, if any.
pub(crate) fn constraint_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db) => db.code().map(|c| c.into_owned()),
        _ => None,
    }
}
