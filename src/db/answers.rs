//! Table-level answer operations.
//!
//! Composite identity `(username, question_id)` is the storage-level
//! guard against double answers; re-answering is rejected with
//! `Duplicate` rather than updated in place.

use crate::domain::{Answer, NewAnswer};
use crate::error::AppError;
use sqlx::PgConnection;

const ANSWER_COLUMNS: &str = "username, question_id, answer";

/// Maps the SQLSTATE of a failed answer insert: a foreign-key violation
/// means the question is missing, a unique violation means the pair
/// already answered; anything else passes through as a storage error.
fn translate_insert_err(
    code: Option<&str>,
    err: sqlx::Error,
    user: &str,
    question_id: i64,
) -> AppError {
    match code {
        Some(super::FOREIGN_KEY_VIOLATION) => {
            AppError::NotFound(format!("question {question_id} does not exist"))
        }
        Some(super::UNIQUE_VIOLATION) => AppError::Duplicate(format!(
            "user '{user}' already answered question {question_id}"
        )),
        _ => err.into(),
    }
}

/// Records one user's answer to a question. A missing question surfaces as
/// `NotFound` (foreign key), a repeated `(user, question)` pair as
/// `Duplicate` (composite primary key).
pub async fn create(
    conn: &mut PgConnection,
    new: &NewAnswer,
    question_id: i64,
) -> Result<Answer, AppError> {
    new.validate()?;
    if question_id <= 0 {
        return Err(AppError::Validation("a valid questionId is required".into()));
    }
    let sql = format!(
        "INSERT INTO answers (username, question_id, answer) \
         VALUES ($1, $2, $3) RETURNING {ANSWER_COLUMNS}"
    );
    tracing::debug!(user = %new.user, question_id, "insert answer");
    sqlx::query_as::<_, Answer>(&sql)
        .bind(&new.user)
        .bind(question_id)
        .bind(&new.answer)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            let code = super::constraint_code(&e);
            translate_insert_err(code.as_deref(), e, &new.user, question_id)
        })
}

/// Every recorded answer.
pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Answer>, AppError> {
    let sql = format!("SELECT {ANSWER_COLUMNS} FROM answers ORDER BY question_id, username");
    Ok(sqlx::query_as::<_, Answer>(&sql)
        .fetch_all(&mut *conn)
        .await?)
}

/// Answers submitted for one question. No match is an empty vec.
pub async fn list_by_question(
    conn: &mut PgConnection,
    question_id: i64,
) -> Result<Vec<Answer>, AppError> {
    if question_id <= 0 {
        return Err(AppError::Validation("a valid questionId is required".into()));
    }
    let sql = format!("SELECT {ANSWER_COLUMNS} FROM answers WHERE question_id = $1 ORDER BY username");
    Ok(sqlx::query_as::<_, Answer>(&sql)
        .bind(question_id)
        .fetch_all(&mut *conn)
        .await?)
}

/// Answers submitted by one user. No match is an empty vec.
pub async fn list_by_user(conn: &mut PgConnection, user: &str) -> Result<Vec<Answer>, AppError> {
    if user.trim().is_empty() {
        return Err(AppError::Validation("user is required".into()));
    }
    let sql = format!("SELECT {ANSWER_COLUMNS} FROM answers WHERE username = $1 ORDER BY question_id");
    Ok(sqlx::query_as::<_, Answer>(&sql)
        .bind(user)
        .fetch_all(&mut *conn)
        .await?)
}

/// The single answer for one `(user, question)` pair, if any.
pub async fn get_one(
    conn: &mut PgConnection,
    user: &str,
    question_id: i64,
) -> Result<Option<Answer>, AppError> {
    if user.trim().is_empty() {
        return Err(AppError::Validation("user is required".into()));
    }
    if question_id <= 0 {
        return Err(AppError::Validation("a valid questionId is required".into()));
    }
    let sql = format!(
        "SELECT {ANSWER_COLUMNS} FROM answers WHERE username = $1 AND question_id = $2"
    );
    Ok(sqlx::query_as::<_, Answer>(&sql)
        .bind(user)
        .bind(question_id)
        .fetch_optional(&mut *conn)
        .await?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn foreign_key_violation_becomes_not_found() {
        let err = translate_insert_err(Some("23503"), sqlx::Error::PoolClosed, "alice", 7);
        assert!(matches!(err, AppError::NotFound(_)));
        assert!(err.to_string().contains("question 7"));
    }

    #[test]
    fn repeated_pair_becomes_duplicate() {
        let err = translate_insert_err(Some("23505"), sqlx::Error::PoolClosed, "alice", 7);
        assert!(matches!(err, AppError::Duplicate(_)));
        assert!(err.to_string().contains("'alice' already answered question 7"));
    }

    #[test]
    fn other_codes_pass_through_as_storage_errors() {
        let err = translate_insert_err(None, sqlx::Error::PoolClosed, "alice", 7);
        assert!(matches!(err, AppError::Db(_)));
        let err = translate_insert_err(Some("40001"), sqlx::Error::PoolClosed, "alice", 7);
        assert!(matches!(err, AppError::Db(_)));
    }
}
