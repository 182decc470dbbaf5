//! Question use cases. Writes run in a transaction committed on success;
//! on any error path the transaction guard is dropped, which rolls back
//! and returns the connection to the pool. Reads borrow a pooled
//! connection for the duration of the call only.

use crate::db::questions;
use crate::domain::{NewQuestion, Question};
use crate::error::AppError;
use sqlx::PgPool;

pub async fn create_question(pool: &PgPool, new: &NewQuestion) -> Result<Question, AppError> {
    let mut tx = pool.begin().await?;
    let created = questions::create(&mut tx, new).await?;
    tx.commit().await?;
    tracing::info!(question_id = created.question_id, "question created");
    Ok(created)
}

pub async fn list_questions(pool: &PgPool) -> Result<Vec<Question>, AppError> {
    let mut conn = pool.acquire().await?;
    questions::list_all(&mut conn).await
}

/// `None` when the id does not resolve; the controller decides the 404.
pub async fn get_question(pool: &PgPool, question_id: i64) -> Result<Option<Question>, AppError> {
    let mut conn = pool.acquire().await?;
    questions::get_by_id(&mut conn, question_id).await
}

pub async fn edit_question(
    pool: &PgPool,
    question_id: i64,
    new: &NewQuestion,
) -> Result<Question, AppError> {
    let mut tx = pool.begin().await?;
    let edited = questions::edit(&mut tx, question_id, new).await?;
    tx.commit().await?;
    tracing::info!(question_id, "question edited");
    Ok(edited)
}
