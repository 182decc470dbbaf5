//! Answer use cases. Same unit-of-work discipline as the question service.

use crate::db::{answers, questions};
use crate::domain::{Answer, NewAnswer};
use crate::error::AppError;
use sqlx::PgPool;

pub async fn create_answer(
    pool: &PgPool,
    question_id: i64,
    new: &NewAnswer,
) -> Result<Answer, AppError> {
    let mut tx = pool.begin().await?;
    let created = answers::create(&mut tx, new, question_id).await?;
    tx.commit().await?;
    tracing::info!(user = %created.user, question_id, "answer recorded");
    Ok(created)
}

pub async fn list_answers(pool: &PgPool) -> Result<Vec<Answer>, AppError> {
    let mut conn = pool.acquire().await?;
    answers::list_all(&mut conn).await
}

/// Answers for one question. The question must exist; an unknown id is a
/// `NotFound`, while a known question with no answers is an empty list.
pub async fn list_answers_by_question(
    pool: &PgPool,
    question_id: i64,
) -> Result<Vec<Answer>, AppError> {
    let mut conn = pool.acquire().await?;
    if questions::get_by_id(&mut conn, question_id).await?.is_none() {
        return Err(AppError::NotFound(format!(
            "question {question_id} does not exist"
        )));
    }
    answers::list_by_question(&mut conn, question_id).await
}

pub async fn list_answers_by_user(pool: &PgPool, user: &str) -> Result<Vec<Answer>, AppError> {
    let mut conn = pool.acquire().await?;
    answers::list_by_user(&mut conn, user).await
}

/// `None` when the pair has no answer; the controller decides the 404.
pub async fn get_answer(
    pool: &PgPool,
    user: &str,
    question_id: i64,
) -> Result<Option<Answer>, AppError> {
    let mut conn = pool.acquire().await?;
    answers::get_one(&mut conn, user, question_id).await
}
