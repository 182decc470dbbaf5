//! Table-level question operations.

use crate::domain::{NewQuestion, Question};
use crate::error::AppError;
use sqlx::PgConnection;

const QUESTION_COLUMNS: &str = "question_id, question, description, option1, option2, \
     true_answer, correct_question_percentage, incorrect_question_percentage";

/// Maps the SQLSTATE of a failed question write: a unique violation means
/// the label is taken; anything else passes through as a storage error.
fn translate_write_err(code: Option<&str>, err: sqlx::Error, question: &str) -> AppError {
    match code {
        Some(super::UNIQUE_VIOLATION) => {
            AppError::Duplicate(format!("the question '{question}' already exists"))
        }
        _ => err.into(),
    }
}

/// Inserts a new question and returns it with its generated id. The unique
/// constraint on the label is translated into `Duplicate`.
pub async fn create(conn: &mut PgConnection, new: &NewQuestion) -> Result<Question, AppError> {
    new.validate()?;
    let sql = format!(
        "INSERT INTO questions (question, description, option1, option2, true_answer, \
         correct_question_percentage, incorrect_question_percentage) \
         VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING {QUESTION_COLUMNS}"
    );
    tracing::debug!(question = %new.question, "insert question");
    sqlx::query_as::<_, Question>(&sql)
        .bind(&new.question)
        .bind(&new.description)
        .bind(&new.option1)
        .bind(&new.option2)
        .bind(&new.true_answer)
        .bind(new.correct_question_percentage)
        .bind(new.incorrect_question_percentage)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            let code = super::constraint_code(&e);
            translate_write_err(code.as_deref(), e, &new.question)
        })
}

/// All questions in insertion order.
pub async fn list_all(conn: &mut PgConnection) -> Result<Vec<Question>, AppError> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions ORDER BY question_id");
    Ok(sqlx::query_as::<_, Question>(&sql)
        .fetch_all(&mut *conn)
        .await?)
}

/// Fetch by id. Absence is a `None`, not an error.
pub async fn get_by_id(
    conn: &mut PgConnection,
    question_id: i64,
) -> Result<Option<Question>, AppError> {
    let sql = format!("SELECT {QUESTION_COLUMNS} FROM questions WHERE question_id = $1");
    Ok(sqlx::query_as::<_, Question>(&sql)
        .bind(question_id)
        .fetch_optional(&mut *conn)
        .await?)
}

/// Full replacement of every mutable field. `NotFound` when the id does not
/// resolve; renaming onto an existing label is a `Duplicate`.
pub async fn edit(
    conn: &mut PgConnection,
    question_id: i64,
    new: &NewQuestion,
) -> Result<Question, AppError> {
    new.validate()?;
    let sql = format!(
        "UPDATE questions SET question = $1, description = $2, option1 = $3, option2 = $4, \
         true_answer = $5, correct_question_percentage = $6, incorrect_question_percentage = $7 \
         WHERE question_id = $8 RETURNING {QUESTION_COLUMNS}"
    );
    tracing::debug!(question_id, "update question");
    let row = sqlx::query_as::<_, Question>(&sql)
        .bind(&new.question)
        .bind(&new.description)
        .bind(&new.option1)
        .bind(&new.option2)
        .bind(&new.true_answer)
        .bind(new.correct_question_percentage)
        .bind(new.incorrect_question_percentage)
        .bind(question_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            let code = super::constraint_code(&e);
            translate_write_err(code.as_deref(), e, &new.question)
        })?;
    row.ok_or_else(|| AppError::NotFound(format!("question {question_id} does not exist")))
}
