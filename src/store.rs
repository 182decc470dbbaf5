//! Database bootstrap: create the database if missing and apply the DDL
//! for the two tables. Idempotent; safe to run at every startup.

use crate::error::AppError;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;

/// Ensure the database named in `database_url` exists, creating it via the
/// default `postgres` database if not. Call before opening the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = split_db_name(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {e}")))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let (exists,): (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists {
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
        tracing::info!(database = %db_name, "created database");
    }
    Ok(())
}

/// Create the `questions` and `answers` tables if they do not exist. The
/// unique label, the foreign key, and the composite answer key live here;
/// the accessors translate their violations into domain errors.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS questions (
            question_id BIGSERIAL PRIMARY KEY,
            question TEXT NOT NULL UNIQUE,
            description TEXT,
            option1 TEXT NOT NULL,
            option2 TEXT NOT NULL,
            true_answer TEXT NOT NULL,
            correct_question_percentage DOUBLE PRECISION NOT NULL,
            incorrect_question_percentage DOUBLE PRECISION NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS answers (
            username TEXT NOT NULL,
            question_id BIGINT NOT NULL REFERENCES questions(question_id),
            answer TEXT NOT NULL,
            PRIMARY KEY (username, question_id)
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

fn split_db_name(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    Ok((format!("{base}postgres"), db_name.to_string()))
}

// Embedded double quotes are escaped by doubling per SQL identifier rules.
fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}
