//! Answer endpoints. Submitting requires the Student role.

use super::{decode_body, parse_id};
use crate::domain::NewAnswer;
use crate::error::AppError;
use crate::extractors::{AuthContext, Role};
use crate::response::{ok_many, ok_one};
use crate::service::answer as service;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::Value;

pub async fn create(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    auth.require(&state, Role::Student).await?;
    let question_id = parse_id(&id_str)?;
    let new: NewAnswer = decode_body(body)?;
    let created = service::create_answer(&state.pool, question_id, &new).await?;
    Ok(ok_one(created))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let answers = service::list_answers(&state.pool).await?;
    Ok(ok_many(answers))
}

pub async fn list_by_question(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let question_id = parse_id(&id_str)?;
    let answers = service::list_answers_by_question(&state.pool, question_id).await?;
    Ok(ok_many(answers))
}

pub async fn list_by_user(
    State(state): State<AppState>,
    Path(user): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let answers = service::list_answers_by_user(&state.pool, &user).await?;
    Ok(ok_many(answers))
}

pub async fn get(
    State(state): State<AppState>,
    Path((user, id_str)): Path<(String, String)>,
) -> Result<impl IntoResponse, AppError> {
    let question_id = parse_id(&id_str)?;
    let answer = service::get_answer(&state.pool, &user, question_id)
        .await?
        .ok_or_else(|| {
            AppError::NotFound(format!("user '{user}' has not answered question {question_id}"))
        })?;
    Ok(ok_one(answer))
}
