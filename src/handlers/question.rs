//! Question endpoints. Creating and editing require the Teacher role;
//! listing and fetching are open reads.

use super::{decode_body, parse_id};
use crate::domain::NewQuestion;
use crate::error::AppError;
use crate::extractors::{AuthContext, Role};
use crate::response::{ok_many, ok_one};
use crate::service::question as service;
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
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    auth.require(&state, Role::Teacher).await?;
    let new: NewQuestion = decode_body(body)?;
    let created = service::create_question(&state.pool, &new).await?;
    Ok(ok_one(created))
}

pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let questions = service::list_questions(&state.pool).await?;
    Ok(ok_many(questions))
}

pub async fn get(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let question_id = parse_id(&id_str)?;
    let question = service::get_question(&state.pool, question_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("question {question_id} does not exist")))?;
    Ok(ok_one(question))
}

pub async fn edit(
    State(state): State<AppState>,
    auth: AuthContext,
    Path(id_str): Path<String>,
    Json(body): Json<Value>,
) -> Result<impl IntoResponse, AppError> {
    auth.require(&state, Role::Teacher).await?;
    let question_id = parse_id(&id_str)?;
    let new: NewQuestion = decode_body(body)?;
    let edited = service::edit_question(&state.pool, question_id, &new).await?;
    Ok(ok_one(edited))
}
