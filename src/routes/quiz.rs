//! Quiz REST surface.

use crate::handlers::{answer, question};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn quiz_routes(state: AppState) -> Router {
    Router::new()
        .route("/questions", get(question::list).post(question::create))
        .route("/questions/:id", get(question::get).put(question::edit))
        .route(
            "/questions/:id/answers",
            get(answer::list_by_question).post(answer::create),
        )
        .route("/answers", get(answer::list))
        .route("/users/:user/answers", get(answer::list_by_user))
        .route("/users/:user/answers/:id", get(answer::get))
        .with_state(state)
}
