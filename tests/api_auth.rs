//! Router-level tests for the paths that must resolve before any database
//! work: role enforcement, API-key checks, id parsing, and body decoding.
//! The pool is lazy and never connected, so reaching the store would fail
//! loudly; every assertion here proves the request was settled first.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use quizd::{common_routes, quiz_routes, AppState, Role, StaticRoleCheck};
use std::sync::Arc;
use tower::ServiceExt;

const APIKEY_HEADER: &str = "X-ApiKey-Backend";
const APIKEY: &str = "shared-secret";

fn test_app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://nobody@localhost:1/unreachable")
        .expect("lazy pool");
    let roles = StaticRoleCheck::new()
        .grant("teacher-token", Role::Teacher)
        .grant("student-token", Role::Student);
    let state = AppState {
        pool,
        roles: Arc::new(roles),
        apikey_header: APIKEY_HEADER.into(),
        apikey_secret: Some(APIKEY.into()),
    };
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api/v1", quiz_routes(state))
}

fn post_question(token: Option<&str>, api_key: Option<&str>, body: &str) -> Request<Body> {
    let mut builder = Request::builder()
        .method("POST")
        .uri("/api/v1/questions")
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(t) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {t}"));
    }
    if let Some(k) = api_key {
        builder = builder.header(APIKEY_HEADER, k);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

const VALID_QUESTION: &str = r#"{
    "question": "q1",
    "description": "d",
    "option1": "A",
    "option2": "B",
    "true_answer": "A",
    "correct_question_percentage": 10.0,
    "incorrect_question_percentage": 5.0
}"#;

#[tokio::test]
async fn health_and_version_respond() {
    let app = test_app();
    let resp = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .oneshot(Request::get("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_question_without_token_is_forbidden() {
    let resp = test_app()
        .oneshot(post_question(None, Some(APIKEY), VALID_QUESTION))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_question_with_student_role_is_forbidden() {
    let resp = test_app()
        .oneshot(post_question(Some("student-token"), Some(APIKEY), VALID_QUESTION))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_question_with_wrong_api_key_is_forbidden() {
    let resp = test_app()
        .oneshot(post_question(Some("teacher-token"), Some("not-it"), VALID_QUESTION))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = test_app()
        .oneshot(post_question(Some("teacher-token"), None, VALID_QUESTION))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn create_question_with_missing_field_is_bad_request() {
    let resp = test_app()
        .oneshot(post_question(
            Some("teacher-token"),
            Some(APIKEY),
            r#"{"question": "q1"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_question_id_is_bad_request() {
    let resp = test_app()
        .oneshot(
            Request::get("/api/v1/questions/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn answer_submission_requires_student_role() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/questions/1/answers")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, "Bearer teacher-token")
        .header(APIKEY_HEADER, APIKEY)
        .body(Body::from(r#"{"user": "alice", "answer": "A"}"#))
        .unwrap();
    let resp = test_app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let resp = test_app()
        .oneshot(Request::get("/api/v1/nothing-here").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
