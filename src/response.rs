//! Response helpers. Success bodies are the plain transport records (a
//! single object or a JSON array), matching what the frontend client
//! parses directly as content.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub fn ok_one<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn ok_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}
