use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::contact::ApiContactResponse;

pub mod contact;

pub const INVALID_INPUT: &str = "Invalid input";
pub const UNEXPECTED_ERROR: &str = "Unexpected error";

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, UNEXPECTED_ERROR)
}

fn invalid_input() -> Response {
    error(StatusCode::BAD_REQUEST, INVALID_INPUT)
}

fn error(code: StatusCode, detail: &'static str) -> Response {
    (code, Json(ApiContactResponse::rejected(detail))).into_response()
}
