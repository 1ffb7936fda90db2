use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::{ApiError, ApiOk};

pub mod contact;
pub mod health;

pub fn internal_server_error(err: impl Into<anyhow::Error>) -> Response {
    let err = err.into();
    tracing::error!("internal server error: {err:#}");
    error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}

fn error(code: StatusCode, error: impl Into<String>) -> Response {
    let error = ApiError {
        ok: false,
        error: error.into(),
    };
    (code, Json(error)).into_response()
}

fn ok() -> Response {
    Json(ApiOk { ok: true }).into_response()
}
