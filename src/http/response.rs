//! Canned responses.
//!
//! Plain-text bodies use axum's `&str`/`String` responses, which carry
//! `Content-Type: text/plain; charset=utf-8`.

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub const NOT_ALLOWED: &str = "Not allowed!";
pub const GET_ONLY: &str = "GET only!";
pub const NOT_FOUND: &str = "Nope";

/// 403 for callers outside the allow-list.
pub fn not_allowed() -> Response {
    (StatusCode::FORBIDDEN, NOT_ALLOWED).into_response()
}

/// 403 for any method other than GET.
pub fn get_only() -> Response {
    (StatusCode::FORBIDDEN, GET_ONLY).into_response()
}

/// 404 for names outside the catalog.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, NOT_FOUND).into_response()
}

/// 500 carrying the error text.
pub fn internal_error(message: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
}

/// 200 with an HTML document.
pub fn html(document: String) -> Response {
    (StatusCode::OK, Html(document)).into_response()
}
