//! Response construction.
//!
//! # Responsibilities
//! - Hand resolved views to the rendering collaborator
//! - Build redirect and error responses
//!
//! # Design Decisions
//! - Rendering sits behind a trait so the resolver never knows about markup
//! - Errors are JSON bodies of the form `{"error": "..."}`

use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::routing::View;

/// Turns a resolved view into an HTTP response.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, path: &str, name: Option<&str>, view: View) -> Response;
}

/// Default renderer: describes the view as JSON and leaves drawing to the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

#[derive(Serialize)]
struct RenderedView<'a> {
    path: &'a str,
    name: Option<&'a str>,
    view: View,
}

impl ViewRenderer for JsonRenderer {
    fn render(&self, path: &str, name: Option<&str>, view: View) -> Response {
        Json(RenderedView { path, name, view }).into_response()
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(serde_json::json!({ "error": message.into() }))).into_response()
}

/// `302 Found` pointing at `location`.
pub fn redirect(location: &str) -> Response {
    match HeaderValue::from_str(location) {
        Ok(value) => (StatusCode::FOUND, [(header::LOCATION, value)]).into_response(),
        Err(_) => {
            tracing::error!(location, "Redirect target is not a valid header value");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "invalid redirect target")
        }
    }
}
