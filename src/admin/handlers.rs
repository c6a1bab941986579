use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::http::response::error_response;
use crate::http::server::AppState;
use crate::routing::{NavigationError, RouteTarget, View};

#[derive(Serialize)]
pub struct SystemStatus {
    pub version: &'static str,
    pub base: String,
    pub routes: usize,
}

#[derive(Serialize)]
pub struct RouteSummary {
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub view: Option<View>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub path: Option<String>,
    pub name: Option<String>,
}

pub async fn get_status(State(state): State<AppState>) -> Json<SystemStatus> {
    Json(SystemStatus {
        version: env!("CARGO_PKG_VERSION"),
        base: state.history.base().to_string(),
        routes: state.table.routes().len(),
    })
}

pub async fn get_routes(State(state): State<AppState>) -> Json<Vec<RouteSummary>> {
    let summaries = state
        .table
        .routes()
        .iter()
        .map(|route| {
            let (view, redirect) = match route.target() {
                RouteTarget::View(view) => (Some(*view), None),
                RouteTarget::Redirect(to) => (None, Some(to.clone())),
            };
            RouteSummary {
                path: route.path().to_string(),
                name: route.name().map(str::to_string),
                view,
                redirect,
            }
        })
        .collect();

    Json(summaries)
}

/// Navigate by `path` or `name`, following redirects.
pub async fn get_resolve(
    State(state): State<AppState>,
    Query(query): Query<ResolveQuery>,
) -> Response {
    let result = match (query.path.as_deref(), query.name.as_deref()) {
        (Some(path), None) => state.table.navigate(path),
        (None, Some(name)) => state.table.navigate_named(name),
        _ => {
            return error_response(
                StatusCode::BAD_REQUEST,
                "pass exactly one of `path` or `name`",
            )
        }
    };

    match result {
        Ok(destination) => Json(destination).into_response(),
        Err(e @ (NavigationError::NotFound(_) | NavigationError::UnknownName(_))) => {
            error_response(StatusCode::NOT_FOUND, e.to_string())
        }
        Err(e @ NavigationError::RedirectLoop(_)) => {
            tracing::error!(error = %e, "Redirect loop in route table");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
        }
    }
}
