//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each route sets a view or a redirect, never both
//! - Validate addresses, timeouts and the log filter
//! - Compile the route table (names, paths, redirect cycles)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - A valid config always yields its compiled RouteTable
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::admin::ADMIN_PREFIX;
use crate::config::schema::{RouteConfig, RouterConfig};
use crate::routing::{Route, RouteTable, RouteTableError, RouteTarget, WebHistory};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid listener bind address `{0}`")]
    BindAddress(String),

    #[error("invalid metrics address `{0}`")]
    MetricsAddress(String),

    #[error("invalid log level `{0}`")]
    LogLevel(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("route `{0}` must set exactly one of `component` or `redirect`")]
    RouteTarget(String),

    #[error("route `{0}` collides with the admin endpoints under `{prefix}`", prefix = ADMIN_PREFIX)]
    ReservedPath(String),

    #[error(transparent)]
    RouteTable(#[from] RouteTableError),
}

/// Convert a configured route, enforcing the view XOR redirect rule.
pub fn to_route(config: &RouteConfig) -> Result<Route, ValidationError> {
    let target = match (&config.component, &config.redirect) {
        (Some(view), None) => RouteTarget::View(*view),
        (None, Some(to)) => RouteTarget::Redirect(to.clone()),
        _ => return Err(ValidationError::RouteTarget(config.path.clone())),
    };
    Ok(Route::new(config.path.clone(), config.name.clone(), target))
}

/// Build the route table, collecting every per-route error before giving up.
pub fn build_route_table(routes: &[RouteConfig]) -> Result<RouteTable, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut compiled = Vec::with_capacity(routes.len());

    for route in routes {
        match to_route(route) {
            Ok(r) => compiled.push(r),
            Err(e) => errors.push(e),
        }
    }
    if !errors.is_empty() {
        return Err(errors);
    }

    RouteTable::new(compiled).map_err(|e| vec![e.into()])
}

fn is_reserved(path: &str) -> bool {
    path == ADMIN_PREFIX
        || path
            .strip_prefix(ADMIN_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Validate `config` and return its compiled route table.
pub fn validate_config(config: &RouterConfig) -> Result<RouteTable, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(config.listener.bind_address.clone()));
    }
    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::MetricsAddress(
            config.observability.metrics_address.clone(),
        ));
    }
    if EnvFilter::try_new(&config.observability.log_level).is_err() {
        errors.push(ValidationError::LogLevel(config.observability.log_level.clone()));
    }
    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }
    // Admin endpoints sit at the server root, so they only share a namespace
    // with routes served from the root base.
    if config.admin.enabled && WebHistory::new(&config.history.base).base() == "/" {
        errors.extend(
            config
                .routes
                .iter()
                .filter(|r| is_reserved(&r.path))
                .map(|r| ValidationError::ReservedPath(r.path.clone())),
        );
    }

    match build_route_table(&config.routes) {
        Ok(table) if errors.is_empty() => Ok(table),
        Ok(_) => Err(errors),
        Err(route_errors) => {
            errors.extend(route_errors);
            Err(errors)
        }
    }
}
