//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::View;

/// Root configuration for the space router.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Deployment base the console is served under.
    pub history: HistoryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// Inspection endpoints.
    pub admin: AdminConfig,

    /// Route table. Replaces the built-in table entirely when given.
    pub routes: Vec<RouteConfig>,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            listener: ListenerConfig::default(),
            history: HistoryConfig::default(),
            timeouts: TimeoutConfig::default(),
            observability: ObservabilityConfig::default(),
            admin: AdminConfig::default(),
            routes: default_routes(),
        }
    }
}

/// The space console's route table.
pub fn default_routes() -> Vec<RouteConfig> {
    vec![
        RouteConfig {
            path: "/space/list".to_string(),
            name: Some("SpaceList".to_string()),
            component: Some(View::SpaceList),
            redirect: None,
        },
        RouteConfig {
            path: "/space/add".to_string(),
            name: Some("SpaceAdd".to_string()),
            component: Some(View::SpaceAdd),
            redirect: None,
        },
        RouteConfig {
            path: "/".to_string(),
            name: None,
            component: None,
            redirect: Some("/space/list".to_string()),
        },
    ]
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// URL prefix, "/" for root.
    pub base: String,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            base: "/".to_string(),
        }
    }
}

/// A single route as written in the config file.
///
/// Exactly one of `component` and `redirect` must be set; this is checked
/// during validation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RouteConfig {
    pub path: String,

    /// Identifier for symbolic navigation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// View to render.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub component: Option<View>,

    /// Path to forward to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub redirect: Option<String>,
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Admin endpoint configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Mount `/_router/*` inspection endpoints.
    pub enabled: bool,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}
