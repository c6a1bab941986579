//! Startup orchestration.
//!
//! # Responsibilities
//! - Load configuration
//! - Compile the route table once logging is up
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Loading and compiling are separate so table warnings reach the subscriber
//! - No config file means the built-in space console routes

use std::path::Path;

use crate::config::loader::read_config;
use crate::config::{validate_config, ConfigError, RouterConfig};
use crate::routing::RouteTable;

/// Read the config file, or fall back to defaults. No semantic checks.
pub fn load(config_path: Option<&Path>) -> Result<RouterConfig, ConfigError> {
    match config_path {
        Some(path) => read_config(path),
        None => Ok(RouterConfig::default()),
    }
}

/// Validate `config` and compile its route table.
pub fn compile(config: &RouterConfig) -> Result<RouteTable, ConfigError> {
    validate_config(config).map_err(ConfigError::Validation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::{Resolution, View};

    #[test]
    fn test_defaults_without_file() {
        let config = load(None).unwrap();
        assert!(config.admin.enabled);
        let table = compile(&config).unwrap();
        assert_eq!(
            table.resolve("/space/list"),
            Resolution::Render { name: Some("SpaceList"), view: View::SpaceList }
        );
    }

    #[test]
    fn test_load_defers_route_checks() {
        let path = std::env::temp_dir().join("space_router_startup_cycle.toml");
        std::fs::write(
            &path,
            "[observability]\nlog_level = \"debug\"\n\n[[routes]]\npath = \"/a\"\nredirect = \"/a\"\n",
        )
        .unwrap();

        // The log level must be readable before the table is compiled.
        let config = load(Some(&path)).unwrap();
        assert_eq!(config.observability.log_level, "debug");
        assert!(matches!(compile(&config), Err(ConfigError::Validation(_))));

        std::fs::remove_file(&path).unwrap_or_default();
    }
}
