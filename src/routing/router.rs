//! Route lookup and navigation.
//!
//! # Responsibilities
//! - Validate and compile the declared routes
//! - Look up the route matching a path
//! - Follow redirects to a final view
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact path lookup via HashMap, first declaration wins
//! - Redirect cycles rejected up front, navigation still fails closed
//! - Explicit NotFound rather than silent default

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

use crate::routing::route::{Route, RouteTarget};
use crate::routing::view::View;

/// Errors raised while compiling a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    #[error("route path `{0}` must start with `/`")]
    InvalidPath(String),

    #[error("route `{path}` redirects to `{target}`, which does not start with `/`")]
    InvalidRedirect { path: String, target: String },

    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("redirect cycle: {}", .0.join(" -> "))]
    RedirectCycle(Vec<String>),
}

/// Errors raised while navigating.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NavigationError {
    #[error("no route matches `{0}`")]
    NotFound(String),

    #[error("no route named `{0}`")]
    UnknownName(String),

    #[error("redirect loop: {}", .0.join(" -> "))]
    RedirectLoop(Vec<String>),
}

/// Result of a single lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    /// The path is bound to a view.
    Render { name: Option<&'a str>, view: View },
    /// The path forwards to another path, which the caller resolves next.
    Redirect(&'a str),
    NotFound,
}

impl Resolution<'_> {
    /// Short label for logs and metrics.
    pub fn outcome(&self) -> &'static str {
        match self {
            Resolution::Render { .. } => "render",
            Resolution::Redirect(_) => "redirect",
            Resolution::NotFound => "not_found",
        }
    }
}

/// Where a navigation ends up after all redirects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub path: String,
    pub name: Option<String>,
    pub view: View,
    /// Paths that redirected here, in the order they were visited.
    pub redirected_from: Vec<String>,
}

/// Immutable, validated route table.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Compile `routes`, checking paths, name uniqueness and redirect cycles.
    pub fn new(routes: Vec<Route>) -> Result<Self, RouteTableError> {
        let mut by_path = HashMap::with_capacity(routes.len());
        let mut by_name = HashMap::new();

        for (idx, route) in routes.iter().enumerate() {
            if !route.path().starts_with('/') {
                return Err(RouteTableError::InvalidPath(route.path().to_string()));
            }
            if let Some(target) = route.redirect_to() {
                if !target.starts_with('/') {
                    return Err(RouteTableError::InvalidRedirect {
                        path: route.path().to_string(),
                        target: target.to_string(),
                    });
                }
            }
            if let Some(name) = route.name() {
                if by_name.insert(name.to_string(), idx).is_some() {
                    return Err(RouteTableError::DuplicateName(name.to_string()));
                }
            }
            if by_path.contains_key(route.path()) {
                tracing::warn!(path = route.path(), "Route is shadowed by an earlier declaration");
            } else {
                by_path.insert(route.path().to_string(), idx);
            }
        }

        let table = Self {
            routes,
            by_path,
            by_name,
        };
        table.check_redirects()?;

        tracing::debug!(routes = table.routes.len(), "Route table compiled");
        Ok(table)
    }

    /// Walk every reachable redirect chain once.
    fn check_redirects(&self) -> Result<(), RouteTableError> {
        for route in self.reachable() {
            let Some(first) = route.redirect_to() else {
                continue;
            };

            let mut chain = vec![route.path().to_string()];
            let mut current = first;
            loop {
                if chain.iter().any(|p| p == current) {
                    chain.push(current.to_string());
                    return Err(RouteTableError::RedirectCycle(chain));
                }
                match self.lookup(current).map(Route::target) {
                    Some(RouteTarget::Redirect(next)) => {
                        chain.push(current.to_string());
                        current = next.as_str();
                    }
                    Some(RouteTarget::View(_)) => break,
                    None => {
                        tracing::warn!(
                            path = route.path(),
                            target = current,
                            "Redirect target matches no route"
                        );
                        break;
                    }
                }
            }
        }
        Ok(())
    }

    /// Routes that win the lookup for their path.
    fn reachable(&self) -> impl Iterator<Item = &Route> {
        self.routes
            .iter()
            .enumerate()
            .filter(|(idx, route)| self.by_path.get(route.path()) == Some(idx))
            .map(|(_, route)| route)
    }

    fn lookup(&self, path: &str) -> Option<&Route> {
        self.by_path.get(path).map(|&idx| &self.routes[idx])
    }

    /// Declared routes, in declaration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    /// Resolve a single navigation step. Matching is exact and case-sensitive.
    pub fn resolve(&self, path: &str) -> Resolution<'_> {
        match self.lookup(path) {
            Some(route) => match route.target() {
                RouteTarget::View(view) => Resolution::Render {
                    name: route.name(),
                    view: *view,
                },
                RouteTarget::Redirect(to) => Resolution::Redirect(to),
            },
            None => Resolution::NotFound,
        }
    }

    /// Resolve `path`, following redirects until a view is reached.
    pub fn navigate(&self, path: &str) -> Result<Destination, NavigationError> {
        let mut redirected_from: Vec<String> = Vec::new();
        let mut current = path;

        loop {
            match self.resolve(current) {
                Resolution::Render { name, view } => {
                    return Ok(Destination {
                        path: current.to_string(),
                        name: name.map(str::to_string),
                        view,
                        redirected_from,
                    });
                }
                Resolution::Redirect(to) => {
                    redirected_from.push(current.to_string());
                    if redirected_from.iter().any(|p| p == to) {
                        redirected_from.push(to.to_string());
                        return Err(NavigationError::RedirectLoop(redirected_from));
                    }
                    current = to;
                }
                Resolution::NotFound => {
                    return Err(NavigationError::NotFound(current.to_string()));
                }
            }
        }
    }

    /// Path of the route called `name`.
    pub fn path_for(&self, name: &str) -> Option<&str> {
        self.by_name.get(name).map(|&idx| self.routes[idx].path())
    }

    /// Navigate symbolically by route name.
    ///
    /// Starts from the named route itself, even when an earlier declaration
    /// shadows its path.
    pub fn navigate_named(&self, name: &str) -> Result<Destination, NavigationError> {
        let route = self
            .by_name
            .get(name)
            .map(|&idx| &self.routes[idx])
            .ok_or_else(|| NavigationError::UnknownName(name.to_string()))?;

        match route.target() {
            RouteTarget::View(view) => Ok(Destination {
                path: route.path().to_string(),
                name: route.name().map(str::to_string),
                view: *view,
                redirected_from: Vec::new(),
            }),
            RouteTarget::Redirect(to) => {
                let mut destination = self.navigate(to)?;
                destination.redirected_from.insert(0, route.path().to_string());
                Ok(destination)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space_table() -> RouteTable {
        RouteTable::new(vec![
            Route::view("/space/list", "SpaceList", View::SpaceList),
            Route::view("/space/add", "SpaceAdd", View::SpaceAdd),
            Route::redirect("/", "/space/list"),
        ])
        .unwrap()
    }

    #[test]
    fn test_declared_routes_resolve() {
        let table = space_table();
        assert_eq!(
            table.resolve("/space/list"),
            Resolution::Render { name: Some("SpaceList"), view: View::SpaceList }
        );
        assert_eq!(
            table.resolve("/space/add"),
            Resolution::Render { name: Some("SpaceAdd"), view: View::SpaceAdd }
        );
        assert_eq!(table.resolve("/"), Resolution::Redirect("/space/list"));
    }

    #[test]
    fn test_redirect_then_render() {
        let table = space_table();
        let Resolution::Redirect(next) = table.resolve("/") else {
            panic!("root should redirect");
        };
        // Following the redirect once must land on a view, not another redirect.
        assert_eq!(
            table.resolve(next),
            Resolution::Render { name: Some("SpaceList"), view: View::SpaceList }
        );
    }

    #[test]
    fn test_unknown_paths_not_found() {
        let table = space_table();
        for path in ["/unknown", "/space", "/space/list/", "/SPACE/LIST", "", "space/add"] {
            assert_eq!(table.resolve(path), Resolution::NotFound, "path {path:?}");
        }
    }

    #[test]
    fn test_navigate_follows_redirect() {
        let table = space_table();
        let dest = table.navigate("/").unwrap();
        assert_eq!(dest.path, "/space/list");
        assert_eq!(dest.view, View::SpaceList);
        assert_eq!(dest.name.as_deref(), Some("SpaceList"));
        assert_eq!(dest.redirected_from, vec!["/".to_string()]);

        let dest = table.navigate("/space/add").unwrap();
        assert_eq!(dest.view, View::SpaceAdd);
        assert!(dest.redirected_from.is_empty());

        assert_eq!(
            table.navigate("/unknown"),
            Err(NavigationError::NotFound("/unknown".into()))
        );
    }

    #[test]
    fn test_duplicate_name_rejected() {
        let err = RouteTable::new(vec![
            Route::view("/space/list", "SpaceList", View::SpaceList),
            Route::view("/space/other", "SpaceList", View::SpaceAdd),
        ])
        .unwrap_err();
        assert_eq!(err, RouteTableError::DuplicateName("SpaceList".into()));
    }

    #[test]
    fn test_redirect_cycles_rejected() {
        let err = RouteTable::new(vec![Route::redirect("/a", "/a")]).unwrap_err();
        assert_eq!(err, RouteTableError::RedirectCycle(vec!["/a".into(), "/a".into()]));

        let err = RouteTable::new(vec![
            Route::redirect("/a", "/b"),
            Route::redirect("/b", "/a"),
        ])
        .unwrap_err();
        assert!(matches!(err, RouteTableError::RedirectCycle(chain) if chain.len() == 3));
    }

    #[test]
    fn test_invalid_paths_rejected() {
        assert_eq!(
            RouteTable::new(vec![Route::view("space", "S", View::SpaceList)]).unwrap_err(),
            RouteTableError::InvalidPath("space".into())
        );
        assert!(matches!(
            RouteTable::new(vec![Route::redirect("/", "space/list")]).unwrap_err(),
            RouteTableError::InvalidRedirect { .. }
        ));
    }

    #[test]
    fn test_first_match_wins() {
        let table = RouteTable::new(vec![
            Route::view("/space/list", "First", View::SpaceList),
            Route::view("/space/list", "Second", View::SpaceAdd),
        ])
        .unwrap();
        assert_eq!(
            table.resolve("/space/list"),
            Resolution::Render { name: Some("First"), view: View::SpaceList }
        );
        assert_eq!(table.routes().len(), 2);
    }

    #[test]
    fn test_shadowed_redirect_is_not_checked() {
        // The second `/` never matches, so its cycle is unreachable.
        let table = RouteTable::new(vec![
            Route::view("/", "Home", View::SpaceList),
            Route::redirect("/", "/"),
        ]);
        assert!(table.is_ok());
    }

    #[test]
    fn test_dangling_redirect_fails_closed() {
        let table = RouteTable::new(vec![Route::redirect("/", "/missing")]).unwrap();
        assert_eq!(table.resolve("/"), Resolution::Redirect("/missing"));
        assert_eq!(
            table.navigate("/"),
            Err(NavigationError::NotFound("/missing".into()))
        );
    }

    #[test]
    fn test_named_navigation_reaches_shadowed_route() {
        let table = RouteTable::new(vec![
            Route::view("/space/list", "First", View::SpaceList),
            Route::view("/space/list", "Second", View::SpaceAdd),
            Route::new("/", Some("Root".into()), RouteTarget::Redirect("/space/list".into())),
        ])
        .unwrap();

        let dest = table.navigate_named("Second").unwrap();
        assert_eq!(dest.name.as_deref(), Some("Second"));
        assert_eq!(dest.view, View::SpaceAdd);
        assert_eq!(dest.path, "/space/list");

        let dest = table.navigate_named("Root").unwrap();
        assert_eq!(dest.name.as_deref(), Some("First"));
        assert_eq!(dest.redirected_from, vec!["/".to_string()]);
    }

    #[test]
    fn test_named_navigation() {
        let table = space_table();
        assert_eq!(table.path_for("SpaceAdd"), Some("/space/add"));
        assert_eq!(table.path_for("Missing"), None);
        assert_eq!(table.navigate_named("SpaceList").unwrap().path, "/space/list");
        assert_eq!(
            table.navigate_named("Missing"),
            Err(NavigationError::UnknownName("Missing".into()))
        );
    }
}
