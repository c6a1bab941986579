//! Route entries.

use crate::routing::view::View;

/// What a matched route does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view.
    View(View),
    /// Re-resolve navigation against another path.
    Redirect(String),
}

/// A single binding from a URL path to a view or a redirect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    path: String,
    name: Option<String>,
    target: RouteTarget,
}

impl Route {
    /// A named route rendering `view`.
    pub fn view(path: impl Into<String>, name: impl Into<String>, view: View) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            target: RouteTarget::View(view),
        }
    }

    /// An unnamed route forwarding to `to`.
    pub fn redirect(path: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            target: RouteTarget::Redirect(to.into()),
        }
    }

    pub fn new(path: impl Into<String>, name: Option<String>, target: RouteTarget) -> Self {
        Self {
            path: path.into(),
            name,
            target,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn target(&self) -> &RouteTarget {
        &self.target
    }

    /// The redirect target, if this is a redirect route.
    pub fn redirect_to(&self) -> Option<&str> {
        match &self.target {
            RouteTarget::Redirect(to) => Some(to),
            RouteTarget::View(_) => None,
        }
    }
}
