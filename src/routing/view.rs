//! View identifiers.
//!
//! A view is an opaque tag. Turning it into something renderable is the job
//! of a [`ViewRenderer`](crate::http::response::ViewRenderer).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The closed set of views the console can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum View {
    /// List of spaces.
    SpaceList,
    /// Form for adding a space.
    SpaceAdd,
}

impl View {
    pub const ALL: [View; 2] = [View::SpaceList, View::SpaceAdd];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::SpaceList => "SpaceList",
            View::SpaceAdd => "SpaceAdd",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown view `{0}`")]
pub struct UnknownView(pub String);

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownView(s.to_string()))
    }
}
