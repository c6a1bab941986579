//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming URL path
//!     → history.rs (strip deployment base)
//!     → router.rs (exact path lookup)
//!     → Return: Render(view), Redirect(path) or NotFound
//!
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → route.rs entries (view XOR redirect)
//!     → check names, paths, redirect chains
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Exact matching only, no patterns or wildcards
//! - Deterministic: same input always matches same route
//! - First declaration wins

pub mod history;
pub mod route;
pub mod router;
pub mod view;

pub use history::WebHistory;
pub use route::{Route, RouteTarget};
pub use router::{Destination, NavigationError, Resolution, RouteTable, RouteTableError};
pub use view::View;
