//! HTTP handling subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → request.rs (assign request ID)
//!     → server.rs (strip base, resolve path)
//!     → response.rs (render view, redirect or 404)
//! ```

pub mod request;
pub mod response;
pub mod server;

pub use response::{JsonRenderer, ViewRenderer};
pub use server::{AppState, HttpServer};
