//! HTTP API module
//!
//! axum server, routes, handlers, and the error-to-status mapping

pub mod error;
pub mod handlers;
pub mod routes;
pub mod server;

pub use error::ErrorResponse;
pub use server::{AppState, start_server};
