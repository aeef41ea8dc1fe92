//! Middleware module
//!
//! axum middleware applied around the API router

pub mod logging;
pub mod rate_limit;

pub use logging::log_requests;
pub use rate_limit::{RateLimiter, RateLimitConfig, rate_limit};
