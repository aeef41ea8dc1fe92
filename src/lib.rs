//! ClubHub platform service
//!
//! A university club management platform: event requests with location
//! booking and slot availability, point wallets and redemption orders,
//! penalty rules, activity scoring, majors, rosters, and club chat.

#![allow(non_snake_case)]

pub mod config;
pub mod api;
pub mod services;
pub mod models;
pub mod database;
pub mod middleware;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{ClubHubError, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use services::ServiceFactory;
pub use api::start_server;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
