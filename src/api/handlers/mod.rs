//! HTTP API handlers
//!
//! One module per resource; request/response payloads local to each module.

pub mod health;
pub mod events;
pub mod locations;
pub mod majors;
pub mod clubs;
pub mod users;
pub mod wallet;
pub mod redemptions;
pub mod penalties;
pub mod feedback;
pub mod chat;
