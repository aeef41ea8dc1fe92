//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, DatabaseConfig, create_pool, create_lazy_pool, run_migrations, health_check};
pub use repositories::{UserRepository, MajorRepository, ClubRepository, LocationRepository, EventRepository, WalletRepository, RedemptionRepository, PenaltyRepository, FeedbackRepository, ChatRepository};
pub use service::DatabaseService;
