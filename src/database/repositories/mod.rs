//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod major;
pub mod club;
pub mod location;
pub mod event;
pub mod wallet;
pub mod redemption;
pub mod penalty;
pub mod feedback;
pub mod chat;

// Re-export repositories
pub use user::UserRepository;
pub use major::MajorRepository;
pub use club::ClubRepository;
pub use location::LocationRepository;
pub use event::EventRepository;
pub use wallet::WalletRepository;
pub use redemption::RedemptionRepository;
pub use penalty::PenaltyRepository;
pub use feedback::FeedbackRepository;
pub use chat::ChatRepository;
