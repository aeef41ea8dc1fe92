//! Data models module
//!
//! This module contains all data structures used throughout the application

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
pub mod pagination;

// Re-export commonly used models
pub use user::{User, CreateUserRequest, UpdateUserRequest, UserRole};
pub use major::{Major, CreateMajorRequest, UpdateMajorRequest};
pub use club::{Club, ClubMember, CreateClubRequest, UpdateClubRequest, AddMemberRequest, ClubRole};
pub use location::{Location, CreateLocationRequest, UpdateLocationRequest};
pub use event::{Event, EventDay, EventDetail, EventDayInput, CreateEventRequest, UpdateEventRequest, EventSummary, EventStatus};
pub use wallet::{Wallet, PointTransaction, TransactionKind};
pub use redemption::{RedemptionOrder, PlaceOrderRequest, OrderStatus};
pub use penalty::{PenaltyRule, PenaltyRecord, CreatePenaltyRuleRequest, UpdatePenaltyRuleRequest, IssuePenaltyRequest};
pub use feedback::{Feedback, CreateFeedbackRequest};
pub use chat::{ChatMessage, ChatReaction, ChatPin, SendMessageRequest, ReactRequest, ChatWindow};
pub use pagination::{Page, PageParams};
