//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, UserRepository, MajorRepository, ClubRepository, LocationRepository, EventRepository, WalletRepository, RedemptionRepository, PenaltyRepository, FeedbackRepository, ChatRepository};
use crate::models::*;
use crate::utils::errors::ClubHubError;
use crate::utils::helpers;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub majors: MajorRepository,
    pub clubs: ClubRepository,
    pub locations: LocationRepository,
    pub events: EventRepository,
    pub wallets: WalletRepository,
    pub redemptions: RedemptionRepository,
    pub penalties: PenaltyRepository,
    pub feedback: FeedbackRepository,
    pub chat: ChatRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            majors: MajorRepository::new(pool.clone()),
            clubs: ClubRepository::new(pool.clone()),
            locations: LocationRepository::new(pool.clone()),
            events: EventRepository::new(pool.clone()),
            wallets: WalletRepository::new(pool.clone()),
            redemptions: RedemptionRepository::new(pool.clone()),
            penalties: PenaltyRepository::new(pool.clone()),
            feedback: FeedbackRepository::new(pool.clone()),
            chat: ChatRepository::new(pool),
        }
    }

    /// Register a new member after input validation
    pub async fn register_member(&self, request: CreateUserRequest) -> Result<User, ClubHubError> {
        if !helpers::is_valid_student_no(&request.student_no) {
            return Err(ClubHubError::InvalidInput(
                format!("Invalid student number: {}", request.student_no)
            ));
        }

        if let Some(ref email) = request.email {
            if !helpers::is_valid_email(email) {
                return Err(ClubHubError::InvalidInput(format!("Invalid email: {}", email)));
            }
        }

        if let Some(major_id) = request.major_id {
            if self.majors.find_by_id(major_id).await?.is_none() {
                return Err(ClubHubError::MajorNotFound { major_id });
            }
        }

        if let Some(ref role) = request.role {
            if UserRole::parse(role).is_none() {
                return Err(ClubHubError::InvalidInput(format!("Unknown role: {}", role)));
            }
        }

        if self.users.find_by_student_no(&request.student_no).await?.is_some() {
            return Err(ClubHubError::InvalidInput(
                format!("Student number already registered: {}", request.student_no)
            ));
        }

        self.users.create(request).await
    }

    /// Add a member to a club roster
    pub async fn add_member_to_club(&self, request: AddMemberRequest) -> Result<ClubMember, ClubHubError> {
        let club_id = request.club_id;
        let user_id = request.user_id;

        if self.clubs.find_by_id(club_id).await?.is_none() {
            return Err(ClubHubError::ClubNotFound { club_id });
        }

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(ClubHubError::UserNotFound { user_id });
        }

        if self.clubs.is_member(club_id, user_id).await? {
            return Err(ClubHubError::InvalidInput(
                "User is already a member of this club".to_string()
            ));
        }

        if let Some(ref role) = request.role {
            if ClubRole::parse(role).is_none() {
                return Err(ClubHubError::InvalidInput(format!("Unknown club role: {}", role)));
            }
        }

        self.clubs.add_member(request).await
    }

    /// Submit feedback for an event
    pub async fn submit_feedback(&self, request: CreateFeedbackRequest) -> Result<Feedback, ClubHubError> {
        if !(1..=5).contains(&request.rating) {
            return Err(ClubHubError::InvalidInput(
                format!("Rating must be between 1 and 5, got {}", request.rating)
            ));
        }

        if self.events.find_by_id(request.event_id).await?.is_none() {
            return Err(ClubHubError::EventNotFound { event_id: request.event_id });
        }

        self.feedback.create(request).await
    }

    /// Aggregate a member's profile, clubs, and wallet for the dashboard
    pub async fn member_dashboard(&self, user_id: i64) -> Result<serde_json::Value, ClubHubError> {
        let user = self.users.find_by_id(user_id).await?
            .ok_or(ClubHubError::UserNotFound { user_id })?;

        let clubs = self.clubs.get_user_clubs(user_id).await?;
        let wallet = self.wallets.get_or_create(user_id).await?;

        let dashboard = serde_json::json!({
            "user": user,
            "clubs": clubs,
            "wallet": wallet,
        });

        Ok(dashboard)
    }
}
