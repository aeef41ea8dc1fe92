//! Error handling for ClubHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the ClubHub application
#[derive(Error, Debug)]
pub enum ClubHubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("User not found: {user_id}")]
    UserNotFound { user_id: i64 },

    #[error("Club not found: {club_id}")]
    ClubNotFound { club_id: i64 },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Location not found: {location_id}")]
    LocationNotFound { location_id: i64 },

    #[error("Major not found: {major_id}")]
    MajorNotFound { major_id: i64 },

    #[error("Redemption order not found: {order_id}")]
    OrderNotFound { order_id: i64 },

    #[error("Penalty rule not found: {rule_id}")]
    RuleNotFound { rule_id: i64 },

    #[error("Chat message not found: {message_id}")]
    MessageNotFound { message_id: i64 },

    #[error("Feedback not found: {feedback_id}")]
    FeedbackNotFound { feedback_id: i64 },

    #[error("Insufficient points: required {required}, available {available}")]
    InsufficientPoints { required: i64, available: i64 },

    #[error("Schedule conflict at location {location_id} on {date}")]
    ScheduleConflict { location_id: i64, date: String },

    #[error("Invalid state transition: {from} -> {to}")]
    InvalidStateTransition { from: String, to: String },

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Result type alias for ClubHub operations
pub type Result<T> = std::result::Result<T, ClubHubError>;

impl ClubHubError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            ClubHubError::Database(_) => false,
            ClubHubError::Migration(_) => false,
            ClubHubError::Config(_) => false,
            ClubHubError::UserNotFound { .. } => false,
            ClubHubError::ClubNotFound { .. } => false,
            ClubHubError::EventNotFound { .. } => false,
            ClubHubError::LocationNotFound { .. } => false,
            ClubHubError::MajorNotFound { .. } => false,
            ClubHubError::OrderNotFound { .. } => false,
            ClubHubError::RuleNotFound { .. } => false,
            ClubHubError::MessageNotFound { .. } => false,
            ClubHubError::FeedbackNotFound { .. } => false,
            ClubHubError::InsufficientPoints { .. } => false,
            ClubHubError::ScheduleConflict { .. } => false,
            ClubHubError::InvalidStateTransition { .. } => false,
            ClubHubError::Redis(_) => true,
            ClubHubError::Serialization(_) => false,
            ClubHubError::Io(_) => true,
            ClubHubError::RateLimitExceeded => true,
            ClubHubError::InvalidInput(_) => false,
            ClubHubError::ServiceUnavailable(_) => true,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ClubHubError::Database(_) => ErrorSeverity::Critical,
            ClubHubError::Migration(_) => ErrorSeverity::Critical,
            ClubHubError::Config(_) => ErrorSeverity::Critical,
            ClubHubError::RateLimitExceeded => ErrorSeverity::Warning,
            ClubHubError::InsufficientPoints { .. } => ErrorSeverity::Info,
            ClubHubError::ScheduleConflict { .. } => ErrorSeverity::Info,
            ClubHubError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_levels() {
        let err = ClubHubError::Config("missing database url".to_string());
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert!(!err.is_recoverable());

        let err = ClubHubError::RateLimitExceeded;
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_insufficient_points_message() {
        let err = ClubHubError::InsufficientPoints { required: 50, available: 20 };
        assert_eq!(err.to_string(), "Insufficient points: required 50, available 20");
    }
}
