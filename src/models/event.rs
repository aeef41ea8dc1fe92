//! Event models
//!
//! An event belongs to a club, is held at a location, and owns an ordered
//! list of scheduled days. Requests enter the workflow as `pending` and only
//! approved/ongoing/completed events count as bookings against a location.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub club_id: i64,
    pub location_id: i64,
    pub status: String,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One scheduled session of a (possibly multi-day) event
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventDay {
    pub id: i64,
    pub event_id: i64,
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// An event together with its scheduled days
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDetail {
    pub event: Event,
    pub days: Vec<EventDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventDayInput {
    pub day: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub club_id: i64,
    pub location_id: i64,
    pub created_by: Option<i64>,
    pub days: Vec<EventDayInput>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub location_id: Option<i64>,
    pub days: Option<Vec<EventDayInput>>,
}

/// Counts of events per workflow state
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventSummary {
    pub pending: i64,
    pub approved: i64,
    pub rejected: i64,
    pub ongoing: i64,
    pub completed: i64,
    pub total: i64,
}

/// Event workflow states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventStatus {
    Pending,
    Approved,
    Rejected,
    Ongoing,
    Completed,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Pending => "pending",
            EventStatus::Approved => "approved",
            EventStatus::Rejected => "rejected",
            EventStatus::Ongoing => "ongoing",
            EventStatus::Completed => "completed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(EventStatus::Pending),
            "approved" => Some(EventStatus::Approved),
            "rejected" => Some(EventStatus::Rejected),
            "ongoing" => Some(EventStatus::Ongoing),
            "completed" => Some(EventStatus::Completed),
            _ => None,
        }
    }

    /// Whether an event in this state occupies its location's time slots
    pub fn blocks_slots(&self) -> bool {
        matches!(self, EventStatus::Approved | EventStatus::Ongoing | EventStatus::Completed)
    }

    /// Whether the workflow allows moving to `next`
    pub fn can_transition(&self, next: EventStatus) -> bool {
        matches!(
            (self, next),
            (EventStatus::Pending, EventStatus::Approved)
                | (EventStatus::Pending, EventStatus::Rejected)
                | (EventStatus::Approved, EventStatus::Ongoing)
                | (EventStatus::Ongoing, EventStatus::Completed)
        )
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
