//! Test data builders

use chrono::{DateTime, NaiveDate, NaiveTime, TimeZone, Utc};
use ClubHub::config::settings::{SchedulingConfig, ScoringConfig, Settings};
use ClubHub::models::chat::ChatMessage;
use ClubHub::models::event::EventDayInput;

/// Build a time-of-day
pub fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).expect("valid time")
}

/// Build a calendar date
pub fn date(s: &str) -> NaiveDate {
    s.parse::<NaiveDate>().expect("valid date")
}

/// Build a UTC timestamp on 2024-05-01
pub fn timestamp(h: u32, m: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, h, m, s).single().expect("valid timestamp")
}

/// Build a day-schedule entry
pub fn day_input(day: &str, start: (u32, u32), end: (u32, u32)) -> EventDayInput {
    EventDayInput {
        day: date(day),
        start_time: time(start.0, start.1),
        end_time: time(end.0, end.1),
    }
}

/// Build a chat message with a given id and send minute
pub fn chat_message(id: i64, minute: u32) -> ChatMessage {
    ChatMessage {
        id,
        club_id: 1,
        sender_id: 100,
        body: format!("message {}", id),
        sent_at: timestamp(12, minute, 0),
        deleted: false,
    }
}

/// Default settings with the standard booking grid
pub fn test_settings() -> Settings {
    Settings::default()
}

/// The standard half-hour 06:00-22:00 grid
pub fn standard_grid_config() -> SchedulingConfig {
    SchedulingConfig {
        day_start: "06:00".to_string(),
        day_end: "22:00".to_string(),
        slot_minutes: 30,
        cache_ttl_seconds: 60,
    }
}

/// Scoring weights used across tests
pub fn test_scoring_config() -> ScoringConfig {
    ScoringConfig {
        points_per_event: 10,
        feedback_weight: 4.0,
    }
}
