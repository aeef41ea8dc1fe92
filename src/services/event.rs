//! Event request workflow service
//!
//! Requests enter as `pending` and move through the workflow:
//! pending -> approved | rejected, approved -> ongoing -> completed.
//! Approval is the strict gate: it re-checks the location's bookings and
//! refuses to approve over an existing approved/ongoing/completed event.

use tracing::{info, debug};
use crate::database::DatabaseService;
use crate::models::event::{Event, EventDetail, EventDayInput, CreateEventRequest, UpdateEventRequest, EventSummary, EventStatus};
use crate::models::pagination::{Page, PageParams};
use crate::services::scheduling::SchedulingService;
use crate::utils::errors::{ClubHubError, Result};

/// Validate the day list of an event request: at least one day, and every
/// entry must have a positive duration.
pub fn validate_day_inputs(days: &[EventDayInput]) -> Result<()> {
    if days.is_empty() {
        return Err(ClubHubError::InvalidInput(
            "An event needs at least one scheduled day".to_string()
        ));
    }

    for input in days {
        if input.start_time >= input.end_time {
            return Err(ClubHubError::InvalidInput(format!(
                "Day {} has start {} at or after end {}",
                input.day, input.start_time, input.end_time
            )));
        }
    }

    Ok(())
}

/// Event workflow service
#[derive(Clone)]
pub struct EventService {
    db: DatabaseService,
    scheduling: SchedulingService,
}

impl EventService {
    /// Create a new EventService instance
    pub fn new(db: DatabaseService, scheduling: SchedulingService) -> Self {
        Self { db, scheduling }
    }

    /// Submit a new event request; it starts in the pending state
    pub async fn submit_request(&self, request: CreateEventRequest) -> Result<EventDetail> {
        if request.title.trim().is_empty() {
            return Err(ClubHubError::InvalidInput("Event title is required".to_string()));
        }

        validate_day_inputs(&request.days)?;

        let club_id = request.club_id;
        if self.db.clubs.find_by_id(club_id).await?.is_none() {
            return Err(ClubHubError::ClubNotFound { club_id });
        }

        let location_id = request.location_id;
        let location = self.db.locations.find_by_id(location_id).await?
            .ok_or(ClubHubError::LocationNotFound { location_id })?;

        if !location.is_active {
            return Err(ClubHubError::InvalidInput(
                format!("Location {} is not open for booking", location.name)
            ));
        }

        let detail = self.db.events.create(request).await?;
        info!(event_id = detail.event.id, club_id = club_id, "Event request submitted");

        Ok(detail)
    }

    /// Fetch an event with its day schedule
    pub async fn get_detail(&self, event_id: i64) -> Result<EventDetail> {
        self.db.events.find_detail(event_id).await?
            .ok_or(ClubHubError::EventNotFound { event_id })
    }

    /// List events with optional status/club filters
    pub async fn list(&self, status: Option<String>, club_id: Option<i64>, params: PageParams) -> Result<Page<Event>> {
        if let Some(ref s) = status {
            if EventStatus::parse(s).is_none() {
                return Err(ClubHubError::InvalidInput(format!("Unknown event status: {}", s)));
            }
        }

        let items = self.db.events
            .list(status.as_deref(), club_id, params.limit(), params.offset())
            .await?;
        let total = self.db.events.count(status.as_deref(), club_id).await?;

        Ok(Page::new(items, total, params))
    }

    /// Event counts per workflow state
    pub async fn summary(&self, club_id: Option<i64>) -> Result<EventSummary> {
        self.db.events.summary(club_id).await
    }

    /// Update a request; only pending requests can still be edited
    pub async fn update_request(&self, event_id: i64, request: UpdateEventRequest) -> Result<EventDetail> {
        let event = self.require_event(event_id).await?;
        let status = self.parse_status(&event)?;

        if status != EventStatus::Pending {
            return Err(ClubHubError::InvalidStateTransition {
                from: event.status.clone(),
                to: "edited".to_string(),
            });
        }

        if let Some(ref days) = request.days {
            validate_day_inputs(days)?;
        }

        if let Some(location_id) = request.location_id {
            if self.db.locations.find_by_id(location_id).await?.is_none() {
                return Err(ClubHubError::LocationNotFound { location_id });
            }
        }

        self.db.events.update(event_id, request).await?;
        self.get_detail(event_id).await
    }

    /// Approve a pending request after a strict conflict re-check
    pub async fn approve(&self, event_id: i64) -> Result<Event> {
        let detail = self.get_detail(event_id).await?;
        self.check_transition(&detail.event, EventStatus::Approved)?;

        let day_inputs: Vec<EventDayInput> = detail.days
            .iter()
            .map(|d| EventDayInput {
                day: d.day,
                start_time: d.start_time,
                end_time: d.end_time,
            })
            .collect();

        self.scheduling
            .ensure_bookable(detail.event.location_id, &day_inputs, Some(event_id))
            .await?;

        let event = self.db.events.set_status(event_id, EventStatus::Approved).await?;

        let days: Vec<chrono::NaiveDate> = detail.days.iter().map(|d| d.day).collect();
        self.scheduling.invalidate(event.location_id, &days).await;

        crate::utils::logging::log_event_action(event_id, "approved", None, None);
        Ok(event)
    }

    /// Reject a pending request
    pub async fn reject(&self, event_id: i64) -> Result<Event> {
        let event = self.require_event(event_id).await?;
        self.check_transition(&event, EventStatus::Rejected)?;

        let event = self.db.events.set_status(event_id, EventStatus::Rejected).await?;
        crate::utils::logging::log_event_action(event_id, "rejected", None, None);
        Ok(event)
    }

    /// Mark an approved event as running
    pub async fn start(&self, event_id: i64) -> Result<Event> {
        let event = self.require_event(event_id).await?;
        self.check_transition(&event, EventStatus::Ongoing)?;

        let event = self.db.events.set_status(event_id, EventStatus::Ongoing).await?;
        crate::utils::logging::log_event_action(event_id, "started", None, None);
        Ok(event)
    }

    /// Mark a running event as completed
    pub async fn complete(&self, event_id: i64) -> Result<Event> {
        let event = self.require_event(event_id).await?;
        self.check_transition(&event, EventStatus::Completed)?;

        let event = self.db.events.set_status(event_id, EventStatus::Completed).await?;
        crate::utils::logging::log_event_action(event_id, "completed", None, None);
        Ok(event)
    }

    /// Delete an event; cached availability for its dates is dropped
    pub async fn delete(&self, event_id: i64) -> Result<()> {
        let detail = self.get_detail(event_id).await?;

        self.db.events.delete(event_id).await?;

        let status = EventStatus::parse(&detail.event.status);
        if status.map(|s| s.blocks_slots()).unwrap_or(false) {
            let days: Vec<chrono::NaiveDate> = detail.days.iter().map(|d| d.day).collect();
            self.scheduling.invalidate(detail.event.location_id, &days).await;
        }

        debug!(event_id = event_id, "Event deleted");
        Ok(())
    }

    async fn require_event(&self, event_id: i64) -> Result<Event> {
        self.db.events.find_by_id(event_id).await?
            .ok_or(ClubHubError::EventNotFound { event_id })
    }

    fn parse_status(&self, event: &Event) -> Result<EventStatus> {
        EventStatus::parse(&event.status)
            .ok_or_else(|| ClubHubError::InvalidInput(format!("Corrupt event status: {}", event.status)))
    }

    fn check_transition(&self, event: &Event, next: EventStatus) -> Result<()> {
        let current = self.parse_status(event)?;

        if !current.can_transition(next) {
            return Err(ClubHubError::InvalidStateTransition {
                from: current.to_string(),
                to: next.to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    fn day_input(day: &str, start: (u32, u32), end: (u32, u32)) -> EventDayInput {
        EventDayInput {
            day: day.parse::<NaiveDate>().unwrap(),
            start_time: NaiveTime::from_hms_opt(start.0, start.1, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(end.0, end.1, 0).unwrap(),
        }
    }

    #[test]
    fn test_validate_day_inputs_accepts_ordered_days() {
        let days = vec![
            day_input("2024-05-01", (9, 0), (11, 0)),
            day_input("2024-05-02", (14, 0), (16, 30)),
        ];
        assert!(validate_day_inputs(&days).is_ok());
    }

    #[test]
    fn test_validate_day_inputs_rejects_empty_list() {
        assert!(validate_day_inputs(&[]).is_err());
    }

    #[test]
    fn test_validate_day_inputs_rejects_non_positive_duration() {
        let days = vec![day_input("2024-05-01", (11, 0), (11, 0))];
        assert!(validate_day_inputs(&days).is_err());

        let days = vec![day_input("2024-05-01", (12, 0), (11, 0))];
        assert!(validate_day_inputs(&days).is_err());
    }

    #[test]
    fn test_workflow_transitions() {
        assert!(EventStatus::Pending.can_transition(EventStatus::Approved));
        assert!(EventStatus::Pending.can_transition(EventStatus::Rejected));
        assert!(EventStatus::Approved.can_transition(EventStatus::Ongoing));
        assert!(EventStatus::Ongoing.can_transition(EventStatus::Completed));

        assert!(!EventStatus::Rejected.can_transition(EventStatus::Approved));
        assert!(!EventStatus::Completed.can_transition(EventStatus::Ongoing));
        assert!(!EventStatus::Pending.can_transition(EventStatus::Completed));
    }

    #[test]
    fn test_only_booked_states_block_slots() {
        assert!(EventStatus::Approved.blocks_slots());
        assert!(EventStatus::Ongoing.blocks_slots());
        assert!(EventStatus::Completed.blocks_slots());
        assert!(!EventStatus::Pending.blocks_slots());
        assert!(!EventStatus::Rejected.blocks_slots());
    }
}
