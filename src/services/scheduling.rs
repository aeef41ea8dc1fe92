//! Location booking and slot availability
//!
//! The slot checker answers one question: given a location and a calendar
//! date, which fixed half-hour boundaries are already taken by an
//! approved/ongoing/completed event. Availability reads fail open: if the
//! booking lookup errors, the day is reported free and the failure is logged.
//! Approval re-validates strictly before anything is committed.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use crate::config::settings::SchedulingConfig;
use crate::database::repositories::EventRepository;
use crate::models::event::EventDayInput;
use crate::services::cache::CacheService;
use crate::utils::errors::{ClubHubError, Result};

/// One bookable boundary and whether it is still free
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotStatus {
    pub time: NaiveTime,
    pub available: bool,
}

/// Availability of a location for one calendar date
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayAvailability {
    pub location_id: i64,
    pub day: NaiveDate,
    pub slots: Vec<SlotStatus>,
}

/// The fixed slot grid of a bookable day
#[derive(Debug, Clone, Copy)]
pub struct SlotGrid {
    pub day_start: NaiveTime,
    pub day_end: NaiveTime,
    pub slot_minutes: u32,
}

impl SlotGrid {
    /// Parse the grid out of the scheduling configuration
    pub fn from_config(config: &SchedulingConfig) -> Result<Self> {
        let day_start = NaiveTime::parse_from_str(&config.day_start, "%H:%M")
            .map_err(|_| ClubHubError::Config(format!("Invalid day_start: {}", config.day_start)))?;
        let day_end = NaiveTime::parse_from_str(&config.day_end, "%H:%M")
            .map_err(|_| ClubHubError::Config(format!("Invalid day_end: {}", config.day_end)))?;

        if day_start >= day_end || config.slot_minutes == 0 {
            return Err(ClubHubError::Config("Invalid slot grid".to_string()));
        }

        Ok(Self { day_start, day_end, slot_minutes: config.slot_minutes })
    }

    /// All bookable boundaries of the day, both ends inclusive
    pub fn boundaries(&self) -> Vec<NaiveTime> {
        let start = minutes_of(self.day_start);
        let end = minutes_of(self.day_end);

        (start..=end)
            .step_by(self.slot_minutes as usize)
            .filter_map(time_from_minutes)
            .collect()
    }
}

impl Default for SlotGrid {
    fn default() -> Self {
        Self {
            day_start: NaiveTime::from_hms_opt(6, 0, 0).expect("valid time"),
            day_end: NaiveTime::from_hms_opt(22, 0, 0).expect("valid time"),
            slot_minutes: 30,
        }
    }
}

/// Minutes since midnight
pub fn minutes_of(t: NaiveTime) -> u32 {
    use chrono::Timelike;
    t.hour() * 60 + t.minute()
}

fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}

/// Whether a boundary falls inside a booked range.
///
/// The range is half-open: a slot exactly at the booking's end time is free,
/// so back-to-back bookings work.
pub fn slot_in_range(slot: NaiveTime, start: NaiveTime, end: NaiveTime) -> bool {
    let s = minutes_of(slot);
    s >= minutes_of(start) && s < minutes_of(end)
}

/// Mark each grid boundary against the booked ranges of the day
pub fn mark_conflicts(boundaries: &[NaiveTime], busy: &[(NaiveTime, NaiveTime)]) -> Vec<SlotStatus> {
    boundaries
        .iter()
        .map(|&time| SlotStatus {
            time,
            available: !busy.iter().any(|&(start, end)| slot_in_range(time, start, end)),
        })
        .collect()
}

/// End-time candidates once a start boundary is picked: everything at or
/// before the start would make a non-positive duration and is excluded.
pub fn selectable_end_times(boundaries: &[NaiveTime], start: NaiveTime) -> Vec<NaiveTime> {
    boundaries
        .iter()
        .copied()
        .filter(|&t| minutes_of(t) > minutes_of(start))
        .collect()
}

/// Whether two half-open time ranges overlap
pub fn ranges_overlap(a_start: NaiveTime, a_end: NaiveTime, b_start: NaiveTime, b_end: NaiveTime) -> bool {
    minutes_of(a_start) < minutes_of(b_end) && minutes_of(b_start) < minutes_of(a_end)
}

/// Slot availability service
#[derive(Debug, Clone)]
pub struct SchedulingService {
    events: EventRepository,
    cache: Option<CacheService>,
    grid: SlotGrid,
    cache_ttl_seconds: u64,
}

impl SchedulingService {
    /// Create a new SchedulingService instance
    pub fn new(events: EventRepository, cache: Option<CacheService>, config: &SchedulingConfig) -> Result<Self> {
        let grid = SlotGrid::from_config(config)?;

        Ok(Self {
            events,
            cache,
            grid,
            cache_ttl_seconds: config.cache_ttl_seconds,
        })
    }

    pub fn grid(&self) -> SlotGrid {
        self.grid
    }

    /// Compute the slot grid for a location and date.
    ///
    /// A failing booking lookup yields a fully available grid; cache errors
    /// are ignored the same way. Nothing here blocks the caller.
    pub async fn day_availability(&self, location_id: i64, day: NaiveDate) -> DayAvailability {
        let key = Self::cache_key(location_id, day);

        if let Some(cache) = &self.cache {
            match cache.get::<DayAvailability>(&key).await {
                Ok(Some(cached)) => return cached,
                Ok(None) => {}
                Err(e) => debug!(error = %e, "Availability cache read failed"),
            }
        }

        let busy = match self.events.find_blocking_days(location_id, day, None).await {
            Ok(days) => days
                .into_iter()
                .map(|d| (d.start_time, d.end_time))
                .collect::<Vec<_>>(),
            Err(e) => {
                crate::utils::logging::log_availability_fallback(
                    location_id,
                    &day.to_string(),
                    &e.to_string(),
                );
                Vec::new()
            }
        };

        let availability = DayAvailability {
            location_id,
            day,
            slots: mark_conflicts(&self.grid.boundaries(), &busy),
        };

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.set(&key, &availability, Some(self.cache_ttl_seconds)).await {
                debug!(error = %e, "Availability cache write failed");
            }
        }

        availability
    }

    /// Strict conflict check used when an event request is approved.
    ///
    /// Unlike `day_availability`, lookup errors propagate here: approval must
    /// not go through on unverified data.
    pub async fn ensure_bookable(&self, location_id: i64, days: &[EventDayInput], exclude_event: Option<i64>) -> Result<()> {
        for input in days {
            let booked = self.events.find_blocking_days(location_id, input.day, exclude_event).await?;

            for existing in &booked {
                if ranges_overlap(input.start_time, input.end_time, existing.start_time, existing.end_time) {
                    warn!(
                        location_id = location_id,
                        day = %input.day,
                        "Booking overlaps existing event day"
                    );
                    return Err(ClubHubError::ScheduleConflict {
                        location_id,
                        date: input.day.to_string(),
                    });
                }
            }
        }

        Ok(())
    }

    /// Drop cached availability for the dates an event occupies
    pub async fn invalidate(&self, location_id: i64, days: &[NaiveDate]) {
        let Some(cache) = &self.cache else { return };

        for day in days {
            let key = Self::cache_key(location_id, *day);
            if let Err(e) = cache.delete(&key).await {
                debug!(error = %e, key = %key, "Availability cache invalidation failed");
            }
        }
    }

    fn cache_key(location_id: i64, day: NaiveDate) -> String {
        format!("availability:{}:{}", location_id, day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_default_grid_boundaries() {
        let grid = SlotGrid::default();
        let boundaries = grid.boundaries();

        // 06:00 through 22:00 at half-hour steps
        assert_eq!(boundaries.len(), 33);
        assert_eq!(boundaries[0], t(6, 0));
        assert_eq!(boundaries[1], t(6, 30));
        assert_eq!(*boundaries.last().unwrap(), t(22, 0));
    }

    #[test]
    fn test_slot_in_range_is_half_open() {
        let start = t(9, 0);
        let end = t(11, 0);

        assert!(slot_in_range(t(9, 0), start, end));
        assert!(slot_in_range(t(10, 30), start, end));
        assert!(!slot_in_range(t(11, 0), start, end));
        assert!(!slot_in_range(t(8, 30), start, end));
    }

    #[test]
    fn test_mark_conflicts_flags_booked_boundaries() {
        let grid = SlotGrid::default();
        let busy = vec![(t(9, 0), t(11, 0))];
        let slots = mark_conflicts(&grid.boundaries(), &busy);

        let conflicted: Vec<NaiveTime> = slots
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.time)
            .collect();

        assert_eq!(conflicted, vec![t(9, 0), t(9, 30), t(10, 0), t(10, 30)]);

        let eleven = slots.iter().find(|s| s.time == t(11, 0)).unwrap();
        assert!(eleven.available, "slot at an event's end time stays free");
    }

    #[test]
    fn test_mark_conflicts_with_no_bookings() {
        let grid = SlotGrid::default();
        let slots = mark_conflicts(&grid.boundaries(), &[]);
        assert!(slots.iter().all(|s| s.available));
    }

    #[test]
    fn test_selectable_end_times_exclude_start_and_earlier() {
        let grid = SlotGrid::default();
        let ends = selectable_end_times(&grid.boundaries(), t(9, 0));

        assert!(!ends.contains(&t(9, 0)));
        assert!(!ends.contains(&t(8, 30)));
        assert_eq!(ends[0], t(9, 30));
        assert_eq!(*ends.last().unwrap(), t(22, 0));
    }

    #[test]
    fn test_ranges_overlap_half_open() {
        // back-to-back bookings do not collide
        assert!(!ranges_overlap(t(9, 0), t(11, 0), t(11, 0), t(12, 0)));
        assert!(ranges_overlap(t(9, 0), t(11, 0), t(10, 30), t(12, 0)));
        assert!(ranges_overlap(t(9, 0), t(11, 0), t(8, 0), t(9, 30)));
        assert!(!ranges_overlap(t(9, 0), t(11, 0), t(12, 0), t(13, 0)));
    }

    #[test]
    fn test_grid_from_config_rejects_inverted_window() {
        let config = SchedulingConfig {
            day_start: "22:00".to_string(),
            day_end: "06:00".to_string(),
            slot_minutes: 30,
            cache_ttl_seconds: 60,
        };
        assert!(SlotGrid::from_config(&config).is_err());
    }
}
