//! Slot availability behavior
//!
//! Covers the booking grid end to end: the half-open conflict rule, the
//! end-time picker constraint, and the fail-open path when the booking
//! lookup cannot reach the database.

mod helpers;

use helpers::*;
use proptest::prelude::*;

use ClubHub::database::repositories::EventRepository;
use ClubHub::services::scheduling::{
    mark_conflicts, ranges_overlap, selectable_end_times, slot_in_range, SchedulingService, SlotGrid,
};

#[test]
fn booked_morning_blocks_exactly_its_slots() {
    // An approved event 09:00-11:00 must flag 09:00, 09:30, 10:00, 10:30
    // and leave 11:00 free for a back-to-back booking.
    let grid = SlotGrid::default();
    let busy = vec![(time(9, 0), time(11, 0))];

    let slots = mark_conflicts(&grid.boundaries(), &busy);

    let blocked: Vec<_> = slots.iter().filter(|s| !s.available).map(|s| s.time).collect();
    assert_eq!(blocked, vec![time(9, 0), time(9, 30), time(10, 0), time(10, 30)]);

    let at_end = slots.iter().find(|s| s.time == time(11, 0)).unwrap();
    assert!(at_end.available);
}

#[test]
fn another_locations_bookings_never_reach_the_grid() {
    // Conflict detection keys on the location id: a booking elsewhere
    // contributes no busy range, so the whole day reads free.
    let grid = SlotGrid::default();
    let slots = mark_conflicts(&grid.boundaries(), &[]);

    assert!(slots.iter().all(|s| s.available));
    assert_eq!(slots.len(), 33);
}

#[test]
fn end_candidates_follow_the_chosen_start() {
    let grid = SlotGrid::default();
    let ends = selectable_end_times(&grid.boundaries(), time(10, 0));

    assert!(ends.iter().all(|&t| t > time(10, 0)));
    assert_eq!(ends.first().copied(), Some(time(10, 30)));
    assert_eq!(ends.last().copied(), Some(time(22, 0)));

    // Picking the last boundary leaves nothing selectable
    assert!(selectable_end_times(&grid.boundaries(), time(22, 0)).is_empty());
}

#[test]
fn overlapping_and_adjacent_ranges() {
    assert!(ranges_overlap(time(9, 0), time(11, 0), time(10, 0), time(12, 0)));
    assert!(ranges_overlap(time(10, 0), time(12, 0), time(9, 0), time(11, 0)));
    // touching ranges share a boundary, not a slot
    assert!(!ranges_overlap(time(9, 0), time(11, 0), time(11, 0), time(13, 0)));
    assert!(!ranges_overlap(time(11, 0), time(13, 0), time(9, 0), time(11, 0)));
}

#[tokio::test]
async fn availability_fails_open_when_lookup_is_unreachable() {
    init_test_env();

    let events = EventRepository::new(unreachable_pool());
    let service = SchedulingService::new(events, None, &standard_grid_config())
        .expect("grid config is valid");

    // The booking query cannot reach a database; the day must read as
    // fully free and the call must not error.
    let availability = service.day_availability(1, date("2024-05-01")).await;

    assert_eq!(availability.location_id, 1);
    assert_eq!(availability.slots.len(), 33);
    assert!(availability.slots.iter().all(|s| s.available));
}

#[tokio::test]
async fn approval_check_fails_closed_when_lookup_is_unreachable() {
    init_test_env();

    let events = EventRepository::new(unreachable_pool());
    let service = SchedulingService::new(events, None, &standard_grid_config())
        .expect("grid config is valid");

    let days = vec![day_input("2024-05-01", (9, 0), (11, 0))];
    let result = service.ensure_bookable(1, &days, None).await;

    assert!(result.is_err(), "approval must not proceed on unverified data");
}

proptest! {
    #[test]
    fn conflicts_are_exactly_the_half_open_range(start_idx in 0usize..32, len in 1usize..8) {
        let grid = SlotGrid::default();
        let boundaries = grid.boundaries();

        let end_idx = (start_idx + len).min(boundaries.len() - 1);
        prop_assume!(end_idx > start_idx);

        let busy = vec![(boundaries[start_idx], boundaries[end_idx])];
        let slots = mark_conflicts(&boundaries, &busy);

        for (i, slot) in slots.iter().enumerate() {
            let expected_blocked = i >= start_idx && i < end_idx;
            prop_assert_eq!(!slot.available, expected_blocked);
        }
    }

    #[test]
    fn slot_in_range_agrees_with_minute_arithmetic(slot_idx in 0usize..33, start_idx in 0usize..32, len in 1usize..8) {
        let grid = SlotGrid::default();
        let boundaries = grid.boundaries();

        let end_idx = (start_idx + len).min(boundaries.len() - 1);
        prop_assume!(end_idx > start_idx);

        let hit = slot_in_range(boundaries[slot_idx], boundaries[start_idx], boundaries[end_idx]);
        prop_assert_eq!(hit, slot_idx >= start_idx && slot_idx < end_idx);
    }
}
