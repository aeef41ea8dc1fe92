//! Workflow and validation rules
//!
//! Event and order state machines, day-list validation, and pagination
//! clamping, all exercised without a live database.

mod helpers;

use assert_matches::assert_matches;
use helpers::*;

use ClubHub::models::event::EventStatus;
use ClubHub::models::pagination::PageParams;
use ClubHub::models::redemption::OrderStatus;
use ClubHub::services::event::validate_day_inputs;
use ClubHub::utils::errors::ClubHubError;

#[test]
fn event_workflow_allows_only_forward_moves() {
    assert!(EventStatus::Pending.can_transition(EventStatus::Approved));
    assert!(EventStatus::Pending.can_transition(EventStatus::Rejected));
    assert!(EventStatus::Approved.can_transition(EventStatus::Ongoing));
    assert!(EventStatus::Ongoing.can_transition(EventStatus::Completed));

    // no resurrection, no skipping
    assert!(!EventStatus::Rejected.can_transition(EventStatus::Ongoing));
    assert!(!EventStatus::Pending.can_transition(EventStatus::Ongoing));
    assert!(!EventStatus::Completed.can_transition(EventStatus::Pending));
    assert!(!EventStatus::Approved.can_transition(EventStatus::Completed));
}

#[test]
fn pending_and_rejected_events_never_block_slots() {
    assert!(!EventStatus::Pending.blocks_slots());
    assert!(!EventStatus::Rejected.blocks_slots());

    assert!(EventStatus::Approved.blocks_slots());
    assert!(EventStatus::Ongoing.blocks_slots());
    assert!(EventStatus::Completed.blocks_slots());
}

#[test]
fn status_strings_round_trip() {
    for status in [
        EventStatus::Pending,
        EventStatus::Approved,
        EventStatus::Rejected,
        EventStatus::Ongoing,
        EventStatus::Completed,
    ] {
        assert_eq!(EventStatus::parse(status.as_str()), Some(status));
    }

    assert_eq!(EventStatus::parse("archived"), None);
}

#[test]
fn order_workflow_only_leaves_placed() {
    assert!(OrderStatus::Placed.can_transition(OrderStatus::Completed));
    assert!(OrderStatus::Placed.can_transition(OrderStatus::Cancelled));
    assert!(!OrderStatus::Completed.can_transition(OrderStatus::Cancelled));
    assert!(!OrderStatus::Cancelled.can_transition(OrderStatus::Placed));
}

#[test]
fn day_lists_need_positive_durations() {
    let good = vec![
        day_input("2024-05-01", (9, 0), (11, 0)),
        day_input("2024-05-02", (18, 30), (20, 0)),
    ];
    assert!(validate_day_inputs(&good).is_ok());

    let zero_length = vec![day_input("2024-05-01", (9, 0), (9, 0))];
    assert_matches!(
        validate_day_inputs(&zero_length),
        Err(ClubHubError::InvalidInput(_))
    );

    let inverted = vec![day_input("2024-05-01", (14, 0), (9, 0))];
    assert_matches!(
        validate_day_inputs(&inverted),
        Err(ClubHubError::InvalidInput(_))
    );

    assert_matches!(validate_day_inputs(&[]), Err(ClubHubError::InvalidInput(_)));
}

#[test]
fn page_params_are_clamped() {
    let params = PageParams { limit: Some(1000), offset: Some(-10) };
    assert_eq!(params.limit(), 100);
    assert_eq!(params.offset(), 0);

    let params = PageParams { limit: None, offset: None };
    assert_eq!(params.limit(), 20);
    assert_eq!(params.offset(), 0);
}
