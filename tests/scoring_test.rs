//! Activity score composition

mod helpers;

use helpers::*;

use ClubHub::services::scoring::{compose_score, ScoreInputs};

#[test]
fn score_is_sums_and_ratios_of_its_inputs() {
    let inputs = ScoreInputs {
        events_completed: 5,
        events_total: 8,
        average_rating: Some(3.2),
        penalty_deduction: 12,
    };

    let score = compose_score(42, inputs, &test_scoring_config());

    assert_eq!(score.club_id, 42);
    assert_eq!(score.event_points, 50);
    assert!((score.feedback_points - 12.8).abs() < 1e-9);
    assert!((score.completion_ratio - 0.625).abs() < 1e-9);
    assert!((score.total - 50.8).abs() < 1e-9);
}

#[test]
fn club_without_history_scores_zero() {
    let score = compose_score(1, ScoreInputs::default(), &test_scoring_config());

    assert_eq!(score.events_total, 0);
    assert_eq!(score.completion_ratio, 0.0);
    assert_eq!(score.average_rating, None);
    assert_eq!(score.total, 0.0);
}

#[test]
fn penalties_cannot_push_a_score_below_zero() {
    let inputs = ScoreInputs {
        events_completed: 1,
        events_total: 2,
        average_rating: Some(1.0),
        penalty_deduction: 1000,
    };

    let score = compose_score(1, inputs, &test_scoring_config());
    assert_eq!(score.total, 0.0);
}

#[test]
fn feedback_weight_scales_the_rating() {
    let mut config = test_scoring_config();
    config.feedback_weight = 0.0;

    let inputs = ScoreInputs {
        events_completed: 2,
        events_total: 2,
        average_rating: Some(5.0),
        penalty_deduction: 0,
    };

    let score = compose_score(1, inputs, &config);
    assert_eq!(score.feedback_points, 0.0);
    assert!((score.total - 20.0).abs() < 1e-9);
}
