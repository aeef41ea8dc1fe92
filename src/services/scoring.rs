//! Club activity scoring
//!
//! The score is plain arithmetic over data the rest of the platform already
//! tracks: completed events earn a fixed number of points, the average
//! feedback rating is weighted in, and penalty records subtract. Components
//! are fetched concurrently and composed by a pure function.

use serde::{Deserialize, Serialize};
use crate::config::settings::ScoringConfig;
use crate::database::DatabaseService;
use crate::utils::errors::{ClubHubError, Result};

/// Raw inputs to the score composition
#[derive(Debug, Clone, Copy, Default)]
pub struct ScoreInputs {
    pub events_completed: i64,
    pub events_total: i64,
    pub average_rating: Option<f64>,
    pub penalty_deduction: i64,
}

/// A club's composed activity score with its breakdown
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub club_id: i64,
    pub events_completed: i64,
    pub events_total: i64,
    pub completion_ratio: f64,
    pub average_rating: Option<f64>,
    pub event_points: i64,
    pub feedback_points: f64,
    pub penalty_deduction: i64,
    pub total: f64,
}

/// Compose a score breakdown from its inputs. Sums and ratios only; the
/// total never drops below zero.
pub fn compose_score(club_id: i64, inputs: ScoreInputs, config: &ScoringConfig) -> ScoreBreakdown {
    let completion_ratio = if inputs.events_total > 0 {
        inputs.events_completed as f64 / inputs.events_total as f64
    } else {
        0.0
    };

    let event_points = inputs.events_completed * config.points_per_event;
    let feedback_points = inputs.average_rating.unwrap_or(0.0) * config.feedback_weight;

    let total = (event_points as f64 + feedback_points - inputs.penalty_deduction as f64).max(0.0);

    ScoreBreakdown {
        club_id,
        events_completed: inputs.events_completed,
        events_total: inputs.events_total,
        completion_ratio,
        average_rating: inputs.average_rating,
        event_points,
        feedback_points,
        penalty_deduction: inputs.penalty_deduction,
        total,
    }
}

/// Activity scoring service
#[derive(Clone)]
pub struct ScoringService {
    db: DatabaseService,
    config: ScoringConfig,
}

impl ScoringService {
    /// Create a new ScoringService instance
    pub fn new(db: DatabaseService, config: ScoringConfig) -> Self {
        Self { db, config }
    }

    /// Score one club
    pub async fn club_score(&self, club_id: i64) -> Result<ScoreBreakdown> {
        if self.db.clubs.find_by_id(club_id).await?.is_none() {
            return Err(ClubHubError::ClubNotFound { club_id });
        }

        let (summary, average_rating, penalty_deduction) = tokio::try_join!(
            self.db.events.summary(Some(club_id)),
            self.db.feedback.average_rating_for_club(club_id),
            self.db.penalties.score_deduction_for_club(club_id),
        )?;

        let inputs = ScoreInputs {
            events_completed: summary.completed,
            events_total: summary.total,
            average_rating,
            penalty_deduction,
        };

        Ok(compose_score(club_id, inputs, &self.config))
    }

    /// Score every club on one page of the club list
    pub async fn club_scores(&self, limit: i64, offset: i64) -> Result<Vec<ScoreBreakdown>> {
        let clubs = self.db.clubs.list(limit, offset).await?;

        let scores = futures::future::try_join_all(
            clubs.iter().map(|club| self.club_score(club.id))
        )
        .await?;

        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ScoringConfig {
        ScoringConfig { points_per_event: 10, feedback_weight: 4.0 }
    }

    #[test]
    fn test_compose_score_sums_components() {
        let inputs = ScoreInputs {
            events_completed: 3,
            events_total: 4,
            average_rating: Some(4.5),
            penalty_deduction: 5,
        };
        let score = compose_score(1, inputs, &config());

        assert_eq!(score.event_points, 30);
        assert!((score.feedback_points - 18.0).abs() < f64::EPSILON);
        assert!((score.completion_ratio - 0.75).abs() < f64::EPSILON);
        assert!((score.total - 43.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_compose_score_with_no_events() {
        let score = compose_score(1, ScoreInputs::default(), &config());

        assert_eq!(score.event_points, 0);
        assert_eq!(score.completion_ratio, 0.0);
        assert_eq!(score.total, 0.0);
    }

    #[test]
    fn test_compose_score_never_negative() {
        let inputs = ScoreInputs {
            events_completed: 1,
            events_total: 1,
            average_rating: None,
            penalty_deduction: 100,
        };
        let score = compose_score(1, inputs, &config());

        assert_eq!(score.total, 0.0);
    }

    #[test]
    fn test_compose_score_without_feedback() {
        let inputs = ScoreInputs {
            events_completed: 2,
            events_total: 2,
            average_rating: None,
            penalty_deduction: 0,
        };
        let score = compose_score(1, inputs, &config());

        assert_eq!(score.feedback_points, 0.0);
        assert!((score.total - 20.0).abs() < f64::EPSILON);
    }
}
