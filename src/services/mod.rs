//! Services module
//!
//! This module contains business logic services

pub mod cache;
pub mod scheduling;
pub mod event;
pub mod redemption;
pub mod penalty;
pub mod scoring;
pub mod chat;

// Re-export commonly used services
pub use cache::CacheService;
pub use scheduling::{SchedulingService, SlotGrid, SlotStatus, DayAvailability};
pub use event::EventService;
pub use redemption::RedemptionService;
pub use penalty::PenaltyService;
pub use scoring::{ScoringService, ScoreBreakdown};
pub use chat::ChatService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::utils::errors::Result;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub cache_service: CacheService,
    pub scheduling_service: SchedulingService,
    pub event_service: EventService,
    pub redemption_service: RedemptionService,
    pub penalty_service: PenaltyService,
    pub scoring_service: ScoringService,
    pub chat_service: ChatService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(db: DatabaseService, settings: Settings) -> Result<Self> {
        let cache_service = CacheService::new(settings.clone())?;
        let scheduling_service = SchedulingService::new(
            db.events.clone(),
            Some(cache_service.clone()),
            &settings.scheduling,
        )?;
        let event_service = EventService::new(db.clone(), scheduling_service.clone());
        let redemption_service = RedemptionService::new(db.clone());
        let penalty_service = PenaltyService::new(db.clone());
        let scoring_service = ScoringService::new(db.clone(), settings.scoring.clone());
        let chat_service = ChatService::new(db);

        Ok(Self {
            cache_service,
            scheduling_service,
            event_service,
            redemption_service,
            penalty_service,
            scoring_service,
            chat_service,
        })
    }
}
