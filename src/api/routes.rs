//! Route definitions
//!
//! Defines all HTTP API endpoints. Feature-flagged surfaces (chat,
//! redemptions, penalties) are only mounted when enabled in settings.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::config::settings::Settings;
use super::handlers::{chat, clubs, events, feedback, health, locations, majors, penalties, redemptions, users, wallet};
use super::server::AppState;

/// Create the API router
pub fn routes(settings: &Settings) -> Router<AppState> {
    let mut router = Router::new()
        // Health check
        .route("/health", get(health::health))
        // Events
        .route("/api/events", post(events::submit).get(events::list))
        .route("/api/events/summary", get(events::summary))
        .route("/api/events/{id}", get(events::detail).put(events::update).delete(events::remove))
        .route("/api/events/{id}/approve", post(events::approve))
        .route("/api/events/{id}/reject", post(events::reject))
        .route("/api/events/{id}/start", post(events::start))
        .route("/api/events/{id}/complete", post(events::complete))
        .route("/api/events/{id}/feedback", post(feedback::submit).get(feedback::list_for_event))
        .route("/api/feedback/{id}", delete(feedback::remove))
        // Locations and slot availability
        .route("/api/locations", post(locations::create).get(locations::list))
        .route("/api/locations/active", get(locations::list_active))
        .route("/api/locations/{id}", get(locations::detail).put(locations::update).delete(locations::remove))
        .route("/api/locations/{id}/availability", get(locations::availability))
        // Majors
        .route("/api/majors", post(majors::create).get(majors::list))
        .route("/api/majors/{id}", get(majors::detail).put(majors::update).delete(majors::remove))
        // Clubs, rosters, scores
        .route("/api/clubs", post(clubs::create).get(clubs::list))
        .route("/api/clubs/{id}", get(clubs::detail).put(clubs::update).delete(clubs::remove))
        .route("/api/clubs/{id}/members", post(clubs::add_member).get(clubs::members))
        .route("/api/clubs/{id}/members/{user_id}", delete(clubs::remove_member))
        .route("/api/clubs/{id}/score", get(clubs::score))
        .route("/api/scores", get(clubs::scores))
        // Members
        .route("/api/users", post(users::register).get(users::list))
        .route("/api/users/{id}", get(users::detail).put(users::update))
        .route("/api/users/{id}/dashboard", get(users::dashboard))
        // Wallets
        .route("/api/users/{id}/wallet", get(wallet::balance))
        .route("/api/users/{id}/wallet/transactions", get(wallet::transactions))
        .route("/api/users/{id}/wallet/adjust", post(wallet::adjust));

    if settings.features.redemptions {
        router = router
            .route("/api/redemptions", post(redemptions::place).get(redemptions::list))
            .route("/api/redemptions/{id}", get(redemptions::detail))
            .route("/api/redemptions/{id}/complete", post(redemptions::complete))
            .route("/api/redemptions/{id}/cancel", post(redemptions::cancel));
    }

    if settings.features.penalties {
        router = router
            .route("/api/penalties/rules", post(penalties::create_rule).get(penalties::list_rules))
            .route("/api/penalties/rules/{id}", get(penalties::rule_detail).put(penalties::update_rule).delete(penalties::delete_rule))
            .route("/api/penalties", post(penalties::issue))
            .route("/api/users/{id}/penalties", get(penalties::for_user))
            .route("/api/clubs/{id}/penalties", get(penalties::for_club));
    }

    if settings.features.chat {
        router = router
            .route("/api/clubs/{id}/chat/messages", post(chat::send).get(chat::window))
            .route("/api/clubs/{id}/chat/pins", post(chat::pin).get(chat::pinned))
            .route("/api/chat/messages/{id}", delete(chat::remove))
            .route("/api/chat/messages/{id}/reactions", post(chat::react).get(chat::reactions))
            .route("/api/chat/pins/{id}", delete(chat::unpin));
    }

    router
}
