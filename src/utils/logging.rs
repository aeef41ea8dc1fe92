//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the ClubHub application.

use tracing::{info, warn, debug};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "clubhub.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(())
}

/// Log event lifecycle actions with structured data
pub fn log_event_action(event_id: i64, action: &str, user_id: Option<i64>, details: Option<&str>) {
    info!(
        event_id = event_id,
        action = action,
        user_id = user_id,
        details = details,
        "Event action performed"
    );
}

/// Log wallet movements
pub fn log_wallet_movement(user_id: i64, amount: i64, kind: &str, reference: Option<&str>) {
    info!(
        user_id = user_id,
        amount = amount,
        kind = kind,
        reference = reference,
        "Wallet movement recorded"
    );
}

/// Log penalty issuance
pub fn log_penalty_issued(rule_id: i64, user_id: i64, issued_by: Option<i64>) {
    warn!(
        rule_id = rule_id,
        user_id = user_id,
        issued_by = issued_by,
        "Penalty issued"
    );
}

/// Log availability lookups that fell back to an empty conflict set
pub fn log_availability_fallback(location_id: i64, date: &str, error: &str) {
    warn!(
        location_id = location_id,
        date = date,
        error = error,
        "Availability lookup failed, treating as no existing bookings"
    );
}

/// Log database operations
pub fn log_database_operation(operation: &str, table: &str, duration_ms: u64, success: bool) {
    if success {
        debug!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation completed"
        );
    } else {
        tracing::error!(
            operation = operation,
            table = table,
            duration_ms = duration_ms,
            "Database operation failed"
        );
    }
}
