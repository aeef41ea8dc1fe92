//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use chrono::NaiveTime;
use crate::utils::errors::{ClubHubError, Result};
use super::Settings;

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_server_config(&settings.server)?;
    validate_database_config(&settings.database)?;
    validate_redis_config(&settings.redis)?;
    validate_scheduling_config(&settings.scheduling)?;
    validate_scoring_config(&settings.scoring)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate HTTP server configuration
fn validate_server_config(config: &super::ServerConfig) -> Result<()> {
    if config.host.is_empty() {
        return Err(ClubHubError::Config(
            "Server host is required".to_string()
        ));
    }

    if config.port == 0 {
        return Err(ClubHubError::Config(
            "Server port must be greater than 0".to_string()
        ));
    }

    Ok(())
}

/// Validate database configuration
fn validate_database_config(config: &super::DatabaseConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ClubHubError::Config(
            "Database URL is required".to_string()
        ));
    }

    if config.max_connections == 0 {
        return Err(ClubHubError::Config(
            "Max connections must be greater than 0".to_string()
        ));
    }

    if config.min_connections > config.max_connections {
        return Err(ClubHubError::Config(
            "Min connections cannot be greater than max connections".to_string()
        ));
    }

    Ok(())
}

/// Validate Redis configuration
fn validate_redis_config(config: &super::RedisConfig) -> Result<()> {
    if config.url.is_empty() {
        return Err(ClubHubError::Config(
            "Redis URL is required".to_string()
        ));
    }

    Ok(())
}

/// Validate the booking grid configuration
fn validate_scheduling_config(config: &super::SchedulingConfig) -> Result<()> {
    let start = NaiveTime::parse_from_str(&config.day_start, "%H:%M")
        .map_err(|_| ClubHubError::Config(
            format!("Invalid scheduling day_start: {}", config.day_start)
        ))?;

    let end = NaiveTime::parse_from_str(&config.day_end, "%H:%M")
        .map_err(|_| ClubHubError::Config(
            format!("Invalid scheduling day_end: {}", config.day_end)
        ))?;

    if start >= end {
        return Err(ClubHubError::Config(
            "Scheduling day_start must be before day_end".to_string()
        ));
    }

    if config.slot_minutes == 0 || config.slot_minutes > 120 {
        return Err(ClubHubError::Config(
            "Slot granularity must be between 1 and 120 minutes".to_string()
        ));
    }

    let window = end.signed_duration_since(start).num_minutes() as u32;
    if window % config.slot_minutes != 0 {
        return Err(ClubHubError::Config(
            "Slot granularity must evenly divide the bookable window".to_string()
        ));
    }

    Ok(())
}

/// Validate scoring weights
fn validate_scoring_config(config: &super::ScoringConfig) -> Result<()> {
    if config.points_per_event <= 0 {
        return Err(ClubHubError::Config(
            "Points per event must be greater than 0".to_string()
        ));
    }

    if config.feedback_weight < 0.0 {
        return Err(ClubHubError::Config(
            "Feedback weight cannot be negative".to_string()
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(ClubHubError::Config(
            "Log level is required".to_string()
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(ClubHubError::Config(
            format!("Invalid log level: {}. Valid levels: {:?}", config.level, valid_levels)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(validate_settings(&settings).is_ok());
    }

    #[test]
    fn test_rejects_inverted_day_window() {
        let mut settings = Settings::default();
        settings.scheduling.day_start = "22:00".to_string();
        settings.scheduling.day_end = "06:00".to_string();
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_uneven_slot_granularity() {
        let mut settings = Settings::default();
        settings.scheduling.slot_minutes = 7;
        assert!(validate_settings(&settings).is_err());
    }

    #[test]
    fn test_rejects_bad_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "verbose".to_string();
        assert!(validate_settings(&settings).is_err());
    }
}
