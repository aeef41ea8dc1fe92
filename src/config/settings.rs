//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub scheduling: SchedulingConfig,
    pub scoring: ScoringConfig,
    pub logging: LoggingConfig,
    pub features: FeaturesConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Redis configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RedisConfig {
    pub url: String,
    pub prefix: String,
    pub ttl_seconds: u64,
}

/// Booking grid configuration for the slot availability checker
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SchedulingConfig {
    /// First bookable boundary of the day, "HH:MM"
    pub day_start: String,
    /// Last bookable boundary of the day, "HH:MM"
    pub day_end: String,
    /// Slot granularity in minutes
    pub slot_minutes: u32,
    /// TTL for cached availability responses
    pub cache_ttl_seconds: u64,
}

/// Activity scoring weights
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    pub points_per_event: i64,
    pub feedback_weight: f64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
    pub max_file_size: String,
    pub max_files: u32,
}

/// Feature flags configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FeaturesConfig {
    pub redemptions: bool,
    pub penalties: bool,
    pub chat: bool,
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("CLUBHUB"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::ClubHubError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
            },
            database: DatabaseConfig {
                url: "postgresql://localhost/clubhub".to_string(),
                max_connections: 10,
                min_connections: 1,
            },
            redis: RedisConfig {
                url: "redis://localhost:6379".to_string(),
                prefix: "clubhub:".to_string(),
                ttl_seconds: 3600,
            },
            scheduling: SchedulingConfig {
                day_start: "06:00".to_string(),
                day_end: "22:00".to_string(),
                slot_minutes: 30,
                cache_ttl_seconds: 60,
            },
            scoring: ScoringConfig {
                points_per_event: 10,
                feedback_weight: 4.0,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/clubhub".to_string(),
                max_file_size: "10MB".to_string(),
                max_files: 5,
            },
            features: FeaturesConfig {
                redemptions: true,
                penalties: true,
                chat: true,
            },
        }
    }
}
