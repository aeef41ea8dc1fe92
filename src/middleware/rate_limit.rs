//! Rate limiting middleware
//!
//! This module provides rate limiting functionality to prevent abuse
//! and ensure fair usage of the API. Requests are tracked per client
//! address over a sliding window with a small burst allowance.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use axum::extract::{ConnectInfo, Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, warn};

/// Rate limit configuration
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    /// Maximum requests per window
    pub max_requests: u32,
    /// Time window duration
    pub window_duration: Duration,
    /// Burst allowance (extra requests allowed in short bursts)
    pub burst_allowance: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 60,
            window_duration: Duration::from_secs(60),
            burst_allowance: 10,
        }
    }
}

/// Rate limit entry for tracking client requests
#[derive(Debug, Clone)]
struct RateLimitEntry {
    requests: Vec<Instant>,
    burst_used: u32,
    last_reset: Instant,
}

impl RateLimitEntry {
    fn new() -> Self {
        Self {
            requests: Vec::new(),
            burst_used: 0,
            last_reset: Instant::now(),
        }
    }

    /// Clean up old requests outside the window
    fn cleanup(&mut self, window_duration: Duration) {
        let cutoff = Instant::now() - window_duration;
        self.requests.retain(|&time| time > cutoff);

        if self.last_reset.elapsed() > window_duration {
            self.burst_used = 0;
            self.last_reset = Instant::now();
        }
    }

    /// Check if a request is allowed and record it
    fn is_allowed(&mut self, config: &RateLimitConfig) -> bool {
        self.cleanup(config.window_duration);

        let current_requests = self.requests.len() as u32;

        if current_requests < config.max_requests {
            self.requests.push(Instant::now());
            return true;
        }

        if self.burst_used < config.burst_allowance {
            self.burst_used += 1;
            self.requests.push(Instant::now());
            return true;
        }

        false
    }
}

/// Shared rate limiter state
#[derive(Debug, Clone)]
pub struct RateLimiter {
    entries: Arc<Mutex<HashMap<String, RateLimitEntry>>>,
    config: RateLimitConfig,
}

impl RateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            config,
        }
    }

    /// Check whether a request from `key` is allowed right now
    pub fn check(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().expect("rate limiter lock poisoned");
        let entry = entries.entry(key.to_string()).or_insert_with(RateLimitEntry::new);
        let allowed = entry.is_allowed(&self.config);

        if !allowed {
            warn!(client = %key, "Rate limit exceeded");
        }

        allowed
    }
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(RateLimitConfig::default())
    }
}

/// axum middleware applying the shared limiter per client address
pub async fn rate_limit(
    State(limiter): State<Arc<RateLimiter>>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let key = addr.ip().to_string();

    if !limiter.check(&key) {
        return StatusCode::TOO_MANY_REQUESTS.into_response();
    }

    debug!(client = %key, "Request admitted");
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_up_to_limit() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 3,
            window_duration: Duration::from_secs(60),
            burst_allowance: 0,
        });

        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(limiter.check("10.0.0.1"));
        assert!(!limiter.check("10.0.0.1"));
    }

    #[test]
    fn test_burst_allowance_extends_limit() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_secs(60),
            burst_allowance: 2,
        });

        assert!(limiter.check("10.0.0.2"));
        assert!(limiter.check("10.0.0.2"));
        assert!(limiter.check("10.0.0.2"));
        assert!(!limiter.check("10.0.0.2"));
    }

    #[test]
    fn test_clients_tracked_independently() {
        let limiter = RateLimiter::new(RateLimitConfig {
            max_requests: 1,
            window_duration: Duration::from_secs(60),
            burst_allowance: 0,
        });

        assert!(limiter.check("10.0.0.3"));
        assert!(!limiter.check("10.0.0.3"));
        assert!(limiter.check("10.0.0.4"));
    }
}
