//! Shared test infrastructure
//!
//! Helpers usable without a live database or cache: environment setup,
//! a temp-dir test context, and data builders.

#![allow(dead_code)]

pub mod test_data;

pub use test_data::*;

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize test environment
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Test context owning a scratch directory
pub struct TestContext {
    pub temp_dir: tempfile::TempDir,
}

impl TestContext {
    pub fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        init_test_env();

        Ok(Self {
            temp_dir: tempfile::tempdir()?,
        })
    }

    /// Scratch directory path
    pub fn temp_path(&self) -> &std::path::Path {
        self.temp_dir.path()
    }
}

/// A pool that never connects; queries against it fail fast.
/// Used to exercise degraded-backend paths.
pub fn unreachable_pool() -> ClubHub::database::DatabasePool {
    ClubHub::database::create_lazy_pool("postgresql://127.0.0.1:9/clubhub_unreachable")
        .expect("lazy pool builds without a server")
}
