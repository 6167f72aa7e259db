use std::time::Duration;

use anyhow::{Context, Result};

use crate::cache::{DEFAULT_SWEEP_THRESHOLD, DEFAULT_TTL};

/// Core configuration loaded from environment variables.
/// Every variable has a default, so `from_env` only fails on unparseable values.
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Time-to-live for cached analysis results.
    pub cache_ttl: Duration,
    /// Entry count past which a write sweeps expired entries.
    pub cache_sweep_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_TTL,
            cache_sweep_threshold: DEFAULT_SWEEP_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let cache_ttl_secs = match std::env::var("CACHE_TTL_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .context("CACHE_TTL_SECS must be a whole number of seconds")?,
            Err(_) => DEFAULT_TTL.as_secs(),
        };

        let cache_sweep_threshold = match std::env::var("CACHE_SWEEP_THRESHOLD") {
            Ok(v) => v
                .parse::<usize>()
                .context("CACHE_SWEEP_THRESHOLD must be a non-negative integer")?,
            Err(_) => DEFAULT_SWEEP_THRESHOLD,
        };

        Ok(Self {
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            cache_sweep_threshold,
        })
    }
}
