//! Runtime configuration read from the environment.
//!
//! - `RECYCLE_SEED`: RNG seed (default: derived from the system clock)
//! - `RECYCLE_FRAME_MS`: render/poll interval in ms (default: 16)
//! - `RECYCLE_LOG_PATH`: log file; logging is off when unset or empty
//! - `RECYCLE_LOG`: tracing filter directive (default: "info")
//!
//! Unparsable values fall back to their defaults.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::types::FRAME_MS;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: Option<u32>,
    pub frame_ms: u64,
    pub log_path: Option<String>,
    pub log_filter: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            frame_ms: FRAME_MS,
            log_path: None,
            log_filter: "info".to_string(),
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup (environment, test fixtures).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let seed = lookup("RECYCLE_SEED").and_then(|s| s.trim().parse().ok());

        let frame_ms = lookup("RECYCLE_FRAME_MS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .map(|ms| ms.max(1))
            .unwrap_or(defaults.frame_ms);

        let log_path = lookup("RECYCLE_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup("RECYCLE_LOG")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.log_filter);

        Self {
            seed,
            frame_ms,
            log_path,
            log_filter,
        }
    }

    /// Configured seed, or one derived from the current time.
    pub fn resolve_seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
                .unwrap_or(1)
        })
    }
}
