//! Scoring configuration

use crate::error::{ScoringError, ScoringResult};
use checkdigit_params::scoring::{
    DEFAULT_ATTEMPTS_PER_PAYLOAD, DEFAULT_BATTERY_SIZE, DEFAULT_MAX_RETRIES,
    DEFAULT_PAYLOAD_LENGTH,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Parameters of a scoring run
///
/// Every field may be omitted from a configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringConfig {
    /// Random payloads per battery
    pub battery_size: usize,
    /// Tweaks applied to each payload
    pub attempts_per_payload: usize,
    /// Symbols per payload
    pub payload_length: usize,
    /// Seed of every random stream
    pub seed: u64,
    /// Extra attempts at producing a non-degenerate tweak
    pub max_retries: usize,
    /// Worker threads; rayon's default when unset
    pub threads: Option<usize>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            battery_size: DEFAULT_BATTERY_SIZE,
            attempts_per_payload: DEFAULT_ATTEMPTS_PER_PAYLOAD,
            payload_length: DEFAULT_PAYLOAD_LENGTH,
            seed: 0,
            max_retries: DEFAULT_MAX_RETRIES,
            threads: None,
        }
    }
}

// Builder methods
impl ScoringConfig {
    /// Set the number of random payloads per battery
    pub fn with_battery_size(mut self, battery_size: usize) -> Self {
        self.battery_size = battery_size;
        self
    }

    /// Set the number of tweaks applied to each payload
    pub fn with_attempts(mut self, attempts: usize) -> Self {
        self.attempts_per_payload = attempts;
        self
    }

    /// Set the payload length, in symbols
    pub fn with_payload_length(mut self, length: usize) -> Self {
        self.payload_length = length;
        self
    }

    /// Set the seed of every random stream
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the extra attempts allowed for a degenerate tweak
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Pin the worker pool to `threads` threads
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

impl ScoringConfig {
    /// A small run for smoke tests and parameter searches
    pub fn quick() -> Self {
        Self::default().with_battery_size(100).with_attempts(20)
    }

    /// Parse a TOML document
    pub fn from_toml_str(s: &str) -> ScoringResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a TOML file
    pub fn from_file(path: impl AsRef<Path>) -> ScoringResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Total trials per battery
    pub fn trial_count(&self) -> usize {
        self.battery_size * self.attempts_per_payload
    }

    /// Reject configurations that cannot produce an error rate
    pub fn validate(&self) -> ScoringResult<()> {
        if self.battery_size == 0 || self.attempts_per_payload == 0 {
            return Err(ScoringError::Config(
                "battery_size and attempts_per_payload must be positive".into(),
            ));
        }
        if self.payload_length == 0 {
            return Err(ScoringError::Config("payload_length must be positive".into()));
        }
        if self.battery_size > u32::MAX as usize {
            return Err(ScoringError::Config("battery_size must fit in 32 bits".into()));
        }
        Ok(())
    }
}
