//! Constants for the transcription-error scoring harness

pub mod weights;

/// Number of random payloads generated per battery
pub const DEFAULT_BATTERY_SIZE: usize = 1000;

/// Number of tweaks applied to each payload
pub const DEFAULT_ATTEMPTS_PER_PAYLOAD: usize = 100;

/// Length of generated payloads, in symbols
pub const DEFAULT_PAYLOAD_LENGTH: usize = 20;

/// Attempts made to obtain a non-degenerate tweak before skipping a trial
pub const DEFAULT_MAX_RETRIES: usize = 8;
