//! Transcription-error scoring harness
//!
//! Measures how often a check-digit scheme fails to notice the kind of
//! mistakes people make when copying identifiers, and condenses the result
//! into one weighted detection rate.
//!
//! ```no_run
//! use checkdigit_algorithms::{alphabet, FieldScheme};
//! use checkdigit_fuzz::{FuzzScorer, ScoringConfig, Subject};
//!
//! let scheme = FieldScheme::base32check1()?;
//! let scorer = FuzzScorer::new(ScoringConfig::default().with_seed(1))?;
//! let report = scorer.score(&Subject::new(&scheme, alphabet::base32()))?;
//! println!("{report}");
//! # Ok::<(), checkdigit_fuzz::ScoringError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod battery;
pub mod collision;
pub mod config;
pub mod error;
pub mod error_model;
pub mod optimize;
pub mod report;
pub mod scorer;
pub mod subject;

pub use battery::{standard_batteries, Battery};
pub use collision::Collision;
pub use config::ScoringConfig;
pub use error::{ScoringError, ScoringResult};
pub use error_model::{ErrorKind, ErrorModel, Tweak, TweakParam};
pub use report::{BatteryStats, ScoreReport};
pub use scorer::FuzzScorer;
pub use subject::Subject;
