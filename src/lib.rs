//! # checkdigit
//!
//! Check characters for human-typed identifiers, computed over finite
//! fields, and a harness that scores check-digit schemes against simulated
//! transcription errors.
//!
//! ## Usage
//!
//! ```toml
//! [dependencies]
//! checkdigit = "0.4"
//! ```
//!
//! ```
//! use checkdigit::prelude::*;
//!
//! let scheme = FieldScheme::base32check1()?;
//! let full = scheme.append_check("HELLOWORLD")?;
//! assert!(scheme.validate(&full)?);
//! # Ok::<(), checkdigit::api::Error>(())
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `fuzz` (default): the scoring harness
//! - `serde`: serialisable scheme configuration
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`api`]: the `Checker` trait and error types
//! - [`params`]: field parameters, alphabets and battery weights
//! - [`algorithms`]: fields, schemes, ISO 7064 baselines and the scheme catalog
//! - `fuzz`: error models, batteries and the scorer

// Core re-exports (always available)
pub use checkdigit_algorithms as algorithms;
pub use checkdigit_api as api;
pub use checkdigit_params as params;

// Feature-gated re-exports
#[cfg(feature = "fuzz")]
pub use checkdigit_fuzz as fuzz;

/// Common imports for checkdigit users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, Result};

    // Re-export core traits
    pub use crate::api::{Checker, CheckerExt};

    // Schemes
    pub use crate::algorithms::{
        catalog, Alphabet, FieldScheme, FieldSpec, FoldScheme, Iso7064Hybrid, Iso7064Pure,
        NumericAdapter, SchemeConfig,
    };

    #[cfg(feature = "fuzz")]
    pub use crate::fuzz::{FuzzScorer, ScoreReport, ScoringConfig, Subject};
}
