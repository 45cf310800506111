//! Public API traits and types for the checkdigit library
//!
//! This crate provides the public API surface shared by every check-digit
//! scheme: the [`Checker`] capability trait and the error taxonomy used
//! throughout the workspace.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod error;
pub mod traits;

// Re-export commonly used items at the crate level for convenience
pub use error::{AlphabetError, Error, FieldError, Result};

// Re-export all traits from the traits module
pub use traits::{Checker, CheckerExt};

// Re-export trait modules for direct access
pub use traits::checker;
