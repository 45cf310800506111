//! Check-digit computation engine
//!
//! This crate implements the arithmetic and the schemes of the checkdigit
//! library:
//!
//! - [`alphabet`]: ordered symbol sets and the character/index codec
//! - [`field`]: GF(2^k) and GF(p) arithmetic backed by precomputed power tables
//! - [`scheme`]: field-sum check-digit schemes, including the two-stage fold
//! - [`iso7064`]: ISO/IEC 7064 pure and hybrid systems used as baselines
//! - [`adapter`]: wrappers that let numeric schemes consume alphanumeric payloads
//! - [`catalog`]: the named schemes known to the CLI and the scorer
//!
//! Every scheme implements [`Checker`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module re-exports
pub use checkdigit_api::error::validate;
pub use checkdigit_api::{AlphabetError, Checker, CheckerExt, Error, FieldError, Result};

pub mod alphabet;
pub use alphabet::Alphabet;

pub mod field;
pub use field::{BinaryField, Field, FieldSpec, FiniteField, PowerTable, PrimeField};

pub mod scheme;
pub use scheme::{FieldScheme, FoldDigest, FoldScheme, SchemeConfig};

pub mod iso7064;
pub use iso7064::{Iso7064Hybrid, Iso7064Pure};

pub mod adapter;
pub use adapter::NumericAdapter;

pub mod catalog;
pub use catalog::CatalogEntry;
