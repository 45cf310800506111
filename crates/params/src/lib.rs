//! Constant parameter sets for the checkdigit library
//!
//! Scheme parameters (field polynomials, primitive elements, moduli) live in
//! [`scheme`]; the empirical transcription-error weights used for scoring
//! live in [`scoring`].

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod scheme;
pub mod scoring;
