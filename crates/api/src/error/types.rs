//! Error type definitions for check-digit operations

use std::borrow::Cow;
use thiserror::Error;

/// Errors raised by the alphabet codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlphabetError {
    /// A payload character is absent from the configured alphabet
    #[error("unknown character {character:?} at position {position}")]
    UnknownCharacter {
        /// Offending character
        character: char,
        /// Zero-based character position in the payload
        position: usize,
    },

    /// A symbol index has no character in the alphabet
    #[error("symbol index {index} is outside an alphabet of {size} characters")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Alphabet size
        size: usize,
    },

    /// The same character appears twice in an alphabet definition
    #[error("character {0:?} appears more than once in the alphabet")]
    DuplicateCharacter(char),

    /// An alphabet with no characters
    #[error("alphabet is empty")]
    Empty,
}

/// Errors raised by finite-field arithmetic
///
/// In a correctly configured scheme these are unreachable; they indicate a
/// parameter bug rather than bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// An operand or table index is not below the field cardinality
    #[error("operand {operand} is out of range for a field of cardinality {cardinality}")]
    OutOfRange {
        /// Offending operand or table index
        operand: u64,
        /// Field cardinality
        cardinality: u32,
    },

    /// The additive identity has no multiplicative inverse
    #[error("zero has no multiplicative inverse")]
    NoInverse,

    /// The element or polynomial does not generate the multiplicative group
    #[error("element {element} has order {order}, expected {expected}")]
    NotPrimitive {
        /// Candidate generator (integer or polynomial bitmask)
        element: u32,
        /// Order actually observed
        order: u32,
        /// Order of the multiplicative group
        expected: u32,
    },
}

/// Primary error type for check-digit operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Alphabet codec failure
    #[error("alphabet error: {0}")]
    Alphabet(#[from] AlphabetError),

    /// Finite-field arithmetic failure
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// Invalid scheme or field parameter
    #[error("invalid parameter '{name}': {reason}")]
    Parameter {
        /// Name of the invalid parameter
        name: Cow<'static, str>,
        /// Reason why the parameter is invalid
        reason: Cow<'static, str>,
    },
}

impl Error {
    /// Shorthand to create a Parameter error
    pub fn param<N: Into<Cow<'static, str>>, R: Into<Cow<'static, str>>>(
        name: N,
        reason: R,
    ) -> Self {
        Error::Parameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for check-digit operations
pub type Result<T> = core::result::Result<T, Error>;
