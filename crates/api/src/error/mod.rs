//! Error handling for the check-digit ecosystem

pub mod types;
pub mod validate;

// Re-export the primary error types and result
pub use types::{AlphabetError, Error, FieldError, Result};

// Re-export validation utilities module (not as a nested function)
pub use validate as validation;

// Specialized result types for different operations
/// Result type for finite-field arithmetic
pub type FieldResult<T> = core::result::Result<T, FieldError>;
/// Result type for alphabet codec operations
pub type AlphabetResult<T> = core::result::Result<T, AlphabetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_error_converts_into_error() {
        let err: Error = AlphabetError::UnknownCharacter {
            character: '!',
            position: 3,
        }
        .into();
        assert!(matches!(err, Error::Alphabet(_)));
        assert_eq!(
            err.to_string(),
            "alphabet error: unknown character '!' at position 3"
        );
    }

    #[test]
    fn field_error_converts_into_error() {
        let err: Error = FieldError::OutOfRange {
            operand: 40,
            cardinality: 32,
        }
        .into();
        assert!(matches!(err, Error::Field(FieldError::OutOfRange { .. })));
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn parameter_helper_formats_name_and_reason() {
        let err = Error::param("digit_count", "must be 1 or 2");
        assert_eq!(
            err.to_string(),
            "invalid parameter 'digit_count': must be 1 or 2"
        );
    }
}
