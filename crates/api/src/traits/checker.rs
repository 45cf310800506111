//! Check-digit capability trait
//!
//! Every scheme in the workspace, field-based or not, is used through this
//! trait. The scoring harness only ever sees a `Checker`.

use crate::Result;
use std::sync::Arc;

/// Core trait for check-digit schemes
///
/// A checker appends `check_len()` characters to a payload so that a fixed
/// relation holds over the whole string, and recognises strings for which the
/// relation holds.
///
/// # Thread Safety
///
/// Checkers hold only immutable precomputed state, so they must be `Send` and
/// `Sync`; the scoring harness shares one instance across worker threads.
pub trait Checker: Send + Sync {
    /// Returns the name of this scheme
    fn name(&self) -> &str;

    /// Number of check characters appended by [`Checker::compute`]
    fn check_len(&self) -> usize;

    /// Compute the check characters for a payload
    ///
    /// # Errors
    ///
    /// Returns an alphabet error if the payload contains a character the
    /// scheme does not know.
    fn compute(&self, payload: &str) -> Result<String>;

    /// Validate a payload that ends with its check characters
    ///
    /// Recomputes the check over everything except the trailing
    /// `check_len()` characters and compares the result for exact equality
    /// with that suffix. Input shorter than the check is never valid.
    fn validate(&self, payload: &str) -> Result<bool> {
        let total = payload.chars().count();
        let check_len = self.check_len();
        if total < check_len {
            return Ok(false);
        }
        let split = payload
            .char_indices()
            .nth(total - check_len)
            .map(|(offset, _)| offset)
            .unwrap_or(payload.len());
        let (body, check) = payload.split_at(split);
        Ok(self.compute(body)? == check)
    }
}

/// Convenience operations available on every checker
pub trait CheckerExt: Checker {
    /// Return the payload with its check characters appended
    fn append_check(&self, payload: &str) -> Result<String> {
        let check = self.compute(payload)?;
        let mut out = String::with_capacity(payload.len() + check.len());
        out.push_str(payload);
        out.push_str(&check);
        Ok(out)
    }
}

impl<C: Checker + ?Sized> CheckerExt for C {}

impl<C: Checker + ?Sized> Checker for Box<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn check_len(&self) -> usize {
        (**self).check_len()
    }

    fn compute(&self, payload: &str) -> Result<String> {
        (**self).compute(payload)
    }

    fn validate(&self, payload: &str) -> Result<bool> {
        (**self).validate(payload)
    }
}

impl<C: Checker + ?Sized> Checker for Arc<C> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn check_len(&self) -> usize {
        (**self).check_len()
    }

    fn compute(&self, payload: &str) -> Result<String> {
        (**self).compute(payload)
    }

    fn validate(&self, payload: &str) -> Result<bool> {
        (**self).validate(payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sum of digit values mod 10, one check digit
    struct DigitSum;

    impl Checker for DigitSum {
        fn name(&self) -> &str {
            "digit-sum"
        }

        fn check_len(&self) -> usize {
            1
        }

        fn compute(&self, payload: &str) -> Result<String> {
            let sum: u32 = payload.chars().filter_map(|c| c.to_digit(10)).sum();
            Ok(((10 - sum % 10) % 10).to_string())
        }
    }

    #[test]
    fn default_validate_splits_off_the_suffix() {
        let checker = DigitSum;
        let full = checker.append_check("1234").unwrap();
        assert_eq!(full, "12340");
        assert!(checker.validate(&full).unwrap());
        assert!(!checker.validate("12341").unwrap());
    }

    #[test]
    fn short_input_is_never_valid() {
        assert!(!DigitSum.validate("").unwrap());
    }

    #[test]
    fn boxed_and_shared_checkers_delegate() {
        let boxed: Box<dyn Checker> = Box::new(DigitSum);
        assert_eq!(boxed.compute("19").unwrap(), "0");
        let shared: Arc<dyn Checker> = Arc::new(DigitSum);
        assert!(shared.validate("190").unwrap());
        assert_eq!(shared.name(), "digit-sum");
    }
}
