//! Run numeric schemes on alphanumeric payloads
//!
//! Letters are replaced by two-digit numbers before the inner scheme sees the
//! payload: `A` becomes `10`, `B` becomes `11`, up to `Z` as `35`. This is the
//! IBAN convention.

use checkdigit_api::{Checker, Result};

/// Expand `A..Z` into `10..35`, leaving every other character in place
pub fn letters_to_digits(payload: &str) -> String {
    let mut out = String::with_capacity(payload.len() * 2);
    for c in payload.chars() {
        if c.is_ascii_uppercase() {
            let value = u32::from(c) - u32::from('A') + 10;
            out.push_str(&value.to_string());
        } else {
            out.push(c);
        }
    }
    out
}

/// Wraps a numeric checker so it accepts letters
///
/// Error positions reported by the inner checker refer to the expanded
/// payload.
#[derive(Clone, Debug)]
pub struct NumericAdapter<C> {
    label: String,
    inner: C,
}

impl<C: Checker> NumericAdapter<C> {
    /// Wrap `inner`, keeping its name
    pub fn new(inner: C) -> Self {
        Self {
            label: inner.name().to_string(),
            inner,
        }
    }

    /// Replace the display name
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The wrapped checker
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Checker> Checker for NumericAdapter<C> {
    fn name(&self) -> &str {
        &self.label
    }

    fn check_len(&self) -> usize {
        self.inner.check_len()
    }

    fn compute(&self, payload: &str) -> Result<String> {
        self.inner.compute(&letters_to_digits(payload))
    }
}
