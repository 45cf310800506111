//! The scheme being scored

use checkdigit_algorithms::catalog::CatalogEntry;
use checkdigit_algorithms::{Alphabet, Checker};

/// A checker together with what the scorer needs to know about it
#[derive(Clone, Copy)]
pub struct Subject<'a> {
    /// Scheme under test
    pub checker: &'a dyn Checker,
    /// Alphabet random payloads are drawn from
    pub payload_alphabet: &'a Alphabet,
    /// Information per check character, for the detection factor
    pub bits_per_char: f64,
}

impl<'a> Subject<'a> {
    /// Score `checker` on payloads over `payload_alphabet`
    ///
    /// Check characters are assumed to carry as much information as payload
    /// symbols.
    pub fn new(checker: &'a dyn Checker, payload_alphabet: &'a Alphabet) -> Self {
        Self {
            checker,
            payload_alphabet,
            bits_per_char: payload_alphabet.bits_per_char(),
        }
    }

    /// Use the payload alphabet and bit count registered in the catalog
    pub fn from_entry(entry: &'a CatalogEntry, checker: &'a dyn Checker) -> Self {
        Self {
            checker,
            payload_alphabet: entry.payload_alphabet(),
            bits_per_char: entry.bits_per_char(),
        }
    }

    /// Override the information per check character
    pub fn with_bits_per_char(mut self, bits: f64) -> Self {
        self.bits_per_char = bits;
        self
    }

    /// Name of the scheme
    pub fn label(&self) -> &str {
        self.checker.name()
    }
}

impl std::fmt::Debug for Subject<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subject")
            .field("checker", &self.checker.name())
            .field("payload_alphabet", self.payload_alphabet)
            .field("bits_per_char", &self.bits_per_char)
            .finish()
    }
}
