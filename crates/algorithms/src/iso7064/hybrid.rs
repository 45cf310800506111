//! Hybrid systems MOD (M+1, M)

use crate::alphabet::Alphabet;
use checkdigit_api::error::validate;
use checkdigit_api::{Checker, Result};

/// Hybrid system with modulus equal to the alphabet size
#[derive(Clone, Debug)]
pub struct Iso7064Hybrid {
    label: String,
    alphabet: Alphabet,
}

impl Iso7064Hybrid {
    /// MOD (size+1, size) over `alphabet`
    pub fn new(alphabet: Alphabet) -> Result<Self> {
        validate::parameter(
            alphabet.size() >= 2,
            "alphabet",
            "needs at least two symbols",
        )?;
        let m = alphabet.size();
        Ok(Self {
            label: format!("mod{}-{}", m + 1, m),
            alphabet,
        })
    }

    /// Replace the display name
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// The modulus `M`
    pub fn modulus(&self) -> usize {
        self.alphabet.size()
    }
}

impl Checker for Iso7064Hybrid {
    fn name(&self) -> &str {
        &self.label
    }

    fn check_len(&self) -> usize {
        1
    }

    fn compute(&self, payload: &str) -> Result<String> {
        let m = self.modulus();
        let mut sum = m;
        for (position, c) in payload.chars().enumerate() {
            let a = self.alphabet.index_at(c, position)?;
            let remainder = sum % (m + 1) + a;
            sum = (remainder % m) * 2;
            if sum == 0 {
                sum = m * 2;
            }
        }
        // The remainder including the check character is then 1.
        let check = (m + 1 - sum % (m + 1)) % m;
        Ok(self.alphabet.to_char(check)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet;

    #[test]
    fn mod17_16() {
        let scheme = Iso7064Hybrid::new(alphabet::base16().clone()).unwrap();
        assert_eq!(scheme.name(), "mod17-16");
        assert_eq!(scheme.compute("D98989898909898").unwrap(), "B");
        assert!(scheme.validate("D98989898909898B").unwrap());
        for c in "0123456789ACDEF".chars() {
            assert!(!scheme.validate(&format!("D98989898909898{c}")).unwrap());
        }
    }

    #[test]
    fn mod11_10() {
        let scheme = Iso7064Hybrid::new(alphabet::base10().clone()).unwrap();
        assert_eq!(scheme.compute("079").unwrap(), "2");
        assert!(scheme.validate("0792").unwrap());
        for c in "013456789ABCDEF".chars() {
            assert!(!scheme.validate(&format!("079{c}")).unwrap());
        }
    }

    #[test]
    fn rejects_foreign_characters() {
        let scheme = Iso7064Hybrid::new(alphabet::base10().clone()).unwrap();
        assert!(scheme.compute("12A").is_err());
    }

    #[test]
    fn label_override() {
        let scheme = Iso7064Hybrid::new(alphabet::base36().clone())
            .unwrap()
            .with_label("MOD 37-36");
        assert_eq!(scheme.name(), "MOD 37-36");
        assert_eq!(scheme.modulus(), 36);
    }
}
