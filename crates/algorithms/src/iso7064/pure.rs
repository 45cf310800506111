//! Pure systems MOD (modulus, radix)

use crate::alphabet::Alphabet;
use checkdigit_api::error::validate;
use checkdigit_api::{Checker, Result};

/// Pure system; two check characters when the modulus exceeds the alphabet
#[derive(Clone, Debug)]
pub struct Iso7064Pure {
    label: String,
    alphabet: Alphabet,
    modulus: u32,
    radix: u32,
}

impl Iso7064Pure {
    /// Pure system with the alphabet size as radix
    pub fn new(alphabet: Alphabet, modulus: u32) -> Result<Self> {
        let radix = alphabet.size() as u32;
        Self::with_radix(alphabet, modulus, radix)
    }

    /// Pure system with an explicit radix
    pub fn with_radix(alphabet: Alphabet, modulus: u32, radix: u32) -> Result<Self> {
        let size = alphabet.size() as u64;
        validate::parameter(modulus >= 2, "modulus", "must be at least 2")?;
        validate::in_range(
            u64::from(radix),
            2,
            size,
            "radix",
            "must be between 2 and the alphabet size",
        )?;
        if u64::from(modulus) > size {
            validate::parameter(
                u64::from(modulus - 1) / u64::from(radix) < size,
                "modulus",
                "check value does not fit in two characters",
            )?;
        }
        Ok(Self {
            label: format!("mod{modulus}-{radix}"),
            alphabet,
            modulus,
            radix,
        })
    }

    /// Replace the display name
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    fn two_chars(&self) -> bool {
        self.modulus as usize > self.alphabet.size()
    }
}

impl Checker for Iso7064Pure {
    fn name(&self) -> &str {
        &self.label
    }

    fn check_len(&self) -> usize {
        if self.two_chars() {
            2
        } else {
            1
        }
    }

    fn compute(&self, payload: &str) -> Result<String> {
        let modulus = u64::from(self.modulus);
        let radix = u64::from(self.radix);
        let mut sum = 0u64;
        for (position, c) in payload.chars().enumerate() {
            let a = self.alphabet.index_at(c, position)? as u64;
            sum = (sum * radix + a) % modulus;
        }
        // Room for the check characters, which count as zero symbols.
        for _ in 0..self.check_len() {
            sum = (sum * radix) % modulus;
        }
        let code = ((modulus + 1 - sum) % modulus) as usize;
        let radix = radix as usize;
        let digits = if self.two_chars() {
            vec![code / radix, code % radix]
        } else {
            vec![code]
        };
        Ok(self.alphabet.encode(digits)?)
    }
}
