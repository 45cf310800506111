//! Single-sum scheme over GF(2^k) or GF(p)

use super::inverse_position_exponent;
use crate::alphabet::{self, Alphabet};
use crate::field::{Field, FieldSpec, FiniteField};
use checkdigit_api::error::validate;
use checkdigit_api::{Checker, Result};
use checkdigit_params::scheme::base32check::{BASE32CHECK2, GF32_POLYNOMIAL};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters of a field-sum scheme
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SchemeConfig {
    /// Display name
    pub label: String,
    /// Field and primitive element
    pub field: FieldSpec,
    /// Check characters per check value, 1 or 2
    pub digit_count: usize,
    /// Payload and check alphabet
    pub alphabet: Alphabet,
}

impl SchemeConfig {
    /// Check the encoding constraints and return the field cardinality
    ///
    /// With one check character the alphabet must not be larger than the
    /// field; in every case the field must fit into `digit_count` characters.
    pub fn validate(&self) -> Result<u32> {
        validate::in_range(
            self.digit_count as u64,
            1,
            2,
            "digit_count",
            "must be 1 or 2",
        )?;
        let cardinality = self.field.cardinality()?;
        let size = self.alphabet.size() as u64;
        if self.digit_count == 1 {
            validate::parameter(
                size <= u64::from(cardinality),
                "alphabet",
                "must not be larger than the field with one check character",
            )?;
        }
        validate::parameter(
            u64::from(cardinality) <= size.pow(self.digit_count as u32),
            "field",
            "cardinality must be encodable in digit_count characters",
        )?;
        Ok(cardinality)
    }

    /// GF(32) with `1 + x² + x⁵`, one base32 check character
    pub fn base32check1() -> Self {
        Self {
            label: "base32check1".into(),
            field: FieldSpec::Binary {
                polynomial: GF32_POLYNOMIAL,
            },
            digit_count: 1,
            alphabet: alphabet::base32().clone(),
        }
    }

    /// GF(1021) with primitive element 1011, two base32 check characters
    pub fn base32check2() -> Self {
        Self {
            label: "base32check2".into(),
            field: FieldSpec::Prime {
                modulus: BASE32CHECK2.modulus,
                generator: BASE32CHECK2.generator,
            },
            digit_count: BASE32CHECK2.digit_count,
            alphabet: alphabet::base32().clone(),
        }
    }
}

/// Check-digit scheme computing one weighted field sum
#[derive(Clone, Debug)]
pub struct FieldScheme {
    label: String,
    field: Field,
    digit_count: usize,
    alphabet: Alphabet,
}

impl FieldScheme {
    /// Build the field tables for `config`
    pub fn new(config: SchemeConfig) -> Result<Self> {
        config.validate()?;
        let field = config.field.build()?;
        debug!(
            label = %config.label,
            cardinality = field.cardinality(),
            digit_count = config.digit_count,
            "constructed field scheme"
        );
        Ok(Self {
            label: config.label,
            field,
            digit_count: config.digit_count,
            alphabet: config.alphabet,
        })
    }

    /// The `base32check1` scheme
    pub fn base32check1() -> Result<Self> {
        Self::new(SchemeConfig::base32check1())
    }

    /// The `base32check2` scheme
    pub fn base32check2() -> Result<Self> {
        Self::new(SchemeConfig::base32check2())
    }

    /// Underlying field
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Payload and check alphabet
    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    /// Map the payload to field elements
    ///
    /// With two digits per element, symbols are read in pairs after padding
    /// an odd-length payload on the left with the zero symbol.
    pub fn elements(&self, payload: &str) -> Result<Vec<u32>> {
        let indices = self.alphabet.indices(payload)?;
        let q = u64::from(self.field.cardinality());
        let elements = match self.digit_count {
            1 => indices.into_iter().map(|a| a as u32).collect(),
            _ => {
                let size = self.alphabet.size() as u64;
                let pad = indices.len() % 2;
                let padded: Vec<usize> = std::iter::repeat(0)
                    .take(pad)
                    .chain(indices)
                    .collect();
                padded
                    .chunks_exact(2)
                    .map(|pair| ((pair[0] as u64 * size + pair[1] as u64) % q) as u32)
                    .collect()
            }
        };
        Ok(elements)
    }

    /// The check value as a field element
    pub fn check_value(&self, payload: &str) -> Result<u32> {
        let elements = self.elements(payload)?;
        let field = &self.field;
        let mut sum = field.zero();
        for (i, &a) in elements.iter().enumerate() {
            let term = field.scale_by_generator(a, i as u64 + 1)?;
            sum = field.add(sum, term)?;
        }
        let opposite = field.negate(sum)?;
        let exp = inverse_position_exponent(field.cardinality(), elements.len());
        Ok(field.scale_by_generator(opposite, exp)?)
    }

    fn encode(&self, value: u32) -> Result<String> {
        let value = value as usize;
        let size = self.alphabet.size();
        let digits = match self.digit_count {
            1 => vec![value],
            _ => vec![value / size, value % size],
        };
        Ok(self.alphabet.encode(digits)?)
    }
}

impl Checker for FieldScheme {
    fn name(&self) -> &str {
        &self.label
    }

    fn check_len(&self) -> usize {
        self.digit_count
    }

    fn compute(&self, payload: &str) -> Result<String> {
        let value = self.check_value(payload)?;
        self.encode(value)
    }
}
