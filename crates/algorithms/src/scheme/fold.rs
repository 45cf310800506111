//! Two-sum GF(32) scheme with a parity bit
//!
//! Two weighted sums are taken over GF(32): one over every symbol, one over
//! the symbols at even positions with halved weights. The first check
//! character carries the first sum's check value, the second one carries the
//! second sum's check value with its low bit replaced by the payload length
//! parity.
//!
//! The exponent arithmetic is kept exactly as the scheme was published,
//! including a `+32` correction for negative remainders. For lengths where
//! that correction lands on exponent 31 the power table has no entry, and a
//! nonzero sum fails with `FieldError::OutOfRange`.
//!
//! A secondary value modulo 1007 is derived alongside (see
//! [`FoldDigest::fold`]); it is not part of the emitted characters.

use crate::alphabet::{self, Alphabet};
use crate::field::{BinaryField, FiniteField};
use checkdigit_api::error::{validate, FieldResult};
use checkdigit_api::{Checker, Result};
use checkdigit_params::scheme::base32check::{FoldSchemeParams, BASE32CHECK_FOLD};
use tracing::debug;

/// Intermediate values of one fold computation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FoldDigest {
    /// Check value of the full sum
    pub code1: u32,
    /// Check value of the even-position sum
    pub code2: u32,
    /// Payload length modulo 2
    pub parity: u32,
    /// Secondary value modulo the fold modulus
    pub fold: u32,
}

impl FoldDigest {
    /// The emitted ten-bit value
    pub fn value(&self) -> u32 {
        (self.code1 << 5) + self.low()
    }

    /// The second emitted symbol
    pub fn low(&self) -> u32 {
        (self.code2 & !1) | self.parity
    }
}

/// The `base32check-fold` scheme
#[derive(Clone, Debug)]
pub struct FoldScheme {
    field: BinaryField,
    alphabet: Alphabet,
    fold_modulus: u32,
    fold_radix: u32,
}

impl FoldScheme {
    /// Build the scheme from its parameters
    pub fn new(params: &FoldSchemeParams) -> Result<Self> {
        let field = BinaryField::new(params.polynomial)?;
        validate::parameter(
            field.cardinality() == 32,
            "polynomial",
            "the fold scheme works over GF(32)",
        )?;
        validate::parameter(
            params.fold_modulus > 1,
            "fold_modulus",
            "must be greater than 1",
        )?;
        debug!(
            polynomial = params.polynomial,
            fold_modulus = params.fold_modulus,
            "constructed fold scheme"
        );
        Ok(Self {
            field,
            alphabet: alphabet::base32().clone(),
            fold_modulus: params.fold_modulus,
            fold_radix: params.fold_radix,
        })
    }

    /// The published parameter set
    pub fn base32check_fold() -> Result<Self> {
        Self::new(&BASE32CHECK_FOLD)
    }

    /// Run the computation and return every intermediate value
    pub fn digest(&self, payload: &str) -> Result<FoldDigest> {
        let indices = self.alphabet.indices(payload)?;
        let field = &self.field;
        let n = indices.len();

        let mut sum1 = 0u32;
        let mut sum2 = 0u32;
        let mut fold = 0u64;
        let modulus = u64::from(self.fold_modulus);
        for (i, &a) in indices.iter().enumerate() {
            let a = a as u32;
            sum1 ^= field.scale_by_generator(a, i as u64 + 1)?;
            if i % 2 == 0 {
                sum2 ^= field.scale_by_generator(a, (i / 2) as u64 + 1)?;
            }
            fold = (fold * u64::from(self.fold_radix) + u64::from(a)) % modulus;
        }

        let code1 = self.solve(sum1, n)?;
        let code2 = self.solve(sum2, n.div_ceil(2))?;

        fold = (fold * u64::from(self.fold_radix) + u64::from(code1)) % modulus;
        fold = (modulus + 1 - fold % modulus) % modulus;

        Ok(FoldDigest {
            code1,
            code2,
            parity: (n % 2) as u32,
            fold: fold as u32,
        })
    }

    /// The secondary value modulo the fold modulus
    pub fn fold(&self, payload: &str) -> Result<u32> {
        Ok(self.digest(payload)?.fold)
    }

    // `opposite · P^exp` with the published exponent rule.
    fn solve(&self, opposite: u32, len: usize) -> FieldResult<u32> {
        if opposite == 0 {
            return Ok(0);
        }
        let inverse = self.field.powers().get(fold_exponent(len))?;
        self.field.multiply(opposite, inverse)
    }
}

/// `(32 - len - 2) rem 31`, plus 32 when negative
pub fn fold_exponent(len: usize) -> usize {
    let exp = (32 - len as i64 - 2) % 31;
    if exp < 0 {
        (exp + 32) as usize
    } else {
        exp as usize
    }
}

impl Checker for FoldScheme {
    fn name(&self) -> &str {
        "base32check-fold"
    }

    fn check_len(&self) -> usize {
        2
    }

    fn compute(&self, payload: &str) -> Result<String> {
        let digest = self.digest(payload)?;
        Ok(self
            .alphabet
            .encode([digest.code1 as usize, digest.low() as usize])?)
    }
}
