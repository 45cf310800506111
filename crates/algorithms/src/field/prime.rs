//! GF(p) arithmetic over residues

use super::{FiniteField, PowerTable};
use checkdigit_api::error::{validate, FieldResult};
use checkdigit_api::Result;
use tracing::debug;

/// Largest supported prime modulus
pub const MAX_MODULUS: u32 = 1 << 20;

/// Trial-division primality test
pub fn is_prime(q: u32) -> bool {
    if q < 2 {
        return false;
    }
    if q == 2 {
        return true;
    }
    if q % 2 == 0 {
        return false;
    }
    let mut i = 3u32;
    while u64::from(i) * u64::from(i) <= u64::from(q) {
        if q % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Check that `modulus` can back a prime field
pub(crate) fn check_modulus(modulus: u32) -> Result<()> {
    validate::parameter(is_prime(modulus), "modulus", "must be prime")?;
    validate::parameter(
        modulus <= MAX_MODULUS,
        "modulus",
        "must not exceed 2^20",
    )
}

/// GF(p) with a chosen primitive element
#[derive(Clone, Debug)]
pub struct PrimeField {
    modulus: u32,
    generator: u32,
    table: PowerTable,
}

impl PrimeField {
    /// Build GF(`modulus`) with powers of `generator`
    ///
    /// Fails with a parameter error for a non-prime modulus and with
    /// `FieldError::NotPrimitive` when `generator` does not generate the
    /// multiplicative group.
    pub fn new(modulus: u32, generator: u32) -> Result<Self> {
        check_modulus(modulus)?;
        validate::field_operand(u64::from(generator), modulus)?;
        let table = PowerTable::generate(modulus, generator, |x| mul_mod(x, generator, modulus))?;
        debug!(modulus, generator, "built GF(p) power table");
        Ok(Self {
            modulus,
            generator,
            table,
        })
    }

    /// The prime `p`
    pub fn modulus(&self) -> u32 {
        self.modulus
    }

    /// The primitive element
    pub fn generator(&self) -> u32 {
        self.generator
    }
}

#[inline]
pub(crate) fn mul_mod(a: u32, b: u32, modulus: u32) -> u32 {
    ((u64::from(a) * u64::from(b)) % u64::from(modulus)) as u32
}

impl FiniteField for PrimeField {
    fn cardinality(&self) -> u32 {
        self.modulus
    }

    fn powers(&self) -> &PowerTable {
        &self.table
    }

    fn add(&self, a: u32, b: u32) -> FieldResult<u32> {
        self.check(a)?;
        self.check(b)?;
        Ok(((u64::from(a) + u64::from(b)) % u64::from(self.modulus)) as u32)
    }

    fn negate(&self, a: u32) -> FieldResult<u32> {
        self.check(a)?;
        Ok((self.modulus - a) % self.modulus)
    }

    fn multiply(&self, a: u32, b: u32) -> FieldResult<u32> {
        self.check(a)?;
        self.check(b)?;
        Ok(mul_mod(a, b, self.modulus))
    }
}
