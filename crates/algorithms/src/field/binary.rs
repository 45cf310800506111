//! GF(2^k) arithmetic over bit-row matrices
//!
//! Elements are rows of `k` bits stored in a `u32`, column `j` at bit
//! `k-1-j`. The primitive element is the `k × k` companion matrix `P` of a
//! primitive polynomial; the field element standing for `P^i` is the last
//! row of `P^i`, i.e. the row `0…01` multiplied by `P^i`.

use super::{FiniteField, PowerTable};
use checkdigit_api::error::{validate, FieldResult};
use checkdigit_api::Result;
use tracing::debug;

/// Largest supported extension degree
pub const MAX_DEGREE: u32 = 16;

/// Degree of a polynomial bitmask, checked against the supported range
pub fn degree(polynomial: u32) -> Result<u32> {
    let degree = (u32::BITS - polynomial.leading_zeros()).saturating_sub(1);
    validate::in_range(
        u64::from(degree),
        1,
        u64::from(MAX_DEGREE),
        "polynomial",
        "degree must be between 1 and 16",
    )?;
    Ok(degree)
}

/// Companion matrix of a polynomial of degree `k`
///
/// Row `i` has column `i-1` set (for `i ≥ 1`), and its last column set when
/// the polynomial has an `x^i` term.
pub fn companion_matrix(polynomial: u32, k: u32) -> Vec<u32> {
    (0..k)
        .map(|i| {
            let shift = if i >= 1 { 1 << (k - i) } else { 0 };
            shift | ((polynomial >> i) & 1)
        })
        .collect()
}

/// `k × k` identity matrix
pub fn identity_matrix(k: u32) -> Vec<u32> {
    (0..k).map(|i| 1 << (k - 1 - i)).collect()
}

/// Row vector times matrix over GF(2)
#[inline]
pub fn apply_row(row: u32, matrix: &[u32]) -> u32 {
    let k = matrix.len() as u32;
    let mut out = 0;
    for bit in 0..k {
        if (row >> bit) & 1 == 1 {
            out ^= matrix[(k - 1 - bit) as usize];
        }
    }
    out
}

/// Matrix product over GF(2); `a` may have any number of rows
pub fn matrix_multiply(a: &[u32], b: &[u32]) -> Vec<u32> {
    a.iter().map(|&row| apply_row(row, b)).collect()
}

/// GF(2^k) defined by a primitive polynomial
#[derive(Clone, Debug)]
pub struct BinaryField {
    polynomial: u32,
    degree: u32,
    companion: Vec<u32>,
    // Rows of P^0 .. P^(q-2), `degree` rows per power.
    matrix_powers: Vec<u32>,
    table: PowerTable,
}

impl BinaryField {
    /// Build the field for `polynomial`, a bitmask including the `x^k` term
    ///
    /// Fails with [`checkdigit_api::Error::Parameter`] for an unsupported
    /// degree and with `FieldError::NotPrimitive` when the polynomial is not
    /// primitive.
    pub fn new(polynomial: u32) -> Result<Self> {
        let k = degree(polynomial)?;
        let cardinality = 1u32 << k;
        let companion = companion_matrix(polynomial, k);
        let table = PowerTable::generate(cardinality, polynomial, |x| apply_row(x, &companion))?;

        let order = (cardinality - 1) as usize;
        let mut matrix_powers = Vec::with_capacity(order * k as usize);
        let mut current = identity_matrix(k);
        for _ in 0..order {
            matrix_powers.extend_from_slice(&current);
            current = matrix_multiply(&current, &companion);
        }
        debug!(polynomial, degree = k, cardinality, "built GF(2^k) power table");

        Ok(Self {
            polynomial,
            degree: k,
            companion,
            matrix_powers,
            table,
        })
    }

    /// Polynomial bitmask
    pub fn polynomial(&self) -> u32 {
        self.polynomial
    }

    /// Extension degree `k`
    pub fn degree(&self) -> u32 {
        self.degree
    }

    /// The companion matrix `P`
    pub fn companion_matrix(&self) -> &[u32] {
        &self.companion
    }

    /// The matrix `P^e`, `e` reduced modulo the group order
    pub fn matrix_power(&self, e: u64) -> &[u32] {
        let k = self.degree as usize;
        let i = (e % u64::from(self.table.order())) as usize;
        &self.matrix_powers[i * k..(i + 1) * k]
    }

    /// Matrix product over GF(2) for matrices of this field's width
    pub fn matrix_multiply(&self, a: &[u32], b: &[u32]) -> Vec<u32> {
        matrix_multiply(a, b)
    }
}

impl FiniteField for BinaryField {
    fn cardinality(&self) -> u32 {
        1 << self.degree
    }

    fn powers(&self) -> &PowerTable {
        &self.table
    }

    fn add(&self, a: u32, b: u32) -> FieldResult<u32> {
        self.check(a)?;
        self.check(b)?;
        Ok(a ^ b)
    }

    fn negate(&self, a: u32) -> FieldResult<u32> {
        self.check(a)?;
        Ok(a)
    }

    fn multiply(&self, a: u32, b: u32) -> FieldResult<u32> {
        self.check(a)?;
        self.check(b)?;
        match self.table.log(b) {
            Some(log) => Ok(apply_row(a, self.matrix_power(u64::from(log)))),
            None => Ok(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn companion_matrix_for_gf32() {
        // 1 + x² + x⁵
        assert_eq!(
            companion_matrix(0b100101, 5),
            vec![0b00001, 0b10000, 0b01001, 0b00100, 0b00010]
        );
    }

    #[test]
    fn identity_is_neutral() {
        let p = companion_matrix(0b100101, 5);
        assert_eq!(matrix_multiply(&identity_matrix(5), &p), p);
        assert_eq!(matrix_multiply(&p, &identity_matrix(5)), p);
    }

    #[test]
    fn degree_bounds() {
        assert_eq!(degree(0b100101).unwrap(), 5);
        assert!(degree(1).is_err());
        assert!(degree(0).is_err());
        assert!(degree(1 << 17).is_err());
    }

    #[test]
    fn p_to_the_group_order_is_identity() {
        let field = BinaryField::new(0b100101).unwrap();
        let p = field.companion_matrix().to_vec();
        let mut m = identity_matrix(5);
        for _ in 0..31 {
            m = field.matrix_multiply(&m, &p);
        }
        assert_eq!(m, identity_matrix(5));
        assert_eq!(field.matrix_power(31), identity_matrix(5).as_slice());
    }

    #[test]
    fn element_of_p_is_its_last_row() {
        let field = BinaryField::new(0b100101).unwrap();
        for e in 0..31u64 {
            assert_eq!(field.generator_power(e), field.matrix_power(e)[4]);
        }
    }
}
