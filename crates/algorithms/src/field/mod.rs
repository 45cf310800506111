//! Finite-field arithmetic for check-digit schemes
//!
//! Two representations share the [`FiniteField`] trait:
//!
//! - [`BinaryField`]: GF(2^k), elements are bit rows and the primitive element
//!   is the companion matrix of a primitive polynomial
//! - [`PrimeField`]: GF(p), elements are residues and the primitive element
//!   is an integer generator
//!
//! Both precompute the powers of their primitive element and the matching
//! logarithms once, at construction. Elements are `u32` values in
//! `[0, cardinality)`.

use checkdigit_api::error::{validate, FieldResult};
use checkdigit_api::{FieldError, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub mod binary;
pub mod prime;
pub mod primitive;

pub use binary::BinaryField;
pub use prime::PrimeField;
pub use primitive::{primitive_elements, primitive_polynomials};


/// Arithmetic in a finite field of `cardinality` elements
///
/// Operands must lie in `[0, cardinality)`; anything else fails with
/// [`FieldError::OutOfRange`].
pub trait FiniteField: Send + Sync {
    /// Number of elements
    fn cardinality(&self) -> u32;

    /// Powers and logarithms of the primitive element
    fn powers(&self) -> &PowerTable;

    /// Field addition
    fn add(&self, a: u32, b: u32) -> FieldResult<u32>;

    /// Additive inverse
    fn negate(&self, a: u32) -> FieldResult<u32>;

    /// Field multiplication
    fn multiply(&self, a: u32, b: u32) -> FieldResult<u32>;

    /// Additive identity
    fn zero(&self) -> u32 {
        0
    }

    /// Multiplicative identity
    fn one(&self) -> u32 {
        1
    }

    /// Fail unless `a` is an element of this field
    fn check(&self, a: u32) -> FieldResult<()> {
        validate::field_operand(u64::from(a), self.cardinality())
    }

    /// `P^e`, with `e` taken modulo the group order
    fn generator_power(&self, e: u64) -> u32 {
        self.powers().power(e)
    }

    /// `base^e` through the logarithm table
    fn power(&self, base: u32, e: u64) -> FieldResult<u32> {
        self.check(base)?;
        let table = self.powers();
        match table.log(base) {
            Some(log) => {
                let order = u64::from(table.order());
                Ok(table.power((u64::from(log) * (e % order)) % order))
            }
            None if e == 0 => Ok(self.one()),
            None => Ok(self.zero()),
        }
    }

    /// Multiplicative inverse, `x^(cardinality-2)`
    fn inverse(&self, x: u32) -> FieldResult<u32> {
        self.check(x)?;
        if x == 0 {
            return Err(FieldError::NoInverse);
        }
        self.power(x, u64::from(self.cardinality() - 2))
    }

    /// `a · P^e`
    fn scale_by_generator(&self, a: u32, e: u64) -> FieldResult<u32> {
        self.multiply(a, self.generator_power(e))
    }
}

/// Powers `P^0 .. P^(q-2)` of a primitive element and their logarithms
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PowerTable {
    cardinality: u32,
    antilog: Vec<u32>,
    log: Vec<u32>,
}

impl PowerTable {
    /// Build the table from the successive powers of a candidate element
    ///
    /// `next` maps `P^i` to `P^(i+1)`. `element` only labels the error if the
    /// candidate turns out not to generate the whole multiplicative group.
    pub fn generate(
        cardinality: u32,
        element: u32,
        mut next: impl FnMut(u32) -> u32,
    ) -> FieldResult<Self> {
        let order = cardinality - 1;
        let mut antilog = Vec::with_capacity(order as usize);
        // u32::MAX marks elements not reached yet.
        let mut log = vec![u32::MAX; cardinality as usize];
        let mut x = 1u32;
        for i in 0..order {
            validate::field_operand(u64::from(x), cardinality)?;
            if x == 0 {
                return Err(FieldError::NotPrimitive {
                    element,
                    order: 0,
                    expected: order,
                });
            }
            let seen = log[x as usize];
            if seen != u32::MAX {
                return Err(FieldError::NotPrimitive {
                    element,
                    order: i - seen,
                    expected: order,
                });
            }
            log[x as usize] = i;
            antilog.push(x);
            x = next(x);
        }
        if x != 1 {
            return Err(FieldError::NotPrimitive {
                element,
                order: 0,
                expected: order,
            });
        }
        log[0] = 0;
        Ok(Self {
            cardinality,
            antilog,
            log,
        })
    }

    /// Order of the multiplicative group, `cardinality - 1`
    pub fn order(&self) -> u32 {
        self.cardinality - 1
    }

    /// Direct table lookup; `index` must not exceed `cardinality - 2`
    pub fn get(&self, index: usize) -> FieldResult<u32> {
        self.antilog
            .get(index)
            .copied()
            .ok_or(FieldError::OutOfRange {
                operand: index as u64,
                cardinality: self.cardinality,
            })
    }

    /// `P^e` with `e` reduced modulo the group order
    pub fn power(&self, e: u64) -> u32 {
        self.antilog[(e % u64::from(self.order())) as usize]
    }

    /// Discrete logarithm of a nonzero element
    pub fn log(&self, x: u32) -> Option<u32> {
        if x == 0 {
            return None;
        }
        self.log.get(x as usize).copied()
    }

    /// All powers in exponent order
    pub fn as_slice(&self) -> &[u32] {
        &self.antilog
    }
}

/// Field description used in scheme configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum FieldSpec {
    /// GF(2^k) from a primitive polynomial bitmask including `x^k`
    Binary {
        /// Polynomial over GF(2), e.g. `0b100101` for `1 + x² + x⁵`
        polynomial: u32,
    },
    /// GF(p) with an explicit generator
    Prime {
        /// Prime cardinality
        modulus: u32,
        /// Primitive element
        generator: u32,
    },
}

impl FieldSpec {
    /// Number of elements of the described field
    pub fn cardinality(&self) -> Result<u32> {
        match *self {
            FieldSpec::Binary { polynomial } => {
                let degree = binary::degree(polynomial)?;
                Ok(1 << degree)
            }
            FieldSpec::Prime { modulus, .. } => Ok(modulus),
        }
    }

    /// Build the field and its tables
    pub fn build(&self) -> Result<Field> {
        Ok(match *self {
            FieldSpec::Binary { polynomial } => Field::Binary(BinaryField::new(polynomial)?),
            FieldSpec::Prime { modulus, generator } => {
                Field::Prime(PrimeField::new(modulus, generator)?)
            }
        })
    }
}

/// A constructed field of either representation
#[derive(Clone, Debug)]
pub enum Field {
    /// GF(2^k)
    Binary(BinaryField),
    /// GF(p)
    Prime(PrimeField),
}

impl Field {
    fn inner(&self) -> &dyn FiniteField {
        match self {
            Field::Binary(f) => f,
            Field::Prime(f) => f,
        }
    }
}

impl FiniteField for Field {
    fn cardinality(&self) -> u32 {
        self.inner().cardinality()
    }

    fn powers(&self) -> &PowerTable {
        self.inner().powers()
    }

    fn add(&self, a: u32, b: u32) -> FieldResult<u32> {
        self.inner().add(a, b)
    }

    fn negate(&self, a: u32) -> FieldResult<u32> {
        self.inner().negate(a)
    }

    fn multiply(&self, a: u32, b: u32) -> FieldResult<u32> {
        self.inner().multiply(a, b)
    }
}
