//! Search for primitive elements and primitive polynomials
//!
//! Both searches use the same criterion: an element `g` of a cyclic group of
//! order `n` is a generator iff `g^(n/f) ≠ 1` for every prime factor `f` of
//! `n`.

use super::binary::{self, MAX_DEGREE};
use super::prime::{check_modulus, mul_mod};
use checkdigit_api::error::validate;
use checkdigit_api::Result;
use tracing::debug;

/// Distinct prime factors of `n`, ascending
pub fn prime_factors(mut n: u32) -> Vec<u32> {
    let mut factors = Vec::new();
    let mut f = 2u32;
    while u64::from(f) * u64::from(f) <= u64::from(n) {
        if n % f == 0 {
            factors.push(f);
            while n % f == 0 {
                n /= f;
            }
        }
        f += 1;
    }
    if n > 1 {
        factors.push(n);
    }
    factors
}

fn pow_mod(mut base: u32, mut e: u32, modulus: u32) -> u32 {
    let mut acc = 1 % modulus;
    while e > 0 {
        if e & 1 == 1 {
            acc = mul_mod(acc, base, modulus);
        }
        base = mul_mod(base, base, modulus);
        e >>= 1;
    }
    acc
}

/// Every primitive element of GF(`modulus`), ascending
pub fn primitive_elements(modulus: u32) -> Result<Vec<u32>> {
    check_modulus(modulus)?;
    let order = modulus - 1;
    let factors = prime_factors(order);
    let elements: Vec<u32> = (1..modulus)
        .filter(|&g| factors.iter().all(|&f| pow_mod(g, order / f, modulus) != 1))
        .collect();
    debug!(modulus, count = elements.len(), "found primitive elements");
    Ok(elements)
}

// Product of two residues modulo `polynomial` in GF(2)[x]; operands have
// degree below `k`.
fn poly_mul_mod(a: u32, b: u32, polynomial: u32, k: u32) -> u32 {
    let mut acc = 0u32;
    let mut a = a;
    let mut b = b;
    while b != 0 {
        if b & 1 == 1 {
            acc ^= a;
        }
        b >>= 1;
        a <<= 1;
        if (a >> k) & 1 == 1 {
            a ^= polynomial;
        }
    }
    acc
}

fn poly_pow_x(e: u32, polynomial: u32, k: u32) -> u32 {
    // x itself, reduced when k = 1
    let mut base = if k == 1 { polynomial & 1 } else { 0b10 };
    let mut acc = 1u32;
    let mut e = e;
    while e > 0 {
        if e & 1 == 1 {
            acc = poly_mul_mod(acc, base, polynomial, k);
        }
        base = poly_mul_mod(base, base, polynomial, k);
        e >>= 1;
    }
    acc
}

/// Whether `polynomial` (bitmask including `x^k`) is primitive over GF(2)
pub fn is_primitive_polynomial(polynomial: u32) -> Result<bool> {
    let k = binary::degree(polynomial)?;
    if polynomial & 1 == 0 {
        return Ok(false);
    }
    let order = (1u32 << k) - 1;
    Ok(poly_pow_x(order, polynomial, k) == 1
        && prime_factors(order)
            .iter()
            .all(|&f| poly_pow_x(order / f, polynomial, k) != 1))
}

/// Every primitive polynomial of degree `k` over GF(2), ascending by bitmask
pub fn primitive_polynomials(k: u32) -> Result<Vec<u32>> {
    validate::in_range(
        u64::from(k),
        1,
        u64::from(MAX_DEGREE),
        "degree",
        "must be between 1 and 16",
    )?;
    let mut found = Vec::new();
    for polynomial in (1u32 << k)..(1u32 << (k + 1)) {
        if is_primitive_polynomial(polynomial)? {
            found.push(polynomial);
        }
    }
    debug!(degree = k, count = found.len(), "found primitive polynomials");
    Ok(found)
}
