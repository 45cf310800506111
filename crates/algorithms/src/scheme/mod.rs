//! Field-sum check-digit schemes
//!
//! A payload `a_1 … a_n` gets a check value `c` such that
//! `Σ a_i · P^i + c · P^(n+1) = 0` in the scheme's field, `P` being the
//! field's primitive element.
//!
//! [`FieldScheme`] covers every single-sum configuration (`base32check1`,
//! `base32check2`, or any [`SchemeConfig`]). [`FoldScheme`] is the composite
//! two-sum variant with a parity bit.

pub mod field_sum;
pub mod fold;

pub use field_sum::{FieldScheme, SchemeConfig};
pub use fold::{FoldDigest, FoldScheme};


/// Exponent `e` such that `P^e` inverts `P^(n+1)`
///
/// `(q-2)·(n+1) mod (q-1)`, using `P^(q-1) = 1`.
pub(crate) fn inverse_position_exponent(cardinality: u32, n: usize) -> u64 {
    let order = u64::from(cardinality - 1);
    let next = (n as u64 + 1) % order;
    (u64::from(cardinality - 2) * next) % order
}
