//! Constants for the base32check family of field schemes
//!
//! Polynomials over GF(2) are written as bitmasks that include the leading
//! term: `1 + x² + x⁵` is `0b100101`.

/// The base32 alphabet (RFC 4648)
pub const BASE32_ALPHABET: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";

/// Primitive polynomial `1 + x² + x⁵` used by base32check1
pub const GF32_POLYNOMIAL: u32 = 0b10_0101;

/// All primitive polynomials of degree 5 over GF(2)
pub const GF32_PRIMITIVE_POLYNOMIALS: [u32; 6] = [
    0b10_0101, // 1 + x² + x⁵
    0b10_1111, // 1 + x + x² + x³ + x⁵
    0b10_1001, // 1 + x³ + x⁵
    0b11_1011, // 1 + x + x³ + x⁴ + x⁵
    0b11_1101, // 1 + x² + x³ + x⁴ + x⁵
    0b11_0111, // 1 + x + x² + x⁴ + x⁵
];

/// Structure containing the parameters of a prime-field scheme
pub struct PrimeSchemeParams {
    /// Field cardinality (prime)
    pub modulus: u32,

    /// Generator of the multiplicative group
    pub generator: u32,

    /// Number of check characters
    pub digit_count: usize,
}

/// base32check2: GF(1021) with primitive element 1011, two check characters
///
/// 1021 is the largest prime below 32², so two base32 symbols encode one
/// field element.
pub const BASE32CHECK2: PrimeSchemeParams = PrimeSchemeParams {
    modulus: 1021,
    generator: 1011,
    digit_count: 2,
};

/// Structure containing the parameters of the two-stage fold scheme
pub struct FoldSchemeParams {
    /// Primitive polynomial of the underlying GF(2^5)
    pub polynomial: u32,

    /// Secondary modulus of the base-32 fold
    pub fold_modulus: u32,

    /// Radix of the base-32 fold
    pub fold_radix: u32,
}

/// Two GF(32) sums folded into two characters with a parity bit
pub const BASE32CHECK_FOLD: FoldSchemeParams = FoldSchemeParams {
    polynomial: GF32_POLYNOMIAL,
    fold_modulus: 1007,
    fold_radix: 32,
};
