//! Constants for ISO/IEC 7064 comparison baselines

/// MOD 97-10: pure system over digits
pub const MOD97_10_MODULUS: u32 = 97;

/// MOD 1271-36: pure system over digits and letters
pub const MOD1271_36_MODULUS: u32 = 1271;

/// MOD 1007-32: pure system over the base32 alphabet
pub const MOD1007_32_MODULUS: u32 = 1007;

/// Decimal digits
pub const BASE10_ALPHABET: &str = "0123456789";

/// Hexadecimal digits
pub const BASE16_ALPHABET: &str = "0123456789ABCDEF";

/// Digits followed by upper-case letters
pub const BASE36_ALPHABET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Bitcoin base58
pub const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Base64 symbols without padding
pub const BASE64_ALPHABET: &str =
    "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
