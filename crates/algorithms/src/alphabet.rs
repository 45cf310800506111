//! Ordered symbol sets and the character/index codec
//!
//! An [`Alphabet`] is a duplicate-free sequence of characters. The position
//! of a character is its numeric value; the first character is the zero
//! symbol used for padding.

use checkdigit_api::error::AlphabetResult;
use checkdigit_api::AlphabetError;
use checkdigit_params::scheme::base32check::BASE32_ALPHABET;
use checkdigit_params::scheme::iso7064::{
    BASE10_ALPHABET, BASE16_ALPHABET, BASE36_ALPHABET, BASE58_ALPHABET, BASE64_ALPHABET,
};
use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, duplicate-free set of symbols
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Alphabet {
    characters: Vec<char>,
    index: HashMap<char, usize>,
}

impl Alphabet {
    /// Build an alphabet from its characters, in order
    pub fn new(characters: &str) -> AlphabetResult<Self> {
        let characters: Vec<char> = characters.chars().collect();
        if characters.is_empty() {
            return Err(AlphabetError::Empty);
        }
        let mut index = HashMap::with_capacity(characters.len());
        for (i, &c) in characters.iter().enumerate() {
            if index.insert(c, i).is_some() {
                return Err(AlphabetError::DuplicateCharacter(c));
            }
        }
        Ok(Self { characters, index })
    }

    // Only for the predefined constants, which are checked by the tests below.
    fn predefined(characters: &'static str) -> Self {
        let characters: Vec<char> = characters.chars().collect();
        let index = characters.iter().enumerate().map(|(i, &c)| (c, i)).collect();
        Self { characters, index }
    }

    /// Number of symbols
    pub fn size(&self) -> usize {
        self.characters.len()
    }

    /// The symbols, in index order
    pub fn characters(&self) -> &[char] {
        &self.characters
    }

    /// The symbol with index 0
    pub fn zero_char(&self) -> char {
        self.characters[0]
    }

    /// Information carried by one symbol, in bits
    pub fn bits_per_char(&self) -> f64 {
        (self.size() as f64).log2()
    }

    /// Whether `c` belongs to the alphabet
    pub fn contains(&self, c: char) -> bool {
        self.index.contains_key(&c)
    }

    /// Index of `c`, if present
    pub fn from_char(&self, c: char) -> Option<usize> {
        self.index.get(&c).copied()
    }

    /// Index of `c`, reporting `position` when it is unknown
    pub fn index_at(&self, c: char, position: usize) -> AlphabetResult<usize> {
        self.from_char(c).ok_or(AlphabetError::UnknownCharacter {
            character: c,
            position,
        })
    }

    /// Symbol for an index
    pub fn to_char(&self, index: usize) -> AlphabetResult<char> {
        self.characters
            .get(index)
            .copied()
            .ok_or(AlphabetError::IndexOutOfRange {
                index,
                size: self.size(),
            })
    }

    /// Decode every character of `payload` to its index
    pub fn indices(&self, payload: &str) -> AlphabetResult<Vec<usize>> {
        payload
            .chars()
            .enumerate()
            .map(|(position, c)| self.index_at(c, position))
            .collect()
    }

    /// Encode indices back into a string
    pub fn encode<I: IntoIterator<Item = usize>>(&self, indices: I) -> AlphabetResult<String> {
        indices.into_iter().map(|i| self.to_char(i)).collect()
    }

    /// Uniformly random symbol
    pub fn gen<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.characters[rng.gen_range(0..self.size())]
    }

    /// Uniformly random symbol different from `other`
    ///
    /// Samples directly from the remaining `size - 1` symbols. Returns
    /// `None` for a single-symbol alphabet. If `other` is not part of the
    /// alphabet any symbol may be returned.
    pub fn gen_other<R: Rng + ?Sized>(&self, other: char, rng: &mut R) -> Option<char> {
        let size = self.size();
        match self.from_char(other) {
            Some(_) if size < 2 => None,
            Some(skip) => {
                let pick = rng.gen_range(0..size - 1);
                let pick = if pick >= skip { pick + 1 } else { pick };
                Some(self.characters[pick])
            }
            None => Some(self.gen(rng)),
        }
    }

    /// Random payload of `length` symbols
    pub fn gen_payload<R: Rng + ?Sized>(&self, length: usize, rng: &mut R) -> String {
        (0..length).map(|_| self.gen(rng)).collect()
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Alphabet").field(&self.to_string()).finish()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.characters.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl std::str::FromStr for Alphabet {
    type Err = AlphabetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Alphabet {
    type Error = AlphabetError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<Alphabet> for String {
    fn from(alphabet: Alphabet) -> Self {
        alphabet.to_string()
    }
}

static BASE10: Lazy<Alphabet> = Lazy::new(|| Alphabet::predefined(BASE10_ALPHABET));
static BASE16: Lazy<Alphabet> = Lazy::new(|| Alphabet::predefined(BASE16_ALPHABET));
static BASE32: Lazy<Alphabet> = Lazy::new(|| Alphabet::predefined(BASE32_ALPHABET));
static BASE36: Lazy<Alphabet> = Lazy::new(|| Alphabet::predefined(BASE36_ALPHABET));
static BASE58: Lazy<Alphabet> = Lazy::new(|| Alphabet::predefined(BASE58_ALPHABET));
static BASE64: Lazy<Alphabet> = Lazy::new(|| Alphabet::predefined(BASE64_ALPHABET));

/// Decimal digits
pub fn base10() -> &'static Alphabet {
    &BASE10
}

/// Hexadecimal digits, upper case
pub fn base16() -> &'static Alphabet {
    &BASE16
}

/// RFC 4648 base32: `A-Z` then `2-7`
pub fn base32() -> &'static Alphabet {
    &BASE32
}

/// Digits then upper-case letters
pub fn base36() -> &'static Alphabet {
    &BASE36
}

/// Bitcoin base58
pub fn base58() -> &'static Alphabet {
    &BASE58
}

/// Standard base64 symbols
pub fn base64() -> &'static Alphabet {
    &BASE64
}

/// Look up a predefined alphabet by name (`base10`, `base16`, ...)
pub fn by_name(name: &str) -> Option<&'static Alphabet> {
    match name {
        "base10" => Some(base10()),
        "base16" => Some(base16()),
        "base32" => Some(base32()),
        "base36" => Some(base36()),
        "base58" => Some(base58()),
        "base64" => Some(base64()),
        _ => None,
    }
}
