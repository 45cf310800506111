//! Named schemes known to the command-line tools and the scorer
//!
//! Every entry takes base32 payloads. The numeric baselines run behind a
//! [`NumericAdapter`], the base36 ones consume base32 payloads directly since
//! base32 symbols are a subset of base36.

use crate::adapter::NumericAdapter;
use crate::alphabet::{self, Alphabet};
use crate::iso7064::{Iso7064Hybrid, Iso7064Pure};
use crate::scheme::{FieldScheme, FoldScheme};
use checkdigit_api::{Checker, Error, Result};
use checkdigit_params::scheme::iso7064::{
    MOD1007_32_MODULUS, MOD1271_36_MODULUS, MOD97_10_MODULUS,
};

/// A named scheme with its scoring metadata
#[derive(Clone, Copy, Debug)]
pub struct CatalogEntry {
    /// Name used on the command line
    pub name: &'static str,
    /// Characters appended by the scheme
    pub check_len: usize,
    /// Size of the alphabet check characters are drawn from
    pub check_alphabet_size: usize,
    build: fn() -> Result<Box<dyn Checker>>,
}

impl CatalogEntry {
    /// Construct the scheme
    pub fn build(&self) -> Result<Box<dyn Checker>> {
        (self.build)()
    }

    /// Information carried by one check character, in bits
    pub fn bits_per_char(&self) -> f64 {
        (self.check_alphabet_size as f64).log2()
    }

    /// Alphabet random payloads are drawn from when scoring
    pub fn payload_alphabet(&self) -> &'static Alphabet {
        alphabet::base32()
    }
}

fn base32check1() -> Result<Box<dyn Checker>> {
    Ok(Box::new(FieldScheme::base32check1()?))
}

fn base32check2() -> Result<Box<dyn Checker>> {
    Ok(Box::new(FieldScheme::base32check2()?))
}

fn base32check_fold() -> Result<Box<dyn Checker>> {
    Ok(Box::new(FoldScheme::base32check_fold()?))
}

fn mod11_10() -> Result<Box<dyn Checker>> {
    let inner = Iso7064Hybrid::new(alphabet::base10().clone())?;
    Ok(Box::new(NumericAdapter::new(inner).with_label("mod11-10")))
}

fn mod97_10() -> Result<Box<dyn Checker>> {
    let inner = Iso7064Pure::new(alphabet::base10().clone(), MOD97_10_MODULUS)?;
    Ok(Box::new(NumericAdapter::new(inner).with_label("mod97-10")))
}

fn mod37_36() -> Result<Box<dyn Checker>> {
    Ok(Box::new(Iso7064Hybrid::new(alphabet::base36().clone())?))
}

fn mod1271_36() -> Result<Box<dyn Checker>> {
    Ok(Box::new(Iso7064Pure::new(
        alphabet::base36().clone(),
        MOD1271_36_MODULUS,
    )?))
}

fn mod1007_32() -> Result<Box<dyn Checker>> {
    Ok(Box::new(Iso7064Pure::new(
        alphabet::base32().clone(),
        MOD1007_32_MODULUS,
    )?))
}

// Numeric baselines are credited with five bits per character, matching the
// payload alphabet they are scored on.
static ENTRIES: [CatalogEntry; 8] = [
    CatalogEntry {
        name: "base32check1",
        check_len: 1,
        check_alphabet_size: 32,
        build: base32check1,
    },
    CatalogEntry {
        name: "base32check2",
        check_len: 2,
        check_alphabet_size: 32,
        build: base32check2,
    },
    CatalogEntry {
        name: "base32check-fold",
        check_len: 2,
        check_alphabet_size: 32,
        build: base32check_fold,
    },
    CatalogEntry {
        name: "mod11-10",
        check_len: 1,
        check_alphabet_size: 32,
        build: mod11_10,
    },
    CatalogEntry {
        name: "mod97-10",
        check_len: 2,
        check_alphabet_size: 32,
        build: mod97_10,
    },
    CatalogEntry {
        name: "mod37-36",
        check_len: 1,
        check_alphabet_size: 36,
        build: mod37_36,
    },
    CatalogEntry {
        name: "mod1271-36",
        check_len: 2,
        check_alphabet_size: 36,
        build: mod1271_36,
    },
    CatalogEntry {
        name: "mod1007-32",
        check_len: 2,
        check_alphabet_size: 32,
        build: mod1007_32,
    },
];

/// Every catalog entry, in presentation order
pub fn entries() -> &'static [CatalogEntry] {
    &ENTRIES
}

/// Names of every catalog entry
pub fn names() -> impl Iterator<Item = &'static str> {
    ENTRIES.iter().map(|e| e.name)
}

/// Look up an entry by name
pub fn find(name: &str) -> Option<&'static CatalogEntry> {
    ENTRIES.iter().find(|e| e.name == name)
}

/// Build the scheme registered under `name`
pub fn build(name: &str) -> Result<Box<dyn Checker>> {
    find(name)
        .ok_or_else(|| Error::param("scheme", format!("unknown scheme '{name}'")))?
        .build()
}
