//! Shared plumbing for the `checkdigit`, `gen-primitive` and `fuzz-score`
//! binaries.

pub mod helpers;

use checkdigit_algorithms::{Checker, Error, SchemeConfig};

/// Result of running a checker over standard input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Check characters for the payload
    Computed(String),
    /// The payload ends with its correct check characters
    Valid,
    /// It does not
    Invalid,
}

impl CheckOutcome {
    /// Process exit code for this outcome
    pub fn exit_code(&self) -> i32 {
        match self {
            CheckOutcome::Computed(_) | CheckOutcome::Valid => 0,
            CheckOutcome::Invalid => 1,
        }
    }
}

/// Compute the check of `payload`, or validate it when `check` is set
pub fn run_checker(
    checker: &dyn Checker,
    payload: &str,
    check: bool,
) -> checkdigit_algorithms::Result<CheckOutcome> {
    if check {
        Ok(if checker.validate(payload)? {
            CheckOutcome::Valid
        } else {
            CheckOutcome::Invalid
        })
    } else {
        checker.compute(payload).map(CheckOutcome::Computed)
    }
}

/// Exit code for a checker error: 2 for bad input, 3 otherwise
pub fn error_exit_code(err: &Error) -> i32 {
    match err {
        Error::Alphabet(_) => 2,
        _ => 3,
    }
}

/// Configuration of the catalog schemes whose field can be varied
pub fn field_config(name: &str) -> Option<SchemeConfig> {
    match name {
        "base32check1" => Some(SchemeConfig::base32check1()),
        "base32check2" => Some(SchemeConfig::base32check2()),
        _ => None,
    }
}

/// `1 + x^2 + x^5` style rendering of a polynomial bitmask
pub fn format_polynomial(polynomial: u32) -> String {
    let terms: Vec<String> = (0..u32::BITS)
        .filter(|bit| (polynomial >> bit) & 1 == 1)
        .map(|bit| match bit {
            0 => "1".to_string(),
            1 => "x".to_string(),
            _ => format!("x^{bit}"),
        })
        .collect();
    if terms.is_empty() {
        "0".into()
    } else {
        terms.join(" + ")
    }
}
