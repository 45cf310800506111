//! Constants for check-digit schemes

pub mod base32check;
pub mod iso7064;
