//! Capability traits for check-digit schemes

pub mod checker;

pub use checker::{Checker, CheckerExt};
