//! ISO/IEC 7064 check character systems
//!
//! These are not field schemes; they are kept as comparison baselines and
//! implement the same [`checkdigit_api::Checker`] contract so they can be
//! scored side by side.

pub mod hybrid;
pub mod pure;

pub use hybrid::Iso7064Hybrid;
pub use pure::Iso7064Pure;
