// paycard/src/lib.rs

//! paycard
//!
//! Payment card model, brand detection and validation in pure Rust.
//!
//! A [`card::CreditCard`] is a stand-alone value object: construct it with
//! [`card::CardBuilder`], mutate its fields freely, then ask for a
//! field-level error report with `validate()`. For test harnesses the
//! `bogus` brand skips the structural number checks so integrations can be
//! exercised without real card numbers.
#![warn(missing_docs)]

pub mod brand;
pub mod card;
pub mod constants;
pub mod error;
pub mod format;
pub mod prelude;
pub mod test_support;
pub mod types;
pub mod validation;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
