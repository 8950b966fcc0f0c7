// paycard/src/error.rs

use crate::types::Field;
use thiserror::Error;

/// Errors raised when card input cannot be represented at all.
///
/// Expected-invalid data (wrong checksum, expired date, missing holder name)
/// is reported by `CreditCard::validate` as a collection of
/// [`crate::validation::ValidationError`] values instead; this type covers
/// only input that is malformed before a card can be built, such as a
/// non-numeric month string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("{field} is not numeric: {value:?}")]
    ParseField { field: Field, value: String },

    #[error("month must be in 1..=12, got {0}")]
    MonthOutOfRange(u8),

    #[error("year must be a 4-digit year, got {0}")]
    YearOutOfRange(u16),

    #[error("unknown card brand: {0:?}")]
    UnknownBrand(String),
}

pub type Result<T> = std::result::Result<T, Error>;
