// paycard/src/prelude.rs

pub use crate::brand::{BrandRules, CardBrand};
pub use crate::card::{CardBuilder, CreditCard, ExpiryDate};
pub use crate::validation::{ValidationError, Validator};
pub use crate::{Error, ExpiryMonth, ExpiryYear, Field, Result};

// Re-export small helpers for convenience
pub use crate::format::{last_digits, mask};
pub use crate::validation::{check_digit, luhn_valid, sanitize_number};
