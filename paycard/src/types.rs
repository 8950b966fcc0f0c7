// paycard/src/types.rs

use crate::{Error, Result};
use derive_more::Display;
use std::str::FromStr;

/// Expiry month - Newtype Pattern (always in 1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryMonth(u8);

impl ExpiryMonth {
    /// Build a month, rejecting values outside 1..=12.
    pub fn new(month: u8) -> Result<Self> {
        if (1..=12).contains(&month) {
            Ok(Self(month))
        } else {
            Err(Error::MonthOutOfRange(month))
        }
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }
}

impl FromStr for ExpiryMonth {
    type Err = Error;

    /// Coerce raw string input ("9", "09") into a month.
    fn from_str(s: &str) -> Result<Self> {
        let value: u8 = s.trim().parse().map_err(|_| Error::ParseField {
            field: Field::Month,
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}

/// Expiry year - Newtype Pattern (4-digit year)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryYear(u16);

impl ExpiryYear {
    /// Build a year, rejecting anything that is not 4 digits.
    pub fn new(year: u16) -> Result<Self> {
        if (1000..=9999).contains(&year) {
            Ok(Self(year))
        } else {
            Err(Error::YearOutOfRange(year))
        }
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl FromStr for ExpiryYear {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let value: u16 = s.trim().parse().map_err(|_| Error::ParseField {
            field: Field::Year,
            value: s.to_string(),
        })?;
        Self::new(value)
    }
}

/// Names every validatable card field; used to scope validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    #[display(fmt = "number")]
    Number,
    #[display(fmt = "brand")]
    Brand,
    #[display(fmt = "month")]
    Month,
    #[display(fmt = "year")]
    Year,
    #[display(fmt = "first_name")]
    FirstName,
    #[display(fmt = "last_name")]
    LastName,
    #[display(fmt = "start_month")]
    StartMonth,
    #[display(fmt = "start_year")]
    StartYear,
    #[display(fmt = "issue_number")]
    IssueNumber,
    #[display(fmt = "verification_value")]
    VerificationValue,
}
