// paycard/src/card/expiry.rs

use crate::types::{ExpiryMonth, ExpiryYear};
use chrono::{Datelike, NaiveDate, Utc};

/// Transient month/year view answering "is this card expired".
///
/// Recomputed on demand from the card's fields, never stored. A card is
/// expired only when its (year, month) pair is strictly before today's;
/// the current month is still valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExpiryDate {
    month: ExpiryMonth,
    year: ExpiryYear,
}

impl ExpiryDate {
    pub fn new(month: ExpiryMonth, year: ExpiryYear) -> Self {
        Self { month, year }
    }

    pub fn month(&self) -> ExpiryMonth {
        self.month
    }

    pub fn year(&self) -> ExpiryYear {
        self.year
    }

    /// Whether the card is expired as of `today` (month/year granularity).
    pub fn expired_at(&self, today: NaiveDate) -> bool {
        let expiry = (self.year.as_u16() as i32, self.month.as_u8() as u32);
        expiry < (today.year(), today.month())
    }

    /// Whether the card is expired right now (UTC).
    pub fn expired(&self) -> bool {
        self.expired_at(Utc::now().date_naive())
    }

    /// Last calendar day of the expiry month, the instant the card stops
    /// being chargeable.
    pub fn last_date(&self) -> Option<NaiveDate> {
        let year = self.year.as_u16() as i32;
        let month = self.month.as_u8() as u32;
        let first_of_next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        first_of_next.and_then(|d| d.pred_opt())
    }
}
