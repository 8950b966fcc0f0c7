// paycard/src/card/builder.rs

use crate::brand::CardBrand;
use crate::card::CreditCard;
use crate::types::{ExpiryMonth, ExpiryYear, Field};
use crate::{Error, Result};

/// Named-field construction of a [`CreditCard`].
///
/// Every field is optional at build time; completeness is `validate()`'s
/// job. Raw string setters (`month_str`, `year_str`, `brand_name`) accept
/// the loose input an HTML form produces; their parse failures are recorded
/// and surfaced from [`CardBuilder::build`] as a [`crate::Error`] rather
/// than panicking mid-chain.
#[derive(Debug, Default)]
pub struct CardBuilder {
    card: CreditCard,
    // First coercion failure encountered, reported by build()
    error: Option<Error>,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn number(mut self, number: impl Into<String>) -> Self {
        self.card.set_number(number);
        self
    }

    pub fn month(mut self, month: ExpiryMonth) -> Self {
        self.card.set_month(month);
        self
    }

    /// Coerce a raw month string such as `"9"` or `"09"`.
    pub fn month_str(mut self, raw: &str) -> Self {
        match raw.parse::<ExpiryMonth>() {
            Ok(month) => self.card.set_month(month),
            Err(e) => self.record(e),
        }
        self
    }

    pub fn year(mut self, year: ExpiryYear) -> Self {
        self.card.set_year(year);
        self
    }

    /// Coerce a raw 4-digit year string such as `"2030"`.
    pub fn year_str(mut self, raw: &str) -> Self {
        match raw.parse::<ExpiryYear>() {
            Ok(year) => self.card.set_year(year),
            Err(e) => self.record(e),
        }
        self
    }

    pub fn brand(mut self, brand: CardBrand) -> Self {
        self.card.set_brand(brand);
        self
    }

    /// Coerce a brand wire name such as `"visa"` or `"master"`.
    pub fn brand_name(mut self, raw: &str) -> Self {
        match raw.parse::<CardBrand>() {
            Ok(brand) => self.card.set_brand(brand),
            Err(e) => self.record(e),
        }
        self
    }

    pub fn first_name(mut self, name: impl Into<String>) -> Self {
        self.card.set_first_name(name);
        self
    }

    pub fn last_name(mut self, name: impl Into<String>) -> Self {
        self.card.set_last_name(name);
        self
    }

    pub fn start_month(mut self, month: ExpiryMonth) -> Self {
        self.card.set_start_month(month);
        self
    }

    /// Coerce a raw start month string (Switch / Solo).
    pub fn start_month_str(mut self, raw: &str) -> Self {
        match raw.parse::<ExpiryMonth>() {
            Ok(month) => self.card.set_start_month(month),
            Err(Error::ParseField { value, .. }) => self.record(Error::ParseField {
                field: Field::StartMonth,
                value,
            }),
            Err(e) => self.record(e),
        }
        self
    }

    pub fn start_year(mut self, year: u16) -> Self {
        self.card.set_start_year(year);
        self
    }

    pub fn issue_number(mut self, issue: impl Into<String>) -> Self {
        self.card.set_issue_number(issue);
        self
    }

    pub fn verification_value(mut self, value: impl Into<String>) -> Self {
        self.card.set_verification_value(value);
        self
    }

    /// Finish construction. Fails only when a raw string setter could not
    /// be coerced; missing fields are left for `validate()`.
    pub fn build(self) -> Result<CreditCard> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.card),
        }
    }

    fn record(&mut self, error: Error) {
        // Keep the first failure; later ones usually cascade from it.
        if self.error.is_none() {
            self.error = Some(error);
        }
    }
}
