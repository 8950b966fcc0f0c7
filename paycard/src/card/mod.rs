// paycard/src/card/mod.rs

use crate::brand::CardBrand;
use crate::format;
use crate::types::{ExpiryMonth, ExpiryYear};
use crate::validation::{self, ValidationError};
use chrono::{NaiveDate, Utc};

mod expiry;
pub use expiry::ExpiryDate;

pub mod builder;
pub use builder::CardBuilder;

/// A stand-alone payment card value object.
///
/// Not backed by any storage: construct it (usually via [`CardBuilder`]),
/// mutate fields freely, then call [`CreditCard::validate`] for a field-level
/// error report. For test harnesses, declare the [`CardBrand::Bogus`] brand
/// to skip the structural number checks.
///
/// ```
/// use paycard::prelude::*;
///
/// let card = CreditCard::builder()
///     .first_name("Steve")
///     .last_name("Smith")
///     .month_str("9")
///     .year_str("2030")
///     .brand(CardBrand::Visa)
///     .number("4242424242424242")
///     .build()
///     .unwrap();
///
/// assert!(card.validate().is_empty());
/// assert_eq!(card.masked_number(), "XXXX-XXXX-XXXX-4242");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreditCard {
    number: String,
    month: Option<ExpiryMonth>,
    year: Option<ExpiryYear>,
    brand: Option<CardBrand>,
    first_name: String,
    last_name: String,
    // Required for Switch / Solo cards
    start_month: Option<ExpiryMonth>,
    start_year: Option<u16>,
    issue_number: Option<String>,
    verification_value: Option<String>,
}

impl CreditCard {
    /// Start building a card from named fields.
    pub fn builder() -> CardBuilder {
        CardBuilder::new()
    }

    /// Raw card number as supplied; may still contain spaces or dashes
    /// until [`CreditCard::normalize`] is called.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn set_number(&mut self, number: impl Into<String>) {
        self.number = number.into();
    }

    pub fn month(&self) -> Option<ExpiryMonth> {
        self.month
    }

    pub fn set_month(&mut self, month: ExpiryMonth) {
        self.month = Some(month);
    }

    pub fn year(&self) -> Option<ExpiryYear> {
        self.year
    }

    pub fn set_year(&mut self, year: ExpiryYear) {
        self.year = Some(year);
    }

    pub fn brand(&self) -> Option<CardBrand> {
        self.brand
    }

    pub fn set_brand(&mut self, brand: CardBrand) {
        self.brand = Some(brand);
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn set_first_name(&mut self, name: impl Into<String>) {
        self.first_name = name.into();
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    pub fn set_last_name(&mut self, name: impl Into<String>) {
        self.last_name = name.into();
    }

    pub fn start_month(&self) -> Option<ExpiryMonth> {
        self.start_month
    }

    pub fn set_start_month(&mut self, month: ExpiryMonth) {
        self.start_month = Some(month);
    }

    pub fn start_year(&self) -> Option<u16> {
        self.start_year
    }

    pub fn set_start_year(&mut self, year: u16) {
        self.start_year = Some(year);
    }

    pub fn issue_number(&self) -> Option<&str> {
        self.issue_number.as_deref()
    }

    pub fn set_issue_number(&mut self, issue: impl Into<String>) {
        self.issue_number = Some(issue.into());
    }

    pub fn verification_value(&self) -> Option<&str> {
        self.verification_value.as_deref()
    }

    pub fn set_verification_value(&mut self, value: impl Into<String>) {
        self.verification_value = Some(value.into());
    }

    /// Holder name: first and last joined by exactly one space. Empty
    /// inputs are preserved, so an unset card yields `" "`.
    pub fn holder_full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// The derived expiry view, when both month and year are set.
    pub fn expiry_date(&self) -> Option<ExpiryDate> {
        Some(ExpiryDate::new(self.month?, self.year?))
    }

    /// Whether the card is expired as of now (UTC). A card without an
    /// expiry date on it is not considered expired; `validate` reports the
    /// missing fields instead.
    pub fn is_expired(&self) -> bool {
        self.expiry_date().is_some_and(|d| d.expired())
    }

    /// Display form with all but the last four digits masked:
    /// `XXXX-XXXX-XXXX-4242`. Numbers too short to mask meaningfully are
    /// returned unmodified.
    pub fn masked_number(&self) -> String {
        format::mask(&self.number)
    }

    /// Trailing four characters of the number, or the whole number if
    /// shorter.
    pub fn last_digits(&self) -> &str {
        format::last_digits(&self.number)
    }

    /// Persist sanitization: strip whitespace/dashes from the number and
    /// trim the free-text fields. `validate` checks sanitized views either
    /// way; call this when the canonical form should be stored back.
    pub fn normalize(&mut self) {
        self.number = validation::sanitize_number(&self.number);
        self.first_name = validation::sanitize_text(&self.first_name).to_string();
        self.last_name = validation::sanitize_text(&self.last_name).to_string();
        if let Some(v) = self.verification_value.take() {
            self.verification_value = Some(validation::sanitize_text(&v).to_string());
        }
        if let Some(i) = self.issue_number.take() {
            self.issue_number = Some(validation::sanitize_text(&i).to_string());
        }
    }

    /// Run the validation pipeline as of now (UTC). Empty result = valid.
    pub fn validate(&self) -> Vec<ValidationError> {
        self.validate_at(Utc::now().date_naive())
    }

    /// Run the validation pipeline against an explicit date, for
    /// deterministic expiry checks under test.
    pub fn validate_at(&self, today: NaiveDate) -> Vec<ValidationError> {
        validation::validate_card(self, today)
    }

    /// Normalize, then validate: the single-entry-point variant.
    pub fn validate_normalized(&mut self) -> Vec<ValidationError> {
        self.normalize();
        self.validate()
    }
}
