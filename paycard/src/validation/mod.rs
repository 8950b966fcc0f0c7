// paycard/src/validation/mod.rs

//! Field-level validation of a [`CreditCard`].
//!
//! Validation is composed from small rule objects implementing [`Validator`]
//! rather than baked into the card type: each rule appends field-scoped
//! [`ValidationError`]s and the pipeline in [`validate_card`] runs them in a
//! fixed order. Expected-invalid input never raises; an empty error vector
//! means the card is valid.

use crate::brand::CardBrand;
use crate::card::CreditCard;
use crate::constants::{
    EXPIRY_YEAR_WINDOW, ISSUE_NUMBER_MAX_LEN, NUMBER_MAX_LEN, NUMBER_MIN_LEN, START_YEAR_MIN,
};
use crate::types::Field;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;

pub mod luhn;
pub mod sanitize;

pub use luhn::{check_digit, luhn_valid};
pub use sanitize::{sanitize_number, sanitize_text};

/// A single field-scoped validation failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(Field),

    #[error("number is {actual} digits, which is not a valid length for {brand}")]
    WrongLength { brand: CardBrand, actual: usize },

    #[error("number is {actual} digits, which is not a plausible card number length")]
    ImplausibleLength { actual: usize },

    #[error("number is not a valid card number")]
    FailedChecksum,

    #[error("brand {declared} does not match the card number")]
    BrandMismatch { declared: CardBrand },

    #[error("year is expired")]
    Expired,

    #[error("year is too far in the future")]
    YearOutOfWindow,

    #[error("start date or issue_number is required for this brand")]
    MissingIssueDetails,

    #[error("start_year is not a valid start year")]
    InvalidStartYear,

    #[error("start date cannot be in the future")]
    StartDateInFuture,

    #[error("issue_number is not a valid issue number")]
    InvalidIssueNumber,

    #[error("verification_value should be {expected} digits")]
    WrongCvvLength { expected: usize },
}

impl ValidationError {
    /// The card field this failure is scoped to.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::Required(field) => *field,
            ValidationError::WrongLength { .. }
            | ValidationError::ImplausibleLength { .. }
            | ValidationError::FailedChecksum => Field::Number,
            ValidationError::BrandMismatch { .. } => Field::Brand,
            ValidationError::Expired | ValidationError::YearOutOfWindow => Field::Year,
            ValidationError::MissingIssueDetails | ValidationError::InvalidIssueNumber => {
                Field::IssueNumber
            }
            ValidationError::InvalidStartYear => Field::StartYear,
            ValidationError::StartDateInFuture => Field::StartMonth,
            ValidationError::WrongCvvLength { .. } => Field::VerificationValue,
        }
    }
}

/// A single validation rule over the whole card.
///
/// Rules receive `today` explicitly so time-dependent checks (expiry, start
/// year) stay deterministic under test.
pub trait Validator {
    /// Append any failures for `card` to `errors`.
    fn check(&self, card: &CreditCard, today: NaiveDate, errors: &mut Vec<ValidationError>);
}

/// Holder names present, expiry present / not in the past / within window.
pub struct HolderAndExpiry;

impl Validator for HolderAndExpiry {
    fn check(&self, card: &CreditCard, today: NaiveDate, errors: &mut Vec<ValidationError>) {
        if sanitize_text(card.first_name()).is_empty() {
            errors.push(ValidationError::Required(Field::FirstName));
        }
        if sanitize_text(card.last_name()).is_empty() {
            errors.push(ValidationError::Required(Field::LastName));
        }
        if card.month().is_none() {
            errors.push(ValidationError::Required(Field::Month));
        }
        if card.year().is_none() {
            errors.push(ValidationError::Required(Field::Year));
        }

        if let Some(expiry) = card.expiry_date() {
            if expiry.expired_at(today) {
                errors.push(ValidationError::Expired);
            } else if expiry.year().as_u16() > today.year() as u16 + EXPIRY_YEAR_WINDOW {
                errors.push(ValidationError::YearOutOfWindow);
            }
        }
    }
}

/// Number presence, per-brand length/prefix, Luhn checksum.
///
/// The bogus brand short-circuits everything except presence.
pub struct NumberAndBrand;

impl Validator for NumberAndBrand {
    fn check(&self, card: &CreditCard, _today: NaiveDate, errors: &mut Vec<ValidationError>) {
        let digits = sanitize_number(card.number());
        if digits.is_empty() {
            errors.push(ValidationError::Required(Field::Number));
        }

        match card.brand() {
            Some(brand) if brand.is_bogus() => {}
            Some(brand) => {
                if digits.is_empty() {
                    return;
                }
                let rules = brand.rules();
                if !rules.length_ok(digits.len()) {
                    errors.push(ValidationError::WrongLength {
                        brand,
                        actual: digits.len(),
                    });
                } else if !rules.prefix_ok(&digits) {
                    errors.push(ValidationError::BrandMismatch { declared: brand });
                } else if rules.luhn && !luhn_valid(&digits) {
                    errors.push(ValidationError::FailedChecksum);
                }
            }
            None => {
                errors.push(ValidationError::Required(Field::Brand));
                if digits.is_empty() {
                    return;
                }
                // Structural checks still run without a declared brand, using
                // the generic plausible length range.
                if !(NUMBER_MIN_LEN..=NUMBER_MAX_LEN).contains(&digits.len()) {
                    errors.push(ValidationError::ImplausibleLength {
                        actual: digits.len(),
                    });
                } else if !luhn_valid(&digits) {
                    errors.push(ValidationError::FailedChecksum);
                }
            }
        }
    }
}

/// Switch / Solo debit cards: start date or issue number required.
pub struct IssueDetails;

impl Validator for IssueDetails {
    fn check(&self, card: &CreditCard, today: NaiveDate, errors: &mut Vec<ValidationError>) {
        let Some(brand) = card.brand() else { return };
        if !brand.rules().issue_details {
            return;
        }

        let has_start = card.start_month().is_some() && card.start_year().is_some();
        let issue = card.issue_number().map(sanitize_text).unwrap_or("");
        if !has_start && issue.is_empty() {
            errors.push(ValidationError::MissingIssueDetails);
        }

        if let Some(start_year) = card.start_year() {
            let current = today.year() as u16;
            if !(START_YEAR_MIN..=current).contains(&start_year) {
                errors.push(ValidationError::InvalidStartYear);
            } else if let Some(start_month) = card.start_month() {
                // Month granularity: a start date in the current year may
                // still lie ahead of today.
                let start = (start_year as i32, start_month.as_u8() as u32);
                if start > (today.year(), today.month()) {
                    errors.push(ValidationError::StartDateInFuture);
                }
            }
        }

        if !issue.is_empty()
            && (issue.len() > ISSUE_NUMBER_MAX_LEN || !issue.chars().all(|c| c.is_ascii_digit()))
        {
            errors.push(ValidationError::InvalidIssueNumber);
        }
    }
}

/// CVV format: digits only, exact length from the brand table.
///
/// The value is optional; best-effort checked only when supplied.
pub struct VerificationValueFormat;

impl Validator for VerificationValueFormat {
    fn check(&self, card: &CreditCard, _today: NaiveDate, errors: &mut Vec<ValidationError>) {
        let Some(raw) = card.verification_value() else {
            return;
        };
        let value = sanitize_text(raw);
        if value.is_empty() {
            return;
        }

        let expected = card.brand().map(|b| b.rules().cvv_len).unwrap_or(3);
        if value.len() != expected || !value.chars().all(|c| c.is_ascii_digit()) {
            errors.push(ValidationError::WrongCvvLength { expected });
        }
    }
}

/// Run the full rule pipeline against `card` as of `today`.
pub fn validate_card(card: &CreditCard, today: NaiveDate) -> Vec<ValidationError> {
    let rules: [&dyn Validator; 4] = [
        &HolderAndExpiry,
        &NumberAndBrand,
        &IssueDetails,
        &VerificationValueFormat,
    ];

    let mut errors = Vec::new();
    for rule in rules {
        rule.check(card, today, &mut errors);
    }
    log::debug!(
        "card validation finished with {} error(s)",
        errors.len()
    );
    errors
}
