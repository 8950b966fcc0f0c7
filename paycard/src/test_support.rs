// paycard/src/test_support.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize sample card construction so tests across the
//! crate and tests/ directory can reuse the same fixtures.
#![allow(dead_code)]

use crate::brand::CardBrand;
use crate::card::CreditCard;
use crate::types::{ExpiryMonth, ExpiryYear};
use crate::validation::check_digit;
use chrono::NaiveDate;

/// Fixed "today" so expiry assertions stay deterministic. Sample cards
/// from this module expire well after it.
#[doc(hidden)]
pub fn sample_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, 15).expect("valid fixture date")
}

/// A fully valid Visa card: passes every validation rule at `sample_today`.
#[doc(hidden)]
pub fn valid_visa() -> CreditCard {
    card_with(CardBrand::Visa, "4242424242424242")
}

/// A bogus-brand card as a gateway test harness would build it.
#[doc(hidden)]
pub fn bogus_card() -> CreditCard {
    card_with(CardBrand::Bogus, "1")
}

/// A card with the given brand and number plus valid holder/expiry fields.
#[doc(hidden)]
pub fn card_with(brand: CardBrand, number: &str) -> CreditCard {
    let mut card = CreditCard::default();
    card.set_number(number);
    card.set_brand(brand);
    card.set_first_name("Steve");
    card.set_last_name("Smith");
    card.set_month(ExpiryMonth::new(9).expect("valid fixture month"));
    card.set_year(ExpiryYear::new(2030).expect("valid fixture year"));
    card
}

/// Append the Luhn check digit to `prefix`, yielding a checksum-valid
/// number. Panics on non-digit input; fixtures control their prefixes.
#[doc(hidden)]
pub fn number_with_check_digit(prefix: &str) -> String {
    let d = check_digit(prefix).expect("digit-only prefix");
    format!("{prefix}{d}")
}
