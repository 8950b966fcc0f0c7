#[path = "../common/mod.rs"]
mod common;

use chrono::NaiveDate;
use paycard::prelude::*;
use paycard::test_support::{bogus_card, card_with, sample_today, valid_visa};

fn number_errors(card: &CreditCard) -> Vec<ValidationError> {
    card.validate_at(sample_today())
        .into_iter()
        .filter(|e| e.field() == Field::Number)
        .collect()
}

#[test]
fn every_brand_sample_validates_cleanly() {
    for (brand, number) in common::fixtures::brand_samples() {
        let card = common::fixtures::valid_card_for(brand, &number);
        let errors = card.validate_at(sample_today());
        assert!(
            errors.is_empty(),
            "{brand} card {number} should be valid, got: {errors:?}"
        );
    }
}

#[test]
fn wrong_check_digit_fails_checksum() {
    let mut card = valid_visa();
    card.set_number("4242424242424241");
    assert_eq!(number_errors(&card), vec![ValidationError::FailedChecksum]);
}

#[test]
fn wrong_length_for_brand_is_reported_before_checksum() {
    let mut card = valid_visa();
    card.set_number("42424242424242"); // 14 digits
    assert_eq!(
        number_errors(&card),
        vec![ValidationError::WrongLength {
            brand: CardBrand::Visa,
            actual: 14,
        }]
    );
}

#[test]
fn declared_brand_must_match_the_number() {
    // A checksum-valid MasterCard number declared as Visa
    let card = card_with(CardBrand::Visa, "5555555555554444");
    let errors = card.validate_at(sample_today());
    assert!(errors.contains(&ValidationError::BrandMismatch {
        declared: CardBrand::Visa
    }));
}

#[test]
fn bogus_brand_never_reports_checksum_errors() {
    for number in ["1", "2", "3", "999", "not-even-digits-4242"] {
        let card = card_with(CardBrand::Bogus, number);
        let errors = card.validate_at(sample_today());
        assert!(
            errors.is_empty(),
            "bogus card {number:?} should skip structural checks, got: {errors:?}"
        );
    }
}

#[test]
fn bogus_brand_still_requires_a_number() {
    let card = card_with(CardBrand::Bogus, "");
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::Required(Field::Number)]);
}

#[test]
fn separators_in_the_number_are_tolerated() {
    let mut card = valid_visa();
    card.set_number("4242 4242 4242 4242");
    assert!(card.validate_at(sample_today()).is_empty());
    card.set_number("4242-4242-4242-4242");
    assert!(card.validate_at(sample_today()).is_empty());
}

#[test]
fn undeclared_brand_reports_required_but_still_checks_structure() {
    let mut card = valid_visa();
    card.set_number("4242424242424241");
    // Clear the brand by rebuilding without one
    let card2 = CreditCard::builder()
        .number(card.number())
        .first_name("Steve")
        .last_name("Smith")
        .month(ExpiryMonth::new(9).unwrap())
        .year(ExpiryYear::new(2030).unwrap())
        .build()
        .unwrap();
    let errors = card2.validate_at(sample_today());
    assert!(errors.contains(&ValidationError::Required(Field::Brand)));
    assert!(errors.contains(&ValidationError::FailedChecksum));
}

#[test]
fn expired_card_reports_expired_on_year() {
    let mut card = valid_visa();
    card.set_month(ExpiryMonth::new(5).unwrap());
    card.set_year(ExpiryYear::new(2026).unwrap());
    let today = NaiveDate::from_ymd_opt(2026, 6, 15).unwrap();
    let errors = card.validate_at(today);
    assert_eq!(errors, vec![ValidationError::Expired]);
    assert_eq!(errors[0].field(), Field::Year);
}

#[test]
fn current_month_is_still_valid() {
    let mut card = valid_visa();
    card.set_month(ExpiryMonth::new(6).unwrap());
    card.set_year(ExpiryYear::new(2026).unwrap());
    let today = NaiveDate::from_ymd_opt(2026, 6, 30).unwrap();
    assert!(card.validate_at(today).is_empty());
}

#[test]
fn far_future_year_is_out_of_window() {
    let mut card = valid_visa();
    card.set_year(ExpiryYear::new(2060).unwrap());
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::YearOutOfWindow]);
}

#[test]
fn missing_holder_names_are_required() {
    let card = CreditCard::builder()
        .number("4242424242424242")
        .brand(CardBrand::Visa)
        .month(ExpiryMonth::new(9).unwrap())
        .year(ExpiryYear::new(2030).unwrap())
        .build()
        .unwrap();
    let errors = card.validate_at(sample_today());
    assert!(errors.contains(&ValidationError::Required(Field::FirstName)));
    assert!(errors.contains(&ValidationError::Required(Field::LastName)));
}

#[test]
fn switch_requires_start_date_or_issue_number() {
    let card = card_with(CardBrand::Switch, "6759649826438453");
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::MissingIssueDetails]);

    let mut with_issue = card.clone();
    with_issue.set_issue_number("1");
    assert!(with_issue.validate_at(sample_today()).is_empty());

    let mut with_start = card.clone();
    with_start.set_start_month(ExpiryMonth::new(1).unwrap());
    with_start.set_start_year(2020);
    assert!(with_start.validate_at(sample_today()).is_empty());
}

#[test]
fn switch_start_year_must_be_plausible() {
    let mut card = card_with(CardBrand::Switch, "6759649826438453");
    card.set_start_month(ExpiryMonth::new(1).unwrap());
    card.set_start_year(1987);
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::InvalidStartYear]);

    card.set_start_year(2031); // after sample_today
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::InvalidStartYear]);
}

#[test]
fn switch_start_date_may_not_be_in_the_future() {
    // sample_today is 2026-06-15; a start date later in the same year is
    // still in the future even though the year passes the range check.
    let mut card = card_with(CardBrand::Switch, "6759649826438453");
    card.set_start_month(ExpiryMonth::new(12).unwrap());
    card.set_start_year(2026);
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::StartDateInFuture]);
    assert_eq!(errors[0].field(), Field::StartMonth);

    // The current month counts as started
    card.set_start_month(ExpiryMonth::new(6).unwrap());
    assert!(card.validate_at(sample_today()).is_empty());

    card.set_start_month(ExpiryMonth::new(1).unwrap());
    assert!(card.validate_at(sample_today()).is_empty());
}

#[test]
fn switch_issue_number_must_be_one_or_two_digits() {
    let mut card = card_with(CardBrand::Switch, "6759649826438453");
    card.set_issue_number("123");
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::InvalidIssueNumber]);

    card.set_issue_number("1a");
    let errors = card.validate_at(sample_today());
    assert_eq!(errors, vec![ValidationError::InvalidIssueNumber]);

    card.set_issue_number("12");
    assert!(card.validate_at(sample_today()).is_empty());
}

#[test]
fn cvv_checked_only_when_present() {
    let mut card = valid_visa();
    assert!(card.validate_at(sample_today()).is_empty());

    card.set_verification_value("123");
    assert!(card.validate_at(sample_today()).is_empty());

    card.set_verification_value("12");
    assert_eq!(
        card.validate_at(sample_today()),
        vec![ValidationError::WrongCvvLength { expected: 3 }]
    );

    card.set_verification_value("12x");
    assert_eq!(
        card.validate_at(sample_today()),
        vec![ValidationError::WrongCvvLength { expected: 3 }]
    );
}

#[test]
fn amex_cvv_is_four_digits() {
    let mut card = card_with(CardBrand::Amex, "378282246310005");
    card.set_verification_value("1234");
    assert!(card.validate_at(sample_today()).is_empty());

    card.set_verification_value("123");
    assert_eq!(
        card.validate_at(sample_today()),
        vec![ValidationError::WrongCvvLength { expected: 4 }]
    );
}

#[test]
fn bogus_card_fixture_is_valid() {
    assert!(bogus_card().validate_at(sample_today()).is_empty());
}
