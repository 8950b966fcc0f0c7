use chrono::NaiveDate;
use paycard::prelude::*;
use paycard::test_support::valid_visa;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn expiry_date_is_recomputed_from_fields() {
    let mut card = valid_visa();
    card.set_month(ExpiryMonth::new(3).unwrap());
    card.set_year(ExpiryYear::new(2027).unwrap());

    let expiry = card.expiry_date().unwrap();
    assert_eq!(expiry.month().as_u8(), 3);
    assert_eq!(expiry.year().as_u16(), 2027);
}

#[test]
fn expired_strictly_before_current_month() {
    let expiry = ExpiryDate::new(
        ExpiryMonth::new(6).unwrap(),
        ExpiryYear::new(2026).unwrap(),
    );
    assert!(expiry.expired_at(date(2026, 7, 1)));
    assert!(!expiry.expired_at(date(2026, 6, 30)));
    assert!(!expiry.expired_at(date(2026, 6, 1)));
    assert!(!expiry.expired_at(date(2025, 12, 31)));
}

#[test]
fn card_without_expiry_is_not_expired() {
    let card = CreditCard::default();
    assert!(!card.is_expired());
}

#[test]
fn last_date_is_the_end_of_the_month() {
    let expiry = ExpiryDate::new(
        ExpiryMonth::new(2).unwrap(),
        ExpiryYear::new(2028).unwrap(),
    );
    assert_eq!(expiry.last_date(), Some(date(2028, 2, 29)));
}
