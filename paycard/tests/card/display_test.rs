#[path = "../common/mod.rs"]
mod common;

use paycard::prelude::*;
use paycard::test_support::valid_visa;

#[test]
fn masked_number_shows_only_last_four() {
    let card = valid_visa();
    assert_eq!(card.masked_number(), "XXXX-XXXX-XXXX-4242");
    assert_eq!(card.last_digits(), "4242");
}

#[test]
fn masking_is_uniform_across_brands() {
    // Amex is 15 digits; the default 4-4-4-4 grouping is still used.
    for (_, number) in common::fixtures::brand_samples() {
        let mut card = valid_visa();
        card.set_number(number.clone());
        let expected_suffix = &number[number.len() - 4..];
        assert_eq!(
            card.masked_number(),
            format!("XXXX-XXXX-XXXX-{expected_suffix}")
        );
    }
}

#[test]
fn too_short_to_mask_is_returned_unmodified() {
    let mut card = valid_visa();
    card.set_number("1");
    assert_eq!(card.masked_number(), "1");
    assert_eq!(card.last_digits(), "1");
}

#[test]
fn free_function_mask_matches_method() {
    assert_eq!(mask("4242424242424242"), "XXXX-XXXX-XXXX-4242");
    assert_eq!(last_digits("4242424242424242"), "4242");
}

#[test]
fn full_name_spacing_is_exact() {
    let mut card = valid_visa();
    assert_eq!(card.holder_full_name(), "Steve Smith");

    card.set_first_name("");
    assert_eq!(card.holder_full_name(), " Smith");

    card.set_last_name("");
    assert_eq!(card.holder_full_name(), " ");
}
