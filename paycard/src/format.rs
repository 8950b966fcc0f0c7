// paycard/src/format.rs

//! Display formatting for card numbers: masking and last-digit extraction.

use crate::constants::{MASK_CHAR, MASK_SEPARATOR, UNMASKED_SUFFIX_LEN};

/// Mask all but the last four characters of a card number for display,
/// grouped 4-4-4-4: `XXXX-XXXX-XXXX-4242`.
///
/// The 4-4-4-4 grouping is used for every brand, including 15-digit Amex
/// numbers; only the visible suffix comes from the input. Numbers of four
/// characters or fewer are too short to mask meaningfully and are returned
/// unmodified.
pub fn mask(number: &str) -> String {
    if number.chars().count() <= UNMASKED_SUFFIX_LEN {
        return number.to_string();
    }

    let group: String = std::iter::repeat(MASK_CHAR)
        .take(UNMASKED_SUFFIX_LEN)
        .collect();
    format!(
        "{group}{sep}{group}{sep}{group}{sep}{last}",
        sep = MASK_SEPARATOR,
        last = last_digits(number)
    )
}

/// Trailing four characters of the number, or the whole number if shorter.
pub fn last_digits(number: &str) -> &str {
    let len = number.chars().count();
    if len <= UNMASKED_SUFFIX_LEN {
        number
    } else {
        let cut = number
            .char_indices()
            .nth(len - UNMASKED_SUFFIX_LEN)
            .map(|(i, _)| i)
            .unwrap_or(0);
        &number[cut..]
    }
}
