// paycard/src/validation/luhn.rs

/// Luhn checksum over a digits-only number.
///
/// Single right-to-left pass: every second digit is doubled and folded back
/// into one digit. Any non-digit character makes the input invalid.
pub fn luhn_valid(number: &str) -> bool {
    if number.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    for (i, c) in number.chars().rev().enumerate() {
        let Some(d) = c.to_digit(10) else {
            return false;
        };
        sum += if i % 2 == 1 {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };
    }
    sum % 10 == 0
}

/// Compute the digit that makes `partial` followed by it Luhn-valid.
///
/// Returns `None` if `partial` contains a non-digit. Used by test support to
/// generate valid numbers for arbitrary prefixes.
pub fn check_digit(partial: &str) -> Option<u8> {
    let mut sum = 0u32;
    for (i, c) in partial.chars().rev().enumerate() {
        let d = c.to_digit(10)?;
        // The appended check digit shifts every position by one, so the
        // digit at reversed index 0 here lands on a doubled position.
        sum += if i % 2 == 0 {
            let doubled = d * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            d
        };
    }
    Some(((10 - (sum % 10)) % 10) as u8)
}
