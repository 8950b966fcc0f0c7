// paycard/src/constants.rs
//! Common formatting and validation constants used across the crate

/// Character substituted for masked digits in display output
pub const MASK_CHAR: char = 'X';

/// Separator between masked groups: XXXX-XXXX-XXXX-4242
pub const MASK_SEPARATOR: char = '-';

/// Digits left visible at the end of a masked number
pub const UNMASKED_SUFFIX_LEN: usize = 4;

/// Shortest plausible card number when no brand is declared
pub const NUMBER_MIN_LEN: usize = 12;

/// Longest plausible card number when no brand is declared
pub const NUMBER_MAX_LEN: usize = 19;

/// How far into the future an expiry year may lie
pub const EXPIRY_YEAR_WINDOW: u16 = 20;

/// Earliest acceptable start year for Switch / Solo debit cards
pub const START_YEAR_MIN: u16 = 1988;

/// Longest issue number accepted for Switch / Solo debit cards
pub const ISSUE_NUMBER_MAX_LEN: usize = 2;
