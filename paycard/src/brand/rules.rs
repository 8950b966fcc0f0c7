// paycard/src/brand/rules.rs

//! Structural rule table backing brand detection and number validation.
//!
//! Rules are prefix lists plus accepted lengths rather than regular
//! expressions; every entry is a `'static` table so lookups allocate nothing.

/// A leading-digit pattern a card number may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// Exact leading digits, e.g. `"6011"`.
    Literal(&'static str),
    /// The first `digits` characters parsed as a number fall in `lo..=hi`,
    /// e.g. MasterCard's 51..=55 or the 2221..=2720 series range.
    Range { lo: u32, hi: u32, digits: usize },
}

impl Prefix {
    /// Whether `number` (digits only) starts with this prefix.
    pub fn matches(&self, number: &str) -> bool {
        match *self {
            Prefix::Literal(lit) => number.starts_with(lit),
            Prefix::Range { lo, hi, digits } => number
                .get(..digits)
                .and_then(|head| head.parse::<u32>().ok())
                .is_some_and(|head| (lo..=hi).contains(&head)),
        }
    }
}

/// Per-brand structural rules.
#[derive(Debug, Clone, Copy)]
pub struct BrandRules {
    /// Accepted number lengths. Empty means any non-empty number.
    pub lengths: &'static [usize],
    /// Accepted leading-digit patterns. Empty means any.
    pub prefixes: &'static [Prefix],
    /// Exact verification value (CVV) length.
    pub cvv_len: usize,
    /// Whether the Luhn checksum applies.
    pub luhn: bool,
    /// Whether start date / issue number are required (Switch, Solo).
    pub issue_details: bool,
}

impl BrandRules {
    pub fn length_ok(&self, len: usize) -> bool {
        if self.lengths.is_empty() {
            len > 0
        } else {
            self.lengths.contains(&len)
        }
    }

    pub fn prefix_ok(&self, number: &str) -> bool {
        self.prefixes.is_empty() || self.prefixes.iter().any(|p| p.matches(number))
    }

    /// Full structural match: length and prefix.
    pub fn matches(&self, number: &str) -> bool {
        self.length_ok(number.len()) && self.prefix_ok(number)
    }
}

const fn lit(s: &'static str) -> Prefix {
    Prefix::Literal(s)
}

pub(super) const VISA: BrandRules = BrandRules {
    lengths: &[13, 16],
    prefixes: &[lit("4")],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const MASTER_CARD: BrandRules = BrandRules {
    lengths: &[16],
    prefixes: &[
        Prefix::Range { lo: 51, hi: 55, digits: 2 },
        Prefix::Range { lo: 2221, hi: 2720, digits: 4 },
    ],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const AMEX: BrandRules = BrandRules {
    lengths: &[15],
    prefixes: &[lit("34"), lit("37")],
    cvv_len: 4,
    luhn: true,
    issue_details: false,
};

pub(super) const DISCOVER: BrandRules = BrandRules {
    lengths: &[16],
    prefixes: &[
        lit("6011"),
        lit("65"),
        Prefix::Range { lo: 644, hi: 649, digits: 3 },
    ],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const DINERS_CLUB: BrandRules = BrandRules {
    lengths: &[14],
    prefixes: &[
        Prefix::Range { lo: 300, hi: 305, digits: 3 },
        lit("36"),
        lit("38"),
    ],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const JCB: BrandRules = BrandRules {
    lengths: &[16],
    prefixes: &[Prefix::Range { lo: 3528, hi: 3589, digits: 4 }],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const SWITCH: BrandRules = BrandRules {
    lengths: &[16, 18, 19],
    prefixes: &[
        lit("4903"),
        lit("4905"),
        lit("4911"),
        lit("4936"),
        lit("564182"),
        lit("633110"),
        lit("6333"),
        lit("6759"),
    ],
    cvv_len: 3,
    luhn: true,
    issue_details: true,
};

pub(super) const SOLO: BrandRules = BrandRules {
    lengths: &[16, 18, 19],
    prefixes: &[lit("6334"), lit("6767")],
    cvv_len: 3,
    luhn: true,
    issue_details: true,
};

pub(super) const DANKORT: BrandRules = BrandRules {
    lengths: &[16],
    prefixes: &[lit("5019")],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const MAESTRO: BrandRules = BrandRules {
    lengths: &[12, 13, 14, 15, 16, 17, 18, 19],
    prefixes: &[
        lit("5018"),
        lit("5020"),
        lit("5038"),
        lit("6304"),
        lit("6759"),
        lit("6761"),
        lit("6763"),
    ],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const FORBRUGSFORENINGEN: BrandRules = BrandRules {
    lengths: &[16],
    prefixes: &[lit("600722")],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

pub(super) const LASER: BrandRules = BrandRules {
    lengths: &[16, 17, 18, 19],
    prefixes: &[lit("6304"), lit("6706"), lit("6709"), lit("6771")],
    cvv_len: 3,
    luhn: true,
    issue_details: false,
};

/// Test-only brand: any non-empty number, no checksum.
pub(super) const BOGUS: BrandRules = BrandRules {
    lengths: &[],
    prefixes: &[],
    cvv_len: 3,
    luhn: false,
    issue_details: false,
};
