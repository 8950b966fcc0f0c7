// paycard/src/brand/mod.rs

//! Card network brands and the detection table.

use crate::{Error, Result};
use derive_more::Display;
use std::str::FromStr;

mod rules;
pub use rules::{BrandRules, Prefix};

/// Card network brand (scheme) determining the validation rules.
///
/// `Bogus` is a designated test-only brand: it bypasses length and checksum
/// checks so harnesses can exercise an integration without real numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardBrand {
    #[display(fmt = "visa")]
    Visa,
    #[display(fmt = "master")]
    MasterCard,
    #[display(fmt = "american_express")]
    Amex,
    #[display(fmt = "discover")]
    Discover,
    #[display(fmt = "diners_club")]
    DinersClub,
    #[display(fmt = "jcb")]
    Jcb,
    #[display(fmt = "switch")]
    Switch,
    #[display(fmt = "solo")]
    Solo,
    #[display(fmt = "dankort")]
    Dankort,
    #[display(fmt = "maestro")]
    Maestro,
    #[display(fmt = "forbrugsforeningen")]
    Forbrugsforeningen,
    #[display(fmt = "laser")]
    Laser,
    #[display(fmt = "bogus")]
    Bogus,
}

/// Detection order. More specific prefix sets come before brands whose
/// ranges engulf them: Switch/Solo numbers start with 4 or 63/67 and would
/// otherwise be claimed by Visa or Maestro, Dankort's 5019 sits next to
/// Maestro's 5018/5020, and Laser shares 6304 with Maestro (Maestro wins
/// only after Laser lengths are exhausted, so Laser is checked first).
const DETECTION_ORDER: &[CardBrand] = &[
    CardBrand::Switch,
    CardBrand::Solo,
    CardBrand::Dankort,
    CardBrand::Forbrugsforeningen,
    CardBrand::Visa,
    CardBrand::MasterCard,
    CardBrand::Amex,
    CardBrand::DinersClub,
    CardBrand::Discover,
    CardBrand::Jcb,
    CardBrand::Laser,
    CardBrand::Maestro,
];

impl CardBrand {
    /// Structural rules for this brand (lengths, prefixes, CVV length).
    pub fn rules(&self) -> &'static BrandRules {
        match self {
            CardBrand::Visa => &rules::VISA,
            CardBrand::MasterCard => &rules::MASTER_CARD,
            CardBrand::Amex => &rules::AMEX,
            CardBrand::Discover => &rules::DISCOVER,
            CardBrand::DinersClub => &rules::DINERS_CLUB,
            CardBrand::Jcb => &rules::JCB,
            CardBrand::Switch => &rules::SWITCH,
            CardBrand::Solo => &rules::SOLO,
            CardBrand::Dankort => &rules::DANKORT,
            CardBrand::Maestro => &rules::MAESTRO,
            CardBrand::Forbrugsforeningen => &rules::FORBRUGSFORENINGEN,
            CardBrand::Laser => &rules::LASER,
            CardBrand::Bogus => &rules::BOGUS,
        }
    }

    /// Detect the brand from a sanitized (digits-only) number.
    ///
    /// Returns the first brand in the detection order whose length and
    /// prefix rules both match; `Bogus` is never detected, only declared.
    pub fn detect(number: &str) -> Option<CardBrand> {
        let found = DETECTION_ORDER
            .iter()
            .copied()
            .find(|brand| brand.rules().matches(number));
        log::trace!("brand detection for {} digits: {:?}", number.len(), found);
        found
    }

    /// Whether this is the test-only brand.
    pub fn is_bogus(&self) -> bool {
        matches!(self, CardBrand::Bogus)
    }
}

impl FromStr for CardBrand {
    type Err = Error;

    /// Parse the lowercase wire name ("visa", "master", ...). A few common
    /// aliases are accepted.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "visa" => Ok(CardBrand::Visa),
            "master" | "mastercard" | "master_card" => Ok(CardBrand::MasterCard),
            "american_express" | "amex" => Ok(CardBrand::Amex),
            "discover" => Ok(CardBrand::Discover),
            "diners_club" | "diners" => Ok(CardBrand::DinersClub),
            "jcb" => Ok(CardBrand::Jcb),
            "switch" => Ok(CardBrand::Switch),
            "solo" => Ok(CardBrand::Solo),
            "dankort" => Ok(CardBrand::Dankort),
            "maestro" => Ok(CardBrand::Maestro),
            "forbrugsforeningen" => Ok(CardBrand::Forbrugsforeningen),
            "laser" => Ok(CardBrand::Laser),
            "bogus" => Ok(CardBrand::Bogus),
            other => Err(Error::UnknownBrand(other.to_string())),
        }
    }
}
