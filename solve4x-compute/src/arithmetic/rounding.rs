use crate::algebra::Number;
use std::{fmt, str::FromStr};

/// Controls how the results of adding and multiplying numbers are rounded.
///
/// The canned policies decide when significant-figure rules apply. Under those rules, a sum is
/// rounded to the fewest decimal places of its operands, and a product to the fewest significant
/// digits of its operands. When the rules do not apply, results are kept exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingPolicy {
    /// Always apply significant-figure rules.
    Always,

    /// Apply significant-figure rules unless both operands are whole numbers.
    #[default]
    ForScientificNotationAndDecimals,

    /// Apply significant-figure rules only if an operand is written in scientific notation.
    ForScientificNotation,

    /// Keep at most this many decimal places, without padding with zeros.
    Custom(u32),
}

impl RoundingPolicy {
    /// Returns true if significant-figure rules apply to an operation on these operands.
    ///
    /// Always false for [`RoundingPolicy::Custom`], which rounds by its own rule.
    pub fn applies_to(&self, a: &Number, b: &Number) -> bool {
        match self {
            Self::Always => true,
            Self::ForScientificNotationAndDecimals => !(a.is_whole() && b.is_whole()),
            Self::ForScientificNotation => a.uses_scientific_notation() || b.uses_scientific_notation(),
            Self::Custom(_) => false,
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Always => write!(f, "always"),
            Self::ForScientificNotationAndDecimals => write!(f, "decimals"),
            Self::ForScientificNotation => write!(f, "scientific"),
            Self::Custom(places) => write!(f, "{}", places),
        }
    }
}

/// Parses the names used on the command line: `always`, `decimals`, `scientific`, or a number of
/// decimal places.
impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "always" => Ok(Self::Always),
            "decimals" => Ok(Self::ForScientificNotationAndDecimals),
            "scientific" => Ok(Self::ForScientificNotation),
            _ => s.parse::<u32>()
                .map(Self::Custom)
                .map_err(|_| format!(
                    "unknown rounding policy `{}`; expected `always`, `decimals`, `scientific`, or a number of decimal places",
                    s,
                )),
        }
    }
}
