use once_cell::sync::Lazy;
use super::signed_particle;

/// The number `0`.
pub static ZERO: Lazy<Number> = Lazy::new(|| Number::whole(true, "0"));

/// The number `1`.
pub static ONE: Lazy<Number> = Lazy::new(|| Number::whole(true, "1"));

/// The number `-1`.
pub static NEGATIVE_ONE: Lazy<Number> = Lazy::new(|| Number::whole(false, "1"));

/// A number, stored as the digit strings it was written with.
///
/// Numbers are never converted to binary floats. The integer and decimal parts are kept as
/// strings so that a number renders exactly as it was written, and the arithmetic layer converts
/// them to exact scaled integers when it needs to compute with them.
#[derive(Debug, Clone, Eq)]
pub struct Number {
    sign: bool,

    /// The digits before the decimal point.
    integer: String,

    /// The digits after the decimal point, if there is one.
    decimal: Option<String>,

    /// The power of ten this number is written with in scientific notation, such as `7` in
    /// `3.0*10⁷`.
    sci_exponent: Option<i32>,

    exponent: u32,
}

signed_particle!(Number);

impl Number {
    /// Creates a number from its parts. The integer and decimal parts must only contain ASCII
    /// digits.
    pub fn new(
        sign: bool,
        integer: impl Into<String>,
        decimal: Option<String>,
        sci_exponent: Option<i32>,
        exponent: u32,
    ) -> Self {
        Self { sign, integer: integer.into(), decimal, sci_exponent, exponent }
    }

    /// Creates a whole number with no exponent.
    pub fn whole(sign: bool, integer: impl Into<String>) -> Self {
        Self::new(sign, integer, None, None, 1)
    }

    /// Returns the digits before the decimal point.
    pub fn integer(&self) -> &str {
        &self.integer
    }

    /// Returns the digits after the decimal point.
    pub fn decimal(&self) -> Option<&str> {
        self.decimal.as_deref()
    }

    /// Returns the power of ten this number is written with, if it uses scientific notation.
    pub fn sci_exponent(&self) -> Option<i32> {
        self.sci_exponent
    }

    /// Returns true if this number is written in scientific notation.
    pub fn uses_scientific_notation(&self) -> bool {
        self.sci_exponent.is_some()
    }

    /// Returns true if this number is written without a decimal point or scientific notation.
    pub fn is_whole(&self) -> bool {
        self.decimal.is_none() && self.sci_exponent.is_none()
    }

    /// Returns true if every digit of this number is zero.
    pub fn is_zero(&self) -> bool {
        self.digits().all(|c| c == '0')
    }

    /// Returns true if this is the whole number `1` with no exponent, with either sign.
    pub fn is_one(&self) -> bool {
        self.is_whole() && self.exponent == 1 && self.integer.trim_start_matches('0') == "1"
    }

    /// Returns all the digits of this number, integer part first.
    pub fn digits(&self) -> impl Iterator<Item = char> + '_ {
        self.integer.chars().chain(self.decimal.iter().flat_map(|decimal| decimal.chars()))
    }

    /// Returns true if the two numbers are written the same way, ignoring sign and exponent.
    pub(crate) fn magnitude_eq(&self, other: &Number) -> bool {
        self.integer == other.integer
            && self.decimal == other.decimal
            && self.sci_exponent == other.sci_exponent
    }
}

/// Zero is equal to itself regardless of sign; every other number must match exactly.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        let signs_match = self.sign == other.sign || (self.is_zero() && other.is_zero());
        signs_match && self.exponent == other.exponent && self.magnitude_eq(other)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn constants() {
        assert!(ZERO.is_zero());
        assert!(ONE.is_one());
        assert!(NEGATIVE_ONE.is_one());
        assert!(!NEGATIVE_ONE.sign());
    }

    #[test]
    fn signed_zero() {
        assert_eq!(ZERO.with_sign_and_exponent(false, 1), *ZERO);
    }

    #[test]
    fn wholeness() {
        assert!(Number::whole(true, "12").is_whole());
        assert!(!Number::new(true, "1", Some("5".to_string()), None, 1).is_whole());
        assert!(!Number::new(true, "3", None, Some(7), 1).is_whole());
    }

    #[test]
    fn decimal_zero() {
        assert!(Number::new(false, "0", Some("00".to_string()), None, 1).is_zero());
        assert!(!Number::new(true, "0", Some("01".to_string()), None, 1).is_zero());
    }
}
