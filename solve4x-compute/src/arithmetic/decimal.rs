use crate::algebra::{Number, ZERO};
use rug::{ops::Pow, Integer};
use super::MAX_DIGITS;

/// Returns `10ⁿ`.
fn pow10(n: u32) -> Integer {
    Integer::from(10).pow(n)
}

/// An exact decimal value: `unscaled × 10^(-scale)`.
///
/// The scale is the number of decimal places. Numbers written in scientific notation can have a
/// negative scale: `2.4*10⁴` is `24` at scale `-3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decimal {
    unscaled: Integer,
    scale: i64,
}

impl Decimal {
    /// Returns the number of decimal places of this value.
    pub fn scale(&self) -> i64 {
        self.scale
    }

    /// Returns true if this value is zero.
    pub fn is_zero(&self) -> bool {
        self.unscaled == 0
    }

    /// Returns the number of significant digits of this value. Leading zeros are not
    /// significant; trailing zeros are. Zero has one significant digit.
    pub fn precision(&self) -> u32 {
        self.unscaled.clone().abs().to_string().len() as u32
    }

    /// Returns this value at the given scale, rounding half away from zero if digits are
    /// dropped.
    ///
    /// Returns [`None`] if the value would gain more than [`MAX_DIGITS`] digits. Dropping more
    /// digits than the value has rounds it to zero.
    pub fn with_scale(&self, scale: i64) -> Option<Self> {
        let shift = scale.abs_diff(self.scale);
        let unscaled = if scale >= self.scale {
            let shift = u32::try_from(shift).ok().filter(|&shift| shift <= MAX_DIGITS)?;
            self.unscaled.clone() * pow10(shift)
        } else if shift > u64::from(self.precision()) {
            Integer::new()
        } else {
            let shift = u32::try_from(shift).ok()?;
            let (quotient, _) = self.unscaled.clone().div_rem_round(pow10(shift));
            quotient
        };
        Some(Self { unscaled, scale })
    }

    /// Returns this value rounded to at most the given number of significant digits.
    pub fn with_precision(&self, precision: u32) -> Option<Self> {
        let current = self.precision();
        if current <= precision {
            Some(self.clone())
        } else {
            self.with_scale(self.scale - i64::from(current - precision))
        }
    }

    /// Returns the exact sum, at the larger of the two scales, or [`None`] if aligning the
    /// scales needs more than [`MAX_DIGITS`] digits.
    pub fn add(&self, other: &Self) -> Option<Self> {
        let scale = self.scale.max(other.scale);
        let unscaled = self.with_scale(scale)?.unscaled + other.with_scale(scale)?.unscaled;
        Some(Self { unscaled, scale })
    }

    /// Returns the exact product.
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            unscaled: self.unscaled.clone() * &other.unscaled,
            scale: self.scale + other.scale,
        }
    }

    /// Converts this value back into a [`Number`].
    ///
    /// The number is written in scientific notation if requested or if the scale is negative,
    /// with one digit before the decimal point. Zero is always [`ZERO`]. Returns [`None`] if the
    /// scientific exponent does not fit in an `i32`.
    pub fn to_number(&self, scientific: bool) -> Option<Number> {
        if self.is_zero() {
            return Some(ZERO.clone());
        }

        let sign = self.unscaled > 0;
        let digits = self.unscaled.clone().abs().to_string();

        if scientific || self.scale < 0 {
            let sci_exponent = i64::try_from(digits.len()).ok()? - 1 - self.scale;
            let sci_exponent = i32::try_from(sci_exponent).ok()?;
            let (integer, decimal) = digits.split_at(1);
            let decimal = (!decimal.is_empty()).then(|| decimal.to_string());
            return Some(Number::new(sign, integer, decimal, Some(sci_exponent), 1));
        }

        let scale = usize::try_from(self.scale).ok()?;
        let digits = if digits.len() <= scale {
            format!("{}{}", "0".repeat(scale + 1 - digits.len()), digits)
        } else {
            digits
        };
        let (integer, decimal) = digits.split_at(digits.len() - scale);
        let decimal = (scale > 0).then(|| decimal.to_string());
        Some(Number::new(sign, integer, decimal, None, 1))
    }
}

/// Reads the digits of the number exactly. The exponent of the number is ignored.
impl From<&Number> for Decimal {
    fn from(number: &Number) -> Self {
        let digits = number.digits().collect::<String>();
        let magnitude = Integer::from_str_radix(&digits, 10).unwrap_or_default();
        let places = number.decimal().map_or(0, str::len) as i64;

        Self {
            unscaled: if number.sign() { magnitude } else { -magnitude },
            scale: places - i64::from(number.sci_exponent().unwrap_or(0)),
        }
    }
}
