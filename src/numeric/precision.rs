// ============================================================================
// Precision Context
// Significant-digit rounding applied to every decimal result
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::{Decimal, MathematicalOps, RoundingStrategy};
use std::fmt;

/// Number of significant digits retained by decimal arithmetic.
///
/// Every result produced through a `Precision` is rounded half-even to
/// `digits` significant figures, so a sequence of operations behaves like a
/// fixed-precision decimal context.
///
/// # Example
/// ```ignore
/// use decimal_vector::numeric::Precision;
/// use rust_decimal::Decimal;
///
/// let p = Precision::new(4)?;
/// let third = p.checked_div(Decimal::ONE, Decimal::from(3))?; // 0.3333
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision(u32);

impl Precision {
    /// Largest supported number of significant digits
    pub const MAX_DIGITS: u32 = 28;

    /// Significant digits used when nothing else is configured
    pub const DEFAULT_DIGITS: u32 = 7;

    /// Create a precision of `digits` significant figures.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` unless `1 <= digits <= 28`.
    pub fn new(digits: u32) -> NumericResult<Self> {
        if digits == 0 || digits > Self::MAX_DIGITS {
            return Err(NumericError::InvalidPrecision);
        }
        Ok(Self(digits))
    }

    /// Number of significant digits.
    #[inline]
    pub const fn digits(self) -> u32 {
        self.0
    }

    /// Round `value` half-even to this precision.
    #[inline]
    pub fn round(self, value: Decimal) -> Decimal {
        value
            .round_sf_with_strategy(self.0, RoundingStrategy::MidpointNearestEven)
            .unwrap_or(value)
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    /// Checked addition, rounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the sum is outside the decimal range.
    #[inline]
    pub fn checked_add(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        lhs.checked_add(rhs)
            .map(|v| self.round(v))
            .ok_or(NumericError::Overflow)
    }

    /// Checked subtraction, rounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the difference is outside the decimal range.
    #[inline]
    pub fn checked_sub(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        lhs.checked_sub(rhs)
            .map(|v| self.round(v))
            .ok_or(NumericError::Overflow)
    }

    /// Checked multiplication, rounded.
    ///
    /// # Errors
    /// Returns `Overflow` if the product is outside the decimal range.
    #[inline]
    pub fn checked_mul(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        lhs.checked_mul(rhs)
            .map(|v| self.round(v))
            .ok_or(NumericError::Overflow)
    }

    /// Checked division, rounded.
    ///
    /// # Errors
    /// - `DivisionByZero` if `rhs` is zero
    /// - `Overflow` if the quotient is outside the decimal range
    #[inline]
    pub fn checked_div(self, lhs: Decimal, rhs: Decimal) -> NumericResult<Decimal> {
        if rhs.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        lhs.checked_div(rhs)
            .map(|v| self.round(v))
            .ok_or(NumericError::Overflow)
    }

    /// Square root, rounded.
    ///
    /// # Errors
    /// Returns `NegativeSquareRoot` for negative input.
    pub fn sqrt(self, value: Decimal) -> NumericResult<Decimal> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(NumericError::NegativeSquareRoot);
        }
        value
            .sqrt()
            .map(|v| self.round(v))
            .ok_or(NumericError::NegativeSquareRoot)
    }

    /// Sum of `values`, rounding after every addition.
    pub fn sum<I>(self, values: I) -> NumericResult<Decimal>
    where
        I: IntoIterator<Item = Decimal>,
    {
        values
            .into_iter()
            .try_fold(Decimal::ZERO, |acc, v| self.checked_add(acc, v))
    }
}

// ============================================================================
// Decimal Scaling
// ============================================================================

/// Decimal exponent of a non-zero value: `floor(log10(|value|))`.
///
/// Returns 0 for zero.
pub fn decimal_exponent(value: Decimal) -> i32 {
    let mantissa = value.mantissa().unsigned_abs();
    if mantissa == 0 {
        return 0;
    }
    mantissa.ilog10() as i32 - value.scale() as i32
}

/// `10^exponent` for `-28 <= exponent <= 28`.
///
/// # Errors
/// Returns `Overflow` outside that range.
pub fn power_of_ten(exponent: i32) -> NumericResult<Decimal> {
    match exponent {
        0..=28 => Ok(Decimal::from_i128_with_scale(
            10_i128.pow(exponent as u32),
            0,
        )),
        -28..=-1 => Ok(Decimal::new(1, exponent.unsigned_abs())),
        _ => Err(NumericError::Overflow),
    }
}

impl Default for Precision {
    #[inline]
    fn default() -> Self {
        Self(Self::DEFAULT_DIGITS)
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} significant digits", self.0)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn sci(s: &str) -> Decimal {
        Decimal::from_scientific(s).unwrap()
    }

    #[test]
    fn test_new_bounds() {
        assert_eq!(Precision::new(0), Err(NumericError::InvalidPrecision));
        assert_eq!(Precision::new(29), Err(NumericError::InvalidPrecision));
        assert_eq!(Precision::new(1).unwrap().digits(), 1);
        assert_eq!(Precision::new(28).unwrap().digits(), 28);
        assert_eq!(Precision::default().digits(), 7);
    }

    #[test]
    fn test_round_significant_digits() {
        let p = Precision::default();
        assert_eq!(p.round(d("37.712754")), d("37.71275"));
        assert_eq!(p.round(d("-57.178008")), d("-57.17801"));
        assert_eq!(p.round(d("0.000123456789")), d("0.0001234568"));
        // Already within precision
        assert_eq!(p.round(d("8.462")), d("8.462"));
    }

    #[test]
    fn test_round_half_even() {
        let p = Precision::default();
        assert_eq!(p.round(d("48.917325")), d("48.91732"));
        assert_eq!(p.round(d("48.917335")), d("48.91734"));
    }

    #[test]
    fn test_checked_mul_rounds() {
        let p = Precision::default();
        let product = p.checked_mul(d("7.893"), d("4.778")).unwrap();
        assert_eq!(product, d("37.71275"));
    }

    #[test]
    fn test_checked_div() {
        let p = Precision::new(4).unwrap();
        let third = p.checked_div(Decimal::ONE, Decimal::from(3)).unwrap();
        assert_eq!(third, d("0.3333"));

        let result = p.checked_div(Decimal::ONE, Decimal::ZERO);
        assert_eq!(result, Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_checked_add_overflow() {
        let p = Precision::new(28).unwrap();
        let result = p.checked_add(Decimal::MAX, Decimal::ONE);
        assert_eq!(result, Err(NumericError::Overflow));
    }

    #[test]
    fn test_sqrt() {
        let p = Precision::default();
        assert_eq!(p.sqrt(Decimal::from(4)).unwrap(), Decimal::from(2));
        assert_eq!(p.sqrt(Decimal::from(2)).unwrap(), d("1.414214"));
        assert_eq!(p.sqrt(Decimal::ZERO).unwrap(), Decimal::ZERO);
        assert_eq!(
            p.sqrt(Decimal::from(-1)),
            Err(NumericError::NegativeSquareRoot)
        );
    }

    #[test]
    fn test_sum() {
        let p = Precision::default();
        let total = p
            .sum([d("55.10528"), d("-0.457684"), d("1")])
            .unwrap();
        assert_eq!(total, d("55.64760"));
        assert_eq!(p.sum(Vec::new()).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_decimal_exponent() {
        assert_eq!(decimal_exponent(sci("3e14")), 14);
        assert_eq!(decimal_exponent(sci("1e-15")), -15);
        assert_eq!(decimal_exponent(d("-7.627")), 0);
        assert_eq!(decimal_exponent(d("0.0990")), -2);
        assert_eq!(decimal_exponent(d("100.00")), 2);
        assert_eq!(decimal_exponent(Decimal::ZERO), 0);
    }

    #[test]
    fn test_power_of_ten() {
        assert_eq!(power_of_ten(0).unwrap(), Decimal::ONE);
        assert_eq!(power_of_ten(14).unwrap(), d("100000000000000"));
        assert_eq!(power_of_ten(-15).unwrap(), d("0.000000000000001"));
        assert_eq!(power_of_ten(28).unwrap(), sci("1e28"));
        assert_eq!(power_of_ten(29), Err(NumericError::Overflow));
        assert_eq!(power_of_ten(-29), Err(NumericError::Overflow));
    }
}
