// ============================================================================
// Coordinate Conversion
// Numbers and text accepted as vector coordinates
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

/// A value that can become a decimal coordinate.
///
/// Implemented for `Decimal`, the primitive integer and float types, and
/// text. Floats are converted through their shortest decimal form, so
/// `8.462_f64` becomes exactly `8.462`.
pub trait ToCoordinate {
    /// Convert to an (unrounded) decimal.
    ///
    /// # Errors
    /// - `InvalidInput` for text that is not a decimal number
    /// - `NotFinite` for NaN or infinite floats
    /// - `Overflow` for values outside the decimal range
    fn to_coordinate(&self) -> NumericResult<Decimal>;
}

impl ToCoordinate for Decimal {
    #[inline]
    fn to_coordinate(&self) -> NumericResult<Decimal> {
        Ok(*self)
    }
}

impl ToCoordinate for f64 {
    fn to_coordinate(&self) -> NumericResult<Decimal> {
        if !self.is_finite() {
            return Err(NumericError::NotFinite);
        }
        Decimal::from_f64(*self).ok_or(NumericError::Overflow)
    }
}

impl ToCoordinate for f32 {
    fn to_coordinate(&self) -> NumericResult<Decimal> {
        if !self.is_finite() {
            return Err(NumericError::NotFinite);
        }
        Decimal::from_f32(*self).ok_or(NumericError::Overflow)
    }
}

macro_rules! impl_to_coordinate_for_integer {
    ($($t:ty),*) => {
        $(
            impl ToCoordinate for $t {
                #[inline]
                fn to_coordinate(&self) -> NumericResult<Decimal> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

impl_to_coordinate_for_integer!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl ToCoordinate for str {
    /// Accepts plain (`-0.125`) and scientific (`1.5e-3`) notation.
    fn to_coordinate(&self) -> NumericResult<Decimal> {
        let s = self.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map_err(|_| NumericError::InvalidInput)
    }
}

impl ToCoordinate for String {
    #[inline]
    fn to_coordinate(&self) -> NumericResult<Decimal> {
        self.as_str().to_coordinate()
    }
}

impl<T: ToCoordinate + ?Sized> ToCoordinate for &T {
    #[inline]
    fn to_coordinate(&self) -> NumericResult<Decimal> {
        (**self).to_coordinate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_uses_shortest_form() {
        assert_eq!(8.462_f64.to_coordinate().unwrap(), Decimal::new(8462, 3));
        assert_eq!((-0.318_f64).to_coordinate().unwrap(), Decimal::new(-318, 3));
    }

    #[test]
    fn test_float_not_finite() {
        assert_eq!(f64::NAN.to_coordinate(), Err(NumericError::NotFinite));
        assert_eq!(f64::INFINITY.to_coordinate(), Err(NumericError::NotFinite));
        assert_eq!(f32::NEG_INFINITY.to_coordinate(), Err(NumericError::NotFinite));
    }

    #[test]
    fn test_float_out_of_range() {
        assert_eq!(1e30_f64.to_coordinate(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_integers() {
        assert_eq!(42_i32.to_coordinate().unwrap(), Decimal::from(42));
        assert_eq!(7_usize.to_coordinate().unwrap(), Decimal::from(7));
        assert_eq!((-3_i64).to_coordinate().unwrap(), Decimal::from(-3));
    }

    #[test]
    fn test_text() {
        assert_eq!("123.456".to_coordinate().unwrap(), Decimal::new(123456, 3));
        assert_eq!(" -0.001 ".to_coordinate().unwrap(), Decimal::new(-1, 3));
        assert_eq!("1.5e-3".to_coordinate().unwrap(), Decimal::new(15, 4));
        assert_eq!(
            String::from("2").to_coordinate().unwrap(),
            Decimal::from(2)
        );
    }

    #[test]
    fn test_text_invalid() {
        assert_eq!("not_a_number".to_coordinate(), Err(NumericError::InvalidInput));
        assert_eq!("".to_coordinate(), Err(NumericError::InvalidInput));
    }
}
