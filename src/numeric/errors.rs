// ============================================================================
// Numeric Errors
// Error types for precision-bounded decimal arithmetic
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal arithmetic or value conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumericError {
    /// Result exceeded the representable decimal range
    Overflow,
    /// Attempted division by zero
    DivisionByZero,
    /// Input string could not be parsed as a decimal
    InvalidInput,
    /// Floating-point input was NaN or infinite
    NotFinite,
    /// Square root of a negative value
    NegativeSquareRoot,
    /// Significant digits outside 1..=28
    InvalidPrecision,
}

impl fmt::Display for NumericError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumericError::Overflow => {
                write!(f, "arithmetic overflow: result exceeded decimal range")
            },
            NumericError::DivisionByZero => write!(f, "division by zero"),
            NumericError::InvalidInput => write!(f, "invalid input: could not parse value"),
            NumericError::NotFinite => write!(f, "invalid input: value is NaN or infinite"),
            NumericError::NegativeSquareRoot => {
                write!(f, "square root of a negative value")
            },
            NumericError::InvalidPrecision => write!(
                f,
                "invalid precision: significant digits must be between 1 and 28"
            ),
        }
    }
}

impl std::error::Error for NumericError {}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::{Precision, ToCoordinate};
    use rust_decimal::Decimal;

    #[test]
    fn test_conversion_errors_describe_input() {
        let nan = f64::NAN.to_coordinate().unwrap_err();
        assert_eq!(nan, NumericError::NotFinite);
        assert_eq!(nan.to_string(), "invalid input: value is NaN or infinite");

        let infinite = f32::NEG_INFINITY.to_coordinate().unwrap_err();
        assert_eq!(infinite, NumericError::NotFinite);

        let text = "1.2.3".to_coordinate().unwrap_err();
        assert_eq!(text, NumericError::InvalidInput);
        assert_eq!(text.to_string(), "invalid input: could not parse value");
    }

    #[test]
    fn test_square_root_of_negative() {
        let err = Precision::default().sqrt(Decimal::NEGATIVE_ONE).unwrap_err();
        assert_eq!(err, NumericError::NegativeSquareRoot);
        assert_eq!(err.to_string(), "square root of a negative value");
    }

    #[test]
    fn test_precision_out_of_range() {
        for digits in [0, 29] {
            let err = Precision::new(digits).unwrap_err();
            assert_eq!(err, NumericError::InvalidPrecision);
            assert_eq!(
                err.to_string(),
                "invalid precision: significant digits must be between 1 and 28"
            );
        }
    }

    #[test]
    fn test_boxed_as_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(NumericError::NotFinite);
        assert!(err.source().is_none());
        assert_eq!(err.to_string(), NumericError::NotFinite.to_string());
    }
}
