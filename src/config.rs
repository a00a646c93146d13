// ============================================================================
// Vector Configuration
// Precision and tolerances shared by every vector built under a context
// ============================================================================

use crate::numeric::{NumericResult, Precision};
use rust_decimal::Decimal;

/// Computation context carried by every [`Vector`](crate::geometry::Vector).
///
/// Establish one at startup and pass it to constructors; results of binary
/// operations inherit the config of the left operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VectorConfig {
    /// Significant digits kept by every coordinate and scalar result
    pub precision: Precision,

    /// A vector whose magnitude is below this is the zero vector
    pub zero_tolerance: Decimal,

    /// Two vectors whose dot product is below this (in absolute value)
    /// are orthogonal
    pub orthogonal_tolerance: Decimal,

    /// Angle in radians within which two vectors count as parallel.
    /// None derives the tolerance from the precision.
    pub angle_tolerance: Option<f64>,
}

impl VectorConfig {
    /// Default zero and orthogonality tolerance (1e-10)
    pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

    /// Lower bound of the derived angle tolerance, near the resolution of
    /// `acos` in `f64` close to 0 and π
    const MIN_ANGLE_TOLERANCE: f64 = 1e-7;

    /// Create a configuration with the given number of significant digits
    /// and default tolerances.
    ///
    /// # Errors
    /// Returns `InvalidPrecision` unless `1 <= digits <= 28`.
    pub fn new(digits: u32) -> NumericResult<Self> {
        Ok(Self::with_precision(Precision::new(digits)?))
    }

    /// Create a configuration around an existing precision.
    pub fn with_precision(precision: Precision) -> Self {
        Self {
            precision,
            zero_tolerance: Self::DEFAULT_TOLERANCE,
            orthogonal_tolerance: Self::DEFAULT_TOLERANCE,
            angle_tolerance: None,
        }
    }

    /// Builder method: Set zero-vector tolerance
    pub fn with_zero_tolerance(mut self, tolerance: Decimal) -> Self {
        self.zero_tolerance = tolerance;
        self
    }

    /// Builder method: Set orthogonality tolerance
    pub fn with_orthogonal_tolerance(mut self, tolerance: Decimal) -> Self {
        self.orthogonal_tolerance = tolerance;
        self
    }

    /// Builder method: Set parallelism angle tolerance (radians)
    pub fn with_angle_tolerance(mut self, radians: f64) -> Self {
        self.angle_tolerance = Some(radians);
        self
    }

    /// Angle tolerance used by parallelism checks.
    ///
    /// Unless set explicitly this is `sqrt(20 * 10^-digits)`: the cosine of
    /// two unit vectors is trusted to ten units in the last significant
    /// digit, and `acos(1 - e)` is about `sqrt(2e)`.
    pub fn effective_angle_tolerance(&self) -> f64 {
        self.angle_tolerance.unwrap_or_else(|| {
            let digits = self.precision.digits() as i32;
            (20.0 * 10f64.powi(-digits))
                .sqrt()
                .max(Self::MIN_ANGLE_TOLERANCE)
        })
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.zero_tolerance <= Decimal::ZERO {
            return Err("Zero tolerance must be positive".to_string());
        }

        if self.orthogonal_tolerance <= Decimal::ZERO {
            return Err("Orthogonal tolerance must be positive".to_string());
        }

        if let Some(angle) = self.angle_tolerance {
            if !angle.is_finite() || angle <= 0.0 {
                return Err("Angle tolerance must be a positive finite number".to_string());
            }
            if angle >= std::f64::consts::FRAC_PI_2 {
                return Err("Angle tolerance must be below pi/2".to_string());
            }
        }

        Ok(())
    }
}

impl Default for VectorConfig {
    fn default() -> Self {
        Self::with_precision(Precision::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = VectorConfig::default();
        assert_eq!(config.precision.digits(), 7);
        assert_eq!(config.zero_tolerance, Decimal::new(1, 10));
        assert_eq!(config.orthogonal_tolerance, Decimal::new(1, 10));
        assert!(config.angle_tolerance.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = VectorConfig::new(12)
            .unwrap()
            .with_zero_tolerance(Decimal::new(1, 6))
            .with_orthogonal_tolerance(Decimal::new(1, 4))
            .with_angle_tolerance(1e-3);

        assert_eq!(config.precision.digits(), 12);
        assert_eq!(config.zero_tolerance, Decimal::new(1, 6));
        assert_eq!(config.orthogonal_tolerance, Decimal::new(1, 4));
        assert_eq!(config.effective_angle_tolerance(), 1e-3);
    }

    #[test]
    fn test_invalid_precision() {
        assert!(VectorConfig::new(0).is_err());
        assert!(VectorConfig::new(40).is_err());
    }

    #[test]
    fn test_derived_angle_tolerance() {
        let seven = VectorConfig::default().effective_angle_tolerance();
        assert!((seven - 2e-6_f64.sqrt()).abs() < 1e-12);

        // Clamped at the f64 floor for high precision
        let high = VectorConfig::new(28).unwrap().effective_angle_tolerance();
        assert_eq!(high, 1e-7);
    }

    #[test]
    fn test_validation() {
        let config = VectorConfig::default().with_zero_tolerance(Decimal::ZERO);
        assert!(config.validate().is_err());

        let config = VectorConfig::default().with_orthogonal_tolerance(Decimal::new(-1, 3));
        assert!(config.validate().is_err());

        let config = VectorConfig::default().with_angle_tolerance(f64::NAN);
        assert!(config.validate().is_err());

        let config = VectorConfig::default().with_angle_tolerance(2.0);
        assert!(config.validate().is_err());
    }
}
