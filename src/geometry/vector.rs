// ============================================================================
// Vector Domain Model
// Immutable Euclidean vector over fixed-precision decimal coordinates
// ============================================================================

use super::errors::{InvalidArgumentKind, VectorError, VectorResult};
use crate::config::VectorConfig;
use crate::numeric::{
    decimal_exponent, power_of_ten, NumericError, NumericResult, Precision, ToCoordinate,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use smallvec::{smallvec, SmallVec};
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Index, Neg};
use std::str::FromStr;

/// Coordinate storage, inline up to four dimensions
type Coordinates = SmallVec<[Decimal; 4]>;

/// Unit of an angle returned by [`Vector::angle_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// Euclidean vector with decimal coordinates.
///
/// Coordinates are rounded to the precision of the vector's
/// [`VectorConfig`] on construction, and every operation rounds its results
/// the same way. Vectors are never mutated: each operation returns a new
/// vector or a scalar. Binary operations produce results under the config of
/// the left operand (`self`).
///
/// # Example
/// ```ignore
/// use decimal_vector::prelude::*;
///
/// let v = Vector::new([8.462, 7.893, -8.187])?;
/// let w = Vector::new([6.984, -5.975, 4.778])?;
/// println!("{}", v.cross(&w)?); // Vector (-11.20457, -97.60945, -105.6852)
/// ```
#[derive(Debug, Clone)]
pub struct Vector {
    coordinates: Coordinates,
    config: VectorConfig,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector under the default config (7 significant digits).
    ///
    /// # Errors
    /// - `InvalidArgument(Empty)` if `coordinates` yields nothing
    /// - `NumericConversion` if an element is not a finite decimal
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        Self::with_config(VectorConfig::default(), coordinates)
    }

    /// Create a vector under an explicit config.
    ///
    /// # Errors
    /// `InvalidConfig` if `config` fails [`VectorConfig::validate`], plus
    /// the errors of [`Vector::new`].
    pub fn with_config<I>(config: VectorConfig, coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        Self::check_config(&config)?;
        let precision = config.precision;
        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .to_coordinate()
                    .map(|d| precision.round(d))
                    .map_err(|source| VectorError::NumericConversion { index, source })
            })
            .collect::<VectorResult<Coordinates>>()?;

        Self::from_coordinates(config, coordinates)
    }

    /// Zero vector of the given dimension.
    ///
    /// # Errors
    /// `InvalidConfig` for an invalid config, `InvalidArgument(Empty)` for
    /// dimension zero.
    pub fn zero(config: VectorConfig, dimension: usize) -> VectorResult<Self> {
        Self::check_config(&config)?;
        Self::from_coordinates(config, smallvec![Decimal::ZERO; dimension])
    }

    /// Parse the display form (`Vector (1, 2)`), a bracketed list
    /// (`(1, 2)` or `[1, 2]`) or a bare comma-separated list.
    ///
    /// # Errors
    /// - `InvalidConfig` if `config` fails [`VectorConfig::validate`]
    /// - `InvalidArgument(NotASequence)` for unbalanced or misplaced brackets
    /// - `InvalidArgument(Empty)` when the list holds no coordinates
    /// - `NumericConversion` when an element is not a decimal
    pub fn parse_with_config(config: VectorConfig, s: &str) -> VectorResult<Self> {
        Self::check_config(&config)?;
        let not_a_sequence = VectorError::InvalidArgument(InvalidArgumentKind::NotASequence);

        let s = s.trim();
        let (prefixed, body) = match s.strip_prefix("Vector") {
            Some(rest) => (true, rest.trim_start()),
            None => (false, s),
        };

        let inner = match (body.chars().next(), body.chars().last()) {
            (Some('('), Some(')')) | (Some('['), Some(']')) if body.len() >= 2 => {
                &body[1..body.len() - 1]
            },
            _ if prefixed => return Err(not_a_sequence),
            (Some('(' | '['), _) | (_, Some(')' | ']')) => return Err(not_a_sequence),
            _ => body,
        };

        if inner.contains(['(', ')', '[', ']']) {
            return Err(not_a_sequence);
        }
        if inner.trim().is_empty() {
            return Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty));
        }

        Self::with_config(config, inner.split(','))
    }

    fn check_config(config: &VectorConfig) -> VectorResult<()> {
        config.validate().map_err(|reason| {
            tracing::debug!("rejected vector config: {}", reason);
            VectorError::InvalidConfig(reason)
        })
    }

    fn from_coordinates(config: VectorConfig, coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(InvalidArgumentKind::Empty));
        }
        Ok(Self {
            coordinates,
            config,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Coordinates in order.
    #[inline]
    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    /// Number of coordinates (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn config(&self) -> &VectorConfig {
        &self.config
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    #[inline]
    fn precision(&self) -> Precision {
        self.config.precision
    }

    fn check_dimension(&self, other: &Self) -> VectorResult<()> {
        if self.dimension() != other.dimension() {
            return Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            });
        }
        Ok(())
    }

    /// Combine coordinates pairwise under this vector's precision.
    fn zip_with<F>(&self, other: &Self, op: F) -> VectorResult<Self>
    where
        F: Fn(Precision, Decimal, Decimal) -> NumericResult<Decimal>,
    {
        self.check_dimension(other)?;
        let precision = self.precision();
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(&x, &y)| op(precision, x, y))
            .collect::<NumericResult<Coordinates>>()?;
        Self::from_coordinates(self.config, coordinates)
    }

    /// Sum of pairwise products; caller checks dimensions.
    fn inner_product(&self, other: &Self) -> VectorResult<Decimal> {
        let precision = self.precision();
        let products = self
            .iter()
            .zip(other.iter())
            .map(|(&x, &y)| precision.checked_mul(x, y))
            .collect::<NumericResult<Coordinates>>()?;
        Ok(precision.sum(products)?)
    }

    // ========================================================================
    // Elementwise and Scalar Operations
    // ========================================================================

    /// Elementwise sum.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    pub fn plus(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, Precision::checked_add)
    }

    /// Elementwise difference.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    pub fn minus(&self, other: &Self) -> VectorResult<Self> {
        self.zip_with(other, Precision::checked_sub)
    }

    /// Multiply every coordinate by `c`.
    ///
    /// # Errors
    /// `InvalidScalar` if `c` is not a finite decimal.
    pub fn times_scalar<C: ToCoordinate>(&self, c: C) -> VectorResult<Self> {
        let c = c.to_coordinate().map_err(VectorError::InvalidScalar)?;
        let precision = self.precision();
        let coordinates = self
            .iter()
            .map(|&x| precision.checked_mul(c, x))
            .collect::<NumericResult<Coordinates>>()?;
        Self::from_coordinates(self.config, coordinates)
    }

    /// Vector with every coordinate negated.
    pub fn negated(&self) -> Self {
        Self {
            coordinates: self.iter().map(|&x| -x).collect(),
            config: self.config,
        }
    }

    /// Squared Euclidean length.
    pub fn square_magnitude(&self) -> VectorResult<Decimal> {
        self.inner_product(self)
    }

    /// Euclidean length.
    ///
    /// Squares are taken after shifting the coordinates by the decimal
    /// exponent of the largest one, so tiny and huge vectors neither
    /// underflow to zero nor overflow.
    pub fn magnitude(&self) -> VectorResult<Decimal> {
        let Some((exponent, shifted)) = self.shifted_to_unit_exponent()? else {
            return Ok(Decimal::ZERO);
        };
        let p = self.precision();
        let root = p.sqrt(shifted.square_magnitude()?)?;
        Ok(p.checked_mul(root, power_of_ten(exponent)?)?)
    }

    /// Unit vector in the same direction.
    ///
    /// # Errors
    /// `ZeroVector` if the magnitude is zero.
    pub fn normalized(&self) -> VectorResult<Self> {
        let Some((_, shifted)) = self.shifted_to_unit_exponent()? else {
            tracing::debug!("cannot normalize zero vector of dimension {}", self.dimension());
            return Err(VectorError::ZeroVector);
        };
        let p = self.precision();
        let root = p.sqrt(shifted.square_magnitude()?)?;
        let inverse = p.checked_div(Decimal::ONE, root).map_err(|e| match e {
            NumericError::DivisionByZero => VectorError::ZeroVector,
            other => VectorError::Arithmetic(other),
        })?;
        shifted.times_scalar(inverse)
    }

    /// Decimal exponent `e` of the largest coordinate and this vector
    /// multiplied by `10^-e`; None for the zero vector.
    ///
    /// Multiplying by a power of ten only moves the decimal point, so the
    /// shifted coordinates carry exactly the same digits.
    fn shifted_to_unit_exponent(&self) -> VectorResult<Option<(i32, Self)>> {
        let largest = self
            .iter()
            .map(|x| x.abs())
            .max()
            .unwrap_or(Decimal::ZERO);
        if largest.is_zero() {
            return Ok(None);
        }

        let exponent = decimal_exponent(largest);
        let shift = power_of_ten(-exponent)?;
        let precision = self.precision();
        let coordinates = self
            .iter()
            .map(|&x| precision.checked_mul(x, shift))
            .collect::<NumericResult<Coordinates>>()?;
        Ok(Some((exponent, Self::from_coordinates(self.config, coordinates)?)))
    }

    // ========================================================================
    // Dot and Cross Product
    // ========================================================================

    /// Inner product.
    ///
    /// # Errors
    /// `DimensionMismatch` if the dimensions differ.
    pub fn dot(&self, other: &Self) -> VectorResult<Decimal> {
        self.check_dimension(other)?;
        self.inner_product(other)
    }

    /// Cross product of two 3-dimensional vectors.
    ///
    /// Two-dimensional operands are each embedded in three dimensions with a
    /// zero third coordinate, so the result is always 3-dimensional.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the dimensions differ
    /// - `UnsupportedDimension` outside two or three dimensions
    pub fn cross(&self, other: &Self) -> VectorResult<Self> {
        self.check_dimension(other)?;
        match self.dimension() {
            2 | 3 => self.cross_in_r3(self.embed_in_r3(), other.embed_in_r3()),
            dimension => Err(VectorError::UnsupportedDimension { dimension }),
        }
    }

    /// Coordinates padded with zeros to three dimensions.
    fn embed_in_r3(&self) -> [Decimal; 3] {
        let c = &self.coordinates;
        [
            c[0],
            c.get(1).copied().unwrap_or(Decimal::ZERO),
            c.get(2).copied().unwrap_or(Decimal::ZERO),
        ]
    }

    fn cross_in_r3(&self, a: [Decimal; 3], b: [Decimal; 3]) -> VectorResult<Self> {
        let p = self.precision();
        let [x1, y1, z1] = a;
        let [x2, y2, z2] = b;

        let i = p.checked_sub(p.checked_mul(y1, z2)?, p.checked_mul(y2, z1)?)?;
        let j = -p.checked_sub(p.checked_mul(x1, z2)?, p.checked_mul(x2, z1)?)?;
        let k = p.checked_sub(p.checked_mul(x1, y2)?, p.checked_mul(x2, y1)?)?;

        Self::from_coordinates(self.config, smallvec![i, j, k])
    }

    // ========================================================================
    // Angle
    // ========================================================================

    /// Angle between the two vectors, in `[0, π]` radians or `[0, 180]`
    /// degrees.
    ///
    /// The cosine is clamped to `[-1, 1]` before `acos`, since rounding can
    /// push the dot product of two unit vectors slightly outside it.
    ///
    /// # Errors
    /// - `AngleWithZeroVector` if either vector is zero
    /// - `DimensionMismatch` if the dimensions differ
    pub fn angle_with(&self, other: &Self, unit: AngleUnit) -> VectorResult<f64> {
        let u1 = self.normalized().map_err(Self::angle_error)?;
        let u2 = other.normalized().map_err(Self::angle_error)?;

        let cosine = u1
            .dot(&u2)?
            .to_f64()
            .ok_or(VectorError::Arithmetic(NumericError::Overflow))?;
        let clamped = cosine.clamp(-1.0, 1.0);
        if clamped != cosine {
            tracing::trace!(cosine, "clamped cosine into [-1, 1]");
        }

        let radians = clamped.acos();
        Ok(match unit {
            AngleUnit::Radians => radians,
            AngleUnit::Degrees => radians.to_degrees(),
        })
    }

    fn angle_error(e: VectorError) -> VectorError {
        match e {
            VectorError::ZeroVector => {
                tracing::debug!("angle requested with the zero vector");
                VectorError::AngleWithZeroVector
            },
            other => other,
        }
    }

    // ========================================================================
    // Projection Decomposition
    // ========================================================================

    /// Projection of this vector onto `basis`.
    ///
    /// # Errors
    /// - `NoUniqueParallelComponent` if `basis` is zero
    /// - `DimensionMismatch` if the dimensions differ
    pub fn component_parallel_to(&self, basis: &Self) -> VectorResult<Self> {
        let unit = basis.normalized().map_err(|e| match e {
            VectorError::ZeroVector => {
                tracing::debug!("projection onto the zero vector");
                VectorError::NoUniqueParallelComponent
            },
            other => other,
        })?;
        let weight = self.dot(&unit)?;
        let projection = unit.times_scalar(weight)?;
        Ok(Self {
            config: self.config,
            ..projection
        })
    }

    /// Component of this vector orthogonal to `basis`.
    ///
    /// # Errors
    /// - `NoUniqueOrthogonalComponent` if `basis` is zero
    /// - `DimensionMismatch` if the dimensions differ
    pub fn component_orthogonal_to(&self, basis: &Self) -> VectorResult<Self> {
        let projection = self.component_parallel_to(basis).map_err(|e| match e {
            VectorError::NoUniqueParallelComponent => {
                tracing::debug!("rejection from the zero vector");
                VectorError::NoUniqueOrthogonalComponent
            },
            other => other,
        })?;
        self.minus(&projection)
    }

    // ========================================================================
    // Classification Predicates
    // ========================================================================

    /// True if the magnitude is below the config's zero tolerance.
    pub fn is_zero(&self) -> bool {
        self.is_zero_within(self.config.zero_tolerance)
    }

    /// True if the magnitude is below `tolerance`.
    pub fn is_zero_within(&self, tolerance: Decimal) -> bool {
        match self.magnitude() {
            Ok(magnitude) => magnitude < tolerance,
            // Only overflow can fail here, far above any tolerance
            Err(_) => false,
        }
    }

    /// True if the dot product is below the config's orthogonal tolerance.
    pub fn is_orthogonal_to(&self, other: &Self) -> VectorResult<bool> {
        self.is_orthogonal_to_within(other, self.config.orthogonal_tolerance)
    }

    pub fn is_orthogonal_to_within(&self, other: &Self, tolerance: Decimal) -> VectorResult<bool> {
        Ok(self.dot(other)?.abs() < tolerance)
    }

    /// True if either vector is zero or the angle between them is within
    /// the config's angle tolerance of 0 or π.
    pub fn is_parallel_to(&self, other: &Self) -> VectorResult<bool> {
        self.is_parallel_to_within(other, self.config.effective_angle_tolerance())
    }

    pub fn is_parallel_to_within(&self, other: &Self, angle_tolerance: f64) -> VectorResult<bool> {
        self.check_dimension(other)?;
        if self.is_zero() || other.is_zero() {
            return Ok(true);
        }
        let angle = self.angle_with(other, AngleUnit::Radians)?;
        Ok(angle < angle_tolerance || PI - angle < angle_tolerance)
    }

    /// True if the dimensions match and every coordinate differs by less
    /// than `tolerance`.
    pub fn approx_eq(&self, other: &Self, tolerance: Decimal) -> bool {
        self.dimension() == other.dimension()
            && self.iter().zip(other.iter()).all(|(&x, &y)| {
                x.checked_sub(y)
                    .map(|diff| diff.abs() < tolerance)
                    .unwrap_or(false)
            })
    }

    // ========================================================================
    // Derived Geometric Quantities
    // ========================================================================

    /// Area of the parallelogram spanned by the two vectors.
    ///
    /// # Errors
    /// Same as [`Vector::cross`].
    pub fn parallelogram_area_with(&self, other: &Self) -> VectorResult<Decimal> {
        self.cross(other)?.magnitude()
    }

    /// Area of the triangle spanned by the two vectors.
    ///
    /// # Errors
    /// Same as [`Vector::cross`].
    pub fn triangle_area(&self, other: &Self) -> VectorResult<Decimal> {
        let area = self.parallelogram_area_with(other)?;
        Ok(self.precision().checked_div(area, Decimal::TWO)?)
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl PartialEq for Vector {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl Hash for Vector {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coordinates.hash(state);
    }
}

impl Neg for &Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Self::Output {
        self.negated()
    }
}

impl Index<usize> for Vector {
    type Output = Decimal;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = std::slice::Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector (")?;
        for (i, x) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", x.normalize())?;
        }
        write!(f, ")")
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse under the default config; see [`Vector::parse_with_config`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with_config(VectorConfig::default(), s)
    }
}

// ============================================================================
// Tests
// ============================================================================
