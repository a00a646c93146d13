// ============================================================================
// Vector Errors
// Error kinds surfaced by vector construction and operations
// ============================================================================

use crate::numeric::NumericError;
use std::fmt;

/// Why a construction input was rejected before any value was converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvalidArgumentKind {
    /// No coordinates were supplied
    Empty,
    /// Text input was not a coordinate list
    NotASequence,
}

/// Errors returned by [`Vector`](super::Vector) construction and operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// Construction input is empty or not a sequence
    InvalidArgument(InvalidArgumentKind),
    /// Element at `index` could not be converted to a decimal
    NumericConversion { index: usize, source: NumericError },
    /// Scalar operand could not be converted to a decimal
    InvalidScalar(NumericError),
    /// Config failed validation
    InvalidConfig(String),
    /// Decimal arithmetic failed (overflow)
    Arithmetic(NumericError),
    /// Operands have different dimensions
    DimensionMismatch { expected: usize, found: usize },
    /// Normalization of the zero vector
    ZeroVector,
    /// Angle requested with a zero operand
    AngleWithZeroVector,
    /// Projection onto the zero vector
    NoUniqueParallelComponent,
    /// Rejection from the zero vector
    NoUniqueOrthogonalComponent,
    /// Cross product outside two or three dimensions
    UnsupportedDimension { dimension: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidArgument(InvalidArgumentKind::Empty) => {
                write!(f, "the coordinates must be nonempty")
            },
            VectorError::InvalidArgument(InvalidArgumentKind::NotASequence) => {
                write!(f, "the coordinates must be a sequence")
            },
            VectorError::NumericConversion { index, source } => {
                write!(f, "coordinate {}: {}", index, source)
            },
            VectorError::InvalidScalar(e) => write!(f, "scalar: {}", e),
            VectorError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
            VectorError::Arithmetic(e) => write!(f, "{}", e),
            VectorError::DimensionMismatch { expected, found } => write!(
                f,
                "dimension mismatch: expected {} coordinates, found {}",
                expected, found
            ),
            VectorError::ZeroVector => write!(f, "cannot normalize the zero vector"),
            VectorError::AngleWithZeroVector => {
                write!(f, "cannot compute an angle with the zero vector")
            },
            VectorError::NoUniqueParallelComponent => write!(f, "no unique parallel component"),
            VectorError::NoUniqueOrthogonalComponent => {
                write!(f, "no unique orthogonal component")
            },
            VectorError::UnsupportedDimension { dimension } => write!(
                f,
                "only defined in two or three dimensions (got {})",
                dimension
            ),
        }
    }
}

impl std::error::Error for VectorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            VectorError::NumericConversion { source, .. } => Some(source),
            VectorError::InvalidScalar(e) | VectorError::Arithmetic(e) => Some(e),
            _ => None,
        }
    }
}

impl From<NumericError> for VectorError {
    fn from(e: NumericError) -> Self {
        VectorError::Arithmetic(e)
    }
}

/// Result type alias for vector operations
pub type VectorResult<T> = Result<T, VectorError>;
