// ============================================================================
// Decimal Vector Library
// Euclidean vector arithmetic over fixed-precision decimal coordinates
// ============================================================================

//! # Decimal Vector
//!
//! Immutable Euclidean vectors whose coordinates are decimals rounded to a
//! configurable number of significant digits.
//!
//! ## Features
//!
//! - **Fixed-precision arithmetic**: every coordinate and scalar result is
//!   rounded half-even to the configured significant digits
//! - **Explicit context**: precision and tolerances travel in a
//!   [`VectorConfig`](config::VectorConfig), no global state
//! - **Products and projections**: dot, cross (2D and 3D), parallel and
//!   orthogonal components, angles, parallelogram and triangle areas
//! - **Typed failures**: zero-vector, dimension and projection errors are
//!   distinct [`VectorError`](geometry::VectorError) kinds
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let v = Vector::new([8.462, 7.893, -8.187]).unwrap();
//! let w = Vector::new([6.984, -5.975, 4.778]).unwrap();
//!
//! let cross = v.cross(&w).unwrap();
//! assert_eq!(cross.to_string(), "Vector (-11.20457, -97.60945, -105.6852)");
//!
//! let zero = Vector::new([0, 0]).unwrap();
//! assert_eq!(zero.normalized(), Err(VectorError::ZeroVector));
//! ```

pub mod config;
pub mod geometry;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::VectorConfig;
    pub use crate::geometry::{AngleUnit, InvalidArgumentKind, Vector, VectorError, VectorResult};
    pub use crate::numeric::{NumericError, Precision, ToCoordinate};
}
