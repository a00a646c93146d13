// ============================================================================
// Geometry Module
// The Vector entity and its error kinds
// ============================================================================

mod errors;
mod vector;

pub use errors::{InvalidArgumentKind, VectorError, VectorResult};
pub use vector::{AngleUnit, Vector};
