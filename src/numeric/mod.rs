// ============================================================================
// Numeric Module
// Precision-bounded decimal arithmetic for vector calculations
// ============================================================================
//
// This module provides:
// - Precision: significant-digit context applied to every decimal result
// - ToCoordinate: conversion of numbers and text into decimal coordinates
// - NumericError: Error types for arithmetic and conversion
//
// Design principles:
// - Decimal storage, floating point only for transcendental steps
// - All arithmetic returns Result (no panics)
// - Every result rounded half-even to the configured significant digits

mod coordinate;
mod errors;
mod precision;

pub use coordinate::ToCoordinate;
pub use errors::{NumericError, NumericResult};
pub use precision::{decimal_exponent, power_of_ten, Precision};
