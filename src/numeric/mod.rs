// ============================================================================
// Numeric Module
// Exact, arbitrary-length input numbers for the word renderers
// ============================================================================
//
// This module provides:
// - Numeral: sign + canonical digit strings, built from integers, decimals,
//   floats or text
// - NumeralError: Error types for input construction
//
// Design principles:
// - No floating-point arithmetic once a value is a Numeral
// - Integer part is unbounded (magnitude limits belong to the renderer)
// - Construction returns Result (no panics)

mod errors;
mod numeral;

pub use errors::{NumeralError, NumeralResult};
pub use numeral::Numeral;
