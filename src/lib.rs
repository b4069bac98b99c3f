// ============================================================================
// Vallader Numerals Library
// Cardinal and ordinal number words for the Vallader dialect of Romansh
// ============================================================================

//! # Vallader Numerals
//!
//! Puts integers and decimals into words in Vallader, the Romansh dialect of
//! the Lower Engadine.
//!
//! ## Features
//!
//! - **Cardinals and ordinals** ("trais" / "terz")
//! - **Negative numbers and decimals** ("minus ün comma tschinch")
//! - **Exact input** from integers of any width, `rust_decimal::Decimal` or text
//! - **Magnitude words** up to the decilliards (fewer than 66 digits)
//!
//! ## Example
//!
//! ```rust
//! use vallader_numerals::prelude::*;
//!
//! assert_eq!(vallader_numerals::to_cardinal(2021).unwrap(), "duamillievainchün");
//! assert_eq!(vallader_numerals::to_ordinal(28).unwrap(), "vainchottavel");
//!
//! let price: Numeral = "1.50".parse().unwrap();
//! assert_eq!(
//!     vallader_numerals::convert(price, ConversionKind::Cardinal).unwrap(),
//!     "ün comma tschinch nolla"
//! );
//!
//! let too_big: Numeral = "1".repeat(66).parse().unwrap();
//! assert!(matches!(
//!     vallader_numerals::to_cardinal(too_big),
//!     Err(RenderError::UnsupportedMagnitude { digits: 66 })
//! ));
//! ```

pub mod domain;
pub mod interfaces;
pub mod lang;
pub mod numeric;

use crate::domain::ConversionKind;
use crate::interfaces::NumberToWords;
use crate::lang::{RenderResult, Vallader};
use crate::numeric::Numeral;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConversionKind, RenderConfig};
    pub use crate::interfaces::NumberToWords;
    pub use crate::lang::{RenderError, RenderResult, Vallader};
    pub use crate::numeric::{Numeral, NumeralError};
}

/// Cardinal words for `number` with the default configuration
pub fn to_cardinal(number: impl Into<Numeral>) -> RenderResult<String> {
    Vallader::new().to_cardinal(&number.into())
}

/// Ordinal words for `number` with the default configuration
pub fn to_ordinal(number: impl Into<Numeral>) -> RenderResult<String> {
    Vallader::new().to_ordinal(&number.into())
}

/// Words for `number` in the requested form
pub fn convert(number: impl Into<Numeral>, kind: ConversionKind) -> RenderResult<String> {
    Vallader::new().convert(&number.into(), kind)
}
