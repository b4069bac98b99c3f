// ============================================================================
// Number-to-Words Interface
// Contract between a language backend and whatever dispatches to it
// ============================================================================

use crate::domain::ConversionKind;
use crate::lang::RenderResult;
use crate::numeric::Numeral;

/// A language backend that puts numbers into words.
///
/// Locale selection lives outside this crate; a dispatcher only needs this
/// trait to drive a backend.
pub trait NumberToWords: Send + Sync {
    /// Language code of the backend (e.g. "rm-vallader")
    fn code(&self) -> &str;

    /// Counting form of `number`
    ///
    /// # Errors
    /// Returns `UnsupportedMagnitude` when the integer part is too large.
    fn to_cardinal(&self, number: &Numeral) -> RenderResult<String>;

    /// Ranking form of `number`
    ///
    /// # Errors
    /// Returns `UnsupportedMagnitude` when the integer part is too large.
    fn to_ordinal(&self, number: &Numeral) -> RenderResult<String>;

    /// Render in the requested form
    fn convert(&self, number: &Numeral, kind: ConversionKind) -> RenderResult<String> {
        match kind {
            ConversionKind::Cardinal => self.to_cardinal(number),
            ConversionKind::Ordinal => self.to_ordinal(number),
        }
    }
}
