// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod number_to_words;

pub use number_to_words::NumberToWords;
