// ============================================================================
// Numeral Errors
// Error types for building a renderable numeral from user input
// ============================================================================

use std::fmt;

/// Errors that can occur while constructing a [`Numeral`](super::Numeral).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralError {
    /// Input string is not a plain decimal number
    InvalidInput,
    /// Floating-point value is NaN or infinite
    NonFinite,
}

impl fmt::Display for NumeralError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumeralError::InvalidInput => {
                write!(f, "invalid input: expected digits with an optional sign and decimal point")
            },
            NumeralError::NonFinite => write!(f, "non-finite value: NaN and infinity have no words"),
        }
    }
}

impl std::error::Error for NumeralError {}

/// Result type alias for numeral construction
pub type NumeralResult<T> = Result<T, NumeralError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            NumeralError::NonFinite.to_string(),
            "non-finite value: NaN and infinity have no words"
        );
        assert!(NumeralError::InvalidInput
            .to_string()
            .starts_with("invalid input"));
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(NumeralError::InvalidInput, NumeralError::InvalidInput);
        assert_ne!(NumeralError::InvalidInput, NumeralError::NonFinite);
    }
}
