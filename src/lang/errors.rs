// ============================================================================
// Render Errors
// ============================================================================

use std::fmt;

/// Errors that can occur while putting a numeral into words.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RenderError {
    /// The integer part has more digits than the language has magnitude words
    UnsupportedMagnitude {
        /// Digit count of the rejected integer part
        digits: usize,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::UnsupportedMagnitude { digits } => write!(
                f,
                "unsupported magnitude: {} digits is too large to put into words",
                digits
            ),
        }
    }
}

impl std::error::Error for RenderError {}

/// Result type alias for rendering operations
pub type RenderResult<T> = Result<T, RenderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            RenderError::UnsupportedMagnitude { digits: 66 }.to_string(),
            "unsupported magnitude: 66 digits is too large to put into words"
        );
    }
}
