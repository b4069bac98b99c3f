// ============================================================================
// Render Configuration
// Which form to produce and the free-standing words around the number
// ============================================================================

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Conversion Kind
// ============================================================================

/// The written form to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ConversionKind {
    /// Counting form: 3 -> "trais"
    #[default]
    Cardinal,

    /// Ranking form: 3 -> "terz"
    Ordinal,
}

impl ConversionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionKind::Cardinal => "cardinal",
            ConversionKind::Ordinal => "ordinal",
        }
    }
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConversionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cardinal" => Ok(ConversionKind::Cardinal),
            "ordinal" => Ok(ConversionKind::Ordinal),
            other => Err(format!("unknown conversion kind: {:?}", other)),
        }
    }
}

// ============================================================================
// Complete Render Configuration
// ============================================================================

/// Configuration for a renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RenderConfig {
    /// Form used by `render` when the caller does not pick one
    pub kind: ConversionKind,

    /// Word placed before negative numbers
    pub minus_word: String,

    /// Word placed between the integer part and the fractional digits
    pub float_infix_word: String,
}

impl RenderConfig {
    /// Create a new configuration with the dialect's own words
    pub fn new(kind: ConversionKind, minus_word: String, float_infix_word: String) -> Self {
        Self {
            kind,
            minus_word,
            float_infix_word,
        }
    }

    /// Preset: cardinal numbers
    pub fn cardinal() -> Self {
        Self::default()
    }

    /// Preset: ordinal numbers
    pub fn ordinal() -> Self {
        Self::default().with_kind(ConversionKind::Ordinal)
    }

    /// Builder method: set the default conversion kind
    pub fn with_kind(mut self, kind: ConversionKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder method: set the minus word
    pub fn with_minus_word(mut self, word: impl Into<String>) -> Self {
        self.minus_word = word.into();
        self
    }

    /// Builder method: set the float infix word
    pub fn with_float_infix_word(mut self, word: impl Into<String>) -> Self {
        self.float_infix_word = word.into();
        self
    }

    /// Validate configuration
    ///
    /// The words are joined with single spaces, so they must be non-empty and
    /// carry no surrounding whitespace.
    pub fn validate(&self) -> Result<(), String> {
        for (name, word) in [
            ("minus_word", &self.minus_word),
            ("float_infix_word", &self.float_infix_word),
        ] {
            if word.is_empty() {
                return Err(format!("{} must not be empty", name));
            }
            if word.trim() != word.as_str() {
                return Err(format!("{} must not start or end with whitespace", name));
            }
        }
        Ok(())
    }
}

impl Default for RenderConfig {
    fn default() -> Self {
        use crate::lang::vallader::{FLOAT_INFIX_WORD, MINUS_WORD};

        Self::new(
            ConversionKind::Cardinal,
            MINUS_WORD.to_owned(),
            FLOAT_INFIX_WORD.to_owned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.kind, ConversionKind::Cardinal);
        assert_eq!(config.minus_word, "minus");
        assert_eq!(config.float_infix_word, "comma");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_presets() {
        assert_eq!(RenderConfig::cardinal().kind, ConversionKind::Cardinal);
        assert_eq!(RenderConfig::ordinal().kind, ConversionKind::Ordinal);
    }

    #[test]
    fn test_builder() {
        let config = RenderConfig::default()
            .with_kind(ConversionKind::Ordinal)
            .with_minus_word("main")
            .with_float_infix_word("punct");

        assert_eq!(config.kind, ConversionKind::Ordinal);
        assert_eq!(config.minus_word, "main");
        assert_eq!(config.float_infix_word, "punct");
    }

    #[test]
    fn test_validation_failures() {
        let empty = RenderConfig::default().with_minus_word("");
        assert_eq!(
            empty.validate(),
            Err("minus_word must not be empty".to_string())
        );

        let padded = RenderConfig::default().with_float_infix_word(" comma ");
        assert!(padded.validate().is_err());
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("cardinal".parse::<ConversionKind>(), Ok(ConversionKind::Cardinal));
        assert_eq!(" Ordinal ".parse::<ConversionKind>(), Ok(ConversionKind::Ordinal));
        assert!("year".parse::<ConversionKind>().is_err());
        assert_eq!(ConversionKind::Ordinal.to_string(), "ordinal");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_config_json_round_trip() {
        let config = RenderConfig::ordinal();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"kind\":\"ordinal\""));

        let parsed: RenderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }
}
