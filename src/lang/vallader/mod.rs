// ============================================================================
// Vallader (Lower Engadine Romansh)
// Cardinal and ordinal number words
// ============================================================================
//
// Pipeline:
//
//   number -> sign / decimal split -> bucket selection -> recursive sub-words
//          -> phonetic adaptation -> words
//
// All tables are constants and every call is a pure function of its input.

mod buckets;
mod lexicon;
mod phonetics;

pub use buckets::MAX_DIGITS;
pub use lexicon::{FLOAT_INFIX_WORD, MINUS_WORD};

use crate::domain::{ConversionKind, RenderConfig};
use crate::interfaces::NumberToWords;
use crate::lang::RenderResult;
use crate::numeric::Numeral;
use lexicon::{CARDINAL_WORDS, ORDINAL_WORDS};

/// Number words in the Vallader dialect of Romansh.
///
/// # Example
/// ```
/// use vallader_numerals::prelude::*;
///
/// let vallader = Vallader::new();
/// assert_eq!(vallader.to_cardinal(&Numeral::from(21)).unwrap(), "vainchün");
/// assert_eq!(vallader.to_ordinal(&Numeral::from(3)).unwrap(), "terz");
/// assert_eq!(vallader.to_cardinal(&Numeral::from(-200)).unwrap(), "minus duatschient");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Vallader {
    config: RenderConfig,
}

impl Vallader {
    /// Language code reported through [`NumberToWords::code`]
    pub const CODE: &'static str = "rm-vallader";

    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a renderer from a validated configuration
    pub fn with_config(config: RenderConfig) -> Result<Self, String> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render in the configured default form
    pub fn render(&self, number: &Numeral) -> RenderResult<String> {
        self.convert(number, self.config.kind)
    }

    fn cardinal(&self, number: &Numeral) -> RenderResult<String> {
        if number.is_negative() {
            let words = self.cardinal(&number.abs())?;
            return Ok(format!("{} {}", self.config.minus_word, words));
        }
        if !number.is_integral() {
            return self.float_to_words(number, ConversionKind::Cardinal);
        }
        buckets::cardinal(number.integer_digits())
    }

    fn ordinal(&self, number: &Numeral) -> RenderResult<String> {
        if number.is_negative() {
            let words = self.ordinal(&number.abs())?;
            return Ok(format!("{} {}", self.config.minus_word, words));
        }
        // 3.0 is still ranked as the integer 3
        if number.has_fractional_value() {
            return self.float_to_words(number, ConversionKind::Ordinal);
        }

        let digits = number.integer_digits();
        if let Some(word) = irregular_ordinal(digits) {
            return Ok(word.to_owned());
        }

        let cardinal = buckets::cardinal(digits)?;
        let suffix = ordinal_suffix(&cardinal);
        Ok(cardinal + suffix)
    }

    /// Integer part in the requested form, the infix word, then every
    /// fractional digit read on its own: 1.25 -> "ün comma duos tschinch".
    fn float_to_words(&self, number: &Numeral, kind: ConversionKind) -> RenderResult<String> {
        let whole = number.trunc();
        let prefix = match kind {
            ConversionKind::Cardinal => self.cardinal(&whole)?,
            ConversionKind::Ordinal => self.ordinal(&whole)?,
        };

        let fraction = number
            .fraction_digits()
            .unwrap_or_default()
            .bytes()
            .map(|b| CARDINAL_WORDS[usize::from(b - b'0')])
            .collect::<Vec<_>>()
            .join(" ");

        Ok(format!(
            "{} {} {}",
            prefix, self.config.float_infix_word, fraction
        ))
    }
}

/// Ordinals 0..=20 come straight from the table.
fn irregular_ordinal(digits: &str) -> Option<&'static str> {
    let value: usize = digits.parse().ok()?;
    ORDINAL_WORDS.get(value).copied()
}

/// Suffix turning a cardinal above twenty into its ordinal.
fn ordinal_suffix(cardinal: &str) -> &'static str {
    if cardinal.ends_with('a') {
        "vel"
    } else if cardinal.ends_with("set") || cardinal.ends_with("ot") {
        "tavel"
    } else {
        "avel"
    }
}

impl NumberToWords for Vallader {
    fn code(&self) -> &str {
        Self::CODE
    }

    fn to_cardinal(&self, number: &Numeral) -> RenderResult<String> {
        tracing::debug!(%number, "rendering cardinal");
        self.cardinal(number)
    }

    fn to_ordinal(&self, number: &Numeral) -> RenderResult<String> {
        tracing::debug!(%number, "rendering ordinal");
        self.ordinal(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::RenderError;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn cardinal(number: impl Into<Numeral>) -> String {
        Vallader::new().to_cardinal(&number.into()).unwrap()
    }

    fn ordinal(number: impl Into<Numeral>) -> String {
        Vallader::new().to_ordinal(&number.into()).unwrap()
    }

    fn float(value: f64) -> Numeral {
        Numeral::try_from(value).unwrap()
    }

    #[test]
    fn test_cardinal_landmarks() {
        assert_eq!(cardinal(0), "nolla");
        assert_eq!(cardinal(1), "ün");
        assert_eq!(cardinal(21), "vainchün");
        assert_eq!(cardinal(100), "tschient");
        assert_eq!(cardinal(200), "duatschient");
        assert_eq!(cardinal(1_000_000), "ün milliun");
    }

    #[test]
    fn test_cardinal_table() {
        for (value, word) in CARDINAL_WORDS.iter().enumerate() {
            assert_eq!(cardinal(value), *word);
        }
    }

    #[test]
    fn test_negative_cardinal() {
        assert_eq!(cardinal(-1), "minus ün");
        assert_eq!(cardinal(-21), "minus vainchün");
        assert_eq!(cardinal(i64::MIN), format!("minus {}", cardinal(i64::MIN.unsigned_abs())));
    }

    #[test]
    fn test_ordinal_table() {
        assert_eq!(ordinal(0), "nolla");
        assert_eq!(ordinal(1), "prüm");
        assert_eq!(ordinal(2), "seguond");
        assert_eq!(ordinal(3), "terz");
        assert_eq!(ordinal(19), "deschnouvavel");
        // Not derived from "vainch"
        assert_eq!(ordinal(20), "vainchavel");
    }

    #[test]
    fn test_ordinal_suffixes() {
        assert_eq!(ordinal(21), "vainchünavel");
        assert_eq!(ordinal(22), "vaincheduosavel");
        assert_eq!(ordinal(27), "vainchesettavel");
        assert_eq!(ordinal(28), "vainchottavel");
        assert_eq!(ordinal(30), "trentavel");
        assert_eq!(ordinal(100), "tschientavel");
        assert_eq!(ordinal(107), "tschientesettavel");
        assert_eq!(ordinal(1_000), "milliavel");
        assert_eq!(ordinal(1_000_000), "ün milliunavel");
    }

    #[test]
    fn test_negative_ordinal() {
        assert_eq!(ordinal(-3), "minus terz");
        assert_eq!(ordinal(-30), "minus trentavel");
    }

    #[test]
    fn test_float_cardinal() {
        assert_eq!(cardinal(float(1.5)), "ün comma tschinch");
        assert_eq!(cardinal(float(0.25)), "nolla comma duos tschinch");
        assert_eq!(cardinal(float(-1.5)), "minus ün comma tschinch");
        assert_eq!(cardinal(float(3.0)), "trais comma nolla");
        assert_eq!(cardinal(float(0.1)), "nolla comma ün");
    }

    #[test]
    fn test_float_ordinal() {
        assert_eq!(ordinal(float(1.5)), "prüm comma tschinch");
        assert_eq!(ordinal(float(21.5)), "vainchünavel comma tschinch");
        assert_eq!(ordinal(float(-0.5)), "minus nolla comma tschinch");
        // Integral floats rank like integers
        assert_eq!(ordinal(float(3.0)), "terz");
    }

    #[test]
    fn test_decimal_input_is_exact() {
        assert_eq!(cardinal(Decimal::new(150, 2)), "ün comma tschinch nolla");
        assert_eq!(cardinal(Decimal::new(-1005, 3)), "minus ün comma nolla nolla tschinch");
        assert_eq!(cardinal(Decimal::from(42)), "quarantaduos");
    }

    #[test]
    fn test_unsupported_magnitude() {
        let huge: Numeral = format!("1{}", "0".repeat(65)).parse().unwrap();
        let vallader = Vallader::new();

        let expected = Err(RenderError::UnsupportedMagnitude { digits: 66 });
        assert_eq!(vallader.to_cardinal(&huge), expected);
        assert_eq!(vallader.to_ordinal(&huge), expected);

        let negative: Numeral = format!("-{}", huge).parse().unwrap();
        assert_eq!(vallader.to_cardinal(&negative), expected);

        let decimal: Numeral = format!("{}.5", huge).parse().unwrap();
        assert_eq!(vallader.to_cardinal(&decimal), expected);
    }

    #[test]
    fn test_custom_words() {
        let config = RenderConfig::default()
            .with_minus_word("main")
            .with_float_infix_word("punct");
        let vallader = Vallader::with_config(config).unwrap();

        assert_eq!(vallader.to_cardinal(&Numeral::from(-1)).unwrap(), "main ün");
        assert_eq!(
            vallader.to_cardinal(&float(2.5)).unwrap(),
            "duos punct tschinch"
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RenderConfig::default().with_minus_word("  ");
        assert!(Vallader::with_config(config).is_err());
    }

    #[test]
    fn test_render_uses_configured_kind() {
        let cardinal = Vallader::new();
        let ordinal = Vallader::with_config(RenderConfig::ordinal()).unwrap();
        let three = Numeral::from(3);

        assert_eq!(cardinal.render(&three).unwrap(), "trais");
        assert_eq!(ordinal.render(&three).unwrap(), "terz");
        assert_eq!(
            ordinal.convert(&three, ConversionKind::Cardinal).unwrap(),
            "trais"
        );
        assert_eq!(ordinal.code(), "rm-vallader");
    }

    proptest! {
        #[test]
        fn prop_negative_is_minus_prefixed(n in 1i64..=i64::MAX) {
            prop_assert_eq!(cardinal(-n), format!("minus {}", cardinal(n)));
        }

        #[test]
        fn prop_ordinal_extends_cardinal(n in 21u64..=u64::MAX) {
            let cardinal = cardinal(n);
            let ordinal = ordinal(n);
            prop_assert!(ordinal.starts_with(&cardinal));

            let suffix = &ordinal[cardinal.len()..];
            prop_assert_eq!(suffix, ordinal_suffix(&cardinal));
            prop_assert!(["vel", "tavel", "avel"].contains(&suffix));
        }

        #[test]
        fn prop_supported_integers_have_words(digits in "[1-9][0-9]{0,64}") {
            let number: Numeral = digits.parse().unwrap();
            let words = Vallader::new().to_cardinal(&number).unwrap();
            prop_assert!(!words.is_empty());
            prop_assert_eq!(words.trim(), words.as_str());
        }

        #[test]
        fn prop_too_many_digits_rejected(digits in "[1-9][0-9]{65,90}") {
            let number: Numeral = digits.parse().unwrap();
            prop_assert_eq!(
                Vallader::new().to_cardinal(&number),
                Err(RenderError::UnsupportedMagnitude { digits: digits.len() })
            );
        }
    }
}
