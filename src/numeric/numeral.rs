// ============================================================================
// Numeral
// Sign plus canonical decimal digit strings
// ============================================================================

use super::errors::{NumeralError, NumeralResult};
use std::fmt;

/// A number as the renderers see it: a sign, the integer digits and, for
/// decimal-valued input, the fractional digits.
///
/// The integer part is stored as a canonical digit string (no leading zeros,
/// `"0"` for zero), so arbitrarily large integers can be expressed. Whether a
/// value is too large to put into words is decided by the renderer, not here.
///
/// # Example
/// ```
/// use vallader_numerals::numeric::Numeral;
///
/// let n: Numeral = "-0042.50".parse().unwrap();
/// assert!(n.is_negative());
/// assert_eq!(n.integer_digits(), "42");
/// assert_eq!(n.fraction_digits(), Some("50"));
/// assert_eq!(n.to_string(), "-42.50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Numeral {
    negative: bool,
    integer: String,
    fraction: Option<String>,
}

impl Numeral {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Builds a numeral from pre-validated ASCII digit strings.
    ///
    /// Leading zeros of the integer part are dropped and a zero value is never
    /// negative.
    fn normalized(negative: bool, integer: &str, fraction: Option<&str>) -> Self {
        let trimmed = integer.trim_start_matches('0');
        let integer = if trimmed.is_empty() { "0" } else { trimmed };
        let is_zero =
            integer == "0" && fraction.map_or(true, |f| f.bytes().all(|b| b == b'0'));

        Self {
            negative: negative && !is_zero,
            integer: integer.to_owned(),
            fraction: fraction.map(str::to_owned),
        }
    }

    /// Formats a float with Rust's shortest round-trip representation.
    ///
    /// An integral float keeps a single `"0"` fractional digit, so `3.0` is
    /// still a decimal value.
    fn from_float_text(text: &str) -> NumeralResult<Self> {
        let mut numeral: Self = text.parse()?;
        if numeral.fraction.is_none() {
            numeral.fraction = Some("0".to_owned());
        }
        Ok(numeral)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// True for values below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.negative
    }

    /// Canonical digits of the integer part (truncated toward zero).
    #[inline]
    pub fn integer_digits(&self) -> &str {
        &self.integer
    }

    /// Digits after the decimal point, if the value is decimal.
    #[inline]
    pub fn fraction_digits(&self) -> Option<&str> {
        self.fraction.as_deref()
    }

    /// True when the value carries no fractional digits at all.
    #[inline]
    pub fn is_integral(&self) -> bool {
        self.fraction.is_none()
    }

    /// True when at least one fractional digit is non-zero.
    pub fn has_fractional_value(&self) -> bool {
        self.fraction
            .as_deref()
            .is_some_and(|f| f.bytes().any(|b| b != b'0'))
    }

    /// Number of digits in the integer part.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.integer.len()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            negative: false,
            ..self.clone()
        }
    }

    /// Integer part only, keeping the sign (truncation toward zero).
    pub fn trunc(&self) -> Self {
        Self::normalized(self.negative, &self.integer, None)
    }
}

// ============================================================================
// Conversions from primitive numbers
// ============================================================================

macro_rules! impl_from_unsigned {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                fn from(value: $t) -> Self {
                    Self {
                        negative: false,
                        integer: value.to_string(),
                        fraction: None,
                    }
                }
            }
        )*
    };
}

macro_rules! impl_from_signed {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Numeral {
                fn from(value: $t) -> Self {
                    Self {
                        negative: value < 0,
                        integer: value.unsigned_abs().to_string(),
                        fraction: None,
                    }
                }
            }
        )*
    };
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

impl TryFrom<f64> for Numeral {
    type Error = NumeralError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumeralError::NonFinite);
        }
        Self::from_float_text(&value.to_string())
    }
}

impl TryFrom<f32> for Numeral {
    type Error = NumeralError;

    fn try_from(value: f32) -> Result<Self, Self::Error> {
        if !value.is_finite() {
            return Err(NumeralError::NonFinite);
        }
        Self::from_float_text(&value.to_string())
    }
}

// ============================================================================
// Conversion from rust_decimal (exact)
// ============================================================================

impl From<rust_decimal::Decimal> for Numeral {
    /// The decimal's scale decides how many fractional digits are read, so
    /// `1.50` keeps its trailing zero.
    fn from(value: rust_decimal::Decimal) -> Self {
        let digits = value.mantissa().unsigned_abs().to_string();
        let scale = value.scale() as usize;

        if scale == 0 {
            return Self::normalized(value.is_sign_negative(), &digits, None);
        }

        // Pad so there is always at least one integer digit: 5 @ scale 3 -> 0.005
        let padded = format!("{:0>width$}", digits, width = scale + 1);
        let (integer, fraction) = padded.split_at(padded.len() - scale);
        Self::normalized(value.is_sign_negative(), integer, Some(fraction))
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl std::str::FromStr for Numeral {
    type Err = NumeralError;

    /// Parse from a plain decimal string.
    ///
    /// # Examples
    /// - "123" -> integral 123
    /// - "-0.05" -> negative, integer "0", fraction "05"
    /// - ".5" -> integer "0", fraction "5"
    /// - "7." -> integral 7
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        let (negative, unsigned) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else {
            (false, s)
        };

        let (int_str, frac_str) = match unsigned.split_once('.') {
            Some((int_str, frac_str)) => (int_str, Some(frac_str)),
            None => (unsigned, None),
        };
        let frac_str = frac_str.filter(|f| !f.is_empty());

        if int_str.is_empty() && frac_str.is_none() {
            return Err(NumeralError::InvalidInput);
        }

        let all_digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(int_str) || !frac_str.map_or(true, all_digits) {
            return Err(NumeralError::InvalidInput);
        }

        Ok(Self::normalized(negative, int_str, frac_str))
    }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "{}", self.integer)?;
        if let Some(fraction) = &self.fraction {
            write!(f, ".{}", fraction)?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
