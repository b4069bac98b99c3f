// ============================================================================
// Vallader Lexicon
// Fixed word tables and the magnitude-name builder
// ============================================================================

use std::borrow::Cow;

pub const ZERO: &str = "nolla";

/// Bare "hundred"; also the suffix of 200..900.
pub const HUNDRED: &str = "tschient";

/// Bare "thousand"; also the suffix of 2000..999000.
pub const THOUSAND: &str = "milli";

/// Linking vowel inserted before some continuations.
pub const LINK: &str = "e";

/// Marks "no unit word follows" inside a tens compound.
pub const PLACEHOLDER: &str = "_";

pub const MINUS_WORD: &str = "minus";
pub const FLOAT_INFIX_WORD: &str = "comma";

pub const CARDINAL_WORDS: [&str; 20] = [
    ZERO, "ün", "duos", "trais", "quatter", "tschinch", "ses", "set", "ot", "nouv", "desch",
    "ündesch", "dudesch", "traidesch", "quattordesch", "quindesch", "saidesch", "deschset",
    "deschdot", "deschnouv",
];

/// Ordinals up to and including twenty are irregular.
pub const ORDINAL_WORDS: [&str; 21] = [
    ZERO,
    "prüm",
    "seguond",
    "terz",
    "quart",
    "tschinchavel",
    "sesavel",
    "settavel",
    "ottavel",
    "nouvavel",
    "deschavel",
    "ündeschavel",
    "dudeschavel",
    "traideschavel",
    "quattordeschavel",
    "quindeschavel",
    "saideschavel",
    "deschsettavel",
    "deschdottavel",
    "deschnouvavel",
    "vainchavel",
];

// "vainche" is not a surface form: contraction turns it into "vainch"/"vainchün"
const TENS_PREFIXES: [(u32, &str); 8] = [
    (2, "vainche"),
    (3, "trenta"),
    (4, "quaranta"),
    (5, "tschinquanta"),
    (6, "sesanta"),
    (7, "settanta"),
    (8, "ottanta"),
    (9, "novanta"),
];

/// Suffix replacing the last letter of a unit word for regular tens.
const TENS_SUFFIX: &str = "anta";

const EXPONENT_PREFIXES: [&str; 11] = [
    ZERO, "m", "b", "tr", "quadr", "quint", "sest", "sett", "ott", "nov", "dec",
];

const ILLION_SUFFIX: &str = "illiun";
const ILLIARD_SUFFIX: &str = "illiard";

/// Prefix of the multiple of ten with tens digit `tens` (2..=9).
pub fn tens_prefix(tens: u32) -> Cow<'static, str> {
    if let Some((_, prefix)) = TENS_PREFIXES.iter().find(|(digit, _)| *digit == tens) {
        return Cow::Borrowed(*prefix);
    }

    let unit = CARDINAL_WORDS[tens as usize % 10];
    let mut stem = unit.chars();
    stem.next_back();
    Cow::Owned(format!("{}{}", stem.as_str(), TENS_SUFFIX))
}

/// Name of the power of ten that follows `exponent_length` trailing digits.
///
/// `exponent_length` is always a multiple of three: 6 -> "milliun",
/// 9 -> "milliard", 12 -> "billiun". Returns `None` past the last prefix.
pub fn magnitude_word(exponent_length: usize) -> Option<String> {
    let prefix = EXPONENT_PREFIXES.get(exponent_length / 6)?;
    let suffix = if exponent_length % 6 == 0 {
        ILLION_SUFFIX
    } else {
        ILLIARD_SUFFIX
    };
    Some(format!("{}{}", prefix, suffix))
}
