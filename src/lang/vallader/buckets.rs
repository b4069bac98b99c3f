// ============================================================================
// Vallader Bucket Renderers
// Magnitude-based decomposition of non-negative integers
// ============================================================================
//
// Buckets are disjoint half-open ranges:
//
//   Units      [0, 20)
//   Tens       [20, 100)
//   Hundreds   [100, 1000)
//   Thousands  [1000, 1_000_000)
//   Large      [1_000_000, 10^65)   (fewer than MAX_DIGITS digits)
//
// Every renderer only recurses into strictly smaller buckets, so recursion
// depth is bounded by the digit count.

use super::lexicon::{
    magnitude_word, tens_prefix, CARDINAL_WORDS, HUNDRED, LINK, PLACEHOLDER, THOUSAND, ZERO,
};
use super::phonetics::{adapt_hundred, adapt_milliard, adapt_thousand, contract};
use crate::lang::{RenderError, RenderResult};

/// Integers with this many digits or more have no magnitude word.
pub const MAX_DIGITS: usize = 66;

/// Largest digit count handled without the large-number renderer.
const SMALL_DIGITS: usize = 6;

/// Remainders after a hundred that take the linking "e"; fixed by native
/// speaker review, not derivable from a rule.
fn hundred_takes_link(rest: u32) -> bool {
    matches!(rest, 1..=13 | 15 | 16 | 20 | 30)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Units,
    Tens,
    Hundreds,
    Thousands,
    Large,
}

impl Bucket {
    /// Bucket of a value below one million.
    pub fn of_value(value: u32) -> Self {
        match value {
            0..=19 => Bucket::Units,
            20..=99 => Bucket::Tens,
            100..=999 => Bucket::Hundreds,
            1_000..=999_999 => Bucket::Thousands,
            _ => Bucket::Large,
        }
    }

    /// Bucket of a canonical digit string.
    pub fn of_digits(digits: &str) -> Self {
        if digits.len() > SMALL_DIGITS {
            Bucket::Large
        } else {
            Self::of_value(small_value(digits))
        }
    }
}

/// Value of a canonical digit string of at most `SMALL_DIGITS` digits.
fn small_value(digits: &str) -> u32 {
    digits
        .bytes()
        .fold(0, |acc, b| acc * 10 + u32::from(b - b'0'))
}

fn omit_if_zero(words: String) -> String {
    if words == ZERO {
        String::new()
    } else {
        words
    }
}

fn placeholder_if_zero(word: &'static str) -> &'static str {
    if word == ZERO {
        PLACEHOLDER
    } else {
        word
    }
}

// ============================================================================
// Dispatch
// ============================================================================

/// Cardinal words for a canonical, non-negative digit string.
pub fn cardinal(digits: &str) -> RenderResult<String> {
    let bucket = Bucket::of_digits(digits);
    tracing::trace!(digits, ?bucket, "cardinal bucket");

    match bucket {
        Bucket::Large => large_to_cardinal(digits),
        _ => Ok(small_cardinal(small_value(digits))),
    }
}

/// Cardinal words for a value below one million; never fails.
pub fn small_cardinal(value: u32) -> String {
    debug_assert!(value < 1_000_000, "{} is not below one million", value);

    match Bucket::of_value(value) {
        Bucket::Units => CARDINAL_WORDS[value as usize].to_owned(),
        Bucket::Tens => tens_to_cardinal(value),
        Bucket::Hundreds => hundreds_to_cardinal(value),
        Bucket::Thousands | Bucket::Large => thousands_to_cardinal(value),
    }
}

// ============================================================================
// Bucket Renderers
// ============================================================================

fn tens_to_cardinal(value: u32) -> String {
    let prefix = tens_prefix(value / 10);
    // Contraction strips the placeholder again
    let postfix = placeholder_if_zero(CARDINAL_WORDS[(value % 10) as usize]);
    contract(&format!("{}{}", prefix, postfix))
}

fn hundreds_to_cardinal(value: u32) -> String {
    let hundreds = value / 100;
    let rest = value % 100;

    let prefix = if hundreds == 1 {
        HUNDRED.to_owned()
    } else {
        format!("{}{}", CARDINAL_WORDS[hundreds as usize], HUNDRED)
    };
    let postfix = omit_if_zero(small_cardinal(rest));
    let infix = if hundred_takes_link(rest) { LINK } else { "" };

    adapt_hundred(&format!("{}{}{}", prefix, infix, postfix))
}

fn thousands_to_cardinal(value: u32) -> String {
    let thousands = value / 1_000;
    let rest = value % 1_000;

    let prefix = if thousands == 1 {
        THOUSAND.to_owned()
    } else {
        format!("{}{}", small_cardinal(thousands), THOUSAND)
    };
    let postfix = omit_if_zero(small_cardinal(rest));
    let infix = if rest <= 100 && !postfix.is_empty() {
        LINK
    } else {
        ""
    };

    adapt_thousand(&format!("{}{}{}", prefix, infix, postfix))
}

/// Millions and beyond.
///
/// The digits split into a leading multiplier group of one to three digits
/// and an exponent part whose length is a multiple of three:
///
/// ```text
/// 1|000000        -> ün milliun
/// 25|000000000    -> vainchetschinch milliards
/// 1|000000008     -> ün milliard ed ot
/// ```
fn large_to_cardinal(digits: &str) -> RenderResult<String> {
    let length = digits.len();
    if length >= MAX_DIGITS {
        tracing::warn!(digits = length, "rejecting number beyond the largest magnitude word");
        return Err(RenderError::UnsupportedMagnitude { digits: length });
    }

    let predigits = match length % 3 {
        0 => 3,
        n => n,
    };
    let (multiplier, exponent) = digits.split_at(predigits);
    let magnitude = magnitude_word(exponent.len())
        .ok_or(RenderError::UnsupportedMagnitude { digits: length })?;

    let mut phrase = if multiplier == "1" {
        format!("{} {}", CARDINAL_WORDS[1], magnitude)
    } else {
        // Plural magnitude word
        format!("{} {}s", small_cardinal(small_value(multiplier)), magnitude)
    };

    let significant = exponent.trim_start_matches('0');
    if !significant.is_empty() {
        // A whole empty group before the next value takes the linking "e"
        let joiner = if exponent.starts_with("000") { " e " } else { " " };
        phrase.push_str(joiner);
        phrase.push_str(&cardinal(significant)?);
    }

    Ok(adapt_milliard(&phrase))
}
