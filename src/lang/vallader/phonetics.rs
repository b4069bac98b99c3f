// ============================================================================
// Vallader Phonetics
// Surface rewrites applied after raw concatenation of sub-words
// ============================================================================
//
// Every adaptation is an ordered list of (pattern, replacement) pairs. Order
// matters: the placeholder marker has to survive until the last contraction
// rule, and the collective plurals are fixed before the linking consonant is
// inserted.

/// Ordered substring rewrite rules.
type Rules = &'static [(&'static str, &'static str)];

/// Vowel elision at tens/unit boundaries; strips the placeholder last.
const CONTRACTION_RULES: Rules = &[
    ("aün", "ün"),       // trentaün -> trentün
    ("eün", "ün"),       // vaincheün -> vainchün
    ("aot", "ot"),       // quarantaot -> quarantot
    ("eot", "ot"),       // vaincheot -> vainchot
    ("vainche_", "vainch"),
    ("_", ""),
];

/// Collective plurals of tschient, then e -> ed before a vowel.
const HUNDRED_RULES: Rules = &[
    ("duostschient", "duatschient"),
    ("traistschient", "trajatschient"),
    ("eün", "edün"),
    ("eot", "edot"),
];

/// Collective plurals of milli, then e -> ed before a vowel.
const THOUSAND_RULES: Rules = &[
    ("duosmilli", "duamilli"),
    ("traismilli", "trajamilli"),
    ("eün", "edün"),
    ("eot", "edot"),
];

/// Only a free-standing "e" links, never one inside a compound.
const MILLIARD_RULES: Rules = &[(" e ün", " ed ün"), (" e ot", " ed ot")];

fn apply_rules(text: &str, rules: Rules) -> String {
    rules
        .iter()
        .fold(text.to_owned(), |acc, (pattern, replacement)| {
            acc.replace(pattern, replacement)
        })
}

/// Contraction for tens compounds.
pub fn contract(text: &str) -> String {
    apply_rules(text, CONTRACTION_RULES)
}

/// Adaptation for a hundreds compound.
pub fn adapt_hundred(text: &str) -> String {
    apply_rules(text, HUNDRED_RULES)
}

/// Adaptation for a thousands compound.
pub fn adapt_thousand(text: &str) -> String {
    apply_rules(text, THOUSAND_RULES)
}

/// Adaptation for a multi-word large-number phrase.
///
/// The phrase is padded with a space on both sides so that a linking "e" at
/// either end is still seen as a separate word; the padding is trimmed again.
pub fn adapt_milliard(phrase: &str) -> String {
    let padded = format!(" {} ", phrase);
    apply_rules(&padded, MILLIARD_RULES).trim().to_owned()
}
