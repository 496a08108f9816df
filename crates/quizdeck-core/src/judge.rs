//! Answer normalization and comparison.
//!
//! Matching is forgiving of surrounding whitespace, ideographic versus
//! ordinary spaces, and letter case. Nothing else is folded: punctuation
//! counts, and there is exactly one accepted answer per question.

/// Ideographic (full-width) space, U+3000.
const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// Normalize an answer for comparison.
///
/// 1. An absent value is the empty string.
/// 2. Every U+3000 becomes an ordinary space.
/// 3. Leading and trailing whitespace is stripped.
/// 4. Letters are lower-cased; scripts without case are unaffected.
pub fn normalize(value: Option<&str>) -> String {
    value
        .unwrap_or_default()
        .replace(IDEOGRAPHIC_SPACE, " ")
        .trim()
        .to_lowercase()
}

/// Returns `true` if `raw` matches `accepted` after normalization.
pub fn answers_match(raw: Option<&str>, accepted: Option<&str>) -> bool {
    normalize(raw) == normalize(accepted)
}
