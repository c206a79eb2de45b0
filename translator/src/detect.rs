//! Heuristic language detection: Unicode-block checks for Chinese and Urdu,
//! a keyword list for Tagalog. Checked in that order.

use super::Language;

/// Common Tagalog words; a whole-word match marks the text as Tagalog.
const TAGALOG_KEYWORDS: &[&str] = &[
    "ako", "ikaw", "siya", "kami", "kayo", "sila", "maganda", "salamat", "paalam", "mahal", "oo",
    "hindi", "kumusta", "mabuti", "pangalan", "ano", "saan", "kailan",
];

/// Classifies `text` as Chinese, Tagalog, or Urdu; `None` if nothing matched.
///
/// Chinese wins over the others: a mixed Chinese/Latin message is treated as
/// Chinese so the whole message is translated as one unit.
pub fn detect_language(text: &str) -> Option<Language> {
    if text.chars().any(is_cjk) {
        return Some(Language::Chinese);
    }

    if has_tagalog_keyword(text) {
        return Some(Language::Tagalog);
    }

    if text.chars().any(is_arabic_script) {
        return Some(Language::Urdu);
    }

    None
}

/// CJK Unified Ideographs block.
fn is_cjk(c: char) -> bool {
    ('\u{4e00}'..='\u{9fff}').contains(&c)
}

/// Arabic block; Urdu is written in Arabic script.
fn is_arabic_script(c: char) -> bool {
    ('\u{0600}'..='\u{06ff}').contains(&c)
}

/// Whole-word keyword match, case-insensitive. Substring matching would
/// misfire on English ("oo" in "look").
fn has_tagalog_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    lower
        .split(|c: char| !c.is_alphabetic())
        .any(|word| TAGALOG_KEYWORDS.contains(&word))
}
