//! Per-route prompt construction and reply cleanup for the translation model.

use super::{Language, TranslationRoute};

/// Labels the model sometimes prepends to its output; everything before and
/// including the first one found is discarded.
const REPLY_LABELS: &[&str] = &[
    "Translation:",
    "翻译：",
    "乌尔都语翻译：",
    "英语翻译：",
];

/// System prompt for the given route: translator persona plus the
/// source/target pair, with tone-preservation phrasing per direction.
pub fn system_prompt(route: TranslationRoute) -> String {
    match (route.source, route.target) {
        (Language::Chinese, Language::Urdu) => {
            "You are a professional translator. Translate the following Chinese text into \
             accurate, natural Urdu. Preserve the tone and style of the original."
                .to_string()
        }
        (Language::Tagalog, Language::English) => {
            "You are a professional translator. Translate the following Tagalog (Filipino) text \
             into accurate English. Preserve the meaning of the original."
                .to_string()
        }
        (Language::Urdu, Language::English) => {
            "You are a professional translator. Translate the following Urdu text into accurate \
             English. Preserve the meaning of the original."
                .to_string()
        }
        (source, target) => format!(
            "You are a professional translator. Translate the following {} text into {}. \
             If the input mixes languages, translate it as a whole.",
            source.english_name(),
            target.english_name()
        ),
    }
}

/// User prompt wrapping the text to translate.
pub fn user_prompt(route: TranslationRoute, text: &str) -> String {
    format!(
        "Translate the following {} text into {}: {}",
        route.source.english_name(),
        route.target.english_name(),
        text
    )
}

/// Strips a leading label like `Translation:` from model output and trims
/// whitespace. Returns the text unchanged (trimmed) when no label is found.
pub fn clean_translation(raw: &str) -> String {
    let trimmed = raw.trim();
    for label in REPLY_LABELS {
        if let Some((_, rest)) = trimmed.split_once(label) {
            return rest.trim().to_string();
        }
    }
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Language;

    fn route(source: Language) -> TranslationRoute {
        source.route().unwrap()
    }

    #[test]
    fn system_prompt_names_both_languages() {
        let p = system_prompt(route(Language::Chinese));
        assert!(p.contains("Chinese"));
        assert!(p.contains("Urdu"));

        let p = system_prompt(route(Language::Tagalog));
        assert!(p.contains("Tagalog"));
        assert!(p.contains("English"));
    }

    #[test]
    fn user_prompt_carries_the_text() {
        let p = user_prompt(route(Language::Urdu), "آداب");
        assert!(p.contains("Urdu"));
        assert!(p.contains("English"));
        assert!(p.ends_with("آداب"));
    }

    #[test]
    fn clean_translation_strips_label() {
        assert_eq!(clean_translation("Translation: Hello there"), "Hello there");
        assert_eq!(clean_translation("  翻译：你好  "), "你好");
    }

    #[test]
    fn clean_translation_without_label_trims_only() {
        assert_eq!(clean_translation("  plain output \n"), "plain output");
        assert_eq!(clean_translation(""), "");
    }
}
