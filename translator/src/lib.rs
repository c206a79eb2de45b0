//! # Translation abstraction
//!
//! Defines the languages the bot understands, the fixed translation routes
//! between them, the [`Translator`] trait, and a DeepSeek-backed
//! implementation. Transport-agnostic; used by the bot's handlers.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

mod deepseek;
mod detect;
mod prompts;

pub use deepseek::DeepSeekTranslator;
pub use detect::detect_language;
pub use prompts::clean_translation;

/// Languages the detector and routes know about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    Chinese,
    Tagalog,
    Urdu,
    English,
}

impl Language {
    /// ISO 639-1 code, used in logs.
    pub fn code(&self) -> &'static str {
        match self {
            Language::Chinese => "zh",
            Language::Tagalog => "tl",
            Language::Urdu => "ur",
            Language::English => "en",
        }
    }

    /// English display name, used in prompts and reply text.
    pub fn english_name(&self) -> &'static str {
        match self {
            Language::Chinese => "Chinese",
            Language::Tagalog => "Tagalog",
            Language::Urdu => "Urdu",
            Language::English => "English",
        }
    }

    /// The fixed translation route for this source language, if any.
    /// Chinese goes to Urdu; Tagalog and Urdu go to English.
    pub fn route(&self) -> Option<TranslationRoute> {
        match self {
            Language::Chinese => Some(TranslationRoute {
                source: Language::Chinese,
                target: Language::Urdu,
            }),
            Language::Tagalog => Some(TranslationRoute {
                source: Language::Tagalog,
                target: Language::English,
            }),
            Language::Urdu => Some(TranslationRoute {
                source: Language::Urdu,
                target: Language::English,
            }),
            Language::English => None,
        }
    }
}

/// A source → target language pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRoute {
    pub source: Language,
    pub target: Language,
}

/// One completed translation; corresponds to exactly one incoming message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Translation {
    pub source_text: String,
    pub route: TranslationRoute,
    pub translated_text: String,
}

/// Translation interface: turn text into the route's target language.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` along `route` and returns the cleaned result.
    async fn translate(&self, text: &str, route: TranslationRoute) -> Result<Translation>;
}
