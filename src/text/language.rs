// Supported languages and their stop-word sets.
//
// Stop words come from the `stop-words` crate. The set is resolved once, when
// the language is chosen, and then shared read-only by every tokenizer call.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use stop_words::{get, LANGUAGE};
use tracing::debug;

use crate::error::{AnalysisError, Result};

/// A language the tokenizer knows stop words for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Russian,
    Spanish,
    Italian,
    German,
}

impl Language {
    /// Every supported language, in the order the form lists them.
    pub const ALL: [Language; 5] = [
        Language::English,
        Language::Russian,
        Language::Spanish,
        Language::Italian,
        Language::German,
    ];

    /// Two-letter ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Russian => "ru",
            Language::Spanish => "es",
            Language::Italian => "it",
            Language::German => "de",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Russian => "Russian",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::German => "German",
        }
    }

    /// Resolve a language code, failing with a configuration error for
    /// anything outside the supported set.
    pub fn from_code(code: &str) -> Result<Self> {
        let wanted = code.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|lang| lang.code() == wanted)
            .ok_or_else(|| AnalysisError::UnsupportedLanguage {
                code: code.to_string(),
                supported: supported_codes(),
            })
    }

    fn stop_words_language(self) -> LANGUAGE {
        match self {
            Language::English => LANGUAGE::English,
            Language::Russian => LANGUAGE::Russian,
            Language::Spanish => LANGUAGE::Spanish,
            Language::Italian => LANGUAGE::Italian,
            Language::German => LANGUAGE::German,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

/// Comma-separated list of supported codes, for error messages and help text.
pub fn supported_codes() -> String {
    Language::ALL
        .iter()
        .map(|lang| lang.code())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A fixed set of words excluded before counting.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Load the stop-word list for a language.
    ///
    /// An empty list means the resource is missing, which is fatal: silently
    /// analyzing without stop words would rank "the" and "and" first.
    pub fn for_language(language: Language) -> Result<Self> {
        let words: Vec<String> = get(language.stop_words_language());
        if words.is_empty() {
            return Err(AnalysisError::MissingStopWords(language.code().to_string()));
        }
        debug!(language = language.code(), count = words.len(), "Loaded stop words");
        Ok(Self::from_words(words))
    }

    /// Build a set from arbitrary words. Entries are lower-cased so they match
    /// normalized tokens.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// A set that filters nothing.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
