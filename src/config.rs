use std::env;
use std::num::NonZeroUsize;

use anyhow::{Context, Result};

use crate::graph::cooccurrence::DEFAULT_WINDOW;
use crate::pipeline::analyze::AnalysisParams;
use crate::text::language::Language;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_NODE_COUNT: usize = 30;
pub const DEFAULT_WORD_COUNT: usize = 10;
pub const DEFAULT_MAX_ARTICLES: usize = 100;

/// Run settings, loaded from environment variables and then overridden by
/// command-line flags.
///
/// The .env file is loaded automatically at startup via dotenvy. Values are
/// kept raw here; `analysis_params` does the validation, so a bad flag and a
/// bad env var produce the same message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Language code for stop words (COOCCUR_LANGUAGE, default "en")
    pub language: String,
    /// Forward co-occurrence window (COOCCUR_WINDOW, default 2)
    pub window: usize,
    /// Nodes to draw (COOCCUR_NODES, default 30)
    pub node_count: usize,
    /// Words to list in the legend (COOCCUR_WORDS, default 10)
    pub word_count: usize,
    /// Articles to keep from a batch (COOCCUR_MAX_ARTICLES, default 100)
    pub max_articles: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            window: DEFAULT_WINDOW.get(),
            node_count: DEFAULT_NODE_COUNT,
            word_count: DEFAULT_WORD_COUNT,
            max_articles: DEFAULT_MAX_ARTICLES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup. Unset keys fall
    /// back to defaults; set-but-malformed numbers are an error.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            language: lookup("COOCCUR_LANGUAGE").unwrap_or(defaults.language),
            window: read_usize(&lookup, "COOCCUR_WINDOW", defaults.window)?,
            node_count: read_usize(&lookup, "COOCCUR_NODES", defaults.node_count)?,
            word_count: read_usize(&lookup, "COOCCUR_WORDS", defaults.word_count)?,
            max_articles: read_usize(&lookup, "COOCCUR_MAX_ARTICLES", defaults.max_articles)?,
        })
    }

    /// Resolve the configured language. Unsupported codes are fatal.
    pub fn require_language(&self) -> Result<Language> {
        Ok(Language::from_code(&self.language)?)
    }

    /// Validate counts and language, producing the pipeline's parameters.
    pub fn analysis_params(&self) -> Result<AnalysisParams> {
        let language = self.require_language()?;
        let (Some(node_count), Some(word_count)) = (
            NonZeroUsize::new(self.node_count),
            NonZeroUsize::new(self.word_count),
        ) else {
            anyhow::bail!("Number of nodes and top words must be positive integers.");
        };
        let Some(window) = NonZeroUsize::new(self.window) else {
            anyhow::bail!("Window size must be a positive integer.");
        };
        Ok(AnalysisParams::new(language, node_count, word_count).with_window(window))
    }

    /// Validate the article cap.
    pub fn require_max_articles(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.max_articles)
            .ok_or_else(|| anyhow::anyhow!("Number of articles must be a positive integer."))
    }
}

fn read_usize<F>(lookup: &F, key: &str, default: usize) -> Result<usize>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got '{raw}'")),
        None => Ok(default),
    }
}
