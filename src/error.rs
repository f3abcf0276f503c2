// Core error type.
//
// The analysis pipeline only fails on configuration problems. Everything else
// (empty text, no pairs, fewer nodes than requested) degrades to empty output.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The language code has no stop-word resource.
    #[error("Unsupported language '{code}' (supported: {supported})")]
    UnsupportedLanguage { code: String, supported: String },

    /// The stop-word resource for a supported language came back empty.
    #[error("Stop-word list for '{0}' is unavailable")]
    MissingStopWords(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
