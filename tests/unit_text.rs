// Unit tests for text normalization.
//
// Tests the tokenizer against the real stop-word lists and the language
// resolution edge cases the CLI relies on.

use cooccur::error::AnalysisError;
use cooccur::text::language::{supported_codes, Language, StopWords};
use cooccur::text::tokenize::{split_words, Tokenizer};

// ============================================================
// Language resolution
// ============================================================

#[test]
fn all_supported_languages_have_stop_words() {
    for lang in Language::ALL {
        let stop = StopWords::for_language(lang)
            .unwrap_or_else(|e| panic!("{} should load stop words: {e}", lang.code()));
        assert!(!stop.is_empty(), "{} stop words empty", lang.code());
    }
}

#[test]
fn unsupported_language_is_configuration_error() {
    let err = Language::from_code("pt").unwrap_err();
    assert!(matches!(err, AnalysisError::UnsupportedLanguage { .. }));
    assert!(err.to_string().contains("pt"));
    assert!(err.to_string().contains(&supported_codes()));
}

#[test]
fn empty_language_code_rejected() {
    assert!(Language::from_code("").is_err());
}

// ============================================================
// Tokenizer with real stop words
// ============================================================

#[test]
fn english_stop_words_and_punctuation_removed() {
    let tokenizer = Tokenizer::for_language(Language::English).unwrap();
    let tokens = tokenizer.tokenize("The central bank raised interest rates, and the markets fell.");
    let words: Vec<&str> = tokens.iter().map(String::as_str).collect();

    assert!(words.contains(&"central"));
    assert!(words.contains(&"bank"));
    assert!(words.contains(&"rates"));
    assert!(words.contains(&"markets"));
    assert!(!words.contains(&"the"));
    assert!(!words.contains(&"and"));
    assert!(words.iter().all(|w| w.chars().all(char::is_alphanumeric)));
}

#[test]
fn tokens_are_lowercase_and_keep_order() {
    let tokenizer = Tokenizer::new(StopWords::empty());
    let tokens = tokenizer.tokenize("Rust RUST rust Cargo");
    assert_eq!(tokens.as_slice(), &["rust", "rust", "rust", "cargo"]);
}

#[test]
fn mixed_symbol_tokens_dropped() {
    let tokenizer = Tokenizer::new(StopWords::empty());
    let tokens = tokenizer.tokenize("e-mail costs $5 at 9:30 via co-op #news");
    let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
    assert_eq!(words, vec!["costs", "5", "at", "via", "news"]);
}

#[test]
fn words_joined_by_punctuation_survive() {
    let tokenizer = Tokenizer::new(StopWords::empty());
    let tokens = tokenizer.tokenize("Prices,rates rise; growth;inflation (Reuters)—The 1,000 units");
    assert_eq!(
        tokens.as_slice(),
        &["prices", "rates", "rise", "growth", "inflation", "reuters", "the", "units"]
    );
}

#[test]
fn clitics_do_not_leak_into_tokens() {
    let tokenizer = Tokenizer::new(StopWords::empty());
    let tokens = tokenizer.tokenize("The market's rally isn't over");
    assert_eq!(tokens.as_slice(), &["the", "market", "rally", "is", "over"]);
}

#[test]
fn russian_text_tokenizes() {
    let tokenizer = Tokenizer::for_language(Language::Russian).unwrap();
    let tokens = tokenizer.tokenize("Банк и рынок: банк растёт.");
    let words: Vec<&str> = tokens.iter().map(String::as_str).collect();
    assert_eq!(words.iter().filter(|w| **w == "банк").count(), 2);
    assert!(!words.contains(&"и"), "conjunction should be a stop word: {words:?}");
    assert!(words.iter().all(|w| w.chars().all(char::is_alphanumeric)));
}

#[test]
fn split_words_emits_punctuation_separately() {
    assert_eq!(
        split_words("\"Quoted,\" she said."),
        vec!["\"", "quoted", ",\"", "she", "said", "."]
    );
}
