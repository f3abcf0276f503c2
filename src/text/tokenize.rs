// Tokenizer and content-word filter.
//
// Text is lower-cased and split on whitespace. Inside each chunk, word-breaking
// punctuation (semicolons, brackets, quotes, dashes, and commas or colons not
// sitting between two digits) separates words, so "prices,rates" yields both
// words. Each piece then has its leading and trailing punctuation peeled off
// as separate tokens, and English-style clitics ("n't", "'s", ...) are split
// from their stem. Hyphens, dots and apostrophes inside a word ("e-mail",
// "u.s", "9:30") stay put, so those tokens later fail the alphanumeric check
// and are dropped instead of being broken into fragments.

use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::language::{Language, StopWords};
use crate::error::Result;

static CLITIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)(n['’]t|['’](?:s|re|ve|ll|d|m))$").expect("clitic pattern is valid")
});

/// Characters that always end a word, even with no whitespace around them.
const WORD_BREAKS: &[char] = &[
    ';', '(', ')', '[', ']', '{', '}', '<', '>', '"', '“', '”', '„', '«', '»', '—', '–', '!', '?',
];

/// Ordered content words of a document. Duplicates are kept: repetition is
/// what drives co-occurrence weight.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSequence(Vec<String>);

impl TokenSequence {
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl From<Vec<String>> for TokenSequence {
    fn from(tokens: Vec<String>) -> Self {
        Self(tokens)
    }
}

impl<'a> FromIterator<&'a str> for TokenSequence {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self(iter.into_iter().map(str::to_string).collect())
    }
}

/// Turns raw text into a TokenSequence for one language.
#[derive(Debug, Clone)]
pub struct Tokenizer {
    stop_words: StopWords,
}

impl Tokenizer {
    pub fn new(stop_words: StopWords) -> Self {
        Self { stop_words }
    }

    /// Resolve the stop-word set up front; fails if the language has none.
    pub fn for_language(language: Language) -> Result<Self> {
        Ok(Self::new(StopWords::for_language(language)?))
    }

    /// Normalize, split and filter `text`.
    pub fn tokenize(&self, text: &str) -> TokenSequence {
        let raw = split_words(text);
        let raw_count = raw.len();
        let kept: Vec<String> = raw
            .into_iter()
            .filter(|token| is_content_word(token, &self.stop_words))
            .collect();

        debug!(raw = raw_count, kept = kept.len(), "Tokenized text");
        TokenSequence(kept)
    }
}

/// Lower-case `text` and split it into word and punctuation tokens.
pub fn split_words(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut tokens = Vec::new();
    for chunk in lower.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

/// A token survives if every character is alphanumeric and it is not a stop word.
pub fn is_content_word(token: &str, stop_words: &StopWords) -> bool {
    !token.is_empty()
        && token.chars().all(char::is_alphanumeric)
        && !stop_words.contains(token)
}

fn split_chunk(chunk: &str, out: &mut Vec<String>) {
    if !chunk.chars().any(char::is_alphanumeric) {
        // Pure punctuation, e.g. "--" or "...".
        out.push(chunk.to_string());
        return;
    }

    let chars: Vec<(usize, char)> = chunk.char_indices().collect();
    let mut piece_start = 0;
    let mut i = 0;
    while i < chars.len() {
        if !breaks_word(&chars, i) {
            i += 1;
            continue;
        }
        let cut = chars[i].0;
        let mut j = i;
        while j < chars.len() && breaks_word(&chars, j) {
            j += 1;
        }
        let resume = chars.get(j).map_or(chunk.len(), |&(at, _)| at);

        split_piece(&chunk[piece_start..cut], out);
        out.push(chunk[cut..resume].to_string());
        piece_start = resume;
        i = j;
    }
    split_piece(&chunk[piece_start..], out);
}

/// Whether the character at `i` separates the words around it.
fn breaks_word(chars: &[(usize, char)], i: usize) -> bool {
    let c = chars[i].1;
    let before = i.checked_sub(1).map(|p| chars[p].1);
    let after = chars.get(i + 1).map(|&(_, n)| n);
    match c {
        // "1,000" and "9:30" stay whole
        ',' | ':' => {
            !(before.is_some_and(char::is_numeric) && after.is_some_and(char::is_numeric))
        }
        // "--" is a dash, a single hyphen joins
        '-' => before == Some('-') || after == Some('-'),
        _ => WORD_BREAKS.contains(&c),
    }
}

/// Peel leading and trailing punctuation off one piece and split any clitic.
fn split_piece(piece: &str, out: &mut Vec<String>) {
    if piece.is_empty() {
        return;
    }
    let Some(start) = piece.find(char::is_alphanumeric) else {
        out.push(piece.to_string());
        return;
    };
    let end = piece
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_alphanumeric())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(piece.len());

    if start > 0 {
        out.push(piece[..start].to_string());
    }

    let core = &piece[start..end];
    match CLITIC.captures(core) {
        Some(caps) => {
            out.push(caps[1].to_string());
            out.push(caps[2].to_string());
        }
        None => out.push(core.to_string()),
    }

    if end < piece.len() {
        out.push(piece[end..].to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_peels_punctuation() {
        assert_eq!(
            split_words("Hello, World!"),
            vec!["hello", ",", "world", "!"]
        );
    }

    #[test]
    fn test_split_clitics() {
        assert_eq!(split_words("don't"), vec!["do", "n't"]);
        assert_eq!(split_words("cat's"), vec!["cat", "'s"]);
        assert_eq!(split_words("they'll"), vec!["they", "'ll"]);
    }

    #[test]
    fn test_split_keeps_internal_punctuation() {
        assert_eq!(
            split_words("e-mail (U.S.)"),
            vec!["e-mail", "(", "u.s", ".", ")"]
        );
        assert_eq!(split_words("1,000 at 9:30"), vec!["1,000", "at", "9:30"]);
    }

    #[test]
    fn test_split_on_word_breaking_punctuation() {
        assert_eq!(split_words("prices,rates"), vec!["prices", ",", "rates"]);
        assert_eq!(
            split_words("growth;inflation"),
            vec!["growth", ";", "inflation"]
        );
        assert_eq!(split_words("Reuters)—The"), vec!["reuters", ")—", "the"]);
        assert_eq!(split_words("up--down"), vec!["up", "--", "down"]);
        assert_eq!(split_words("note:see"), vec!["note", ":", "see"]);
    }

    #[test]
    fn test_split_pure_punctuation() {
        assert_eq!(split_words("-- ..."), vec!["--", "..."]);
    }

    #[test]
    fn test_split_non_ascii_letters() {
        assert_eq!(split_words("Москва, Straße."), vec!["москва", ",", "straße", "."]);
    }

    #[test]
    fn test_content_word_filter() {
        let stop = StopWords::from_words(["the"]);
        assert!(is_content_word("network", &stop));
        assert!(is_content_word("2024", &stop));
        assert!(!is_content_word("the", &stop));
        assert!(!is_content_word("e-mail", &stop));
        assert!(!is_content_word("n't", &stop));
        assert!(!is_content_word("", &stop));
    }

    #[test]
    fn test_tokenize_keeps_repeats_in_order() {
        let tokenizer = Tokenizer::new(StopWords::from_words(["the", "a"]));
        let tokens = tokenizer.tokenize("The cat saw a cat. The dog!");
        assert_eq!(tokens.as_slice(), &["cat", "saw", "cat", "dog"]);
    }

    #[test]
    fn test_tokenize_keeps_words_joined_by_punctuation() {
        let tokenizer = Tokenizer::new(StopWords::empty());
        assert_eq!(
            tokenizer.tokenize("prices,rates rise").as_slice(),
            &["prices", "rates", "rise"]
        );
        assert_eq!(
            tokenizer.tokenize("growth;inflation").as_slice(),
            &["growth", "inflation"]
        );
        assert_eq!(
            tokenizer.tokenize("(Reuters)—The bank").as_slice(),
            &["reuters", "the", "bank"]
        );
        assert_eq!(
            tokenizer.tokenize("«Москва»,Берлин").as_slice(),
            &["москва", "берлин"]
        );
    }

    #[test]
    fn test_tokenize_empty() {
        let tokenizer = Tokenizer::new(StopWords::empty());
        assert!(tokenizer.tokenize("").is_empty());
        assert!(tokenizer.tokenize("  ,.;  ").is_empty());
    }
}
