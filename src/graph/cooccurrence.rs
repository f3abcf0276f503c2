// Sliding-window co-occurrence counting.
//
// The window only looks forward: position i is paired with the next W
// positions, never with earlier ones. A pair seen as (a, b) in one place and
// (b, a) in another therefore lands under two ordered keys; the graph sums
// them into one undirected weight.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text::tokenize::TokenSequence;

/// Reference window size: each token is paired with the two that follow it.
pub const DEFAULT_WINDOW: NonZeroUsize = match NonZeroUsize::new(2) {
    Some(w) => w,
    None => unreachable!(),
};

/// An ordered pair of distinct words, `word1` being the earlier position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CoOccurrenceKey {
    pub word1: String,
    pub word2: String,
}

impl CoOccurrenceKey {
    pub fn new(word1: impl Into<String>, word2: impl Into<String>) -> Self {
        Self {
            word1: word1.into(),
            word2: word2.into(),
        }
    }
}

/// Ordered pair counts from one pass over a TokenSequence.
///
/// Backed by a sorted map so iteration order never depends on the order the
/// pairs were discovered in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoOccurrenceCounts {
    counts: BTreeMap<CoOccurrenceKey, u64>,
}

impl CoOccurrenceCounts {
    /// Count for the ordered pair (word1, word2); 0 if never seen.
    pub fn get(&self, word1: &str, word2: &str) -> u64 {
        self.counts
            .get(&CoOccurrenceKey::new(word1, word2))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all ordered counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&CoOccurrenceKey, u64)> {
        self.counts.iter().map(|(k, &c)| (k, c))
    }
}

/// Count co-occurring pairs within `window` positions after each token.
///
/// Identical neighbours are skipped, so no key ever pairs a word with itself.
pub fn count_cooccurrences(tokens: &TokenSequence, window: NonZeroUsize) -> CoOccurrenceCounts {
    let words = tokens.as_slice();
    let mut counts: BTreeMap<CoOccurrenceKey, u64> = BTreeMap::new();

    for (i, word1) in words.iter().enumerate() {
        let end = (i + window.get() + 1).min(words.len());
        for word2 in &words[i + 1..end] {
            if word1 == word2 {
                continue;
            }
            *counts
                .entry(CoOccurrenceKey::new(word1.as_str(), word2.as_str()))
                .or_insert(0) += 1;
        }
    }

    debug!(
        tokens = words.len(),
        window = window.get(),
        pairs = counts.len(),
        "Counted co-occurrences"
    );

    CoOccurrenceCounts { counts }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(text: &str) -> TokenSequence {
        text.split_whitespace().collect()
    }

    fn window(w: usize) -> NonZeroUsize {
        NonZeroUsize::new(w).unwrap()
    }

    #[test]
    fn test_reference_scenario_ordered_counts() {
        let counts = count_cooccurrences(&seq("cat dog cat bird dog cat"), DEFAULT_WINDOW);
        assert_eq!(counts.get("cat", "dog"), 2);
        assert_eq!(counts.get("dog", "cat"), 2);
        assert_eq!(counts.get("dog", "bird"), 1);
        assert_eq!(counts.get("bird", "dog"), 1);
        assert_eq!(counts.get("cat", "bird"), 1);
        assert_eq!(counts.get("bird", "cat"), 1);
        assert_eq!(counts.len(), 6);
        assert_eq!(counts.total(), 8);
    }

    #[test]
    fn test_window_one_pairs_only_neighbours() {
        let counts = count_cooccurrences(&seq("a b c"), window(1));
        assert_eq!(counts.get("a", "b"), 1);
        assert_eq!(counts.get("b", "c"), 1);
        assert_eq!(counts.get("a", "c"), 0);
    }

    #[test]
    fn test_window_larger_than_sequence() {
        let counts = count_cooccurrences(&seq("a b c"), window(10));
        assert_eq!(counts.len(), 3);
        assert_eq!(counts.get("a", "c"), 1);
    }

    #[test]
    fn test_repeated_word_never_pairs_with_itself() {
        let counts = count_cooccurrences(&seq("echo echo echo"), DEFAULT_WINDOW);
        assert!(counts.is_empty());
    }

    #[test]
    fn test_empty_and_single_token() {
        assert!(count_cooccurrences(&TokenSequence::default(), DEFAULT_WINDOW).is_empty());
        assert!(count_cooccurrences(&seq("alone"), DEFAULT_WINDOW).is_empty());
    }

    #[test]
    fn test_iteration_is_sorted() {
        let counts = count_cooccurrences(&seq("zeta alpha mid"), DEFAULT_WINDOW);
        let keys: Vec<(&str, &str)> = counts
            .iter()
            .map(|(k, _)| (k.word1.as_str(), k.word2.as_str()))
            .collect();
        assert_eq!(keys, vec![("alpha", "mid"), ("zeta", "alpha"), ("zeta", "mid")]);
    }
}
