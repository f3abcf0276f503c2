// Text-to-graph analysis — one linear pass per call.
//
//   text -> tokens -> pair counts -> graph -> scores -> ranking
//        -> top-N subgraph -> visual weights, plus the top-M legend
//
// Each stage's output is kept on the report so callers (and tests) can inspect
// intermediate results. Nothing survives between calls.

use std::num::NonZeroUsize;

use tracing::info;

use super::legend::Legend;
use crate::error::Result;
use crate::graph::centrality::{rank, CentralityScores, DegreeCentrality, RankedNodeList};
use crate::graph::cooccurrence::{count_cooccurrences, CoOccurrenceCounts, DEFAULT_WINDOW};
use crate::graph::model::Graph;
use crate::graph::subgraph::select_top;
use crate::graph::traits::CentralityMeasure;
use crate::graph::visual::{map_visuals, VisualAttributes};
use crate::text::language::Language;
use crate::text::tokenize::{TokenSequence, Tokenizer};

/// Everything a single analysis run needs, passed in explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisParams {
    pub language: Language,
    /// How many top-ranked nodes to draw (N).
    pub node_count: NonZeroUsize,
    /// How many top-ranked words to list in the legend (M).
    pub word_count: NonZeroUsize,
    /// Forward co-occurrence window (W).
    pub window: NonZeroUsize,
}

impl AnalysisParams {
    pub fn new(language: Language, node_count: NonZeroUsize, word_count: NonZeroUsize) -> Self {
        Self {
            language,
            node_count,
            word_count,
            window: DEFAULT_WINDOW,
        }
    }

    /// Like `new`, resolving the language from its code first.
    pub fn from_code(
        language_code: &str,
        node_count: NonZeroUsize,
        word_count: NonZeroUsize,
    ) -> Result<Self> {
        Ok(Self::new(
            Language::from_code(language_code)?,
            node_count,
            word_count,
        ))
    }

    pub fn with_window(mut self, window: NonZeroUsize) -> Self {
        self.window = window;
        self
    }
}

/// Output of one analysis run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub params: AnalysisParams,
    /// Name of the centrality measure that produced `scores`.
    pub measure: &'static str,
    pub tokens: TokenSequence,
    pub counts: CoOccurrenceCounts,
    pub graph: Graph,
    /// Scores over the full graph.
    pub scores: CentralityScores,
    pub ranked: RankedNodeList,
    pub subgraph: Graph,
    pub visuals: VisualAttributes,
    pub legend: Legend,
}

/// Holds the per-language resources so several texts can be analyzed without
/// reloading stop words.
pub struct Analyzer {
    params: AnalysisParams,
    tokenizer: Tokenizer,
    measure: Box<dyn CentralityMeasure>,
}

impl Analyzer {
    /// Load the stop words for `params.language`. This is the only step that
    /// can fail.
    pub fn new(params: AnalysisParams) -> Result<Self> {
        let tokenizer = Tokenizer::for_language(params.language)?;
        Ok(Self::with_tokenizer(params, tokenizer))
    }

    /// Use a prepared tokenizer, e.g. one with a custom stop-word set.
    pub fn with_tokenizer(params: AnalysisParams, tokenizer: Tokenizer) -> Self {
        Self {
            params,
            tokenizer,
            measure: Box::new(DegreeCentrality),
        }
    }

    /// Swap the centrality measure.
    pub fn with_measure(mut self, measure: Box<dyn CentralityMeasure>) -> Self {
        self.measure = measure;
        self
    }

    pub fn params(&self) -> &AnalysisParams {
        &self.params
    }

    /// Run the full pipeline over `text`. Empty or stop-word-only text gives
    /// an empty report, not an error.
    pub fn analyze(&self, text: &str) -> AnalysisReport {
        let params = self.params;

        let tokens = self.tokenizer.tokenize(text);
        let counts = count_cooccurrences(&tokens, params.window);
        let graph = Graph::from_counts(&counts);
        let scores = self.measure.score(&graph);
        let ranked = rank(&scores);
        let subgraph = select_top(&graph, &ranked, params.node_count);
        let visuals = map_visuals(&subgraph, &scores);
        let legend = Legend::from_ranked(&ranked, params.word_count.get());

        info!(
            language = params.language.code(),
            tokens = tokens.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            subgraph_nodes = subgraph.node_count(),
            subgraph_edges = subgraph.edge_count(),
            legend = legend.len(),
            "Analyzed text"
        );

        AnalysisReport {
            params,
            measure: self.measure.name(),
            tokens,
            counts,
            graph,
            scores,
            ranked,
            subgraph,
            visuals,
            legend,
        }
    }
}

/// One-shot convenience: resolve resources for `params` and analyze `text`.
pub fn analyze(text: &str, params: &AnalysisParams) -> Result<AnalysisReport> {
    Ok(Analyzer::new(*params)?.analyze(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::language::StopWords;

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn bare_analyzer(n: usize, m: usize) -> Analyzer {
        let params = AnalysisParams::new(Language::English, nz(n), nz(m));
        Analyzer::with_tokenizer(params, Tokenizer::new(StopWords::empty()))
    }

    #[test]
    fn test_reference_scenario() {
        let report = bare_analyzer(10, 10).analyze("cat dog cat bird dog cat");
        assert_eq!(report.graph.weight("cat", "dog"), Some(4));
        assert_eq!(report.graph.weight("dog", "bird"), Some(2));
        assert_eq!(report.graph.weight("cat", "bird"), Some(2));
        assert_eq!(report.graph.node_count(), 3);
        assert_eq!(report.measure, "Degree Centrality");
    }

    #[test]
    fn test_empty_text_is_empty_everywhere() {
        let report = bare_analyzer(5, 5).analyze("");
        assert!(report.tokens.is_empty());
        assert!(report.counts.is_empty());
        assert!(report.graph.is_empty());
        assert!(report.ranked.is_empty());
        assert!(report.subgraph.is_empty());
        assert!(report.visuals.nodes.is_empty());
        assert!(report.legend.is_empty());
    }

    #[test]
    fn test_unsupported_language_fails_up_front() {
        assert!(AnalysisParams::from_code("xx", nz(3), nz(3)).is_err());
    }

    #[test]
    fn test_window_override() {
        let params = AnalysisParams::new(Language::English, nz(5), nz(5)).with_window(nz(1));
        let report =
            Analyzer::with_tokenizer(params, Tokenizer::new(StopWords::empty())).analyze("a b c");
        assert_eq!(report.graph.weight("a", "c"), None);
        assert_eq!(report.params.window, nz(1));
    }
}
