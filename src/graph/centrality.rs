// Normalized degree centrality and node ranking.
//
//   centrality(v) = degree(v) / (node_count - 1)
//
// Graphs with zero or one node score 0 everywhere. Ranking is a full sort by
// score descending with ties broken by the word itself (ascending), so the
// order is reproducible regardless of how the graph was assembled.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::model::Graph;
use super::traits::CentralityMeasure;

/// Score per node, computed on the full graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CentralityScores {
    scores: BTreeMap<String, f64>,
}

impl CentralityScores {
    pub fn get(&self, word: &str) -> Option<f64> {
        self.scores.get(word).copied()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(w, &s)| (w.as_str(), s))
    }
}

impl FromIterator<(String, f64)> for CentralityScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            scores: iter.into_iter().collect(),
        }
    }
}

/// Fraction of the other nodes each node is directly connected to.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeCentrality;

impl CentralityMeasure for DegreeCentrality {
    fn name(&self) -> &'static str {
        "Degree Centrality"
    }

    fn score(&self, graph: &Graph) -> CentralityScores {
        degree_centrality(graph)
    }
}

/// Normalized degree centrality for every node of `graph`.
pub fn degree_centrality(graph: &Graph) -> CentralityScores {
    let n = graph.node_count();
    let denominator = if n > 1 { (n - 1) as f64 } else { 0.0 };

    graph
        .nodes()
        .map(|word| {
            let score = if denominator > 0.0 {
                graph.degree(word) as f64 / denominator
            } else {
                0.0
            };
            (word.to_string(), score)
        })
        .collect()
}

/// A node and its centrality score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedNode {
    pub word: String,
    pub score: f64,
}

/// All nodes, best first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankedNodeList(Vec<RankedNode>);

impl RankedNodeList {
    /// The first `n` entries, or all of them if there are fewer.
    pub fn top(&self, n: usize) -> &[RankedNode] {
        &self.0[..n.min(self.0.len())]
    }

    pub fn as_slice(&self) -> &[RankedNode] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedNode> {
        self.0.iter()
    }
}

/// Sort every scored node by score descending, then word ascending.
pub fn rank(scores: &CentralityScores) -> RankedNodeList {
    let mut ranked: Vec<RankedNode> = scores
        .iter()
        .map(|(word, score)| RankedNode {
            word: word.to_string(),
            score,
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.word.cmp(&b.word))
    });

    if let Some(first) = ranked.first() {
        debug!(nodes = ranked.len(), top = %first.word, top_score = first.score, "Ranked nodes");
    }

    RankedNodeList(ranked)
}
