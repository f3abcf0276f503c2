// Legend — the ranked (word, score) list shown beside the drawn graph.
//
// Drawn from the same ranking as the subgraph but sized independently, so it
// can list words that are not drawn (M > N) or fewer than are drawn (M < N).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::centrality::{RankedNode, RankedNodeList};

/// Digits after the decimal point when printing scores.
pub const SCORE_PRECISION: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Legend {
    pub entries: Vec<RankedNode>,
}

impl Legend {
    /// The first `m` ranked nodes (all of them if fewer).
    pub fn from_ranked(ranked: &RankedNodeList, m: usize) -> Self {
        Self {
            entries: ranked.top(m).to_vec(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// One `word: 0.1234` line per entry.
    pub fn lines(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|e| format!("{}: {:.*}", e.word, SCORE_PRECISION, e.score))
            .collect()
    }
}

impl fmt::Display for Legend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.lines().join("\n"))
    }
}
