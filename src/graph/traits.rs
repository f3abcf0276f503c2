// Centrality measure trait — swap-ready abstraction.
//
// The pipeline only needs "a score in [0, 1] per node". Degree centrality is
// the default; another measure can be dropped in without touching ranking,
// selection or the visual mapper.

use super::centrality::CentralityScores;
use super::model::Graph;

/// Computes one score per node of a graph.
pub trait CentralityMeasure: Send + Sync {
    /// Short name used in logs and report headers.
    fn name(&self) -> &'static str;

    /// Score every node of `graph`. Must return an entry for each node.
    fn score(&self, graph: &Graph) -> CentralityScores;
}
