// Top-N subgraph selection.

use std::num::NonZeroUsize;

use tracing::debug;

use super::centrality::RankedNodeList;
use super::model::Graph;

/// Induced subgraph over the first `n` ranked nodes (all of them if fewer).
///
/// The result can be disconnected or edgeless; scores stay those of the full
/// graph and are not recomputed here.
pub fn select_top(graph: &Graph, ranked: &RankedNodeList, n: NonZeroUsize) -> Graph {
    let selected = ranked.top(n.get());
    let subgraph = graph.induced_subgraph(selected.iter().map(|r| r.word.as_str()));

    debug!(
        requested = n.get(),
        nodes = subgraph.node_count(),
        edges = subgraph.edge_count(),
        "Selected subgraph"
    );

    subgraph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::centrality::{degree_centrality, rank};

    fn nz(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn path() -> Graph {
        // a - b - c - d, b and c have degree 2
        let mut g = Graph::new();
        g.add_weight("a", "b", 1);
        g.add_weight("b", "c", 4);
        g.add_weight("c", "d", 2);
        g
    }

    #[test]
    fn test_select_top_two() {
        let g = path();
        let ranked = rank(&degree_centrality(&g));
        let sub = select_top(&g, &ranked, nz(2));
        assert_eq!(sub.nodes().collect::<Vec<_>>(), vec!["b", "c"]);
        assert_eq!(sub.weight("b", "c"), Some(4));
        assert_eq!(sub.edge_count(), 1);
    }

    #[test]
    fn test_select_one_is_edgeless() {
        let g = path();
        let ranked = rank(&degree_centrality(&g));
        let sub = select_top(&g, &ranked, nz(1));
        assert_eq!(sub.node_count(), 1);
        assert_eq!(sub.edge_count(), 0);
    }

    #[test]
    fn test_select_more_than_available() {
        let g = path();
        let ranked = rank(&degree_centrality(&g));
        let sub = select_top(&g, &ranked, nz(50));
        assert_eq!(sub, g);
    }
}
