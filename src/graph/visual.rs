// Visual-weight mapping for the renderer.
//
// Node size scales linearly with centrality. Edge width scales with weight
// relative to the heaviest edge in the subgraph, so the heaviest edge is
// always MAX_EDGE_WIDTH wide. An edgeless subgraph uses 1 as the basis.

use serde::{Deserialize, Serialize};

use super::centrality::CentralityScores;
use super::model::Graph;

/// Node size per unit of centrality.
pub const NODE_SIZE_SCALE: f64 = 5000.0;

/// Width of the heaviest edge.
pub const MAX_EDGE_WIDTH: f64 = 10.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeVisual {
    pub word: String,
    pub score: f64,
    pub size: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeVisual {
    pub source: String,
    pub target: String,
    pub weight: u64,
    pub width: f64,
}

/// Presentation-ready attributes of a subgraph.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VisualAttributes {
    /// Nodes by score descending, then word ascending.
    pub nodes: Vec<NodeVisual>,
    /// Edges ordered by (source, target).
    pub edges: Vec<EdgeVisual>,
}

/// Derive node sizes and edge widths for `subgraph`.
///
/// `scores` are full-graph scores; nodes missing from them get 0.
pub fn map_visuals(subgraph: &Graph, scores: &CentralityScores) -> VisualAttributes {
    let mut nodes: Vec<NodeVisual> = subgraph
        .nodes()
        .map(|word| {
            let score = scores.get(word).unwrap_or(0.0);
            NodeVisual {
                word: word.to_string(),
                score,
                size: score * NODE_SIZE_SCALE,
            }
        })
        .collect();
    nodes.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| a.word.cmp(&b.word))
    });

    let basis = subgraph.max_weight().unwrap_or(1) as f64;
    let edges = subgraph
        .edges()
        .map(|edge| EdgeVisual {
            source: edge.source.to_string(),
            target: edge.target.to_string(),
            weight: edge.weight,
            width: MAX_EDGE_WIDTH * (edge.weight as f64 / basis),
        })
        .collect();

    VisualAttributes { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::centrality::degree_centrality;

    #[test]
    fn test_widths_normalized_to_heaviest_edge() {
        let mut g = Graph::new();
        g.add_weight("a", "b", 4);
        g.add_weight("b", "c", 2);
        g.add_weight("c", "a", 1);
        let visuals = map_visuals(&g, &degree_centrality(&g));

        let widths: Vec<f64> = visuals.edges.iter().map(|e| e.width).collect();
        assert_eq!(widths, vec![10.0, 2.5, 5.0]);
        assert!(visuals.edges.iter().all(|e| e.width <= MAX_EDGE_WIDTH));
    }

    #[test]
    fn test_sizes_scale_with_centrality() {
        let mut g = Graph::new();
        g.add_weight("hub", "x", 1);
        g.add_weight("hub", "y", 1);
        let visuals = map_visuals(&g, &degree_centrality(&g));

        assert_eq!(visuals.nodes[0].word, "hub");
        assert!((visuals.nodes[0].size - 5000.0).abs() < 1e-9);
        assert!((visuals.nodes[1].size - 2500.0).abs() < 1e-9);
    }

    #[test]
    fn test_edgeless_subgraph_is_safe() {
        let mut g = Graph::new();
        g.add_node("lonely");
        let visuals = map_visuals(&g, &CentralityScores::default());
        assert!(visuals.edges.is_empty());
        assert_eq!(visuals.nodes.len(), 1);
        assert_eq!(visuals.nodes[0].size, 0.0);
    }

    #[test]
    fn test_empty_subgraph() {
        let visuals = map_visuals(&Graph::new(), &CentralityScores::default());
        assert_eq!(visuals, VisualAttributes::default());
    }
}
