// Undirected weighted word graph.
//
// Backed by a petgraph `UnGraph` holding the words, with a sorted word ->
// NodeIndex map alongside. petgraph hands out indices in insertion order, so
// every public iterator goes through the sorted map (or sorts) to keep node
// and edge order deterministic, which the ranking tie-break and the tests
// rely on.

use std::collections::{BTreeMap, BTreeSet};

use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeRef;
use serde::Serialize;

use super::cooccurrence::CoOccurrenceCounts;

/// One undirected edge, reported with `source < target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub weight: u64,
}

/// Undirected graph without self-loops or parallel edges.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: UnGraph<String, u64>,
    node_index: BTreeMap<String, NodeIndex>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph from ordered pair counts, summing (a, b) and (b, a)
    /// into a single edge weight.
    pub fn from_counts(counts: &CoOccurrenceCounts) -> Self {
        let mut graph = Self::new();
        for (key, count) in counts.iter() {
            graph.add_weight(&key.word1, &key.word2, count);
        }
        graph
    }

    /// Insert a node with no edges. No-op if it already exists.
    pub fn add_node(&mut self, word: &str) {
        self.ensure_node(word);
    }

    fn ensure_node(&mut self, word: &str) -> NodeIndex {
        if let Some(&idx) = self.node_index.get(word) {
            return idx;
        }
        let idx = self.graph.add_node(word.to_string());
        self.node_index.insert(word.to_string(), idx);
        idx
    }

    /// Add `weight` to the edge between `a` and `b`, creating nodes and the
    /// edge as needed. Self-loops are ignored; weights saturate at u64::MAX.
    pub fn add_weight(&mut self, a: &str, b: &str, weight: u64) {
        if a == b {
            return;
        }
        let a = self.ensure_node(a);
        let b = self.ensure_node(b);
        match self.graph.find_edge(a, b) {
            Some(edge) => {
                let total = &mut self.graph[edge];
                *total = total.saturating_add(weight);
            }
            None => {
                self.graph.add_edge(a, b, weight);
            }
        }
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn contains_node(&self, word: &str) -> bool {
        self.node_index.contains_key(word)
    }

    /// Nodes in lexicographic order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> {
        self.node_index.keys().map(String::as_str)
    }

    /// Number of incident edges; 0 for unknown nodes.
    pub fn degree(&self, word: &str) -> usize {
        self.node_index
            .get(word)
            .map_or(0, |&idx| self.graph.neighbors(idx).count())
    }

    /// Neighbours of `word` with their edge weights, by neighbour name.
    pub fn neighbors<'a>(&'a self, word: &str) -> impl Iterator<Item = (&'a str, u64)> + 'a {
        let mut around: Vec<(&'a str, u64)> = match self.node_index.get(word) {
            Some(&idx) => self
                .graph
                .edges(idx)
                .map(|edge| {
                    let other = if edge.source() == idx {
                        edge.target()
                    } else {
                        edge.source()
                    };
                    (self.graph[other].as_str(), *edge.weight())
                })
                .collect(),
            None => Vec::new(),
        };
        around.sort_unstable_by(|x, y| x.0.cmp(y.0));
        around.into_iter()
    }

    /// Weight of the edge between `a` and `b`, in either order.
    pub fn weight(&self, a: &str, b: &str) -> Option<u64> {
        let a = *self.node_index.get(a)?;
        let b = *self.node_index.get(b)?;
        self.graph.find_edge(a, b).map(|edge| self.graph[edge])
    }

    /// Every edge once, ordered by (source, target).
    pub fn edges(&self) -> impl Iterator<Item = Edge<'_>> {
        let mut edges: Vec<Edge<'_>> = self
            .graph
            .edge_references()
            .map(|edge| {
                let x = self.graph[edge.source()].as_str();
                let y = self.graph[edge.target()].as_str();
                let (source, target) = if x < y { (x, y) } else { (y, x) };
                Edge {
                    source,
                    target,
                    weight: *edge.weight(),
                }
            })
            .collect();
        edges.sort_unstable_by(|p, q| (p.source, p.target).cmp(&(q.source, q.target)));
        edges.into_iter()
    }

    /// Largest edge weight, if there are any edges.
    pub fn max_weight(&self) -> Option<u64> {
        self.graph.edge_weights().copied().max()
    }

    /// The subgraph induced on `selected`: those nodes (when present in this
    /// graph) plus every edge with both endpoints among them.
    pub fn induced_subgraph<'s, I>(&self, selected: I) -> Graph
    where
        I: IntoIterator<Item = &'s str>,
    {
        let keep: BTreeSet<NodeIndex> = selected
            .into_iter()
            .filter_map(|word| self.node_index.get(word).copied())
            .collect();

        // filter_map drops every edge that loses an endpoint and renumbers nodes
        let graph = self.graph.filter_map(
            |idx, word| keep.contains(&idx).then(|| word.clone()),
            |_, &weight| Some(weight),
        );
        let node_index = graph
            .node_indices()
            .map(|idx| (graph[idx].clone(), idx))
            .collect();

        Graph { graph, node_index }
    }
}

// Two graphs are equal when they have the same words and the same weighted edges,
// however their petgraph indices were assigned.
impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes().eq(other.nodes()) && self.edges().eq(other.edges())
    }
}

impl Eq for Graph {}
