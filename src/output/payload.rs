// Render payload — everything a graph-drawing backend needs, as JSON.
//
// The renderer owns layout and pixels. It gets the subgraph with precomputed
// node sizes and edge widths, the legend, a title and fixed style hints.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::graph::centrality::RankedNode;
use crate::graph::visual::{EdgeVisual, NodeVisual};
use crate::pipeline::analyze::AnalysisReport;

/// Fixed drawing style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleHints {
    pub node_color: String,
    pub edge_color: String,
    pub font_size: u32,
    pub alpha: f64,
    pub line_width: f64,
    pub with_labels: bool,
}

impl Default for StyleHints {
    fn default() -> Self {
        Self {
            node_color: "skyblue".to_string(),
            edge_color: "gray".to_string(),
            font_size: 10,
            alpha: 0.8,
            line_width: 0.5,
            with_labels: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderPayload {
    pub title: String,
    pub nodes: Vec<NodeVisual>,
    pub edges: Vec<EdgeVisual>,
    pub legend: Vec<RankedNode>,
    /// Legend lines exactly as they should be printed.
    pub legend_text: String,
    pub style: StyleHints,
}

impl RenderPayload {
    pub fn from_report(report: &AnalysisReport) -> Self {
        Self {
            title: chart_title(report.params.node_count.get(), report.measure),
            nodes: report.visuals.nodes.clone(),
            edges: report.visuals.edges.clone(),
            legend: report.legend.entries.clone(),
            legend_text: report.legend.to_string(),
            style: StyleHints::default(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize render payload")
    }

    /// Write the payload as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let json = self.to_json()?;
        fs::write(path, json)
            .with_context(|| format!("Failed to write render payload to {}", path.display()))
    }
}

/// Chart heading naming the requested node count and the measure used.
pub fn chart_title(node_count: usize, measure: &str) -> String {
    format!(
        "Top {node_count} Nodes by {measure} (Node Size ∝ Centrality, Edge Width ∝ Co-occurrence Frequency)"
    )
}
