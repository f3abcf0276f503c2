// Cooccur: ranked word co-occurrence networks from free-form text.
//
// This is the library root. Each module corresponds to a stage or a
// collaborator of the analysis pipeline.

pub mod articles;
pub mod config;
pub mod error;
pub mod graph;
pub mod output;
pub mod pipeline;
pub mod text;

pub use error::{AnalysisError, Result};
pub use pipeline::analyze::{analyze, AnalysisParams, AnalysisReport, Analyzer};
