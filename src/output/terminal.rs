// Colored terminal output for analysis reports.
//
// main.rs delegates here. Nothing in this module computes anything; it only
// formats what the pipeline produced.

use colored::Colorize;

use crate::articles::Article;
use crate::pipeline::analyze::AnalysisReport;

use super::payload::chart_title;

/// Display the legend, the drawn subgraph's edges and a short summary.
pub fn display_report(report: &AnalysisReport) {
    let title = chart_title(report.params.node_count.get(), report.measure);
    println!("\n{}", format!("=== {title} ===").bold());
    println!();

    if report.graph.is_empty() {
        println!(
            "  {}",
            "No co-occurring words found. Try a longer text or another language.".dimmed()
        );
        return;
    }

    println!(
        "  {}",
        format!("Top {} words", report.legend.len()).bold()
    );
    for (i, line) in report.legend.lines().iter().enumerate() {
        let colored_line = if i < 3 {
            line.bright_green()
        } else {
            line.normal()
        };
        println!("  {:>3}. {}", i + 1, colored_line);
    }
    println!();

    if report.visuals.edges.is_empty() {
        println!("  {}", "Selected nodes share no co-occurrences.".dimmed());
    } else {
        println!(
            "  {:<20} {:<20} {:>6}  {:>5}",
            "Word".dimmed(),
            "Word".dimmed(),
            "Weight".dimmed(),
            "Width".dimmed(),
        );
        println!("  {}", "-".repeat(56).dimmed());
        for edge in &report.visuals.edges {
            println!(
                "  {:<20} {:<20} {:>6}  {:>5.1}",
                super::truncate_chars(&edge.source, 20),
                super::truncate_chars(&edge.target, 20),
                edge.weight,
                edge.width,
            );
        }
    }

    println!();
    println!(
        "  {} tokens, {} distinct words, {} edges; drawing {} nodes and {} edges",
        report.tokens.len(),
        report.graph.node_count(),
        report.graph.edge_count(),
        report.subgraph.node_count(),
        report.subgraph.edge_count(),
    );
}

/// Display the article listing that fed the analysis.
pub fn display_articles(articles: &[Article]) {
    println!(
        "\n{}",
        format!("=== Search Results ({} articles) ===", articles.len()).bold()
    );
    println!();
    for article in articles {
        println!("  {}", article.title().bold());
        if let Some(description) = article.description.as_deref() {
            println!("    {}", super::truncate_chars(description, 140).dimmed());
        }
    }
}
