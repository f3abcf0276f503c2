use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use cooccur::articles::{self, DateWindow};
use cooccur::config::Config;
use cooccur::output::payload::RenderPayload;
use cooccur::output::terminal;
use cooccur::text::language::Language;
use cooccur::{AnalysisReport, Analyzer};

/// Cooccur: ranked word co-occurrence networks from free-form text.
///
/// Splits text into content words, links words that appear near each other,
/// and ranks them by how many distinct words they connect to.
#[derive(Parser)]
#[command(name = "cooccur", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Analysis settings shared by every analyzing subcommand. Unset flags fall
/// back to the COOCCUR_* environment variables.
#[derive(clap::Args)]
struct AnalysisArgs {
    /// Stop-word language code (en, ru, es, it, de)
    #[arg(long, short)]
    language: Option<String>,

    /// Number of top-ranked nodes to draw
    #[arg(long, short)]
    nodes: Option<usize>,

    /// Number of top-ranked words to list
    #[arg(long, short)]
    words: Option<usize>,

    /// Forward co-occurrence window
    #[arg(long)]
    window: Option<usize>,

    /// Write the render payload (subgraph, sizes, widths, legend) as JSON
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a text file (or stdin when no file is given)
    Analyze {
        /// Text file to analyze
        file: Option<PathBuf>,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// Analyze a batch of fetched news articles (NewsAPI JSON)
    Articles {
        /// JSON file with a search response or an array of articles
        file: PathBuf,

        /// Only articles published on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only articles published on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,

        /// Maximum number of articles to analyze
        #[arg(long)]
        max: Option<usize>,

        #[command(flatten)]
        analysis: AnalysisArgs,
    },

    /// List supported language codes
    Languages,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("cooccur=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { file, analysis } => {
            let config = apply_overrides(Config::load()?, &analysis);
            let analyzer = Analyzer::new(config.analysis_params()?)?;

            let text = match &file {
                Some(path) => std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read {}", path.display()))?,
                None => {
                    let mut buf = String::new();
                    std::io::stdin()
                        .read_to_string(&mut buf)
                        .context("Failed to read text from stdin")?;
                    buf
                }
            };

            info!(chars = text.chars().count(), "Analyzing text");
            let report = analyzer.analyze(&text);
            finish(&report, analysis.json.as_deref())?;
        }

        Commands::Articles {
            file,
            from,
            to,
            max,
            analysis,
        } => {
            let mut config = apply_overrides(Config::load()?, &analysis);
            if let Some(max) = max {
                config.max_articles = max;
            }

            // Validate everything before touching the file, like the form does.
            let params = config.analysis_params()?;
            let max_articles = config.require_max_articles()?;
            let window = DateWindow::new(
                from.as_deref().map(articles::parse_date).transpose()?,
                to.as_deref().map(articles::parse_date).transpose()?,
            )?;
            let analyzer = Analyzer::new(params)?;

            let loaded = articles::load_articles(&file)?;
            let selected = articles::select_articles(loaded, &window, max_articles);

            if selected.is_empty() {
                println!("No articles found.");
                return Ok(());
            }

            terminal::display_articles(&selected);

            let text = articles::combined_text(&selected);
            let report = analyzer.analyze(&text);
            finish(&report, analysis.json.as_deref())?;
        }

        Commands::Languages => {
            println!("{}", "Supported languages:".bold());
            for lang in Language::ALL {
                println!("  {}  {}", lang.code().bold(), lang.name());
            }
        }
    }

    Ok(())
}

/// Command-line flags win over environment configuration.
fn apply_overrides(mut config: Config, args: &AnalysisArgs) -> Config {
    if let Some(language) = &args.language {
        config.language = language.clone();
    }
    if let Some(nodes) = args.nodes {
        config.node_count = nodes;
    }
    if let Some(words) = args.words {
        config.word_count = words;
    }
    if let Some(window) = args.window {
        config.window = window;
    }
    config
}

/// Print the report and optionally hand the payload to a renderer via JSON.
fn finish(report: &AnalysisReport, json_path: Option<&Path>) -> Result<()> {
    terminal::display_report(report);

    if let Some(path) = json_path {
        RenderPayload::from_report(report).write_json(path)?;
        println!(
            "\n{}",
            format!("Render payload written to {}", path.display()).dimmed()
        );
    }
    Ok(())
}
