// Article batches — the text source for an analysis run.
//
// Articles are read from JSON that was already fetched from a news search API
// (a NewsAPI `everything` response, or a bare array of articles). This module
// filters them by publication date, caps the count, renders the plain-text
// results listing, and joins titles and descriptions into one text blob.

use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A single article — just the fields the analysis needs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// RFC 3339 timestamp as sent by the API, e.g. "2024-03-01T08:15:00Z".
    #[serde(default)]
    pub published_at: Option<String>,
}

impl Article {
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Publication date, if the timestamp starts with a valid YYYY-MM-DD.
    pub fn published_date(&self) -> Option<NaiveDate> {
        let stamp = self.published_at.as_deref()?;
        let day = stamp.get(..10)?;
        NaiveDate::parse_from_str(day, "%Y-%m-%d").ok()
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ArticleBatch {
    List(Vec<Article>),
    Response(SearchResponse),
}

/// Parse an article batch from JSON.
pub fn parse_articles(json: &str) -> Result<Vec<Article>> {
    let batch: ArticleBatch =
        serde_json::from_str(json).context("Article batch is not valid JSON")?;

    match batch {
        ArticleBatch::List(articles) => Ok(articles),
        ArticleBatch::Response(response) => {
            if let Some(status) = response.status.as_deref() {
                if status != "ok" {
                    anyhow::bail!(
                        "Article search failed with status '{}': {}",
                        status,
                        response.message.as_deref().unwrap_or("no message")
                    );
                }
            }
            Ok(response.articles)
        }
    }
}

/// Read and parse an article batch from disk.
pub fn load_articles(path: &Path) -> Result<Vec<Article>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read articles from {}", path.display()))?;
    let articles = parse_articles(&json)
        .with_context(|| format!("Failed to parse articles in {}", path.display()))?;
    info!(count = articles.len(), path = %path.display(), "Loaded articles");
    Ok(articles)
}

/// Parse a YYYY-MM-DD date as typed into the form.
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format. Use YYYY-MM-DD."))
}

/// Inclusive publication-date range. Either end may be open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateWindow {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

impl DateWindow {
    pub fn new(from: Option<NaiveDate>, to: Option<NaiveDate>) -> Result<Self> {
        if let (Some(f), Some(t)) = (from, to) {
            if f > t {
                anyhow::bail!("Start date {f} is after end date {t}.");
            }
        }
        Ok(Self { from, to })
    }

    /// Articles without a readable date are kept.
    pub fn contains(&self, article: &Article) -> bool {
        let Some(date) = article.published_date() else {
            return true;
        };
        self.from.is_none_or(|f| date >= f) && self.to.is_none_or(|t| date <= t)
    }
}

/// Keep articles inside `window`, then the first `max` of those.
pub fn select_articles(
    articles: Vec<Article>,
    window: &DateWindow,
    max: NonZeroUsize,
) -> Vec<Article> {
    let total = articles.len();
    let selected: Vec<Article> = articles
        .into_iter()
        .filter(|a| window.contains(a))
        .take(max.get())
        .collect();
    debug!(total, selected = selected.len(), "Selected articles");
    selected
}

/// Plain-text listing of titles and descriptions under a heading.
pub fn results_report(articles: &[Article], title: &str) -> String {
    if articles.is_empty() {
        return format!("No results found for {title}.");
    }

    let mut report = format!("\n{title}:\n\n");
    for article in articles {
        report.push_str(article.title());
        report.push('\n');
        match article.description.as_deref() {
            Some(description) if !description.is_empty() => {
                report.push_str(description);
                report.push_str("\n\n");
            }
            _ => report.push('\n'),
        }
    }
    report
}

/// Join every article's title and description into one text for analysis.
pub fn combined_text(articles: &[Article]) -> String {
    articles
        .iter()
        .map(|a| format!("{} {}", a.title(), a.description.as_deref().unwrap_or("")))
        .collect::<Vec<_>>()
        .join(" ")
}
