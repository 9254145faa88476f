//! Client-side filtering and aggregation over search results

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::types::SearchResult;

/// Results pointing at PDF documents, in input order
pub fn pdf_results(results: &[SearchResult]) -> Vec<&SearchResult> {
    results.iter().filter(|r| r.is_pdf()).collect()
}

/// Results scoring strictly above `threshold`, in input order
pub fn above_score(results: &[SearchResult], threshold: f64) -> Vec<&SearchResult> {
    results.iter().filter(|r| r.score > threshold).collect()
}

/// Distinct URLs in first-seen order
pub fn unique_urls(results: &[SearchResult]) -> Vec<&str> {
    let mut seen = HashSet::new();
    results
        .iter()
        .map(|r| r.url.as_str())
        .filter(|url| seen.insert(*url))
        .collect()
}

/// Score statistics of a result set
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    pub count: usize,
    pub average: f64,
    pub min: f64,
    pub max: f64,
}

impl ScoreSummary {
    /// Summarize scores; all fields are zero for an empty slice.
    pub fn from_results(results: &[SearchResult]) -> Self {
        if results.is_empty() {
            return Self::default();
        }

        let (sum, min, max) = results.iter().fold(
            (0.0, f64::INFINITY, f64::NEG_INFINITY),
            |(sum, min, max), r| (sum + r.score, min.min(r.score), max.max(r.score)),
        );

        Self {
            count: results.len(),
            average: sum / results.len() as f64,
            min,
            max,
        }
    }
}

/// Split of a result set into PDF and HTML documents
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentKinds {
    pub pdf: usize,
    /// Everything that is not a PDF
    pub html: usize,
}

impl DocumentKinds {
    pub fn from_results(results: &[SearchResult]) -> Self {
        let pdf = results.iter().filter(|r| r.is_pdf()).count();
        Self {
            pdf,
            html: results.len() - pdf,
        }
    }
}
