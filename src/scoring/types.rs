use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

/// Scoring strategy; exactly one is active per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// TF-IDF term overlap.
    #[default]
    Lexical,
    /// Sentence-embedding similarity.
    Semantic,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Lexical => "lexical",
            Strategy::Semantic => "semantic",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown strategy '{value}': expected 'lexical' (or 'tfidf') or 'semantic' (or 'embeddings')")]
pub struct ParseStrategyError {
    pub value: String,
}

impl FromStr for Strategy {
    type Err = ParseStrategyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lexical" | "tfidf" => Ok(Strategy::Lexical),
            "semantic" | "embeddings" => Ok(Strategy::Semantic),
            _ => Err(ParseStrategyError {
                value: s.to_string(),
            }),
        }
    }
}

/// Human-readable justification attached to a score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "items", rename_all = "lowercase")]
pub enum Evidence {
    /// Matched terms, weight-descending (lexical).
    Keywords(Vec<String>),
    /// Most similar sentences, similarity-descending (semantic).
    Sentences(Vec<String>),
}

impl Evidence {
    pub fn items(&self) -> &[String] {
        match self {
            Evidence::Keywords(items) | Evidence::Sentences(items) => items,
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }

    /// Evidence item at `idx`, or `""` when absent.
    pub fn get_or_empty(&self, idx: usize) -> &str {
        self.items().get(idx).map(String::as_str).unwrap_or("")
    }

    /// Items joined with `;`.
    pub fn joined(&self) -> String {
        self.items().join(";")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Relevance of one candidate to the reference document.
pub struct ScoreRecord {
    /// Candidate identifier.
    pub candidate: String,
    /// Cosine similarity in `[-1, 1]`.
    pub score: f64,
    /// Why the candidate scored the way it did.
    pub evidence: Evidence,
}

impl ScoreRecord {
    pub fn new(candidate: impl Into<String>, score: f64, evidence: Evidence) -> Self {
        Self {
            candidate: candidate.into(),
            score,
            evidence,
        }
    }
}
