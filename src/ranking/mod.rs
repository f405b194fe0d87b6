//! Ordering of score records and the outcome of a run.


use serde::Serialize;

use crate::scoring::ScoreRecord;

/// Score records sorted by descending score. Built once, never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedResult {
    records: Vec<ScoreRecord>,
}

impl RankedResult {
    pub fn records(&self) -> &[ScoreRecord] {
        &self.records
    }

    /// The first `n` records; a presentation preview, not a ranking rule.
    pub fn head(&self, n: usize) -> &[ScoreRecord] {
        &self.records[..n.min(self.records.len())]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<ScoreRecord> {
        self.records
    }
}

/// Sorts records by score, highest first.
///
/// The sort is stable: records with equal scores keep their input order.
/// Nothing is filtered or truncated. NaN scores sort last.
pub fn rank(mut records: Vec<ScoreRecord>) -> RankedResult {
    records.sort_by(|a, b| sort_key(b.score).total_cmp(&sort_key(a.score)));
    RankedResult { records }
}

fn sort_key(score: f64) -> f64 {
    if score.is_nan() { f64::NEG_INFINITY } else { score }
}

#[derive(Debug, Clone, PartialEq)]
/// Result of a completed run.
pub enum RunOutcome {
    /// Candidates were scored and ranked.
    Ranked(RankedResult),
    /// The candidate source held nothing to score.
    NoCandidates {
        /// Where candidates were looked for (a directory, usually).
        source: String,
    },
}

impl RunOutcome {
    /// Returns the ranking, if there was one.
    pub fn ranked(&self) -> Option<&RankedResult> {
        match self {
            RunOutcome::Ranked(ranked) => Some(ranked),
            RunOutcome::NoCandidates { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.ranked().is_none_or(RankedResult::is_empty)
    }

    /// Returns a short status string.
    pub fn debug_status(&self) -> &'static str {
        match self {
            RunOutcome::Ranked(_) => "RANKED",
            RunOutcome::NoCandidates { .. } => "NO_CANDIDATES",
        }
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RunOutcome::Ranked(ranked) => write!(f, "RANKED ({} candidates)", ranked.len()),
            RunOutcome::NoCandidates { source } => write!(f, "No resumes found in {}", source),
        }
    }
}
