//! Lexical relevance: TF-IDF cosine similarity with keyword evidence.
//!
//! Reference and candidates are normalized with [`crate::text::normalize`] and
//! fit into one [`TermWeightSpace`] before any similarity is computed; vectors
//! from different fits are never compared. The reference is the last row of
//! the fit.

pub mod vectorizer;

#[cfg(test)]
mod tests;

pub use vectorizer::{SparseVector, TermWeightSpace, TfidfVectorizer};

use std::collections::HashSet;

use tracing::debug;

use crate::constants::{DEFAULT_MAX_FEATURES, KEYWORD_POOL_SIZE, MAX_KEYWORD_EVIDENCE};
use crate::document::Document;
use crate::scoring::{Evidence, RelevanceScorer, ScoreRecord, ScoringError, Strategy};
use crate::text::normalize;

/// Term-overlap scorer. Has no external resources, so it cannot fail.
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    vectorizer: TfidfVectorizer,
}

impl Default for LexicalScorer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_FEATURES)
    }
}

impl LexicalScorer {
    pub fn new(max_features: usize) -> Self {
        Self {
            vectorizer: TfidfVectorizer::new(max_features),
        }
    }

    pub fn max_features(&self) -> usize {
        self.vectorizer.max_features()
    }

    /// Scores every candidate against `reference`, in input order.
    pub fn score_lexical(&self, reference: &str, candidates: &[Document]) -> Vec<ScoreRecord> {
        if candidates.is_empty() {
            debug!("No candidates provided for lexical scoring");
            return Vec::new();
        }

        let normalized_reference = normalize(reference);
        let normalized: Vec<String> = candidates.iter().map(|doc| normalize(&doc.text)).collect();

        let mut corpus: Vec<&str> = normalized.iter().map(String::as_str).collect();
        corpus.push(&normalized_reference);

        let (space, rows) = self.vectorizer.fit_transform(&corpus);
        let Some((reference_vector, candidate_rows)) = rows.split_last() else {
            return Vec::new();
        };

        debug!(
            num_candidates = candidates.len(),
            vocabulary_size = space.len(),
            reference_terms = reference_vector.entries().len(),
            "Fitted term-weight space"
        );

        let reference_tokens: HashSet<&str> = normalized_reference.split_whitespace().collect();

        candidates
            .iter()
            .zip(candidate_rows)
            .zip(&normalized)
            .map(|((doc, row), text)| {
                let score = row.cosine(reference_vector);
                let keywords = matched_keywords(&space, text, &reference_tokens);

                debug!(
                    candidate = %doc.name,
                    score,
                    keywords = keywords.len(),
                    "Scored candidate (lexical)"
                );

                ScoreRecord::new(doc.name.clone(), score, Evidence::Keywords(keywords))
            })
            .collect()
    }
}

impl RelevanceScorer for LexicalScorer {
    fn strategy(&self) -> Strategy {
        Strategy::Lexical
    }

    fn score(
        &self,
        reference: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoreRecord>, ScoringError> {
        Ok(self.score_lexical(reference, candidates))
    }
}

/// Highest-weighted candidate terms that overlap the reference vocabulary.
fn matched_keywords(
    space: &TermWeightSpace,
    normalized_candidate: &str,
    reference_tokens: &HashSet<&str>,
) -> Vec<String> {
    if normalized_candidate.is_empty() {
        return Vec::new();
    }

    space
        .transform(normalized_candidate)
        .top_terms(KEYWORD_POOL_SIZE)
        .into_iter()
        .filter_map(|(idx, _)| space.term(idx))
        .filter(|term| overlaps_reference(term, reference_tokens))
        .take(MAX_KEYWORD_EVIDENCE)
        .map(str::to_string)
        .collect()
}

/// Loose two-way substring match between a term and any reference token.
///
/// Short tokens can match unrelated words (`sql` inside `mysql`); the matching
/// is a display heuristic and never affects the score.
pub fn overlaps_reference(term: &str, reference_tokens: &HashSet<&str>) -> bool {
    reference_tokens
        .iter()
        .any(|token| term.contains(*token) || token.contains(term))
}
