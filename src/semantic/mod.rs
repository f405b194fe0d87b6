//! Semantic relevance: sentence-embedding cosine similarity with sentence evidence.
//!
//! Text goes to the encoder as-is. Normalization would strip the stop-words and
//! punctuation the model was trained on.


use tracing::{debug, info};

use crate::constants::MAX_SENTENCE_EVIDENCE;
use crate::document::Document;
use crate::embedding::{EncoderConfig, SentenceEmbedder};
use crate::scoring::{Evidence, RelevanceScorer, ScoreRecord, ScoringError, Strategy};
use crate::similarity::cosine_similarity;
use crate::text::split_sentences;

/// Embedding-based scorer. Owns the loaded model for the whole run.
#[derive(Debug)]
pub struct SemanticScorer {
    embedder: SentenceEmbedder,
}

impl SemanticScorer {
    /// Loads the embedding model. Failure is fatal for this strategy.
    pub fn load(config: EncoderConfig) -> Result<Self, ScoringError> {
        let model_name = config.model_name.clone();
        let embedder =
            SentenceEmbedder::load(config).map_err(|source| ScoringError::ResourceUnavailable {
                resource: format!("embedding model '{}'", model_name),
                source,
            })?;

        Ok(Self { embedder })
    }

    /// Wraps an already loaded embedder.
    pub fn with_embedder(embedder: SentenceEmbedder) -> Self {
        Self { embedder }
    }

    /// Scorer backed by the deterministic stub embedder.
    pub fn stub() -> Result<Self, ScoringError> {
        Self::load(EncoderConfig::stub())
    }

    pub fn embedder(&self) -> &SentenceEmbedder {
        &self.embedder
    }

    /// Scores every candidate against `reference`, in input order.
    pub fn score_semantic(
        &self,
        reference: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoreRecord>, ScoringError> {
        if candidates.is_empty() {
            debug!("No candidates provided for semantic scoring");
            return Ok(Vec::new());
        }

        let reference_embedding = self.embedder.embed(reference)?;
        info!(
            num_candidates = candidates.len(),
            reference_len = reference.len(),
            "Embedded reference document"
        );

        candidates
            .iter()
            .map(|doc| self.score_candidate(&reference_embedding, doc))
            .collect()
    }

    fn score_candidate(
        &self,
        reference_embedding: &[f32],
        doc: &Document,
    ) -> Result<ScoreRecord, ScoringError> {
        let document_embedding = self.embedder.embed(&doc.text)?;
        let score = cosine_similarity(&document_embedding, reference_embedding);

        let sentences = split_sentences(&doc.text);
        let sentence_refs: Vec<&str> = sentences.iter().map(String::as_str).collect();
        let sentence_embeddings = self.embedder.embed_batch(&sentence_refs)?;
        let evidence = top_sentences(&sentences, &sentence_embeddings, reference_embedding);

        debug!(
            candidate = %doc.name,
            score,
            sentences = sentences.len(),
            "Scored candidate (semantic)"
        );

        Ok(ScoreRecord::new(
            doc.name.clone(),
            score,
            Evidence::Sentences(evidence),
        ))
    }
}

impl RelevanceScorer for SemanticScorer {
    fn strategy(&self) -> Strategy {
        Strategy::Semantic
    }

    fn score(
        &self,
        reference: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoreRecord>, ScoringError> {
        self.score_semantic(reference, candidates)
    }
}

/// Up to [`MAX_SENTENCE_EVIDENCE`] sentences most similar to the reference.
///
/// Equal similarities keep sentence order. Blank segments (the fallback for
/// empty text) are never evidence.
fn top_sentences(
    sentences: &[String],
    embeddings: &[Vec<f32>],
    reference_embedding: &[f32],
) -> Vec<String> {
    let mut ranked: Vec<(usize, f64)> = embeddings
        .iter()
        .map(|embedding| cosine_similarity(embedding, reference_embedding))
        .enumerate()
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));

    ranked
        .into_iter()
        .map(|(idx, _)| &sentences[idx])
        .filter(|sentence| !sentence.trim().is_empty())
        .take(MAX_SENTENCE_EVIDENCE)
        .cloned()
        .collect()
}
