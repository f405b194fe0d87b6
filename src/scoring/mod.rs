//! Scoring strategies behind one interface.
//!
//! [`RelevanceScorer`] is implemented by [`LexicalScorer`](crate::lexical::LexicalScorer)
//! and [`SemanticScorer`](crate::semantic::SemanticScorer). Callers pick one
//! through [`Strategy`] (see [`build_scorer`]); strategies are never blended and
//! never fall back to each other.
//!
//! Records come back in candidate input order. Ordering is the job of
//! [`crate::ranking`].

pub mod error;
pub mod types;


pub use error::ScoringError;
pub use types::{Evidence, ParseStrategyError, ScoreRecord, Strategy};

use tracing::info;

use crate::config::Config;
use crate::constants::DEFAULT_MODEL_NAME;
use crate::document::Document;
use crate::embedding::EncoderConfig;
use crate::lexical::LexicalScorer;
use crate::semantic::SemanticScorer;

/// One relevance strategy.
pub trait RelevanceScorer {
    /// The strategy this scorer implements.
    fn strategy(&self) -> Strategy;

    /// Scores each candidate against `reference`.
    ///
    /// Returns one record per candidate in input order; an empty candidate set
    /// yields an empty vector. Degenerate (empty) documents get a record, not an error.
    fn score(
        &self,
        reference: &str,
        candidates: &[Document],
    ) -> Result<Vec<ScoreRecord>, ScoringError>;
}

/// Builds the scorer selected by `config.strategy`.
///
/// For [`Strategy::Semantic`] this loads the embedding model, so call it once
/// per run and reuse the scorer.
pub fn build_scorer(config: &Config) -> Result<Box<dyn RelevanceScorer>, ScoringError> {
    match config.strategy {
        Strategy::Lexical => {
            info!(max_features = config.max_features, "Using lexical scorer");
            Ok(Box::new(LexicalScorer::new(config.max_features)))
        }
        Strategy::Semantic => {
            info!(
                model = DEFAULT_MODEL_NAME,
                model_path = %config.model_path.display(),
                "Using semantic scorer"
            );
            let encoder_config = EncoderConfig::new(config.model_path.clone());
            Ok(Box::new(SemanticScorer::load(encoder_config)?))
        }
    }
}
