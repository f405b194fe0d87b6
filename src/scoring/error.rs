use thiserror::Error;

use crate::embedding::EmbeddingError;

#[derive(Debug, Error)]
pub enum ScoringError {
    /// A resource the strategy cannot run without (the embedding model) failed to load.
    #[error("{resource} unavailable: {source}")]
    ResourceUnavailable {
        resource: String,
        #[source]
        source: EmbeddingError,
    },

    #[error("embedding failed: {0}")]
    Embedding(#[from] EmbeddingError),
}

impl ScoringError {
    pub fn is_resource_unavailable(&self) -> bool {
        matches!(self, ScoringError::ResourceUnavailable { .. })
    }
}
