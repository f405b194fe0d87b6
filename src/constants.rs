//! Cross-cutting, shared constants.
//!
//! Evidence bounds and segmentation limits are shared between the scorers, the
//! report writer and the tests; keep them here so they cannot drift apart.

/// Sentence-embedding model used by the semantic strategy.
pub const DEFAULT_MODEL_NAME: &str = "all-MiniLM-L6-v2";

/// Directory the model files are expected in when nothing else is configured.
pub const DEFAULT_MODEL_DIR: &str = "models/all-MiniLM-L6-v2";

/// Output dimension of [`DEFAULT_MODEL_NAME`].
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Token limit applied before the encoder forward pass.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// TF-IDF vocabulary cap.
pub const DEFAULT_MAX_FEATURES: usize = 20_000;

/// Highest-weighted candidate terms considered for keyword evidence.
pub const KEYWORD_POOL_SIZE: usize = 10;

/// Upper bound on keyword evidence per candidate.
pub const MAX_KEYWORD_EVIDENCE: usize = 5;

/// Upper bound on sentence evidence per candidate.
pub const MAX_SENTENCE_EVIDENCE: usize = 2;

/// Segments shorter than this (in characters, after trimming) are not evidence.
pub const MIN_SENTENCE_CHARS: usize = 20;

/// Length of the fallback segment when no sentence survives.
pub const FALLBACK_SNIPPET_CHARS: usize = 200;

/// Rows printed after a run.
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

/// Error returned when an embedding dimension does not line up with the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// Vectors of different widths must never reach cosine similarity, so the
/// encoder checks its hidden size against the configured dimension on load.
///
/// # Example
///
/// ```
/// use screen::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// assert!(validate_embedding_dim(768, DEFAULT_EMBEDDING_DIM).is_err());
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evidence_bounds() {
        assert!(KEYWORD_POOL_SIZE >= MAX_KEYWORD_EVIDENCE);
        assert_eq!(MAX_KEYWORD_EVIDENCE, 5);
        assert_eq!(MAX_SENTENCE_EVIDENCE, 2);
    }

    #[test]
    fn test_validate_embedding_dim_match() {
        assert!(validate_embedding_dim(384, 384).is_ok());
    }

    #[test]
    fn test_validate_embedding_dim_zero() {
        assert_eq!(
            validate_embedding_dim(384, 0),
            Err(DimValidationError::ZeroDimension)
        );
    }

    #[test]
    fn test_validate_embedding_dim_mismatch() {
        assert_eq!(
            validate_embedding_dim(768, 384),
            Err(DimValidationError::DimensionMismatch {
                expected: 384,
                actual: 768
            })
        );
    }

    #[test]
    fn test_error_display() {
        let err = DimValidationError::ZeroDimension;
        assert_eq!(err.to_string(), "embedding dimension cannot be zero");

        let err = DimValidationError::DimensionMismatch {
            expected: 384,
            actual: 768,
        };
        assert!(err.to_string().contains("384"));
        assert!(err.to_string().contains("768"));
    }
}
