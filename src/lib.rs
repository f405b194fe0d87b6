//! Screen library crate (used by the `screen-rank` binary and integration tests).
//!
//! Ranks candidate documents (resumes) against a reference document (a job
//! description) and explains each score.
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`RelevanceScorer`], [`Strategy`], [`build_scorer`] - Strategy selection
//! - [`LexicalScorer`] - TF-IDF cosine similarity with keyword evidence
//! - [`SemanticScorer`] - Sentence-embedding similarity with sentence evidence
//! - [`ScoreRecord`], [`Evidence`] - Per-candidate results
//!
//! ## Ranking
//! - [`rank`], [`RankedResult`], [`RunOutcome`] - Ordering and run outcome
//! - [`screen`], [`screen_with`] - One full run
//!
//! ## Collaborators
//! - [`load_candidates`], [`read_reference`] - File ingestion
//! - [`write_report`], [`render_preview`] - CSV / JSON output
//! - [`Config`] - Environment-backed configuration
//!
//! ## Test Support
//! [`EncoderConfig::stub`] and [`SemanticScorer::stub`] run the semantic path
//! without model files.

pub mod config;
pub mod constants;
pub mod document;
pub mod embedding;
pub mod hashing;
pub mod ingest;
pub mod lexical;
pub mod pipeline;
pub mod ranking;
pub mod report;
pub mod scoring;
pub mod semantic;
pub mod similarity;
pub mod text;

pub use config::{Config, ConfigError};
pub use constants::{
    DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_FEATURES, DEFAULT_MODEL_NAME, DimValidationError,
    MAX_KEYWORD_EVIDENCE, MAX_SENTENCE_EVIDENCE, validate_embedding_dim,
};
pub use document::Document;
pub use embedding::{EmbeddingError, EncoderConfig, SentenceEmbedder};
pub use ingest::{IngestError, SourceKind, load_candidates, read_reference};
pub use lexical::{LexicalScorer, SparseVector, TermWeightSpace, TfidfVectorizer};
pub use pipeline::{screen, screen_with};
pub use ranking::{RankedResult, RunOutcome, rank};
pub use report::{ReportError, ReportFormat, render_preview, write_report};
pub use scoring::{
    Evidence, ParseStrategyError, RelevanceScorer, ScoreRecord, ScoringError, Strategy,
    build_scorer,
};
pub use semantic::SemanticScorer;
pub use similarity::cosine_similarity;
pub use text::{normalize, split_sentences};
