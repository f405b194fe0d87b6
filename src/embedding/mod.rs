//! Embedding + model utilities.
//!
//! - [`encoder`] provides sentence embeddings used by [`crate::semantic`].
//! - [`bert`] wraps the candle BERT model with mean pooling.

/// BERT encoder with mean pooling.
pub mod bert;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
/// Sentence embedder.
pub mod encoder;
mod error;
/// Tokenizer loading helpers.
pub mod utils;

pub use encoder::{EncoderConfig, SentenceEmbedder};
pub use error::EmbeddingError;
