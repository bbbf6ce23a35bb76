//! Step-level alignment and scoring between two protocol embeddings.
//!
//! The engine is pure and synchronous: normalize both vector sequences, build
//! the pairwise cosine similarity matrix, solve the maximum-weight one-to-one
//! matching between the two step sequences (Kuhn–Munkres), and aggregate the
//! matching into a score in `[0, 1]`. It consumes embeddings, it never
//! produces them, and it holds no state between calls.

mod assignment;
mod compare;
mod embedding;
mod error;
mod matrix;
mod normalize;
mod score;

pub use compare::{AlignedPair, ComparisonResult, compare};
pub use embedding::ProtocolEmbedding;
pub use error::AlignError;
pub use matrix::SimilarityMatrix;
