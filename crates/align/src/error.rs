use thiserror::Error;

/// Errors produced by the alignment engine.
///
/// A comparison is all-or-nothing: it yields a complete result or exactly one
/// of these, never a partially computed result.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AlignError {
  /// The two vector sets do not share an embedding dimension.
  #[error("embedding dimension mismatch: expected {expected}, got {got}")]
  DimensionMismatch { expected: usize, got: usize },

  /// A protocol with zero steps cannot be aligned.
  #[error("protocol has no steps")]
  EmptySequence,

  /// A zero-norm or non-finite vector cannot be normalized.
  #[error("step vector {index} has zero or non-finite norm")]
  DegenerateVector { index: usize },

  /// The solver could not produce a complete matching for a well-formed
  /// matrix. Never expected in normal operation.
  #[error("assignment solver failed to produce a complete matching")]
  SolverFailure,
}
