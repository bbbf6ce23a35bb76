use crate::AlignError;

/// Ordered step embeddings for one protocol, one vector per step in ascending
/// step order.
///
/// Construction validates the sequence once: at least one step, and every
/// vector sharing the same dimension. The vectors are never mutated after
/// that.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolEmbedding {
  vectors: Vec<Vec<f32>>,
  dim: usize,
}

impl ProtocolEmbedding {
  pub fn new(vectors: Vec<Vec<f32>>) -> Result<Self, AlignError> {
    let Some(first) = vectors.first() else {
      return Err(AlignError::EmptySequence);
    };

    let dim = first.len();
    if dim == 0 {
      return Err(AlignError::DegenerateVector { index: 0 });
    }

    for v in &vectors {
      if v.len() != dim {
        return Err(AlignError::DimensionMismatch {
          expected: dim,
          got: v.len(),
        });
      }
    }

    Ok(Self { vectors, dim })
  }

  /// Number of steps.
  #[must_use]
  pub fn len(&self) -> usize {
    self.vectors.len()
  }

  #[must_use]
  pub fn is_empty(&self) -> bool {
    self.vectors.is_empty()
  }

  /// Embedding dimension shared by every step vector.
  #[must_use]
  pub const fn dim(&self) -> usize {
    self.dim
  }

  #[must_use]
  pub fn vectors(&self) -> &[Vec<f32>] {
    &self.vectors
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn rejects_empty_sequence() {
    assert_eq!(
      ProtocolEmbedding::new(vec![]).unwrap_err(),
      AlignError::EmptySequence
    );
  }

  #[test]
  fn rejects_ragged_dimensions() {
    let err = ProtocolEmbedding::new(vec![vec![1.0, 0.0], vec![1.0]]).unwrap_err();
    assert_eq!(err, AlignError::DimensionMismatch { expected: 2, got: 1 });
  }

  #[test]
  fn rejects_zero_dimension() {
    let err = ProtocolEmbedding::new(vec![vec![]]).unwrap_err();
    assert_eq!(err, AlignError::DegenerateVector { index: 0 });
  }

  #[test]
  fn exposes_len_and_dim() {
    let p = ProtocolEmbedding::new(vec![vec![1.0, 0.0], vec![0.0, 1.0]]).unwrap();
    assert_eq!(p.len(), 2);
    assert_eq!(p.dim(), 2);
    assert!(!p.is_empty());
  }
}
